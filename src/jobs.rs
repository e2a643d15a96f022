//! Job listing browser.
//!
//! Client-side job board shown to onboarded users: mock seed data plus the
//! filter and sort semantics the listing page exposes. Pure functions over
//! in-memory data; pagination and real backend search are out of scope.

use serde::Serialize;

/// Employment types offered by the filter panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum JobType {
    FullTime,
    PartTime,
    Freelance,
    Contract,
}

impl JobType {
    pub fn label(&self) -> &'static str {
        match self {
            JobType::FullTime => "Full Time",
            JobType::PartTime => "Part Time",
            JobType::Freelance => "Freelance",
            JobType::Contract => "Contract",
        }
    }
}

/// Specialization categories offered by the filter panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Specialization {
    It,
    Design,
    Marketing,
    Finance,
}

impl Specialization {
    pub fn label(&self) -> &'static str {
        match self {
            Specialization::It => "IT & Software",
            Specialization::Design => "Design",
            Specialization::Marketing => "Marketing",
            Specialization::Finance => "Finance",
        }
    }
}

/// Minimum-education options offered by the filter panel. A job's education
/// requirement stays free text, so matching is by keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EducationLevel {
    Sma,
    D3,
    S1,
    S2,
}

impl EducationLevel {
    pub fn label(&self) -> &'static str {
        match self {
            EducationLevel::Sma => "SMA/SMK",
            EducationLevel::D3 => "D3",
            EducationLevel::S1 => "S1",
            EducationLevel::S2 => "S2",
        }
    }

    /// Token looked for in the job's education text.
    fn keyword(&self) -> &'static str {
        match self {
            EducationLevel::Sma => "SMA",
            EducationLevel::D3 => "D3",
            EducationLevel::S1 => "S1",
            EducationLevel::S2 => "S2",
        }
    }

    fn matches(&self, job: &Job) -> bool {
        job.education.to_uppercase().contains(self.keyword())
    }
}

/// One job posting as shown on the listing page.
#[derive(Debug, Clone, Serialize)]
pub struct Job {
    pub id: &'static str,
    pub title: &'static str,
    pub company: &'static str,
    pub location: &'static str,
    pub job_type: JobType,
    /// `None` for roles outside the filterable categories.
    pub specialization: Option<Specialization>,
    pub education: &'static str,
    /// Free-text description of accommodated conditions.
    pub disabilities: &'static str,
    pub salary_min: u64,
    pub salary_max: u64,
    /// Days since the posting went live.
    pub posted_days: u32,
}

impl Job {
    /// Salary range the card displays, e.g. `Rp4.000.000 - Rp6.000.000`.
    pub fn salary_display(&self) -> String {
        format!(
            "{} - {}",
            format_rupiah(self.salary_min),
            format_rupiah(self.salary_max)
        )
    }
}

/// Group rupiah amounts with dots, `4000000` -> `Rp4.000.000`.
pub fn format_rupiah(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 2);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    format!("Rp{grouped}")
}

/// Seed data for the listing page.
pub const JOBS: &[Job] = &[
    Job {
        id: "1",
        title: "Customer Support",
        company: "PT Digital Care",
        location: "Jakarta, Indonesia",
        job_type: JobType::FullTime,
        specialization: None,
        education: "Minimal SMA/SMK",
        disabilities: "Tunarungu, Disabilitas Fisik",
        salary_min: 4_000_000,
        salary_max: 6_000_000,
        posted_days: 2,
    },
    Job {
        id: "2",
        title: "Frontend Developer",
        company: "Techindo Solutions",
        location: "Jakarta, Indonesia",
        job_type: JobType::FullTime,
        specialization: Some(Specialization::It),
        education: "Minimal D3/S1 Teknik Informatika",
        disabilities: "Tunanetra, Tunarungu",
        salary_min: 7_000_000,
        salary_max: 12_000_000,
        posted_days: 1,
    },
    Job {
        id: "3",
        title: "Barista",
        company: "Kopi Kita",
        location: "Bandung, Indonesia",
        job_type: JobType::PartTime,
        specialization: None,
        education: "Minimal SMP/SMA",
        disabilities: "Disabilitas Fisik (Ringan)",
        salary_min: 2_500_000,
        salary_max: 3_500_000,
        posted_days: 3,
    },
    Job {
        id: "4",
        title: "Data Entry Specialist",
        company: "AdminPro",
        location: "Surabaya, Indonesia",
        job_type: JobType::Contract,
        specialization: Some(Specialization::It),
        education: "Minimal SMA/D3",
        disabilities: "Tunarungu, Disabilitas Fisik",
        salary_min: 3_500_000,
        salary_max: 5_000_000,
        posted_days: 5,
    },
    Job {
        id: "5",
        title: "Desainer Grafis",
        company: "CreativeHouse",
        location: "Yogyakarta, Indonesia",
        job_type: JobType::Freelance,
        specialization: Some(Specialization::Design),
        education: "Minimal D3/S1 Desain Komunikasi Visual",
        disabilities: "Tunanetra (Ringan), Disabilitas Fisik",
        salary_min: 5_000_000,
        salary_max: 8_000_000,
        posted_days: 2,
    },
    Job {
        id: "6",
        title: "Operator Produksi",
        company: "Manufaktur Sejahtera",
        location: "Surabaya, Indonesia",
        job_type: JobType::FullTime,
        specialization: None,
        education: "Minimal SMA/SMK",
        disabilities: "Tunarungu, Disabilitas Fisik (Ringan)",
        salary_min: 3_000_000,
        salary_max: 4_500_000,
        posted_days: 4,
    },
];

/// Inclusive monthly salary band, open-ended when `max` is `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SalaryBand {
    pub min: u64,
    pub max: Option<u64>,
}

impl SalaryBand {
    /// True when the job's salary range overlaps this band.
    pub fn matches(&self, job: &Job) -> bool {
        job.salary_max >= self.min && self.max.map_or(true, |max| job.salary_min <= max)
    }
}

/// Sort orders offered by the listing page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JobSort {
    /// Seed relevance order.
    #[default]
    Relevant,
    /// Most recently posted first.
    Newest,
    /// Highest salary ceiling first.
    HighestSalary,
}

/// Combined filter state of the listing page's controls.
#[derive(Debug, Clone, Default)]
pub struct JobFilter {
    /// Case-insensitive search over title, company, and location.
    pub query: Option<String>,
    pub job_type: Option<JobType>,
    /// Substring of the accommodated-conditions text, e.g. "Tunarungu".
    pub disability: Option<String>,
    pub education: Option<EducationLevel>,
    pub salary: Option<SalaryBand>,
    pub specialization: Option<Specialization>,
}

impl JobFilter {
    fn matches(&self, job: &Job) -> bool {
        if let Some(query) = &self.query {
            let query = query.to_lowercase();
            let haystack = format!("{} {} {}", job.title, job.company, job.location);
            if !haystack.to_lowercase().contains(&query) {
                return false;
            }
        }
        if let Some(job_type) = self.job_type {
            if job.job_type != job_type {
                return false;
            }
        }
        if let Some(disability) = &self.disability {
            if !job
                .disabilities
                .to_lowercase()
                .contains(&disability.to_lowercase())
            {
                return false;
            }
        }
        if let Some(level) = self.education {
            if !level.matches(job) {
                return false;
            }
        }
        if let Some(band) = &self.salary {
            if !band.matches(job) {
                return false;
            }
        }
        if let Some(specialization) = self.specialization {
            if job.specialization != Some(specialization) {
                return false;
            }
        }
        true
    }
}

/// Filter and order the listing in one pass.
pub fn browse(jobs: &[Job], filter: &JobFilter, sort: JobSort) -> Vec<Job> {
    let mut matched: Vec<Job> = jobs.iter().filter(|job| filter.matches(job)).cloned().collect();
    match sort {
        JobSort::Relevant => {}
        JobSort::Newest => matched.sort_by_key(|job| job.posted_days),
        JobSort::HighestSalary => {
            matched.sort_by(|a, b| b.salary_max.cmp(&a.salary_max));
        }
    }
    matched
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_rupiah() {
        assert_eq!(format_rupiah(4_000_000), "Rp4.000.000");
        assert_eq!(format_rupiah(12_000_000), "Rp12.000.000");
        assert_eq!(format_rupiah(950), "Rp950");
    }

    #[test]
    fn test_salary_display() {
        assert_eq!(JOBS[0].salary_display(), "Rp4.000.000 - Rp6.000.000");
    }

    #[test]
    fn test_query_filter_is_case_insensitive() {
        let filter = JobFilter {
            query: Some("frontend".to_string()),
            ..Default::default()
        };
        let hits = browse(JOBS, &filter, JobSort::Relevant);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "2");

        let by_city = JobFilter {
            query: Some("surabaya".to_string()),
            ..Default::default()
        };
        assert_eq!(browse(JOBS, &by_city, JobSort::Relevant).len(), 2);
    }

    #[test]
    fn test_disability_filter() {
        let filter = JobFilter {
            disability: Some("Tunanetra".to_string()),
            ..Default::default()
        };
        let hits = browse(JOBS, &filter, JobSort::Relevant);
        let ids: Vec<&str> = hits.iter().map(|job| job.id).collect();
        assert_eq!(ids, ["2", "5"]);
    }

    #[test]
    fn test_job_type_filter() {
        let part_time = JobFilter {
            job_type: Some(JobType::PartTime),
            ..Default::default()
        };
        let ids: Vec<&str> = browse(JOBS, &part_time, JobSort::Relevant)
            .iter()
            .map(|job| job.id)
            .collect();
        assert_eq!(ids, ["3"]);

        let full_time = JobFilter {
            job_type: Some(JobType::FullTime),
            ..Default::default()
        };
        assert_eq!(browse(JOBS, &full_time, JobSort::Relevant).len(), 3);
        assert_eq!(JobType::FullTime.label(), "Full Time");
    }

    #[test]
    fn test_education_filter_matches_free_text() {
        let s1 = JobFilter {
            education: Some(EducationLevel::S1),
            ..Default::default()
        };
        let ids: Vec<&str> = browse(JOBS, &s1, JobSort::Relevant)
            .iter()
            .map(|job| job.id)
            .collect();
        assert_eq!(ids, ["2", "5"]);

        // "Minimal SMA/D3" and "Minimal SMP/SMA" both count as SMA.
        let sma = JobFilter {
            education: Some(EducationLevel::Sma),
            ..Default::default()
        };
        let ids: Vec<&str> = browse(JOBS, &sma, JobSort::Relevant)
            .iter()
            .map(|job| job.id)
            .collect();
        assert_eq!(ids, ["1", "3", "4", "6"]);

        let s2 = JobFilter {
            education: Some(EducationLevel::S2),
            ..Default::default()
        };
        assert!(browse(JOBS, &s2, JobSort::Relevant).is_empty());
    }

    #[test]
    fn test_specialization_filter() {
        let it = JobFilter {
            specialization: Some(Specialization::It),
            ..Default::default()
        };
        let ids: Vec<&str> = browse(JOBS, &it, JobSort::Relevant)
            .iter()
            .map(|job| job.id)
            .collect();
        assert_eq!(ids, ["2", "4"]);
        assert_eq!(Specialization::It.label(), "IT & Software");

        // Uncategorized jobs never match a specialization filter.
        let design = JobFilter {
            specialization: Some(Specialization::Design),
            ..Default::default()
        };
        let ids: Vec<&str> = browse(JOBS, &design, JobSort::Relevant)
            .iter()
            .map(|job| job.id)
            .collect();
        assert_eq!(ids, ["5"]);
    }

    #[test]
    fn test_filters_combine_conjunctively() {
        let filter = JobFilter {
            query: Some("jakarta".to_string()),
            job_type: Some(JobType::FullTime),
            ..Default::default()
        };
        let ids: Vec<&str> = browse(JOBS, &filter, JobSort::Relevant)
            .iter()
            .map(|job| job.id)
            .collect();
        assert_eq!(ids, ["1", "2"]);
    }

    #[test]
    fn test_salary_band_overlap() {
        let band = SalaryBand {
            min: 5_000_000,
            max: Some(10_000_000),
        };
        let filter = JobFilter {
            salary: Some(band),
            ..Default::default()
        };
        let ids: Vec<&str> = browse(JOBS, &filter, JobSort::Relevant)
            .iter()
            .map(|job| job.id)
            .collect();
        // Overlap includes jobs whose range merely touches the band.
        assert_eq!(ids, ["1", "2", "4", "5"]);

        let open_ended = SalaryBand {
            min: 10_000_000,
            max: None,
        };
        assert!(open_ended.matches(&JOBS[1]));
        assert!(!open_ended.matches(&JOBS[0]));
    }

    #[test]
    fn test_sort_orders() {
        let newest = browse(JOBS, &JobFilter::default(), JobSort::Newest);
        assert_eq!(newest[0].id, "2");
        assert_eq!(newest.last().unwrap().id, "4");

        let richest = browse(JOBS, &JobFilter::default(), JobSort::HighestSalary);
        assert_eq!(richest[0].id, "2");
        assert_eq!(richest.last().unwrap().id, "3");
    }
}
