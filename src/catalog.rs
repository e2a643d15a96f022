//! Field Catalog
//!
//! Static, ordered description of the onboarding form: which fields appear
//! on which step, their input kinds, and the option lists for multi-select
//! kinds. The catalog is read-only input to the validator and to whatever
//! renders the form.

use serde::Serialize;

/// Number of wizard steps.
pub const TOTAL_STEPS: u8 = 3;

/// Input kind of a single form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Text,
    Email,
    Tel,
    Textarea,
    /// Committed via the wizard's date setter, not the string value.
    Date,
    /// Upload kinds are never blocking, even when marked required.
    File,
    Avatar,
    MultiSelect,
}

impl FieldKind {
    /// Upload kinds are satisfied regardless of value (optional by design).
    pub fn is_upload(&self) -> bool {
        matches!(self, FieldKind::File | FieldKind::Avatar)
    }
}

/// One selectable option of a multi-select field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChoiceOption {
    pub id: u32,
    pub name: &'static str,
}

/// Static description of one form field.
#[derive(Debug, Clone)]
pub struct FieldSpec {
    /// Unique within the whole catalog, not just within a step.
    pub id: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub placeholder: Option<&'static str>,
    pub hint: Option<&'static str>,
    /// Non-empty only for multi-select kinds.
    pub options: &'static [ChoiceOption],
}

impl FieldSpec {
    const fn new(id: &'static str, label: &'static str, kind: FieldKind, required: bool) -> Self {
        Self {
            id,
            label,
            kind,
            required,
            placeholder: None,
            hint: None,
            options: &[],
        }
    }

    const fn placeholder(mut self, text: &'static str) -> Self {
        self.placeholder = Some(text);
        self
    }

    const fn hint(mut self, text: &'static str) -> Self {
        self.hint = Some(text);
        self
    }

    const fn options(mut self, options: &'static [ChoiceOption]) -> Self {
        self.options = options;
        self
    }
}

/// Selectable skills offered during onboarding.
pub const SKILLS: &[ChoiceOption] = &[
    ChoiceOption { id: 1, name: "Programming" },
    ChoiceOption { id: 2, name: "Design" },
    ChoiceOption { id: 3, name: "Writing" },
    ChoiceOption { id: 4, name: "Marketing" },
    ChoiceOption { id: 5, name: "Project Management" },
    ChoiceOption { id: 6, name: "Data Analysis" },
    ChoiceOption { id: 7, name: "Public Speaking" },
    ChoiceOption { id: 8, name: "Leadership" },
];

/// Selectable disability conditions offered during onboarding.
pub const DISABILITIES: &[ChoiceOption] = &[
    ChoiceOption { id: 1, name: "Visual Impairment" },
    ChoiceOption { id: 2, name: "Hearing Impairment" },
    ChoiceOption { id: 3, name: "Mobility Impairment" },
    ChoiceOption { id: 4, name: "Cognitive Impairment" },
    ChoiceOption { id: 5, name: "Speech Impairment" },
    ChoiceOption { id: 6, name: "Mental Health Condition" },
    ChoiceOption { id: 7, name: "Chronic Illness" },
    ChoiceOption { id: 8, name: "Learning Disability" },
];

const STEP_ONE: &[FieldSpec] = &[
    FieldSpec::new("nama_lengkap", "Nama Lengkap", FieldKind::Text, true)
        .placeholder("Masukkan nama lengkap Anda")
        .hint("Nama ini akan ditampilkan di profil Anda"),
    FieldSpec::new("email", "Email", FieldKind::Email, false)
        .placeholder("email@example.com")
        .hint("Email ini akan ditampilkan di profil Anda"),
    FieldSpec::new("phone", "Nomor Telepon", FieldKind::Tel, false)
        .placeholder("Masukkan nomor telepon")
        .hint("Nomor telepon ini akan ditampilkan di profil Anda"),
];

const STEP_TWO: &[FieldSpec] = &[
    FieldSpec::new("bio", "Bio", FieldKind::Textarea, false)
        .placeholder("Ceritakan sedikit tentang diri Anda"),
    FieldSpec::new("interest", "Minat", FieldKind::Text, true)
        .placeholder("Minat dan keahlian Anda"),
    FieldSpec::new("dob", "Tanggal Lahir", FieldKind::Date, true)
        .placeholder("Pilih tanggal lahir"),
    FieldSpec::new("location", "Lokasi", FieldKind::Text, true).placeholder("Kota, Provinsi"),
    FieldSpec::new("skills", "Keahlian", FieldKind::MultiSelect, true)
        .placeholder("Pilih keahlian Anda")
        .options(SKILLS),
    FieldSpec::new("disabilities", "Kondisi", FieldKind::MultiSelect, true)
        .placeholder("Pilih kondisi Anda")
        .options(DISABILITIES),
];

const STEP_THREE: &[FieldSpec] = &[
    FieldSpec::new("status", "Status", FieldKind::Text, false)
        .placeholder("Contoh: Mahasiswa, Pekerja, Freelancer"),
    FieldSpec::new("availability", "Ketersediaan", FieldKind::Text, false)
        .placeholder("Contoh: Full-time, Part-time, Freelance"),
    FieldSpec::new("resumeURL", "Resume", FieldKind::File, false)
        .hint("Format yang didukung: PDF, DOC, DOCX"),
    FieldSpec::new("avatarURL", "Foto Profil", FieldKind::Avatar, false),
];

/// Ordered mapping from step number (1..=TOTAL_STEPS) to its fields.
#[derive(Debug, Clone)]
pub struct StepCatalog {
    steps: &'static [&'static [FieldSpec]],
}

impl StepCatalog {
    /// The standard three-step onboarding catalog.
    pub fn standard() -> Self {
        Self::from_steps(&[STEP_ONE, STEP_TWO, STEP_THREE])
    }

    /// Catalog over a custom step layout, for flows that deviate from the
    /// standard three steps.
    pub const fn from_steps(steps: &'static [&'static [FieldSpec]]) -> Self {
        Self { steps }
    }

    pub fn total_steps(&self) -> u8 {
        self.steps.len() as u8
    }

    /// Fields of the given step, empty for out-of-range steps.
    pub fn fields_for(&self, step: u8) -> &[FieldSpec] {
        if step == 0 {
            return &[];
        }
        self.steps
            .get(step as usize - 1)
            .copied()
            .unwrap_or(&[])
    }

    /// Locate a field by id, returning its step number and spec.
    pub fn field(&self, id: &str) -> Option<(u8, &FieldSpec)> {
        self.steps.iter().enumerate().find_map(|(i, fields)| {
            fields
                .iter()
                .find(|f| f.id == id)
                .map(|f| (i as u8 + 1, f))
        })
    }

    /// All field ids in catalog order.
    pub fn field_ids(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.steps.iter().flat_map(|fields| fields.iter().map(|f| f.id))
    }
}

impl Default for StepCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

/// Heading shown above each step.
pub fn step_title(step: u8) -> &'static str {
    match step {
        1 => "Informasi Dasar",
        2 => "Profil Anda",
        3 => "Informasi Profesional",
        _ => "",
    }
}

/// Sub-heading shown under the step title.
pub fn step_description(step: u8) -> &'static str {
    match step {
        1 => "Lengkapi informasi dasar untuk melanjutkan",
        2 => "Ceritakan lebih banyak tentang diri Anda",
        3 => "Tambahkan informasi profesional dan foto profil",
        _ => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_shape() {
        let catalog = StepCatalog::standard();
        assert_eq!(catalog.total_steps(), TOTAL_STEPS);
        assert_eq!(catalog.fields_for(1).len(), 3);
        assert_eq!(catalog.fields_for(2).len(), 6);
        assert_eq!(catalog.fields_for(3).len(), 4);
        assert!(catalog.fields_for(0).is_empty());
        assert!(catalog.fields_for(4).is_empty());
    }

    #[test]
    fn test_field_ids_unique_across_steps() {
        let catalog = StepCatalog::standard();
        let mut seen = HashSet::new();
        for id in catalog.field_ids() {
            assert!(seen.insert(id), "duplicate field id {id}");
        }
    }

    #[test]
    fn test_field_lookup() {
        let catalog = StepCatalog::standard();
        let (step, spec) = catalog.field("dob").unwrap();
        assert_eq!(step, 2);
        assert_eq!(spec.kind, FieldKind::Date);
        assert!(spec.required);

        let (step, spec) = catalog.field("avatarURL").unwrap();
        assert_eq!(step, 3);
        assert!(spec.kind.is_upload());
        assert!(catalog.field("unknown").is_none());
    }

    #[test]
    fn test_multiselect_options_present() {
        let catalog = StepCatalog::standard();
        let (_, skills) = catalog.field("skills").unwrap();
        assert_eq!(skills.options.len(), 8);
        let (_, conditions) = catalog.field("disabilities").unwrap();
        assert_eq!(conditions.options.len(), 8);
        // Every non-multiselect field has no options.
        for id in catalog.field_ids() {
            let (_, spec) = catalog.field(id).unwrap();
            if spec.kind != FieldKind::MultiSelect {
                assert!(spec.options.is_empty(), "{id} should have no options");
            }
        }
    }
}
