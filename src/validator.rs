//! Step Validator
//!
//! Pure validity check for one wizard step. Recomputed synchronously on
//! every value change, so it must stay side-effect free and cheap.

use chrono::NaiveDate;

use crate::catalog::{FieldKind, StepCatalog};
use crate::wizard::FormValues;

/// True iff every required field in `step` is satisfied.
///
/// Satisfaction rules:
/// - `File`/`Avatar` kinds always count as satisfied, even when marked
///   required (uploads are optional by design).
/// - `Date` kinds are satisfied iff a committed date is present; the string
///   value is ignored.
/// - Everything else needs a non-empty trimmed string value.
pub fn is_step_valid(
    catalog: &StepCatalog,
    step: u8,
    values: &FormValues,
    date: Option<NaiveDate>,
) -> bool {
    missing_fields(catalog, step, values, date).is_empty()
}

/// Ids of required fields in `step` that are not yet satisfied, in catalog
/// order. Empty means the step is valid.
pub fn missing_fields(
    catalog: &StepCatalog,
    step: u8,
    values: &FormValues,
    date: Option<NaiveDate>,
) -> Vec<&'static str> {
    catalog
        .fields_for(step)
        .iter()
        .filter(|field| field.required)
        .filter(|field| match field.kind {
            kind if kind.is_upload() => false,
            FieldKind::Date => date.is_none(),
            _ => values.get(field.id).map(str::trim).unwrap_or("").is_empty(),
        })
        .map(|field| field.id)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::FieldSpec;

    fn catalog() -> StepCatalog {
        StepCatalog::standard()
    }

    #[test]
    fn test_step1_requires_only_name() {
        let mut values = FormValues::default();
        assert!(!is_step_valid(&catalog(), 1, &values, None));
        assert_eq!(missing_fields(&catalog(), 1, &values, None), ["nama_lengkap"]);

        values.set("nama_lengkap", "Andi");
        assert!(is_step_valid(&catalog(), 1, &values, None));

        // Email and phone are optional.
        values.set("email", "");
        values.set("phone", "   ");
        assert!(is_step_valid(&catalog(), 1, &values, None));
    }

    #[test]
    fn test_whitespace_only_is_not_satisfied() {
        let mut values = FormValues::default();
        values.set("nama_lengkap", "   ");
        assert!(!is_step_valid(&catalog(), 1, &values, None));
    }

    #[test]
    fn test_step2_date_driven_by_committed_date() {
        let mut values = FormValues::default();
        values.set("interest", "Accessibility engineering");
        values.set("location", "Jakarta, DKI Jakarta");
        values.set("skills", "1,2");
        values.set("disabilities", "4");

        // Even a plausible dob string does not count without a committed date.
        values.set("dob", "1990-05-10");
        assert!(!is_step_valid(&catalog(), 2, &values, None));
        assert_eq!(missing_fields(&catalog(), 2, &values, None), ["dob"]);

        let date = NaiveDate::from_ymd_opt(1990, 5, 10);
        assert!(is_step_valid(&catalog(), 2, &values, date));
    }

    #[test]
    fn test_step3_always_valid() {
        // Step 3 fields are all optional; file/avatar never block regardless.
        let values = FormValues::default();
        assert!(is_step_valid(&catalog(), 3, &values, None));
        assert!(missing_fields(&catalog(), 3, &values, None).is_empty());
    }

    #[test]
    fn test_required_uploads_never_block() {
        const UPLOAD_STEP: &[FieldSpec] = &[
            FieldSpec {
                id: "resumeURL",
                label: "Resume",
                kind: FieldKind::File,
                required: true,
                placeholder: None,
                hint: None,
                options: &[],
            },
            FieldSpec {
                id: "avatarURL",
                label: "Foto Profil",
                kind: FieldKind::Avatar,
                required: true,
                placeholder: None,
                hint: None,
                options: &[],
            },
        ];
        let catalog = StepCatalog::from_steps(&[UPLOAD_STEP]);

        let values = FormValues::default();
        assert!(is_step_valid(&catalog, 1, &values, None));
        assert!(missing_fields(&catalog, 1, &values, None).is_empty());
    }

    #[test]
    fn test_out_of_range_step_has_no_requirements() {
        let values = FormValues::default();
        assert!(is_step_valid(&catalog(), 0, &values, None));
        assert!(is_step_valid(&catalog(), 9, &values, None));
    }
}
