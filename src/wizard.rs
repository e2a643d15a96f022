//! Form State Machine
//!
//! Owns the wizard's mutable state: the step pointer, field values, the
//! committed date of birth, and the canonical multi-select sets. Transitions
//! are guarded by the step validator; invalid transitions are silently
//! refused rather than reported as errors, which the rendering layer turns
//! into a disabled affordance.
//!
//! The integer id sets are the source of truth for multi-select fields; the
//! comma-joined string kept in [`FormValues`] is a display-only derived view.

use std::collections::BTreeMap;
use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::Serialize;

use crate::catalog::StepCatalog;
use crate::error::SubmitError;
use crate::identity::IdentityProvider;
use crate::submit::{ProfileClient, ProfilePayload};
use crate::validator;

/// Mapping from field id to its current string value.
///
/// Mutated only through [`OnboardingWizard::set_field_value`] and the
/// wizard's date/selection setters. Lives for the wizard session; reset on
/// successful submit.
#[derive(Debug, Clone, Default)]
pub struct FormValues(BTreeMap<String, String>);

impl FormValues {
    pub fn get(&self, id: &str) -> Option<&str> {
        self.0.get(id).map(String::as_str)
    }

    pub fn set(&mut self, id: &str, value: impl Into<String>) {
        self.0.insert(id.to_string(), value.into());
    }

    /// Trimmed value, or `None` when absent or blank.
    pub fn get_non_empty(&self, id: &str) -> Option<&str> {
        self.get(id).map(str::trim).filter(|v| !v.is_empty())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Lifecycle phase of the wizard as a whole.
///
/// The step pointer distinguishes Step1..Step3 while the phase is `Editing`.
/// `Failed` is non-terminal: edits and retried submits recover from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardPhase {
    Editing,
    Submitting,
    Done,
    Failed,
}

/// Which multi-select set a toggle addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionKind {
    Skills,
    Disabilities,
}

impl SelectionKind {
    /// Field id whose display string mirrors this set.
    pub fn field_id(&self) -> &'static str {
        match self {
            SelectionKind::Skills => "skills",
            SelectionKind::Disabilities => "disabilities",
        }
    }
}

/// The multi-step onboarding form and its state.
#[derive(Debug, Clone)]
pub struct OnboardingWizard {
    catalog: StepCatalog,
    current_step: u8,
    values: FormValues,
    date: Option<NaiveDate>,
    skills: BTreeSet<u32>,
    disabilities: BTreeSet<u32>,
    phase: WizardPhase,
}

impl OnboardingWizard {
    /// Fresh wizard at step 1 over the standard catalog.
    pub fn new() -> Self {
        Self::with_catalog(StepCatalog::standard())
    }

    pub fn with_catalog(catalog: StepCatalog) -> Self {
        Self {
            catalog,
            current_step: 1,
            values: FormValues::default(),
            date: None,
            skills: BTreeSet::new(),
            disabilities: BTreeSet::new(),
            phase: WizardPhase::Editing,
        }
    }

    /// Fresh wizard with the name field seeded from the signed-in user's
    /// display name, matching what the original onboarding screen shows.
    pub fn for_user(display_name: Option<&str>) -> Self {
        let mut wizard = Self::new();
        if let Some(name) = display_name {
            wizard.values.set("nama_lengkap", name);
        }
        wizard
    }

    pub fn catalog(&self) -> &StepCatalog {
        &self.catalog
    }

    pub fn current_step(&self) -> u8 {
        self.current_step
    }

    pub fn phase(&self) -> WizardPhase {
        self.phase
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn date(&self) -> Option<NaiveDate> {
        self.date
    }

    pub fn selections(&self, kind: SelectionKind) -> &BTreeSet<u32> {
        match kind {
            SelectionKind::Skills => &self.skills,
            SelectionKind::Disabilities => &self.disabilities,
        }
    }

    /// Validity of the step currently shown, recomputed on demand.
    pub fn is_current_step_valid(&self) -> bool {
        validator::is_step_valid(&self.catalog, self.current_step, &self.values, self.date)
    }

    /// True while edits and transitions are accepted.
    fn accepting_input(&self) -> bool {
        matches!(self.phase, WizardPhase::Editing | WizardPhase::Failed)
    }

    /// Leaving `Failed` happens on the first edit after a failed submit.
    fn resume_editing(&mut self) {
        if self.phase == WizardPhase::Failed {
            self.phase = WizardPhase::Editing;
        }
    }

    /// Overwrite a field's string value. Validity is recomputed on the next
    /// read, not here.
    pub fn set_field_value(&mut self, id: &str, value: impl Into<String>) {
        if !self.accepting_input() {
            tracing::debug!(field = id, phase = ?self.phase, "edit refused");
            return;
        }
        self.resume_editing();
        self.values.set(id, value);
    }

    /// Add the option id to the set if absent, remove it otherwise, then
    /// resync the display string for that field.
    pub fn toggle_selection(&mut self, kind: SelectionKind, option_id: u32) {
        if !self.accepting_input() {
            tracing::debug!(?kind, option_id, phase = ?self.phase, "toggle refused");
            return;
        }
        self.resume_editing();
        let set = match kind {
            SelectionKind::Skills => &mut self.skills,
            SelectionKind::Disabilities => &mut self.disabilities,
        };
        if !set.insert(option_id) {
            set.remove(&option_id);
        }
        let display = set
            .iter()
            .map(u32::to_string)
            .collect::<Vec<_>>()
            .join(",");
        self.values.set(kind.field_id(), display);
    }

    /// Commit the date of birth and mirror it into the values as an ISO
    /// date string.
    pub fn set_date(&mut self, date: NaiveDate) {
        if !self.accepting_input() {
            tracing::debug!(%date, phase = ?self.phase, "date edit refused");
            return;
        }
        self.resume_editing();
        self.date = Some(date);
        self.values.set("dob", date.format("%Y-%m-%d").to_string());
    }

    /// Move forward one step. No-op unless the current step is valid and a
    /// next step exists.
    pub fn advance(&mut self) {
        if !self.accepting_input()
            || self.current_step >= self.catalog.total_steps()
            || !self.is_current_step_valid()
        {
            tracing::debug!(step = self.current_step, "advance refused");
            return;
        }
        self.resume_editing();
        self.current_step += 1;
    }

    /// Move back one step, preserving all values. No-op at step 1.
    pub fn retreat(&mut self) {
        if !self.accepting_input() || self.current_step <= 1 {
            tracing::debug!(step = self.current_step, "retreat refused");
            return;
        }
        self.resume_editing();
        self.current_step -= 1;
    }

    /// Clear all wizard state back to a fresh step 1.
    pub fn reset(&mut self) {
        *self = Self::with_catalog(self.catalog.clone());
    }

    /// Serialize the accumulated values into the profile-creation request
    /// body. `None` until a date of birth has been committed.
    pub fn payload(&self) -> Option<ProfilePayload> {
        let dob = self.date?;
        Some(ProfilePayload {
            nama_lengkap: self.values.get("nama_lengkap").unwrap_or("").to_string(),
            email: self.values.get("email").unwrap_or("").to_string(),
            phone: self.values.get("phone").unwrap_or("").to_string(),
            bio: self.values.get("bio").unwrap_or("").to_string(),
            interest: self.values.get("interest").unwrap_or("").to_string(),
            location: self.values.get("location").unwrap_or("").to_string(),
            status: self.values.get_non_empty("status").map(String::from),
            availability: self.values.get_non_empty("availability").map(String::from),
            resume_url: self.values.get_non_empty("resumeURL").map(String::from),
            avatar_url: self.values.get_non_empty("avatarURL").map(String::from),
            skills: self.skills.iter().copied().collect(),
            disabilities: self.disabilities.iter().copied().collect(),
            dob: ProfilePayload::dob_timestamp(dob),
        })
    }

    /// Submit the accumulated profile. Only reachable from the final step
    /// while it is valid; anything else is silently refused like the other
    /// transitions. On success the identity collaborator's onboarded flag is
    /// flipped before the wizard reports `Done`; on failure the wizard stays
    /// on the final step with all values intact for a retry.
    pub async fn submit(
        &mut self,
        client: &ProfileClient,
        identity: &dyn IdentityProvider,
    ) -> Result<(), SubmitError> {
        if self.phase == WizardPhase::Submitting || self.phase == WizardPhase::Done {
            tracing::debug!(phase = ?self.phase, "submit refused: already in flight or done");
            return Ok(());
        }
        if self.current_step != self.catalog.total_steps() || !self.is_current_step_valid() {
            tracing::debug!(step = self.current_step, "submit refused: not at valid final step");
            return Ok(());
        }
        let Some(payload) = self.payload() else {
            tracing::debug!("submit refused: no committed date of birth");
            return Ok(());
        };

        self.phase = WizardPhase::Submitting;

        let token = match identity.auth_token().await {
            Ok(token) => token,
            Err(err) => {
                self.phase = WizardPhase::Failed;
                return Err(SubmitError::Auth(err));
            }
        };

        match client.create_profile(&payload, &token).await {
            Ok(()) => {
                // The route gate sends not-onboarded users back to the
                // wizard, so the flag must flip before anyone redirects.
                if let Err(err) = identity.update_metadata(true).await {
                    self.phase = WizardPhase::Failed;
                    return Err(SubmitError::Auth(err));
                }
                self.phase = WizardPhase::Done;
                Ok(())
            }
            Err(err) => {
                self.phase = WizardPhase::Failed;
                Err(err)
            }
        }
    }
}

impl Default for OnboardingWizard {
    fn default() -> Self {
        Self::new()
    }
}
