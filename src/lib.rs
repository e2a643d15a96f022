//! Onboarding core for the InKarya job-matching platform.
//!
//! The multi-step onboarding wizard as an explicit state machine, decoupled
//! from any rendering layer: a static [`catalog`] of fields per step, a pure
//! [`validator`] gating forward motion, the [`wizard`] owning values and the
//! step pointer, and a [`submit`] adapter that posts the accumulated profile
//! to the platform backend with a bearer credential from the [`identity`]
//! collaborator. The [`gate`] module expresses the route-gating contract
//! around the onboarded flag, and [`jobs`] holds the listing browser the
//! platform lands users on afterwards.

pub mod catalog;
pub mod error;
pub mod gate;
pub mod identity;
pub mod jobs;
pub mod submit;
pub mod validator;
pub mod wizard;

pub use catalog::{FieldKind, FieldSpec, StepCatalog, TOTAL_STEPS};
pub use error::SubmitError;
pub use identity::{Credentials, IdentityError, IdentityProvider, OauthProvider, UserRecord};
pub use submit::{ClientConfig, ProfileClient, ProfilePayload};
pub use validator::is_step_valid;
pub use wizard::{FormValues, OnboardingWizard, SelectionKind, WizardPhase};
