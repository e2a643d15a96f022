//! Submission error taxonomy.
//!
//! Blocked validation is not an error: the validator's `false` is turned
//! into a disabled affordance by the rendering layer and never surfaces
//! here. Everything below is caught at the point of submission and shown as
//! a transient notification; none of it is fatal — the wizard stays on the
//! final step with values intact for retry.

use thiserror::Error;

use crate::identity::IdentityError;

#[derive(Debug, Error)]
pub enum SubmitError {
    /// No bearer credential could be obtained from the identity collaborator.
    #[error("no bearer credential available: {0}")]
    Auth(#[source] IdentityError),

    /// Transport-level failure talking to the profile endpoint.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Non-success response; `message` is shown to the user verbatim.
    #[error("server error ({status}): {message}")]
    Server { status: u16, message: String },

    /// The configured base URL cannot address the onboarding endpoint.
    #[error("invalid endpoint configuration: {0}")]
    InvalidEndpoint(#[from] url::ParseError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_error_message_is_verbatim() {
        let err = SubmitError::Server {
            status: 422,
            message: "Gagal menyimpan data".to_string(),
        };
        assert_eq!(err.to_string(), "server error (422): Gagal menyimpan data");
    }
}
