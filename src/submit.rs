//! Submission Adapter
//!
//! Serializes the accumulated wizard values into the profile-creation
//! request body and POSTs it to the external endpoint with a bearer
//! credential. Success and failure are surfaced to the caller; clearing the
//! wizard and navigating away on success belong to the caller, not here.

use std::time::Duration;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::SubmitError;

const DEFAULT_API_BASE: &str = "https://api.inkarya.id";
const ONBOARDING_PATH: &str = "/api/onboarding";
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Endpoint configuration for [`ProfileClient`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: Url,
    pub timeout: Duration,
}

impl ClientConfig {
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            timeout: Duration::from_secs(REQUEST_TIMEOUT_SECS),
        }
    }

    /// Default endpoint, overridable through `INKARYA_API_BASE`.
    pub fn from_env() -> Self {
        let base = std::env::var("INKARYA_API_BASE")
            .ok()
            .and_then(|raw| Url::parse(&raw).ok())
            .unwrap_or_else(|| {
                Url::parse(DEFAULT_API_BASE).expect("default API base is a valid URL")
            });
        Self::new(base)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

/// Request body of the profile-creation endpoint. Field spelling follows the
/// wire contract, including the `resumeURL`/`avatarURL` keys.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfilePayload {
    pub nama_lengkap: String,
    pub email: String,
    pub phone: String,
    pub bio: String,
    pub interest: String,
    pub location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability: Option<String>,
    #[serde(rename = "resumeURL", skip_serializing_if = "Option::is_none")]
    pub resume_url: Option<String>,
    #[serde(rename = "avatarURL", skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    /// Canonical integer option ids, not the display strings.
    pub skills: Vec<u32>,
    pub disabilities: Vec<u32>,
    /// ISO-8601 timestamp at midnight UTC of the committed date.
    pub dob: String,
}

impl ProfilePayload {
    /// Midnight-UTC ISO-8601 form of the committed date, e.g.
    /// `1990-05-10T00:00:00.000Z`.
    pub fn dob_timestamp(date: NaiveDate) -> String {
        let midnight = DateTime::<Utc>::from_naive_utc_and_offset(
            date.and_time(NaiveTime::MIN),
            Utc,
        );
        midnight.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string()
    }
}

/// Error body shape the endpoint returns on non-success statuses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// HTTP client for the profile-creation endpoint.
pub struct ProfileClient {
    client: Client,
    endpoint: Url,
}

impl ProfileClient {
    pub fn new(config: ClientConfig) -> Result<Self, SubmitError> {
        let client = Client::builder().timeout(config.timeout).build()?;
        let endpoint = config.base_url.join(ONBOARDING_PATH)?;
        Ok(Self { client, endpoint })
    }

    /// POST the payload with the bearer credential. Non-2xx responses are
    /// mapped to [`SubmitError::Server`] with the body's `message` field
    /// surfaced verbatim when present.
    pub async fn create_profile(
        &self,
        payload: &ProfilePayload,
        token: &str,
    ) -> Result<(), SubmitError> {
        tracing::debug!(endpoint = %self.endpoint, "submitting onboarding profile");

        let response = self
            .client
            .post(self.endpoint.clone())
            .bearer_auth(token)
            .json(payload)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            tracing::info!(status = status.as_u16(), "profile created");
            return Ok(());
        }

        let message = response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.message)
            .unwrap_or_else(|| "Gagal menyimpan data".to_string());
        tracing::warn!(status = status.as_u16(), %message, "profile creation failed");
        Err(SubmitError::Server {
            status: status.as_u16(),
            message,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dob_timestamp_is_midnight_utc() {
        let date = NaiveDate::from_ymd_opt(1990, 5, 10).unwrap();
        assert_eq!(
            ProfilePayload::dob_timestamp(date),
            "1990-05-10T00:00:00.000Z"
        );
    }

    #[test]
    fn test_payload_wire_shape() {
        let payload = ProfilePayload {
            nama_lengkap: "Andi Pratama".to_string(),
            email: "andi@example.com".to_string(),
            phone: String::new(),
            bio: String::new(),
            interest: "Web development".to_string(),
            location: "Jakarta".to_string(),
            status: None,
            availability: Some("Full-time".to_string()),
            resume_url: Some("cv.pdf".to_string()),
            avatar_url: None,
            skills: vec![1, 2],
            disabilities: vec![4],
            dob: ProfilePayload::dob_timestamp(NaiveDate::from_ymd_opt(1990, 5, 10).unwrap()),
        };

        let body = serde_json::to_value(&payload).unwrap();
        assert_eq!(body["skills"], serde_json::json!([1, 2]));
        assert_eq!(body["disabilities"], serde_json::json!([4]));
        assert_eq!(body["dob"], "1990-05-10T00:00:00.000Z");
        assert_eq!(body["resumeURL"], "cv.pdf");
        assert!(body.get("avatarURL").is_none(), "absent optionals are omitted");
        assert!(body.get("status").is_none());
    }

    #[test]
    fn test_config_endpoint_join() {
        let config = ClientConfig::new(Url::parse("https://api.example.com").unwrap());
        let client = ProfileClient::new(config).unwrap();
        assert_eq!(
            client.endpoint.as_str(),
            "https://api.example.com/api/onboarding"
        );
    }
}
