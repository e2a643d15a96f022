//! Identity collaborator boundary.
//!
//! The platform authenticates through a third-party identity provider. This
//! crate only needs the seam: sign-in/sign-up, the current user record with
//! its onboarded flag, a bearer token, and a metadata update to flip that
//! flag. The provider's session/token mechanics stay opaque behind the
//! trait; tests and demos use [`InMemoryIdentity`].

use std::collections::HashMap;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::sync::Mutex;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum IdentityError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("email already registered: {0}")]
    EmailTaken(String),

    #[error("no active session")]
    NoSession,

    #[error("provider failure: {0}")]
    Provider(String),
}

/// The user record as the identity provider exposes it to us.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: Uuid,
    pub display_name: Option<String>,
    pub email: String,
    /// Client metadata flag the route gate keys off.
    pub onboarded: bool,
}

/// Email/password pair for credential sign-in and sign-up.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// The form-level checks the auth screens run before calling the
    /// provider: both fields present, email shaped like an address.
    pub fn validate(&self) -> Result<(), IdentityError> {
        if self.email.trim().is_empty() {
            return Err(IdentityError::InvalidInput("email is required".into()));
        }
        if !self.email.contains('@') {
            return Err(IdentityError::InvalidInput("email is not valid".into()));
        }
        if self.password.is_empty() {
            return Err(IdentityError::InvalidInput("password is required".into()));
        }
        Ok(())
    }
}

/// Registration confirmation check: password and its confirmation must match.
pub fn passwords_match(password: &str, confirmation: &str) -> bool {
    password == confirmation
}

/// Social sign-in providers offered on the auth screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OauthProvider {
    Google,
    LinkedIn,
    GitHub,
}

/// The sole boundary to the external identity service.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Sign in with email/password, establishing the session.
    async fn sign_in_with_credential(&self, creds: &Credentials)
        -> Result<UserRecord, IdentityError>;

    /// Register a new account. The new user starts with `onboarded: false`
    /// and the given display name, then the session is established.
    async fn sign_up_with_credential(
        &self,
        creds: &Credentials,
        display_name: &str,
    ) -> Result<UserRecord, IdentityError>;

    /// Sign in via a social provider.
    async fn sign_in_with_oauth(&self, provider: OauthProvider)
        -> Result<UserRecord, IdentityError>;

    /// The signed-in user, if any.
    async fn current_user(&self) -> Result<Option<UserRecord>, IdentityError>;

    /// Bearer token for the current session.
    async fn auth_token(&self) -> Result<String, IdentityError>;

    /// Update the current user's onboarded flag.
    async fn update_metadata(&self, onboarded: bool) -> Result<(), IdentityError>;
}

#[derive(Debug, Default)]
struct InMemoryState {
    /// email -> (password, record)
    users: HashMap<String, (String, UserRecord)>,
    /// email of the signed-in user
    session: Option<String>,
}

/// In-process identity provider for tests and demos. Single session, no
/// token refresh, no persistence.
#[derive(Debug, Default)]
pub struct InMemoryIdentity {
    state: Mutex<InMemoryState>,
}

impl InMemoryIdentity {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a signed-in user directly, skipping the registration flow.
    pub async fn with_signed_in_user(display_name: &str, email: &str, onboarded: bool) -> Self {
        let identity = Self::new();
        {
            let mut state = identity.state.lock().await;
            let record = UserRecord {
                id: Uuid::new_v4(),
                display_name: Some(display_name.to_string()),
                email: email.to_string(),
                onboarded,
            };
            state
                .users
                .insert(email.to_string(), ("seeded".to_string(), record));
            state.session = Some(email.to_string());
        }
        identity
    }
}

#[async_trait]
impl IdentityProvider for InMemoryIdentity {
    async fn sign_in_with_credential(
        &self,
        creds: &Credentials,
    ) -> Result<UserRecord, IdentityError> {
        creds.validate()?;
        let mut state = self.state.lock().await;
        let record = match state.users.get(&creds.email) {
            Some((password, record)) if *password == creds.password => record.clone(),
            _ => return Err(IdentityError::InvalidCredentials),
        };
        state.session = Some(creds.email.clone());
        Ok(record)
    }

    async fn sign_up_with_credential(
        &self,
        creds: &Credentials,
        display_name: &str,
    ) -> Result<UserRecord, IdentityError> {
        creds.validate()?;
        let mut state = self.state.lock().await;
        if state.users.contains_key(&creds.email) {
            return Err(IdentityError::EmailTaken(creds.email.clone()));
        }
        let record = UserRecord {
            id: Uuid::new_v4(),
            display_name: Some(display_name.to_string()),
            email: creds.email.clone(),
            onboarded: false,
        };
        state
            .users
            .insert(creds.email.clone(), (creds.password.clone(), record.clone()));
        state.session = Some(creds.email.clone());
        Ok(record)
    }

    async fn sign_in_with_oauth(
        &self,
        provider: OauthProvider,
    ) -> Result<UserRecord, IdentityError> {
        // LinkedIn is offered but disabled on the real auth screens.
        if provider == OauthProvider::LinkedIn {
            return Err(IdentityError::Provider("linkedin sign-in unavailable".into()));
        }
        let email = format!("{:?}@oauth.test", provider).to_lowercase();
        let mut state = self.state.lock().await;
        let record = state
            .users
            .entry(email.clone())
            .or_insert_with(|| {
                (
                    String::new(),
                    UserRecord {
                        id: Uuid::new_v4(),
                        display_name: None,
                        email: email.clone(),
                        onboarded: false,
                    },
                )
            })
            .1
            .clone();
        state.session = Some(email);
        Ok(record)
    }

    async fn current_user(&self) -> Result<Option<UserRecord>, IdentityError> {
        let state = self.state.lock().await;
        Ok(state
            .session
            .as_ref()
            .and_then(|email| state.users.get(email))
            .map(|(_, record)| record.clone()))
    }

    async fn auth_token(&self) -> Result<String, IdentityError> {
        let state = self.state.lock().await;
        let email = state.session.as_ref().ok_or(IdentityError::NoSession)?;
        let record = &state
            .users
            .get(email)
            .ok_or(IdentityError::NoSession)?
            .1;
        Ok(format!("test-token-{}", record.id))
    }

    async fn update_metadata(&self, onboarded: bool) -> Result<(), IdentityError> {
        let mut state = self.state.lock().await;
        let email = state.session.clone().ok_or(IdentityError::NoSession)?;
        let (_, record) = state
            .users
            .get_mut(&email)
            .ok_or(IdentityError::NoSession)?;
        record.onboarded = onboarded;
        Ok(())
    }
}
