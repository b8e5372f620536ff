//! Admin authentication
//!
//! A single operator signs in to the back-office. Two providers exist and
//! one is selected by configuration: a static credential pair, or an
//! identity-toolkit password sign-in. Either way the result is a
//! [`Session`] with an expiry that the admin routes check on every render.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::json;
use thiserror::Error;
use tracing::{info, warn};
use uuid::Uuid;

use crate::config::AuthConfig;
use crate::transport::{HttpRequest, Method, Transport};

// ============================================================================
// Errors
// ============================================================================

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("Session expired, please sign in again")]
    SessionExpired,

    #[error("Authentication provider error: {0}")]
    Provider(String),
}

// ============================================================================
// Session
// ============================================================================

/// An authenticated operator session
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub operator: String,
    pub token: String,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl Session {
    pub fn new(operator: impl Into<String>, token: impl Into<String>, ttl: Duration) -> Self {
        let issued_at = Utc::now();
        let ttl = chrono::Duration::from_std(ttl).unwrap_or(chrono::Duration::hours(8));
        Self {
            operator: operator.into(),
            token: token.into(),
            issued_at,
            expires_at: issued_at + ttl,
        }
    }

    pub fn is_valid_at(&self, now: DateTime<Utc>) -> bool {
        now < self.expires_at
    }

    pub fn is_valid(&self) -> bool {
        self.is_valid_at(Utc::now())
    }

    /// `Ok(self)` while valid, `SessionExpired` afterwards
    pub fn check(&self) -> Result<&Self, AuthError> {
        if self.is_valid() {
            Ok(self)
        } else {
            Err(AuthError::SessionExpired)
        }
    }
}

// ============================================================================
// Authenticator
// ============================================================================

#[async_trait]
pub trait Authenticator: Send + Sync + std::fmt::Debug {
    /// Provider name for logs
    fn kind(&self) -> &'static str;

    async fn sign_in(&self, username: &str, password: &str) -> Result<Session, AuthError>;
}

/// Operator credentials taken from configuration
#[derive(Clone)]
pub struct StaticCredentials {
    username: String,
    password: String,
    ttl: Duration,
}

impl std::fmt::Debug for StaticCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StaticCredentials")
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}

impl StaticCredentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>, ttl: Duration) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            ttl,
        }
    }
}

#[async_trait]
impl Authenticator for StaticCredentials {
    fn kind(&self) -> &'static str {
        "static"
    }

    async fn sign_in(&self, username: &str, password: &str) -> Result<Session, AuthError> {
        if username.trim() != self.username || password != self.password {
            warn!(operator = %username.trim(), "admin sign-in rejected");
            return Err(AuthError::InvalidCredentials);
        }
        info!(operator = %self.username, "admin signed in");
        Ok(Session::new(
            self.username.clone(),
            Uuid::new_v4().to_string(),
            self.ttl,
        ))
    }
}

/// Identity-toolkit email/password sign-in
#[derive(Debug, Clone)]
pub struct FederatedAuth {
    transport: Arc<dyn Transport>,
    endpoint: String,
    api_key: String,
    max_ttl: Duration,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SignInResponse {
    id_token: String,
    #[serde(default)]
    email: Option<String>,
    /// Seconds, as a string
    #[serde(default)]
    expires_in: Option<String>,
}

impl FederatedAuth {
    pub fn new(
        transport: Arc<dyn Transport>,
        endpoint: impl Into<String>,
        api_key: impl Into<String>,
        max_ttl: Duration,
    ) -> Self {
        Self {
            transport,
            endpoint: endpoint.into(),
            api_key: api_key.into(),
            max_ttl,
        }
    }
}

#[async_trait]
impl Authenticator for FederatedAuth {
    fn kind(&self) -> &'static str {
        "federated"
    }

    async fn sign_in(&self, username: &str, password: &str) -> Result<Session, AuthError> {
        let params = [("key", self.api_key.as_str())];
        let request = HttpRequest::with_query(Method::Post, &self.endpoint, &params)
            .and_then(|request| {
                request.json(&json!({
                    "email": username.trim(),
                    "password": password,
                    "returnSecureToken": true,
                }))
            })
            .map_err(|e| AuthError::Provider(e.to_string()))?;

        let response = self
            .transport
            .send(request)
            .await
            .map_err(|e| AuthError::Provider(e.to_string()))?;

        // The provider answers 400 for unknown email, wrong password and
        // disabled accounts alike
        if response.status == 400 {
            warn!(operator = %username.trim(), "admin sign-in rejected");
            return Err(AuthError::InvalidCredentials);
        }
        if !response.is_success() {
            return Err(AuthError::Provider(format!(
                "sign-in returned status {}",
                response.status
            )));
        }

        let body: SignInResponse = serde_json::from_str(&response.body)
            .map_err(|e| AuthError::Provider(format!("unexpected sign-in response: {e}")))?;

        let ttl = body
            .expires_in
            .as_deref()
            .and_then(|s| s.trim().parse::<u64>().ok())
            .map(Duration::from_secs)
            .map_or(self.max_ttl, |provider| provider.min(self.max_ttl));
        let operator = body.email.unwrap_or_else(|| username.trim().to_string());

        info!(operator = %operator, "admin signed in");
        Ok(Session::new(operator, body.id_token, ttl))
    }
}

/// Build the configured authenticator
pub fn authenticator(config: &AuthConfig, transport: Arc<dyn Transport>) -> Arc<dyn Authenticator> {
    match config {
        AuthConfig::Static {
            username,
            password,
            session_ttl,
        } => Arc::new(StaticCredentials::new(
            username.clone(),
            password.clone(),
            *session_ttl,
        )),
        AuthConfig::Federated {
            api_key,
            endpoint,
            session_ttl,
        } => Arc::new(FederatedAuth::new(
            transport,
            endpoint.clone(),
            api_key.clone(),
            *session_ttl,
        )),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::MockTransport;

    const HOUR: Duration = Duration::from_secs(3600);

    #[tokio::test]
    async fn test_static_sign_in() {
        let auth = StaticCredentials::new("admin", "secret", HOUR);
        let session = auth.sign_in(" admin ", "secret").await.unwrap();
        assert_eq!(session.operator, "admin");
        assert!(session.is_valid());
        assert!(!session.token.is_empty());

        let err = auth.sign_in("admin", "wrong").await.unwrap_err();
        assert!(matches!(err, AuthError::InvalidCredentials));
    }

    #[test]
    fn test_session_expiry() {
        let session = Session::new("admin", "t", HOUR);
        assert!(session.is_valid_at(session.issued_at));
        assert!(!session.is_valid_at(session.expires_at));
        assert!(session.check().is_ok());
    }

    #[tokio::test]
    async fn test_federated_sign_in() {
        let mock = MockTransport::new();
        mock.respond_json(
            200,
            &json!({"idToken": "tok", "email": "ops@haven.test", "expiresIn": "1800"}),
        );

        let auth = FederatedAuth::new(Arc::new(mock.clone()), "https://id.test/signIn", "k", HOUR);
        let session = auth.sign_in("ops@haven.test", "pw").await.unwrap();
        assert_eq!(session.token, "tok");
        assert_eq!(session.operator, "ops@haven.test");
        assert_eq!((session.expires_at - session.issued_at).num_seconds(), 1800);

        let request = mock.last_request().unwrap();
        assert_eq!(request.url, "https://id.test/signIn?key=k");
        assert_eq!(request.json_body().unwrap()["returnSecureToken"], true);
    }

    #[tokio::test]
    async fn test_federated_key_is_encoded() {
        let mock = MockTransport::new();
        mock.respond_json(200, &json!({"idToken": "tok"}));
        let auth = FederatedAuth::new(Arc::new(mock.clone()), "https://id.test/signIn", "k+1/2", HOUR);
        auth.sign_in("ops@haven.test", "pw").await.unwrap();
        assert_eq!(mock.last_request().unwrap().url, "https://id.test/signIn?key=k%2B1%2F2");
    }

    #[tokio::test]
    async fn test_federated_rejections() {
        let mock = MockTransport::new();
        mock.respond_json(400, &json!({"error": {"message": "INVALID_PASSWORD"}}))
            .respond(503, "")
            .fail("offline");
        let auth = FederatedAuth::new(Arc::new(mock), "https://id.test/signIn", "k", HOUR);

        assert!(matches!(
            auth.sign_in("a", "b").await,
            Err(AuthError::InvalidCredentials)
        ));
        assert!(matches!(auth.sign_in("a", "b").await, Err(AuthError::Provider(_))));
        assert!(matches!(auth.sign_in("a", "b").await, Err(AuthError::Provider(_))));
    }
}
