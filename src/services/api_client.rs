// ============================================================================
// API CLIENT - HTTP only (stateless)
// ============================================================================
// No business rules here: the caller decides what a failure means for the UI
// ============================================================================

use async_trait::async_trait;
use gloo_net::http::Request;
use thiserror::Error;

use crate::config::CONFIG;
use crate::models::{ApiErrorBody, AuthToken, Credentials};
use crate::utils::constants::{
    MSG_GENERIC_FAILURE, MSG_NOT_AUTHENTICATED, MSG_PASSWORD_NOT_ALLOWED, NOT_ALLOWED_MARKER,
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never completed (DNS, CORS, offline, body encoding)
    #[error("network error: {0}")]
    Network(String),
    /// The server answered with a non-2xx status
    #[error("HTTP {status}: {}", .message.as_deref().unwrap_or("<no message>"))]
    Status { status: u16, message: Option<String> },
}

impl ApiError {
    /// Text shown to the user for this failure
    pub fn user_message(&self) -> &'static str {
        match self {
            ApiError::Status { status: 401 | 403, .. } => MSG_NOT_AUTHENTICATED,
            ApiError::Status { status: 500, message: Some(message) }
                if message.contains(NOT_ALLOWED_MARKER) =>
            {
                MSG_PASSWORD_NOT_ALLOWED
            }
            ApiError::Status { .. } | ApiError::Network(_) => MSG_GENERIC_FAILURE,
        }
    }
}

/// Seam between the form and the sign-up endpoint
#[async_trait(?Send)]
pub trait SignupApi {
    async fn create_user(&self, token: &AuthToken, credentials: &Credentials) -> Result<(), ApiError>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiClient {
    endpoint: String,
}

impl ApiClient {
    pub fn new() -> Self {
        Self::with_endpoint(CONFIG.signup_endpoint())
    }

    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait(?Send)]
impl SignupApi for ApiClient {
    async fn create_user(&self, token: &AuthToken, credentials: &Credentials) -> Result<(), ApiError> {
        log::info!("📝 Creating user: {}", credentials.username);

        let response = Request::post(&self.endpoint)
            .header("Authorization", &token.bearer())
            .json(credentials)
            .map_err(|e| ApiError::Network(format!("Serialization error: {}", e)))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if response.ok() {
            log::info!("✅ User created (HTTP {})", response.status());
            return Ok(());
        }

        let status = response.status();
        let message = match response.text().await {
            Ok(body) => ApiErrorBody::message_from_text(&body),
            Err(e) => {
                log::warn!("⚠️ Could not read error body: {}", e);
                None
            }
        };

        log::error!("❌ Sign-up rejected: HTTP {} ({:?})", status, message);
        Err(ApiError::Status { status, message })
    }
}
