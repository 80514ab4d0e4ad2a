use std::fmt;

use thiserror::Error;

use crate::utils::location::{current_pathname, last_path_segment};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    #[error("no bearer token in the page path")]
    Missing,
    #[error("window location is not available")]
    LocationUnavailable,
}

/// Bearer token taken from the last path segment of the page URL.
/// Opaque and never empty.
#[derive(Clone, PartialEq, Eq)]
pub struct AuthToken(String);

impl AuthToken {
    pub fn new(token: impl Into<String>) -> Result<Self, TokenError> {
        let token = token.into();
        if token.is_empty() {
            return Err(TokenError::Missing);
        }
        Ok(Self(token))
    }

    pub fn from_path(path: &str) -> Result<Self, TokenError> {
        Self::new(last_path_segment(path))
    }

    /// Reads the token from the current browser location.
    pub fn from_location() -> Result<Self, TokenError> {
        Self::from_path(&current_pathname()?)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Value for the `Authorization` header
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

// Keep the credential out of logs
impl fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AuthToken").field(&"***").finish()
    }
}
