use serde::{Deserialize, Serialize};

/// Body of the sign-up POST
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

/// Error body returned by the sign-up endpoint. Every field is optional so
/// unexpected shapes still deserialize.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

impl ApiErrorBody {
    /// Extracts `message` from a raw response body. Non-JSON, empty bodies
    /// and a non-string `message` all yield `None`.
    pub fn message_from_text(body: &str) -> Option<String> {
        if let Ok(parsed) = serde_json::from_str::<ApiErrorBody>(body) {
            return parsed.message;
        }
        // `message` present but not a string
        serde_json::from_str::<serde_json::Value>(body)
            .ok()?
            .get("message")?
            .as_str()
            .map(str::to_string)
    }
}
