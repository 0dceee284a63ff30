use std::fmt;

use serde::Deserialize;
use serde_json::Value;

use crate::{constants::GOOGLE_TOKEN_URI, errors::IapError};

/// Google service account credentials, as found in the JSON key file
/// downloaded from the Google Cloud console.
///
/// Only the fields needed for the token exchange are kept; everything else in
/// the key file is ignored.
#[derive(Clone, Deserialize, PartialEq)]
pub struct ServiceAccountKey {
    pub client_email: String,
    pub private_key: String,
    #[serde(default)]
    pub token_uri: Option<String>,
}

impl ServiceAccountKey {
    pub fn new(client_email: impl Into<String>, private_key: impl Into<String>) -> Self {
        Self {
            client_email: client_email.into(),
            private_key: private_key.into(),
            token_uri: None,
        }
    }

    /// Parses a serialized key file (string or raw bytes).
    pub fn from_json(data: impl AsRef<[u8]>) -> Result<Self, IapError> {
        let value: Value = serde_json::from_slice(data.as_ref()).map_err(|e| {
            IapError::validation(format!("Google API key object could not be parsed: {e}"))
        })?;
        Self::from_value(value)
    }

    /// Checks the shape of an already-parsed key object.
    pub fn from_value(value: Value) -> Result<Self, IapError> {
        let Value::Object(map) = value else {
            return Err(IapError::validation(
                "Google API key object must be an object",
            ));
        };
        if !map.get("client_email").is_some_and(Value::is_string) {
            return Err(IapError::validation(
                "Google API client_email must be a string",
            ));
        }
        if !map.get("private_key").is_some_and(Value::is_string) {
            return Err(IapError::validation(
                "Google API private_key must be a string",
            ));
        }
        serde_json::from_value(Value::Object(map)).map_err(|e| {
            IapError::validation(format!("Google API key object is malformed: {e}"))
        })
    }

    pub fn token_uri(&self) -> &str {
        self.token_uri.as_deref().unwrap_or(GOOGLE_TOKEN_URI)
    }
}

// Keep the private key out of logs.
impl fmt::Debug for ServiceAccountKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceAccountKey")
            .field("client_email", &self.client_email)
            .field("private_key", &"<redacted>")
            .field("token_uri", &self.token_uri)
            .finish()
    }
}
