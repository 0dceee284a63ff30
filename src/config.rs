use std::env;

use crate::{
    constants::{
        ANDROID_PUBLISHER_SCOPE, GOOGLE_API_KEY_ENV, GOOGLE_PLAY_API_BASE_URL,
        GOOGLE_PLAY_API_BASE_URL_ENV,
    },
    domain::entities::service_account_key::ServiceAccountKey,
    errors::IapError,
};

#[derive(Debug, Clone)]
pub struct PlayIapConfig {
    /// Root of the `applications` collection of the Google Play Developer API.
    pub api_base_url: String,
    /// OAuth2 scopes requested for every bearer token.
    pub scopes: Vec<String>,
}

impl Default for PlayIapConfig {
    fn default() -> Self {
        Self {
            api_base_url: GOOGLE_PLAY_API_BASE_URL.to_string(),
            scopes: vec![ANDROID_PUBLISHER_SCOPE.to_string()],
        }
    }
}

impl PlayIapConfig {
    /// Reads `GOOGLE_PLAY_API_BASE_URL`, falling back to the production API.
    pub fn from_env() -> Self {
        Self {
            api_base_url: env::var(GOOGLE_PLAY_API_BASE_URL_ENV)
                .unwrap_or_else(|_| GOOGLE_PLAY_API_BASE_URL.to_string()),
            ..Default::default()
        }
    }

    pub fn with_api_base_url(mut self, api_base_url: impl Into<String>) -> Self {
        self.api_base_url = api_base_url.into();
        self
    }

    /// Loads the service account key file contents from `GOOGLE_API_KEY`.
    pub fn service_account_key_from_env() -> Result<ServiceAccountKey, IapError> {
        let key = env::var(GOOGLE_API_KEY_ENV).map_err(|_| {
            IapError::validation(format!("{GOOGLE_API_KEY_ENV} is not set"))
        })?;
        ServiceAccountKey::from_json(key)
    }
}
