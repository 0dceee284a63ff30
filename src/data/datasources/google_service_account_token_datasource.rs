use async_trait::async_trait;
use serde_json::json;
use yup_oauth2::{parse_service_account_key, ServiceAccountAuthenticator};

use crate::{domain::entities::service_account_key::ServiceAccountKey, errors::IapError};

/// Exchanges service account credentials for an OAuth2 bearer token.
#[async_trait]
pub trait GoogleServiceAccountTokenDatasource: Send + Sync {
    /// key:
    ///   The service account whose private key signs the assertion.
    /// scopes:
    ///   OAuth2 scopes the token should be valid for.
    async fn get_token(&self, key: &ServiceAccountKey, scopes: &[String])
        -> Result<String, IapError>;
}

/// Token exchange through Google's OAuth2 endpoint (signed JWT assertion).
///
/// A fresh authenticator is built for every call, so tokens are never reused
/// between operations.
#[derive(Debug, Default, Clone)]
pub struct GoogleServiceAccountTokenDatasourceImpl;

#[async_trait]
impl GoogleServiceAccountTokenDatasource for GoogleServiceAccountTokenDatasourceImpl {
    async fn get_token(
        &self,
        key: &ServiceAccountKey,
        scopes: &[String],
    ) -> Result<String, IapError> {
        let key_file = json!({
            "type": "service_account",
            "client_email": key.client_email,
            "private_key": key.private_key,
            "token_uri": key.token_uri(),
        })
        .to_string();
        let key = parse_service_account_key(key_file).map_err(|e| {
            IapError::auth("Google Play API key could not be parsed", &e)
        })?;
        let authenticator = ServiceAccountAuthenticator::builder(key)
            .build()
            .await
            .map_err(|e| {
                IapError::auth(
                    "Google Play API service account authenticator could not be built",
                    &e,
                )
            })?;

        Ok(authenticator
            .token(scopes)
            .await
            .map_err(|e| {
                IapError::auth(
                    "Google Play API service account token could not be built",
                    &e,
                )
            })?
            .token()
            .ok_or_else(|| {
                IapError::auth(
                    "Google Play API service account token is empty",
                    &"no access_token in response",
                )
            })?
            .to_string())
    }
}

impl GoogleServiceAccountTokenDatasourceImpl {
    pub fn new() -> Self {
        Self
    }
}
