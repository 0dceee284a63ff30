use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::errors::IapError;

use super::service_account_key::ServiceAccountKey;

/// A purchase made through Google Play, plus the credentials used to look it
/// up.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    /// The package name of the application the purchase was made in (for
    /// example, 'com.some.thing').
    #[serde(default)]
    pub package_name: String,
    /// The product SKU, or the subscription ID for subscriptions.
    #[serde(default)]
    pub product_id: String,
    /// The purchase token provided to the user's device when the product was
    /// purchased.
    #[serde(default)]
    pub receipt: String,
    #[serde(default)]
    pub subscription: bool,
    /// Either an embedded key object or the key file serialized as a JSON
    /// string.
    #[serde(default, deserialize_with = "deserialize_key_object")]
    pub key_object: Option<ServiceAccountKey>,
}

impl Payment {
    /// Deserializes a payment from caller-supplied JSON. Wrong field types are
    /// reported as validation errors.
    pub fn from_json(data: impl AsRef<[u8]>) -> Result<Self, IapError> {
        serde_json::from_slice(data.as_ref())
            .map_err(|e| IapError::validation(format!("Payment could not be parsed: {e}")))
    }
}

fn deserialize_key_object<'de, D>(deserializer: D) -> Result<Option<ServiceAccountKey>, D::Error>
where
    D: Deserializer<'de>,
{
    let key = match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => return Ok(None),
        Some(Value::String(serialized)) => ServiceAccountKey::from_json(serialized),
        Some(value) => ServiceAccountKey::from_value(value),
    };
    key.map(Some).map_err(|e| match e {
        IapError::Validation(message) => serde::de::Error::custom(message),
        other => serde::de::Error::custom(other),
    })
}
