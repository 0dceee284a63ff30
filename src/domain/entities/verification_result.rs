use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

/// Normalized result of a purchase lookup.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationResult {
    /// The purchase resource exactly as returned by Google.
    pub receipt: Value,
    /// The purchase token that was verified.
    pub transaction_id: String,
    pub product_id: String,
    /// Purchase (or subscription start) time, in milliseconds since the epoch.
    pub purchase_date: Option<i64>,
    /// Expiry time in milliseconds since the epoch. `None` for purchases that
    /// do not expire.
    pub expiration_date: Option<i64>,
}

impl VerificationResult {
    pub fn purchase_time(&self) -> Option<DateTime<Utc>> {
        self.purchase_date.and_then(DateTime::from_timestamp_millis)
    }

    pub fn expiration_time(&self) -> Option<DateTime<Utc>> {
        self.expiration_date.and_then(DateTime::from_timestamp_millis)
    }

    /// Whether the purchase has an expiry in the past, relative to `now`.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expiration_time().is_some_and(|expiry| expiry <= now)
    }
}
