use serde::Deserialize;

/// Requested postponement of a subscription's expiry.
///
/// https://developers.google.com/android-publisher/api-ref/rest/v3/purchases.subscriptions/defer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeferralInfo {
    /// The expected expiry time for the subscription. If the current expiry
    /// time for the subscription is not the value specified here, the deferral
    /// will not occur.
    pub expected_expiry_time_millis: i64,
    /// The desired next expiry time to assign to the subscription, in
    /// milliseconds since the Epoch. Must be later than the expected expiry
    /// time.
    pub desired_expiry_time_millis: i64,
}

impl DeferralInfo {
    pub fn new(expected_expiry_time_millis: i64, desired_expiry_time_millis: i64) -> Self {
        Self {
            expected_expiry_time_millis,
            desired_expiry_time_millis,
        }
    }
}
