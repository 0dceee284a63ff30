use serde::Deserialize;
use serde_with::{serde_as, DisplayFromStr, PickFirst};

/// The timing fields shared by the purchases.products and
/// purchases.subscriptions resources:
///
/// https://developers.google.com/android-publisher/api-ref/rest/v3/purchases.products#ProductPurchase
/// https://developers.google.com/android-publisher/api-ref/rest/v3/purchases.subscriptions#SubscriptionPurchase
///
/// Google encodes int64 values as JSON strings, but plain numbers are accepted
/// too.
#[serde_as]
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PurchaseTimestampsModel {
    /// Time at which the subscription was granted, in milliseconds since the
    /// Epoch. Subscriptions only.
    #[serde_as(as = "Option<PickFirst<(DisplayFromStr, _)>>")]
    pub(crate) start_time_millis: Option<i64>,
    /// The time the product was purchased, in milliseconds since the epoch (Jan
    /// 1, 1970). Products only.
    #[serde_as(as = "Option<PickFirst<(DisplayFromStr, _)>>")]
    pub(crate) purchase_time_millis: Option<i64>,
    /// Time at which the subscription will expire, in milliseconds since the
    /// Epoch.
    #[serde_as(as = "Option<PickFirst<(DisplayFromStr, _)>>")]
    pub(crate) expiry_time_millis: Option<i64>,
}

impl PurchaseTimestampsModel {
    pub(crate) fn purchase_date(&self) -> Option<i64> {
        self.start_time_millis.or(self.purchase_time_millis)
    }
}
