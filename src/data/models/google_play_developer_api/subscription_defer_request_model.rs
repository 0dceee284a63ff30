use serde::Serialize;
use serde_with::{serde_as, DisplayFromStr};

use crate::domain::entities::deferral_info::DeferralInfo;

/// Request body of purchases.subscriptions.defer:
///
/// https://developers.google.com/android-publisher/api-ref/rest/v3/purchases.subscriptions/defer#request-body
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SubscriptionDeferRequestModel {
    pub(crate) deferral_info: SubscriptionDeferralInfoModel,
}

/// int64 values are sent as strings, as in all Google REST APIs.
#[serde_as]
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SubscriptionDeferralInfoModel {
    #[serde_as(as = "DisplayFromStr")]
    pub(crate) expected_expiry_time_millis: i64,
    #[serde_as(as = "DisplayFromStr")]
    pub(crate) desired_expiry_time_millis: i64,
}

impl From<&DeferralInfo> for SubscriptionDeferRequestModel {
    fn from(info: &DeferralInfo) -> Self {
        Self {
            deferral_info: SubscriptionDeferralInfoModel {
                expected_expiry_time_millis: info.expected_expiry_time_millis,
                desired_expiry_time_millis: info.desired_expiry_time_millis,
            },
        }
    }
}
