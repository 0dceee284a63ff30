use async_trait::async_trait;
use serde_json::Value;

use crate::{
    domain::entities::{
        deferral_info::DeferralInfo, payment::Payment, verification_result::VerificationResult,
    },
    errors::IapError,
};

#[async_trait]
pub trait PurchaseRepository: Send + Sync {
    /// Looks up the purchase with Google and returns its normalized details.
    async fn verify_payment(&self, payment: &Payment) -> Result<VerificationResult, IapError>;

    /// Cancels a subscription. The user keeps access until the end of the
    /// current billing period.
    async fn cancel_subscription(&self, payment: &Payment) -> Result<(), IapError>;

    /// Pushes back a subscription's expiry, returning Google's response (which
    /// contains the new expiry time).
    async fn defer_subscription(
        &self,
        payment: &Payment,
        deferral_info: &DeferralInfo,
    ) -> Result<Value, IapError>;
}
