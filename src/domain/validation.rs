use crate::errors::IapError;

use super::entities::{
    deferral_info::DeferralInfo, payment::Payment, service_account_key::ServiceAccountKey,
};

/// Checks that the payment carries everything needed for a Google Play API
/// call, and returns the credentials to authenticate with.
pub fn validate_payment(payment: &Payment) -> Result<&ServiceAccountKey, IapError> {
    if payment.package_name.is_empty() {
        return Err(IapError::validation("Package name must be a string"));
    }
    if payment.product_id.is_empty() {
        return Err(IapError::validation("Product ID must be a string"));
    }
    if payment.receipt.is_empty() {
        return Err(IapError::validation("Receipt must be a string"));
    }
    let key = payment
        .key_object
        .as_ref()
        .ok_or_else(|| IapError::validation("Google API key object must be provided"))?;
    if key.client_email.is_empty() {
        return Err(IapError::validation(
            "Google API client_email must be a string",
        ));
    }
    if key.private_key.is_empty() {
        return Err(IapError::validation(
            "Google API private_key must be a string",
        ));
    }
    Ok(key)
}

pub fn validate_deferral_info(deferral_info: &DeferralInfo) -> Result<(), IapError> {
    if deferral_info.desired_expiry_time_millis <= deferral_info.expected_expiry_time_millis {
        return Err(IapError::validation(
            "desiredExpiryTimeMillis must be greater than expectedExpiryTimeMillis",
        ));
    }
    Ok(())
}
