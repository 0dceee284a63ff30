use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::{
    config::PlayIapConfig,
    data::{
        datasources::{
            google_play_developer_api_datasource::{
                GooglePlayDeveloperApiDatasource, GooglePlayDeveloperApiDatasourceImpl,
                PRODUCTS_GET, SUBSCRIPTIONS_DEFER, SUBSCRIPTIONS_GET,
            },
            google_service_account_token_datasource::{
                GoogleServiceAccountTokenDatasource, GoogleServiceAccountTokenDatasourceImpl,
            },
        },
        models::google_play_developer_api::purchase_timestamps_model::PurchaseTimestampsModel,
    },
    domain::{
        entities::{
            deferral_info::DeferralInfo, payment::Payment, verification_result::VerificationResult,
        },
        repositories::purchase_repository::PurchaseRepository,
        validation::{validate_deferral_info, validate_payment},
    },
    errors::IapError,
};

pub struct PurchaseRepositoryImpl<
    A: GooglePlayDeveloperApiDatasource,
    T: GoogleServiceAccountTokenDatasource,
> {
    google_play_developer_api_datasource: A,
    google_service_account_token_datasource: T,
    scopes: Vec<String>,
}

#[async_trait]
impl<A: GooglePlayDeveloperApiDatasource, T: GoogleServiceAccountTokenDatasource>
    PurchaseRepository for PurchaseRepositoryImpl<A, T>
{
    async fn verify_payment(&self, payment: &Payment) -> Result<VerificationResult, IapError> {
        let key = validate_payment(payment)?;
        debug!(
            package_name = %payment.package_name,
            product_id = %payment.product_id,
            subscription = payment.subscription,
            "verifying Google Play purchase"
        );
        let access_token = self
            .google_service_account_token_datasource
            .get_token(key, &self.scopes)
            .await?;

        let (body, function_name) = if payment.subscription {
            let body = self
                .google_play_developer_api_datasource
                .get_subscription_purchase(
                    &payment.package_name,
                    &payment.product_id,
                    &payment.receipt,
                    &access_token,
                )
                .await?;
            (body, SUBSCRIPTIONS_GET)
        } else {
            let body = self
                .google_play_developer_api_datasource
                .get_product_purchase(
                    &payment.package_name,
                    &payment.product_id,
                    &payment.receipt,
                    &access_token,
                )
                .await?;
            (body, PRODUCTS_GET)
        };

        let result = VerificationResult::from_google_purchase(&body, payment, function_name)?;
        debug!(
            product_id = %result.product_id,
            purchase_date = ?result.purchase_date,
            expiration_date = ?result.expiration_date,
            "verified Google Play purchase"
        );
        Ok(result)
    }

    async fn cancel_subscription(&self, payment: &Payment) -> Result<(), IapError> {
        let key = validate_payment(payment)?;
        debug!(
            package_name = %payment.package_name,
            product_id = %payment.product_id,
            "cancelling Google Play subscription"
        );
        let access_token = self
            .google_service_account_token_datasource
            .get_token(key, &self.scopes)
            .await?;
        self.google_play_developer_api_datasource
            .cancel_subscription(
                &payment.package_name,
                &payment.product_id,
                &payment.receipt,
                &access_token,
            )
            .await?;
        debug!(product_id = %payment.product_id, "cancelled Google Play subscription");
        Ok(())
    }

    async fn defer_subscription(
        &self,
        payment: &Payment,
        deferral_info: &DeferralInfo,
    ) -> Result<Value, IapError> {
        let key = validate_payment(payment)?;
        validate_deferral_info(deferral_info)?;
        debug!(
            package_name = %payment.package_name,
            product_id = %payment.product_id,
            desired_expiry_time_millis = deferral_info.desired_expiry_time_millis,
            "deferring Google Play subscription"
        );
        let access_token = self
            .google_service_account_token_datasource
            .get_token(key, &self.scopes)
            .await?;
        let body = self
            .google_play_developer_api_datasource
            .defer_subscription(
                &payment.package_name,
                &payment.product_id,
                &payment.receipt,
                deferral_info,
                &access_token,
            )
            .await?;
        serde_json::from_str(&body).map_err(|e| IapError::parse(SUBSCRIPTIONS_DEFER, &e))
    }
}

impl<A: GooglePlayDeveloperApiDatasource, T: GoogleServiceAccountTokenDatasource>
    PurchaseRepositoryImpl<A, T>
{
    pub fn with_datasources(
        config: &PlayIapConfig,
        google_play_developer_api_datasource: A,
        google_service_account_token_datasource: T,
    ) -> Self {
        Self {
            google_play_developer_api_datasource,
            google_service_account_token_datasource,
            scopes: config.scopes.clone(),
        }
    }
}

impl
    PurchaseRepositoryImpl<
        GooglePlayDeveloperApiDatasourceImpl,
        GoogleServiceAccountTokenDatasourceImpl,
    >
{
    pub fn new(config: &PlayIapConfig) -> Self {
        Self::with_datasources(
            config,
            GooglePlayDeveloperApiDatasourceImpl::new(config.api_base_url.clone()),
            GoogleServiceAccountTokenDatasourceImpl::new(),
        )
    }
}

impl VerificationResult {
    fn from_google_purchase(
        body: &str,
        payment: &Payment,
        function_name: &str,
    ) -> Result<Self, IapError> {
        let receipt: Value =
            serde_json::from_str(body).map_err(|e| IapError::parse(function_name, &e))?;
        let timestamps = PurchaseTimestampsModel::deserialize(&receipt)
            .map_err(|e| IapError::parse(function_name, &e))?;
        Ok(VerificationResult {
            purchase_date: timestamps.purchase_date(),
            expiration_date: timestamps.expiry_time_millis,
            receipt,
            transaction_id: payment.receipt.clone(),
            product_id: payment.product_id.clone(),
        })
    }
}
