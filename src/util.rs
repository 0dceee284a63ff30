use serde_json::Value;

use crate::{
    config::PlayIapConfig,
    data::{
        datasources::{
            google_play_developer_api_datasource::{
                GooglePlayDeveloperApiDatasource, GooglePlayDeveloperApiDatasourceImpl,
            },
            google_service_account_token_datasource::{
                GoogleServiceAccountTokenDatasource, GoogleServiceAccountTokenDatasourceImpl,
            },
        },
        repositories::purchase_repository_impl::PurchaseRepositoryImpl,
    },
    domain::{
        entities::{
            deferral_info::DeferralInfo, payment::Payment, verification_result::VerificationResult,
        },
        repositories::purchase_repository::PurchaseRepository,
    },
    errors::IapError,
};

/// Entry point for verifying Google Play purchases and managing
/// subscriptions.
///
/// Each call validates its input, fetches a fresh bearer token for the
/// payment's service account, and makes exactly one API request. Calls share
/// no state and can run concurrently.
pub struct PlayIapUtil<R: PurchaseRepository> {
    purchase_repository: R,
}

impl<R: PurchaseRepository> PlayIapUtil<R> {
    pub async fn verify_payment(&self, payment: &Payment) -> Result<VerificationResult, IapError> {
        self.purchase_repository.verify_payment(payment).await
    }

    pub async fn cancel_subscription(&self, payment: &Payment) -> Result<(), IapError> {
        self.purchase_repository.cancel_subscription(payment).await
    }

    pub async fn defer_subscription(
        &self,
        payment: &Payment,
        deferral_info: &DeferralInfo,
    ) -> Result<Value, IapError> {
        self.purchase_repository
            .defer_subscription(payment, deferral_info)
            .await
    }
}

impl
    PlayIapUtil<
        PurchaseRepositoryImpl<
            GooglePlayDeveloperApiDatasourceImpl,
            GoogleServiceAccountTokenDatasourceImpl,
        >,
    >
{
    pub fn new(config: PlayIapConfig) -> Self {
        Self {
            purchase_repository: PurchaseRepositoryImpl::new(&config),
        }
    }
}

impl<A: GooglePlayDeveloperApiDatasource, T: GoogleServiceAccountTokenDatasource>
    PlayIapUtil<PurchaseRepositoryImpl<A, T>>
{
    /// Builds the util around alternate datasources, e.g. a token provider
    /// backed by a different credential store.
    pub fn with_datasources(
        config: PlayIapConfig,
        google_play_developer_api_datasource: A,
        google_service_account_token_datasource: T,
    ) -> Self {
        Self {
            purchase_repository: PurchaseRepositoryImpl::with_datasources(
                &config,
                google_play_developer_api_datasource,
                google_service_account_token_datasource,
            ),
        }
    }
}
