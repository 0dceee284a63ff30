use async_trait::async_trait;
use reqwest::{header::AUTHORIZATION, RequestBuilder, StatusCode};

use crate::{
    data::models::google_play_developer_api::subscription_defer_request_model::SubscriptionDeferRequestModel,
    domain::entities::deferral_info::DeferralInfo, errors::IapError,
};

use super::endpoints::{
    purchases_products_get, purchases_subscriptions_cancel, purchases_subscriptions_defer,
    purchases_subscriptions_get,
};

pub(crate) const PRODUCTS_GET: &str = "purchases.products.get";
pub(crate) const SUBSCRIPTIONS_GET: &str = "purchases.subscriptions.get";
pub(crate) const SUBSCRIPTIONS_CANCEL: &str = "purchases.subscriptions.cancel";
pub(crate) const SUBSCRIPTIONS_DEFER: &str = "purchases.subscriptions.defer";

/// Raw access to the purchase endpoints of the Google Play Developer API.
///
/// Every call is authorized with a bearer token obtained beforehand, and
/// returns the unparsed response body once the status code is the one the
/// endpoint documents for success.
#[async_trait]
pub trait GooglePlayDeveloperApiDatasource: Send + Sync {
    /// purchases.products.get:
    /// https://developers.google.com/android-publisher/api-ref/rest/v3/purchases.products/get
    ///
    /// packageName:
    ///   The package name of the application the inapp product was sold in (for
    ///   example, 'com.some.thing').
    /// productId:
    ///   The inapp product SKU (for example, 'com.some.thing.inapp1').
    /// token:
    ///   The token provided to the user's device when the inapp product was
    ///   purchased.
    async fn get_product_purchase(
        &self,
        package_name: &str,
        product_id: &str,
        token: &str,
        access_token: &str,
    ) -> Result<String, IapError>;

    /// purchases.subscriptions.get:
    /// https://developers.google.com/android-publisher/api-ref/rest/v3/purchases.subscriptions/get
    ///
    /// packageName:
    ///   The package name of the application for which this subscription was
    ///   purchased (for example, 'com.some.thing').
    /// subscriptionId:
    ///   The purchased subscription ID (for example, 'monthly001').
    /// token:
    ///   The token provided to the user's device when the subscription was
    ///   purchased.
    async fn get_subscription_purchase(
        &self,
        package_name: &str,
        subscription_id: &str,
        token: &str,
        access_token: &str,
    ) -> Result<String, IapError>;

    /// purchases.subscriptions.cancel:
    /// https://developers.google.com/android-publisher/api-ref/rest/v3/purchases.subscriptions/cancel
    ///
    /// Google answers with an empty body, so nothing is returned.
    async fn cancel_subscription(
        &self,
        package_name: &str,
        subscription_id: &str,
        token: &str,
        access_token: &str,
    ) -> Result<(), IapError>;

    /// purchases.subscriptions.defer:
    /// https://developers.google.com/android-publisher/api-ref/rest/v3/purchases.subscriptions/defer
    ///
    /// deferralInfo:
    ///   The current and the desired expiry time of the subscription.
    async fn defer_subscription(
        &self,
        package_name: &str,
        subscription_id: &str,
        token: &str,
        deferral_info: &DeferralInfo,
        access_token: &str,
    ) -> Result<String, IapError>;
}

pub struct GooglePlayDeveloperApiDatasourceImpl {
    client: reqwest::Client,
    base_url: String,
}

#[async_trait]
impl GooglePlayDeveloperApiDatasource for GooglePlayDeveloperApiDatasourceImpl {
    async fn get_product_purchase(
        &self,
        package_name: &str,
        product_id: &str,
        token: &str,
        access_token: &str,
    ) -> Result<String, IapError> {
        let url = purchases_products_get(&self.base_url, package_name, product_id, token);
        self.callout(
            self.client.get(&url),
            access_token,
            StatusCode::OK,
            PRODUCTS_GET,
        )
        .await
    }

    async fn get_subscription_purchase(
        &self,
        package_name: &str,
        subscription_id: &str,
        token: &str,
        access_token: &str,
    ) -> Result<String, IapError> {
        let url = purchases_subscriptions_get(&self.base_url, package_name, subscription_id, token);
        self.callout(
            self.client.get(&url),
            access_token,
            StatusCode::OK,
            SUBSCRIPTIONS_GET,
        )
        .await
    }

    async fn cancel_subscription(
        &self,
        package_name: &str,
        subscription_id: &str,
        token: &str,
        access_token: &str,
    ) -> Result<(), IapError> {
        let url =
            purchases_subscriptions_cancel(&self.base_url, package_name, subscription_id, token);
        self.callout(
            self.client.post(&url),
            access_token,
            StatusCode::NO_CONTENT,
            SUBSCRIPTIONS_CANCEL,
        )
        .await
        .map(|_| ())
    }

    async fn defer_subscription(
        &self,
        package_name: &str,
        subscription_id: &str,
        token: &str,
        deferral_info: &DeferralInfo,
        access_token: &str,
    ) -> Result<String, IapError> {
        let url =
            purchases_subscriptions_defer(&self.base_url, package_name, subscription_id, token);
        self.callout(
            self.client
                .post(&url)
                .json(&SubscriptionDeferRequestModel::from(deferral_info)),
            access_token,
            StatusCode::OK,
            SUBSCRIPTIONS_DEFER,
        )
        .await
    }
}

impl GooglePlayDeveloperApiDatasourceImpl {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    async fn callout(
        &self,
        request: RequestBuilder,
        access_token: &str,
        expected_status: StatusCode,
        function_name: &str,
    ) -> Result<String, IapError> {
        let response = request
            .header(AUTHORIZATION, format!("Bearer {}", access_token))
            .send()
            .await
            .map_err(|e| IapError::transport(function_name, &e))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| IapError::transport(function_name, &e))?;

        if status != expected_status {
            tracing::warn!(
                operation = function_name,
                status = status.as_u16(),
                expected = expected_status.as_u16(),
                "Google Play Developer API returned unexpected status"
            );
            return Err(IapError::UnexpectedStatus {
                operation: function_name.to_string(),
                status: status.as_u16(),
                body,
            });
        }

        Ok(body)
    }
}
