//! URL builders for the Google Play Developer API purchase endpoints.

use urlencoding::encode;

/// purchases.products.get:
/// https://developers.google.com/android-publisher/api-ref/rest/v3/purchases.products/get
pub(crate) fn purchases_products_get(
    base_url: &str,
    package_name: &str,
    product_id: &str,
    token: &str,
) -> String {
    format!(
        "{}/{}/purchases/products/{}/tokens/{}",
        base_url.trim_end_matches('/'),
        encode(package_name),
        encode(product_id),
        encode(token),
    )
}

/// purchases.subscriptions.get:
/// https://developers.google.com/android-publisher/api-ref/rest/v3/purchases.subscriptions/get
pub(crate) fn purchases_subscriptions_get(
    base_url: &str,
    package_name: &str,
    subscription_id: &str,
    token: &str,
) -> String {
    format!(
        "{}/{}/purchases/subscriptions/{}/tokens/{}",
        base_url.trim_end_matches('/'),
        encode(package_name),
        encode(subscription_id),
        encode(token),
    )
}

/// purchases.subscriptions.cancel:
/// https://developers.google.com/android-publisher/api-ref/rest/v3/purchases.subscriptions/cancel
pub(crate) fn purchases_subscriptions_cancel(
    base_url: &str,
    package_name: &str,
    subscription_id: &str,
    token: &str,
) -> String {
    format!(
        "{}:cancel",
        purchases_subscriptions_get(base_url, package_name, subscription_id, token)
    )
}

/// purchases.subscriptions.defer:
/// https://developers.google.com/android-publisher/api-ref/rest/v3/purchases.subscriptions/defer
pub(crate) fn purchases_subscriptions_defer(
    base_url: &str,
    package_name: &str,
    subscription_id: &str,
    token: &str,
) -> String {
    format!(
        "{}:defer",
        purchases_subscriptions_get(base_url, package_name, subscription_id, token)
    )
}
