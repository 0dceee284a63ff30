pub(crate) const GOOGLE_PLAY_API_BASE_URL: &str =
    "https://androidpublisher.googleapis.com/androidpublisher/v3/applications";

pub(crate) const ANDROID_PUBLISHER_SCOPE: &str = "https://www.googleapis.com/auth/androidpublisher";

pub(crate) const GOOGLE_TOKEN_URI: &str = "https://oauth2.googleapis.com/token";

pub(crate) const GOOGLE_PLAY_API_BASE_URL_ENV: &str = "GOOGLE_PLAY_API_BASE_URL";
pub(crate) const GOOGLE_API_KEY_ENV: &str = "GOOGLE_API_KEY";
