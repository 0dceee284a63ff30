pub mod data {
    pub mod datasources {
        mod endpoints;
        pub mod google_play_developer_api_datasource;
        pub mod google_service_account_token_datasource;
    }
    pub(crate) mod models {
        pub(crate) mod google_play_developer_api {
            pub(crate) mod purchase_timestamps_model;
            pub(crate) mod subscription_defer_request_model;
        }
    }
    pub mod repositories {
        pub mod purchase_repository_impl;
    }
}

pub mod domain {
    pub mod entities {
        pub mod deferral_info;
        pub mod payment;
        pub mod service_account_key;
        pub mod verification_result;
    }
    pub mod repositories {
        pub mod purchase_repository;
    }
    pub mod validation;
}

pub mod config;
mod constants;
pub mod errors;
pub mod util;
