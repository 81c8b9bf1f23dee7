//! Route configuration for the identity endpoints

use std::sync::LazyLock;

/// Route prefix under which [`identity_router`](crate::identity_router) is meant to be nested.
/// Default: "/identity"
pub static IDENTITY_ROUTE_PREFIX: LazyLock<String> = LazyLock::new(route_prefix_from_env);

/// Where unidentified `GET` requests are redirected by the required extractor.
/// Default: "/"
pub static IDENTITY_REDIRECT_ANON: LazyLock<String> = LazyLock::new(redirect_anon_from_env);

fn route_prefix_from_env() -> String {
    std::env::var("IDENTITY_ROUTE_PREFIX").unwrap_or_else(|_| "/identity".to_string())
}

fn redirect_anon_from_env() -> String {
    std::env::var("IDENTITY_REDIRECT_ANON").unwrap_or_else(|_| "/".to_string())
}
