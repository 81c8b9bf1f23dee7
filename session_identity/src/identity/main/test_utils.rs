use base64::{Engine as _, engine::general_purpose::STANDARD};
use serde_json::{Value, json};

use crate::config::CookieNames;

pub(super) const USER_ID_COOKIE: &str = "test_user_id";
pub(super) const SESSION_COOKIE: &str = "test_session";

/// Cookie names used throughout the resolver tests, independent of the environment
pub(super) fn test_names() -> CookieNames {
    CookieNames::new(USER_ID_COOKIE, SESSION_COOKIE)
}

/// Encode a payload the way the backend writes the session cookie
pub(super) fn encode_session(payload: &Value) -> String {
    STANDARD.encode(payload.to_string())
}

/// A payload shaped like the ones the backend issues
pub(super) fn sample_session(sub: Value) -> Value {
    json!({
        "access_token": "test_token",
        "token_type": "Bearer",
        "expires_at": 1763424777.9927738,
        "refresh_token": null,
        "user_info": {
            "sub": sub,
            "name": " ",
            "locale": null,
            "preferred_username": "workshop"
        }
    })
}

/// Serialized cookie store holding only the session cookie
pub(super) fn session_store(payload: &Value) -> String {
    format!("{}={}", SESSION_COOKIE, encode_session(payload))
}
