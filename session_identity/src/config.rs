//! Cookie names the resolver reads from

use std::sync::LazyLock;

/// Name of the plain-text cookie that carries the user identifier directly.
///
/// This cookie is not `HttpOnly`, so it stays readable even when the session
/// cookie itself is hidden from scripts.
/// Default: "adk_user_id"
pub static USER_ID_COOKIE_NAME: LazyLock<String> = LazyLock::new(user_id_cookie_name_from_env);

/// Name of the cookie holding the base64-encoded session payload.
/// Default: "adk_session"
pub static SESSION_COOKIE_NAME: LazyLock<String> = LazyLock::new(session_cookie_name_from_env);

fn user_id_cookie_name_from_env() -> String {
    std::env::var("USER_ID_COOKIE_NAME").unwrap_or_else(|_| "adk_user_id".to_string())
}

fn session_cookie_name_from_env() -> String {
    std::env::var("SESSION_COOKIE_NAME").unwrap_or_else(|_| "adk_session".to_string())
}

/// The pair of cookie names consulted during resolution.
///
/// `CookieNames::default()` takes both names from the environment-backed
/// statics above. Construct it explicitly to resolve against other names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CookieNames {
    pub user_id: String,
    pub session: String,
}

impl CookieNames {
    pub fn new(user_id: impl Into<String>, session: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            session: session.into(),
        }
    }
}

impl Default for CookieNames {
    fn default() -> Self {
        Self {
            user_id: USER_ID_COOKIE_NAME.to_string(),
            session: SESSION_COOKIE_NAME.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    /// Helper function to set an environment variable for the duration of the test
    /// and restore the original value afterward.
    fn with_env_var<F, R>(key: &str, value: Option<&str>, test: F) -> R
    where
        F: FnOnce() -> R,
    {
        let original = env::var(key).ok();

        match value {
            Some(val) => unsafe { env::set_var(key, val) },
            None => unsafe { env::remove_var(key) },
        }

        let result = test();

        match original {
            Some(val) => unsafe { env::set_var(key, val) },
            None => unsafe { env::remove_var(key) },
        }

        result
    }

    #[test]
    #[serial]
    fn test_user_id_cookie_name_default_and_override() {
        with_env_var("USER_ID_COOKIE_NAME", None, || {
            assert_eq!(user_id_cookie_name_from_env(), "adk_user_id");
        });

        with_env_var("USER_ID_COOKIE_NAME", Some("uid"), || {
            assert_eq!(user_id_cookie_name_from_env(), "uid");
        });
    }

    #[test]
    #[serial]
    fn test_session_cookie_name_default_and_override() {
        with_env_var("SESSION_COOKIE_NAME", None, || {
            assert_eq!(session_cookie_name_from_env(), "adk_session");
        });

        with_env_var("SESSION_COOKIE_NAME", Some("sid"), || {
            assert_eq!(session_cookie_name_from_env(), "sid");
        });
    }

    #[test]
    fn test_cookie_names_new() {
        let names = CookieNames::new("uid", "sid");
        assert_eq!(names.user_id, "uid");
        assert_eq!(names.session, "sid");
    }

    #[test]
    fn test_cookie_names_default_matches_statics() {
        let names = CookieNames::default();
        assert_eq!(names.user_id, *USER_ID_COOKIE_NAME);
        assert_eq!(names.session, *SESSION_COOKIE_NAME);
    }
}
