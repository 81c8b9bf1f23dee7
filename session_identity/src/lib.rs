//! session-identity - Resolve the signed-in user's identifier from session cookies
//!
//! The resolver reads a cookie store and tries, in order:
//!
//! 1. a plain user ID cookie ([`USER_ID_COOKIE_NAME`]),
//! 2. the base64-encoded JSON session cookie ([`SESSION_COOKIE_NAME`]), taking `user_info.sub`.
//!
//! It only reads. Any failure along the way is logged and reported as "no user".
//!
//! ```
//! use session_identity::resolve_user_id;
//!
//! let user_id = resolve_user_id("theme=dark; adk_user_id=abc123");
//! assert_eq!(user_id.as_ref().map(|id| id.as_str()), Some("abc123"));
//! ```

mod config;
mod cookie;
mod identity;
mod utils;

pub use config::{CookieNames, SESSION_COOKIE_NAME, USER_ID_COOKIE_NAME};
pub use cookie::{CookieSource, lookup};
pub use identity::{
    IdentitySource, ResolveError, ResolvedIdentity, SessionPayload, UserId, decode_session_cookie,
    is_identified, resolve_identity, resolve_user_id, try_resolve_identity,
};
