//! Axum integration for session-identity
//!
//! Provides the [`IdentifiedUser`] extractor and a small JSON router
//! reporting who the current request belongs to.

mod config;
mod router;
mod session;

pub use config::{IDENTITY_REDIRECT_ANON, IDENTITY_ROUTE_PREFIX};
pub use router::identity_router;
pub use session::{IdentifiedUser, Unidentified};

// Re-export the cookie configuration and identity types from the core crate
pub use session_identity::{
    CookieNames, IdentitySource, SESSION_COOKIE_NAME, USER_ID_COOKIE_NAME, UserId,
};
