mod errors;
mod main;
mod types;

pub use errors::ResolveError;
pub use main::{
    decode_session_cookie, is_identified, resolve_identity, resolve_user_id, try_resolve_identity,
};
pub use types::{IdentitySource, ResolvedIdentity, SessionPayload, UserId};
