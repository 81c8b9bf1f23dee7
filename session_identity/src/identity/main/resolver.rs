use crate::config::CookieNames;
use crate::cookie::{CookieSource, lookup};
use crate::identity::errors::ResolveError;
use crate::identity::types::{IdentitySource, ResolvedIdentity, UserId};

use super::payload::decode_session_cookie;

/// Resolve the current user's identifier from the configured cookies.
///
/// Every failure collapses to `None`, which callers should read as
/// "not signed in" rather than as an error worth retrying. The reason is
/// logged.
pub fn resolve_user_id<S>(store: &S) -> Option<UserId>
where
    S: CookieSource + ?Sized,
{
    resolve_identity(store, &CookieNames::default()).map(|identity| identity.user_id)
}

/// Whether the store identifies a user at all
pub fn is_identified<S>(store: &S) -> bool
where
    S: CookieSource + ?Sized,
{
    resolve_user_id(store).is_some()
}

/// Like [`resolve_user_id`], with explicit cookie names and the source of the result.
pub fn resolve_identity<S>(store: &S, names: &CookieNames) -> Option<ResolvedIdentity>
where
    S: CookieSource + ?Sized,
{
    match try_resolve_identity(store, names) {
        Ok(identity) => {
            tracing::debug!(
                "User ID from {:?}: {}",
                identity.source,
                identity.user_id
            );
            Some(identity)
        }
        Err(ResolveError::NoSource) => {
            tracing::debug!(
                "No '{}' or '{}' cookie found",
                names.user_id,
                names.session
            );
            None
        }
        Err(e @ ResolveError::FieldMissing(_)) => {
            tracing::warn!("Session cookie '{}' present but unusable: {}", names.session, e);
            None
        }
        Err(e) => {
            tracing::error!("Error reading session cookie '{}': {}", names.session, e);
            None
        }
    }
}

/// Resolve the identity, reporting why resolution failed.
///
/// The dedicated user ID cookie is consulted first. The session cookie may be
/// `HttpOnly` and so invisible to a script-side store; that case looks the
/// same as the cookie not being set and both end in `NoSource`.
///
/// # Returns
/// * `Ok(ResolvedIdentity)` - A non-empty identifier and the cookie it came from
/// * `Err(ResolveError)` - `NoSource`, `DecodeFailure`, `StructureFailure` or `FieldMissing`
pub fn try_resolve_identity<S>(store: &S, names: &CookieNames) -> Result<ResolvedIdentity, ResolveError>
where
    S: CookieSource + ?Sized,
{
    if let Some(user_id) = lookup(store, &names.user_id).and_then(|id| UserId::new(id)) {
        return Ok(ResolvedIdentity {
            user_id,
            source: IdentitySource::UserIdCookie,
        });
    }

    let session = lookup(store, &names.session)
        .filter(|value| !value.is_empty())
        .ok_or(ResolveError::NoSource)?;

    let payload = decode_session_cookie(&session)?;
    let user_id = payload.subject()?;

    Ok(ResolvedIdentity {
        user_id,
        source: IdentitySource::SessionCookie,
    })
}
