use std::convert::Infallible;

use axum::{
    extract::{FromRequestParts, OptionalFromRequestParts},
    response::{IntoResponse, Redirect, Response},
};
use http::{Method, StatusCode, request::Parts};
use serde::Serialize;
use session_identity::{CookieNames, IdentitySource, ResolvedIdentity, UserId, resolve_identity};

use super::config::IDENTITY_REDIRECT_ANON;

/// Rejection for requests that carry no resolvable identity.
///
/// `GET` requests are redirected to [`IDENTITY_REDIRECT_ANON`]; everything
/// else gets `401 Unauthorized`.
#[derive(Debug)]
pub struct Unidentified {
    method: Method,
}

impl Unidentified {
    fn new(method: Method) -> Self {
        Self { method }
    }
}

impl IntoResponse for Unidentified {
    fn into_response(self) -> Response {
        if self.method == Method::GET {
            tracing::debug!("Redirecting to {}", IDENTITY_REDIRECT_ANON.as_str());
            Redirect::temporary(IDENTITY_REDIRECT_ANON.as_str()).into_response()
        } else {
            tracing::debug!("Unauthorized");
            (StatusCode::UNAUTHORIZED, "Unauthorized").into_response()
        }
    }
}

/// The user a request's cookies identify, available as an Axum extractor
///
/// Resolution only reads the `Cookie` header; it does not validate the
/// session with any backend. Use `Option<IdentifiedUser>` for handlers that
/// also serve anonymous visitors.
///
/// # Example
///
/// ```no_run
/// use axum::{routing::get, Router};
/// use session_identity_axum::IdentifiedUser;
///
/// async fn greet(user: Option<IdentifiedUser>) -> String {
///     match user {
///         Some(user) => format!("Hello, {}!", user.id),
///         None => "Hello, stranger!".to_string(),
///     }
/// }
///
/// let app: Router = Router::new().route("/", get(greet));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct IdentifiedUser {
    /// Resolved user identifier
    pub id: UserId,
    /// Cookie the identifier came from
    pub source: IdentitySource,
}

impl From<ResolvedIdentity> for IdentifiedUser {
    fn from(identity: ResolvedIdentity) -> Self {
        Self {
            id: identity.user_id,
            source: identity.source,
        }
    }
}

impl IdentifiedUser {
    fn from_parts(parts: &Parts) -> Option<Self> {
        resolve_identity(&parts.headers, &CookieNames::default()).map(Self::from)
    }
}

impl<S> FromRequestParts<S> for IdentifiedUser
where
    S: Send + Sync,
{
    type Rejection = Unidentified;

    async fn from_request_parts(parts: &mut Parts, _: &S) -> Result<Self, Self::Rejection> {
        Self::from_parts(parts).ok_or_else(|| Unidentified::new(parts.method.clone()))
    }
}

impl<S> OptionalFromRequestParts<S> for IdentifiedUser
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        _: &S,
    ) -> Result<Option<Self>, Self::Rejection> {
        Ok(Self::from_parts(parts))
    }
}
