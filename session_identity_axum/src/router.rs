use axum::{Json, Router, routing::get};
use serde::Serialize;
use session_identity::{IdentitySource, UserId};

use super::session::IdentifiedUser;

/// Router exposing `GET /whoami`
///
/// Nest it under [`IDENTITY_ROUTE_PREFIX`](crate::IDENTITY_ROUTE_PREFIX).
pub fn identity_router() -> Router {
    Router::new().route("/whoami", get(whoami))
}

#[derive(Debug, Serialize)]
struct WhoAmI {
    user_id: Option<UserId>,
    source: Option<IdentitySource>,
}

/// Always 200; anonymous requests get nulls
async fn whoami(user: Option<IdentifiedUser>) -> Json<WhoAmI> {
    let (user_id, source) = match user {
        Some(user) => (Some(user.id), Some(user.source)),
        None => (None, None),
    };
    Json(WhoAmI { user_id, source })
}
