use askama::Template;
use axum::{http::StatusCode, response::Html};
use session_identity_axum::{IDENTITY_ROUTE_PREFIX, IdentifiedUser, IdentitySource};

// The user ID is client-controlled cookie text; templates are `.html` so
// askama escapes every interpolation.
#[derive(Template)]
#[template(path = "index_user.html")]
struct IndexTemplateUser<'a> {
    user_id: &'a str,
}

#[derive(Template)]
#[template(path = "index_anon.html")]
struct IndexTemplateAnon<'a> {
    message: &'a str,
    identity_route_prefix: &'a str,
}

#[derive(Template)]
#[template(path = "protected.html")]
struct ProtectedTemplate<'a> {
    user_id: &'a str,
    source: &'a str,
}

fn source_label(source: IdentitySource) -> &'static str {
    match source {
        IdentitySource::UserIdCookie => "user ID cookie",
        IdentitySource::SessionCookie => "session cookie",
    }
}

fn render(template: &impl Template) -> Result<Html<String>, (StatusCode, String)> {
    template
        .render()
        .map(Html)
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))
}

pub(crate) async fn index(
    user: Option<IdentifiedUser>,
) -> Result<Html<String>, (StatusCode, String)> {
    match user {
        Some(u) => {
            tracing::debug!("Index requested via {:?}", u.source);
            render(&IndexTemplateUser {
                user_id: u.id.as_str(),
            })
        }
        None => render(&IndexTemplateAnon {
            message: "No session cookie found.",
            identity_route_prefix: IDENTITY_ROUTE_PREFIX.as_str(),
        }),
    }
}

pub(crate) async fn protected(user: IdentifiedUser) -> Result<Html<String>, (StatusCode, String)> {
    render(&ProtectedTemplate {
        user_id: user.id.as_str(),
        source: source_label(user.source),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use session_identity_axum::UserId;

    fn user(id: &str, source: IdentitySource) -> IdentifiedUser {
        IdentifiedUser {
            id: UserId::new(id).unwrap(),
            source,
        }
    }

    #[tokio::test]
    async fn test_index_escapes_user_id() {
        let Html(body) = index(Some(user(
            "<script>alert(1)</script>",
            IdentitySource::UserIdCookie,
        )))
        .await
        .unwrap();

        assert!(!body.contains("<script>"));
        assert!(body.contains("alert(1)"));
    }

    #[tokio::test]
    async fn test_protected_escapes_user_id() {
        let Html(body) = protected(user("\"><img src=x>", IdentitySource::SessionCookie))
            .await
            .unwrap();

        assert!(!body.contains("<img"));
        assert!(body.contains("session cookie"));
    }

    #[tokio::test]
    async fn test_index_plain_user_id() {
        let Html(body) = index(Some(user("abc123", IdentitySource::SessionCookie)))
            .await
            .unwrap();
        assert!(body.contains("Hey abc123!"));
    }

    #[tokio::test]
    async fn test_index_anonymous() {
        let Html(body) = index(None).await.unwrap();
        assert!(body.contains("Not signed in"));
        assert!(body.contains("/whoami"));
    }
}
