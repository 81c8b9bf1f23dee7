use axum::{Router, routing::get};
use session_identity_axum::{IDENTITY_ROUTE_PREFIX, identity_router};

mod handlers;
mod server;

use crate::{
    handlers::{index, protected},
    server::{init_tracing, listen_port, spawn_http_server},
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    init_tracing("demo_identity");

    let app = Router::new()
        .route("/", get(index))
        .route("/protected", get(protected))
        .nest(IDENTITY_ROUTE_PREFIX.as_str(), identity_router());

    let http_server = spawn_http_server(listen_port(), app);

    http_server.await?;
    Ok(())
}
