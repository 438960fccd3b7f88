use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::http::{HeaderValue, Method};
use axum::Router;
use common::utils::logging::init_logging_default;
use dotenvy::dotenv;
use tower_http::cors::{AllowHeaders, CorsLayer};
use tracing::info;

use models::contact_message::ContactMessage;
use models::project::Project;
use models::service::Service;
use models::team_member::TeamMember;
use service::collection::mongo::MongoCollection;

use crate::routes;
use crate::state::ServerState;

fn init_logging() {
    init_logging_default();
}

/// Fixed cross-origin policy: exactly one allowed origin, credentials on,
/// preflight results cached for an hour. Request headers are mirrored because
/// a wildcard cannot be combined with credentials.
pub fn build_cors(origin: &str) -> anyhow::Result<CorsLayer> {
    let origin: HeaderValue = origin.parse()?;
    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600)))
}

/// Public entry: load config, connect to the store, build the app and serve.
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();
    init_logging();

    let cfg = configs::AppConfig::load_and_validate()?;

    let db = models::db::connect(&cfg.database.uri, &cfg.database.database).await?;
    let state = ServerState::new(
        Arc::new(MongoCollection::<Project>::new(&db)),
        Arc::new(MongoCollection::<Service>::new(&db)),
        Arc::new(MongoCollection::<TeamMember>::new(&db)),
        Arc::new(MongoCollection::<ContactMessage>::new(&db)),
    );

    let cors = build_cors(&cfg.frontend.origin)?;
    let app: Router = routes::build_router(state, cors);

    let addr: SocketAddr = format!("{}:{}", cfg.server.host, cfg.server.port).parse()?;
    info!(%addr, origin = %cfg.frontend.origin, "starting content api");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
