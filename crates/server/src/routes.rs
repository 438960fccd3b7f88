use axum::middleware;
use axum::routing::{get, post};
use axum::{Json, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::{
    DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer,
};
use tracing::Level;

use common::types::Health;

use crate::policy;
use crate::state::ServerState;

pub mod contact;
pub mod projects;
pub mod services;
pub mod team;

pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Build the full application router: the versioned content API, the health
/// probe, the route policy, CORS and request tracing.
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    let api = Router::new()
        .route("/projects", get(projects::list_projects))
        .route("/projects/:id", get(projects::get_project))
        .route("/projects/status/:status", get(projects::list_projects_by_status))
        .route("/services", get(services::list_services))
        .route("/services/:id", get(services::get_service))
        .route("/team", get(team::list_team_members))
        .route("/team/:id", get(team::get_team_member))
        .route("/contact", post(contact::submit_contact_message))
        .with_state(state);

    Router::new()
        .route("/health", get(health))
        .nest("/api/v1", api)
        // Policy runs inside CORS so preflights are answered before it.
        .layer(middleware::from_fn(policy::enforce))
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
