use axum::extract::Request;
use axum::http::{Method, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use once_cell::sync::Lazy;

/// Whether a route requires an authenticated caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Requirement {
    Public,
    Authenticated,
}

struct Rule {
    method: Method,
    prefix: &'static str,
    requirement: Requirement,
}

/// The static allow-list, evaluated top-down with a default-deny fallback.
static RULES: Lazy<Vec<Rule>> = Lazy::new(|| {
    vec![
        Rule { method: Method::GET, prefix: "/api/v1/projects", requirement: Requirement::Public },
        Rule { method: Method::GET, prefix: "/api/v1/team", requirement: Requirement::Public },
        Rule { method: Method::GET, prefix: "/api/v1/services", requirement: Requirement::Public },
        Rule { method: Method::POST, prefix: "/api/v1/contact", requirement: Requirement::Public },
        // Liveness probe sits outside the API root but is policed here too.
        Rule { method: Method::GET, prefix: "/health", requirement: Requirement::Public },
    ]
});

/// Segment-aware prefix match: `/api/v1/team` covers `/api/v1/team` and
/// `/api/v1/team/...` but not `/api/v1/teamster`.
fn prefix_matches(path: &str, prefix: &str) -> bool {
    match path.strip_prefix(prefix) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}

pub fn required(method: &Method, path: &str) -> Requirement {
    RULES
        .iter()
        .find(|r| r.method == *method && prefix_matches(path, r.prefix))
        .map(|r| r.requirement)
        .unwrap_or(Requirement::Authenticated)
}

/// Middleware enforcing the route policy. No identity provider is wired into
/// this codebase, so routes marked `Authenticated` answer 401 unconditionally
/// until one is supplied externally.
pub async fn enforce(req: Request, next: Next) -> Response {
    match required(req.method(), req.uri().path()) {
        Requirement::Public => next.run(req).await,
        Requirement::Authenticated => StatusCode::UNAUTHORIZED.into_response(),
    }
}
