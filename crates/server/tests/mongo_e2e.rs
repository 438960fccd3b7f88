//! End-to-end checks against a real MongoDB instance. Skipped gracefully when
//! `MONGODB_URI` is not set, mirroring how the rest of the suite stays
//! runnable without external services.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use reqwest::StatusCode;
use serde_json::json;
use tokio::net::TcpListener;

use models::contact_message::ContactMessage;
use models::project::Project;
use models::service::Service as ServiceOffering;
use models::team_member::TeamMember;
use server::routes;
use server::startup::build_cors;
use server::state::ServerState;
use service::collection::mongo::MongoCollection;

async fn start_server() -> anyhow::Result<String> {
    let uri = std::env::var("MONGODB_URI")?;
    let db = models::db::connect(&uri, "cosmibit_e2e").await?;

    let state = ServerState::new(
        Arc::new(MongoCollection::<Project>::new(&db)),
        Arc::new(MongoCollection::<ServiceOffering>::new(&db)),
        Arc::new(MongoCollection::<TeamMember>::new(&db)),
        Arc::new(MongoCollection::<ContactMessage>::new(&db)),
    );
    let cors = build_cors("http://localhost:5173")?;
    let app: Router = routes::build_router(state, cors);

    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            eprintln!("server error: {}", e);
        }
    });
    Ok(format!("http://{}:{}", addr.ip(), addr.port()))
}

#[tokio::test]
async fn e2e_contact_submission_against_mongo() -> anyhow::Result<()> {
    if std::env::var("MONGODB_URI").is_err() {
        eprintln!("MONGODB_URI missing; skip mongo e2e test");
        return Ok(());
    }
    let base_url = start_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/api/v1/contact", base_url))
        .json(&json!({
            "name": "Ada Lovelace",
            "email": "ada@example.com",
            "message": "Interested in your services, please contact me back.",
        }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::CREATED);
    let body: serde_json::Value = res.json().await?;
    assert_eq!(body["success"], true);
    assert_eq!(body["id"].as_str().map(|s| s.len()), Some(24));

    // Absent identifiers stay a clean 404 against the real store too.
    let res = client
        .get(format!("{}/api/v1/projects/0123456789abcdef01234567", base_url))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    Ok(())
}
