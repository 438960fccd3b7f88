use mongodb::{Client, Database};

/// Open a handle to the configured database. The driver owns pooling and
/// reconnects; callers get one `Database` per process.
pub async fn connect(uri: &str, database: &str) -> anyhow::Result<Database> {
    let client = Client::with_uri_str(uri).await?;
    Ok(client.database(database))
}
