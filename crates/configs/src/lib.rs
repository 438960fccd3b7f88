use anyhow::anyhow;
use anyhow::Result;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub frontend: FrontendConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    #[serde(default)]
    pub worker_threads: Option<usize>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: "127.0.0.1".into(), port: 8080, worker_threads: Some(4) }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct DatabaseConfig {
    /// Mongo connection string; falls back to the `MONGODB_URI` env var.
    #[serde(default)]
    pub uri: String,
    #[serde(default = "default_database_name")]
    pub database: String,
}

fn default_database_name() -> String {
    "cosmibit".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct FrontendConfig {
    /// The single origin allowed by the CORS policy.
    #[serde(default)]
    pub origin: String,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self { origin: String::new() }
    }
}

pub fn load_default() -> Result<AppConfig> {
    let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
    load_from_file(&path)
}

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    let cfg: AppConfig = toml::from_str(&content)?;
    Ok(cfg)
}

impl AppConfig {
    /// Load config.toml if present, otherwise start from defaults; then fill
    /// missing values from the environment and validate.
    pub fn load_and_validate() -> Result<Self> {
        let mut cfg = load_default().unwrap_or_default();
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        self.server.normalize()?;
        self.database.normalize_from_env();
        self.database.validate()?;
        self.frontend.normalize_from_env();
        Ok(())
    }
}

impl ServerConfig {
    fn normalize(&mut self) -> Result<()> {
        if self.host.trim().is_empty() {
            self.host = "127.0.0.1".to_string();
        }
        if self.port == 0 {
            return Err(anyhow!("server.port must be in 1..=65535"));
        }
        match self.worker_threads {
            Some(0) | None => self.worker_threads = Some(4),
            Some(_) => {}
        }
        Ok(())
    }
}

impl DatabaseConfig {
    pub fn normalize_from_env(&mut self) {
        if self.uri.trim().is_empty() {
            if let Ok(uri) = std::env::var("MONGODB_URI") {
                self.uri = uri;
            }
        }
        // Local dev fallback; production supplies MONGODB_URI.
        if self.uri.trim().is_empty() {
            self.uri = "mongodb://localhost:27017".to_string();
        }
        if self.database.trim().is_empty() {
            self.database = default_database_name();
        }
    }

    pub fn validate(&self) -> Result<()> {
        let lower = self.uri.to_lowercase();
        if !(lower.starts_with("mongodb://") || lower.starts_with("mongodb+srv://")) {
            return Err(anyhow!("database.uri must start with mongodb:// or mongodb+srv://"));
        }
        Ok(())
    }
}

impl FrontendConfig {
    pub fn normalize_from_env(&mut self) {
        if self.origin.trim().is_empty() {
            if let Ok(origin) = std::env::var("FRONTEND_ORIGIN") {
                self.origin = origin;
            }
        }
        if self.origin.trim().is_empty() {
            self.origin = "http://localhost:5173".to_string();
        }
    }
}
