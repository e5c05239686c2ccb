//! Environment-driven server configuration.

use teamgate_db::DbConfig;

#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Listen address, e.g. `127.0.0.1:8080`.
    pub bind: String,
    pub db: DbConfig,
    /// Optional pepper for password hashing (`TEAMGATE_PEPPER`).
    pub pepper: Option<String>,
}

impl ServerConfig {
    /// Read configuration from the environment.
    pub fn from_env() -> Self {
        let env =
            |key: &str, default: &str| std::env::var(key).unwrap_or_else(|_| default.to_string());

        Self {
            bind: env("TEAMGATE_BIND", "127.0.0.1:8080"),
            db: DbConfig {
                url: env("TEAMGATE_DB_URL", "ws://127.0.0.1:8000"),
                namespace: env("TEAMGATE_DB_NS", "teamgate"),
                database: env("TEAMGATE_DB_NAME", "main"),
                username: env("TEAMGATE_DB_USER", "root"),
                password: env("TEAMGATE_DB_PASS", "root"),
            },
            pepper: std::env::var("TEAMGATE_PEPPER").ok(),
        }
    }
}
