//! Connection pool setup from the `[database]` config section.
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::info;

/// Pool settings in runtime units.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub connect_timeout: Duration,
    pub idle_timeout: Duration,
    pub max_lifetime: Duration,
    pub acquire_timeout: Duration,
    pub sqlx_logging: bool,
}

impl From<&configs::DatabaseConfig> for DatabaseConfig {
    fn from(c: &configs::DatabaseConfig) -> Self {
        Self {
            url: c.url.clone(),
            max_connections: c.max_connections,
            min_connections: c.min_connections,
            connect_timeout: Duration::from_secs(c.connect_timeout_secs),
            idle_timeout: Duration::from_secs(c.idle_timeout_secs),
            max_lifetime: Duration::from_secs(c.max_lifetime_secs),
            acquire_timeout: Duration::from_secs(c.acquire_timeout_secs),
            sqlx_logging: c.sqlx_logging,
        }
    }
}

impl DatabaseConfig {
    fn options(&self) -> ConnectOptions {
        let mut opt = ConnectOptions::new(self.url.clone());
        opt.max_connections(self.max_connections)
            .min_connections(self.min_connections)
            .connect_timeout(self.connect_timeout)
            .idle_timeout(self.idle_timeout)
            .max_lifetime(self.max_lifetime)
            .acquire_timeout(self.acquire_timeout)
            .sqlx_logging(self.sqlx_logging);
        opt
    }
}

pub async fn connect_with_config(cfg: &DatabaseConfig) -> anyhow::Result<DatabaseConnection> {
    let db = Database::connect(cfg.options()).await?;
    info!(max = cfg.max_connections, min = cfg.min_connections, "database pool ready");
    Ok(db)
}
