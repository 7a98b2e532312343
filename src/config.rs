use std::{net::SocketAddr, str::FromStr};

use anyhow::Context;

/// Which [`MovieStore`](crate::store::MovieStore) backs the service.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum StoreBackend {
    #[default]
    Database,
    Memory,
}

impl FromStr for StoreBackend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "database" | "db" | "sqlite" => Ok(StoreBackend::Database),
            "memory" | "mem" => Ok(StoreBackend::Memory),
            other => anyhow::bail!("unknown movie store backend: {other}"),
        }
    }
}

/// The single account allowed to log in.
#[derive(Clone, Debug)]
pub struct AdminAccount {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug)]
pub struct Config {
    pub addr: SocketAddr,
    pub database_url: String,
    pub db_max_connections: u32,
    pub store: StoreBackend,
    pub jwt_secret: String,
    pub admin: AdminAccount,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port: u16 =
            std::env::var("PORT").unwrap_or_else(|_| "3000".to_string()).parse().context("PORT")?;

        let database_url = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://reelbox.db?mode=rwc".to_string());

        let db_max_connections: u32 =
            std::env::var("DB_MAX_CONNECTIONS").ok().and_then(|s| s.parse().ok()).unwrap_or(5);

        let store = match std::env::var("MOVIE_STORE") {
            Ok(value) => value.parse().context("MOVIE_STORE")?,
            Err(_) => StoreBackend::default(),
        };

        let jwt_secret = required("JWT_SECRET")?;
        let admin = AdminAccount {
            email: required("ADMIN_EMAIL")?,
            password: required("ADMIN_PASSWORD")?,
        };

        Ok(Self {
            addr: format!("{host}:{port}").parse().context("HOST/PORT")?,
            database_url,
            db_max_connections,
            store,
            jwt_secret,
            admin,
        })
    }
}

fn required(key: &str) -> anyhow::Result<String> {
    let value = std::env::var(key).with_context(|| format!("{key} must be set"))?;
    if value.trim().is_empty() {
        anyhow::bail!("{key} must not be empty");
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_store_backend_names() {
        assert_eq!("database".parse::<StoreBackend>().unwrap(), StoreBackend::Database);
        assert_eq!("SQLite".parse::<StoreBackend>().unwrap(), StoreBackend::Database);
        assert_eq!(" memory ".parse::<StoreBackend>().unwrap(), StoreBackend::Memory);
    }

    #[test]
    fn rejects_unknown_store_backend() {
        let err = "redis".parse::<StoreBackend>().unwrap_err();
        assert!(err.to_string().contains("redis"));
    }

    #[test]
    fn default_backend_is_database() {
        assert_eq!(StoreBackend::default(), StoreBackend::Database);
    }
}
