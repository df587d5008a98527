//! Environment configuration with `.env` support.
//!
//! Defaults mirror the service's conventional local setup: MySQL on
//! 127.0.0.1 as root against the `crudapi` schema, HTTP on port 3000, a
//! pool of 10 connections.

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub database_url: String,
    pub bind_addr: String,
    pub db_max_connections: u32,
}

impl AppConfig {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_vars(
            std::env::var("DATABASE_URL").ok(),
            std::env::var("BIND_ADDR").ok(),
            std::env::var("DB_MAX_CONNECTIONS").ok(),
        )
    }

    fn from_vars(
        database_url: Option<String>,
        bind_addr: Option<String>,
        db_max_connections: Option<String>,
    ) -> Self {
        AppConfig {
            database_url: database_url
                .unwrap_or_else(|| "mysql://root@127.0.0.1/crudapi".into()),
            bind_addr: bind_addr.unwrap_or_else(|| "0.0.0.0:3000".into()),
            db_max_connections: db_max_connections
                .and_then(|s| s.parse().ok())
                .unwrap_or(10),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_local_setup() {
        let cfg = AppConfig::from_vars(None, None, None);
        assert_eq!(cfg.database_url, "mysql://root@127.0.0.1/crudapi");
        assert_eq!(cfg.bind_addr, "0.0.0.0:3000");
        assert_eq!(cfg.db_max_connections, 10);
    }

    #[test]
    fn env_values_override_defaults() {
        let cfg = AppConfig::from_vars(
            Some("mysql://app@db/prod".into()),
            Some("127.0.0.1:8080".into()),
            Some("25".into()),
        );
        assert_eq!(cfg.database_url, "mysql://app@db/prod");
        assert_eq!(cfg.bind_addr, "127.0.0.1:8080");
        assert_eq!(cfg.db_max_connections, 25);
    }

    #[test]
    fn unparseable_pool_size_falls_back() {
        let cfg = AppConfig::from_vars(None, None, Some("lots".into()));
        assert_eq!(cfg.db_max_connections, 10);
    }
}
