//! Configuration for the goalgraph seeder.
//!
//! Loaded from (in priority order):
//! 1. `NEO4J_URI`, `NEO4J_USER`, `NEO4J_PASSWORD`
//! 2. Environment variables (`GOALGRAPH__` prefix, `__` separator)
//! 3. Config file (`goalgraph.toml` by default)
//! 4. Defaults (pool sizes and `seed.dates` only)
//!
//! No source supplies a default URI or user: if none of them sets one, the
//! value stays empty and the run fails when it connects.

use goalgraph_core::DateSourceKind;
use goalgraph_graph::GraphConfig;

use crate::error::Result;

/// Seeding options from the `[seed]` table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedConfig {
    /// Where record dates come from: "fixed" or "relative".
    pub dates: DateSourceKind,
}

/// Everything the seeder needs to run.
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub neo4j: GraphConfig,
    pub seed: SeedConfig,
}

/// Connection settings read straight from the process environment.
///
/// Unset variables are `None` and leave lower-priority sources in effect.
/// Values are not validated; a bad one fails at connect time.
#[derive(Debug, Clone, Default)]
pub struct ConnectionEnv {
    pub uri: Option<String>,
    pub user: Option<String>,
    pub password: Option<String>,
}

impl ConnectionEnv {
    pub fn from_env() -> Self {
        Self {
            uri: std::env::var("NEO4J_URI").ok(),
            user: std::env::var("NEO4J_USER").ok(),
            password: std::env::var("NEO4J_PASSWORD").ok(),
        }
    }
}

/// Load configuration using the process environment.
pub fn load(file_prefix: &str) -> Result<AppConfig> {
    load_with(file_prefix, ConnectionEnv::from_env())
}

/// Load configuration with explicit connection overrides.
pub fn load_with(file_prefix: &str, env: ConnectionEnv) -> Result<AppConfig> {
    let cfg = config::Config::builder()
        .add_source(config::File::with_name(file_prefix).required(false))
        .add_source(
            config::Environment::with_prefix("GOALGRAPH")
                .separator("__")
                .try_parsing(true),
        )
        .set_override_option("neo4j.uri", env.uri)?
        .set_override_option("neo4j.user", env.user)?
        .set_override_option("neo4j.password", env.password)?
        .build()?;

    let neo4j = match cfg.get::<GraphConfig>("neo4j") {
        Ok(c) => c,
        Err(config::ConfigError::NotFound(_)) => GraphConfig::default(),
        Err(e) => return Err(e.into()),
    };

    let dates = match cfg.get_string("seed.dates") {
        Ok(raw) => raw.parse::<DateSourceKind>()?,
        Err(config::ConfigError::NotFound(_)) => DateSourceKind::default(),
        Err(e) => return Err(e.into()),
    };

    tracing::debug!(uri = %neo4j.uri, dates = %dates, "Configuration loaded");

    Ok(AppConfig {
        neo4j,
        seed: SeedConfig { dates },
    })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use goalgraph_graph::{GraphClient, GraphError};

    use super::*;
    use crate::error::SeedError;

    fn write_config(contents: &str) -> (tempfile::TempDir, String) {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("goalgraph.toml"), contents).unwrap();
        let prefix = dir.path().join("goalgraph").to_string_lossy().into_owned();
        (dir, prefix)
    }

    #[tokio::test]
    async fn test_missing_uri_fails_at_connect() {
        let dir = tempfile::tempdir().unwrap();
        let prefix = dir.path().join("absent").to_string_lossy().into_owned();

        let config = load_with(&prefix, ConnectionEnv::default()).unwrap();
        assert!(config.neo4j.uri.is_empty());
        assert!(config.neo4j.user.is_empty());
        assert_eq!(config.seed.dates, DateSourceKind::Fixed);

        let err = GraphClient::connect(&config.neo4j).await.err().unwrap();
        assert!(matches!(err, GraphError::Connection(_)));
    }

    #[test]
    fn test_file_values_are_read() {
        let (_dir, prefix) = write_config(
            r#"
[neo4j]
uri = "bolt://graph.internal:7687"
user = "seeder"
password = "hunter2"
max_connections = 2

[seed]
dates = "Relative"
"#,
        );

        let config = load_with(&prefix, ConnectionEnv::default()).unwrap();
        assert_eq!(config.neo4j.uri, "bolt://graph.internal:7687");
        assert_eq!(config.neo4j.user, "seeder");
        assert_eq!(config.neo4j.password, "hunter2");
        assert_eq!(config.neo4j.max_connections, 2);
        assert_eq!(config.neo4j.fetch_size, GraphConfig::default().fetch_size);
        assert_eq!(config.seed.dates, DateSourceKind::Relative);
    }

    #[test]
    fn test_connection_env_overrides_file() {
        let (_dir, prefix) = write_config(
            r#"
[neo4j]
uri = "bolt://from-file:7687"
user = "file-user"
"#,
        );

        let env = ConnectionEnv {
            uri: Some("neo4j://from-env:7687".to_string()),
            user: None,
            password: Some("secret".to_string()),
        };
        let config = load_with(&prefix, env).unwrap();
        assert_eq!(config.neo4j.uri, "neo4j://from-env:7687");
        assert_eq!(config.neo4j.user, "file-user");
        assert_eq!(config.neo4j.password, "secret");
    }

    #[test]
    fn test_invalid_date_source_is_rejected() {
        let (_dir, prefix) = write_config("[seed]\ndates = \"someday\"\n");

        let err = load_with(&prefix, ConnectionEnv::default()).unwrap_err();
        assert!(matches!(err, SeedError::Core(_)));
    }
}
