//! Neo4j connection management and the shared graph client.

use neo4rs::{ConfigBuilder, Graph, Query};
use serde::Deserialize;

/// Errors from graph operations.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    #[error("Neo4j connection error: {0}")]
    Connection(String),

    #[error("Neo4j query error: {0}")]
    Query(#[from] neo4rs::Error),

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

/// Configuration for connecting to Neo4j.
///
/// Loaded from the `[neo4j]` table. There is no default target: an unset
/// `uri` or `user` stays empty and fails in [`GraphClient::connect`].
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    pub uri: String,
    pub user: String,
    pub password: String,
    pub max_connections: u32,
    pub fetch_size: usize,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            uri: String::new(),
            user: String::new(),
            password: String::new(),
            max_connections: 4,
            fetch_size: 200,
        }
    }
}

/// Neo4j graph client.
///
/// Owns the connection for the lifetime of a run; each query borrows a
/// connection only while it executes. Clone is cheap (inner Arc).
#[derive(Clone)]
pub struct GraphClient {
    graph: Graph,
}

impl GraphClient {
    /// Connect to Neo4j with the given configuration.
    ///
    /// No values are validated up front; a missing or bad URI or bad
    /// credentials surface as a `Connection` error here.
    pub async fn connect(config: &GraphConfig) -> Result<Self, GraphError> {
        if config.uri.is_empty() {
            return Err(GraphError::Connection(
                "no Neo4j URI configured (set NEO4J_URI)".to_string(),
            ));
        }

        let neo_config = ConfigBuilder::default()
            .uri(&config.uri)
            .user(&config.user)
            .password(&config.password)
            .max_connections(config.max_connections as usize)
            .fetch_size(config.fetch_size)
            .build()
            .map_err(|e| GraphError::Connection(e.to_string()))?;

        let graph = Graph::connect(neo_config)
            .await
            .map_err(|e| GraphError::Connection(e.to_string()))?;

        tracing::info!(uri = %config.uri, user = %config.user, "Connected to Neo4j");
        Ok(Self { graph })
    }

    /// Execute a write-only query (CREATE, DELETE).
    pub async fn run(&self, query: Query) -> Result<(), GraphError> {
        self.graph.run(query).await?;
        Ok(())
    }

    /// Execute a read query and collect all rows.
    pub async fn query_rows(&self, query: Query) -> Result<Vec<neo4rs::Row>, GraphError> {
        let mut stream = self.graph.execute(query).await?;
        let mut rows = Vec::new();
        while let Some(row) = stream.next().await? {
            rows.push(row);
        }
        Ok(rows)
    }

    /// Execute a read query and return the first row, if any.
    pub async fn query_one(&self, query: Query) -> Result<Option<neo4rs::Row>, GraphError> {
        let mut stream = self.graph.execute(query).await?;
        Ok(stream.next().await?)
    }

    /// Run a query returning a single `cnt` column, defaulting to zero.
    pub(crate) async fn query_count(&self, query: Query) -> Result<i64, GraphError> {
        match self.query_one(query).await? {
            Some(row) => Ok(row.get::<i64>("cnt").unwrap_or(0)),
            None => Ok(0),
        }
    }
}
