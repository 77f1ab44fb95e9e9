//! Error types for the goalgraph-seed crate.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SeedError {
    #[error("Graph error: {0}")]
    Graph(#[from] goalgraph_graph::GraphError),

    #[error("Invalid value: {0}")]
    Core(#[from] goalgraph_core::CoreError),

    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Graph does not match the seed dataset: {}", .problems.join("; "))]
    VerificationFailed { problems: Vec<String> },
}

pub type Result<T> = std::result::Result<T, SeedError>;
