//! Domain errors. Used by ports and use cases.
//!
//! Adapters map infrastructure errors into these.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    /// Missing or invalid store connection parameters. Fatal at startup.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Transport, status or decode failure while querying the store.
    #[error("Query failed: {0}")]
    Query(String),

    #[error("Input error: {0}")]
    Input(String),
}
