//! Error types for the schema extraction layer.

use thiserror::Error;

/// Schema extraction result type.
pub type Result<T> = std::result::Result<T, DbError>;

/// Schema extraction errors.
///
/// The two variants mirror the two phases of an extraction: establishing the
/// connection, then running metadata queries over it. Nothing is retried; the
/// first failure aborts the run.
#[derive(Error, Debug)]
pub enum DbError {
    /// The connection could not be established (unreachable host, bad
    /// credentials, unknown database).
    #[error("Database connection failed: {0}")]
    Connection(#[source] sqlx::Error),

    /// A metadata query failed after the connection was up.
    #[error("Schema query failed: {0}")]
    Query(#[source] sqlx::Error),
}
