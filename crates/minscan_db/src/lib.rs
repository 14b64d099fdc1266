//! Schema extraction layer for minscan.
//!
//! Exposes the `SchemaSource` capability so analysis and reporting never see
//! a concrete database driver. The shipped backend is MySQL via sqlx; tests
//! substitute in-memory fixtures.

mod error;
mod mysql;

pub use error::{DbError, Result};
pub use mysql::MySqlSchemaSource;

use async_trait::async_trait;
use minscan_schema::Schema;

/// Connection parameters for one extraction run.
#[derive(Debug, Clone)]
pub struct ConnectionParams {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub database: String,
}

/// A backend able to produce the full schema of one database.
#[async_trait]
pub trait SchemaSource {
    /// Extract every table with its ordered (column name, declared type)
    /// pairs. The backend holds whatever resources it needs for the duration
    /// of this call only.
    async fn extract_schema(&self) -> Result<Schema>;
}
