//! MySQL-backed schema source.

use crate::{ConnectionParams, DbError, Result, SchemaSource};
use async_trait::async_trait;
use minscan_schema::{Column, Schema, Table};
use sqlx::mysql::{MySqlConnectOptions, MySqlConnection};
use sqlx::{ConnectOptions, Connection};
use tracing::{debug, info, warn};

// information_schema reports columns in declaration order via
// ordinal_position, and a bound parameter keeps odd table names inert.
const COLUMN_QUERY: &str = "SELECT column_name, column_type \
     FROM information_schema.columns \
     WHERE table_schema = DATABASE() AND table_name = ? \
     ORDER BY ordinal_position";

/// Extracts the schema of one MySQL database over a single short-lived
/// connection.
pub struct MySqlSchemaSource {
    params: ConnectionParams,
}

impl MySqlSchemaSource {
    pub fn new(params: ConnectionParams) -> Self {
        Self { params }
    }

    fn connect_options(&self) -> MySqlConnectOptions {
        MySqlConnectOptions::new()
            .host(&self.params.host)
            .port(self.params.port)
            .username(&self.params.user)
            .password(&self.params.password)
            .database(&self.params.database)
    }

    async fn read_schema(conn: &mut MySqlConnection) -> Result<Schema> {
        let tables: Vec<String> = sqlx::query_scalar("SHOW TABLES")
            .fetch_all(&mut *conn)
            .await
            .map_err(DbError::Query)?;
        debug!(tables = tables.len(), "listed tables");

        let mut schema = Schema::new();
        for table in tables {
            let columns: Vec<(String, String)> = sqlx::query_as(COLUMN_QUERY)
                .bind(&table)
                .fetch_all(&mut *conn)
                .await
                .map_err(DbError::Query)?;
            let columns = columns
                .into_iter()
                .map(|(name, declared_type)| Column::new(name, declared_type))
                .collect();
            schema.push_table(Table::new(table, columns));
        }
        Ok(schema)
    }
}

#[async_trait]
impl SchemaSource for MySqlSchemaSource {
    async fn extract_schema(&self) -> Result<Schema> {
        info!(
            host = %self.params.host,
            port = self.params.port,
            database = %self.params.database,
            "connecting for schema extraction"
        );
        let mut conn = self
            .connect_options()
            .connect()
            .await
            .map_err(DbError::Connection)?;

        // One extraction per connection. Close before surfacing the result
        // so an error return never leaks the session.
        let result = Self::read_schema(&mut conn).await;
        if let Err(err) = conn.close().await {
            warn!(error = %err, "connection did not close cleanly");
        }

        if let Ok(schema) = &result {
            info!(
                tables = schema.table_count(),
                columns = schema.column_count(),
                "schema extracted"
            );
        }
        result
    }
}
