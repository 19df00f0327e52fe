//! SQLite repository implementation.
//!
//! Implements the repository trait from `prompt_api_core::storage` using SQLite.

use std::sync::Arc;

use async_trait::async_trait;
use rusqlite::params;
use tokio_rusqlite::Connection;

use prompt_api_core::prompt::Prompt;
use prompt_api_core::storage::{PromptRepository, RepositoryError, Result};

use super::conversions::{format_datetime, row_to_prompt};
use super::error::map_tokio_rusqlite_error;
use super::schema::Statements;

/// Helper to wrap rusqlite errors for tokio_rusqlite closures.
fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

fn prompt_id(reference: &str, versioning: &str) -> String {
    format!("{reference}/{versioning}")
}

/// SQLite-based repository implementation.
///
/// All prompts live in one table named after the configured table name.
pub struct SqliteRepository {
    conn: Connection,
    statements: Arc<Statements>,
}

impl SqliteRepository {
    /// Creates a new repository with a file-based database.
    ///
    /// The database file will be created if it doesn't exist.
    /// The prompt table is created automatically.
    pub async fn open(path: &str, table: &str) -> Result<Self> {
        let conn = Connection::open(path)
            .await
            .map_err(|e| RepositoryError::Unavailable(e.to_string()))?;

        Self::with_connection(conn, table).await
    }

    /// Creates a new repository with an in-memory database.
    ///
    /// Useful for testing - data is lost when the connection is dropped.
    pub async fn new_in_memory(table: &str) -> Result<Self> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| RepositoryError::Unavailable(e.to_string()))?;

        Self::with_connection(conn, table).await
    }

    async fn with_connection(conn: Connection, table: &str) -> Result<Self> {
        let statements = Arc::new(Statements::for_table(table));
        Self::init_schema(&conn, &statements).await?;
        Ok(Self { conn, statements })
    }

    /// Initialize the database schema.
    async fn init_schema(conn: &Connection, statements: &Statements) -> Result<()> {
        let sql = statements.create_table.clone();
        conn.call(move |conn| {
            conn.execute_batch(&sql).map_err(wrap_err)?;
            Ok(())
        })
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))
    }

    async fn write(&self, prompt: &Prompt, sql: String) -> Result<()> {
        let reference = prompt.reference.clone();
        let versioning = prompt.versioning.clone();
        let content = prompt.content.clone();
        let created_at = format_datetime(&prompt.created_at);

        self.conn
            .call(move |conn| {
                conn.execute(&sql, params![reference, versioning, content, created_at])
                    .map_err(wrap_err)?;
                Ok(())
            })
            .await
            .map_err(|e| {
                map_tokio_rusqlite_error(
                    e,
                    "Prompt",
                    prompt_id(&prompt.reference, &prompt.versioning),
                )
            })
    }
}

#[async_trait]
impl PromptRepository for SqliteRepository {
    async fn get_prompt(&self, reference: &str, versioning: &str) -> Result<Option<Prompt>> {
        let sql = self.statements.select_by_key.clone();
        let key = (reference.to_string(), versioning.to_string());

        self.conn
            .call(move |conn| {
                let mut stmt = conn.prepare_cached(&sql).map_err(wrap_err)?;
                match stmt.query_row(params![key.0, key.1], row_to_prompt) {
                    Ok(prompt) => Ok(Some(prompt)),
                    Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                    Err(e) => Err(wrap_err(e)),
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Prompt", prompt_id(reference, versioning)))
    }

    async fn put_prompt(&self, prompt: &Prompt) -> Result<()> {
        self.write(prompt, self.statements.upsert.clone()).await
    }

    async fn put_prompt_if_absent(&self, prompt: &Prompt) -> Result<()> {
        self.write(prompt, self.statements.insert.clone()).await
    }

    async fn query_by_reference(&self, reference: &str) -> Result<Vec<Prompt>> {
        let sql = self.statements.select_by_reference.clone();
        let reference_owned = reference.to_string();

        self.conn
            .call(move |conn| {
                let mut stmt = conn.prepare_cached(&sql).map_err(wrap_err)?;
                let rows = stmt
                    .query_map(params![reference_owned], row_to_prompt)
                    .map_err(wrap_err)?;

                let mut prompts = Vec::new();
                for row_result in rows {
                    prompts.push(row_result.map_err(wrap_err)?);
                }
                Ok(prompts)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Prompt", reference))
    }

    async fn latest_prompt(&self, reference: &str) -> Result<Option<Prompt>> {
        let sql = self.statements.select_latest.clone();
        let reference_owned = reference.to_string();

        self.conn
            .call(move |conn| {
                let mut stmt = conn.prepare_cached(&sql).map_err(wrap_err)?;
                match stmt.query_row(params![reference_owned], row_to_prompt) {
                    Ok(prompt) => Ok(Some(prompt)),
                    Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                    Err(e) => Err(wrap_err(e)),
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Prompt", reference))
    }
}
