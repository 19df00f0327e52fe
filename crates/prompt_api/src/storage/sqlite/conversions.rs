//! SQLite row conversion functions.
//!
//! Pure functions for converting between SQLite rows and prompts.
//! These are testable in isolation without a repository.

use chrono::{DateTime, Utc};
use rusqlite::Row;

use prompt_api_core::prompt::Prompt;

/// Convert a SQLite row to a Prompt.
///
/// Expected columns: reference, versioning, content, created_at
pub fn row_to_prompt(row: &Row) -> rusqlite::Result<Prompt> {
    let reference: String = row.get(0)?;
    let versioning: String = row.get(1)?;
    let content: String = row.get(2)?;
    let created_at: String = row.get(3)?;

    Ok(Prompt {
        reference,
        versioning,
        content,
        created_at: parse_datetime(3, &created_at)?,
    })
}

/// Parse a DateTime<Utc> from an RFC 3339 string.
fn parse_datetime(column: usize, s: &str) -> rusqlite::Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(
                column,
                rusqlite::types::Type::Text,
                Box::new(e),
            )
        })
}

/// Format a DateTime<Utc> for SQLite storage (RFC 3339).
pub fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339()
}
