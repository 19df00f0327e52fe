//! SQLite schema definitions and SQL statement builders.
//!
//! The table name is configured at runtime, so statements are rendered per
//! table rather than kept as constants. Pure data, no I/O.
//!
//! `versioning` uses the default BINARY collation, which orders by bytes just
//! like the DynamoDB sort key does.

/// Column list shared by every SELECT, in `row_to_prompt` order.
const COLUMNS: &str = "reference, versioning, content, created_at";

/// SQL statements rendered for one table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statements {
    pub create_table: String,
    pub upsert: String,
    pub insert: String,
    pub select_by_key: String,
    pub select_by_reference: String,
    pub select_latest: String,
}

impl Statements {
    /// Renders every statement for `table`.
    ///
    /// The name must already be validated (see `Config`); it is quoted as an
    /// identifier, not bound as a parameter.
    pub fn for_table(table: &str) -> Self {
        let table = quote_identifier(table);
        Self {
            create_table: format!(
                r#"
CREATE TABLE IF NOT EXISTS {table} (
    reference TEXT NOT NULL,
    versioning TEXT NOT NULL,
    content TEXT NOT NULL,
    created_at TEXT NOT NULL,
    PRIMARY KEY (reference, versioning)
) WITHOUT ROWID;
"#
            ),
            upsert: format!(
                "INSERT OR REPLACE INTO {table} ({COLUMNS}) VALUES (?1, ?2, ?3, ?4)"
            ),
            insert: format!("INSERT INTO {table} ({COLUMNS}) VALUES (?1, ?2, ?3, ?4)"),
            select_by_key: format!(
                "SELECT {COLUMNS} FROM {table} WHERE reference = ?1 AND versioning = ?2"
            ),
            select_by_reference: format!(
                "SELECT {COLUMNS} FROM {table} WHERE reference = ?1 ORDER BY versioning ASC"
            ),
            select_latest: format!(
                "SELECT {COLUMNS} FROM {table} WHERE reference = ?1 \
                 ORDER BY versioning DESC LIMIT 1"
            ),
        }
    }
}

/// Quotes an SQL identifier, doubling any embedded quote.
fn quote_identifier(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_statements_quote_table_name() {
        let statements = Statements::for_table("Prompt-Table.v1");

        assert!(statements
            .create_table
            .contains("CREATE TABLE IF NOT EXISTS \"Prompt-Table.v1\""));
        assert!(statements.upsert.starts_with("INSERT OR REPLACE INTO \"Prompt-Table.v1\""));
        assert!(statements.insert.starts_with("INSERT INTO \"Prompt-Table.v1\""));
    }

    #[test]
    fn test_quote_identifier_escapes_quotes() {
        assert_eq!(quote_identifier("a\"b"), "\"a\"\"b\"");
    }

    #[test]
    fn test_range_reads_are_ordered_by_versioning() {
        let statements = Statements::for_table("prompts");

        assert!(statements
            .select_by_reference
            .ends_with("ORDER BY versioning ASC"));
        assert!(statements
            .select_latest
            .ends_with("ORDER BY versioning DESC LIMIT 1"));
    }

    #[test]
    fn test_schema_can_be_created_twice() {
        let conn = rusqlite::Connection::open_in_memory().unwrap();
        let statements = Statements::for_table("prompts");

        conn.execute_batch(&statements.create_table).unwrap();
        conn.execute_batch(&statements.create_table).unwrap();
    }
}
