//! Database schema initialization and migrations.

use crate::error::{DatabaseResultExt, Result};

impl super::Database {
    /// Initializes the database schema using the embedded SQL file.
    pub(super) fn initialize_schema(&self) -> Result<()> {
        self.connection
            .execute("PRAGMA foreign_keys = ON", [])
            .db_context("Failed to enable foreign keys")?;

        let schema_sql = include_str!("../../assets/schema.sql");
        self.connection
            .execute_batch(schema_sql)
            .db_context("Failed to initialize database schema")?;

        self.apply_migrations()
    }

    /// Brings databases created before `is_public` existed up to date.
    fn apply_migrations(&self) -> Result<()> {
        let has_public_column: bool = self
            .connection
            .query_row(
                "SELECT COUNT(*) FROM pragma_table_info('courses') WHERE name = 'is_public'",
                [],
                |row| row.get(0),
            )
            .map(|count: i64| count > 0)
            .db_context("Failed to inspect courses table")?;

        if !has_public_column {
            self.connection
                .execute(
                    "ALTER TABLE courses ADD COLUMN is_public INTEGER NOT NULL DEFAULT 0",
                    [],
                )
                .db_context("Failed to add is_public column to courses table")?;
        }

        Ok(())
    }
}
