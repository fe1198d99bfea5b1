// ABOUTME: Write side of the conversion: SQLite-backed DestinationDatabase driver
// ABOUTME: Executes CREATE TABLE statements and parameterized single-row inserts

use anyhow::{bail, Context, Result};
use rusqlite::Connection;
use std::path::Path;

use crate::driver::{Column, DestinationDatabase};
use crate::utils::quote_ident;
use crate::value::Value;

/// Destination driver that builds a fresh SQLite database file.
pub struct SqliteDestination {
    conn: Connection,
}

impl SqliteDestination {
    /// Create the destination file, deleting any pre-existing one first.
    pub fn create(path: &Path) -> Result<Self> {
        let conn = super::create_destination(path)?;
        Ok(Self { conn })
    }
}

impl DestinationDatabase for SqliteDestination {
    /// Execute `CREATE TABLE "t" ("c1" TY1, "c2" TY2, ...)`.
    ///
    /// Identifiers are quoted; type names are emitted verbatim. An empty
    /// column list produces invalid SQL, which the engine rejects; that
    /// error surfaces to the caller like any other create failure.
    fn create_table(&mut self, table: &str, columns: &[Column]) -> Result<()> {
        let column_defs: Vec<String> = columns
            .iter()
            .map(|c| format!("{} {}", quote_ident(&c.name), c.type_name))
            .collect();

        let sql = format!(
            "CREATE TABLE {} ({})",
            quote_ident(table),
            column_defs.join(", ")
        );

        tracing::debug!("Creating table: {}", sql);

        self.conn
            .execute(&sql, [])
            .with_context(|| format!("Failed to create table '{}'", table))?;

        tracing::info!("Created table '{}' with {} columns", table, columns.len());

        Ok(())
    }

    /// Insert one row with all values bound as parameters.
    ///
    /// Binding instead of splicing literals into the statement means an
    /// embedded single quote in a text value round-trips intact. The
    /// prepared statement is cached per table, but execution stays one
    /// statement per row with no surrounding transaction.
    fn insert_row(&mut self, table: &str, columns: &[Column], row: &[Value]) -> Result<()> {
        if row.len() != columns.len() {
            bail!(
                "Row for table '{}' has {} values for {} columns",
                table,
                row.len(),
                columns.len()
            );
        }

        let column_list: Vec<String> = columns.iter().map(|c| quote_ident(&c.name)).collect();
        let placeholders: Vec<&str> = row.iter().map(|_| "?").collect();

        let sql = format!(
            "INSERT INTO {} ({}) VALUES ({})",
            quote_ident(table),
            column_list.join(","),
            placeholders.join(",")
        );

        tracing::trace!(
            "INSERT INTO {} VALUES ({})",
            table,
            row.iter()
                .map(|v| v.to_sql_literal())
                .collect::<Vec<_>>()
                .join(",")
        );

        let mut stmt = self
            .conn
            .prepare_cached(&sql)
            .with_context(|| format!("Failed to prepare insert for table '{}'", table))?;

        stmt.execute(rusqlite::params_from_iter(row.iter()))
            .with_context(|| format!("Failed to insert row into table '{}'", table))?;

        Ok(())
    }
}
