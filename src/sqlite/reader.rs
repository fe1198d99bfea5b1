// ABOUTME: Read side of the conversion: SQLite-backed SourceDatabase driver
// ABOUTME: Lists tables, enumerates columns in declaration order, and streams rows

use anyhow::{Context, Result};
use rusqlite::Connection;
use std::path::Path;

use crate::driver::{Column, SourceDatabase};
use crate::utils::quote_ident;
use crate::value::Value;

/// Source driver backed by a read-only rusqlite connection.
pub struct SqliteSource {
    conn: Connection,
}

impl SqliteSource {
    /// Open a source database file in read-only mode.
    pub fn open(path: &Path) -> Result<Self> {
        let conn = super::open_source(path)?;
        Ok(Self { conn })
    }
}

impl SourceDatabase for SqliteSource {
    /// List all user tables, sorted ascending.
    ///
    /// Queries sqlite_master for user-created tables; `sqlite_*` system
    /// tables (sqlite_sequence, sqlite_stat1, ...) are excluded. Table
    /// names in sqlite_master are unique, so the sorted result is
    /// already a deduplicated set.
    fn list_tables(&self) -> Result<Vec<String>> {
        tracing::debug!("Listing tables from source database");

        let mut stmt = self
            .conn
            .prepare(
                "SELECT name FROM sqlite_master \
                 WHERE type='table' \
                 AND name NOT LIKE 'sqlite_%' \
                 ORDER BY name",
            )
            .context("Failed to prepare statement to list tables")?;

        let tables = stmt
            .query_map([], |row| row.get::<_, String>(0))
            .context("Failed to query table list")?
            .collect::<Result<Vec<String>, _>>()
            .context("Failed to collect table names")?;

        tracing::info!("Found {} user tables in source database", tables.len());

        Ok(tables)
    }

    /// Columns of `table` in declaration order, with declared type names.
    fn table_columns(&self, table: &str) -> Result<Vec<Column>> {
        let query = format!("PRAGMA table_info({})", quote_ident(table));
        let mut stmt = self
            .conn
            .prepare(&query)
            .with_context(|| format!("Failed to get table info for '{}'", table))?;

        // table_info: (cid, name, type, notnull, dflt_value, pk), in cid order
        let columns = stmt
            .query_map([], |row| {
                Ok(Column {
                    name: row.get::<_, String>(1)?,
                    type_name: row.get::<_, String>(2)?,
                })
            })
            .with_context(|| format!("Failed to query columns for table '{}'", table))?
            .collect::<Result<Vec<_>, _>>()
            .with_context(|| format!("Failed to collect columns for table '{}'", table))?;

        tracing::debug!("Table '{}' has {} columns", table, columns.len());

        Ok(columns)
    }

    /// Stream every row of `table` through `on_row`.
    ///
    /// `SELECT *` yields values in declaration order, matching
    /// [`table_columns`](SourceDatabase::table_columns). Rows are read
    /// one at a time; the whole table is never held in memory.
    fn scan_table(
        &self,
        table: &str,
        on_row: &mut dyn FnMut(Vec<Value>) -> Result<()>,
    ) -> Result<u64> {
        let query = format!("SELECT * FROM {}", quote_ident(table));
        let mut stmt = self
            .conn
            .prepare(&query)
            .with_context(|| format!("Failed to prepare row scan for table '{}'", table))?;

        let column_count = stmt.column_count();

        let mut rows = stmt
            .query([])
            .with_context(|| format!("Failed to query rows from table '{}'", table))?;

        let mut delivered: u64 = 0;
        while let Some(row) = rows
            .next()
            .with_context(|| format!("Failed to read row from table '{}'", table))?
        {
            let mut values = Vec::with_capacity(column_count);
            for idx in 0..column_count {
                let value: rusqlite::types::Value = row.get(idx).with_context(|| {
                    format!("Failed to read column {} of table '{}'", idx, table)
                })?;
                values.push(Value::from(value));
            }
            on_row(values)?;
            delivered += 1;
        }

        tracing::debug!("Scanned {} rows from table '{}'", delivered, table);

        Ok(delivered)
    }
}
