// ABOUTME: The migration procedure: enumerate, create schema, copy rows
// ABOUTME: Per-table log-and-continue policy with an end-of-run report

use anyhow::Result;
use std::fmt;

use crate::driver::{Column, DestinationDatabase, SourceDatabase};
use crate::typemap::map_source_type;

/// What happened during one run: tables created, rows copied, and every
/// per-table failure from either phase.
///
/// Both phases use the same failure policy: a failing table is logged,
/// recorded here, and skipped, and the run continues with the next
/// table. A table that failed during schema creation will normally fail
/// again during the copy; both failures are recorded so the summary
/// names every table that is incomplete in the destination.
#[derive(Debug, Default)]
pub struct MigrationReport {
    /// Tables successfully created in the destination, in creation order.
    pub tables_created: Vec<String>,
    /// (table, error) pairs from the schema-creation phase.
    pub schema_failures: Vec<(String, String)>,
    /// (table, rows) pairs for tables fully copied.
    pub rows_copied: Vec<(String, u64)>,
    /// (table, error) pairs from the data-copy phase.
    pub copy_failures: Vec<(String, String)>,
}

impl MigrationReport {
    pub fn total_rows(&self) -> u64 {
        self.rows_copied.iter().map(|(_, n)| n).sum()
    }

    /// True when every table was created and copied without error.
    pub fn is_clean(&self) -> bool {
        self.schema_failures.is_empty() && self.copy_failures.is_empty()
    }
}

impl fmt::Display for MigrationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "created {} tables, copied {} rows across {} tables",
            self.tables_created.len(),
            self.total_rows(),
            self.rows_copied.len()
        )?;
        if !self.schema_failures.is_empty() {
            let names: Vec<&str> = self
                .schema_failures
                .iter()
                .map(|(t, _)| t.as_str())
                .collect();
            write!(f, "; schema failed for: {}", names.join(", "))?;
        }
        if !self.copy_failures.is_empty() {
            let names: Vec<&str> = self.copy_failures.iter().map(|(t, _)| t.as_str()).collect();
            write!(f, "; copy failed for: {}", names.join(", "))?;
        }
        Ok(())
    }
}

/// List the source's tables, treating an introspection failure as an
/// empty result so the run never halts on metadata errors.
fn tables_or_empty(source: &dyn SourceDatabase) -> Vec<String> {
    match source.list_tables() {
        Ok(tables) => tables,
        Err(e) => {
            tracing::error!("Failed to list source tables: {:#}", e);
            Vec::new()
        }
    }
}

/// Create every source table in the destination.
///
/// For each table from [`SourceDatabase::list_tables`], enumerates the
/// columns, maps each source type name through the type map, and
/// executes the CREATE TABLE immediately. A failing table is recorded
/// in the report and the loop continues.
pub fn create_schema(
    source: &dyn SourceDatabase,
    dest: &mut dyn DestinationDatabase,
    report: &mut MigrationReport,
) {
    for table in tables_or_empty(source) {
        match create_one_table(source, dest, &table) {
            Ok(()) => report.tables_created.push(table),
            Err(e) => {
                tracing::error!("Failed to create table '{}': {:#}", table, e);
                report.schema_failures.push((table, format!("{:#}", e)));
            }
        }
    }
}

fn create_one_table(
    source: &dyn SourceDatabase,
    dest: &mut dyn DestinationDatabase,
    table: &str,
) -> Result<()> {
    let columns = source.table_columns(table)?;
    let mapped: Vec<Column> = columns
        .iter()
        .map(|c| Column::new(c.name.clone(), map_source_type(&c.type_name)))
        .collect();
    dest.create_table(table, &mapped)
}

/// Copy every row of every source table into the destination.
///
/// Tables are re-enumerated from the source rather than taken from the
/// schema phase, so the two phases agree only because the source is the
/// single authority for both. Each row becomes one parameterized insert,
/// executed immediately. A failure anywhere in a table (scan or insert)
/// abandons that table only; the loop continues and the report names it.
pub fn copy_data(
    source: &dyn SourceDatabase,
    dest: &mut dyn DestinationDatabase,
    report: &mut MigrationReport,
) {
    for table in tables_or_empty(source) {
        match copy_one_table(source, dest, &table) {
            Ok(rows) => {
                tracing::info!("Copied {} rows into table '{}'", rows, table);
                report.rows_copied.push((table, rows));
            }
            Err(e) => {
                tracing::error!("Failed to copy table '{}': {:#}", table, e);
                report.copy_failures.push((table, format!("{:#}", e)));
            }
        }
    }
}

fn copy_one_table(
    source: &dyn SourceDatabase,
    dest: &mut dyn DestinationDatabase,
    table: &str,
) -> Result<u64> {
    let columns = source.table_columns(table)?;
    source.scan_table(table, &mut |row| dest.insert_row(table, &columns, &row))
}

/// Run the whole migration: schema phase, then copy phase.
pub fn run(source: &dyn SourceDatabase, dest: &mut dyn DestinationDatabase) -> MigrationReport {
    let mut report = MigrationReport::default();
    create_schema(source, dest, &mut report);
    copy_data(source, dest, &mut report);
    report
}
