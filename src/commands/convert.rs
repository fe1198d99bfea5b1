// ABOUTME: The one-shot convert command
// ABOUTME: Resolves paths, opens both ends, runs the migration, prints the outcome

use anyhow::{bail, Result};
use std::path::Path;

use crate::migration;
use crate::sqlite::reader::SqliteSource;
use crate::sqlite::writer::SqliteDestination;
use crate::utils::derive_destination_path;

/// Convert the database file at `source_arg` into a fresh SQLite file
/// next to it.
///
/// The destination name is the source name with its last extension
/// replaced by `SQLite`. A missing source is reported on stderr and the
/// command returns normally without creating anything; every other
/// per-table problem is logged, summarized, and never aborts the run.
pub fn convert(source_arg: &str) -> Result<()> {
    let source_path = Path::new(source_arg);
    if !source_path.exists() {
        let shown = std::path::absolute(source_path).unwrap_or_else(|_| source_path.to_path_buf());
        eprintln!("Database not found: {}", shown.display());
        return Ok(());
    }

    let destination = derive_destination_path(source_path);
    if destination == source_path {
        bail!(
            "Destination path '{}' is the source itself; refusing to overwrite the source",
            destination.display()
        );
    }

    let source = SqliteSource::open(source_path)?;
    let mut dest = SqliteDestination::create(&destination)?;

    let report = migration::run(&source, &mut dest);
    if report.is_clean() {
        tracing::info!("{}", report);
    } else {
        tracing::warn!("{}", report);
    }

    // Connections close on drop; close failures are not surfaced.
    drop(dest);
    drop(source);

    let shown = std::path::absolute(&destination).unwrap_or(destination);
    println!("SQLite database created: {}", shown.display());

    Ok(())
}
