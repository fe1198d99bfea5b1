// ABOUTME: SQLite connection helpers for both ends of a conversion
// ABOUTME: Validates the source path, opens it read-only, and creates the destination file

pub mod reader;
pub mod writer;

use anyhow::{bail, Context, Result};
use std::path::{Path, PathBuf};

/// Validate a source database file path.
///
/// Canonicalizes the path to resolve symlinks and relative components,
/// which also confirms the file exists, then verifies it is a regular
/// file. No extension check: the source driver accepts whatever file
/// the engine can open.
pub fn validate_source_path(path: &Path) -> Result<PathBuf> {
    if path.as_os_str().is_empty() {
        bail!("Source database path cannot be empty");
    }

    let canonical = path.canonicalize().with_context(|| {
        format!(
            "Failed to resolve source database path '{}'. \
             File may not exist or may not be readable.",
            path.display()
        )
    })?;

    if !canonical.is_file() {
        bail!(
            "Path '{}' is not a regular file (may be a directory)",
            path.display()
        );
    }

    tracing::debug!("Validated source path: {}", canonical.display());

    Ok(canonical)
}

/// Open a source database in read-only mode.
///
/// The conversion never writes to the source, so the connection is
/// opened with `SQLITE_OPEN_READ_ONLY`. A schema query confirms the
/// file really is a database the engine can read.
pub fn open_source(path: &Path) -> Result<rusqlite::Connection> {
    let canonical = validate_source_path(path)?;

    tracing::info!("Opening source database: {}", canonical.display());

    let conn = rusqlite::Connection::open_with_flags(
        &canonical,
        rusqlite::OpenFlags::SQLITE_OPEN_READ_ONLY,
    )
    .with_context(|| format!("Failed to open source database: {}", canonical.display()))?;

    // schema_version forces a read of the file header, so a file that
    // is not a database fails here instead of mid-migration
    let _schema_version: i64 = conn
        .query_row("PRAGMA schema_version", [], |row| row.get(0))
        .context("Failed to query source database (file may not be a database)")?;

    Ok(conn)
}

/// Create the destination database file, deleting any pre-existing one.
///
/// Destructive overwrite by design: a file already sitting at the
/// destination path is removed after a logged warning, no backup, no
/// prompt. Running the tool twice therefore yields exactly one copy of
/// the data.
pub fn create_destination(path: &Path) -> Result<rusqlite::Connection> {
    if path.exists() {
        let shown = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
        tracing::warn!("{} exists - will be overwritten", shown.display());
        std::fs::remove_file(path).with_context(|| {
            format!(
                "Failed to delete pre-existing destination file: {}",
                path.display()
            )
        })?;
    }

    tracing::info!("Creating destination database: {}", path.display());

    rusqlite::Connection::open(path)
        .with_context(|| format!("Failed to create destination database: {}", path.display()))
}
