// ABOUTME: Identifier quoting and destination path derivation
// ABOUTME: Shared helpers for building SQL text and naming the output file

use std::path::{Path, PathBuf};

/// Quote a SQL identifier with double quotes, doubling any embedded
/// quote characters.
///
/// Table and column names come from source-database introspection, not
/// from trusted input, so every identifier formatted into SQL text goes
/// through this.
///
/// # Examples
///
/// ```
/// # use db2sqlite::utils::quote_ident;
/// assert_eq!(quote_ident("users"), "\"users\"");
/// assert_eq!(quote_ident("odd\"name"), "\"odd\"\"name\"");
/// ```
pub fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

/// Derive the destination file path from the source path.
///
/// Replaces the source's last extension with `SQLite`, keeping the file
/// alongside the source: `foo.bar.accdb` becomes `foo.bar.SQLite`. A
/// source with no extension gets `.SQLite` appended.
pub fn derive_destination_path(source: &Path) -> PathBuf {
    source.with_extension("SQLite")
}
