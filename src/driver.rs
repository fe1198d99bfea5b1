// ABOUTME: Capability traits for source and destination database drivers
// ABOUTME: The migration procedure is written against these, not concrete engines

use anyhow::Result;

use crate::value::Value;

/// One column of a table: name plus the type name the source driver
/// reports, captured in declaration order.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub name: String,
    pub type_name: String,
}

impl Column {
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
        }
    }
}

/// Read-only introspection and row streaming over an opened source database.
///
/// The migration procedure receives this as an explicit argument, so a
/// different file-database engine plugs in by implementing the trait.
pub trait SourceDatabase {
    /// Every base table visible to the connection, deduplicated and
    /// sorted ascending, so creation and population order is
    /// reproducible across runs. System tables are excluded.
    fn list_tables(&self) -> Result<Vec<String>>;

    /// Column name and source-reported type name for `table`, in the
    /// order the driver enumerates them. Never reordered.
    fn table_columns(&self, table: &str) -> Result<Vec<Column>>;

    /// Stream every row of `table` through `on_row`, values in the same
    /// order as [`table_columns`](Self::table_columns). Returns the
    /// number of rows delivered. An error from `on_row` stops the scan.
    fn scan_table(
        &self,
        table: &str,
        on_row: &mut dyn FnMut(Vec<Value>) -> Result<()>,
    ) -> Result<u64>;
}

/// Write access to the destination database being built.
pub trait DestinationDatabase {
    /// Create `table` with the given columns. Type names are emitted
    /// verbatim into the DDL; mapping happens before this call, and an
    /// unacceptable name is the engine's error to raise.
    fn create_table(&mut self, table: &str, columns: &[Column]) -> Result<()>;

    /// Insert one row with its values bound as parameters. One statement
    /// per row, no batching, no transaction wrapping.
    fn insert_row(&mut self, table: &str, columns: &[Column], row: &[Value]) -> Result<()>;
}
