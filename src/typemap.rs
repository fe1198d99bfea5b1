// ABOUTME: Source type name to SQLite type mapping
// ABOUTME: Explicit lookup table with verbatim passthrough for unrecognized names

/// Map a source-reported column type name to a SQLite column type.
///
/// Covers the JDBC/Access family of type names a desktop file database
/// reports, plus the SQLite storage classes themselves (which map to
/// themselves). A parenthesized length or precision suffix is ignored
/// for the lookup; SQLite ignores it anyway.
///
/// # Fallback
///
/// Unrecognized names pass through verbatim. SQLite's affinity rules
/// accept almost any type name, so passthrough usually works; when it
/// does not, the resulting CREATE TABLE failure is logged and the run
/// continues with the next table.
///
/// # Examples
///
/// ```
/// # use db2sqlite::typemap::map_source_type;
/// assert_eq!(map_source_type("COUNTER"), "INTEGER");
/// assert_eq!(map_source_type("varchar(255)"), "TEXT");
/// assert_eq!(map_source_type("GEOMETRY"), "GEOMETRY");
/// ```
pub fn map_source_type(type_name: &str) -> String {
    let base = type_name
        .split('(')
        .next()
        .unwrap_or(type_name)
        .trim()
        .to_uppercase();

    let mapped = match base.as_str() {
        // Auto-number / integer family
        "COUNTER" | "AUTOINCREMENT" | "IDENTITY" => "INTEGER",
        "BYTE" | "TINYINT" | "SMALLINT" | "INT" | "INTEGER" | "LONG" | "BIGINT" => "INTEGER",

        // Booleans are stored as 0/1
        "BIT" | "BOOLEAN" | "YESNO" | "LOGICAL" => "INTEGER",

        // Floating point
        "SINGLE" | "DOUBLE" | "FLOAT" | "REAL" => "REAL",

        // Fixed point keeps NUMERIC affinity
        "DECIMAL" | "NUMERIC" | "CURRENCY" | "MONEY" => "NUMERIC",

        // String family
        "CHAR" | "NCHAR" | "VARCHAR" | "NVARCHAR" | "LONGCHAR" | "MEMO" | "TEXT" | "STRING" => {
            "TEXT"
        }
        "GUID" | "UNIQUEIDENTIFIER" => "TEXT",

        // SQLite has no date storage class; ISO-8601 text is the convention
        "DATE" | "TIME" | "DATETIME" | "TIMESTAMP" => "TEXT",

        // Binary family
        "BINARY" | "VARBINARY" | "LONGBINARY" | "OLE" | "IMAGE" | "BLOB" => "BLOB",

        _ => return type_name.to_string(),
    };

    mapped.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_family() {
        assert_eq!(map_source_type("COUNTER"), "INTEGER");
        assert_eq!(map_source_type("LONG"), "INTEGER");
        assert_eq!(map_source_type("SMALLINT"), "INTEGER");
        assert_eq!(map_source_type("BIT"), "INTEGER");
    }

    #[test]
    fn test_string_family() {
        assert_eq!(map_source_type("VARCHAR"), "TEXT");
        assert_eq!(map_source_type("MEMO"), "TEXT");
        assert_eq!(map_source_type("GUID"), "TEXT");
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(map_source_type("varchar"), "TEXT");
        assert_eq!(map_source_type("Counter"), "INTEGER");
    }

    #[test]
    fn test_length_suffix_ignored() {
        assert_eq!(map_source_type("VARCHAR(255)"), "TEXT");
        assert_eq!(map_source_type("DECIMAL(10, 2)"), "NUMERIC");
    }

    #[test]
    fn test_sqlite_storage_classes_map_to_themselves() {
        assert_eq!(map_source_type("INTEGER"), "INTEGER");
        assert_eq!(map_source_type("REAL"), "REAL");
        assert_eq!(map_source_type("TEXT"), "TEXT");
        assert_eq!(map_source_type("BLOB"), "BLOB");
        assert_eq!(map_source_type("NUMERIC"), "NUMERIC");
    }

    #[test]
    fn test_unrecognized_passes_through_verbatim() {
        assert_eq!(map_source_type("GEOMETRY"), "GEOMETRY");
        assert_eq!(map_source_type("SomethingOdd"), "SomethingOdd");
    }
}
