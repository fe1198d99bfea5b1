// ABOUTME: Dynamically typed cell values read from a source database row
// ABOUTME: Classifies values as textual vs everything else and renders SQL literals

use rusqlite::types::{ToSqlOutput, ValueRef};
use rusqlite::ToSql;

/// A single cell value read from a source row.
///
/// Covers the storage classes a file database can hand back. At insert
/// time the only classification that matters is textual (needs quoting
/// when rendered as SQL text) versus everything else.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Integer(i64),
    Real(f64),
    Text(String),
    Blob(Vec<u8>),
}

impl Value {
    /// Whether this value is textual, i.e. would need quoting in SQL text.
    pub fn is_textual(&self) -> bool {
        matches!(self, Value::Text(_))
    }

    /// Render this value as a SQL literal.
    ///
    /// Text is single-quoted with embedded quotes doubled, blobs use
    /// `X'..'` hex notation, NULL and numbers use their native form.
    ///
    /// Inserts never execute this output; rows are always bound as
    /// parameters. The rendering exists for trace logging and
    /// diagnostics, so a value like `O'Brien` is escaped correctly
    /// rather than producing broken SQL text.
    pub fn to_sql_literal(&self) -> String {
        match self {
            Value::Null => "NULL".to_string(),
            Value::Integer(i) => i.to_string(),
            Value::Real(f) => f.to_string(),
            Value::Text(s) => format!("'{}'", s.replace('\'', "''")),
            Value::Blob(b) => {
                let hex: String = b.iter().map(|byte| format!("{:02x}", byte)).collect();
                format!("X'{}'", hex)
            }
        }
    }
}

impl From<rusqlite::types::Value> for Value {
    fn from(v: rusqlite::types::Value) -> Self {
        match v {
            rusqlite::types::Value::Null => Value::Null,
            rusqlite::types::Value::Integer(i) => Value::Integer(i),
            rusqlite::types::Value::Real(f) => Value::Real(f),
            rusqlite::types::Value::Text(s) => Value::Text(s),
            rusqlite::types::Value::Blob(b) => Value::Blob(b),
        }
    }
}

impl ToSql for Value {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(match self {
            Value::Null => ToSqlOutput::Owned(rusqlite::types::Value::Null),
            Value::Integer(i) => ToSqlOutput::Owned(rusqlite::types::Value::Integer(*i)),
            Value::Real(f) => ToSqlOutput::Owned(rusqlite::types::Value::Real(*f)),
            Value::Text(s) => ToSqlOutput::Borrowed(ValueRef::Text(s.as_bytes())),
            Value::Blob(b) => ToSqlOutput::Borrowed(ValueRef::Blob(b)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_text_is_textual() {
        assert!(Value::Text("a".to_string()).is_textual());
        assert!(!Value::Null.is_textual());
        assert!(!Value::Integer(1).is_textual());
        assert!(!Value::Real(1.5).is_textual());
        assert!(!Value::Blob(vec![1]).is_textual());
    }

    #[test]
    fn test_literal_text_quoted() {
        let v = Value::Text("hello".to_string());
        assert_eq!(v.to_sql_literal(), "'hello'");
    }

    #[test]
    fn test_literal_embedded_quote_doubled() {
        let v = Value::Text("O'Brien".to_string());
        assert_eq!(v.to_sql_literal(), "'O''Brien'");
    }

    #[test]
    fn test_literal_non_textual_verbatim() {
        assert_eq!(Value::Null.to_sql_literal(), "NULL");
        assert_eq!(Value::Integer(42).to_sql_literal(), "42");
        assert_eq!(Value::Real(1.5).to_sql_literal(), "1.5");
    }

    #[test]
    fn test_literal_blob_hex() {
        let v = Value::Blob(vec![0x01, 0xab]);
        assert_eq!(v.to_sql_literal(), "X'01ab'");
    }

    #[test]
    fn test_from_rusqlite_value() {
        let v = Value::from(rusqlite::types::Value::Text("x".to_string()));
        assert_eq!(v, Value::Text("x".to_string()));

        let v = Value::from(rusqlite::types::Value::Null);
        assert_eq!(v, Value::Null);
    }
}
