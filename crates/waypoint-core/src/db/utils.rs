//! Column conversion helpers shared by the query modules.

use jiff::Timestamp;
use rusqlite::{types::Type, Row};
use serde::{de::DeserializeOwned, Serialize};

use crate::error::Result;

/// Reads an RFC 3339 text column as a timestamp.
pub(super) fn timestamp_column(row: &Row, idx: usize) -> rusqlite::Result<Timestamp> {
    row.get::<_, String>(idx)?
        .parse::<Timestamp>()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}

/// Reads a JSON text column.
pub(super) fn json_column<T: DeserializeOwned>(row: &Row, idx: usize) -> rusqlite::Result<T> {
    let text: String = row.get(idx)?;
    serde_json::from_str(&text)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}

/// Reads an integer id column.
pub(super) fn id_column(row: &Row, idx: usize) -> rusqlite::Result<u64> {
    Ok(row.get::<_, i64>(idx)? as u64)
}

/// Encodes a value for a JSON text column.
pub(super) fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string(value)?)
}

impl super::Database {
    /// Placeholder list `?1, ?2, ...` for an `IN (...)` clause.
    pub(super) fn placeholders(count: usize) -> String {
        (1..=count)
            .map(|i| format!("?{i}"))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::super::Database;

    #[test]
    fn test_placeholders() {
        assert_eq!(Database::placeholders(0), "");
        assert_eq!(Database::placeholders(3), "?1, ?2, ?3");
    }
}
