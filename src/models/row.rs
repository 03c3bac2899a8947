//! Result row model.

use crate::models::Value;
use serde::Serialize;
use serde_json::Value as JsonValue;

/// One decoded result row: column names paired with their values, in
/// result-set order.
///
/// Pairs are kept as an ordered list rather than a map so the column order
/// reported by the server survives into the caller's hands. Lookup by name
/// is linear, which is fine for the handful of columns a row carries.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    columns: Vec<(String, Value)>,
}

impl Row {
    /// Create an empty row.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a row with capacity for `n` columns.
    pub fn with_capacity(n: usize) -> Self {
        Self {
            columns: Vec::with_capacity(n),
        }
    }

    /// Append a column to the row.
    pub fn push(&mut self, name: impl Into<String>, value: Value) {
        self.columns.push((name.into(), value));
    }

    /// Get the value for a column by name (first match wins).
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.columns
            .iter()
            .find(|(col, _)| col == name)
            .map(|(_, value)| value)
    }

    /// Number of columns in the row.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Check if the row has no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Iterate the columns in result-set order.
    pub fn iter(&self) -> impl Iterator<Item = &(String, Value)> {
        self.columns.iter()
    }

    /// Convert the row into a JSON object preserving column order semantics.
    pub fn into_json_map(self) -> serde_json::Map<String, JsonValue> {
        self.columns
            .into_iter()
            .map(|(name, value)| (name, value.into()))
            .collect()
    }
}

impl From<Vec<(String, Value)>> for Row {
    fn from(columns: Vec<(String, Value)>) -> Self {
        Self { columns }
    }
}

impl IntoIterator for Row {
    type Item = (String, Value);
    type IntoIter = std::vec::IntoIter<(String, Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.columns.into_iter()
    }
}

impl Serialize for Row {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(self.columns.len()))?;
        for (name, value) in &self.columns {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Row {
        let mut row = Row::new();
        row.push("id", Value::Int(42));
        row.push("name", Value::Text("Ana".into()));
        row.push("age", Value::Int(30));
        row
    }

    #[test]
    fn test_get_by_name() {
        let row = sample();
        assert_eq!(row.get("id"), Some(&Value::Int(42)));
        assert_eq!(row.get("name"), Some(&Value::Text("Ana".into())));
        assert_eq!(row.get("missing"), None);
    }

    #[test]
    fn test_preserves_insertion_order() {
        let row = sample();
        let names: Vec<&str> = row.iter().map(|(name, _)| name.as_str()).collect();
        assert_eq!(names, vec!["id", "name", "age"]);
    }

    #[test]
    fn test_len_and_empty() {
        assert!(Row::new().is_empty());
        assert_eq!(sample().len(), 3);
    }

    #[test]
    fn test_serializes_as_map() {
        let json = serde_json::to_string(&sample()).unwrap();
        assert_eq!(json, r#"{"id":42,"name":"Ana","age":30}"#);
    }

    #[test]
    fn test_into_json_map() {
        let map = sample().into_json_map();
        assert_eq!(map["id"], serde_json::json!(42));
        assert_eq!(map["name"], serde_json::json!("Ana"));
    }

    #[test]
    fn test_from_pairs() {
        let row = Row::from(vec![("x".to_string(), Value::Null)]);
        assert_eq!(row.get("x"), Some(&Value::Null));
    }
}
