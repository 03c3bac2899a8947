//! Statement-text assembly.
//!
//! Builders produce parameterized statement text with one `?` placeholder per
//! value. Inputs are ordered `(column, value)` pairs, so a column name and
//! its placeholder always stay paired positionally; the WHERE conjunction is
//! commutative, so pair order never changes statement meaning.
//!
//! Table and column identifiers are inlined as raw text, unescaped. Values
//! never are.

use crate::models::Value;

/// Build `INSERT INTO t (c1, c2) VALUES (?, ?)`.
pub fn build_insert(table: &str, data: &[(String, Value)]) -> String {
    let columns: Vec<&str> = data.iter().map(|(col, _)| col.as_str()).collect();
    let placeholders = vec!["?"; data.len()];
    format!(
        "INSERT INTO {} ({}) VALUES ({})",
        table,
        columns.join(", "),
        placeholders.join(", ")
    )
}

/// Build `SELECT c1, c2 FROM t [WHERE c = ? AND ...]`.
///
/// An empty column list selects `*`; an empty filter omits the WHERE clause.
pub fn build_select(table: &str, columns: &[&str], filter: &[(String, Value)]) -> String {
    let columns_sql = if columns.is_empty() {
        "*".to_string()
    } else {
        columns.join(", ")
    };

    let mut query = format!("SELECT {} FROM {}", columns_sql, table);
    if !filter.is_empty() {
        query.push_str(" WHERE ");
        query.push_str(&where_clause(filter));
    }
    query
}

/// Build `UPDATE t SET c = ?, ... WHERE c = ? AND ...`.
pub fn build_update(table: &str, data: &[(String, Value)], filter: &[(String, Value)]) -> String {
    let set_parts: Vec<String> = data
        .iter()
        .map(|(col, _)| format!("{} = ?", col))
        .collect();
    format!(
        "UPDATE {} SET {} WHERE {}",
        table,
        set_parts.join(", "),
        where_clause(filter)
    )
}

/// Build `DELETE FROM t WHERE c = ? AND ...`.
pub fn build_delete(table: &str, filter: &[(String, Value)]) -> String {
    format!("DELETE FROM {} WHERE {}", table, where_clause(filter))
}

fn where_clause(filter: &[(String, Value)]) -> String {
    let parts: Vec<String> = filter
        .iter()
        .map(|(col, _)| format!("{} = ?", col))
        .collect();
    parts.join(" AND ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(names: &[&str]) -> Vec<(String, Value)> {
        names
            .iter()
            .map(|name| (name.to_string(), Value::Null))
            .collect()
    }

    #[test]
    fn test_insert_single_column() {
        let sql = build_insert("users", &pairs(&["name"]));
        assert_eq!(sql, "INSERT INTO users (name) VALUES (?)");
    }

    #[test]
    fn test_insert_one_placeholder_per_value() {
        let data = pairs(&["name", "age", "email"]);
        let sql = build_insert("users", &data);
        assert_eq!(sql, "INSERT INTO users (name, age, email) VALUES (?, ?, ?)");
        assert_eq!(sql.matches('?').count(), data.len());
    }

    #[test]
    fn test_insert_columns_follow_pair_order() {
        let sql = build_insert("users", &pairs(&["b", "a"]));
        assert_eq!(sql, "INSERT INTO users (b, a) VALUES (?, ?)");
    }

    #[test]
    fn test_select_all_columns_no_filter() {
        let sql = build_select("users", &[], &[]);
        assert_eq!(sql, "SELECT * FROM users");
    }

    #[test]
    fn test_select_explicit_columns() {
        let sql = build_select("users", &["id", "name"], &[]);
        assert_eq!(sql, "SELECT id, name FROM users");
    }

    #[test]
    fn test_select_with_filter() {
        let sql = build_select("users", &[], &pairs(&["age"]));
        assert_eq!(sql, "SELECT * FROM users WHERE age = ?");
    }

    #[test]
    fn test_select_filter_conjunction() {
        let sql = build_select("users", &["name"], &pairs(&["age", "city"]));
        assert_eq!(sql, "SELECT name FROM users WHERE age = ? AND city = ?");
    }

    #[test]
    fn test_update_shape() {
        let sql = build_update("users", &pairs(&["age"]), &pairs(&["id"]));
        assert_eq!(sql, "UPDATE users SET age = ? WHERE id = ?");
    }

    #[test]
    fn test_update_multiple_assignments_and_conditions() {
        let sql = build_update("users", &pairs(&["age", "city"]), &pairs(&["id", "name"]));
        assert_eq!(
            sql,
            "UPDATE users SET age = ?, city = ? WHERE id = ? AND name = ?"
        );
        assert_eq!(sql.matches('?').count(), 4);
    }

    #[test]
    fn test_delete_shape() {
        let sql = build_delete("users", &pairs(&["id"]));
        assert_eq!(sql, "DELETE FROM users WHERE id = ?");
    }

    #[test]
    fn test_delete_multiple_conditions() {
        let sql = build_delete("users", &pairs(&["name", "age"]));
        assert_eq!(sql, "DELETE FROM users WHERE name = ? AND age = ?");
    }

    #[test]
    fn test_identifiers_inlined_verbatim() {
        // Identifiers are a trust boundary: no quoting or escaping happens.
        let sql = build_select("my_schema.users", &["`weird col`"], &[]);
        assert_eq!(sql, "SELECT `weird col` FROM my_schema.users");
    }
}
