//! MySQL type mappings.
//!
//! Decoding works in two phases: `TypeCategory` classifies the column's
//! reported type name into a logical category, then a per-category decoder
//! extracts the value into the unified scalar model. This keeps the
//! classification logic in one place and the extraction ladders short.

use crate::models::{Row, Value};
use sqlx::mysql::{MySqlRow, MySqlTypeInfo, MySqlValueRef};
use sqlx::{Column, Decode, Row as _, Type, TypeInfo};

/// Logical category for MySQL column types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeCategory {
    Integer,
    Float,
    Decimal,
    Boolean,
    Binary,
    Json,
    Temporal,
    Text,
}

/// Classify a MySQL type name into a logical category.
pub fn categorize_type(type_name: &str) -> TypeCategory {
    let lower = type_name.to_lowercase();

    // Decimal/Numeric - check first as "numeric" overlaps with float checks
    if lower.contains("decimal") || lower.contains("numeric") {
        return TypeCategory::Decimal;
    }

    if lower.contains("int") || lower.contains("serial") || lower.contains("tiny") {
        return TypeCategory::Integer;
    }

    if lower == "bool" || lower == "boolean" {
        return TypeCategory::Boolean;
    }

    if lower.contains("float") || lower.contains("double") || lower == "real" {
        return TypeCategory::Float;
    }

    if lower == "json" {
        return TypeCategory::Json;
    }

    if lower.contains("blob") || lower.contains("binary") {
        return TypeCategory::Binary;
    }

    if lower == "datetime"
        || lower == "timestamp"
        || lower == "date"
        || lower == "time"
        || lower == "year"
    {
        return TypeCategory::Temporal;
    }

    // varchar, text, char, enum, set, ...
    TypeCategory::Text
}

/// Wrapper type for raw DECIMAL/NUMERIC values as strings.
/// This preserves the exact database representation.
#[derive(Debug)]
pub struct RawDecimal(pub String);

impl Type<sqlx::MySql> for RawDecimal {
    fn type_info() -> MySqlTypeInfo {
        <String as Type<sqlx::MySql>>::type_info()
    }

    fn compatible(ty: &MySqlTypeInfo) -> bool {
        let name = ty.name().to_lowercase();
        name.contains("decimal") || name.contains("numeric")
    }
}

impl<'r> Decode<'r, sqlx::MySql> for RawDecimal {
    fn decode(value: MySqlValueRef<'r>) -> Result<Self, sqlx::error::BoxDynError> {
        let s = <&str as Decode<sqlx::MySql>>::decode(value)?;
        Ok(RawDecimal(s.to_string()))
    }
}

/// Decode binary data to a text value.
///
/// Valid UTF-8 comes back verbatim; anything else is base64 encoded, so
/// byte-valued columns always surface as text.
pub fn bytes_to_text(bytes: &[u8]) -> Value {
    use base64::{Engine as _, engine::general_purpose::STANDARD};

    match std::str::from_utf8(bytes) {
        Ok(s) => Value::Text(s.to_string()),
        Err(_) => Value::Text(STANDARD.encode(bytes)),
    }
}

/// Decode a full result row into the unified scalar model, preserving the
/// result-set column order.
pub(crate) fn decode_row(row: &MySqlRow) -> Row {
    let mut decoded = Row::with_capacity(row.columns().len());
    for (idx, col) in row.columns().iter().enumerate() {
        let type_name = col.type_info().name();
        let category = categorize_type(type_name);
        decoded.push(col.name(), decode_column(row, idx, category));
    }
    decoded
}

fn decode_column(row: &MySqlRow, idx: usize, category: TypeCategory) -> Value {
    match category {
        TypeCategory::Decimal => decode_decimal(row, idx),
        TypeCategory::Integer => decode_integer(row, idx),
        TypeCategory::Boolean => decode_boolean(row, idx),
        TypeCategory::Float => decode_float(row, idx),
        TypeCategory::Binary => decode_binary(row, idx),
        TypeCategory::Json => decode_json(row, idx),
        TypeCategory::Temporal => decode_temporal(row, idx),
        TypeCategory::Text => decode_text(row, idx),
    }
}

fn decode_decimal(row: &MySqlRow, idx: usize) -> Value {
    match row.try_get::<Option<RawDecimal>, _>(idx) {
        Ok(Some(v)) => Value::Text(v.0),
        Ok(None) => Value::Null,
        Err(e) => {
            tracing::error!("Failed to decode DECIMAL: {:?}", e);
            Value::Null
        }
    }
}

fn decode_integer(row: &MySqlRow, idx: usize) -> Value {
    // Check NULL first
    if let Ok(None) = row.try_get::<Option<i64>, _>(idx) {
        return Value::Null;
    }
    // Try signed types
    if let Ok(Some(v)) = row.try_get::<Option<i8>, _>(idx) {
        return Value::Int(v as i64);
    }
    if let Ok(Some(v)) = row.try_get::<Option<i16>, _>(idx) {
        return Value::Int(v as i64);
    }
    if let Ok(Some(v)) = row.try_get::<Option<i32>, _>(idx) {
        return Value::Int(v as i64);
    }
    if let Ok(Some(v)) = row.try_get::<Option<i64>, _>(idx) {
        return Value::Int(v);
    }
    // Try unsigned types
    if let Ok(Some(v)) = row.try_get::<Option<u8>, _>(idx) {
        return Value::Int(v as i64);
    }
    if let Ok(Some(v)) = row.try_get::<Option<u16>, _>(idx) {
        return Value::Int(v as i64);
    }
    if let Ok(Some(v)) = row.try_get::<Option<u32>, _>(idx) {
        return Value::Int(v as i64);
    }
    if let Ok(Some(v)) = row.try_get::<Option<u64>, _>(idx) {
        // BIGINT UNSIGNED can exceed i64; keep the exact digits as text
        return match i64::try_from(v) {
            Ok(v) => Value::Int(v),
            Err(_) => Value::Text(v.to_string()),
        };
    }
    Value::Null
}

fn decode_boolean(row: &MySqlRow, idx: usize) -> Value {
    row.try_get::<Option<bool>, _>(idx)
        .ok()
        .flatten()
        .map(Value::Bool)
        .unwrap_or(Value::Null)
}

fn decode_float(row: &MySqlRow, idx: usize) -> Value {
    if let Ok(Some(v)) = row.try_get::<Option<f64>, _>(idx) {
        return Value::Float(v);
    }
    if let Ok(Some(v)) = row.try_get::<Option<f32>, _>(idx) {
        return Value::Float(v as f64);
    }
    Value::Null
}

fn decode_binary(row: &MySqlRow, idx: usize) -> Value {
    row.try_get::<Option<Vec<u8>>, _>(idx)
        .ok()
        .flatten()
        .map(|v| bytes_to_text(&v))
        .unwrap_or(Value::Null)
}

fn decode_json(row: &MySqlRow, idx: usize) -> Value {
    // JSON columns surface as serialized text within the scalar model
    row.try_get::<Option<serde_json::Value>, _>(idx)
        .ok()
        .flatten()
        .map(|v| Value::Text(v.to_string()))
        .unwrap_or(Value::Null)
}

fn decode_temporal(row: &MySqlRow, idx: usize) -> Value {
    use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};

    // TIMESTAMP decodes as DateTime<Utc>, DATETIME as NaiveDateTime
    if let Ok(Some(v)) = row.try_get::<Option<DateTime<Utc>>, _>(idx) {
        return Value::Text(v.format("%Y-%m-%d %H:%M:%S").to_string());
    }
    if let Ok(Some(v)) = row.try_get::<Option<NaiveDateTime>, _>(idx) {
        return Value::Text(v.format("%Y-%m-%d %H:%M:%S").to_string());
    }
    if let Ok(Some(v)) = row.try_get::<Option<NaiveDate>, _>(idx) {
        return Value::Text(v.format("%Y-%m-%d").to_string());
    }
    if let Ok(Some(v)) = row.try_get::<Option<NaiveTime>, _>(idx) {
        return Value::Text(v.format("%H:%M:%S").to_string());
    }
    // YEAR and anything else the driver hands back as text
    row.try_get::<Option<String>, _>(idx)
        .ok()
        .flatten()
        .map(Value::Text)
        .unwrap_or(Value::Null)
}

fn decode_text(row: &MySqlRow, idx: usize) -> Value {
    row.try_get::<Option<String>, _>(idx)
        .ok()
        .flatten()
        .map(Value::Text)
        .unwrap_or(Value::Null)
}
