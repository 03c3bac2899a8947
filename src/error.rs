//! Error types for the dualstore data-access layer.
//!
//! This module defines all error types using `thiserror` for ergonomic error
//! handling. Each variant carries enough context for a caller to tell apart
//! input mistakes, connection trouble, and server-side failures.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Connection failed: {message}")]
    Connection { message: String, suggestion: String },

    #[error("Database error: {message}")]
    Database {
        message: String,
        /// e.g., "23000" for an integrity constraint violation
        sql_state: Option<String>,
        suggestion: String,
    },

    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl StoreError {
    /// Create a connection error with a helpful suggestion.
    pub fn connection(message: impl Into<String>, suggestion: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
            suggestion: suggestion.into(),
        }
    }

    /// Create a database error with optional SQL state.
    pub fn database(
        message: impl Into<String>,
        sql_state: Option<String>,
        suggestion: impl Into<String>,
    ) -> Self {
        Self::Database {
            message: message.into(),
            sql_state,
            suggestion: suggestion.into(),
        }
    }

    /// Create an invalid input error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Create an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Get the suggestion for this error, if available.
    pub fn suggestion(&self) -> Option<&str> {
        match self {
            Self::Connection { suggestion, .. } => Some(suggestion),
            Self::Database { suggestion, .. } => Some(suggestion),
            _ => None,
        }
    }

    /// Check if this error is retryable.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Connection { .. })
    }
}

/// Convert sqlx errors to StoreError.
impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Configuration(msg) => StoreError::connection(
                msg.to_string(),
                "Check the connection string format and credentials",
            ),
            sqlx::Error::Database(db_err) => {
                let code = db_err.code().map(|c| c.to_string());
                StoreError::database(
                    db_err.message(),
                    code,
                    "Check the SQL syntax and referenced objects",
                )
            }
            sqlx::Error::RowNotFound => StoreError::database(
                "No rows returned",
                None,
                "Verify the filter conditions match existing data",
            ),
            sqlx::Error::PoolTimedOut => StoreError::connection(
                "Timed out acquiring a connection from the pool",
                "Check for long-running statements holding connections",
            ),
            sqlx::Error::PoolClosed => {
                StoreError::connection("Connection pool is closed", "Reconnect to the database")
            }
            sqlx::Error::Io(io_err) => StoreError::connection(
                format!("I/O error: {}", io_err),
                "Check network connectivity and database server status",
            ),
            sqlx::Error::Tls(tls_err) => StoreError::connection(
                format!("TLS error: {}", tls_err),
                "Verify TLS configuration and certificates",
            ),
            sqlx::Error::Protocol(msg) => StoreError::connection(
                format!("Protocol error: {}", msg),
                "Check database server compatibility",
            ),
            sqlx::Error::ColumnNotFound(col) => {
                StoreError::internal(format!("Column not found: {}", col))
            }
            sqlx::Error::ColumnIndexOutOfBounds { index, len } => StoreError::internal(format!(
                "Column index {} out of bounds (len: {})",
                index, len
            )),
            sqlx::Error::ColumnDecode { index, source } => {
                StoreError::internal(format!("Failed to decode column {}: {}", index, source))
            }
            sqlx::Error::Decode(source) => StoreError::internal(format!("Decode error: {}", source)),
            sqlx::Error::WorkerCrashed => StoreError::internal("Database worker crashed"),
            _ => StoreError::internal(format!("Unknown database error: {}", err)),
        }
    }
}

/// Result type alias for data-access operations.
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = StoreError::connection("Failed to connect", "Check credentials");
        assert!(err.to_string().contains("Connection failed"));
    }

    #[test]
    fn test_error_suggestion() {
        let err = StoreError::database(
            "Syntax error",
            Some("42000".to_string()),
            "Check SQL syntax",
        );
        assert_eq!(err.suggestion(), Some("Check SQL syntax"));
    }

    #[test]
    fn test_invalid_input_has_no_suggestion() {
        let err = StoreError::invalid_input("empty filter");
        assert!(err.suggestion().is_none());
        assert!(err.to_string().contains("Invalid input"));
    }

    #[test]
    fn test_error_retryable() {
        assert!(StoreError::connection("err", "sugg").is_retryable());
        assert!(!StoreError::invalid_input("bad").is_retryable());
        assert!(!StoreError::internal("boom").is_retryable());
    }

    #[test]
    fn test_from_sqlx_row_not_found() {
        let err: StoreError = sqlx::Error::RowNotFound.into();
        assert!(matches!(err, StoreError::Database { .. }));
    }

    #[test]
    fn test_from_sqlx_pool_closed() {
        let err: StoreError = sqlx::Error::PoolClosed.into();
        assert!(matches!(err, StoreError::Connection { .. }));
        assert!(err.is_retryable());
    }

    #[test]
    fn test_from_sqlx_column_not_found() {
        let err: StoreError = sqlx::Error::ColumnNotFound("age".into()).into();
        assert!(matches!(err, StoreError::Internal { .. }));
        assert!(err.to_string().contains("Internal error"));
    }
}
