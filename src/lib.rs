//! Dualstore Library
//!
//! This library provides a minimal generic data-access layer over MySQL:
//! environment-driven configuration for a pair of logical stores (OLTP and
//! OLAP) and a pooled client exposing Create/Read/Update/Delete operations
//! built from ordered column/value pairs.

pub mod config;
pub mod db;
pub mod error;
pub mod models;

pub use config::{Config, DatabaseConfig};
pub use db::Client;
pub use error::StoreError;
pub use models::{Row, Value};
