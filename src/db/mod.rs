//! Database access layer.
//!
//! This module provides the pooled MySQL client and its supporting pieces:
//! - Statement-text assembly from ordered column/value pairs
//! - Value binding into parameterized queries
//! - Row decoding into the unified scalar model

pub mod client;
pub mod params;
pub mod sql;
pub mod types;

pub use client::Client;
