//! # Taskboard Shared Library
//!
//! This crate contains the storage layer used by the Taskboard API server:
//! the SQLite connection pool, the schema bootstrap, and the database models.
//!
//! ## Module Organization
//!
//! - `db`: connection pool and migration runner
//! - `models`: database models and their query operations

pub mod db;
pub mod models;

/// Current version of the taskboard shared library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
