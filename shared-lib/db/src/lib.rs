//! MySQL connection utilities for the seeder workspace.
//!
//! This crate manages a single sqlx connection; there is no pool. The
//! seeding procedure owns one blocking connection for its whole lifetime.

mod config;
mod connection;

pub use config::DbConfig;
pub use connection::{connect, disconnect, health_check};

// Re-export sqlx types for convenience
pub use sqlx::{self, MySqlConnection};
