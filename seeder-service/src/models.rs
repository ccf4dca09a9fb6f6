//! User models
//!
//! Domain models for the seeded `users` table.

use serde::{Deserialize, Serialize};

/// A persisted user row. The id is assigned by MySQL AUTO_INCREMENT,
/// never by this code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub age: i32,
}

/// A user row to insert. `name` is capped at 50 characters by the
/// column type; the database rejects longer values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub age: i32,
}

impl NewUser {
    /// Create a new user row to insert
    pub fn new(name: impl Into<String>, age: i32) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }
}
