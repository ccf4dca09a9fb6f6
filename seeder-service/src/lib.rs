//! Seeder service
//!
//! Provisions the `users` table on a MySQL server and seeds it with the
//! fixed demo rows. The seeding procedure is exposed as a library so it
//! can run against an in-memory repository in tests.

pub mod config;
pub mod models;
pub mod repository;
pub mod seeder;

pub use config::SeederConfig;
pub use models::{NewUser, User};
pub use repository::{InMemoryUserRepository, MySqlUserRepository, UserRepository};
pub use seeder::{SeedReport, Seeder};
