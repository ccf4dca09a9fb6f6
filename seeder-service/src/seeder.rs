//! Seeding procedure
//!
//! The linear bootstrap-and-seed run: ensure the table exists, insert
//! the seed rows in order, report the resulting row count. The first
//! failing step aborts the run; rows inserted before it stay committed.

use error::Result;

use crate::models::{NewUser, User};
use crate::repository::UserRepository;

/// The fixed demo rows. Every run appends them again, so N runs yield
/// 2N rows with identical content.
const SEED_USERS: &[(&str, i32)] = &[("Shivam", 22), ("Rahul", 25)];

/// Outcome of one seeding run.
#[derive(Debug, Clone)]
pub struct SeedReport {
    /// Rows inserted by this run, with their engine-assigned ids
    pub inserted: Vec<User>,
    /// Total rows in the table after this run
    pub total_rows: i64,
}

/// Bootstrap-and-seed procedure over any user repository.
pub struct Seeder {
    users: Vec<NewUser>,
}

impl Seeder {
    /// Create a seeder carrying the fixed demo rows
    pub fn new() -> Self {
        Self::default()
    }

    /// Substitute the rows to seed
    pub fn with_users(users: Vec<NewUser>) -> Self {
        Self { users }
    }

    /// Run the procedure: table, inserts, count.
    pub async fn run<R: UserRepository>(&self, repository: &mut R) -> Result<SeedReport> {
        repository.ensure_table().await?;
        tracing::info!("users table ready");

        let mut inserted = Vec::with_capacity(self.users.len());
        for user in &self.users {
            let stored = repository.insert(user).await?;
            tracing::info!("Inserted {} (age {}) with id {}", stored.name, stored.age, stored.id);
            inserted.push(stored);
        }

        let total_rows = repository.count().await?;
        tracing::info!("Seeding complete: {} rows total", total_rows);

        Ok(SeedReport {
            inserted,
            total_rows,
        })
    }
}

impl Default for Seeder {
    fn default() -> Self {
        Self {
            users: SEED_USERS
                .iter()
                .map(|&(name, age)| NewUser::new(name, age))
                .collect(),
        }
    }
}
