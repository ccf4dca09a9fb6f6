//! User repository
//!
//! Database operations for the `users` table, plus an in-memory
//! implementation for tests.

use db::DbConfig;
use error::DatabaseError;

use crate::models::{NewUser, User};

/// Idempotent table definition; safe to execute on every run.
const CREATE_USERS_TABLE: &str = "CREATE TABLE IF NOT EXISTS users (\
     id INT AUTO_INCREMENT PRIMARY KEY,\
     name VARCHAR(50),\
     age INT\
     )";

/// User repository trait for database operations.
///
/// Methods take `&mut self`: the MySQL implementation owns a single
/// exclusive connection rather than a shared pool.
#[allow(async_fn_in_trait)]
pub trait UserRepository: Send {
    /// Create the `users` table if it does not exist yet
    async fn ensure_table(&mut self) -> Result<(), DatabaseError>;

    /// Insert a single row and return it with its assigned id
    async fn insert(&mut self, user: &NewUser) -> Result<User, DatabaseError>;

    /// Total number of rows in the table
    async fn count(&mut self) -> Result<i64, DatabaseError>;

    /// All rows ordered by id
    async fn find_all(&mut self) -> Result<Vec<User>, DatabaseError>;
}

/// Repository backed by a live MySQL connection.
pub struct MySqlUserRepository {
    conn: db::MySqlConnection,
}

impl MySqlUserRepository {
    /// Connect to the configured server.
    pub async fn connect(config: &DbConfig) -> Result<Self, DatabaseError> {
        let conn = db::connect(config).await?;
        Ok(Self { conn })
    }

    /// Close the connection gracefully.
    pub async fn close(self) -> Result<(), DatabaseError> {
        db::disconnect(self.conn).await
    }
}

impl UserRepository for MySqlUserRepository {
    async fn ensure_table(&mut self) -> Result<(), DatabaseError> {
        sqlx::query(CREATE_USERS_TABLE)
            .execute(&mut self.conn)
            .await
            .map_err(|e| {
                tracing::error!("Failed to create users table: {}", e);
                DatabaseError::SchemaFailed(e.to_string())
            })?;
        Ok(())
    }

    async fn insert(&mut self, user: &NewUser) -> Result<User, DatabaseError> {
        let result = sqlx::query("INSERT INTO users (name, age) VALUES (?, ?)")
            .bind(&user.name)
            .bind(user.age)
            .execute(&mut self.conn)
            .await
            .map_err(|e| {
                tracing::error!("Failed to insert user {}: {}", user.name, e);
                DatabaseError::InsertFailed(e.to_string())
            })?;

        Ok(User {
            id: result.last_insert_id() as i32,
            name: user.name.clone(),
            age: user.age,
        })
    }

    async fn count(&mut self) -> Result<i64, DatabaseError> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users")
            .fetch_one(&mut self.conn)
            .await
            .map_err(|e| DatabaseError::QueryFailed(e.to_string()))
    }

    async fn find_all(&mut self) -> Result<Vec<User>, DatabaseError> {
        sqlx::query_as::<_, User>("SELECT id, name, age FROM users ORDER BY id")
            .fetch_all(&mut self.conn)
            .await
            .map_err(|e| DatabaseError::QueryFailed(e.to_string()))
    }
}

/// In-memory repository for testing.
///
/// Models the engine-side behavior the seeder relies on: ids come from a
/// monotonic counter, inserts are rejected until the table exists and
/// when `name` exceeds the column width, and re-provisioning preserves
/// existing rows.
pub struct InMemoryUserRepository {
    users: Vec<User>,
    next_id: i32,
    table_ready: bool,
}

const NAME_COLUMN_WIDTH: usize = 50;

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            users: Vec::new(),
            next_id: 1,
            table_ready: false,
        }
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl UserRepository for InMemoryUserRepository {
    async fn ensure_table(&mut self) -> Result<(), DatabaseError> {
        // CREATE TABLE IF NOT EXISTS: a no-op when the table already exists
        self.table_ready = true;
        Ok(())
    }

    async fn insert(&mut self, user: &NewUser) -> Result<User, DatabaseError> {
        if !self.table_ready {
            return Err(DatabaseError::InsertFailed(
                "Table 'users' doesn't exist".to_string(),
            ));
        }
        if user.name.chars().count() > NAME_COLUMN_WIDTH {
            return Err(DatabaseError::InsertFailed(
                "Data too long for column 'name'".to_string(),
            ));
        }

        let stored = User {
            id: self.next_id,
            name: user.name.clone(),
            age: user.age,
        };
        self.next_id += 1;
        self.users.push(stored.clone());
        Ok(stored)
    }

    async fn count(&mut self) -> Result<i64, DatabaseError> {
        Ok(self.users.len() as i64)
    }

    async fn find_all(&mut self) -> Result<Vec<User>, DatabaseError> {
        Ok(self.users.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_insert_assigns_increasing_ids() {
        let mut repo = InMemoryUserRepository::new();
        repo.ensure_table().await.unwrap();

        let first = repo.insert(&NewUser::new("Shivam", 22)).await.unwrap();
        let second = repo.insert(&NewUser::new("Rahul", 25)).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(repo.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_insert_without_table_fails() {
        let mut repo = InMemoryUserRepository::new();

        let result = repo.insert(&NewUser::new("Shivam", 22)).await;
        let err = result.unwrap_err();
        assert!(err.to_string().starts_with("Insert error:"));
    }

    #[tokio::test]
    async fn test_insert_rejects_overlong_name() {
        let mut repo = InMemoryUserRepository::new();
        repo.ensure_table().await.unwrap();

        let long_name = "x".repeat(51);
        let result = repo.insert(&NewUser::new(long_name, 30)).await;
        assert!(matches!(result, Err(DatabaseError::InsertFailed(_))));
    }

    #[tokio::test]
    async fn test_ensure_table_is_idempotent() {
        let mut repo = InMemoryUserRepository::new();
        repo.ensure_table().await.unwrap();
        repo.insert(&NewUser::new("Shivam", 22)).await.unwrap();

        repo.ensure_table().await.unwrap();
        assert_eq!(repo.count().await.unwrap(), 1);
        assert_eq!(repo.find_all().await.unwrap()[0].name, "Shivam");
    }
}
