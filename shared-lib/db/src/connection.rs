//! Single-connection lifecycle management.

use sqlx::{Connection, MySqlConnection};

use crate::config::DbConfig;
use error::DatabaseError;

/// Open a connection to the configured MySQL server.
pub async fn connect(config: &DbConfig) -> Result<MySqlConnection, DatabaseError> {
    tracing::info!(
        "Connecting to MySQL: {}:{}/{}",
        config.host,
        config.port,
        config.database
    );

    let conn = MySqlConnection::connect(&config.connection_url())
        .await
        .map_err(|e| {
            tracing::error!("Failed to connect to MySQL: {}", e);
            DatabaseError::ConnectionFailed(e.to_string())
        })?;

    tracing::info!("Connected to MySQL");
    Ok(conn)
}

/// Check if the database connection is healthy.
pub async fn health_check(conn: &mut MySqlConnection) -> Result<(), DatabaseError> {
    sqlx::query("SELECT 1")
        .execute(conn)
        .await
        .map_err(|e| DatabaseError::QueryFailed(e.to_string()))?;
    Ok(())
}

/// Close the connection gracefully, sending the protocol quit handshake.
pub async fn disconnect(conn: MySqlConnection) -> Result<(), DatabaseError> {
    conn.close()
        .await
        .map_err(|e| DatabaseError::ConnectionFailed(e.to_string()))
}
