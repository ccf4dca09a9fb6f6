//! Seeder service entry point
//!
//! Connects to the fixed MySQL server, provisions the `users` table and
//! seeds the demo rows. Exits 0 on success, 1 on the first failing step.

use std::process::ExitCode;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use seeder_service::{MySqlUserRepository, SeedReport, Seeder, SeederConfig};

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "seeder_service=info,db=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = SeederConfig::default();
    tracing::info!("Starting Seeder v{}", config.version);

    match run(&config).await {
        Ok(report) => {
            tracing::info!(
                "Seeded {} users, {} rows total",
                report.inserted.len(),
                report.total_rows
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(config: &SeederConfig) -> error::Result<SeedReport> {
    let mut repository = MySqlUserRepository::connect(&config.db).await?;
    tracing::info!("Connected to MySQL at {}:{}", config.db.host, config.db.port);

    let report = Seeder::new().run(&mut repository).await?;

    // Graceful close on the success path only; failure paths above drop
    // the handle and release the socket via RAII.
    repository.close().await?;

    Ok(report)
}
