mod config;
mod db;
mod notification;
mod seeder;
mod user;

use chrono::Utc;
use dotenv::dotenv;
use std::process::ExitCode;
use tracing::{error, info};

use crate::config::SeedConfig;
use crate::db::store::MongoStore;
use crate::seeder::model::{SeedError, SeedReport};
use crate::seeder::service::SeedService;

#[tokio::main]
async fn main() -> ExitCode {
    // Load .env file if it exists
    dotenv().ok();

    // Initialize logger
    tracing_subscriber::fmt::init();

    let config = SeedConfig::from_env();

    match run(&config).await {
        Ok(report) => {
            print_report(&report);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Seeding failed: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(config: &SeedConfig) -> Result<SeedReport, SeedError> {
    let (client, database) = db::connect(config).await?;

    let service = SeedService::new(MongoStore::new(&database), config.target_phone.clone());
    let result = service.run(Utc::now()).await;

    // Disconnect on both paths
    client.shutdown().await;
    info!("Disconnected from MongoDB");

    result
}

fn print_report(report: &SeedReport) {
    println!(
        "✅ Seeded notifications for {} ({})",
        report.user_name, report.user_id
    );
    println!("🗑️  Removed {} old notifications", report.deleted);
    println!("📬 Inserted {} notifications", report.inserted);
    for (kind, count) in &report.by_type {
        println!("   - {}: {}", kind, count);
    }
    println!("📊 Total notifications: {}", report.total);
    println!("🔔 Unread notifications: {}", report.unread);
    println!("📭 Read notifications: {}", report.read());
}
