pub mod store;

use mongodb::{bson::doc, options::ClientOptions, Client, Database};
use tracing::{error, info};

use crate::config::SeedConfig;

pub const DEFAULT_DATABASE: &str = "realestate";
pub const USERS_COLLECTION: &str = "users";
pub const NOTIFICATIONS_COLLECTION: &str = "notifications";

/// Connect to MongoDB and verify the connection with a `ping`
pub async fn connect(config: &SeedConfig) -> Result<(Client, Database), mongodb::error::Error> {
    info!("Connecting to MongoDB...");

    let options = ClientOptions::parse(&config.mongodb_uri).await?;
    let database_name = resolve_database_name(config, options.default_database.as_deref());
    let client = Client::with_options(options)?;
    let database = client.database(&database_name);

    if let Err(e) = database.run_command(doc! { "ping": 1 }, None).await {
        error!("MongoDB did not answer ping: {}", e);
        client.shutdown().await;
        return Err(e);
    }

    info!("Connected to MongoDB database '{}'", database_name);
    Ok((client, database))
}

// Explicit override, then the database named in the URI, then the default
fn resolve_database_name(config: &SeedConfig, from_uri: Option<&str>) -> String {
    config
        .database_name
        .as_deref()
        .or(from_uri)
        .unwrap_or(DEFAULT_DATABASE)
        .to_string()
}
