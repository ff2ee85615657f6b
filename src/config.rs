use std::env;

pub const DEFAULT_MONGODB_URI: &str = "mongodb://localhost:27017/realestate";
pub const DEFAULT_TARGET_PHONE: &str = "+15550123456";

/// Settings read from the environment (and `.env`, if present)
#[derive(Debug, Clone)]
pub struct SeedConfig {
    pub mongodb_uri: String,
    // Overrides the database named in the connection string
    pub database_name: Option<String>,
    pub target_phone: String,
}

impl SeedConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        // Blank values count as unset
        let read = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        Self {
            mongodb_uri: read("MONGODB_URI").unwrap_or_else(|| DEFAULT_MONGODB_URI.to_string()),
            database_name: read("MONGODB_DATABASE"),
            target_phone: read("SEED_USER_PHONE")
                .unwrap_or_else(|| DEFAULT_TARGET_PHONE.to_string()),
        }
    }
}
