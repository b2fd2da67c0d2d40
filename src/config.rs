use dotenv::dotenv;
use std::env;
use tracing::warn;

use crate::models::Variant;

const DEFAULT_MONGO_URI: &str = "mongodb://mongo:27017/ecommerce";
const DEFAULT_DATABASE_NAME: &str = "ecommerce";
const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:5000";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub mongo_uri: String,
    pub database_name: String,
    pub bind_address: String,
    pub variant: Variant,
    pub cors_enabled: bool,
}

impl AppConfig {
    pub fn from_env() -> Self {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mongo_uri = lookup("MONGO_URI")
            .or_else(|| lookup("MONGODB_URI"))
            .unwrap_or_else(|| DEFAULT_MONGO_URI.to_string());
        let database_name = lookup("DATABASE_NAME")
            .unwrap_or_else(|| DEFAULT_DATABASE_NAME.to_string());
        let bind_address = lookup("BIND_ADDRESS")
            .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string());

        let variant = match lookup("CATALOG_VARIANT") {
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                warn!("Unknown CATALOG_VARIANT {:?}, using catalog", raw);
                Variant::Catalog
            }),
            None => Variant::Catalog,
        };

        let cors_enabled = lookup("CORS_ENABLED")
            .and_then(|raw| parse_flag(&raw))
            .unwrap_or_else(|| variant.cors_by_default());

        AppConfig {
            mongo_uri,
            database_name,
            bind_address,
            variant,
            cors_enabled,
        }
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => {
            warn!("Ignoring unparsable CORS_ENABLED value {:?}", raw);
            None
        }
    }
}
