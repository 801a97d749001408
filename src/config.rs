use std::env;

use crate::services::restaurants::TenantPolicy;

/// Restaurant used when neither an explicit id nor the fallback handle resolves.
pub const DEFAULT_RESTAURANT_ID: i32 = 1;

/// Runtime settings read from the environment (and `.env`, when present).
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub database_url: String,
    pub address: String,
    pub port: u16,
    pub templates_dir: String,
    /// Adds wide-open CORS headers to every response. Testing only.
    pub permissive_cors: bool,
    pub tenant_policy: TenantPolicy,
}

impl ServerConfig {
    /// Reads the configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        let database_url = env::var("DATABASE_URL").unwrap_or("app.db".to_string());
        let address = env::var("ADDRESS").unwrap_or("127.0.0.1".to_string());
        let port = env::var("PORT")
            .ok()
            .and_then(|port| port.parse::<u16>().ok())
            .unwrap_or(8080);
        let templates_dir = env::var("TEMPLATES_DIR").unwrap_or("templates".to_string());
        let permissive_cors = env::var("PERMISSIVE_CORS")
            .map(|value| parse_bool(&value))
            .unwrap_or(true);

        let fallback_username = env::var("FALLBACK_USERNAME")
            .ok()
            .filter(|value| !value.trim().is_empty());
        let default_restaurant_id = env::var("FALLBACK_RESTAURANT_ID")
            .ok()
            .and_then(|value| value.parse::<i32>().ok())
            .filter(|id| *id > 0)
            .unwrap_or(DEFAULT_RESTAURANT_ID);

        Self {
            database_url,
            address,
            port,
            templates_dir,
            permissive_cors,
            tenant_policy: TenantPolicy::new(fallback_username, default_restaurant_id),
        }
    }
}

fn parse_bool(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
