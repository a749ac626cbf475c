use std::env;
use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    pub firebase_database_url: String,
    pub firebase_service_account_key: Option<String>,
    pub firebase_emulator_host: Option<String>,
    pub service_port: u16,
    pub service_host: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let firebase_emulator_host = env::var("FIREBASE_DATABASE_EMULATOR_HOST").ok();

        let firebase_database_url = env::var("FIREBASE_DATABASE_URL")
            .context("FIREBASE_DATABASE_URL environment variable is required")?
            .trim_end_matches('/')
            .to_string();

        // The service account key is only optional when the emulator override
        // is set; the emulator accepts the owner token without real credentials.
        let firebase_service_account_key = if firebase_emulator_host.is_some() {
            env::var("FIREBASE_SERVICE_ACCOUNT_KEY").ok()
        } else {
            Some(
                env::var("FIREBASE_SERVICE_ACCOUNT_KEY")
                    .context("FIREBASE_SERVICE_ACCOUNT_KEY environment variable is required")?,
            )
        };

        let service_port = env::var("SERVICE_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .context("SERVICE_PORT must be a valid port number (0-65535)")?;

        let service_host = env::var("SERVICE_HOST")
            .unwrap_or_else(|_| "0.0.0.0".to_string());

        Ok(Config {
            firebase_database_url,
            firebase_service_account_key,
            firebase_emulator_host,
            service_port,
            service_host,
        })
    }

    pub fn log_startup(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Database emulator: {}",
            self.firebase_emulator_host.as_deref().unwrap_or("disabled (using production)"));
        tracing::info!("  Database URL: {}", self.firebase_database_url);
        tracing::info!("  Service account key: {}",
            if self.firebase_service_account_key.is_some() { "present" } else { "absent" });
        tracing::info!("  Service listening on: {}:{}", self.service_host, self.service_port);
    }
}
