use std::env;
use anyhow::{bail, Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    pub service_port: u16,
    pub service_host: String,
    pub api_docs_enabled: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from any key lookup, so tests don't have to touch the process env
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let service_port = lookup("SERVICE_PORT")
            .unwrap_or_else(|| "3000".to_string())
            .parse::<u16>()
            .context("SERVICE_PORT must be a valid port number (0-65535)")?;

        let service_host = lookup("SERVICE_HOST")
            .unwrap_or_else(|| "0.0.0.0".to_string());

        let api_docs_enabled = match lookup("API_DOCS_ENABLED").as_deref() {
            None | Some("") => false,
            Some(value) => parse_flag(value)
                .with_context(|| format!("API_DOCS_ENABLED must be true or false, got '{}'", value))?,
        };

        Ok(Config {
            service_port,
            service_host,
            api_docs_enabled,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.service_host, self.service_port)
    }

    pub fn log_startup(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Service listening on: {}", self.bind_address());
        tracing::info!("  API docs: {}",
            if self.api_docs_enabled { "enabled at /swagger-ui" } else { "disabled" });
    }
}

fn parse_flag(value: &str) -> Result<bool> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        other => bail!("unrecognized flag value '{}'", other),
    }
}
