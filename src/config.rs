use std::env;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;
use std::time::Duration;

use reqwest::Url;

use crate::error::{AppError, Result};

pub const DEFAULT_WEBHOOK_URL: &str = "http://localhost:5678/webhook/article-agent";
pub const DEFAULT_BACKEND_PROCESS_URL: &str = "http://127.0.0.1:8000/process";

/// Timeout for each outbound webhook call, fallback included.
pub const WEBHOOK_TIMEOUT: Duration = Duration::from_secs(20);
/// Timeout for the form's call to the relay.
pub const BACKEND_TIMEOUT: Duration = Duration::from_secs(25);

/// Relay API configuration, read once at startup.
#[derive(Clone, Debug)]
pub struct Config {
    pub server_addr: SocketAddr,
    pub webhook_url: String,
    pub webhook_timeout: Duration,
}

impl Config {
    pub fn load() -> Result<Self> {
        // Load environment variables from .env file if it exists
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let server_addr = bind_addr(&lookup, "HOST", "PORT", 8000)?;
        let webhook_url = lookup("N8N_WEBHOOK_URL")
            .unwrap_or_else(|| DEFAULT_WEBHOOK_URL.to_string());
        let webhook_url = checked_url("N8N_WEBHOOK_URL", webhook_url)?;

        Ok(Config {
            server_addr,
            webhook_url,
            webhook_timeout: WEBHOOK_TIMEOUT,
        })
    }
}

/// Form UI configuration, read once at startup.
#[derive(Clone, Debug)]
pub struct FormConfig {
    pub server_addr: SocketAddr,
    pub backend_process_url: String,
    pub backend_timeout: Duration,
}

impl FormConfig {
    pub fn load() -> Result<Self> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let server_addr = bind_addr(&lookup, "FORM_HOST", "FORM_PORT", 8501)?;
        let backend_process_url = lookup("BACKEND_PROCESS_URL")
            .unwrap_or_else(|| DEFAULT_BACKEND_PROCESS_URL.to_string());
        let backend_process_url = checked_url("BACKEND_PROCESS_URL", backend_process_url)?;

        Ok(FormConfig {
            server_addr,
            backend_process_url,
            backend_timeout: BACKEND_TIMEOUT,
        })
    }
}

fn bind_addr(
    lookup: &impl Fn(&str) -> Option<String>,
    host_var: &str,
    port_var: &str,
    default_port: u16,
) -> Result<SocketAddr> {
    let host = lookup(host_var).unwrap_or_else(|| "127.0.0.1".to_string());
    let port = match lookup(port_var) {
        Some(port) => port
            .parse::<u16>()
            .map_err(|e| AppError::ConfigError(format!("Invalid port: {}", e)))?,
        None => default_port,
    };
    let ip = IpAddr::from_str(&host)
        .map_err(|e| AppError::ConfigError(format!("Invalid host address: {}", e)))?;

    Ok(SocketAddr::new(ip, port))
}

// The URL is kept as the configured string: the fallback rewrites it textually.
fn checked_url(var: &str, url: String) -> Result<String> {
    Url::parse(&url).map_err(|e| AppError::ConfigError(format!("Invalid {}: {}", var, e)))?;
    Ok(url)
}
