use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

pub const DEFAULT_PORT: &str = "3001";
pub const DEFAULT_WIKIPEDIA_API_URL: &str = "https://en.wikipedia.org/w/api.php";

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub wikipedia_api_url: String,
    pub templates_dir: PathBuf,
    pub assets_dir: PathBuf,
}

impl Config {
    /// Build the configuration from the process environment.
    /// A `.env` file in the working directory is loaded first if present.
    pub fn from_env() -> Result<Self> {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup (useful for tests).
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get_or_default =
            |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let port = get_or_default("PORT", DEFAULT_PORT);
        let port = port
            .parse::<u16>()
            .with_context(|| format!("Invalid PORT value: '{port}'"))?;

        Ok(Config {
            port,
            wikipedia_api_url: get_or_default("WIKIPEDIA_API_URL", DEFAULT_WIKIPEDIA_API_URL),
            templates_dir: get_or_default("TEMPLATES_DIR", "templates").into(),
            assets_dir: get_or_default("ASSETS_DIR", "assets").into(),
        })
    }

    pub fn bind_address(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}
