//! Process configuration
//!
//! Read once from the environment at startup.

use std::path::PathBuf;

use thiserror::Error;

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_HOST: &str = "127.0.0.1";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid PORT value '{0}'")]
    InvalidPort(String),

    #[error("NUTRICALC_HOST must not be empty")]
    EmptyHost,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database_path: PathBuf,
}

impl Config {
    /// Build from `PORT`, `NUTRICALC_HOST` and `NUTRICALC_DATABASE_PATH`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        let host = match lookup("NUTRICALC_HOST") {
            Some(raw) if raw.trim().is_empty() => return Err(ConfigError::EmptyHost),
            Some(raw) => raw.trim().to_string(),
            None => DEFAULT_HOST.to_string(),
        };

        let database_path = lookup("NUTRICALC_DATABASE_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(default_database_path);

        Ok(Self {
            host,
            port,
            database_path,
        })
    }

    /// Host and port for `TcpListener::bind`; hostnames are resolved there
    pub fn bind_target(&self) -> (&str, u16) {
        (self.host.as_str(), self.port)
    }
}

/// `data/nutricalc.db` under the project root
fn default_database_path() -> PathBuf {
    let mut path = std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(|p| p.to_path_buf()))
        .unwrap_or_else(|| PathBuf::from("."));

    // Go up from target/release or target/debug to project root
    if path.ends_with("release") || path.ends_with("debug") {
        if let Some(grandparent) = path.parent().and_then(|p| p.parent()) {
            path = grandparent.to_path_buf();
        }
    }

    path.push("data");
    path.push("nutricalc.db");
    path
}
