//! Configuration management for the LMS CLI.
//!
//! This module handles loading and accessing configuration values from
//! environment variables and `.env` files, and builds the immutable server
//! connection configuration every command runs against.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Command-line flags (`--host` / `--port`, highest priority)
//! 2. Environment variables (`LMS_HOST` / `LMS_PORT` / `LMSCLI_PLAYER`)
//! 3. `.env` file in the local data directory
//! 4. Application defaults (`localhost:9000`)

use std::{env, path::PathBuf};

/// Default LMS hostname when neither `--host` nor `LMS_HOST` is given.
pub const DEFAULT_HOST: &str = "localhost";

/// Default LMS web interface port.
pub const DEFAULT_PORT: u16 = 9000;

/// Connection parameters for one LMS server.
///
/// Built exactly once per invocation from command-line flags and
/// environment fallbacks, then threaded through every client call;
/// nothing mutates it afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    /// Resolves the server address from explicit flags with environment
    /// and built-in fallbacks.
    pub fn resolve(host: Option<String>, port: Option<u16>) -> Self {
        let host = host
            .or_else(|| env::var("LMS_HOST").ok().filter(|h| !h.is_empty()))
            .unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = port
            .or_else(|| env::var("LMS_PORT").ok().and_then(|p| p.parse().ok()))
            .unwrap_or(DEFAULT_PORT);
        ServerConfig { host, port }
    }

    /// Base URL of the server's web interface, e.g. `http://localhost:9000`.
    pub fn base_url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

/// Returns the default player name from `LMSCLI_PLAYER`, if set.
///
/// Used as the fallback when neither `--player` nor `--mac` is given on
/// the command line.
pub fn default_player() -> Option<String> {
    env::var("LMSCLI_PLAYER").ok().filter(|name| !name.is_empty())
}

/// Loads environment variables from a `.env` file in the local data directory.
///
/// Creates the necessary directory structure if it doesn't exist and loads
/// environment variables from a `.env` file located in the platform-specific
/// local data directory under `lmscli/.env`. The file is optional: LMS
/// requires no credentials, so a missing file is not an error.
///
/// # Directory Structure
///
/// The function looks for the `.env` file in:
/// - Linux: `~/.local/share/lmscli/.env`
/// - macOS: `~/Library/Application Support/lmscli/.env`
/// - Windows: `%LOCALAPPDATA%/lmscli/.env`
///
/// # Returns
///
/// Returns `Ok(())` if the environment file is successfully loaded or
/// absent, or an error string if directory creation or file parsing fails.
pub async fn load_env() -> Result<(), String> {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("lmscli/.env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if path.is_file() {
        dotenv::from_path(&path).map_err(|e| e.to_string())?;
    }
    Ok(())
}
