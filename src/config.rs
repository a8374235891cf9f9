//! Configuration management for the Trello client.
//!
//! Values come from environment variables, optionally seeded from a `.env`
//! file in the local data directory. Process environment wins over the file
//! because `dotenv` never overwrites variables that are already set.
//!
//! Credentials have no default and are reported as [`Error::Config`] when
//! missing. Everything else falls back to a default.

use std::{env, path::PathBuf};

use crate::error::{Error, Result};

pub const APP_DIR: &str = "trello-api";

pub const DEFAULT_TRELLO_URL: &str = "https://api.trello.com";
pub const DEFAULT_OAUTH_CALLBACK: &str = "http://127.0.0.1:8080/callback";
pub const DEFAULT_APP_NAME: &str = "trello-api";
pub const DEFAULT_SERVER_ADDRESS: &str = "127.0.0.1:8080";

/// Root of everything the application stores locally.
///
/// - Linux: `~/.local/share/trello-api`
/// - macOS: `~/Library/Application Support/trello-api`
/// - Windows: `%LOCALAPPDATA%/trello-api`
pub fn data_dir() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push(APP_DIR);
    path
}

/// Loads `<data dir>/.env` into the process environment.
///
/// The data directory is created when absent. A missing `.env` file is not
/// an error; a malformed one is.
///
/// # Example
///
/// ```
/// use trello_api::config;
///
/// #[tokio::main]
/// async fn main() {
///     if let Err(e) = config::load_env().await {
///         eprintln!("Configuration error: {}", e);
///     }
/// }
/// ```
pub async fn load_env() -> Result<()> {
    let dir = data_dir();
    async_fs::create_dir_all(&dir).await?;

    let path = dir.join(".env");
    if !path.is_file() {
        return Ok(());
    }

    dotenv::from_path(&path)
        .map_err(|e| Error::Config(format!("cannot load {}: {}", path.display(), e)))?;
    tracing::debug!(path = %path.display(), "loaded environment file");
    Ok(())
}

fn required(name: &str) -> Result<String> {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(Error::Config(format!("{name} must be set"))),
    }
}

fn with_default(name: &str, default: &str) -> String {
    env::var(name)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

/// API key from `TRELLO_API_KEY`.
pub fn trello_key() -> Result<String> {
    required("TRELLO_API_KEY")
}

/// API token from `TRELLO_API_TOKEN`. The CLI falls back to the stored
/// OAuth access token when this is unset.
pub fn trello_token() -> Result<String> {
    required("TRELLO_API_TOKEN")
}

/// OAuth consumer secret from `TRELLO_API_SECRET`, only needed for login.
pub fn trello_secret() -> Result<String> {
    required("TRELLO_API_SECRET")
}

pub fn trello_url() -> String {
    with_default("TRELLO_API_URL", DEFAULT_TRELLO_URL)
}

/// Where Trello redirects the browser after the user approves the request
/// token. Has to point at [`server_addr`].
pub fn oauth_callback() -> String {
    with_default("TRELLO_OAUTH_CALLBACK", DEFAULT_OAUTH_CALLBACK)
}

/// Application name shown on Trello's authorize page.
pub fn app_name() -> String {
    with_default("TRELLO_APP_NAME", DEFAULT_APP_NAME)
}

/// Bind address of the local OAuth callback server.
pub fn server_addr() -> String {
    with_default("SERVER_ADDRESS", DEFAULT_SERVER_ADDRESS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_variables_fall_back_or_fail() {
        assert_eq!(
            with_default("TRELLO_API_CONFIG_TEST_UNSET", DEFAULT_APP_NAME),
            "trello-api"
        );
        assert!(matches!(
            required("TRELLO_API_CONFIG_TEST_UNSET"),
            Err(Error::Config(message)) if message.contains("TRELLO_API_CONFIG_TEST_UNSET")
        ));
    }

    #[test]
    fn data_dir_is_app_scoped() {
        assert!(data_dir().ends_with(APP_DIR));
    }
}
