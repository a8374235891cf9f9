use std::path::{Path, PathBuf};

use crate::{config, error::Result, types::AccessToken};

/// Persists the OAuth access token obtained by the login flow as pretty JSON.
#[derive(Debug, Clone)]
pub struct TokenStore {
    path: PathBuf,
}

impl Default for TokenStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenStore {
    /// Store at `<data dir>/cache/token.json`.
    pub fn new() -> Self {
        let mut path = config::data_dir();
        path.push("cache/token.json");
        Self { path }
    }

    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    pub async fn persist(&self, token: &AccessToken) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            async_fs::create_dir_all(parent).await?;
        }

        let json = serde_json::to_string_pretty(token)?;
        async_fs::write(&self.path, json).await?;
        Ok(())
    }

    pub async fn load(&self) -> Result<AccessToken> {
        let content = async_fs::read_to_string(&self.path).await?;
        let token: AccessToken = serde_json::from_str(&content)?;
        Ok(token)
    }

    /// Removes the stored token. Clearing an empty store is a no-op.
    pub async fn clear(&self) -> Result<()> {
        if self.exists() {
            async_fs::remove_file(&self.path).await?;
        }
        Ok(())
    }
}
