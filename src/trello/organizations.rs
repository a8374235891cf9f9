use serde_json::Value;

use super::connect;
use crate::{error::Result, rest::Rest, utils};

/// Client for `/1/organizations` (Trello workspaces).
#[derive(Debug, Clone)]
pub struct Organizations {
    url: String,
    rest: Rest,
}

impl Organizations {
    /// Creates an organizations client.
    pub fn new(url: &str, key: &str, token: &str) -> Result<Self> {
        let (url, rest) = connect(url, key, token)?;
        Ok(Self::bind(&url, rest))
    }

    pub(crate) fn bind(base: &str, rest: Rest) -> Self {
        Self {
            url: format!("{base}/1/organizations"),
            rest,
        }
    }

    /// Resource root, `<base>/1/organizations`.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Gets an organization by id or name.
    pub async fn get(&self, id: &str) -> Result<Value> {
        let id = utils::require("id", id)?;
        self.rest.get::<&str>(&format!("{}/{id}", self.url), &[]).await
    }

    /// Open boards of the organization.
    pub async fn get_boards(&self, id: &str) -> Result<Value> {
        let id = utils::require("id", id)?;
        self.rest
            .get(&format!("{}/{id}/boards", self.url), &["filter=open"])
            .await
    }

    /// Members of the organization.
    pub async fn get_members(&self, id: &str) -> Result<Value> {
        let id = utils::require("id", id)?;
        self.rest
            .get::<&str>(&format!("{}/{id}/members", self.url), &[])
            .await
    }
}
