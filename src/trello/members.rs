use serde_json::Value;

use super::connect;
use crate::{error::Result, rest::Rest, utils};

/// Client for `/1/members`. `id` may be a member id, a username or `me`.
#[derive(Debug, Clone)]
pub struct Members {
    url: String,
    rest: Rest,
}

impl Members {
    /// Creates a members client.
    pub fn new(url: &str, key: &str, token: &str) -> Result<Self> {
        let (url, rest) = connect(url, key, token)?;
        Ok(Self::bind(&url, rest))
    }

    pub(crate) fn bind(base: &str, rest: Rest) -> Self {
        Self {
            url: format!("{base}/1/members"),
            rest,
        }
    }

    /// Resource root, `<base>/1/members`.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Gets a member.
    pub async fn get(&self, id: &str) -> Result<Value> {
        let id = utils::require("id", id)?;
        self.rest.get::<&str>(&format!("{}/{id}", self.url), &[]).await
    }

    /// Boards the member belongs to, narrowed by `params` such as
    /// `filter=open`.
    pub async fn get_boards<S: AsRef<str>>(&self, id: &str, params: &[S]) -> Result<Value> {
        let id = utils::require("id", id)?;
        self.rest.get(&format!("{}/{id}/boards", self.url), params).await
    }

    /// Cards the member is assigned to.
    pub async fn get_cards<S: AsRef<str>>(&self, id: &str, params: &[S]) -> Result<Value> {
        let id = utils::require("id", id)?;
        self.rest.get(&format!("{}/{id}/cards", self.url), params).await
    }

    /// Organizations the member belongs to.
    pub async fn get_organizations(&self, id: &str) -> Result<Value> {
        let id = utils::require("id", id)?;
        self.rest
            .get::<&str>(&format!("{}/{id}/organizations", self.url), &[])
            .await
    }
}
