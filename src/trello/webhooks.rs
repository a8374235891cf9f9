use serde_json::Value;

use super::connect;
use crate::{error::Result, rest::Rest, types::Args, utils};

/// Client for `/1/webhooks`.
#[derive(Debug, Clone)]
pub struct Webhooks {
    url: String,
    rest: Rest,
}

impl Webhooks {
    /// Creates a webhooks client.
    pub fn new(url: &str, key: &str, token: &str) -> Result<Self> {
        let (url, rest) = connect(url, key, token)?;
        Ok(Self::bind(&url, rest))
    }

    pub(crate) fn bind(base: &str, rest: Rest) -> Self {
        Self {
            url: format!("{base}/1/webhooks"),
            rest,
        }
    }

    /// Resource root, `<base>/1/webhooks`.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Gets a webhook by id.
    pub async fn get(&self, id: &str) -> Result<Value> {
        let id = utils::require("id", id)?;
        self.rest.get::<&str>(&format!("{}/{id}", self.url), &[]).await
    }

    /// Registers a webhook. `args` must carry `callbackURL` and `idModel`.
    pub async fn create(&self, args: &Args) -> Result<Value> {
        args.require("callbackURL")?;
        args.require("idModel")?;
        self.rest.post(&self.url, args).await
    }

    /// Changes `callbackURL`, `idModel`, `description` or `active`.
    pub async fn update(&self, id: &str, args: &Args) -> Result<Value> {
        let id = utils::require("id", id)?;
        self.rest.put(&format!("{}/{id}", self.url), args).await
    }

    /// Unregisters the webhook.
    pub async fn delete(&self, id: &str) -> Result<Value> {
        let id = utils::require("id", id)?;
        self.rest.delete(&self.url, Some(id)).await
    }
}
