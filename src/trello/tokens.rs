use serde_json::Value;

use super::connect;
use crate::{error::Result, rest::Rest, utils};

const ALL_FIELDS: &[&str] = &["fields=all"];

/// Client for `/1/tokens`: introspection of an API token, which need not be
/// the token the client authenticates with.
#[derive(Debug, Clone)]
pub struct Tokens {
    url: String,
    rest: Rest,
}

impl Tokens {
    /// Creates a tokens client.
    pub fn new(url: &str, key: &str, token: &str) -> Result<Self> {
        let (url, rest) = connect(url, key, token)?;
        Ok(Self::bind(&url, rest))
    }

    pub(crate) fn bind(base: &str, rest: Rest) -> Self {
        Self {
            url: format!("{base}/1/tokens"),
            rest,
        }
    }

    /// Resource root, `<base>/1/tokens`.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Everything Trello knows about `token`: permissions, expiry and the
    /// application that requested it.
    pub async fn get_token_info(&self, token: &str) -> Result<Value> {
        let token = utils::require("token", token)?;
        self.rest
            .get(&format!("{}/{token}", self.url), ALL_FIELDS)
            .await
    }

    /// The member the token belongs to.
    pub async fn get_token_member(&self, token: &str) -> Result<Value> {
        let token = utils::require("token", token)?;
        self.rest
            .get(&format!("{}/{token}/member", self.url), ALL_FIELDS)
            .await
    }

    /// Webhooks registered with the token.
    pub async fn get_token_webhooks(&self, token: &str) -> Result<Value> {
        let token = utils::require("token", token)?;
        self.rest
            .get(&format!("{}/{token}/webhooks", self.url), ALL_FIELDS)
            .await
    }
}
