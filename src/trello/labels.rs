use serde_json::Value;

use super::connect;
use crate::{
    error::Result,
    rest::Rest,
    types::{Args, LabelColor},
    utils,
};

/// Client for `/1/labels`.
#[derive(Debug, Clone)]
pub struct Labels {
    url: String,
    rest: Rest,
}

impl Labels {
    /// Creates a labels client.
    pub fn new(url: &str, key: &str, token: &str) -> Result<Self> {
        let (url, rest) = connect(url, key, token)?;
        Ok(Self::bind(&url, rest))
    }

    pub(crate) fn bind(base: &str, rest: Rest) -> Self {
        Self {
            url: format!("{base}/1/labels"),
            rest,
        }
    }

    /// Resource root, `<base>/1/labels`.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Gets a label by id.
    pub async fn get_label(&self, id: &str) -> Result<Value> {
        let id = utils::require("id", id)?;
        self.rest.get::<&str>(&format!("{}/{id}", self.url), &[]).await
    }

    /// Creates a label on a board. `args` must carry `name`, `color` and
    /// `idBoard`; `color` has to be one of the [`LabelColor`] palette.
    pub async fn create_label(&self, args: &Args) -> Result<Value> {
        args.require("name")?;
        args.require("color")?.parse::<LabelColor>()?;
        args.require("idBoard")?;
        self.rest.post(&self.url, args).await
    }

    /// Updates a label. A `color` field, when present, is checked against
    /// the palette.
    pub async fn update_label(&self, id: &str, args: &Args) -> Result<Value> {
        let id = utils::require("id", id)?;
        if let Some(color) = args.get("color") {
            color.parse::<LabelColor>()?;
        }
        self.rest.put(&format!("{}/{id}", self.url), args).await
    }

    /// Deletes the label from its board and every card carrying it.
    pub async fn delete_label(&self, id: &str) -> Result<Value> {
        let id = utils::require("id", id)?;
        self.rest.delete(&self.url, Some(id)).await
    }
}
