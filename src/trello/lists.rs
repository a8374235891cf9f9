use serde_json::Value;

use super::connect;
use crate::{error::Result, rest::Rest, types::Args, utils};

/// All fields, attachments and comments of every card.
const DEFAULT_CARD_PARAMS: &[&str] = &["fields=all", "attachments=true", "actions=commentCard"];

/// Client for `/1/lists`.
#[derive(Debug, Clone)]
pub struct Lists {
    url: String,
    rest: Rest,
}

impl Lists {
    /// Creates a lists client. `url`, `key` and `token` are all required.
    pub fn new(url: &str, key: &str, token: &str) -> Result<Self> {
        let (url, rest) = connect(url, key, token)?;
        Ok(Self::bind(&url, rest))
    }

    pub(crate) fn bind(base: &str, rest: Rest) -> Self {
        Self {
            url: format!("{base}/1/lists"),
            rest,
        }
    }

    /// Resource root, `<base>/1/lists`.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Gets a list by id.
    pub async fn get(&self, id: &str) -> Result<Value> {
        let id = utils::require("id", id)?;
        self.rest.get::<&str>(&format!("{}/{id}", self.url), &[]).await
    }

    /// The board a list is on.
    pub async fn get_board(&self, id: &str) -> Result<Value> {
        let id = utils::require("id", id)?;
        self.rest
            .get::<&str>(&format!("{}/{id}/board", self.url), &[])
            .await
    }

    /// Creates a list. `args` must carry `name` and `idBoard`.
    pub async fn create_list(&self, args: &Args) -> Result<Value> {
        args.require("name")?;
        args.require("idBoard")?;
        self.rest.post(&self.url, args).await
    }

    /// Updates the fields present in `args`, e.g. `name` or `closed`.
    pub async fn update(&self, id: &str, args: &Args) -> Result<Value> {
        let id = utils::require("id", id)?;
        self.rest.put(&format!("{}/{id}", self.url), args).await
    }

    /// Moves the list; `args.value` is `top`, `bottom` or a position.
    pub async fn update_pos(&self, id: &str, args: &Args) -> Result<Value> {
        let id = utils::require("id", id)?;
        args.require("value")?;
        self.rest.put(&format!("{}/{id}/pos", self.url), args).await
    }

    /// Renames the list to `args.value`.
    pub async fn rename_list(&self, id: &str, args: &Args) -> Result<Value> {
        let id = utils::require("id", id)?;
        args.require("value")?;
        self.rest.put(&format!("{}/{id}/name", self.url), args).await
    }

    /// Archives (`close = true`) or unarchives a list.
    pub async fn close_list(&self, id: &str, close: bool) -> Result<Value> {
        let id = utils::require("id", id)?;
        let args = Args::new().set("value", close);
        self.rest.put(&format!("{}/{id}/closed", self.url), &args).await
    }

    /// Subscribes to or unsubscribes from a list.
    pub async fn subscribe(&self, id: &str, subscribed: bool) -> Result<Value> {
        let id = utils::require("id", id)?;
        let args = Args::new().set("value", subscribed);
        self.rest
            .put(&format!("{}/{id}/subscribed", self.url), &args)
            .await
    }

    /// Cards in the list. Without `params` every field is requested, with
    /// attachments and comment actions.
    pub async fn get_cards(&self, id: &str, params: Option<&[&str]>) -> Result<Value> {
        let id = utils::require("id", id)?;
        let params = params.unwrap_or(DEFAULT_CARD_PARAMS);
        self.rest.get(&format!("{}/{id}/cards", self.url), params).await
    }

    /// Archives every card in the list.
    pub async fn archive_all_cards(&self, id: &str) -> Result<Value> {
        let id = utils::require("id", id)?;
        self.rest
            .post(&format!("{}/{id}/archiveAllCards", self.url), &Args::new())
            .await
    }

    /// Moves every card to another list. `args` must carry `idBoard` and
    /// `idList`.
    pub async fn move_all_cards(&self, id: &str, args: &Args) -> Result<Value> {
        let id = utils::require("id", id)?;
        args.require("idBoard")?;
        args.require("idList")?;
        self.rest
            .post(&format!("{}/{id}/moveAllCards", self.url), args)
            .await
    }
}
