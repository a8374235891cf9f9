use serde_json::Value;

use super::connect;
use crate::{error::Result, rest::Rest, types::Args, utils};

const DEFAULT_FIELDS: &[&str] = &["fields=all"];

/// Client for `/1/boards`.
#[derive(Debug, Clone)]
pub struct Boards {
    url: String,
    rest: Rest,
}

impl Boards {
    /// Creates a boards client. `url`, `key` and `token` are all required.
    pub fn new(url: &str, key: &str, token: &str) -> Result<Self> {
        let (url, rest) = connect(url, key, token)?;
        Ok(Self::bind(&url, rest))
    }

    pub(crate) fn bind(base: &str, rest: Rest) -> Self {
        Self {
            url: format!("{base}/1/boards"),
            rest,
        }
    }

    /// Resource root, `<base>/1/boards`.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Gets a board by id. `params` are optional filters such as
    /// `fields=name,desc`.
    ///
    /// See <https://developers.trello.com/reference/#boardsboardid-1>.
    pub async fn get<S: AsRef<str>>(&self, id: &str, params: &[S]) -> Result<Value> {
        let id = utils::require("id", id)?;
        self.rest.get(&format!("{}/{id}", self.url), params).await
    }

    /// Creates a board. `args` must carry `name`; every other board field
    /// (`desc`, `idOrganization`, `idBoardSource`, ...) is passed through.
    pub async fn create_board(&self, args: &Args) -> Result<Value> {
        args.require("name")?;
        self.rest.post(&self.url, args).await
    }

    /// Deletes a board for good. Closing it is an `update` of `closed`.
    pub async fn delete_board(&self, id: &str) -> Result<Value> {
        let id = utils::require("id", id)?;
        self.rest.delete(&self.url, Some(id)).await
    }

    /// Open lists on the board. Defaults to `fields=all`.
    pub async fn get_lists(&self, board_id: &str, params: Option<&[&str]>) -> Result<Value> {
        let board_id = utils::require("board_id", board_id)?;
        let params = params.unwrap_or(DEFAULT_FIELDS);
        self.rest
            .get(&format!("{}/{board_id}/lists/open", self.url), params)
            .await
    }

    /// Labels defined on the board. Defaults to `fields=all`.
    pub async fn get_labels(&self, board_id: &str, params: Option<&[&str]>) -> Result<Value> {
        let board_id = utils::require("board_id", board_id)?;
        let params = params.unwrap_or(DEFAULT_FIELDS);
        self.rest
            .get(&format!("{}/{board_id}/labels", self.url), params)
            .await
    }
}
