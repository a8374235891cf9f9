use serde_json::Value;

use super::connect;
use crate::{error::Result, rest::Rest, types::Args, utils};

/// Checklists and check items. Most endpoints hang off the card
/// (`/1/cards/{id}/checklists`, `/1/cards/{id}/checkItem`); creating a
/// check item goes through `/1/checklists/{id}/checkItems`.
#[derive(Debug, Clone)]
pub struct Checklists {
    cards_url: String,
    checklists_url: String,
    rest: Rest,
}

impl Checklists {
    /// Creates a checklists client.
    pub fn new(url: &str, key: &str, token: &str) -> Result<Self> {
        let (url, rest) = connect(url, key, token)?;
        Ok(Self::bind(&url, rest))
    }

    pub(crate) fn bind(base: &str, rest: Rest) -> Self {
        Self {
            cards_url: format!("{base}/1/cards"),
            checklists_url: format!("{base}/1/checklists"),
            rest,
        }
    }

    /// Resource root, `<base>/1/checklists`.
    pub fn url(&self) -> &str {
        &self.checklists_url
    }

    /// Checklists on a card.
    ///
    /// See <https://developers.trello.com/reference/#cardsidchecklists>.
    pub async fn get_checklists(&self, card_id: &str) -> Result<Value> {
        let card_id = utils::require("card_id", card_id)?;
        self.rest
            .get::<&str>(&format!("{}/{card_id}/checklists", self.cards_url), &[])
            .await
    }

    /// Adds a checklist to a card; `args` may carry `name` and `pos`.
    pub async fn create_checklist(&self, card_id: &str, args: &Args) -> Result<Value> {
        let card_id = utils::require("card_id", card_id)?;
        self.rest
            .post(&format!("{}/{card_id}/checklists", self.cards_url), args)
            .await
    }

    /// Removes a checklist from a card.
    pub async fn delete_checklist(&self, card_id: &str, checklist_id: &str) -> Result<Value> {
        let card_id = utils::require("card_id", card_id)?;
        let checklist_id = utils::require("checklist_id", checklist_id)?;
        self.rest
            .delete(
                &format!("{}/{card_id}/checklists", self.cards_url),
                Some(checklist_id),
            )
            .await
    }

    // Check items

    /// A single check item on a card.
    pub async fn get_checklist_item(&self, card_id: &str, check_item_id: &str) -> Result<Value> {
        let card_id = utils::require("card_id", card_id)?;
        let check_item_id = utils::require("check_item_id", check_item_id)?;
        self.rest
            .get::<&str>(
                &format!("{}/{card_id}/checkItem/{check_item_id}", self.cards_url),
                &[],
            )
            .await
    }

    /// Adds a check item to a checklist. `args` must carry `name`.
    pub async fn create_checklist_item(&self, checklist_id: &str, args: &Args) -> Result<Value> {
        let checklist_id = utils::require("checklist_id", checklist_id)?;
        args.require("name")?;
        self.rest
            .post(
                &format!("{}/{checklist_id}/checkItems", self.checklists_url),
                args,
            )
            .await
    }

    /// Updates a check item, e.g. `state=complete`.
    pub async fn update_checklist_item(
        &self,
        card_id: &str,
        check_item_id: &str,
        args: &Args,
    ) -> Result<Value> {
        let card_id = utils::require("card_id", card_id)?;
        let check_item_id = utils::require("check_item_id", check_item_id)?;
        self.rest
            .put(
                &format!("{}/{card_id}/checkItem/{check_item_id}", self.cards_url),
                args,
            )
            .await
    }

    /// Deletes a check item.
    pub async fn delete_checklist_item(&self, card_id: &str, check_item_id: &str) -> Result<Value> {
        let card_id = utils::require("card_id", card_id)?;
        let check_item_id = utils::require("check_item_id", check_item_id)?;
        self.rest
            .delete(
                &format!("{}/{card_id}/checkItem", self.cards_url),
                Some(check_item_id),
            )
            .await
    }
}
