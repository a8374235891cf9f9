use serde_json::Value;

use super::connect;
use crate::{
    error::Result,
    rest::Rest,
    types::{Args, LabelColor},
    utils,
};

/// Client for `/1/cards`, including card labels, comments and attachments.
#[derive(Debug, Clone)]
pub struct Cards {
    url: String,
    rest: Rest,
}

impl Cards {
    /// Creates a cards client. `url`, `key` and `token` are all required.
    pub fn new(url: &str, key: &str, token: &str) -> Result<Self> {
        let (url, rest) = connect(url, key, token)?;
        Ok(Self::bind(&url, rest))
    }

    pub(crate) fn bind(base: &str, rest: Rest) -> Self {
        Self {
            url: format!("{base}/1/cards"),
            rest,
        }
    }

    /// Resource root, `<base>/1/cards`.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Gets a card by id, narrowed by `params` such as `fields=name,due`.
    ///
    /// See <https://developers.trello.com/reference/#cardsid-1>.
    pub async fn get_card<S: AsRef<str>>(&self, card_id: &str, params: &[S]) -> Result<Value> {
        let card_id = utils::require("card_id", card_id)?;
        self.rest.get(&format!("{}/{card_id}", self.url), params).await
    }

    /// Creates a card. `args` must carry `name`, `idList` and `idBoard`.
    pub async fn create_card(&self, args: &Args) -> Result<Value> {
        args.require("name")?;
        args.require("idList")?;
        args.require("idBoard")?;
        self.rest.post(&self.url, args).await
    }

    /// Partial update; only the fields present in `args` change.
    pub async fn update_card(&self, card_id: &str, args: &Args) -> Result<Value> {
        let card_id = utils::require("card_id", card_id)?;
        self.rest.put(&format!("{}/{card_id}", self.url), args).await
    }

    /// Moves the card to another list on the same board.
    pub async fn move_card(&self, card_id: &str, list_id: &str) -> Result<Value> {
        let card_id = utils::require("card_id", card_id)?;
        let list_id = utils::require("list_id", list_id)?;
        let args = Args::new().set("idList", list_id);
        self.rest.put(&format!("{}/{card_id}", self.url), &args).await
    }

    /// Deletes the card.
    pub async fn delete_card(&self, card_id: &str) -> Result<Value> {
        let card_id = utils::require("card_id", card_id)?;
        self.rest.delete(&self.url, Some(card_id)).await
    }

    // Labels

    /// Attaches an existing board label to the card.
    ///
    /// See <https://trello.readme.io/reference#cardsididlabels>.
    pub async fn add_label(&self, card_id: &str, label_id: &str) -> Result<Value> {
        let card_id = utils::require("card_id", card_id)?;
        let label_id = utils::require("label_id", label_id)?;
        let args = Args::new().set("value", label_id);
        self.rest
            .post(&format!("{}/{card_id}/idLabels", self.url), &args)
            .await
    }

    /// Detaches a label from the card. The label stays on the board.
    pub async fn remove_label(&self, card_id: &str, label_id: &str) -> Result<Value> {
        let card_id = utils::require("card_id", card_id)?;
        let label_id = utils::require("label_id", label_id)?;
        self.rest
            .delete(&format!("{}/{card_id}/idLabels", self.url), Some(label_id))
            .await
    }

    /// Creates a new label on the card's board and attaches it. `color` is
    /// optional but must belong to [`LabelColor`] when given.
    pub async fn add_custom_label(
        &self,
        card_id: &str,
        color: Option<&str>,
        name: &str,
    ) -> Result<Value> {
        let card_id = utils::require("card_id", card_id)?;
        let name = utils::require("label", name)?;

        let mut args = Args::new().set("name", name);
        if let Some(color) = color {
            let color: LabelColor = color.parse()?;
            args.insert("color", color);
        }

        self.rest
            .post(&format!("{}/{card_id}/labels", self.url), &args)
            .await
    }

    // Comments

    /// Comment actions on the card.
    pub async fn get_comments(&self, card_id: &str) -> Result<Value> {
        let card_id = utils::require("card_id", card_id)?;
        self.rest
            .get(
                &format!("{}/{card_id}/actions", self.url),
                &["filter=commentCard"],
            )
            .await
    }

    /// Posts a comment. `text` must not be blank.
    pub async fn add_comment(&self, card_id: &str, text: &str) -> Result<Value> {
        let card_id = utils::require("card_id", card_id)?;
        let text = utils::require("text", text)?;
        let args = Args::new().set("text", text);
        self.rest
            .post(&format!("{}/{card_id}/actions/comments", self.url), &args)
            .await
    }

    /// Replaces the text of a comment action.
    ///
    /// See <https://trello.readme.io/reference#cardsidactionsidactioncomments>.
    pub async fn update_comment(
        &self,
        card_id: &str,
        comment_id: &str,
        text: &str,
    ) -> Result<Value> {
        let card_id = utils::require("card_id", card_id)?;
        let comment_id = utils::require("comment_id", comment_id)?;
        let args = Args::new().set("text", text);
        self.rest
            .put(
                &format!("{}/{card_id}/actions/{comment_id}/comments", self.url),
                &args,
            )
            .await
    }

    /// Deletes a comment action.
    pub async fn remove_comment(&self, card_id: &str, comment_id: &str) -> Result<Value> {
        let card_id = utils::require("card_id", card_id)?;
        let comment_id = utils::require("comment_id", comment_id)?;
        self.rest
            .delete(
                &format!("{}/{card_id}/actions/{comment_id}/comments", self.url),
                None,
            )
            .await
    }

    // Attachments

    /// Every attachment of the card with all fields.
    pub async fn get_attachments(&self, card_id: &str) -> Result<Value> {
        let card_id = utils::require("card_id", card_id)?;
        self.rest
            .get(
                &format!("{}/{card_id}/attachments", self.url),
                &["fields=all", "filter=false"],
            )
            .await
    }

    /// Attaches a link to the card.
    pub async fn add_attachment(&self, card_id: &str, attachment_url: &str) -> Result<Value> {
        let card_id = utils::require("card_id", card_id)?;
        let attachment_url = utils::require("attachment_url", attachment_url)?;
        let args = Args::new().set("url", attachment_url);
        self.rest
            .post(&format!("{}/{card_id}/attachments", self.url), &args)
            .await
    }

    /// Removes an attachment.
    pub async fn delete_attachment(&self, card_id: &str, attachment_id: &str) -> Result<Value> {
        let card_id = utils::require("card_id", card_id)?;
        let attachment_id = utils::require("attachment_id", attachment_id)?;
        self.rest
            .delete(
                &format!("{}/{card_id}/attachments", self.url),
                Some(attachment_id),
            )
            .await
    }
}
