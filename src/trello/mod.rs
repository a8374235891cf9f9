//! # Trello Integration Module
//!
//! Resource clients for the Trello REST API and the OAuth 1.0a token
//! exchange.
//!
//! ## Architecture
//!
//! ```text
//! Application Layer (CLI, library callers)
//!          ↓
//! Trello façade (factory per resource)
//!     ├── Boards, Cards, Lists, Labels, Checklists
//!     ├── Webhooks, Organizations, Members, Tokens
//!     └── OAuth (request token → authorize → access token)
//!          ↓
//! Request layer (crate::rest, credential injection)
//!          ↓
//! Trello REST API (https://api.trello.com/1/...)
//! ```
//!
//! Every resource method follows the same four steps: validate the
//! identifiers and required body fields it needs, validate enumerated values
//! such as label colors, build the endpoint URL and hand it to the request
//! layer. The JSON body is returned as-is; a Trello error payload is a
//! successful result and callers inspect it themselves.
//!
//! ## Construction
//!
//! Resource clients can be built standalone from `(url, key, token)` or
//! obtained from a [`Trello`] value, which hands out a fresh client on every
//! call and caches nothing.
//!
//! ```rust
//! let trello = Trello::with_url("https://api.trello.com", "key", "token")?;
//! let lists = trello.boards().get_lists("5f1b2c", None).await?;
//! let card = trello.cards().get_card("60aa01", &["fields=name,due"]).await?;
//! ```

pub mod auth;
pub mod boards;
pub mod cards;
pub mod checklists;
pub mod labels;
pub mod lists;
pub mod members;
pub mod organizations;
pub mod tokens;
pub mod webhooks;

use std::sync::Arc;

pub use auth::OAuth;
pub use boards::Boards;
pub use cards::Cards;
pub use checklists::Checklists;
pub use labels::Labels;
pub use lists::Lists;
pub use members::Members;
pub use organizations::Organizations;
pub use tokens::Tokens;
pub use webhooks::Webhooks;

use crate::{
    config,
    error::Result,
    rest::{RequestLogger, Rest},
    utils,
};

pub const TRELLO_URL: &str = "https://api.trello.com";

/// Entry point holding the base URL and the request layer.
#[derive(Debug, Clone)]
pub struct Trello {
    url: String,
    rest: Rest,
}

impl Trello {
    /// Client against the public Trello API.
    pub fn new(key: &str, token: &str) -> Result<Self> {
        Self::with_url(TRELLO_URL, key, token)
    }

    pub fn with_url(url: &str, key: &str, token: &str) -> Result<Self> {
        Self::with_rest(url, Rest::new(key, token)?)
    }

    pub fn with_logger(
        url: &str,
        key: &str,
        token: &str,
        logger: Arc<dyn RequestLogger>,
    ) -> Result<Self> {
        Self::with_rest(url, Rest::with_logger(key, token, logger)?)
    }

    pub fn with_rest(url: &str, rest: Rest) -> Result<Self> {
        Ok(Self {
            url: base_url(url)?,
            rest,
        })
    }

    /// Builds a client from `TRELLO_API_URL`, `TRELLO_API_KEY` and
    /// `TRELLO_API_TOKEN`.
    pub fn from_env() -> Result<Self> {
        Self::with_url(
            &config::trello_url(),
            &config::trello_key()?,
            &config::trello_token()?,
        )
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn rest(&self) -> &Rest {
        &self.rest
    }

    pub fn boards(&self) -> Boards {
        Boards::bind(&self.url, self.rest.clone())
    }

    pub fn cards(&self) -> Cards {
        Cards::bind(&self.url, self.rest.clone())
    }

    pub fn lists(&self) -> Lists {
        Lists::bind(&self.url, self.rest.clone())
    }

    pub fn labels(&self) -> Labels {
        Labels::bind(&self.url, self.rest.clone())
    }

    pub fn checklists(&self) -> Checklists {
        Checklists::bind(&self.url, self.rest.clone())
    }

    pub fn webhooks(&self) -> Webhooks {
        Webhooks::bind(&self.url, self.rest.clone())
    }

    pub fn organizations(&self) -> Organizations {
        Organizations::bind(&self.url, self.rest.clone())
    }

    pub fn members(&self) -> Members {
        Members::bind(&self.url, self.rest.clone())
    }

    pub fn tokens(&self) -> Tokens {
        Tokens::bind(&self.url, self.rest.clone())
    }
}

/// Validates a service base URL and trims trailing slashes.
pub(crate) fn base_url(url: &str) -> Result<String> {
    let url = utils::require("url", url)?;
    Ok(url.trim().trim_end_matches('/').to_string())
}

/// Shared constructor body of every resource client: validates the base URL
/// before the credentials, then builds the request layer.
pub(crate) fn connect(url: &str, key: &str, token: &str) -> Result<(String, Rest)> {
    let url = base_url(url)?;
    let rest = Rest::new(key, token)?;
    Ok((url, rest))
}
