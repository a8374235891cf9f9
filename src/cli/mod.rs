//! # CLI Module
//!
//! Command implementations behind the `trello` binary. Each command builds a
//! [`Trello`] client from the environment, runs one or two resource calls
//! behind a spinner and prints the result, either as pretty JSON or as a
//! table for list-shaped responses.
//!
//! ## Commands
//!
//! - [`auth`] - OAuth 1.0a login through the local callback server
//! - [`board`], [`board_lists`], [`board_labels`] - board queries
//! - [`list`], [`list_cards`] - list queries
//! - [`card`], [`card_comments`] - card queries
//! - [`token_info`] - inspects the token the CLI is using
//!
//! ## Credentials
//!
//! The API key always comes from `TRELLO_API_KEY`. The token comes from
//! `TRELLO_API_TOKEN` or, when unset, from the access token stored by
//! `trello auth`.
//!
//! ## Usage Patterns
//!
//! ```bash
//! trello auth                      # Authorize and store an access token
//! trello boards lists 5f1b2c       # Open lists of a board as a table
//! trello cards comments 60aa01     # Comment actions of a card
//! trello token info                # Which member the token belongs to
//! ```
//!
//! Failures are reported through the colored console macros and end the
//! process with a non-zero status.

mod auth;
mod boards;
mod cards;
mod lists;
mod tokens;

pub use auth::auth;
pub use boards::{board, board_labels, board_lists};
pub use cards::{card, card_comments};
pub use lists::{list, list_cards};
pub use tokens::token_info;

use std::{future::Future, time::Duration};

use indicatif::{ProgressBar, ProgressStyle};
use serde_json::Value;

use crate::{
    config, error,
    error::Result,
    management::TokenStore,
    trello::Trello,
};

/// Token for API calls: `TRELLO_API_TOKEN`, else the stored access token.
async fn resolve_token() -> Result<String> {
    if let Ok(token) = config::trello_token() {
        return Ok(token);
    }

    let store = TokenStore::new();
    if !store.exists() {
        return config::trello_token();
    }
    Ok(store.load().await?.oauth_access_token)
}

async fn client() -> Trello {
    let key = match config::trello_key() {
        Ok(key) => key,
        Err(e) => error!("{}", e),
    };

    let token = match resolve_token().await {
        Ok(token) => token,
        Err(e) => error!("No API token available. Run `trello auth` first.\n{}", e),
    };

    match Trello::with_url(&config::trello_url(), &key, &token) {
        Ok(trello) => trello,
        Err(e) => error!("Cannot create Trello client: {}", e),
    }
}

fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );
    pb
}

/// Runs one request behind a spinner and exits on failure.
async fn fetch<F>(message: &str, request: F) -> Value
where
    F: Future<Output = Result<Value>>,
{
    let pb = spinner(message);
    let result = request.await;
    pb.finish_and_clear();

    match result {
        Ok(value) => value,
        Err(e) => error!("Request failed: {}", e),
    }
}

fn print_json(value: &Value) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => error!("Cannot render response: {}", e),
    }
}

/// Trello reports failures as a JSON payload, not as a transport error.
fn is_error_payload(value: &Value) -> bool {
    !value.is_array() && value.get("error").is_some()
}

fn str_field(value: &Value, field: &str) -> String {
    value[field].as_str().unwrap_or_default().to_string()
}
