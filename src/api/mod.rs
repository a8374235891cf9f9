//! # API Module
//!
//! HTTP endpoints of the local server started during `trello auth`.
//!
//! - [`callback`] - Target of Trello's OAuth redirect. Matches the
//!   `oauth_token` against the pending request token and stores the
//!   `oauth_verifier` in the shared login state.
//! - [`health`] - Status and crate version.
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use axum::{Router, routing::get};
//! use trello_api::api::{callback, health};
//!
//! let app = Router::new()
//!     .route("/callback", get(callback))
//!     .route("/health", get(health));
//! ```

mod callback;
mod health;

pub use callback::callback;
pub use health::health;
