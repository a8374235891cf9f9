//! Trello REST API client library
//!
//! This library wraps the Trello REST API (boards, cards, lists, labels,
//! checklists, webhooks, organizations, members and tokens) and the Trello
//! OAuth 1.0a login handshake. Every resource call validates its inputs,
//! builds the endpoint URL, injects the API key and token and returns the
//! parsed JSON body unmodified.
//!
//! # Modules
//!
//! - `api` - HTTP endpoints for the local OAuth callback server
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration management and environment variables
//! - `error` - Error type shared by every layer
//! - `management` - Persistence of OAuth access tokens
//! - `rest` - Shared HTTP request layer with credential injection
//! - `server` - Local HTTP server for OAuth callbacks
//! - `trello` - Resource clients and the OAuth token exchange
//! - `types` - Data structures and type definitions
//! - `utils` - Validation, masking and OAuth signing helpers
//!
//! # Example
//!
//! ```
//! use trello_api::{Trello, types::Args};
//!
//! #[tokio::main]
//! async fn main() -> trello_api::Result<()> {
//!     let trello = Trello::new("my-key", "my-token")?;
//!     let board = trello.boards().get("5f1b2c", &["fields=name"]).await?;
//!     let list = trello
//!         .lists()
//!         .create_list(&Args::new().set("name", "Backlog").set("idBoard", "5f1b2c"))
//!         .await?;
//!     println!("{board} {list}");
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod management;
pub mod rest;
pub mod server;
pub mod trello;
pub mod types;
pub mod utils;

pub use error::{Error, Result};
pub use rest::{Diagnostic, RequestLogger, Rest, TracingLogger};
pub use trello::Trello;

/// Prints an informational message with a blue bullet point.
///
/// # Example
///
/// ```
/// info!("Waiting for the Trello authorization callback...");
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// # Example
///
/// ```
/// success!("Authorized as {}", member);
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Only the command-line front end uses this macro; library code returns
/// [`Error`] values instead.
///
/// # Example
///
/// ```
/// error!("Failed to load configuration: {}", e);
/// // Program exits here
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// # Example
///
/// ```
/// warning!("Failed to open browser, open this URL manually:\n{}", url);
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
