//! Error type shared by the request layer, the resource clients, the OAuth
//! exchange and the credential store.
//!
//! Validation failures (`InvalidArgument`, `InvalidValue`) are raised before
//! any network access. Remote JSON error payloads are not errors: they are
//! returned to the caller as the successful result.

use reqwest::Method;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// A required identifier or body field was absent or blank.
    #[error("trello-api - {0} not provided")]
    InvalidArgument(&'static str),

    /// A value outside an enumerated set, e.g. an unknown label color.
    #[error("trello-api - {value:?} is not a valid {field}")]
    InvalidValue { field: &'static str, value: String },

    /// The HTTP round-trip itself failed. `url` has its credentials masked.
    #[error("trello-api - {method} {url} failed: {source}")]
    Transport {
        method: Method,
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The remote answered with a body that is not JSON.
    #[error("trello-api - {method} {url} returned {status} with a non-JSON body: {source}")]
    Decode {
        method: Method,
        url: String,
        status: u16,
        body: String,
        #[source]
        source: serde_json::Error,
    },

    /// The OAuth provider rejected a token request.
    #[error("trello-api - OAuth provider returned {status}: {body}")]
    OAuth { status: u16, body: String },

    #[error("trello-api - configuration: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Serde(#[from] serde_json::Error),
}
