use std::{collections::BTreeMap, fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use tabled::Tabled;

use crate::{
    error::{Error, Result},
    utils,
};

/// API key and token attached to every request.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    key: String,
    token: String,
}

impl Credentials {
    pub fn new(key: &str, token: &str) -> Result<Self> {
        let key = utils::require("trelloKey", key)?;
        let token = utils::require("trelloToken", token)?;
        Ok(Self {
            key: key.to_string(),
            token: token.to_string(),
        })
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn token(&self) -> &str {
        &self.token
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("key", &utils::mask_token(&self.key))
            .field("token", &utils::mask_token(&self.token))
            .finish()
    }
}

/// Form fields for POST and PUT requests.
///
/// Values are stored as strings; booleans and numbers go through
/// `ToString`, which matches how a query-string encoder renders them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Args(BTreeMap<String, String>);

impl Args {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn set(mut self, field: impl Into<String>, value: impl ToString) -> Self {
        self.insert(field, value);
        self
    }

    pub fn insert(&mut self, field: impl Into<String>, value: impl ToString) -> &mut Self {
        self.0.insert(field.into(), value.to_string());
        self
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn remove(&mut self, field: &str) -> Option<String> {
        self.0.remove(field)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Returns the value of a required field, failing with
    /// [`Error::InvalidArgument`] when it is missing or blank.
    pub fn require(&self, field: &'static str) -> Result<&str> {
        utils::require(field, self.get(field).unwrap_or_default())
    }

    /// Form-encodes the fields the same way the request body is sent.
    pub fn to_form_string(&self) -> String {
        url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.iter())
            .finish()
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for Args
where
    K: Into<String>,
    V: ToString,
{
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

impl<K, V> FromIterator<(K, V)> for Args
where
    K: Into<String>,
    V: ToString,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut args = Args::new();
        for (field, value) in iter {
            args.insert(field, value);
        }
        args
    }
}

/// The fixed palette Trello accepts for labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelColor {
    Yellow,
    Purple,
    Blue,
    Red,
    Green,
    Orange,
    Black,
    Sky,
    Pink,
    Lime,
}

impl LabelColor {
    pub const ALL: [LabelColor; 10] = [
        LabelColor::Yellow,
        LabelColor::Purple,
        LabelColor::Blue,
        LabelColor::Red,
        LabelColor::Green,
        LabelColor::Orange,
        LabelColor::Black,
        LabelColor::Sky,
        LabelColor::Pink,
        LabelColor::Lime,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LabelColor::Yellow => "yellow",
            LabelColor::Purple => "purple",
            LabelColor::Blue => "blue",
            LabelColor::Red => "red",
            LabelColor::Green => "green",
            LabelColor::Orange => "orange",
            LabelColor::Black => "black",
            LabelColor::Sky => "sky",
            LabelColor::Pink => "pink",
            LabelColor::Lime => "lime",
        }
    }
}

impl fmt::Display for LabelColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LabelColor {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        LabelColor::ALL
            .into_iter()
            .find(|color| color.as_str() == value)
            .ok_or_else(|| Error::InvalidValue {
                field: "label color",
                value: value.to_string(),
            })
    }
}

/// First leg of the OAuth handshake: the unauthorized request token and the
/// URL the end user has to visit to approve it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestToken {
    pub oauth_token: String,
    pub oauth_token_secret: String,
    pub redirect: String,
}

impl RequestToken {
    /// Merges the verifier Trello appended to the callback redirect.
    pub fn authorize(&self, oauth_verifier: Option<String>) -> Authorization {
        Authorization {
            oauth_token: self.oauth_token.clone(),
            oauth_token_secret: self.oauth_token_secret.clone(),
            oauth_verifier,
        }
    }
}

/// Input of the access-token leg: the request token bag merged with the
/// callback query parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Authorization {
    pub oauth_token: String,
    pub oauth_token_secret: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub oauth_verifier: Option<String>,
}

/// Result of a completed handshake.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessToken {
    pub oauth_token: String,
    pub oauth_token_secret: String,
    pub oauth_access_token: String,
    pub oauth_access_token_secret: String,
}

/// Login state shared between the CLI and the callback server.
///
/// The callback records either a `verifier` or, when Trello redirects
/// without one, a denial.
#[derive(Debug, Clone)]
pub struct PendingAuth {
    pub request: RequestToken,
    pub verifier: Option<String>,
    pub denied: bool,
}

impl PendingAuth {
    pub fn new(request: RequestToken) -> Self {
        Self {
            request,
            verifier: None,
            denied: false,
        }
    }
}

#[derive(Tabled)]
pub struct ListTableRow {
    pub id: String,
    pub name: String,
    pub closed: bool,
}

#[derive(Tabled)]
pub struct CardTableRow {
    pub id: String,
    pub name: String,
    pub due: String,
}

#[derive(Tabled)]
pub struct LabelTableRow {
    pub id: String,
    pub name: String,
    pub color: String,
}
