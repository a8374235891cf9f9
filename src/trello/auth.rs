//! Three-legged OAuth 1.0a handshake against Trello.
//!
//! 1. [`OAuth::get_request_token`] obtains an unauthorized request token and
//!    the authorize URL the end user has to visit.
//! 2. Trello redirects the browser to the login callback with
//!    `oauth_token` and `oauth_verifier` appended.
//! 3. [`OAuth::get_access_token`] trades the request token and verifier for
//!    an access token.
//!
//! Both token calls are form-encoded POSTs whose `Authorization` header is
//! signed with HMAC-SHA1 by `oauth1-request`. The handshake order is not
//! enforced here; callers drive the three steps.

use std::collections::HashMap;

use reqwest::{Client, Method, header};

use crate::{
    error::{Error, Result},
    types::{AccessToken, Authorization, RequestToken},
    utils::{self, OAuthParams},
};

pub const REQUEST_TOKEN_URL: &str = "https://trello.com/1/OAuthGetRequestToken";
pub const ACCESS_TOKEN_URL: &str = "https://trello.com/1/OAuthGetAccessToken";
pub const AUTHORIZE_TOKEN_URL: &str = "https://trello.com/1/OAuthAuthorizeToken";

/// Provider endpoints of the handshake.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OAuthEndpoints {
    pub request_token: String,
    pub access_token: String,
    pub authorize_token: String,
}

impl Default for OAuthEndpoints {
    fn default() -> Self {
        Self {
            request_token: REQUEST_TOKEN_URL.to_string(),
            access_token: ACCESS_TOKEN_URL.to_string(),
            authorize_token: AUTHORIZE_TOKEN_URL.to_string(),
        }
    }
}

impl OAuthEndpoints {
    /// All three endpoints under another host, keeping Trello's paths.
    pub fn with_base(base: &str) -> Self {
        let base = base.trim_end_matches('/');
        Self {
            request_token: format!("{base}/1/OAuthGetRequestToken"),
            access_token: format!("{base}/1/OAuthGetAccessToken"),
            authorize_token: format!("{base}/1/OAuthAuthorizeToken"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct OAuth {
    consumer_key: String,
    consumer_secret: String,
    login_callback: String,
    app_name: String,
    endpoints: OAuthEndpoints,
    client: Client,
}

impl OAuth {
    /// `consumer_key` is the Trello API key and `consumer_secret` the OAuth
    /// secret shown next to it. Both are required, and so is the
    /// `login_callback` Trello redirects to after authorization.
    pub fn new(
        consumer_key: &str,
        consumer_secret: &str,
        login_callback: &str,
        app_name: &str,
    ) -> Result<Self> {
        let consumer_key = utils::require("key", consumer_key)?;
        let consumer_secret = utils::require("secret", consumer_secret)?;
        let login_callback = utils::require("login_callback", login_callback)?;
        Ok(Self {
            consumer_key: consumer_key.to_string(),
            consumer_secret: consumer_secret.to_string(),
            login_callback: login_callback.to_string(),
            app_name: app_name.to_string(),
            endpoints: OAuthEndpoints::default(),
            client: Client::new(),
        })
    }

    pub fn with_endpoints(mut self, endpoints: OAuthEndpoints) -> Self {
        self.endpoints = endpoints;
        self
    }

    pub fn endpoints(&self) -> &OAuthEndpoints {
        &self.endpoints
    }

    pub fn login_callback(&self) -> &str {
        &self.login_callback
    }

    /// Obtains a request token and builds the authorize redirect for it.
    ///
    /// A successful answer without an `oauth_token` is reported as
    /// [`Error::OAuth`], since no redirect could work with it.
    pub async fn get_request_token(&self) -> Result<RequestToken> {
        let params = OAuthParams {
            callback: Some(self.login_callback.as_str()),
            ..OAuthParams::default()
        };
        let answer = self.exchange(&self.endpoints.request_token, &params).await?;

        let Some(oauth_token) = answer.field("oauth_token") else {
            tracing::error!(
                status = answer.status,
                body = %answer.body,
                "request token answer carries no oauth_token"
            );
            return Err(Error::OAuth {
                status: answer.status,
                body: answer.body,
            });
        };
        let oauth_token = oauth_token.to_string();
        let oauth_token_secret = answer
            .field("oauth_token_secret")
            .unwrap_or_default()
            .to_string();

        let query = url::form_urlencoded::Serializer::new(String::new())
            .append_pair("oauth_token", &oauth_token)
            .append_pair("name", &self.app_name)
            .finish();
        let redirect = format!("{}?{query}", self.endpoints.authorize_token);

        tracing::debug!(
            oauth_token = %utils::mask_token(&oauth_token),
            "obtained request token"
        );

        Ok(RequestToken {
            oauth_token,
            oauth_token_secret,
            redirect,
        })
    }

    /// Trades an authorized request token for an access token.
    ///
    /// A missing `oauth_verifier` is not rejected locally; the request goes
    /// out without it and the provider decides.
    pub async fn get_access_token(&self, authorization: &Authorization) -> Result<AccessToken> {
        let params = OAuthParams {
            token: Some((
                authorization.oauth_token.as_str(),
                authorization.oauth_token_secret.as_str(),
            )),
            verifier: authorization.oauth_verifier.as_deref(),
            ..OAuthParams::default()
        };
        let answer = self.exchange(&self.endpoints.access_token, &params).await?;

        Ok(AccessToken {
            oauth_token: authorization.oauth_token.clone(),
            oauth_token_secret: authorization.oauth_token_secret.clone(),
            oauth_access_token: answer.field("oauth_token").unwrap_or_default().to_string(),
            oauth_access_token_secret: answer
                .field("oauth_token_secret")
                .unwrap_or_default()
                .to_string(),
        })
    }

    /// Signs and POSTs one token request. Non-2xx answers become
    /// [`Error::OAuth`].
    async fn exchange(&self, url: &str, params: &OAuthParams<'_>) -> Result<Answer> {
        let authorization = utils::sign_post(
            url,
            (self.consumer_key.as_str(), self.consumer_secret.as_str()),
            params,
            &(),
        );

        let response = self
            .client
            .post(url)
            .header(header::AUTHORIZATION, authorization)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .send()
            .await
            .map_err(|source| Error::Transport {
                method: Method::POST,
                url: url.to_string(),
                source: source.without_url(),
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|source| Error::Transport {
            method: Method::POST,
            url: url.to_string(),
            source: source.without_url(),
        })?;

        if !status.is_success() {
            tracing::error!(url, status = status.as_u16(), body = %body, "oauth token request rejected");
            return Err(Error::OAuth {
                status: status.as_u16(),
                body,
            });
        }

        let fields = url::form_urlencoded::parse(body.as_bytes())
            .into_owned()
            .collect();
        Ok(Answer {
            status: status.as_u16(),
            body,
            fields,
        })
    }
}

/// Accepted provider answer, form-encoded.
struct Answer {
    status: u16,
    body: String,
    fields: HashMap<String, String>,
}

impl Answer {
    /// Value of `name`, treating a blank value as absent.
    fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .get(name)
            .map(String::as_str)
            .filter(|value| !utils::is_blank(value))
    }
}
