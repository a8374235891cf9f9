//! Shared HTTP request layer for every Trello resource client.
//!
//! `Rest` owns the API credentials and injects them into each request:
//! appended as `key`/`token` query parameters for GET and DELETE, inserted as
//! form fields for POST and PUT. Caller-supplied `key`/`token` values never
//! reach the wire, so every request carries exactly one of each.
//!
//! Responses are parsed as JSON and returned unmodified, whatever the HTTP
//! status. A failed round-trip or a body that is not JSON is reported once
//! through the injected [`RequestLogger`] and then returned as an error.
//! There is no retry and no timeout beyond the transport defaults.

use std::{fmt, sync::Arc};

use reqwest::{Client, Method, RequestBuilder};
use serde_json::Value;

use crate::{
    error::{Error, Result},
    types::{Args, Credentials},
    utils,
};

/// Context handed to a [`RequestLogger`] when a request fails. URLs and
/// bodies have their credentials masked.
#[derive(Debug)]
pub struct Diagnostic<'a> {
    pub method: &'a Method,
    pub url: &'a str,
    pub body: Option<&'a str>,
    pub status: Option<u16>,
    pub response: Option<&'a str>,
    pub error: String,
}

/// Sink for request failure diagnostics.
pub trait RequestLogger: Send + Sync + fmt::Debug {
    fn request_failed(&self, diagnostic: &Diagnostic<'_>);
}

/// Default logger, emitting `tracing` events.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLogger;

impl RequestLogger for TracingLogger {
    fn request_failed(&self, diagnostic: &Diagnostic<'_>) {
        tracing::error!(
            method = %diagnostic.method,
            url = diagnostic.url,
            body = diagnostic.body.unwrap_or_default(),
            status = ?diagnostic.status,
            response = diagnostic.response.unwrap_or_default(),
            error = %diagnostic.error,
            "trello request failed"
        );
    }
}

#[derive(Debug, Clone)]
pub struct Rest {
    credentials: Credentials,
    client: Client,
    logger: Arc<dyn RequestLogger>,
}

impl Rest {
    pub fn new(key: &str, token: &str) -> Result<Self> {
        Self::with_logger(key, token, Arc::new(TracingLogger))
    }

    pub fn with_logger(key: &str, token: &str, logger: Arc<dyn RequestLogger>) -> Result<Self> {
        Ok(Self::from_parts(
            Credentials::new(key, token)?,
            Client::new(),
            logger,
        ))
    }

    /// Builds a request layer on an existing `reqwest` client, e.g. one with
    /// a caller-chosen timeout or proxy.
    pub fn from_parts(credentials: Credentials, client: Client, logger: Arc<dyn RequestLogger>) -> Self {
        Self {
            credentials,
            client,
            logger,
        }
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// GET `url?params&key=..&token=..`.
    ///
    /// `params` are pre-formatted `name=value` fragments and are sent in the
    /// given order.
    pub async fn get<S: AsRef<str>>(&self, url: &str, params: &[S]) -> Result<Value> {
        let url = utils::require("url", url)?;
        let target = format!("{url}?{}", self.query(params));
        let request = self.client.get(&target);
        self.execute(Method::GET, &target, None, request).await
    }

    /// POST `args` form-encoded, with `key` and `token` injected.
    pub async fn post(&self, url: &str, args: &Args) -> Result<Value> {
        self.send_form(Method::POST, url, args).await
    }

    /// PUT `args` form-encoded, with `key` and `token` injected.
    pub async fn put(&self, url: &str, args: &Args) -> Result<Value> {
        self.send_form(Method::PUT, url, args).await
    }

    /// DELETE `url/id` (or `url` when `id` is `None`) with the credentials
    /// in the query string.
    pub async fn delete(&self, url: &str, id: Option<&str>) -> Result<Value> {
        let url = utils::require("url", url)?;
        let resource = match id.filter(|id| !utils::is_blank(id)) {
            Some(id) => format!("{url}/{id}"),
            None => url.to_string(),
        };
        let target = format!("{resource}?{}", self.query::<&str>(&[]));
        let request = self.client.delete(&target);
        self.execute(Method::DELETE, &target, None, request).await
    }

    /// Joins `params` with the credential fragments. Any `key`/`token`
    /// fragment supplied by the caller is dropped, including one packed
    /// behind an `&` inside another fragment.
    pub fn query<S: AsRef<str>>(&self, params: &[S]) -> String {
        let key = format!("key={}", self.credentials.key());
        let token = format!("token={}", self.credentials.token());

        params
            .iter()
            .flat_map(|fragment| fragment.as_ref().split('&'))
            .filter(|fragment| !fragment.is_empty() && !is_credential_fragment(fragment))
            .chain([key.as_str(), token.as_str()])
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Copies `args` and sets `key`/`token`, overwriting caller values.
    pub fn with_credentials(&self, args: &Args) -> Args {
        let mut form = args.clone();
        form.insert("key", self.credentials.key());
        form.insert("token", self.credentials.token());
        form
    }

    async fn send_form(&self, method: Method, url: &str, args: &Args) -> Result<Value> {
        let url = utils::require("url", url)?;
        let form = self.with_credentials(args);
        let request = self.client.request(method.clone(), url).form(&form);
        self.execute(method, url, Some(&form), request).await
    }

    async fn execute(
        &self,
        method: Method,
        url: &str,
        form: Option<&Args>,
        request: RequestBuilder,
    ) -> Result<Value> {
        let masked_url = utils::mask_credentials(url);
        let masked_body = form.map(|form| utils::mask_credentials(&form.to_form_string()));

        let response = match request.send().await {
            Ok(response) => response,
            Err(err) => {
                let source = err.without_url();
                self.logger.request_failed(&Diagnostic {
                    method: &method,
                    url: &masked_url,
                    body: masked_body.as_deref(),
                    status: None,
                    response: None,
                    error: source.to_string(),
                });
                return Err(Error::Transport {
                    method,
                    url: masked_url,
                    source,
                });
            }
        };

        let status = response.status().as_u16();
        let text = match response.text().await {
            Ok(text) => text,
            Err(err) => {
                let source = err.without_url();
                self.logger.request_failed(&Diagnostic {
                    method: &method,
                    url: &masked_url,
                    body: masked_body.as_deref(),
                    status: Some(status),
                    response: None,
                    error: source.to_string(),
                });
                return Err(Error::Transport {
                    method,
                    url: masked_url,
                    source,
                });
            }
        };

        match serde_json::from_str::<Value>(&text) {
            Ok(json) => {
                tracing::debug!(method = %method, url = %masked_url, status, "trello request completed");
                Ok(json)
            }
            Err(source) => {
                self.logger.request_failed(&Diagnostic {
                    method: &method,
                    url: &masked_url,
                    body: masked_body.as_deref(),
                    status: Some(status),
                    response: Some(&text),
                    error: source.to_string(),
                });
                Err(Error::Decode {
                    method,
                    url: masked_url,
                    status,
                    body: text,
                    source,
                })
            }
        }
    }
}

fn is_credential_fragment(fragment: &str) -> bool {
    let name = fragment.split('=').next().unwrap_or_default();
    name == "key" || name == "token"
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rest() -> Rest {
        Rest::new("K", "T").unwrap()
    }

    #[test]
    fn query_appends_credentials_last() {
        assert_eq!(rest().query(&["fields=all"]), "fields=all&key=K&token=T");
        assert_eq!(rest().query::<&str>(&[]), "key=K&token=T");
    }

    #[test]
    fn query_drops_caller_credentials() {
        let query = rest().query(&["key=other", "filter=open", "token=stolen", "token"]);
        assert_eq!(query, "filter=open&key=K&token=T");
        assert_eq!(query.matches("key=").count(), 1);
        assert_eq!(query.matches("token=").count(), 1);

        let query = rest().query(&["fields=all&token=X", "key=Y&filter=open"]);
        assert_eq!(query, "fields=all&filter=open&key=K&token=T");
        assert_eq!(query.matches("key=").count(), 1);
        assert_eq!(query.matches("token=").count(), 1);
    }

    #[test]
    fn with_credentials_overrides_caller_fields() {
        let args = Args::new()
            .set("name", "Board")
            .set("key", "other")
            .set("token", "stolen");
        let form = rest().with_credentials(&args);
        assert_eq!(form.get("key"), Some("K"));
        assert_eq!(form.get("token"), Some("T"));
        assert_eq!(form.get("name"), Some("Board"));
        assert_eq!(form.len(), 3);
    }

    #[test]
    fn new_requires_key_and_token() {
        assert!(matches!(
            Rest::new("", "T"),
            Err(Error::InvalidArgument("trelloKey"))
        ));
        assert!(matches!(
            Rest::new("K", " "),
            Err(Error::InvalidArgument("trelloToken"))
        ));
    }
}
