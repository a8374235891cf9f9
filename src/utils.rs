use std::num::NonZeroU64;

use oauth1_request::{self as oauth, signature_method::HmacSha1};

use crate::error::{Error, Result};

const TOKEN_MASK_PREFIX_LEN: usize = 6;
const TOKEN_MASK_SUFFIX_LEN: usize = 4;

pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Returns `value` unchanged, or [`Error::InvalidArgument`] naming `field`
/// when it is blank.
pub fn require<'a>(field: &'static str, value: &'a str) -> Result<&'a str> {
    if is_blank(value) {
        return Err(Error::InvalidArgument(field));
    }
    Ok(value)
}

pub fn mask_token(token: &str) -> String {
    let trimmed = token.trim();
    if trimmed.is_empty() {
        return String::new();
    }

    let len = trimmed.len();
    if len <= TOKEN_MASK_PREFIX_LEN + TOKEN_MASK_SUFFIX_LEN || !trimmed.is_ascii() {
        return "*".repeat(len.min(8));
    }

    let prefix = &trimmed[..TOKEN_MASK_PREFIX_LEN];
    let suffix = &trimmed[len - TOKEN_MASK_SUFFIX_LEN..];
    format!("{prefix}...{suffix}")
}

/// Masks the values of `key` and `token` fragments in a URL or a
/// form-encoded body.
pub fn mask_credentials(text: &str) -> String {
    let (resource, query) = match text.split_once('?') {
        Some((resource, query)) => (Some(resource), query),
        None => (None, text),
    };

    let masked = query
        .split('&')
        .map(|fragment| match fragment.split_once('=') {
            Some((name @ ("key" | "token"), value)) => format!("{name}={}", mask_token(value)),
            _ => fragment.to_string(),
        })
        .collect::<Vec<_>>()
        .join("&");

    match resource {
        Some(resource) => format!("{resource}?{masked}"),
        None => masked,
    }
}

/// Protocol values of one signed OAuth 1.0a request, besides the consumer
/// credentials. The signer generates `nonce` and `timestamp` when they are
/// left `None`.
#[derive(Debug, Default, Clone, Copy)]
pub struct OAuthParams<'a> {
    /// Token identifier and secret.
    pub token: Option<(&'a str, &'a str)>,
    pub callback: Option<&'a str>,
    pub verifier: Option<&'a str>,
    pub nonce: Option<&'a str>,
    pub timestamp: Option<NonZeroU64>,
}

/// `Authorization` header value for a POST to `uri`, signed with HMAC-SHA1
/// by `oauth1-request` and carrying `oauth_version="1.0"`.
///
/// `consumer` is the key and secret pair. `request` holds the non-protocol
/// parameters that take part in the signature; `&()` when there are none.
pub fn sign_post<R>(uri: &str, consumer: (&str, &str), params: &OAuthParams<'_>, request: &R) -> String
where
    R: oauth::Request + ?Sized,
{
    let (key, secret) = consumer;
    let mut builder = oauth::Builder::new(oauth::Credentials::new(key, secret), HmacSha1::new());
    builder
        .token(
            params
                .token
                .map(|(identifier, token_secret)| oauth::Credentials::new(identifier, token_secret)),
        )
        .callback(params.callback)
        .verifier(params.verifier)
        .nonce(params.nonce)
        .timestamp(params.timestamp)
        .version(true);
    builder.post(uri, request)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn require_rejects_blank_values() {
        assert!(matches!(
            require("card_id", "  "),
            Err(Error::InvalidArgument("card_id"))
        ));
        assert_eq!(require("card_id", "C1").unwrap(), "C1");
    }

    #[test]
    fn mask_token_keeps_prefix_and_suffix() {
        assert_eq!(mask_token("abcdef1234567890"), "abcdef...7890");
        assert_eq!(mask_token("abcd"), "****");
        assert_eq!(mask_token(""), "");
    }

    #[test]
    fn mask_credentials_only_touches_credential_values() {
        assert_eq!(
            mask_credentials("https://api.trello.com/1/boards/B1?fields=all&key=0123456789abcdef&token=T"),
            "https://api.trello.com/1/boards/B1?fields=all&key=012345...cdef&token=*"
        );
        assert_eq!(
            mask_credentials("name=Key%20board&key=0123456789abcdef"),
            "name=Key%20board&key=012345...cdef"
        );
        assert_eq!(
            mask_credentials("https://api.trello.com/1/cards"),
            "https://api.trello.com/1/cards"
        );
    }

    #[test]
    fn sign_post_carries_callback_without_token() {
        let header = sign_post(
            "https://trello.com/1/OAuthGetRequestToken",
            ("CK", "CS"),
            &OAuthParams {
                callback: Some("http://x/cb"),
                ..OAuthParams::default()
            },
            &(),
        );
        assert!(header.starts_with("OAuth "));
        assert!(header.contains(r#"oauth_callback="http%3A%2F%2Fx%2Fcb""#));
        assert!(header.contains(r#"oauth_consumer_key="CK""#));
        assert!(!header.contains("oauth_token="));
        assert!(!header.contains("oauth_verifier="));
    }
}
