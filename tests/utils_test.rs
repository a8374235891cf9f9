use std::num::NonZeroU64;

use trello_api::utils::*;

const UPDATE_URL: &str = "https://api.twitter.com/1/statuses/update.json";
const CONSUMER: (&str, &str) = (
    "xvz1evFS4wEEPTGEFPHBog",
    "kAcSOqF21Fu85e7zjz7ZN2U4ZRhfV3WpwPAoE3Z7kBw",
);
const TOKEN: (&str, &str) = (
    "370773112-GmHxMAgYyLbNEtIKZeRNFsMKPR9EyMZeS9weJAEb",
    "LswwdoUaIvS8ltyTt5jkRh4J50vUPVVHtR2YPi5kE",
);

#[derive(oauth1_request::Request)]
struct StatusUpdate<'a> {
    include_entities: bool,
    status: &'a str,
}

fn status_update() -> StatusUpdate<'static> {
    StatusUpdate {
        include_entities: true,
        status: "Hello Ladies + Gentlemen, a signed OAuth request!",
    }
}

#[test]
fn test_sign_post_reference_vector() {
    let params = OAuthParams {
        token: Some(TOKEN),
        nonce: Some("kYjzVBB8Y0ZFabxSWbWovY3uYSQ2pTgmZeNu2VS4cg"),
        timestamp: NonZeroU64::new(1318622958),
        ..OAuthParams::default()
    };

    let header = sign_post(UPDATE_URL, CONSUMER, &params, &status_update());

    assert!(header.starts_with("OAuth "));
    assert!(header.contains(r#"oauth_signature_method="HMAC-SHA1""#));
    assert!(header.contains(r#"oauth_version="1.0""#));
    assert!(header.contains(r#"oauth_signature="tnnArxj06cWHq44gCs1OSKk%2FjLY%3D""#));
}

#[test]
fn test_sign_post_generates_nonce_and_timestamp() {
    let params = OAuthParams {
        token: Some(TOKEN),
        ..OAuthParams::default()
    };

    let first = sign_post(UPDATE_URL, CONSUMER, &params, &status_update());
    let second = sign_post(UPDATE_URL, CONSUMER, &params, &status_update());

    assert!(first.contains("oauth_nonce="));
    assert!(first.contains("oauth_timestamp="));
    assert_ne!(first, second);
}

#[test]
fn test_sign_post_includes_verifier() {
    let params = OAuthParams {
        token: Some(("RT1", "RS1")),
        verifier: Some("V1"),
        ..OAuthParams::default()
    };

    let header = sign_post("https://trello.com/1/OAuthGetAccessToken", ("CK", "CS"), &params, &());

    assert!(header.contains(r#"oauth_token="RT1""#));
    assert!(header.contains(r#"oauth_verifier="V1""#));
    assert!(!header.contains("oauth_callback="));
}

#[test]
fn test_mask_token_long_and_short() {
    assert_eq!(
        mask_token("0123456789abcdefghijklmnopqrstuvwxyz"),
        "012345...wxyz"
    );
    assert_eq!(mask_token("short"), "*****");
}

#[test]
fn test_mask_credentials_in_url() {
    let masked = mask_credentials(
        "https://api.trello.com/1/lists/L1/cards?fields=all&key=aaaaaaaaaaaaaaaa&token=bbbbbbbbbbbbbbbbbbbb",
    );

    assert_eq!(
        masked,
        "https://api.trello.com/1/lists/L1/cards?fields=all&key=aaaaaa...aaaa&token=bbbbbb...bbbb"
    );
}

#[test]
fn test_require_and_is_blank() {
    assert!(is_blank(""));
    assert!(is_blank(" \t"));
    assert!(!is_blank("B1"));
    assert!(require("idList", "").is_err());
    assert_eq!(require("idList", "L1").unwrap(), "L1");
}
