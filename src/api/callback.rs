use std::collections::HashMap;

use axum::{Extension, extract::Query, response::Html};

use crate::server::SharedAuth;

/// Receives Trello's redirect after the user approved (or denied) the
/// request token and records the verifier for the waiting login flow.
pub async fn callback(
    Query(params): Query<HashMap<String, String>>,
    Extension(shared_state): Extension<SharedAuth>,
) -> Html<&'static str> {
    let mut state = shared_state.lock().await;
    let Some(pending) = state.as_mut() else {
        return Html("<h4>No login in progress.</h4>");
    };

    let Some(token) = params.get("oauth_token") else {
        return Html("<h4>Missing OAuth token.</h4>");
    };
    if *token != pending.request.oauth_token {
        tracing::warn!("callback for an unknown request token");
        return Html("<h4>Unknown OAuth token.</h4>");
    }

    match params.get("oauth_verifier") {
        Some(verifier) => {
            pending.verifier = Some(verifier.clone());
            Html("<h2>Authorization received.</h2><p>You can close this window.</p>")
        }
        None => {
            pending.denied = true;
            Html("<h4>Authorization was denied.</h4>")
        }
    }
}
