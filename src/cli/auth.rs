use std::{
    sync::Arc,
    time::{Duration, Instant},
};

use tokio::sync::Mutex;

use crate::{
    config, error, info,
    management::TokenStore,
    server::{SharedAuth, start_api_server},
    success,
    trello::OAuth,
    types::{Authorization, PendingAuth},
    utils, warning,
};

const CALLBACK_TIMEOUT: Duration = Duration::from_secs(120);

/// Runs the OAuth 1.0a login and stores the resulting access token.
///
/// 1. Requests an unauthorized token from Trello
/// 2. Starts the local callback server with the token as pending state
/// 3. Opens the authorize page in the browser
/// 4. Waits up to two minutes for Trello's redirect to deliver the verifier,
///    stopping early when the user denies access
/// 5. Trades token and verifier for an access token and persists it
///
/// Browser launch failures only print the URL; everything else ends the
/// process with an error message.
pub async fn auth() {
    let oauth = match oauth_from_env() {
        Ok(oauth) => oauth,
        Err(e) => error!("Cannot start login: {}", e),
    };

    let request = match oauth.get_request_token().await {
        Ok(request) => request,
        Err(e) => error!("Failed to obtain a request token: {}", e),
    };

    let shared_state: SharedAuth = Arc::new(Mutex::new(Some(PendingAuth::new(request.clone()))));

    let server_state = Arc::clone(&shared_state);
    let server = tokio::spawn(async move {
        if let Err(e) = start_api_server(server_state).await {
            warning!("Callback server stopped: {}", e);
        }
    });

    if webbrowser::open(&request.redirect).is_err() {
        warning!(
            "Failed to open browser. Please navigate to the following URL manually:\n{}",
            request.redirect
        )
    }
    info!("Waiting for Trello to redirect to {}", oauth.login_callback());

    let outcome = wait_for_verifier(shared_state).await;
    server.abort();

    let authorization = match outcome {
        Callback::Authorized(authorization) => authorization,
        Callback::Denied => error!("Authorization was denied."),
        Callback::TimedOut => error!("Timed out waiting for authorization."),
    };

    let token = match oauth.get_access_token(&authorization).await {
        Ok(token) => token,
        Err(e) => error!("Failed to obtain an access token: {}", e),
    };

    let store = TokenStore::new();
    if let Err(e) = store.persist(&token).await {
        error!("Failed to save token to {}: {}", store.path().display(), e);
    }

    success!(
        "Authentication successful! Access token {} stored.",
        utils::mask_token(&token.oauth_access_token)
    );
}

fn oauth_from_env() -> crate::Result<OAuth> {
    OAuth::new(
        &config::trello_key()?,
        &config::trello_secret()?,
        &config::oauth_callback(),
        &config::app_name(),
    )
}

#[derive(Debug)]
enum Callback {
    Authorized(Authorization),
    Denied,
    TimedOut,
}

/// Polls the shared state once a second until the callback server has
/// recorded a verifier or a denial, or [`CALLBACK_TIMEOUT`] has passed.
async fn wait_for_verifier(shared_state: SharedAuth) -> Callback {
    let start = Instant::now();

    while start.elapsed() < CALLBACK_TIMEOUT {
        let lock = shared_state.lock().await;
        if let Some(pending) = lock.as_ref() {
            if let Some(verifier) = &pending.verifier {
                return Callback::Authorized(pending.request.authorize(Some(verifier.clone())));
            }
            if pending.denied {
                return Callback::Denied;
            }
        }
        drop(lock);
        tokio::time::sleep(Duration::from_secs(1)).await;
    }

    Callback::TimedOut
}
