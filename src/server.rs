use std::{net::SocketAddr, str::FromStr, sync::Arc};

use axum::{Extension, Router, routing::get};
use tokio::{net::TcpListener, sync::Mutex};

use crate::{
    api, config,
    error::{Error, Result},
    types::PendingAuth,
};

/// Login state shared between the CLI and the callback handler.
pub type SharedAuth = Arc<Mutex<Option<PendingAuth>>>;

pub fn router(state: SharedAuth) -> Router {
    Router::new()
        .route("/health", get(api::health))
        .route("/callback", get(api::callback).layer(Extension(state)))
}

/// Serves the callback router on `SERVER_ADDRESS` until the task is dropped.
pub async fn start_api_server(state: SharedAuth) -> Result<()> {
    let addr = SocketAddr::from_str(&config::server_addr())
        .map_err(|e| Error::Config(format!("failed to parse server address: {e}")))?;

    let listener = TcpListener::bind(&addr).await?;
    tracing::debug!(%addr, "callback server listening");
    axum::serve(listener, router(state)).await?;
    Ok(())
}
