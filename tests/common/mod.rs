#![allow(dead_code)]

use mockito::{Matcher, Mock, Server, ServerGuard};
use trello_api::Trello;

pub const CREDENTIALS: &str = "key=K&token=T";

pub async fn setup() -> (ServerGuard, Trello) {
    let server = Server::new_async().await;
    let trello = Trello::with_url(&server.url(), "K", "T").unwrap();
    (server, trello)
}

/// Mocks that fail the test if any request reaches the server.
pub async fn expect_no_requests(server: &mut ServerGuard) -> Vec<Mock> {
    let mut mocks = Vec::new();
    for method in ["GET", "POST", "PUT", "DELETE"] {
        mocks.push(
            server
                .mock(method, Matcher::Any)
                .expect(0)
                .create_async()
                .await,
        );
    }
    mocks
}

pub async fn assert_all(mocks: Vec<Mock>) {
    for mock in mocks {
        mock.assert_async().await;
    }
}

pub fn form(pairs: &[(&str, &str)]) -> Matcher {
    Matcher::AllOf(
        pairs
            .iter()
            .map(|(k, v)| Matcher::UrlEncoded(k.to_string(), v.to_string()))
            .chain([
                Matcher::UrlEncoded("key".into(), "K".into()),
                Matcher::UrlEncoded("token".into(), "T".into()),
            ])
            .collect(),
    )
}

pub fn query(params: &str) -> Matcher {
    if params.is_empty() {
        Matcher::Exact(CREDENTIALS.into())
    } else {
        Matcher::Exact(format!("{params}&{CREDENTIALS}"))
    }
}
