mod common;

use common::{assert_all, expect_no_requests, form, query, setup};
use trello_api::{Error, types::Args};

#[tokio::test]
async fn test_get_list_and_board() {
    let (mut server, trello) = setup().await;
    let list = server
        .mock("GET", "/1/lists/L1")
        .match_query(query(""))
        .with_body(r#"{"id":"L1"}"#)
        .create_async()
        .await;
    let board = server
        .mock("GET", "/1/lists/L1/board")
        .match_query(query(""))
        .with_body(r#"{"id":"B1"}"#)
        .create_async()
        .await;

    let lists = trello.lists();
    lists.get("L1").await.unwrap();
    let result = lists.get_board("L1").await.unwrap();

    list.assert_async().await;
    board.assert_async().await;
    assert_eq!(result["id"], "B1");
}

#[tokio::test]
async fn test_create_list() {
    let (mut server, trello) = setup().await;
    let mock = server
        .mock("POST", "/1/lists")
        .match_body(form(&[("name", "Backlog"), ("idBoard", "B1"), ("pos", "top")]))
        .with_body(r#"{"id":"L9"}"#)
        .create_async()
        .await;

    let args = Args::from([("name", "Backlog"), ("idBoard", "B1"), ("pos", "top")]);
    trello.lists().create_list(&args).await.unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_create_list_requires_board() {
    let (mut server, trello) = setup().await;
    let mocks = expect_no_requests(&mut server).await;

    let err = trello
        .lists()
        .create_list(&Args::from([("name", "Backlog")]))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::InvalidArgument("idBoard")));

    assert_all(mocks).await;
}

#[tokio::test]
async fn test_field_updates() {
    let (mut server, trello) = setup().await;
    let update = server
        .mock("PUT", "/1/lists/L1")
        .match_body(form(&[("name", "Doing"), ("subscribed", "true")]))
        .with_body("{}")
        .create_async()
        .await;
    let pos = server
        .mock("PUT", "/1/lists/L1/pos")
        .match_body(form(&[("value", "bottom")]))
        .with_body("{}")
        .create_async()
        .await;
    let name = server
        .mock("PUT", "/1/lists/L1/name")
        .match_body(form(&[("value", "Done")]))
        .with_body("{}")
        .create_async()
        .await;

    let lists = trello.lists();
    lists
        .update("L1", &Args::new().set("name", "Doing").set("subscribed", true))
        .await
        .unwrap();
    lists
        .update_pos("L1", &Args::new().set("value", "bottom"))
        .await
        .unwrap();
    lists
        .rename_list("L1", &Args::new().set("value", "Done"))
        .await
        .unwrap();

    update.assert_async().await;
    pos.assert_async().await;
    name.assert_async().await;
}

#[tokio::test]
async fn test_close_and_subscribe_use_distinct_endpoints() {
    let (mut server, trello) = setup().await;
    let closed = server
        .mock("PUT", "/1/lists/L1/closed")
        .match_body(form(&[("value", "true")]))
        .with_body("{}")
        .create_async()
        .await;
    let subscribed = server
        .mock("PUT", "/1/lists/L1/subscribed")
        .match_body(form(&[("value", "false")]))
        .with_body("{}")
        .create_async()
        .await;

    let lists = trello.lists();
    lists.close_list("L1", true).await.unwrap();
    lists.subscribe("L1", false).await.unwrap();

    closed.assert_async().await;
    subscribed.assert_async().await;
}

#[tokio::test]
async fn test_get_cards_default_params() {
    let (mut server, trello) = setup().await;
    let mock = server
        .mock("GET", "/1/lists/L1/cards")
        .match_query(query("fields=all&attachments=true&actions=commentCard"))
        .with_body("[]")
        .create_async()
        .await;

    trello.lists().get_cards("L1", None).await.unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_archive_and_move_all_cards() {
    let (mut server, trello) = setup().await;
    let archive = server
        .mock("POST", "/1/lists/L1/archiveAllCards")
        .match_body(form(&[]))
        .with_body("{}")
        .create_async()
        .await;
    let moved = server
        .mock("POST", "/1/lists/L1/moveAllCards")
        .match_body(form(&[("idBoard", "B2"), ("idList", "L2")]))
        .with_body("[]")
        .create_async()
        .await;

    let lists = trello.lists();
    lists.archive_all_cards("L1").await.unwrap();
    lists
        .move_all_cards("L1", &Args::from([("idBoard", "B2"), ("idList", "L2")]))
        .await
        .unwrap();

    archive.assert_async().await;
    moved.assert_async().await;
}

#[tokio::test]
async fn test_move_all_cards_requires_target() {
    let (mut server, trello) = setup().await;
    let mocks = expect_no_requests(&mut server).await;
    let lists = trello.lists();

    assert!(matches!(
        lists
            .move_all_cards("L1", &Args::from([("idList", "L2")]))
            .await,
        Err(Error::InvalidArgument("idBoard"))
    ));
    assert!(matches!(
        lists
            .move_all_cards("L1", &Args::from([("idBoard", "B2")]))
            .await,
        Err(Error::InvalidArgument("idList"))
    ));
    assert!(matches!(
        lists.update_pos("L1", &Args::new()).await,
        Err(Error::InvalidArgument("value"))
    ));

    assert_all(mocks).await;
}
