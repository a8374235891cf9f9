mod common;

use common::{assert_all, expect_no_requests, form, query, setup};
use trello_api::{Error, types::Args};

#[tokio::test]
async fn test_get_card() {
    let (mut server, trello) = setup().await;
    let mock = server
        .mock("GET", "/1/cards/C1")
        .match_query(query("fields=name"))
        .with_body(r#"{"id":"C1","name":"Ship it"}"#)
        .create_async()
        .await;

    let card = trello.cards().get_card("C1", &["fields=name"]).await.unwrap();

    mock.assert_async().await;
    assert_eq!(card["name"], "Ship it");
}

#[tokio::test]
async fn test_create_card_requires_name_list_and_board() {
    let (mut server, trello) = setup().await;
    let mocks = expect_no_requests(&mut server).await;
    let cards = trello.cards();

    let err = cards
        .create_card(&Args::from([("idList", "L1"), ("idBoard", "B1")]))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::InvalidArgument("name")));

    let err = cards
        .create_card(&Args::from([("name", "Task"), ("idBoard", "B1")]))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::InvalidArgument("idList")));

    let err = cards
        .create_card(&Args::from([("name", "Task"), ("idList", "L1")]))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::InvalidArgument("idBoard")));

    assert_all(mocks).await;
}

#[tokio::test]
async fn test_create_card() {
    let (mut server, trello) = setup().await;
    let mock = server
        .mock("POST", "/1/cards")
        .match_header("content-type", "application/x-www-form-urlencoded")
        .match_body(form(&[("name", "Task"), ("idList", "L1"), ("idBoard", "B1")]))
        .with_body(r#"{"id":"C2"}"#)
        .create_async()
        .await;

    let args = Args::from([("name", "Task"), ("idList", "L1"), ("idBoard", "B1")]);
    trello.cards().create_card(&args).await.unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_update_and_move_card() {
    let (mut server, trello) = setup().await;
    let update = server
        .mock("PUT", "/1/cards/C1")
        .match_body(form(&[("desc", "More detail")]))
        .with_body("{}")
        .create_async()
        .await;
    let moved = server
        .mock("PUT", "/1/cards/C1")
        .match_body(form(&[("idList", "L2")]))
        .with_body("{}")
        .create_async()
        .await;

    let cards = trello.cards();
    cards
        .update_card("C1", &Args::new().set("desc", "More detail"))
        .await
        .unwrap();
    cards.move_card("C1", "L2").await.unwrap();

    update.assert_async().await;
    moved.assert_async().await;
}

#[tokio::test]
async fn test_delete_card() {
    let (mut server, trello) = setup().await;
    let mock = server
        .mock("DELETE", "/1/cards/C1")
        .match_query(query(""))
        .with_body(r#"{"limits":{}}"#)
        .create_async()
        .await;

    trello.cards().delete_card("C1").await.unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_add_and_remove_label() {
    let (mut server, trello) = setup().await;
    let add = server
        .mock("POST", "/1/cards/C1/idLabels")
        .match_body(form(&[("value", "LB1")]))
        .with_body(r#"["LB1"]"#)
        .create_async()
        .await;
    let remove = server
        .mock("DELETE", "/1/cards/C1/idLabels/LB1")
        .match_query(query(""))
        .with_body("[]")
        .create_async()
        .await;

    let cards = trello.cards();
    cards.add_label("C1", "LB1").await.unwrap();
    cards.remove_label("C1", "LB1").await.unwrap();

    add.assert_async().await;
    remove.assert_async().await;
}

#[tokio::test]
async fn test_add_custom_label() {
    let (mut server, trello) = setup().await;
    let colored = server
        .mock("POST", "/1/cards/C1/labels")
        .match_body(form(&[("name", "urgent"), ("color", "red")]))
        .with_body(r#"{"id":"LB2"}"#)
        .create_async()
        .await;

    trello
        .cards()
        .add_custom_label("C1", Some("red"), "urgent")
        .await
        .unwrap();

    colored.assert_async().await;
}

#[tokio::test]
async fn test_add_custom_label_without_color() {
    let (mut server, trello) = setup().await;
    let mock = server
        .mock("POST", "/1/cards/C1/labels")
        .match_body(mockito::Matcher::Exact("key=K&name=later&token=T".into()))
        .with_body("{}")
        .create_async()
        .await;

    trello
        .cards()
        .add_custom_label("C1", None, "later")
        .await
        .unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_add_custom_label_rejects_unknown_color() {
    let (mut server, trello) = setup().await;
    let mocks = expect_no_requests(&mut server).await;

    let err = trello
        .cards()
        .add_custom_label("C1", Some("magenta"), "x")
        .await
        .unwrap_err();

    match err {
        Error::InvalidValue { field, value } => {
            assert_eq!(field, "label color");
            assert_eq!(value, "magenta");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_all(mocks).await;
}

#[tokio::test]
async fn test_comments() {
    let (mut server, trello) = setup().await;
    let list = server
        .mock("GET", "/1/cards/C1/actions")
        .match_query(query("filter=commentCard"))
        .with_body("[]")
        .create_async()
        .await;
    let add = server
        .mock("POST", "/1/cards/C1/actions/comments")
        .match_body(form(&[("text", "Looks good")]))
        .with_body(r#"{"id":"A1"}"#)
        .create_async()
        .await;
    let update = server
        .mock("PUT", "/1/cards/C1/actions/A1/comments")
        .match_body(form(&[("text", "Looks great")]))
        .with_body("{}")
        .create_async()
        .await;
    let remove = server
        .mock("DELETE", "/1/cards/C1/actions/A1/comments")
        .match_query(query(""))
        .with_body("{}")
        .create_async()
        .await;

    let cards = trello.cards();
    cards.get_comments("C1").await.unwrap();
    cards.add_comment("C1", "Looks good").await.unwrap();
    cards.update_comment("C1", "A1", "Looks great").await.unwrap();
    cards.remove_comment("C1", "A1").await.unwrap();

    list.assert_async().await;
    add.assert_async().await;
    update.assert_async().await;
    remove.assert_async().await;
}

#[tokio::test]
async fn test_add_comment_requires_text() {
    let (mut server, trello) = setup().await;
    let mocks = expect_no_requests(&mut server).await;

    let err = trello.cards().add_comment("C1", "").await.unwrap_err();
    assert!(matches!(err, Error::InvalidArgument("text")));

    assert_all(mocks).await;
}

#[tokio::test]
async fn test_attachments() {
    let (mut server, trello) = setup().await;
    let list = server
        .mock("GET", "/1/cards/C1/attachments")
        .match_query(query("fields=all&filter=false"))
        .with_body("[]")
        .create_async()
        .await;
    let add = server
        .mock("POST", "/1/cards/C1/attachments")
        .match_body(form(&[("url", "https://example.com/design.pdf")]))
        .with_body(r#"{"id":"AT1"}"#)
        .create_async()
        .await;
    let remove = server
        .mock("DELETE", "/1/cards/C1/attachments/AT1")
        .match_query(query(""))
        .with_body("{}")
        .create_async()
        .await;

    let cards = trello.cards();
    cards.get_attachments("C1").await.unwrap();
    cards
        .add_attachment("C1", "https://example.com/design.pdf")
        .await
        .unwrap();
    cards.delete_attachment("C1", "AT1").await.unwrap();

    list.assert_async().await;
    add.assert_async().await;
    remove.assert_async().await;
}
