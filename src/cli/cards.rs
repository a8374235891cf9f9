use super::{client, fetch, print_json, str_field};
use crate::{info, warning};

pub async fn card(id: &str) {
    let trello = client().await;
    let cards = trello.cards();
    let card = fetch("Fetching card...", cards.get_card(id, &["fields=all"])).await;
    print_json(&card);
}

/// Prints the comments of a card, oldest first.
pub async fn card_comments(id: &str) {
    let trello = client().await;
    let cards = trello.cards();
    let comments = fetch("Fetching comments...", cards.get_comments(id)).await;

    let Some(actions) = comments.as_array() else {
        return print_json(&comments);
    };
    if actions.is_empty() {
        warning!("Card {} has no comments.", id);
        return;
    }

    // actions come newest first
    for action in actions.iter().rev() {
        info!(
            "{} ({}): {}",
            action["memberCreator"]["fullName"]
                .as_str()
                .unwrap_or("unknown"),
            str_field(action, "date"),
            action["data"]["text"].as_str().unwrap_or_default()
        );
    }
}
