use tabled::Table;

use super::{client, fetch, print_json, str_field};
use crate::{types::CardTableRow, warning};

pub async fn list(id: &str) {
    let trello = client().await;
    let lists = trello.lists();
    let list = fetch("Fetching list...", lists.get(id)).await;
    print_json(&list);
}

/// Prints the cards of a list with their due dates.
pub async fn list_cards(id: &str) {
    let trello = client().await;
    let lists = trello.lists();
    let cards = fetch("Fetching cards...", lists.get_cards(id, None)).await;

    let Some(items) = cards.as_array() else {
        return print_json(&cards);
    };
    if items.is_empty() {
        warning!("List {} has no cards.", id);
        return;
    }

    let rows: Vec<CardTableRow> = items
        .iter()
        .map(|card| CardTableRow {
            id: str_field(card, "id"),
            name: str_field(card, "name"),
            due: card["due"]
                .as_str()
                .map(format_due)
                .unwrap_or_else(|| "-".to_string()),
        })
        .collect();
    println!("{}", Table::new(rows));
}

/// Trello sends due dates as RFC 3339 in UTC; show the date and minute only.
fn format_due(due: &str) -> String {
    chrono::DateTime::parse_from_rfc3339(due)
        .map(|date| date.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|_| due.to_string())
}
