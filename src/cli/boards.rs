use tabled::Table;

use super::{client, fetch, print_json, str_field};
use crate::{
    types::{LabelTableRow, ListTableRow},
    warning,
};

pub async fn board(id: &str) {
    let trello = client().await;
    let boards = trello.boards();
    let board = fetch("Fetching board...", boards.get(id, &["fields=all"])).await;
    print_json(&board);
}

/// Prints the open lists of a board as a table.
pub async fn board_lists(id: &str) {
    let trello = client().await;
    let boards = trello.boards();
    let lists = fetch("Fetching lists...", boards.get_lists(id, None)).await;

    let Some(items) = lists.as_array() else {
        return print_json(&lists);
    };
    if items.is_empty() {
        warning!("Board {} has no open lists.", id);
        return;
    }

    let rows: Vec<ListTableRow> = items
        .iter()
        .map(|list| ListTableRow {
            id: str_field(list, "id"),
            name: str_field(list, "name"),
            closed: list["closed"].as_bool().unwrap_or_default(),
        })
        .collect();
    println!("{}", Table::new(rows));
}

pub async fn board_labels(id: &str) {
    let trello = client().await;
    let boards = trello.boards();
    let labels = fetch("Fetching labels...", boards.get_labels(id, None)).await;

    let Some(items) = labels.as_array() else {
        return print_json(&labels);
    };

    let rows: Vec<LabelTableRow> = items
        .iter()
        .map(|label| LabelTableRow {
            id: str_field(label, "id"),
            name: str_field(label, "name"),
            color: str_field(label, "color"),
        })
        .collect();
    println!("{}", Table::new(rows));
}
