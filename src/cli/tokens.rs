use super::{client, fetch, is_error_payload, print_json, str_field};
use crate::{info, utils, warning};

/// Shows who the configured token belongs to and what it may do.
pub async fn token_info() {
    let trello = client().await;
    let token = trello.rest().credentials().token().to_string();
    let tokens = trello.tokens();

    let details = fetch("Inspecting token...", tokens.get_token_info(&token)).await;
    if is_error_payload(&details) {
        warning!("Trello rejected the token.");
        return print_json(&details);
    }

    let member = fetch("Fetching member...", tokens.get_token_member(&token)).await;

    info!("Token: {}", utils::mask_token(&token));
    info!(
        "Member: {} ({})",
        str_field(&member, "fullName"),
        str_field(&member, "username")
    );
    info!("Created: {}", str_field(&details, "dateCreated"));
    info!(
        "Expires: {}",
        details["dateExpires"].as_str().unwrap_or("never")
    );

    if let Some(permissions) = details["permissions"].as_array() {
        for permission in permissions {
            info!(
                "Permission: {} {} read={} write={}",
                str_field(permission, "modelType"),
                str_field(permission, "idModel"),
                permission["read"].as_bool().unwrap_or_default(),
                permission["write"].as_bool().unwrap_or_default()
            );
        }
    }
}
