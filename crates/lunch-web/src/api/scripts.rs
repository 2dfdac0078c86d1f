use lunch_sheet::requests::{parse_store_options, store_options_url};
use lunch_sheet::{DeleteRequest, ScriptResponse};
use shared::CONFIG;

use super::http::{get_text, post_text};

/// Send a delete request to the management script
pub async fn delete_orders(request: &DeleteRequest) -> Option<ScriptResponse> {
    let body = request.to_body().ok()?;
    let reply = post_text(CONFIG.endpoints.management_script, &body).await?;

    match ScriptResponse::parse(&reply) {
        Ok(response) => Some(response),
        Err(e) => {
            web_sys::console::error_1(&format!("Delete script reply: {}", e).into());
            None
        }
    }
}

/// Stores the settings script offers
pub async fn get_store_options() -> Option<Vec<String>> {
    let url = store_options_url(CONFIG.endpoints.settings_script).ok()?;
    let reply = get_text(url.as_str()).await?;
    parse_store_options(&reply).ok()
}

/// Apply daily settings; returns the script's reply text
pub async fn submit_settings(url: &str) -> Option<String> {
    get_text(url).await
}
