use lunch_sheet::requests::with_cache_buster;
use lunch_sheet::{LookupSheet, OrderBook, SheetLayout};
use shared::CONFIG;

use super::http::get_text;
use crate::dom::now_millis;

/// Fetch and parse the lookup export
///
/// `None` when the request fails or the export has no header row.
pub async fn fetch_lookup() -> Option<LookupSheet> {
    let url = with_cache_buster(CONFIG.endpoints.lookup_csv, now_millis());
    let text = get_text(&url).await?;
    LookupSheet::from_text(&text, &SheetLayout::lookup())
}

/// Fetch and parse the management export; `None` when the request fails
pub async fn fetch_orders() -> Option<OrderBook> {
    let url = with_cache_buster(CONFIG.endpoints.management_csv, now_millis());
    let text = get_text(&url).await?;
    Some(OrderBook::from_text(&text, &SheetLayout::management()))
}
