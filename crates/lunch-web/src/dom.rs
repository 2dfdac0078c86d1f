//! Small browser helpers

/// Current time in epoch milliseconds
pub fn now_millis() -> i64 {
    js_sys::Date::now() as i64
}

/// Today's date as `YYYY-MM-DD` (UTC)
pub fn today_iso() -> String {
    let iso: String = js_sys::Date::new_0().to_iso_string().into();
    iso.split('T').next().unwrap_or_default().to_string()
}

pub fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}

/// Blocking browser alert
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}
