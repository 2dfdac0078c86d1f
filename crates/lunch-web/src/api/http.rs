//! HTTP helpers over gloo-net
//!
//! Failures are logged to the browser console and returned as `None`; the
//! pages decide what to show.

use gloo_net::http::Request;

fn log_error(context: &str, detail: impl std::fmt::Display) {
    web_sys::console::error_1(&format!("{}: {}", context, detail).into());
}

pub async fn get_text(url: &str) -> Option<String> {
    let response = match Request::get(url).send().await {
        Ok(response) => response,
        Err(e) => {
            log_error("HTTP request failed", e);
            return None;
        }
    };

    if !response.ok() {
        log_error("HTTP error", response.status());
        return None;
    }

    response.text().await.ok()
}

/// POST `body` as plain text
///
/// Apps Script web apps do not answer CORS preflight requests, so the body
/// must not be sent with a JSON content type.
pub async fn post_text(url: &str, body: &str) -> Option<String> {
    let request = Request::post(url)
        .header("Content-Type", "text/plain;charset=utf-8")
        .body(body)
        .ok()?;

    let response = match request.send().await {
        Ok(response) => response,
        Err(e) => {
            log_error("HTTP request failed", e);
            return None;
        }
    };

    if !response.ok() {
        log_error("HTTP error", response.status());
        return None;
    }

    response.text().await.ok()
}
