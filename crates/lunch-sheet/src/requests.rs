//! Payloads for the management and settings scripts
//!
//! Building these is pure; sending them is up to the front end.

use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

/// Text the settings script includes in a successful reply
pub const SETTINGS_SUCCESS_MARKER: &str = "成功";

#[derive(Debug, Error)]
pub enum RequestError {
    #[error("請輸入管理密碼")]
    MissingPassword,

    #[error("請填寫完整的帳密與設定資訊 (missing: {})", .0.join(", "))]
    IncompleteSettings(Vec<&'static str>),

    #[error("no delete is pending")]
    NothingPending,

    #[error("invalid endpoint URL {url}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("malformed script response: {0}")]
    Json(#[from] serde_json::Error),
}

// =============================================================================
// Delete
// =============================================================================

/// What the delete script should remove
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteTarget {
    /// One 1-based spreadsheet row
    Row(usize),
    /// Every order
    All,
}

impl Serialize for DeleteTarget {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            DeleteTarget::Row(row) => serializer.serialize_u64(*row as u64),
            DeleteTarget::All => serializer.serialize_str("all"),
        }
    }
}

impl<'de> Deserialize<'de> for DeleteTarget {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Row(usize),
            Label(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Row(row) => Ok(DeleteTarget::Row(row)),
            Raw::Label(label) if label == "all" => Ok(DeleteTarget::All),
            Raw::Label(label) => Err(de::Error::custom(format!("unknown delete target: {}", label))),
        }
    }
}

/// Body posted to the management script
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeleteRequest {
    pub row: DeleteTarget,
    pub password: String,
}

impl DeleteRequest {
    pub fn new(row: DeleteTarget, password: impl Into<String>) -> Result<Self, RequestError> {
        let password = password.into();
        if password.is_empty() {
            return Err(RequestError::MissingPassword);
        }
        Ok(Self { row, password })
    }

    /// JSON body; the script reads it from a plain-text POST
    pub fn to_body(&self) -> Result<String, RequestError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Reply of the management script
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ScriptResponse {
    pub status: String,
    #[serde(default)]
    pub message: String,
}

impl ScriptResponse {
    pub fn parse(text: &str) -> Result<Self, RequestError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn is_success(&self) -> bool {
        self.status == "success"
    }
}

// =============================================================================
// Settings
// =============================================================================

/// Daily settings submitted by an administrator
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingsForm {
    /// Order date, `YYYY-MM-DD`
    pub date: String,
    pub store: String,
    pub account: String,
    pub password: String,
}

impl SettingsForm {
    pub fn with_date(date: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            ..Self::default()
        }
    }

    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("account", &self.account),
            ("password", &self.password),
            ("date", &self.date),
            ("store", &self.store),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(name, _)| name)
        .collect()
    }

    /// Submit URL, once every field is filled in
    pub fn submit_url(&self, endpoint: &str) -> Result<Url, RequestError> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(RequestError::IncompleteSettings(missing));
        }

        endpoint_url(
            endpoint,
            &[
                ("action", "submit"),
                ("date", self.date.as_str()),
                ("store", self.store.as_str()),
                ("acc", self.account.as_str()),
                ("pwd", self.password.as_str()),
            ],
        )
    }

    pub fn clear_credentials(&mut self) {
        self.account.clear();
        self.password.clear();
    }
}

/// URL listing the stores the settings script accepts
pub fn store_options_url(endpoint: &str) -> Result<Url, RequestError> {
    endpoint_url(endpoint, &[("action", "getOptions")])
}

/// Store names from the options reply, skipping empty entries
///
/// The script returns a column of sheet values, so blanks come through as
/// `""`, `null`, `false`, or `0`.
pub fn parse_store_options(text: &str) -> Result<Vec<String>, RequestError> {
    let values: Vec<serde_json::Value> = serde_json::from_str(text)?;

    Ok(values
        .into_iter()
        .filter_map(|value| match value {
            serde_json::Value::Null | serde_json::Value::Bool(false) => None,
            serde_json::Value::String(s) if s.is_empty() => None,
            serde_json::Value::String(s) => Some(s),
            serde_json::Value::Number(n) if n.as_f64() == Some(0.0) => None,
            other => Some(other.to_string()),
        })
        .collect())
}

/// Whether a settings reply reports success
pub fn settings_succeeded(reply: &str) -> bool {
    reply.contains(SETTINGS_SUCCESS_MARKER)
}

fn endpoint_url(endpoint: &str, params: &[(&str, &str)]) -> Result<Url, RequestError> {
    Url::parse_with_params(endpoint, params).map_err(|source| RequestError::InvalidUrl {
        url: endpoint.to_string(),
        source,
    })
}

/// Append `t=<millis>` so the published export is not served from cache
pub fn with_cache_buster(url: &str, millis: i64) -> String {
    let separator = if url.contains('?') { '&' } else { '?' };
    format!("{}{}t={}", url, separator, millis)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCRIPT: &str = "https://script.google.com/macros/s/abc/exec";

    #[test]
    fn test_delete_row_body() {
        let req = DeleteRequest::new(DeleteTarget::Row(5), "secret").unwrap();
        assert_eq!(req.to_body().unwrap(), r#"{"row":5,"password":"secret"}"#);
    }

    #[test]
    fn test_delete_all_body() {
        let req = DeleteRequest::new(DeleteTarget::All, "secret").unwrap();
        assert_eq!(req.to_body().unwrap(), r#"{"row":"all","password":"secret"}"#);
    }

    #[test]
    fn test_delete_requires_password() {
        assert!(matches!(
            DeleteRequest::new(DeleteTarget::Row(2), ""),
            Err(RequestError::MissingPassword)
        ));
    }

    #[test]
    fn test_delete_target_deserialize() {
        assert_eq!(serde_json::from_str::<DeleteTarget>("7").unwrap(), DeleteTarget::Row(7));
        assert_eq!(serde_json::from_str::<DeleteTarget>("\"all\"").unwrap(), DeleteTarget::All);
        assert!(serde_json::from_str::<DeleteTarget>("\"some\"").is_err());
    }

    #[test]
    fn test_script_response() {
        let ok = ScriptResponse::parse(r#"{"status":"success","message":"已刪除"}"#).unwrap();
        assert!(ok.is_success());
        assert_eq!(ok.message, "已刪除");

        let denied = ScriptResponse::parse(r#"{"status":"error","message":"密碼錯誤"}"#).unwrap();
        assert!(!denied.is_success());

        assert!(ScriptResponse::parse("<html>").is_err());
    }

    #[test]
    fn test_settings_submit_url() {
        let form = SettingsForm {
            date: "2025-03-14".to_string(),
            store: "好味 便當".to_string(),
            account: "admin".to_string(),
            password: "p&w".to_string(),
        };
        let url = form.submit_url(SCRIPT).unwrap();
        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();

        assert_eq!(
            pairs,
            vec![
                ("action".to_string(), "submit".to_string()),
                ("date".to_string(), "2025-03-14".to_string()),
                ("store".to_string(), "好味 便當".to_string()),
                ("acc".to_string(), "admin".to_string()),
                ("pwd".to_string(), "p&w".to_string()),
            ]
        );
    }

    #[test]
    fn test_settings_incomplete() {
        let form = SettingsForm::with_date("2025-03-14");
        match form.submit_url(SCRIPT) {
            Err(RequestError::IncompleteSettings(missing)) => {
                assert_eq!(missing, vec!["account", "password", "store"]);
            }
            other => panic!("expected incomplete settings, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_endpoint() {
        assert!(matches!(
            store_options_url("not a url"),
            Err(RequestError::InvalidUrl { .. })
        ));
    }

    #[test]
    fn test_store_options() {
        let url = store_options_url(SCRIPT).unwrap();
        assert_eq!(url.query(), Some("action=getOptions"));

        let stores = parse_store_options(r#"["好味便當", "", null, "池上飯包", false, 0, 7]"#).unwrap();
        assert_eq!(stores, vec!["好味便當", "池上飯包", "7"]);
    }

    #[test]
    fn test_settings_reply() {
        assert!(settings_succeeded("設定更新成功！"));
        assert!(!settings_succeeded("帳號或密碼錯誤"));
    }

    #[test]
    fn test_cache_buster() {
        assert_eq!(
            with_cache_buster("https://x/pub?gid=1&output=csv", 42),
            "https://x/pub?gid=1&output=csv&t=42"
        );
        assert_eq!(with_cache_buster("https://x/pub", 42), "https://x/pub?t=42");
    }

    #[test]
    fn test_clear_credentials() {
        let mut form = SettingsForm {
            date: "2025-03-14".to_string(),
            store: "A".to_string(),
            account: "admin".to_string(),
            password: "pw".to_string(),
        };
        form.clear_credentials();
        assert_eq!(form, SettingsForm {
            date: "2025-03-14".to_string(),
            store: "A".to_string(),
            ..SettingsForm::default()
        });
    }
}
