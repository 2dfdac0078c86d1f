//! Page state for the portal, kept apart from the sheet data
//!
//! Each page owns one of these structs and changes it only through the
//! methods below, one per user action.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::detail::Filter;
use crate::lookup::Summary;
use crate::requests::{DeleteRequest, DeleteTarget, RequestError, SettingsForm, settings_succeeded};

/// Top-level navigation tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tab {
    #[default]
    Form,
    Lookup,
    Management,
    Settings,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Form, Tab::Lookup, Tab::Management, Tab::Settings];

    pub fn path(self) -> &'static str {
        match self {
            Tab::Form => "/",
            Tab::Lookup => "/lookup",
            Tab::Management => "/management",
            Tab::Settings => "/settings",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tab::Form => "📝 填單",
            Tab::Lookup => "🔍 查詢",
            Tab::Management => "🗑️ 刪除",
            Tab::Settings => "⚙️ 設定",
        }
    }

    pub fn from_path(path: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tab| tab.path() == path)
    }
}

// =============================================================================
// Lookup
// =============================================================================

/// What the lookup table currently shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupMode<'a> {
    /// Nothing selected yet
    Prompt,
    Summary(Summary),
    Detail(&'a Filter),
}

/// Buyer and summary selectors; choosing one clears the other
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupView {
    pub buyer: Option<Filter>,
    pub summary: Option<Summary>,
}

impl LookupView {
    /// Buyer select changed; `""` is the placeholder option
    pub fn select_buyer(&mut self, selection: &str) {
        self.buyer = (!selection.is_empty()).then(|| Filter::from_selection(selection));
        self.summary = None;
    }

    /// Summary select changed; `""` is the placeholder option
    pub fn select_summary(&mut self, selection: &str) {
        self.summary = Summary::from_selection(selection);
        self.buyer = None;
    }

    pub fn mode(&self) -> LookupMode<'_> {
        match (&self.summary, &self.buyer) {
            (Some(summary), _) => LookupMode::Summary(*summary),
            (None, Some(filter)) => LookupMode::Detail(filter),
            (None, None) => LookupMode::Prompt,
        }
    }

    pub fn buyer_selection(&self) -> &str {
        self.buyer.as_ref().map(Filter::as_selection).unwrap_or("")
    }

    pub fn summary_selection(&self) -> &str {
        self.summary.map(Summary::selection).unwrap_or("")
    }
}

// =============================================================================
// Management
// =============================================================================

/// Password confirmation for a pending delete
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManagementView {
    pub pending: Option<DeleteTarget>,
    pub password: String,
}

impl ManagementView {
    /// Open the confirmation dialog for `target` with an empty password
    pub fn open(&mut self, target: DeleteTarget) {
        self.pending = Some(target);
        self.password.clear();
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_open(&self) -> bool {
        self.pending.is_some()
    }

    pub fn prompt(&self) -> &'static str {
        match self.pending {
            Some(DeleteTarget::All) => "此操作將清空所有訂單，請確認密碼：",
            _ => "請輸入管理密碼執行刪除操作：",
        }
    }

    /// Turn the dialog into a request and close it
    ///
    /// Without a password the dialog stays open.
    pub fn confirm(&mut self) -> Result<DeleteRequest, RequestError> {
        let target = self.pending.ok_or(RequestError::NothingPending)?;
        let request = DeleteRequest::new(target, self.password.as_str())?;
        self.pending = None;
        self.password.clear();
        Ok(request)
    }
}

// =============================================================================
// Settings
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StatusKind {
    Pending,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Status {
    pub message: String,
    pub kind: StatusKind,
}

impl Status {
    fn new(message: impl Into<String>, kind: StatusKind) -> Self {
        Self {
            message: message.into(),
            kind,
        }
    }
}

/// Settings form, store choices, and the last status line
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingsView {
    pub form: SettingsForm,
    pub stores: Vec<String>,
    pub status: Option<Status>,
    pub submitting: bool,
}

impl SettingsView {
    pub fn new(today: impl Into<String>) -> Self {
        Self {
            form: SettingsForm::with_date(today),
            ..Self::default()
        }
    }

    /// Store list arrived; the first store is preselected
    pub fn stores_loaded(&mut self, stores: Vec<String>) {
        if let Some(first) = stores.first() {
            self.form.store = first.clone();
        }
        self.stores = stores;
    }

    pub fn stores_failed(&mut self) {
        self.status = Some(Status::new("無法取得店家清單", StatusKind::Error));
    }

    /// Validate the form and mark a submission in flight
    pub fn begin_submit(&mut self, endpoint: &str) -> Result<Url, RequestError> {
        let url = self.form.submit_url(endpoint)?;
        self.submitting = true;
        self.status = Some(Status::new("正在更新伺服器設定...", StatusKind::Pending));
        Ok(url)
    }

    /// Record the script's reply; credentials are cleared on success
    pub fn finish_submit(&mut self, reply: &str) {
        self.submitting = false;
        let kind = if settings_succeeded(reply) {
            self.form.clear_credentials();
            StatusKind::Success
        } else {
            StatusKind::Error
        };
        self.status = Some(Status::new(reply, kind));
    }

    pub fn submit_failed(&mut self) {
        self.submitting = false;
        self.status = Some(Status::new("伺服器連線超時", StatusKind::Error));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCRIPT: &str = "https://script.google.com/macros/s/abc/exec";

    #[test]
    fn test_tab_paths() {
        for tab in Tab::ALL {
            assert_eq!(Tab::from_path(tab.path()), Some(tab));
        }
        assert_eq!(Tab::from_path("/nope"), None);
    }

    #[test]
    fn test_lookup_selectors_are_exclusive() {
        let mut view = LookupView::default();
        assert_eq!(view.mode(), LookupMode::Prompt);

        view.select_buyer("Amy");
        assert_eq!(view.mode(), LookupMode::Detail(&Filter::Key("Amy".to_string())));

        view.select_summary("by-buyer");
        assert_eq!(view.buyer, None);
        assert_eq!(view.mode(), LookupMode::Summary(Summary::ByBuyer));

        view.select_buyer("ALL");
        assert_eq!(view.summary, None);
        assert_eq!(view.buyer_selection(), "ALL");
        assert_eq!(view.summary_selection(), "");

        view.select_buyer("");
        assert_eq!(view.mode(), LookupMode::Prompt);
    }

    #[test]
    fn test_lookup_view_serializes() {
        let view = LookupView {
            buyer: Some(Filter::All),
            summary: None,
        };
        let json = serde_json::to_string(&view).unwrap();
        assert_eq!(json, r#"{"buyer":"ALL","summary":null}"#);
        assert_eq!(serde_json::from_str::<LookupView>(&json).unwrap(), view);
    }

    #[test]
    fn test_delete_dialog_flow() {
        let mut view = ManagementView::default();
        view.password = "stale".to_string();

        view.open(DeleteTarget::Row(4));
        assert!(view.is_open());
        assert!(view.password.is_empty());

        // Missing password keeps the dialog open.
        assert!(matches!(view.confirm(), Err(RequestError::MissingPassword)));
        assert!(view.is_open());

        view.password = "pw".to_string();
        let request = view.confirm().unwrap();
        assert_eq!(request.row, DeleteTarget::Row(4));
        assert_eq!(request.password, "pw");
        assert!(!view.is_open());
    }

    #[test]
    fn test_delete_dialog_cancel() {
        let mut view = ManagementView::default();
        view.open(DeleteTarget::All);
        assert_eq!(view.prompt(), "此操作將清空所有訂單，請確認密碼：");
        view.cancel();
        assert!(matches!(view.confirm(), Err(RequestError::NothingPending)));
    }

    #[test]
    fn test_settings_flow() {
        let mut view = SettingsView::new("2025-03-14");
        view.stores_loaded(vec!["好味便當".to_string(), "池上飯包".to_string()]);
        assert_eq!(view.form.store, "好味便當");

        assert!(view.begin_submit(SCRIPT).is_err());
        assert!(!view.submitting);

        view.form.account = "admin".to_string();
        view.form.password = "pw".to_string();
        view.begin_submit(SCRIPT).unwrap();
        assert!(view.submitting);
        assert_eq!(view.status.as_ref().map(|s| s.kind), Some(StatusKind::Pending));

        view.finish_submit("設定更新成功");
        assert!(!view.submitting);
        assert_eq!(view.status.as_ref().map(|s| s.kind), Some(StatusKind::Success));
        assert!(view.form.account.is_empty());
        assert!(view.form.password.is_empty());
        assert_eq!(view.form.date, "2025-03-14");
    }

    #[test]
    fn test_settings_rejected_keeps_credentials() {
        let mut view = SettingsView::new("2025-03-14");
        view.form.account = "admin".to_string();
        view.finish_submit("密碼錯誤");
        assert_eq!(view.status.as_ref().map(|s| s.kind), Some(StatusKind::Error));
        assert_eq!(view.form.account, "admin");
    }

    #[test]
    fn test_empty_store_list_keeps_selection() {
        let mut view = SettingsView::new("2025-03-14");
        view.stores_loaded(Vec::new());
        assert!(view.form.store.is_empty());
        view.stores_failed();
        assert_eq!(view.status.map(|s| s.kind), Some(StatusKind::Error));
    }
}
