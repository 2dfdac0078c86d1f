//! Lunch order sheet handling
//!
//! Turns the spreadsheet's published CSV exports into typed views: the
//! lookup sheet (per-buyer detail and summaries) and the management sheet
//! (deletable orders). Also builds the payloads sent to the backing scripts
//! and holds the page state of the portal. Nothing here does I/O.

pub mod aggregate;
pub mod columns;
pub mod detail;
pub mod layout;
pub mod lookup;
pub mod numeric;
pub mod orders;
pub mod requests;
pub mod table;
pub mod view;

pub use aggregate::{GroupTotal, GroupTotals, distinct_keys, sum_by_group};
pub use columns::{ColumnNames, Field, HeaderIndex, index_of};
pub use detail::{ALL_SENTINEL, Detail, Filter, detail};
pub use layout::SheetLayout;
pub use lookup::{DetailLine, LookupSheet, Summary};
pub use numeric::{format_amount, parse_or_zero};
pub use orders::{Order, OrderBook};
pub use requests::{DeleteRequest, DeleteTarget, RequestError, ScriptResponse, SettingsForm};
pub use table::{Row, Table, parse};
