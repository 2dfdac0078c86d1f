//! Filtered row listing with a running total

use serde::{Deserialize, Serialize};

use crate::numeric::parse_or_zero;
use crate::table::Row;

/// Selection value meaning "every row"
pub const ALL_SENTINEL: &str = "ALL";

/// Which rows a detail listing keeps
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Filter {
    All,
    Key(String),
}

impl Filter {
    /// Interpret a selection value: [`ALL_SENTINEL`] or a key
    pub fn from_selection(value: &str) -> Self {
        if value == ALL_SENTINEL {
            Filter::All
        } else {
            Filter::Key(value.trim().to_string())
        }
    }

    pub fn as_selection(&self) -> &str {
        match self {
            Filter::All => ALL_SENTINEL,
            Filter::Key(key) => key,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Filter::All)
    }

    fn matches(&self, value: &str) -> bool {
        match self {
            Filter::All => true,
            Filter::Key(key) => value.trim() == key.trim(),
        }
    }
}

impl From<String> for Filter {
    fn from(value: String) -> Self {
        Filter::from_selection(&value)
    }
}

impl From<Filter> for String {
    fn from(filter: Filter) -> Self {
        filter.as_selection().to_string()
    }
}

/// Rows kept by a filter, in table order, with the sum of their value column
#[derive(Debug, Clone, PartialEq)]
pub struct Detail<'a> {
    pub rows: Vec<&'a Row>,
    pub total: f64,
}

/// Keep the rows whose `key` column matches `filter` and total their `value` column
pub fn detail<'a>(rows: &'a [Row], key: Option<usize>, filter: &Filter, value: Option<usize>) -> Detail<'a> {
    let rows: Vec<&Row> = rows.iter().filter(|row| filter.matches(row.get(key))).collect();
    let total = rows.iter().map(|row| parse_or_zero(row.get(value))).sum();

    Detail { rows, total }
}
