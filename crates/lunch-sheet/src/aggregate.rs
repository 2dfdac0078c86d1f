//! Group-by-key sums over parsed rows

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use crate::numeric::parse_or_zero;
use crate::table::Row;

/// Sum for one group key
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupTotal {
    pub key: String,
    pub total: f64,
}

/// Per-key totals sorted by key, plus the grand total
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GroupTotals {
    pub groups: Vec<GroupTotal>,
    pub grand_total: f64,
}

impl GroupTotals {
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<f64> {
        self.groups.iter().find(|g| g.key == key).map(|g| g.total)
    }
}

/// Sum the `value` column per trimmed `key` column value
///
/// Rows with an empty key are left out of both the groups and the grand
/// total. Unparseable values count as zero.
pub fn sum_by_group(rows: &[Row], key: Option<usize>, value: Option<usize>) -> GroupTotals {
    let mut sums: BTreeMap<&str, f64> = BTreeMap::new();
    let mut grand_total = 0.0;

    for row in rows {
        let group = row.get(key).trim();
        if group.is_empty() {
            continue;
        }
        let amount = parse_or_zero(row.get(value));
        *sums.entry(group).or_insert(0.0) += amount;
        grand_total += amount;
    }

    GroupTotals {
        groups: sums
            .into_iter()
            .map(|(key, total)| GroupTotal {
                key: key.to_string(),
                total,
            })
            .collect(),
        grand_total,
    }
}

/// Sorted distinct non-empty trimmed values of the `key` column
///
/// `exclude` drops a value that should never be offered as a choice, such as
/// a header label repeated inside the data.
pub fn distinct_keys(rows: &[Row], key: Option<usize>, exclude: Option<&str>) -> Vec<String> {
    if key.is_none() {
        return Vec::new();
    }

    rows.iter()
        .map(|row| row.get(key).trim())
        .filter(|value| !value.is_empty() && Some(*value) != exclude)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}
