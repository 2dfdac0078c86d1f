//! Header names → column positions
//!
//! Downstream code never compares header strings itself: it asks a
//! [`HeaderIndex`] for a logical [`Field`], built once per loaded table.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::table::Row;

/// Logical columns the portal knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Field {
    Buyer,
    Item,
    Price,
    RiceAddon,
    ExtraAddon,
    Quantity,
    Subtotal,
    Timestamp,
    Note,
    Staff,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Buyer => "buyer",
            Field::Item => "item",
            Field::Price => "price",
            Field::RiceAddon => "rice-addon",
            Field::ExtraAddon => "extra-addon",
            Field::Quantity => "quantity",
            Field::Subtotal => "subtotal",
            Field::Timestamp => "timestamp",
            Field::Note => "note",
            Field::Staff => "staff",
        };
        write!(f, "{}", name)
    }
}

/// Position of the first header cell equal to `name`
pub fn index_of(header: &Row, name: &str) -> Option<usize> {
    header.fields().iter().position(|cell| cell == name)
}

/// Header text used by one sheet for each logical field
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColumnNames(BTreeMap<Field, String>);

impl ColumnNames {
    pub fn from_pairs(pairs: &[(Field, &str)]) -> Self {
        Self(
            pairs
                .iter()
                .map(|(field, name)| (*field, name.to_string()))
                .collect(),
        )
    }

    pub fn name(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0.iter().map(|(field, name)| (*field, name.as_str()))
    }
}

/// Field → position mapping for one loaded table
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderIndex {
    positions: BTreeMap<Field, usize>,
    missing: Vec<Field>,
}

impl HeaderIndex {
    /// Resolve every configured column against `header`
    ///
    /// Columns that are configured but absent from the header are recorded
    /// in [`HeaderIndex::missing`] and read as empty strings.
    pub fn build(header: &Row, columns: &ColumnNames) -> Self {
        let mut positions = BTreeMap::new();
        let mut missing = Vec::new();

        for (field, name) in columns.iter() {
            match index_of(header, name) {
                Some(position) => {
                    positions.insert(field, position);
                }
                None => {
                    tracing::warn!(%field, column = name, "column not found in header; field reads as empty");
                    missing.push(field);
                }
            }
        }

        Self { positions, missing }
    }

    pub fn position(&self, field: Field) -> Option<usize> {
        self.positions.get(&field).copied()
    }

    /// Value of `field` in `row`, `""` when unavailable
    pub fn value<'a>(&self, row: &'a Row, field: Field) -> &'a str {
        row.get(self.position(field))
    }

    /// Configured fields that were not found in the header
    pub fn missing(&self) -> &[Field] {
        &self.missing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_of_first_match() {
        let header = Row::from(["購買人", "項目", "購買人"]);
        assert_eq!(index_of(&header, "購買人"), Some(0));
        assert_eq!(index_of(&header, "項目"), Some(1));
        assert_eq!(index_of(&header, "小計"), None);
    }

    #[test]
    fn test_index_of_is_exact() {
        let header = Row::from([" 購買人"]);
        assert_eq!(index_of(&header, "購買人"), None);
    }

    #[test]
    fn test_header_index_resolves_fields() {
        let header = Row::from(["項目", "購買人", "小計"]);
        let columns = ColumnNames::from_pairs(&[
            (Field::Buyer, "購買人"),
            (Field::Item, "項目"),
            (Field::Subtotal, "小計"),
        ]);
        let index = HeaderIndex::build(&header, &columns);

        assert_eq!(index.position(Field::Buyer), Some(1));
        assert_eq!(index.position(Field::Item), Some(0));
        assert!(index.missing().is_empty());

        let row = Row::from(["排骨飯", "Amy", "90"]);
        assert_eq!(index.value(&row, Field::Buyer), "Amy");
        assert_eq!(index.value(&row, Field::Subtotal), "90");
    }

    #[test]
    fn test_missing_column_reads_empty_and_is_reported() {
        let header = Row::from(["購買人"]);
        let columns = ColumnNames::from_pairs(&[(Field::Buyer, "購買人"), (Field::Note, "備註")]);
        let index = HeaderIndex::build(&header, &columns);

        // Schema drift is surfaced here rather than as an error.
        assert_eq!(index.missing(), &[Field::Note]);
        assert_eq!(index.position(Field::Note), None);
        assert_eq!(index.value(&Row::from(["Amy", "extra"]), Field::Note), "");
    }

    #[test]
    fn test_unconfigured_field_is_not_missing() {
        let index = HeaderIndex::build(&Row::from(["a"]), &ColumnNames::default());
        assert!(index.missing().is_empty());
        assert_eq!(index.position(Field::Price), None);
    }

    #[test]
    fn test_short_row_reads_empty() {
        let header = Row::from(["購買人", "小計"]);
        let columns = ColumnNames::from_pairs(&[(Field::Subtotal, "小計")]);
        let index = HeaderIndex::build(&header, &columns);
        assert_eq!(index.value(&Row::from(["Amy"]), Field::Subtotal), "");
    }

    #[test]
    fn test_column_names_deserialize_from_toml_style_keys() {
        let names: ColumnNames = serde_json::from_str(r#"{"rice-addon": "加飯", "buyer": "購買人"}"#).unwrap();
        assert_eq!(names.name(Field::RiceAddon), Some("加飯"));
        assert_eq!(names.name(Field::Buyer), Some("購買人"));
        assert_eq!(names.name(Field::Item), None);
    }
}
