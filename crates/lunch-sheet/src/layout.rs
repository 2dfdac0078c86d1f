//! Positional conventions of the published sheets
//!
//! Both exports come from a spreadsheet schema we do not own. Header rows,
//! title cells, and column names are data here so a schema change is a
//! configuration change.

use serde::{Deserialize, Serialize};

use crate::columns::{ColumnNames, Field};

// =============================================================================
// Header Labels
// =============================================================================

pub const BUYER: &str = "購買人";
pub const ITEM: &str = "項目";
pub const PRICE: &str = "單價";
pub const RICE_ADDON: &str = "加飯";
pub const EXTRA_ADDON: &str = "加料";
pub const QUANTITY: &str = "數量";
pub const SUBTOTAL: &str = "小計";

pub const TIMESTAMP: &str = "時間戳記";
pub const STAFF: &str = "訂餐人員";
pub const MEAL_ITEM: &str = "便當品項";
pub const NOTE: &str = "備註";

/// Title shown when the lookup sheet's title cell is empty
pub const LOOKUP_TITLE_FALLBACK: &str = "訂單查詢";

// =============================================================================
// Layout
// =============================================================================

/// Cells of the metadata row holding the sheet title and order date
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitleCells {
    pub row: usize,
    pub title_column: usize,
    pub date_column: usize,
}

/// Where a sheet keeps its header, title, and data
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetLayout {
    /// Zero-based row holding column headers; data starts right after it
    pub header_row: usize,
    #[serde(default)]
    pub title: Option<TitleCells>,
    /// Drop rows whose cells are all blank before locating the header
    #[serde(default)]
    pub skip_blank_rows: bool,
    pub columns: ColumnNames,
}

impl SheetLayout {
    /// Lookup sheet: title/date row, header row, then orders
    pub fn lookup() -> Self {
        Self {
            header_row: 1,
            title: Some(TitleCells {
                row: 0,
                title_column: 2,
                date_column: 0,
            }),
            skip_blank_rows: true,
            columns: ColumnNames::from_pairs(&[
                (Field::Buyer, BUYER),
                (Field::Item, ITEM),
                (Field::Price, PRICE),
                (Field::RiceAddon, RICE_ADDON),
                (Field::ExtraAddon, EXTRA_ADDON),
                (Field::Quantity, QUANTITY),
                (Field::Subtotal, SUBTOTAL),
            ]),
        }
    }

    /// Raw form responses: header row, then one row per submission
    pub fn management() -> Self {
        Self {
            header_row: 0,
            title: None,
            skip_blank_rows: false,
            columns: ColumnNames::from_pairs(&[
                (Field::Timestamp, TIMESTAMP),
                (Field::Staff, STAFF),
                (Field::Item, MEAL_ITEM),
                (Field::Quantity, QUANTITY),
                (Field::Note, NOTE),
            ]),
        }
    }

    /// Zero-based index of the first data row
    pub fn data_start(&self) -> usize {
        self.header_row + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layouts() {
        assert_eq!(SheetLayout::lookup().data_start(), 2);
        assert_eq!(SheetLayout::management().data_start(), 1);
        assert_eq!(SheetLayout::management().columns.name(Field::Item), Some(MEAL_ITEM));
        assert_eq!(SheetLayout::lookup().columns.name(Field::Item), Some(ITEM));
    }

    #[test]
    fn test_layout_from_json() {
        let layout: SheetLayout = serde_json::from_str(
            r#"{"header_row": 2, "columns": {"staff": "姓名", "timestamp": "Timestamp"}}"#,
        )
        .unwrap();

        assert_eq!(layout.data_start(), 3);
        assert_eq!(layout.title, None);
        assert!(!layout.skip_blank_rows);
        assert_eq!(layout.columns.name(Field::Staff), Some("姓名"));
    }
}
