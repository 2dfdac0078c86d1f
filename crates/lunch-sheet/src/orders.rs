//! Management sheet: raw form submissions that can be deleted by row

use serde::{Deserialize, Serialize};

use crate::columns::{Field, HeaderIndex};
use crate::layout::SheetLayout;
use crate::table::{Table, parse};

/// One submitted order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub time: String,
    pub staff: String,
    pub item: String,
    pub quantity: String,
    pub note: String,
    /// 1-based spreadsheet row, as the delete script expects it
    pub sheet_row: usize,
}

impl Order {
    /// Date part of the submission timestamp
    pub fn date(&self) -> &str {
        self.time.split(' ').next().unwrap_or_default()
    }
}

/// Orders currently in the response sheet
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderBook {
    orders: Vec<Order>,
}

impl OrderBook {
    pub fn from_text(text: &str, layout: &SheetLayout) -> Self {
        Self::from_table(parse(text), layout)
    }

    /// Read every data row into an [`Order`]
    ///
    /// Row numbers are assigned before blank rows and rows without a staff
    /// name are dropped, so they always point at the real spreadsheet row.
    pub fn from_table(table: Table, layout: &SheetLayout) -> Self {
        let Some(header) = table.rows().get(layout.header_row) else {
            return Self::default();
        };
        let index = HeaderIndex::build(header, &layout.columns);

        let first_sheet_row = layout.data_start() + 1;
        let orders: Vec<Order> = table
            .rows()
            .iter()
            .skip(layout.data_start())
            .enumerate()
            .filter(|(_, row)| !(layout.skip_blank_rows && row.is_blank()))
            .map(|(i, row)| Order {
                time: index.value(row, Field::Timestamp).to_string(),
                staff: index.value(row, Field::Staff).to_string(),
                item: index.value(row, Field::Item).to_string(),
                quantity: index.value(row, Field::Quantity).to_string(),
                note: index.value(row, Field::Note).to_string(),
                sheet_row: first_sheet_row + i,
            })
            .filter(|order| !order.staff.is_empty())
            .collect();

        tracing::debug!(orders = orders.len(), "loaded order book");
        Self { orders }
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    pub fn find(&self, sheet_row: usize) -> Option<&Order> {
        self.orders.iter().find(|o| o.sheet_row == sheet_row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXPORT: &str = "\
時間戳記,訂餐人員,便當品項,數量,備註
2025/3/14 上午 10:01:02,Amy,排骨飯,1,
2025/3/14 上午 10:05:40,,雞腿飯,1,
2025/3/14 上午 10:07:11,Bob,魚排飯,2,\"少飯, 不要辣\"
";

    #[test]
    fn test_orders_keep_sheet_rows() {
        let book = OrderBook::from_text(EXPORT, &SheetLayout::management());

        assert_eq!(book.len(), 2);
        assert_eq!(book.orders()[0].staff, "Amy");
        assert_eq!(book.orders()[0].sheet_row, 2);
        // Row 3 has no staff name and is dropped; Bob keeps row 4.
        assert_eq!(book.orders()[1].sheet_row, 4);
        assert_eq!(book.orders()[1].note, "少飯, 不要辣");
        assert_eq!(book.find(4).map(|o| o.item.as_str()), Some("魚排飯"));
        assert!(book.find(3).is_none());
    }

    #[test]
    fn test_order_date() {
        let book = OrderBook::from_text(EXPORT, &SheetLayout::management());
        assert_eq!(book.orders()[0].date(), "2025/3/14");
    }

    #[test]
    fn test_header_only_is_empty() {
        assert!(OrderBook::from_text("時間戳記,訂餐人員\n", &SheetLayout::management()).is_empty());
        assert!(OrderBook::from_text("", &SheetLayout::management()).is_empty());
    }

    #[test]
    fn test_trailing_blank_line_is_not_an_order() {
        let text = format!("{}\n", EXPORT);
        assert_eq!(OrderBook::from_text(&text, &SheetLayout::management()).len(), 2);
    }

    #[test]
    fn test_missing_staff_column_drops_everything() {
        let book = OrderBook::from_text("時間戳記,姓名\n2025/3/14,Amy\n", &SheetLayout::management());
        assert!(book.is_empty());
    }

    #[test]
    fn test_custom_header_row() {
        let mut layout = SheetLayout::management();
        layout.header_row = 1;
        let book = OrderBook::from_text("note\n訂餐人員\nAmy\n", &layout);

        assert_eq!(book.orders()[0].sheet_row, 3);
        assert_eq!(book.orders()[0].time, "");
    }

    #[test]
    fn test_skipped_blank_rows_keep_sheet_rows() {
        let mut layout = SheetLayout::management();
        layout.skip_blank_rows = true;
        let book = OrderBook::from_text("時間戳記,訂餐人員\n,\n2025/3/14,Bob\n", &layout);

        assert_eq!(book.len(), 1);
        assert_eq!(book.orders()[0].staff, "Bob");
        assert_eq!(book.orders()[0].sheet_row, 3);
    }
}
