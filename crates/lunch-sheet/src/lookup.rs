//! Lookup sheet: per-buyer order detail and summary reports

use serde::{Deserialize, Serialize};

use crate::aggregate::{GroupTotals, distinct_keys, sum_by_group};
use crate::columns::{Field, HeaderIndex};
use crate::detail::{Detail, Filter, detail};
use crate::layout::{self, SheetLayout};
use crate::numeric::parse_or_zero;
use crate::table::{Row, Table, parse};

/// Summary report kinds offered on the lookup page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Summary {
    /// Buyer / amount total
    ByBuyer,
    /// Item / quantity total
    ByItem,
}

impl Summary {
    pub const ALL: [Summary; 2] = [Summary::ByBuyer, Summary::ByItem];

    pub fn key_field(self) -> Field {
        match self {
            Summary::ByBuyer => Field::Buyer,
            Summary::ByItem => Field::Item,
        }
    }

    pub fn value_field(self) -> Field {
        match self {
            Summary::ByBuyer => Field::Subtotal,
            Summary::ByItem => Field::Quantity,
        }
    }

    /// Stable selection value used by selects and the CLI
    pub fn selection(self) -> &'static str {
        match self {
            Summary::ByBuyer => "by-buyer",
            Summary::ByItem => "by-item",
        }
    }

    pub fn from_selection(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.selection() == value)
    }

    pub fn label(self) -> &'static str {
        match self {
            Summary::ByBuyer => "購買人 / 金額總計",
            Summary::ByItem => "項目 / 數量總計",
        }
    }

    pub fn key_heading(self) -> &'static str {
        match self {
            Summary::ByBuyer => layout::BUYER,
            Summary::ByItem => layout::ITEM,
        }
    }

    pub fn total_heading(self) -> &'static str {
        match self {
            Summary::ByBuyer => "金額總計",
            Summary::ByItem => "數量總計",
        }
    }

    pub fn grand_total_label(self) -> &'static str {
        match self {
            Summary::ByBuyer => "全體總計",
            Summary::ByItem => "總數量",
        }
    }
}

/// One order line as displayed in the detail table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetailLine {
    pub buyer: String,
    pub item: String,
    pub price: String,
    pub rice_addon: String,
    pub extra_addon: String,
    pub quantity: String,
    pub subtotal: f64,
}

/// Column headings of the detail table, in display order
pub const DETAIL_HEADINGS: [&str; 7] = [
    layout::BUYER,
    layout::ITEM,
    layout::PRICE,
    layout::RICE_ADDON,
    layout::EXTRA_ADDON,
    layout::QUANTITY,
    layout::SUBTOTAL,
];

/// Parsed lookup export
#[derive(Debug, Clone, PartialEq)]
pub struct LookupSheet {
    title: String,
    header: Row,
    index: HeaderIndex,
    rows: Vec<Row>,
}

impl LookupSheet {
    pub fn from_text(text: &str, layout: &SheetLayout) -> Option<Self> {
        Self::from_table(parse(text), layout)
    }

    /// Split a table into title, header, and data rows
    ///
    /// Returns `None` when the header row is absent; callers keep whatever
    /// they showed before.
    pub fn from_table(table: Table, layout: &SheetLayout) -> Option<Self> {
        let table = if layout.skip_blank_rows {
            table.without_blank_rows()
        } else {
            table
        };
        if table.len() <= layout.header_row {
            tracing::debug!(rows = table.len(), "lookup export has no header row");
            return None;
        }

        let title = match &layout.title {
            Some(cells) => {
                let meta = table.rows().get(cells.row).cloned().unwrap_or_default();
                let name = non_empty_or(meta.get(Some(cells.title_column)), layout::LOOKUP_TITLE_FALLBACK);
                format!("{} ({})", name, meta.get(Some(cells.date_column)))
            }
            None => layout::LOOKUP_TITLE_FALLBACK.to_string(),
        };

        let mut rows = table.into_rows();
        let data = rows.split_off(layout.data_start());
        let header = rows.swap_remove(layout.header_row);
        let index = HeaderIndex::build(&header, &layout.columns);
        tracing::debug!(rows = data.len(), "loaded lookup sheet");

        Some(Self {
            title,
            header,
            index,
            rows: data,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn header(&self) -> &Row {
        &self.header
    }

    pub fn index(&self) -> &HeaderIndex {
        &self.index
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Buyer names to offer for selection, sorted
    pub fn buyers(&self) -> Vec<String> {
        let buyer = self.index.position(Field::Buyer);
        let label = buyer.map(|_| self.header.get(buyer));
        distinct_keys(&self.rows, buyer, label)
    }

    pub fn summary(&self, kind: Summary) -> GroupTotals {
        sum_by_group(
            &self.rows,
            self.index.position(kind.key_field()),
            self.index.position(kind.value_field()),
        )
    }

    /// Orders of one buyer (or everyone) with their subtotal sum
    pub fn detail(&self, filter: &Filter) -> Detail<'_> {
        detail(
            &self.rows,
            self.index.position(Field::Buyer),
            filter,
            self.index.position(Field::Subtotal),
        )
    }

    pub fn detail_lines(&self, filter: &Filter) -> (Vec<DetailLine>, f64) {
        let Detail { rows, total } = self.detail(filter);
        let lines = rows.into_iter().map(|row| self.line(row)).collect();
        (lines, total)
    }

    fn line(&self, row: &Row) -> DetailLine {
        let value = |field| self.index.value(row, field).to_string();
        DetailLine {
            buyer: value(Field::Buyer),
            item: value(Field::Item),
            price: value(Field::Price),
            rice_addon: value(Field::RiceAddon),
            extra_addon: value(Field::ExtraAddon),
            quantity: value(Field::Quantity),
            subtotal: parse_or_zero(self.index.value(row, Field::Subtotal)),
        }
    }
}

fn non_empty_or<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.is_empty() { fallback } else { value }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXPORT: &str = "\
2025/03/14,,好味便當,,,,
購買人,項目,單價,加飯,加料,數量,小計
Amy,排骨飯,90,,,1,90
Bob,雞腿飯,100,Y,滷蛋,2,230
,,,,,,
Amy,魚排飯,85,,,1,85
購買人,項目,單價,加飯,加料,數量,小計
";

    fn sheet() -> LookupSheet {
        LookupSheet::from_text(EXPORT, &SheetLayout::lookup()).unwrap()
    }

    #[test]
    fn test_title_from_metadata_row() {
        assert_eq!(sheet().title(), "好味便當 (2025/03/14)");
    }

    #[test]
    fn test_title_fallback() {
        let sheet = LookupSheet::from_text("2025/03/15,,\n購買人,小計\n", &SheetLayout::lookup()).unwrap();
        assert_eq!(sheet.title(), "訂單查詢 (2025/03/15)");
        assert!(sheet.rows().is_empty());
    }

    #[test]
    fn test_blank_rows_dropped() {
        // Blank row removed; the repeated header row stays as data.
        assert_eq!(sheet().rows().len(), 4);
        assert!(sheet().index().missing().is_empty());
    }

    #[test]
    fn test_no_header_is_none() {
        assert!(LookupSheet::from_text("", &SheetLayout::lookup()).is_none());
        assert!(LookupSheet::from_text("2025/03/14,,好味便當\n\n", &SheetLayout::lookup()).is_none());
    }

    #[test]
    fn test_buyers_exclude_header_label() {
        assert_eq!(sheet().buyers(), vec!["Amy", "Bob"]);
    }

    #[test]
    fn test_summary_by_buyer() {
        let totals = sheet().summary(Summary::ByBuyer);
        assert_eq!(totals.get("Amy"), Some(175.0));
        assert_eq!(totals.get("Bob"), Some(230.0));
        // The stray header row groups under its own label with a zero subtotal.
        assert_eq!(totals.get("購買人"), Some(0.0));
        assert_eq!(totals.grand_total, 405.0);
    }

    #[test]
    fn test_summary_by_item() {
        let totals = sheet().summary(Summary::ByItem);
        assert_eq!(totals.get("雞腿飯"), Some(2.0));
        assert_eq!(totals.get("排骨飯"), Some(1.0));
        assert_eq!(totals.grand_total, 4.0);
    }

    #[test]
    fn test_detail_for_buyer() {
        let (lines, total) = sheet().detail_lines(&Filter::from_selection("Amy"));
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].item, "排骨飯");
        assert_eq!(lines[1].item, "魚排飯");
        assert_eq!(total, 175.0);
    }

    #[test]
    fn test_detail_all() {
        let (lines, total) = sheet().detail_lines(&Filter::All);
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[1].rice_addon, "Y");
        assert_eq!(lines[1].extra_addon, "滷蛋");
        assert_eq!(lines[3].subtotal, 0.0);
        assert_eq!(total, 405.0);
    }

    #[test]
    fn test_missing_subtotal_column() {
        let sheet = LookupSheet::from_text("d,,t\n購買人,項目\nAmy,飯\n", &SheetLayout::lookup()).unwrap();
        assert!(sheet.index().missing().contains(&Field::Subtotal));

        let totals = sheet.summary(Summary::ByBuyer);
        assert_eq!(totals.get("Amy"), Some(0.0));
        let (lines, total) = sheet.detail_lines(&Filter::All);
        assert_eq!(lines[0].price, "");
        assert_eq!(total, 0.0);
    }

    #[test]
    fn test_summary_selection() {
        assert_eq!(Summary::from_selection("by-item"), Some(Summary::ByItem));
        assert_eq!(Summary::from_selection("list1"), None);
    }
}
