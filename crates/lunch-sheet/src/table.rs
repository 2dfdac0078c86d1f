//! Comma-separated text → rows of string fields
//!
//! The published spreadsheet exports are plain CSV: `,` between fields,
//! `"` for optional quoting, `\n` or `\r\n` between rows. Parsing never
//! fails; malformed quoting simply runs to the end of the input.

use serde::{Deserialize, Serialize};

/// One row of fields, in source column order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Row(Vec<String>);

impl Row {
    pub fn new(fields: Vec<String>) -> Self {
        Self(fields)
    }

    pub fn fields(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Field at `position`, or `""` when the position is unknown or past the end
    pub fn get(&self, position: Option<usize>) -> &str {
        position
            .and_then(|idx| self.0.get(idx))
            .map(String::as_str)
            .unwrap_or("")
    }

    /// True when every field is empty after trimming
    pub fn is_blank(&self) -> bool {
        self.0.iter().all(|field| field.trim().is_empty())
    }
}

impl From<Vec<String>> for Row {
    fn from(fields: Vec<String>) -> Self {
        Self(fields)
    }
}

impl<const N: usize> From<[&str; N]> for Row {
    fn from(fields: [&str; N]) -> Self {
        Self(fields.iter().map(|f| f.to_string()).collect())
    }
}

/// Ordered rows parsed from one export
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Table {
    rows: Vec<Row>,
}

impl Table {
    pub fn parse(text: &str) -> Self {
        parse(text)
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<Row> {
        self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Drop rows whose fields are all blank
    pub fn without_blank_rows(self) -> Self {
        Self {
            rows: self.rows.into_iter().filter(|row| !row.is_blank()).collect(),
        }
    }
}

impl From<Vec<Row>> for Table {
    fn from(rows: Vec<Row>) -> Self {
        Self { rows }
    }
}

/// Parse CSV text into a [`Table`]
///
/// A `"` toggles quoting wherever it appears; inside quotes `""` is a literal
/// quote and `,`/`\n` are ordinary characters. Outside quotes `\r` is dropped.
/// At end of input the pending field is flushed only if it is non-empty or
/// the row already holds fields, so a trailing newline adds no extra row.
pub fn parse(text: &str) -> Table {
    let mut rows = Vec::new();
    let mut row: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if in_quotes {
            match ch {
                '"' if chars.peek() == Some(&'"') => {
                    field.push('"');
                    chars.next();
                }
                '"' => in_quotes = false,
                _ => field.push(ch),
            }
        } else {
            match ch {
                '"' => in_quotes = true,
                ',' => row.push(std::mem::take(&mut field)),
                '\n' => {
                    row.push(std::mem::take(&mut field));
                    rows.push(Row(std::mem::take(&mut row)));
                }
                '\r' => {}
                _ => field.push(ch),
            }
        }
    }

    if !field.is_empty() || !row.is_empty() {
        row.push(field);
        rows.push(Row(row));
    }

    Table { rows }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(text: &str) -> Vec<Vec<String>> {
        parse(text).into_rows().into_iter().map(|r| r.0).collect()
    }

    fn owned(expected: &[&[&str]]) -> Vec<Vec<String>> {
        expected
            .iter()
            .map(|r| r.iter().map(|f| f.to_string()).collect())
            .collect()
    }

    #[test]
    fn test_empty_input_has_no_rows() {
        assert!(parse("").is_empty());
    }

    #[test]
    fn test_no_trailing_newline() {
        assert_eq!(rows("a,b,c"), owned(&[&["a", "b", "c"]]));
    }

    #[test]
    fn test_trailing_newline_adds_no_row() {
        assert_eq!(rows("a,b,c\n"), owned(&[&["a", "b", "c"]]));
    }

    #[test]
    fn test_quoted_comma() {
        assert_eq!(rows("a,\"b,c\",d\n"), owned(&[&["a", "b,c", "d"]]));
    }

    #[test]
    fn test_doubled_quote_is_literal() {
        assert_eq!(rows("x,\"y\"\"z\"\n"), owned(&[&["x", "y\"z"]]));
    }

    #[test]
    fn test_quoted_newline_stays_in_field() {
        assert_eq!(
            rows("name,note\n\"Amy\",\"no onions\nextra rice\"\n"),
            owned(&[&["name", "note"], &["Amy", "no onions\nextra rice"]])
        );
    }

    #[test]
    fn test_crlf_rows() {
        assert_eq!(rows("a,b\r\nc,d\r\n"), owned(&[&["a", "b"], &["c", "d"]]));
    }

    #[test]
    fn test_carriage_return_kept_inside_quotes() {
        assert_eq!(rows("\"a\r\nb\"\n"), owned(&[&["a\r\nb"]]));
    }

    #[test]
    fn test_empty_fields_preserved() {
        assert_eq!(rows(",,\n"), owned(&[&["", "", ""]]));
    }

    #[test]
    fn test_trailing_blank_line_yields_single_empty_field_row() {
        // The second newline still terminates a row; nothing is left to flush.
        assert_eq!(rows("a,b,\n\n"), owned(&[&["a", "b", ""], &[""]]));
    }

    #[test]
    fn test_trailing_comma_without_newline_flushes_empty_field() {
        assert_eq!(rows("a,"), owned(&[&["a", ""]]));
    }

    #[test]
    fn test_unterminated_quote_consumes_rest() {
        assert_eq!(rows("a,\"b,c\nd"), owned(&[&["a", "b,c\nd"]]));
    }

    #[test]
    fn test_lone_quote_yields_nothing() {
        assert!(parse("\"").is_empty());
    }

    #[test]
    fn test_quote_mid_field_toggles() {
        assert_eq!(rows("ab\"c,d\"e\n"), owned(&[&["abc,de"]]));
    }

    #[test]
    fn test_parse_is_idempotent() {
        let text = "t,,title\nbuyer,item\n\"Lee, J\",rice\n";
        assert_eq!(parse(text), parse(text));
    }

    #[test]
    fn test_unquoted_text_matches_plain_split() {
        let text = "a,b,c\nd,,f\ng,h,i";
        let expected: Vec<Vec<String>> = text
            .split('\n')
            .map(|line| line.split(',').map(str::to_string).collect())
            .collect();
        assert_eq!(rows(text), expected);
    }

    #[test]
    fn test_round_trip_through_csv_writer() {
        let original = owned(&[
            &["時間戳記", "訂餐人員", "備註"],
            &["2025/1/2 11:03:00", "王, 小明", "say \"hi\""],
            &["", "Amy", "line one\nline two"],
        ]);

        let mut wtr = csv::WriterBuilder::new()
            .terminator(csv::Terminator::Any(b'\n'))
            .from_writer(Vec::new());
        for record in &original {
            wtr.write_record(record).unwrap();
        }
        let text = String::from_utf8(wtr.into_inner().unwrap()).unwrap();

        assert_eq!(rows(&text), original);
    }

    #[test]
    fn test_row_get_out_of_range_is_empty() {
        let row = Row::from(["a", "b"]);
        assert_eq!(row.get(Some(1)), "b");
        assert_eq!(row.get(Some(5)), "");
        assert_eq!(row.get(None), "");
    }

    #[test]
    fn test_without_blank_rows() {
        let table = parse("a,b\n , \n,\nc,d\n").without_blank_rows();
        assert_eq!(table.len(), 2);
        assert_eq!(table.rows()[1], Row::from(["c", "d"]));
    }
}
