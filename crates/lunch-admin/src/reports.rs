//! Console tables and CSV exports

use anyhow::Result;
use csv::Writer;
use lunch_sheet::lookup::DETAIL_HEADINGS;
use lunch_sheet::{DetailLine, GroupTotals, Order, Summary, format_amount};
use std::io;
use std::path::Path;

// =============================================================================
// Console
// =============================================================================

/// Terminal columns taken by `c`; CJK and fullwidth forms take two
fn char_width(c: char) -> usize {
    match c as u32 {
        0x1100..=0x115F
        | 0x2E80..=0x303E
        | 0x3041..=0x33FF
        | 0x3400..=0x4DBF
        | 0x4E00..=0x9FFF
        | 0xA000..=0xA4CF
        | 0xAC00..=0xD7A3
        | 0xF900..=0xFAFF
        | 0xFE30..=0xFE4F
        | 0xFF00..=0xFF60
        | 0xFFE0..=0xFFE6
        | 0x20000..=0x3FFFD => 2,
        _ => 1,
    }
}

fn display_width(text: &str) -> usize {
    text.chars().map(char_width).sum()
}

/// Pad on the right to `width` terminal columns
fn left(text: &str, width: usize) -> String {
    format!("{}{}", text, " ".repeat(width.saturating_sub(display_width(text))))
}

/// Pad on the left to `width` terminal columns
fn right(text: &str, width: usize) -> String {
    format!("{}{}", " ".repeat(width.saturating_sub(display_width(text))), text)
}

pub fn print_summary(kind: Summary, totals: &GroupTotals) {
    println!("{} {}", left(kind.key_heading(), 24), right(kind.total_heading(), 12));
    println!("{}", "-".repeat(37));
    for group in &totals.groups {
        println!("{} {}", left(&group.key, 24), right(&format_amount(group.total), 12));
    }
    println!("{}", "-".repeat(37));
    println!(
        "{} {}",
        left(kind.grand_total_label(), 24),
        right(&format_amount(totals.grand_total), 12)
    );
}

const DETAIL_WIDTHS: [usize; 7] = [12, 16, 6, 6, 10, 6, 8];

fn detail_line(cells: [&str; 7]) -> String {
    cells
        .iter()
        .zip(DETAIL_WIDTHS)
        .enumerate()
        .map(|(i, (cell, width))| match i {
            0 | 1 | 4 => left(cell, width),
            _ => right(cell, width),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn print_detail(lines: &[DetailLine], total: Option<f64>) {
    let rule = DETAIL_WIDTHS.iter().sum::<usize>() + DETAIL_WIDTHS.len() - 1;

    println!("{}", detail_line(DETAIL_HEADINGS));
    println!("{}", "-".repeat(rule));
    for line in lines {
        println!(
            "{}",
            detail_line([
                &line.buyer,
                &line.item,
                &line.price,
                &line.rice_addon,
                &line.extra_addon,
                &line.quantity,
                &format_amount(line.subtotal),
            ])
        );
    }
    if let Some(total) = total {
        println!("{}", "-".repeat(rule));
        println!("{}", right(&format!("個人合計 {}", format_amount(total)), rule));
    }
    println!("\n{} order line(s)", lines.len());
}

pub fn print_orders(orders: &[Order]) {
    if orders.is_empty() {
        println!("資料庫目前無任何訂單");
        return;
    }

    let line = |cells: [&str; 6]| {
        format!(
            "{}  {} {} {} {}  {}",
            right(cells[0], 5),
            left(cells[1], 12),
            left(cells[2], 10),
            left(cells[3], 16),
            right(cells[4], 6),
            cells[5]
        )
    };

    println!("{}", line(["Row", "時間", "人員", "品項", "數量", "備註"]));
    println!("{}", "-".repeat(72));
    for order in orders {
        let note = order.note.replace('\n', " ");
        println!(
            "{}",
            line([
                &order.sheet_row.to_string(),
                order.date(),
                &order.staff,
                &order.item,
                &order.quantity,
                &note,
            ])
        );
    }
    println!("\n{} order(s)", orders.len());
}

// =============================================================================
// CSV
// =============================================================================

pub fn export_summary(path: &Path, kind: Summary, totals: &GroupTotals) -> Result<()> {
    write_summary(Writer::from_path(path)?, kind, totals)
}

pub fn export_detail(path: &Path, lines: &[DetailLine], total: f64) -> Result<()> {
    write_detail(Writer::from_path(path)?, lines, total)
}

fn write_summary<W: io::Write>(mut wtr: Writer<W>, kind: Summary, totals: &GroupTotals) -> Result<()> {
    wtr.write_record([kind.key_heading(), kind.total_heading()])?;
    for group in &totals.groups {
        wtr.write_record([group.key.as_str(), &format_amount(group.total)])?;
    }
    wtr.write_record([kind.grand_total_label(), &format_amount(totals.grand_total)])?;
    wtr.flush()?;
    Ok(())
}

fn write_detail<W: io::Write>(mut wtr: Writer<W>, lines: &[DetailLine], total: f64) -> Result<()> {
    wtr.write_record(DETAIL_HEADINGS)?;
    for line in lines {
        wtr.write_record([
            line.buyer.as_str(),
            &line.item,
            &line.price,
            &line.rice_addon,
            &line.extra_addon,
            &line.quantity,
            &format_amount(line.subtotal),
        ])?;
    }
    wtr.write_record(["合計", "", "", "", "", "", &format_amount(total)])?;
    wtr.flush()?;
    Ok(())
}
