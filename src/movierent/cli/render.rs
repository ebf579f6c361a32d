//! # Rendering Module
//!
//! Turns listed records into aligned tables (or JSON) and command messages into
//! styled lines.
//!
//! Tables work on any `Serialize` record: each row is serialized to a JSON
//! object and the object's keys, in field declaration order, become the column
//! headers. Columns grow to their widest cell and values are never cut, so a
//! listing always shows what is stored. Width math runs on the plain text with
//! `unicode-width`; styling is applied afterwards so escape codes never skew
//! alignment.

use super::styles::RENTAL_THEME;
use console::Style;
use movierent::api::{CmdMessage, MessageLevel};
use serde::Serialize;
use serde_json::Value;
use unicode_width::UnicodeWidthStr;

const COLUMN_GAP: &str = "  ";
const NULL_CELL: &str = "null";

fn paint(style: &Style, text: &str, use_color: Option<bool>) -> String {
    match use_color {
        Some(c) => style.clone().force_styling(c).apply_to(text).to_string(),
        None => style.apply_to(text).to_string(),
    }
}

fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => NULL_CELL.to_string(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Renders uniform records as a table, or `empty_message` when there are none.
pub fn render_table<T: Serialize>(rows: &[T], empty_message: &str) -> String {
    render_table_internal(rows, empty_message, None)
}

fn render_table_internal<T: Serialize>(
    rows: &[T],
    empty_message: &str,
    use_color: Option<bool>,
) -> String {
    if rows.is_empty() {
        return format!("{}\n", paint(&RENTAL_THEME.info, empty_message, use_color));
    }

    let mut headers: Vec<String> = Vec::new();
    let mut cells: Vec<Vec<(String, bool)>> = Vec::with_capacity(rows.len());
    for row in rows {
        let object = match serde_json::to_value(row) {
            Ok(Value::Object(map)) => map,
            Ok(other) => [("value".to_string(), other)].into_iter().collect(),
            Err(e) => return format!("Render error: {}\n", e),
        };
        if headers.is_empty() {
            headers = object.keys().cloned().collect();
        }
        cells.push(
            headers
                .iter()
                .map(|h| {
                    let value = object.get(h).unwrap_or(&Value::Null);
                    (cell_text(value), value.is_null())
                })
                .collect(),
        );
    }

    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(i, h)| {
            cells
                .iter()
                .map(|row| row[i].0.width())
                .chain(std::iter::once(h.width()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut output = String::new();

    let header_line: Vec<String> = headers
        .iter()
        .zip(&widths)
        .map(|(h, w)| paint(&RENTAL_THEME.header, &pad_to_width(h, *w), use_color))
        .collect();
    push_line(&mut output, &header_line);

    let rule_line: Vec<String> = widths
        .iter()
        .map(|w| paint(&RENTAL_THEME.rule, &"-".repeat(*w), use_color))
        .collect();
    push_line(&mut output, &rule_line);

    for row in &cells {
        let line: Vec<String> = row
            .iter()
            .zip(&widths)
            .map(|((text, is_null), w)| {
                let padded = pad_to_width(text, *w);
                if *is_null {
                    paint(&RENTAL_THEME.null, &padded, use_color)
                } else {
                    padded
                }
            })
            .collect();
        push_line(&mut output, &line);
    }

    output
}

fn push_line(output: &mut String, columns: &[String]) {
    let line = columns.join(COLUMN_GAP);
    output.push_str(line.trim_end());
    output.push('\n');
}

/// Renders records as pretty-printed JSON.
pub fn render_json<T: Serialize>(rows: &[T]) -> serde_json::Result<String> {
    let mut out = serde_json::to_string_pretty(rows)?;
    out.push('\n');
    Ok(out)
}

fn message_style(level: MessageLevel) -> &'static Style {
    match level {
        MessageLevel::Info => &RENTAL_THEME.info,
        MessageLevel::Success => &RENTAL_THEME.success,
        MessageLevel::Warning => &RENTAL_THEME.warning,
        MessageLevel::Error => &RENTAL_THEME.error,
    }
}

fn render_message(message: &CmdMessage, use_color: Option<bool>) -> String {
    format!(
        "{}\n",
        paint(message_style(message.level), &message.content, use_color)
    )
}

/// Prints command messages: errors to stderr, everything else to stdout.
pub fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        let line = render_message(message, None);
        match message.level {
            MessageLevel::Error => eprint!("{}", line),
            _ => print!("{}", line),
        }
    }
}

fn pad_to_width(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(padding))
}
