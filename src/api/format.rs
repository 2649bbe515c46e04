//! Label formatting for axis ticks and pie slices.

use crate::core::SliceValueKind;

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Formats a monetary value in major units, e.g. `£1,234.56`.
#[must_use]
pub fn format_currency(value: f64) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    let pence = (value.abs() * 100.0).round() as u64;
    let whole = group_thousands(&(pence / 100).to_string());
    format!("{sign}£{whole}.{:02}", pence % 100)
}

/// Abbreviated currency for cramped axis labels, e.g. `£1.2k`, `£3.4m`.
#[must_use]
pub fn format_currency_abbrev(value: f64) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    let magnitude = value.abs();

    if magnitude >= 1.0e6 {
        format!("{sign}£{:.1}m", magnitude / 1.0e6)
    } else if magnitude >= 1.0e3 {
        format!("{sign}£{:.1}k", magnitude / 1.0e3)
    } else {
        format_currency(value)
    }
}

/// Formats a plain count with thousands grouping.
#[must_use]
pub fn format_count(value: f64) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    let rounded = value.abs().round() as u64;
    format!("{sign}{}", group_thousands(&rounded.to_string()))
}

/// Formats a slice value per its dataset's value kind.
#[must_use]
pub fn format_slice_value(value: f64, kind: SliceValueKind) -> String {
    match kind {
        SliceValueKind::Cost => format_currency(value),
        SliceValueKind::Count => format_count(value),
    }
}

/// Truncates a long label, appending an ellipsis marker.
#[must_use]
pub fn truncate_label(label: &str, max_chars: usize) -> String {
    if label.chars().count() <= max_chars {
        return label.to_owned();
    }

    let kept: String = label.chars().take(max_chars).collect();
    format!("{}...", kept.trim_end())
}
