// src/domain/logic.rs

use chrono::{DateTime, Datelike, Utc};

/// Tax-inclusive unit price for display.
///
/// `unit_price` is in minor currency units (cents) and `tax_rate` is a
/// percentage. The stored integer amount is never touched; rounding
/// happens at the formatting boundary only.
pub fn display_unit_price(unit_price: i64, tax_rate: f64) -> f64 {
    (1.0 + tax_rate / 100.0) * (unit_price as f64 / 100.0)
}

/// Format a unit price the way the timeline shows it: two decimals and an
/// upper-cased currency code, e.g. `22.00 USD`.
pub fn format_money(unit_price: i64, tax_rate: f64, currency_code: &str) -> String {
    format!(
        "{:.2} {}",
        display_unit_price(unit_price, tax_rate),
        currency_code.to_uppercase()
    )
}

/// Initial expand state for a collapsible timeline entry.
///
/// Canceled entries start collapsed behind a Show/Hide toggle, everything
/// else starts open. This rule runs on first construction *and* whenever
/// an item is rebound to a new event: the state is reset, not merged, so
/// a stale toggle never survives onto an unrelated event that happens to
/// land in the same slot.
pub fn initial_expanded(canceled: bool) -> bool {
    !canceled
}

/// The long timestamp printed on every timeline entry, e.g.
/// `September 1st 2025, 14:03:22`.
pub fn format_event_time(time: &DateTime<Utc>) -> String {
    let day = time.day();
    format!(
        "{} {}{} {}, {}",
        time.format("%B"),
        day,
        ordinal_suffix(day),
        time.format("%Y"),
        time.format("%-H:%M:%S")
    )
}

fn ordinal_suffix(day: u32) -> &'static str {
    match day {
        11..=13 => "th",
        d if d % 10 == 1 => "st",
        d if d % 10 == 2 => "nd",
        d if d % 10 == 3 => "rd",
        _ => "th",
    }
}
