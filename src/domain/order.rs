// src/domain/order.rs

use serde::Deserialize;

/// Region settings of the order, as far as display is concerned.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Region {
    /// Tax rate as a percentage, e.g. `10.0` for 10%.
    pub tax_rate: f64,
}

/// The order every timeline entry is rendered against.
///
/// Read-only context: the timeline reads currency and notification
/// settings from it and never mutates it. Fetching and refreshing the
/// order is the shell's job.
#[derive(Debug, Clone, Deserialize)]
pub struct OrderContext {
    pub currency_code: String,
    pub region: Region,
    /// True when notifications are suppressed for the whole order.
    #[serde(default)]
    pub no_notification: bool,
}
