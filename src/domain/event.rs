// src/domain/event.rs

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use std::fmt;

use crate::domain::line_item::LineItemRef;
use crate::errors::UiError;

/// Lifecycle states of a return, as reported by the admin API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReturnStatus {
    Requested,
    Received,
    Canceled,
}

impl fmt::Display for ReturnStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReturnStatus::Requested => write!(f, "requested"),
            ReturnStatus::Received => write!(f, "received"),
            ReturnStatus::Canceled => write!(f, "canceled"),
        }
    }
}

/// Fulfillment states shared by claims and swaps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FulfillmentStatus {
    NotFulfilled,
    Fulfilled,
    Shipped,
    Canceled,
}

impl fmt::Display for FulfillmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FulfillmentStatus::NotFulfilled => write!(f, "not fulfilled"),
            FulfillmentStatus::Fulfilled => write!(f, "fulfilled"),
            FulfillmentStatus::Shipped => write!(f, "shipped"),
            FulfillmentStatus::Canceled => write!(f, "canceled"),
        }
    }
}

/// Payment states of a swap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    NotPaid,
    Awaiting,
    Captured,
    Canceled,
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaymentStatus::NotPaid => write!(f, "not paid"),
            PaymentStatus::Awaiting => write!(f, "awaiting"),
            PaymentStatus::Captured => write!(f, "captured"),
            PaymentStatus::Canceled => write!(f, "canceled"),
        }
    }
}

/// A notification that went out for this order (order confirmation,
/// shipment mail, and so on).
#[derive(Debug, Clone, Deserialize)]
pub struct NotificationEvent {
    pub id: String,
    pub time: DateTime<Utc>,
    /// Template identifier, e.g. `order.return_requested`.
    pub event_name: String,
    #[serde(default)]
    pub to: Option<String>,
    /// Backend object handed back verbatim on resend: the record's `raw`
    /// field when the data layer attached one, otherwise the record
    /// itself.
    #[serde(skip)]
    pub raw: Value,
}

/// A free-text note a teammate left on the order.
#[derive(Debug, Clone, Deserialize)]
pub struct NoteEvent {
    pub id: String,
    pub time: DateTime<Utc>,
    /// Note body.
    pub value: String,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(skip)]
    pub raw: Value,
}

/// A return lifecycle event.
#[derive(Debug, Clone, Deserialize)]
pub struct ReturnEvent {
    pub id: String,
    pub time: DateTime<Utc>,
    pub status: ReturnStatus,
    #[serde(default)]
    pub items: Vec<LineItemRef>,
    /// True when notifications were suppressed for this return.
    #[serde(default)]
    pub no_notification: bool,
    #[serde(skip)]
    pub raw: Value,
}

/// A claim lifecycle event.
#[derive(Debug, Clone, Deserialize)]
pub struct ClaimEvent {
    pub id: String,
    pub time: DateTime<Utc>,
    pub fulfillment_status: FulfillmentStatus,
    #[serde(default)]
    pub items: Vec<LineItemRef>,
    #[serde(default)]
    pub no_notification: bool,
    #[serde(skip)]
    pub raw: Value,
}

/// A swap lifecycle event.
#[derive(Debug, Clone, Deserialize)]
pub struct SwapEvent {
    pub id: String,
    pub time: DateTime<Utc>,
    pub payment_status: PaymentStatus,
    pub fulfillment_status: FulfillmentStatus,
    #[serde(default)]
    pub items: Vec<LineItemRef>,
    #[serde(default)]
    pub no_notification: bool,
    #[serde(skip)]
    pub raw: Value,
}

impl SwapEvent {
    /// A swap counts as canceled when either side of it was canceled.
    pub fn canceled(&self) -> bool {
        self.payment_status == PaymentStatus::Canceled
            || self.fulfillment_status == FulfillmentStatus::Canceled
    }
}

/// One-line lifecycle milestones with no payload beyond their timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SimpleKind {
    #[default]
    Placed,
    Fulfilled,
    Shipped,
}

impl SimpleKind {
    pub fn label(self) -> &'static str {
        match self {
            SimpleKind::Placed => "Order placed",
            SimpleKind::Fulfilled => "Items fulfilled",
            SimpleKind::Shipped => "Items shipped",
        }
    }
}

/// A milestone event rendered as a single actionless line.
#[derive(Debug, Clone, Deserialize)]
pub struct SimpleEvent {
    pub id: String,
    pub time: DateTime<Utc>,
    #[serde(skip)]
    pub kind: SimpleKind,
}

/// An event kind this build has no renderer for. Kept around (instead of
/// being dropped at the door) so the container can keep its one-item-per-
/// event accounting; it renders to nothing.
#[derive(Debug, Clone)]
pub struct UnknownEvent {
    pub id: String,
    /// The unrecognized `type` tag, for diagnostics.
    pub kind: String,
    pub time: Option<DateTime<Utc>>,
}

/// A normalized record of something that happened to an order.
///
/// The union is closed on purpose: dispatching over it is an exhaustive
/// match, so a newly added kind without a renderer fails to compile
/// instead of silently dropping entries. Kinds the crate has never heard
/// of land in [`TimelineEvent::Unknown`].
#[derive(Debug, Clone)]
pub enum TimelineEvent {
    Notification(NotificationEvent),
    Note(NoteEvent),
    Return(ReturnEvent),
    Claim(ClaimEvent),
    Swap(SwapEvent),
    Simple(SimpleEvent),
    Unknown(UnknownEvent),
}

impl TimelineEvent {
    /// Normalize one raw event record from the admin API.
    ///
    /// This is the contract boundary with the data layer. A record
    /// missing `type` or `id` is a caller bug and comes back as
    /// [`UiError::MalformedEvent`], as does a recognized kind whose
    /// payload does not deserialize. An unrecognized `type` tag is *not*
    /// an error: it normalizes to [`TimelineEvent::Unknown`] so one odd
    /// record cannot take the whole timeline down.
    pub fn from_value(raw: &Value) -> Result<Self, UiError> {
        let kind = raw
            .get("type")
            .and_then(Value::as_str)
            .ok_or_else(|| UiError::MalformedEvent("event record has no `type` field".into()))?;
        let id = raw
            .get("id")
            .and_then(Value::as_str)
            .ok_or_else(|| UiError::MalformedEvent(format!("`{kind}` event has no `id` field")))?;

        let event = match kind {
            "notification" => {
                let mut event: NotificationEvent = parse_payload(kind, id, raw)?;
                event.raw = embedded_raw(raw);
                TimelineEvent::Notification(event)
            }
            "note" => {
                let mut event: NoteEvent = parse_payload(kind, id, raw)?;
                event.raw = embedded_raw(raw);
                TimelineEvent::Note(event)
            }
            "return" => {
                let mut event: ReturnEvent = parse_payload(kind, id, raw)?;
                event.raw = embedded_raw(raw);
                TimelineEvent::Return(event)
            }
            "claim" => {
                let mut event: ClaimEvent = parse_payload(kind, id, raw)?;
                event.raw = embedded_raw(raw);
                TimelineEvent::Claim(event)
            }
            "swap" => {
                let mut event: SwapEvent = parse_payload(kind, id, raw)?;
                event.raw = embedded_raw(raw);
                TimelineEvent::Swap(event)
            }
            "placed" | "fulfilled" | "shipped" => {
                let mut event: SimpleEvent = parse_payload(kind, id, raw)?;
                event.kind = match kind {
                    "placed" => SimpleKind::Placed,
                    "fulfilled" => SimpleKind::Fulfilled,
                    _ => SimpleKind::Shipped,
                };
                TimelineEvent::Simple(event)
            }
            other => TimelineEvent::Unknown(UnknownEvent {
                id: id.to_string(),
                kind: other.to_string(),
                time: raw
                    .get("time")
                    .and_then(Value::as_str)
                    .and_then(|s| s.parse().ok()),
            }),
        };

        Ok(event)
    }

    /// Stable identifier of the underlying event.
    pub fn id(&self) -> &str {
        match self {
            TimelineEvent::Notification(e) => &e.id,
            TimelineEvent::Note(e) => &e.id,
            TimelineEvent::Return(e) => &e.id,
            TimelineEvent::Claim(e) => &e.id,
            TimelineEvent::Swap(e) => &e.id,
            TimelineEvent::Simple(e) => &e.id,
            TimelineEvent::Unknown(e) => &e.id,
        }
    }
}

fn parse_payload<T: DeserializeOwned>(kind: &str, id: &str, raw: &Value) -> Result<T, UiError> {
    serde_json::from_value(raw.clone()).map_err(|e| {
        UiError::MalformedEvent(format!("`{kind}` event `{id}` has an invalid payload: {e}"))
    })
}

/// The backend object an action callback should get: the record's `raw`
/// field when the data layer attached one, otherwise the record itself.
fn embedded_raw(record: &Value) -> Value {
    record.get("raw").cloned().unwrap_or_else(|| record.clone())
}
