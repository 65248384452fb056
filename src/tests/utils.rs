// src/tests/utils.rs

use std::sync::mpsc::Sender;
use std::sync::{Arc, Mutex};

use serde_json::{json, Value};

use crate::actions::{
    ActionOutcome, OrderActions, TimelineContext, ToastLevel, ToastSink,
};
use crate::domain::event::{ReturnEvent, TimelineEvent};
use crate::domain::order::{OrderContext, Region};
use crate::errors::ActionError;

/// Toast sink that records every call for later assertions.
#[derive(Default)]
pub struct RecordingToaster {
    toasts: Mutex<Vec<(String, ToastLevel)>>,
}

impl RecordingToaster {
    pub fn toasts(&self) -> Vec<(String, ToastLevel)> {
        self.toasts.lock().unwrap().clone()
    }
}

impl ToastSink for RecordingToaster {
    fn toast(&self, message: &str, level: ToastLevel) {
        self.toasts
            .lock()
            .unwrap()
            .push((message.to_string(), level));
    }
}

/// Toast sink that forwards onto a channel, for tests where the action
/// handle has been dropped and there is nothing left to join.
pub struct ChannelToaster(pub Mutex<Sender<(String, ToastLevel)>>);

impl ToastSink for ChannelToaster {
    fn toast(&self, message: &str, level: ToastLevel) {
        let _ = self.0.lock().unwrap().send((message.to_string(), level));
    }
}

/// One recorded callback invocation.
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub name: &'static str,
    pub payload: Value,
}

/// `OrderActions` stub: records what ran with which payload, and fails
/// every call when constructed with `failing`.
#[derive(Default)]
pub struct StubActions {
    fail_with: Option<ActionError>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl StubActions {
    pub fn failing(err: ActionError) -> Self {
        Self {
            fail_with: Some(err),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, name: &'static str, payload: Value) -> ActionOutcome {
        self.calls.lock().unwrap().push(RecordedCall { name, payload });
        match &self.fail_with {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

impl OrderActions for StubActions {
    fn resend_notification(&self, notification: &Value) -> ActionOutcome {
        self.record("resend_notification", notification.clone())
    }

    fn update_notes(&self, note: &Value, body: &str) -> ActionOutcome {
        self.record("update_notes", json!({ "note": note, "body": body }))
    }

    fn receive_return(&self, ret: &Value) -> ActionOutcome {
        self.record("receive_return", ret.clone())
    }

    fn cancel_return(&self, return_id: &str) -> ActionOutcome {
        self.record("cancel_return", Value::String(return_id.to_string()))
    }

    fn save_claim(&self, claim: &Value) -> ActionOutcome {
        self.record("save_claim", claim.clone())
    }

    fn fulfill_claim(&self, claim: &Value) -> ActionOutcome {
        self.record("fulfill_claim", claim.clone())
    }

    fn cancel_claim(&self, claim_id: &str) -> ActionOutcome {
        self.record("cancel_claim", Value::String(claim_id.to_string()))
    }

    fn fulfill_swap(&self, swap: &Value) -> ActionOutcome {
        self.record("fulfill_swap", swap.clone())
    }

    fn process_swap_payment(&self, swap: &Value) -> ActionOutcome {
        self.record("process_swap_payment", swap.clone())
    }

    fn cancel_swap(&self, swap_id: &str) -> ActionOutcome {
        self.record("cancel_swap", Value::String(swap_id.to_string()))
    }
}

/// The order from the canonical scenario: USD, 10% tax.
pub fn test_order() -> OrderContext {
    OrderContext {
        currency_code: "usd".to_string(),
        region: Region { tax_rate: 10.0 },
        no_notification: false,
    }
}

pub fn make_ctx(actions: Arc<StubActions>, toaster: Arc<RecordingToaster>) -> TimelineContext {
    TimelineContext {
        order: test_order(),
        actions,
        toaster,
    }
}

/// Context wired to stubs nobody inspects, for pure rendering tests.
pub fn render_ctx() -> TimelineContext {
    make_ctx(
        Arc::new(StubActions::default()),
        Arc::new(RecordingToaster::default()),
    )
}

pub fn shirt_item() -> Value {
    json!({
        "title": "Shirt",
        "quantity": 1,
        "unit_price": 2000,
        "variant": { "sku": "SH-1", "product_id": "prod_1" }
    })
}

pub fn return_event_value(id: &str, status: &str) -> Value {
    json!({
        "id": id,
        "type": "return",
        "time": "2025-09-01T14:03:22Z",
        "status": status,
        "items": [shirt_item()],
        "raw": { "id": format!("ret_{id}"), "status": status }
    })
}

pub fn claim_event_value(id: &str, fulfillment_status: &str) -> Value {
    json!({
        "id": id,
        "type": "claim",
        "time": "2025-09-02T09:15:00Z",
        "fulfillment_status": fulfillment_status,
        "items": [shirt_item()],
        "raw": { "id": format!("claim_{id}"), "fulfillment_status": fulfillment_status }
    })
}

pub fn swap_event_value(id: &str, payment_status: &str, fulfillment_status: &str) -> Value {
    json!({
        "id": id,
        "type": "swap",
        "time": "2025-09-03T17:40:10Z",
        "payment_status": payment_status,
        "fulfillment_status": fulfillment_status,
        "items": [shirt_item()],
        "raw": { "id": format!("swap_{id}") }
    })
}

pub fn parse_return(value: &Value) -> ReturnEvent {
    match TimelineEvent::from_value(value).expect("valid return event") {
        TimelineEvent::Return(event) => event,
        other => panic!("expected a return event, got {other:?}"),
    }
}
