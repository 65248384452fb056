// src/templates/components/returns.rs

use maud::{html, Markup};
use serde_json::Value;

use crate::actions::{PendingAction, TimelineContext};
use crate::domain::event::{ReturnEvent, ReturnStatus};
use crate::domain::line_item::LineItemRef;
use crate::domain::logic::{format_event_time, initial_expanded};
use crate::templates::components::dropdown::dropdown;
use crate::templates::components::line_item::line_item_summary;

/// Timeline entry for a return event.
///
/// Carries the only local state a timeline entry has: whether it is
/// expanded. Canceled returns start collapsed behind a Show/Hide toggle,
/// everything else starts open.
pub struct ReturnTimelineItem {
    event: ReturnEvent,
    expanded: bool,
}

impl ReturnTimelineItem {
    pub fn new(event: ReturnEvent) -> Self {
        let expanded = initial_expanded(event.status == ReturnStatus::Canceled);
        Self { event, expanded }
    }

    /// Rebind to a new event. The toggle is re-derived from the incoming
    /// status, never carried over from the old event.
    pub fn set_event(&mut self, event: ReturnEvent) {
        self.expanded = initial_expanded(event.status == ReturnStatus::Canceled);
        self.event = event;
    }

    pub fn event(&self) -> &ReturnEvent {
        &self.event
    }

    pub fn expanded(&self) -> bool {
        self.expanded
    }

    pub fn toggle(&mut self) {
        self.expanded = !self.expanded;
    }

    /// Receive is available until the return is received or canceled.
    pub fn can_receive(&self) -> bool {
        self.event.status == ReturnStatus::Requested
    }

    /// Cancel is available until the return is canceled.
    pub fn can_cancel(&self) -> bool {
        self.event.status != ReturnStatus::Canceled
    }

    /// Mark the return as received. Runs off the render thread; a
    /// rejection surfaces as one error toast and nothing else changes.
    pub fn receive(&self, ctx: &TimelineContext) -> PendingAction {
        let raw = self.event.raw.clone();
        PendingAction::spawn(ctx, move |actions| actions.receive_return(&raw))
    }

    /// Cancel the return, addressed by the raw API object's own id.
    pub fn cancel(&self, ctx: &TimelineContext) -> PendingAction {
        let return_id = raw_id(&self.event.raw, &self.event.id);
        PendingAction::spawn(ctx, move |actions| actions.cancel_return(&return_id))
    }

    pub fn render(&self, ctx: &TimelineContext) -> Markup {
        let canceled = self.event.status == ReturnStatus::Canceled;

        html! {
            div class="timeline-entry return-entry" {
                div class="entry-header" {
                    span class="entry-title" { "Return " (self.event.status) }
                    @if canceled {
                        button
                            class="entry-toggle"
                            data-action="toggle"
                            data-event-id=(self.event.id)
                        {
                            @if self.expanded { "Hide" } @else { "Show" }
                        }
                    }
                }
                @if self.expanded {
                    p class="entry-time" { (format_event_time(&self.event.time)) }
                    @if self.event.no_notification != ctx.order.no_notification {
                        p class="entry-note" {
                            "Notifications related to this return are "
                            @if self.event.no_notification { "disabled" } @else { "enabled" }
                            "."
                        }
                    }
                    div class="entry-status-row" {
                        span class="entry-status" {
                            @if canceled {
                                "Return " (canceled_summary(&self.event.items))
                            } @else {
                                "Return " (self.event.status)
                            }
                        }
                        @if self.can_receive() || self.can_cancel() {
                            div class="entry-actions" {
                                @if self.can_receive() {
                                    button
                                        class="entry-action primary"
                                        data-action="receive-return"
                                        data-event-id=(self.event.id)
                                    {
                                        "Receive return"
                                    }
                                }
                                @if self.can_cancel() {
                                    (dropdown("…", html! {
                                        button
                                            class="entry-action danger"
                                            data-action="cancel-return"
                                            data-event-id=(self.event.id)
                                        {
                                            "Cancel return"
                                        }
                                    }))
                                }
                            }
                        }
                    }
                    div class="entry-items" {
                        @for item in &self.event.items {
                            (line_item_summary(item, &ctx.order))
                        }
                    }
                }
            }
        }
    }
}

/// "'Shirt' canceled." / "'Shirt', 'Cap' canceled."
fn canceled_summary(items: &[LineItemRef]) -> String {
    if items.is_empty() {
        return "canceled.".to_string();
    }
    let titles: Vec<String> = items.iter().map(|i| format!("'{}'", i.title)).collect();
    format!("{} canceled.", titles.join(", "))
}

/// Id of the raw API object, falling back to the event id when the data
/// layer did not attach the raw record.
pub(crate) fn raw_id(raw: &Value, fallback: &str) -> String {
    raw.get("id")
        .and_then(Value::as_str)
        .unwrap_or(fallback)
        .to_string()
}
