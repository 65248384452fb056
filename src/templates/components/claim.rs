use maud::{html, Markup};

use crate::actions::{PendingAction, TimelineContext};
use crate::domain::event::{ClaimEvent, FulfillmentStatus};
use crate::domain::logic::{format_event_time, initial_expanded};
use crate::templates::components::dropdown::dropdown;
use crate::templates::components::line_item::line_item_summary;
use crate::templates::components::returns::raw_id;

/// Timeline entry for a claim event. Same collapse behavior as returns;
/// the actions are fulfill and cancel.
pub struct ClaimTimelineItem {
    event: ClaimEvent,
    expanded: bool,
}

impl ClaimTimelineItem {
    pub fn new(event: ClaimEvent) -> Self {
        let expanded = initial_expanded(event.fulfillment_status == FulfillmentStatus::Canceled);
        Self { event, expanded }
    }

    /// Rebind to a new event; the toggle is re-derived, not carried over.
    pub fn set_event(&mut self, event: ClaimEvent) {
        self.expanded = initial_expanded(event.fulfillment_status == FulfillmentStatus::Canceled);
        self.event = event;
    }

    pub fn event(&self) -> &ClaimEvent {
        &self.event
    }

    pub fn expanded(&self) -> bool {
        self.expanded
    }

    pub fn toggle(&mut self) {
        self.expanded = !self.expanded;
    }

    /// Fulfill is available while nothing has shipped and the claim is
    /// not canceled.
    pub fn can_fulfill(&self) -> bool {
        self.event.fulfillment_status == FulfillmentStatus::NotFulfilled
    }

    pub fn can_cancel(&self) -> bool {
        self.event.fulfillment_status != FulfillmentStatus::Canceled
    }

    pub fn fulfill(&self, ctx: &TimelineContext) -> PendingAction {
        let raw = self.event.raw.clone();
        PendingAction::spawn(ctx, move |actions| actions.fulfill_claim(&raw))
    }

    pub fn cancel(&self, ctx: &TimelineContext) -> PendingAction {
        let claim_id = raw_id(&self.event.raw, &self.event.id);
        PendingAction::spawn(ctx, move |actions| actions.cancel_claim(&claim_id))
    }

    pub fn render(&self, ctx: &TimelineContext) -> Markup {
        let canceled = self.event.fulfillment_status == FulfillmentStatus::Canceled;

        html! {
            div class="timeline-entry claim-entry" {
                div class="entry-header" {
                    span class="entry-title" { "Claim " (self.event.fulfillment_status) }
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
                    div class="entry-status-row" {
                        span class="entry-status" { "Claim " (self.event.fulfillment_status) }
                        @if self.can_fulfill() || self.can_cancel() {
                            div class="entry-actions" {
                                @if self.can_fulfill() {
                                    button
                                        class="entry-action primary"
                                        data-action="fulfill-claim"
                                        data-event-id=(self.event.id)
                                    {
                                        "Fulfill claim"
                                    }
                                }
                                @if self.can_cancel() {
                                    (dropdown("…", html! {
                                        button
                                            class="entry-action danger"
                                            data-action="cancel-claim"
                                            data-event-id=(self.event.id)
                                        {
                                            "Cancel claim"
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
