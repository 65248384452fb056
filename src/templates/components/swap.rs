use maud::{html, Markup};

use crate::actions::{PendingAction, TimelineContext};
use crate::domain::event::{FulfillmentStatus, PaymentStatus, SwapEvent};
use crate::domain::logic::{format_event_time, initial_expanded};
use crate::templates::components::dropdown::dropdown;
use crate::templates::components::line_item::line_item_summary;
use crate::templates::components::returns::raw_id;

/// Timeline entry for a swap event. Collapses like returns and claims;
/// actions are process-payment, fulfill and cancel.
pub struct SwapTimelineItem {
    event: SwapEvent,
    expanded: bool,
}

impl SwapTimelineItem {
    pub fn new(event: SwapEvent) -> Self {
        let expanded = initial_expanded(event.canceled());
        Self { event, expanded }
    }

    /// Rebind to a new event; the toggle is re-derived, not carried over.
    pub fn set_event(&mut self, event: SwapEvent) {
        self.expanded = initial_expanded(event.canceled());
        self.event = event;
    }

    pub fn event(&self) -> &SwapEvent {
        &self.event
    }

    pub fn expanded(&self) -> bool {
        self.expanded
    }

    pub fn toggle(&mut self) {
        self.expanded = !self.expanded;
    }

    /// Payment can be processed while the swap is unpaid and not canceled.
    pub fn can_process_payment(&self) -> bool {
        !self.event.canceled()
            && matches!(
                self.event.payment_status,
                PaymentStatus::NotPaid | PaymentStatus::Awaiting
            )
    }

    pub fn can_fulfill(&self) -> bool {
        !self.event.canceled()
            && self.event.fulfillment_status == FulfillmentStatus::NotFulfilled
    }

    pub fn can_cancel(&self) -> bool {
        !self.event.canceled()
    }

    pub fn process_payment(&self, ctx: &TimelineContext) -> PendingAction {
        let raw = self.event.raw.clone();
        PendingAction::spawn(ctx, move |actions| actions.process_swap_payment(&raw))
    }

    pub fn fulfill(&self, ctx: &TimelineContext) -> PendingAction {
        let raw = self.event.raw.clone();
        PendingAction::spawn(ctx, move |actions| actions.fulfill_swap(&raw))
    }

    pub fn cancel(&self, ctx: &TimelineContext) -> PendingAction {
        let swap_id = raw_id(&self.event.raw, &self.event.id);
        PendingAction::spawn(ctx, move |actions| actions.cancel_swap(&swap_id))
    }

    pub fn render(&self, ctx: &TimelineContext) -> Markup {
        let canceled = self.event.canceled();

        html! {
            div class="timeline-entry swap-entry" {
                div class="entry-header" {
                    span class="entry-title" {
                        @if canceled {
                            "Swap canceled"
                        } @else {
                            "Swap " (self.event.fulfillment_status)
                        }
                    }
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
                    p class="entry-detail" { "Payment " (self.event.payment_status) }
                    div class="entry-status-row" {
                        span class="entry-status" {
                            @if canceled {
                                "Swap canceled"
                            } @else {
                                "Swap " (self.event.fulfillment_status)
                            }
                        }
                        @if self.can_process_payment() || self.can_fulfill() || self.can_cancel() {
                            div class="entry-actions" {
                                @if self.can_process_payment() {
                                    button
                                        class="entry-action primary"
                                        data-action="process-swap-payment"
                                        data-event-id=(self.event.id)
                                    {
                                        "Process payment"
                                    }
                                }
                                @if self.can_fulfill() {
                                    button
                                        class="entry-action"
                                        data-action="fulfill-swap"
                                        data-event-id=(self.event.id)
                                    {
                                        "Fulfill swap"
                                    }
                                }
                                @if self.can_cancel() {
                                    (dropdown("…", html! {
                                        button
                                            class="entry-action danger"
                                            data-action="cancel-swap"
                                            data-event-id=(self.event.id)
                                        {
                                            "Cancel swap"
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
