use maud::{html, Markup};

use crate::actions::{PendingAction, TimelineContext};
use crate::domain::event::NotificationEvent;
use crate::domain::logic::format_event_time;

/// Timeline entry for a notification that went out for this order.
pub struct NotificationItem {
    event: NotificationEvent,
}

impl NotificationItem {
    pub fn new(event: NotificationEvent) -> Self {
        Self { event }
    }

    pub fn event(&self) -> &NotificationEvent {
        &self.event
    }

    /// Resend the notification through the shell's API client. The raw
    /// API object goes back verbatim.
    pub fn resend(&self, ctx: &TimelineContext) -> PendingAction {
        let raw = self.event.raw.clone();
        PendingAction::spawn(ctx, move |actions| actions.resend_notification(&raw))
    }

    pub fn render(&self) -> Markup {
        html! {
            div class="timeline-entry notification-entry" {
                div class="entry-header" {
                    span class="entry-title" { "Notification sent" }
                    button
                        class="entry-action"
                        data-action="resend-notification"
                        data-event-id=(self.event.id)
                    {
                        "Resend"
                    }
                }
                p class="entry-time" { (format_event_time(&self.event.time)) }
                p class="entry-detail" {
                    (self.event.event_name)
                    @if let Some(to) = &self.event.to {
                        " to " (to)
                    }
                }
            }
        }
    }
}
