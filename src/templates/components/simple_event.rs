use maud::{html, Markup};

use crate::domain::event::SimpleEvent;
use crate::domain::logic::format_event_time;

/// Actionless one-line milestone: "Order placed", "Items shipped", etc.
pub struct SimpleEventItem {
    event: SimpleEvent,
}

impl SimpleEventItem {
    pub fn new(event: SimpleEvent) -> Self {
        Self { event }
    }

    pub fn event(&self) -> &SimpleEvent {
        &self.event
    }

    pub fn render(&self) -> Markup {
        html! {
            div class="timeline-entry simple-entry" {
                span class="entry-title" { (self.event.kind.label()) }
                p class="entry-time" { (format_event_time(&self.event.time)) }
            }
        }
    }
}
