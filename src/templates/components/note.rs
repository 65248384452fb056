use maud::{html, Markup};

use crate::actions::{PendingAction, TimelineContext};
use crate::domain::event::NoteEvent;
use crate::domain::logic::format_event_time;

/// Timeline entry for a free-text note left on the order.
pub struct NoteItem {
    event: NoteEvent,
}

impl NoteItem {
    pub fn new(event: NoteEvent) -> Self {
        Self { event }
    }

    pub fn event(&self) -> &NoteEvent {
        &self.event
    }

    /// Save an edited note body.
    pub fn update(&self, ctx: &TimelineContext, body: String) -> PendingAction {
        let raw = self.event.raw.clone();
        PendingAction::spawn(ctx, move |actions| actions.update_notes(&raw, &body))
    }

    pub fn render(&self) -> Markup {
        html! {
            div class="timeline-entry note-entry" {
                div class="entry-header" {
                    span class="entry-title" {
                        "Note"
                        @if let Some(author) = &self.event.author {
                            " from " (author)
                        }
                    }
                }
                p class="entry-time" { (format_event_time(&self.event.time)) }
                p class="entry-body" { (self.event.value) }
            }
        }
    }
}
