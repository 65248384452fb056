// src/templates/components/timeline.rs

use maud::{html, Markup};
use serde_json::Value;
use tracing::debug;

use crate::actions::TimelineContext;
use crate::domain::event::{TimelineEvent, UnknownEvent};
use crate::errors::UiError;
use crate::templates::components::claim::ClaimTimelineItem;
use crate::templates::components::note::NoteItem;
use crate::templates::components::notification::NotificationItem;
use crate::templates::components::returns::ReturnTimelineItem;
use crate::templates::components::simple_event::SimpleEventItem;
use crate::templates::components::swap::SwapTimelineItem;

/// One rendered timeline entry.
///
/// Construction is an exhaustive match over [`TimelineEvent`], so adding
/// an event kind without deciding how it renders is a compile error
/// rather than a silently blank row. The one deliberate blank is
/// [`TimelineItem::Unknown`]: kinds this build has no renderer for take
/// up an item slot, render nothing, and leave a debug log behind.
pub enum TimelineItem {
    Notification(NotificationItem),
    Note(NoteItem),
    Return(ReturnTimelineItem),
    Claim(ClaimTimelineItem),
    Swap(SwapTimelineItem),
    Simple(SimpleEventItem),
    Unknown(UnknownEvent),
}

impl TimelineItem {
    pub fn from_event(event: TimelineEvent) -> Self {
        match event {
            TimelineEvent::Notification(e) => TimelineItem::Notification(NotificationItem::new(e)),
            TimelineEvent::Note(e) => TimelineItem::Note(NoteItem::new(e)),
            TimelineEvent::Return(e) => TimelineItem::Return(ReturnTimelineItem::new(e)),
            TimelineEvent::Claim(e) => TimelineItem::Claim(ClaimTimelineItem::new(e)),
            TimelineEvent::Swap(e) => TimelineItem::Swap(SwapTimelineItem::new(e)),
            TimelineEvent::Simple(e) => TimelineItem::Simple(SimpleEventItem::new(e)),
            TimelineEvent::Unknown(e) => {
                debug!(kind = %e.kind, id = %e.id, "no renderer for event kind");
                TimelineItem::Unknown(e)
            }
        }
    }

    pub fn event_id(&self) -> &str {
        match self {
            TimelineItem::Notification(item) => &item.event().id,
            TimelineItem::Note(item) => &item.event().id,
            TimelineItem::Return(item) => &item.event().id,
            TimelineItem::Claim(item) => &item.event().id,
            TimelineItem::Swap(item) => &item.event().id,
            TimelineItem::Simple(item) => &item.event().id,
            TimelineItem::Unknown(event) => &event.id,
        }
    }

    pub fn render(&self, ctx: &TimelineContext) -> Markup {
        match self {
            TimelineItem::Notification(item) => item.render(),
            TimelineItem::Note(item) => item.render(),
            TimelineItem::Return(item) => item.render(ctx),
            TimelineItem::Claim(item) => item.render(ctx),
            TimelineItem::Swap(item) => item.render(ctx),
            TimelineItem::Simple(item) => item.render(),
            TimelineItem::Unknown(_) => html! {},
        }
    }

    /// Flip the expand/collapse state. No-op for kinds that do not
    /// collapse.
    fn toggle(&mut self) {
        match self {
            TimelineItem::Return(item) => item.toggle(),
            TimelineItem::Claim(item) => item.toggle(),
            TimelineItem::Swap(item) => item.toggle(),
            TimelineItem::Notification(_)
            | TimelineItem::Note(_)
            | TimelineItem::Simple(_)
            | TimelineItem::Unknown(_) => {}
        }
    }
}

/// The order's event timeline.
///
/// Owns one item per event, in the order the caller supplied them. The
/// timeline does not sort; chronology is the data layer's contract. The
/// only state kept here is each item's ephemeral expand/collapse toggle,
/// and none of it survives [`Timeline::set_events`].
pub struct Timeline {
    items: Vec<TimelineItem>,
}

impl Timeline {
    pub fn new(events: Vec<TimelineEvent>) -> Self {
        Self {
            items: events.into_iter().map(TimelineItem::from_event).collect(),
        }
    }

    /// Normalize raw API records and build the timeline in one go.
    ///
    /// Fails on the first structurally invalid record (see
    /// [`TimelineEvent::from_value`]); unknown kinds are not errors.
    pub fn from_values(values: &[Value]) -> Result<Self, UiError> {
        let events = values
            .iter()
            .map(TimelineEvent::from_value)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(events))
    }

    /// Replace the event list wholesale.
    ///
    /// Expand/collapse state is re-derived from the incoming events, not
    /// merged with the old items: reset, not merge.
    pub fn set_events(&mut self, events: Vec<TimelineEvent>) {
        self.items = events.into_iter().map(TimelineItem::from_event).collect();
    }

    /// Flip the toggle of the entry with the given event id. Ids that are
    /// not on the timeline, or belong to entries that do not collapse,
    /// are ignored.
    pub fn toggle(&mut self, event_id: &str) {
        for item in &mut self.items {
            if item.event_id() == event_id {
                item.toggle();
            }
        }
    }

    pub fn items(&self) -> &[TimelineItem] {
        &self.items
    }

    /// Render every entry in input order. The final entry gets a `last`
    /// class so the stylesheet can drop its trailing connector line.
    pub fn render(&self, ctx: &TimelineContext) -> Markup {
        let last = self.items.len().saturating_sub(1);

        html! {
            div class="timeline" {
                @for (idx, item) in self.items.iter().enumerate() {
                    div class=(if idx == last { "timeline-item last" } else { "timeline-item" }) {
                        (item.render(ctx))
                    }
                }
            }
        }
    }
}
