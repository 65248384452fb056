// src/templates/components/tag_input.rs

use maud::{html, Markup};

use crate::templates::components::dropdown::dropdown;

/// Key presses the tag input reacts to. The shell translates real
/// keyboard events into these before calling [`TagInput::handle_key`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagKey {
    Enter,
    Tab,
    Backspace,
    ArrowLeft,
    ArrowRight,
    Char(char),
}

/// A selectable entry in the tag dropdown. Free-typed tags get their text
/// as both value and label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagOption {
    pub value: String,
    pub label: String,
}

impl TagOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }

    fn from_text(text: &str) -> Self {
        Self {
            value: text.to_string(),
            label: text.to_string(),
        }
    }
}

/// Tag picker with type-ahead entry and a dropdown of predefined options.
///
/// Keyboard behavior, in full: Enter, Tab or a trailing comma commit the
/// typed text as a tag; Backspace on an empty input first highlights the
/// last tag, then removes the highlighted one; ArrowLeft/ArrowRight walk
/// the highlight through the tags, and walking off the right end clears
/// it; any other character clears the highlight. Picking a dropdown
/// option prepends it and removes it from the available list.
///
/// "Start of the input" is modeled as an empty typed buffer; the widget
/// does not track a caret inside the buffer.
pub struct TagInput {
    name: String,
    label: Option<String>,
    inline: bool,
    toggle_text: String,
    options: Vec<TagOption>,
    values: Vec<TagOption>,
    buffer: String,
    highlighted: Option<usize>,
    focused: bool,
}

impl TagInput {
    pub fn new(name: impl Into<String>, options: Vec<TagOption>) -> Self {
        Self {
            name: name.into(),
            label: None,
            inline: false,
            toggle_text: "Add".to_string(),
            options,
            values: Vec::new(),
            buffer: String::new(),
            highlighted: None,
            focused: false,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn inline(mut self) -> Self {
        self.inline = true;
        self
    }

    pub fn with_toggle_text(mut self, text: impl Into<String>) -> Self {
        self.toggle_text = text.into();
        self
    }

    pub fn values(&self) -> &[TagOption] {
        &self.values
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn highlighted(&self) -> Option<usize> {
        self.highlighted
    }

    pub fn focused(&self) -> bool {
        self.focused
    }

    /// Options not already picked.
    pub fn available_options(&self) -> Vec<&TagOption> {
        self.options
            .iter()
            .filter(|o| !self.values.iter().any(|v| v.value == o.value))
            .collect()
    }

    pub fn focus(&mut self) {
        self.focused = true;
    }

    /// Leaving the control drops the highlight along with focus.
    pub fn blur(&mut self) {
        self.focused = false;
        self.highlighted = None;
    }

    /// Pick an option from the dropdown. Picked options go to the front
    /// of the tag list. Unknown or already-picked values are ignored.
    pub fn pick_option(&mut self, value: &str) {
        if self.values.iter().any(|v| v.value == value) {
            return;
        }
        if let Some(option) = self.options.iter().find(|o| o.value == value) {
            self.values.insert(0, option.clone());
        }
    }

    /// Remove the tag at `index`, e.g. from its × button.
    pub fn remove(&mut self, index: usize) {
        if index < self.values.len() {
            self.values.remove(index);
            self.highlighted = None;
        }
    }

    pub fn handle_key(&mut self, key: TagKey) {
        match key {
            TagKey::ArrowLeft => match self.highlighted {
                Some(i) if i > 0 => self.highlighted = Some(i - 1),
                Some(_) => {}
                None if self.buffer.is_empty() && !self.values.is_empty() => {
                    self.highlighted = Some(self.values.len() - 1);
                }
                None => {}
            },
            TagKey::ArrowRight => match self.highlighted {
                Some(i) if i + 1 < self.values.len() => self.highlighted = Some(i + 1),
                Some(_) => self.highlighted = None,
                None => {}
            },
            TagKey::Enter | TagKey::Tab => self.commit_buffer(),
            TagKey::Backspace => {
                if let Some(i) = self.highlighted {
                    self.values.remove(i);
                    self.highlighted = None;
                } else if self.buffer.is_empty() {
                    if !self.values.is_empty() {
                        self.highlighted = Some(self.values.len() - 1);
                    }
                } else {
                    self.buffer.pop();
                }
            }
            TagKey::Char(c) => {
                self.highlighted = None;
                if c == ',' {
                    // A trailing comma commits, same as Enter.
                    self.commit_buffer();
                } else {
                    self.buffer.push(c);
                }
            }
        }
    }

    fn commit_buffer(&mut self) {
        let text = self.buffer.trim();
        if !text.is_empty() {
            self.values.push(TagOption::from_text(text));
        }
        self.buffer.clear();
    }

    pub fn render(&self) -> Markup {
        let wrapper = if self.inline {
            "tag-input inline"
        } else {
            "tag-input"
        };
        let control = if self.focused {
            "tag-input-control focused"
        } else {
            "tag-input-control"
        };

        html! {
            div class=(wrapper) {
                @if let Some(label) = &self.label {
                    label class="input-label" { (label) }
                }
                div class=(control) {
                    div class="tag-list" {
                        @for (idx, tag) in self.values.iter().enumerate() {
                            span class=(if self.highlighted == Some(idx) { "tag highlighted" } else { "tag" }) {
                                span class="tag-text" { (tag.label) }
                                button
                                    class="tag-remove"
                                    data-action="remove-tag"
                                    data-index=(idx)
                                {
                                    "×"
                                }
                            }
                        }
                    }
                    input
                        class="tag-input-field"
                        type="text"
                        name=(self.name)
                        value=(self.buffer)
                        autocomplete="off";
                    (dropdown(&self.toggle_text, html! {
                        @for option in self.available_options() {
                            button
                                class="dropdown-entry"
                                data-action="pick-tag"
                                data-value=(option.value)
                            {
                                (option.label)
                            }
                        }
                    }))
                }
            }
        }
    }
}
