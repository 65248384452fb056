use maud::{html, Markup};

/// Plain labelled text input.
///
/// `inline` lays label and control out on one row instead of stacking
/// them. Unrelated to the timeline; shells use it for order edit forms.
pub struct InputField {
    pub name: String,
    pub label: Option<String>,
    pub placeholder: Option<String>,
    /// HTML input type, `text` unless told otherwise.
    pub kind: String,
    pub inline: bool,
    pub value: Option<String>,
}

impl InputField {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: None,
            placeholder: None,
            kind: "text".to_string(),
            inline: false,
            value: None,
        }
    }

    pub fn render(&self) -> Markup {
        let wrapper = if self.inline {
            "input-field inline"
        } else {
            "input-field"
        };

        html! {
            div class=(wrapper) {
                @if let Some(label) = &self.label {
                    label class="input-label" for=(self.name) { (label) }
                }
                input
                    class="input-control"
                    type=(self.kind)
                    name=(self.name)
                    id=(self.name)
                    placeholder=(self.placeholder.as_deref().unwrap_or("Placeholder"))
                    value=[self.value.as_deref()];
            }
        }
    }
}
