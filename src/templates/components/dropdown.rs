use maud::{html, Markup};

/// Disclosure menu built on a native `details` element, so opening and
/// closing needs no script. Entries are whatever the caller puts in.
pub fn dropdown(toggle_text: &str, entries: Markup) -> Markup {
    html! {
        details class="dropdown" {
            summary class="dropdown-toggle" { (toggle_text) }
            div class="dropdown-menu" {
                (entries)
            }
        }
    }
}
