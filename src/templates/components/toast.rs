use maud::{html, Markup};

use crate::actions::ToastLevel;

/// Markup for one transient toast. The shell owns the toast region and
/// decides placement and how long it stays on screen.
pub fn toast(message: &str, level: ToastLevel) -> Markup {
    let class = match level {
        ToastLevel::Success => "toast toast-success",
        ToastLevel::Error => "toast toast-error",
    };

    html! {
        div class=(class) role="status" {
            (message)
        }
    }
}
