// errors.rs

use thiserror::Error;

/// The one failure the rendering path itself can raise.
///
/// A malformed event means the data layer broke the contract (a record
/// without `type` or `id`, or a known kind whose payload does not parse),
/// so it is returned to the caller instead of being swallowed. Action
/// failures never show up here; those become toast notifications.
#[derive(Debug, Error)]
pub enum UiError {
    #[error("malformed event: {0}")]
    MalformedEvent(String),
}

/// Failure reported by one of the order action callbacks.
#[derive(Debug, Clone, Error)]
pub enum ActionError {
    /// The admin API processed the request and said no.
    #[error("request rejected by the admin api")]
    Rejected {
        /// HTTP status, when the rejection came with a response.
        status: Option<u16>,
        /// Server-provided reason, when the response body carried one.
        message: Option<String>,
    },
    /// The request never completed (timeout, connection loss).
    #[error("request failed: {0}")]
    Transport(String),
}

impl ActionError {
    /// Shown when the failure carries no usable server message.
    pub const FALLBACK_MESSAGE: &'static str = "Something went wrong. Please try again.";

    /// The line shown in the error toast.
    ///
    /// One adapter for every component: a server-provided message when
    /// there is one, otherwise the generic fallback. Components must not
    /// dig into the error themselves.
    pub fn user_message(&self) -> String {
        match self {
            ActionError::Rejected {
                message: Some(message),
                ..
            } if !message.is_empty() => message.clone(),
            _ => Self::FALLBACK_MESSAGE.to_string(),
        }
    }
}
