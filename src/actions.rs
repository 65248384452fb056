// src/actions.rs
//
// The in-process contract between the timeline components and the
// application shell: the action callbacks, the toast sink, and the
// worker-thread handle that keeps blocking API calls off the render path.

use std::sync::Arc;
use std::thread::{self, JoinHandle};

use serde_json::Value;
use tracing::warn;

use crate::domain::order::OrderContext;
use crate::errors::ActionError;

/// Result of one order action callback.
pub type ActionOutcome = Result<(), ActionError>;

/// Severity of a toast notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
}

/// Fire-and-forget notification sink owned by the application shell.
pub trait ToastSink: Send + Sync {
    fn toast(&self, message: &str, level: ToastLevel);
}

/// The mutating order operations, implemented by the shell's API client.
///
/// Methods block until the API answers. Timeline components never call
/// them on the render path; they go through [`PendingAction::spawn`].
/// The `Value` parameters are the raw API objects carried on the event,
/// passed back verbatim.
pub trait OrderActions: Send + Sync {
    fn resend_notification(&self, notification: &Value) -> ActionOutcome;
    fn update_notes(&self, note: &Value, body: &str) -> ActionOutcome;
    fn receive_return(&self, ret: &Value) -> ActionOutcome;
    fn cancel_return(&self, return_id: &str) -> ActionOutcome;
    fn save_claim(&self, claim: &Value) -> ActionOutcome;
    fn fulfill_claim(&self, claim: &Value) -> ActionOutcome;
    fn cancel_claim(&self, claim_id: &str) -> ActionOutcome;
    fn fulfill_swap(&self, swap: &Value) -> ActionOutcome;
    fn process_swap_payment(&self, swap: &Value) -> ActionOutcome;
    fn cancel_swap(&self, swap_id: &str) -> ActionOutcome;
}

/// Everything a timeline renderer needs besides the event itself: the
/// order on display, the action callbacks, and the toast sink.
#[derive(Clone)]
pub struct TimelineContext {
    pub order: OrderContext,
    pub actions: Arc<dyn OrderActions>,
    pub toaster: Arc<dyn ToastSink>,
}

/// Handle to one action running on a worker thread.
///
/// Dropping the handle detaches the work instead of cancelling it: the
/// action still runs to completion and a failure still reports through
/// the toast sink. That is the teardown policy for a timeline item that
/// disappears mid-request. Tests and shells that want ordering call
/// [`PendingAction::wait`].
pub struct PendingAction {
    handle: Option<JoinHandle<ActionOutcome>>,
}

impl PendingAction {
    /// Run `action` off the render thread.
    ///
    /// A failure becomes exactly one error toast, worded by
    /// [`ActionError::user_message`]. Success stays quiet on purpose: the
    /// shell refreshes the event list from upstream rather than patching
    /// local state.
    pub fn spawn<F>(ctx: &TimelineContext, action: F) -> Self
    where
        F: FnOnce(&dyn OrderActions) -> ActionOutcome + Send + 'static,
    {
        let actions = Arc::clone(&ctx.actions);
        let toaster = Arc::clone(&ctx.toaster);

        let handle = thread::spawn(move || {
            let outcome = action(actions.as_ref());
            if let Err(err) = &outcome {
                warn!(error = %err, "order action failed");
                toaster.toast(&err.user_message(), ToastLevel::Error);
            }
            outcome
        });

        Self {
            handle: Some(handle),
        }
    }

    /// Block until the action finishes and return its outcome. The toast
    /// for a failed action has already been delivered when this returns.
    pub fn wait(mut self) -> ActionOutcome {
        match self.handle.take() {
            Some(handle) => handle
                .join()
                .unwrap_or_else(|_| Err(ActionError::Transport("action thread panicked".into()))),
            None => Ok(()),
        }
    }

    /// Detach explicitly. Equivalent to dropping the handle; spelled out
    /// so call sites can state the policy.
    pub fn detach(mut self) {
        self.handle.take();
    }
}
