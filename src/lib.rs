//! Server-rendered UI components for an e-commerce order admin console.
//!
//! This crate is presentation only. It takes already-fetched domain
//! objects (an order and the sequence of events that happened to it)
//! and renders them to markup, delegating every mutation (cancel a
//! return, resend a notification, ...) to callbacks supplied by the
//! application shell. There is no router, database or HTTP client here;
//! the shell owns all of that and plugs in through
//! [`actions::OrderActions`] and [`actions::ToastSink`].
//!
//! Entry point for the order view: [`templates::Timeline`].

pub mod actions;
pub mod domain;
pub mod errors;
pub mod templates;

#[cfg(test)]
mod tests;
