pub mod components;

// Re-exports for convenience
pub use components::timeline::{Timeline, TimelineItem};
pub use components::toast::toast;
