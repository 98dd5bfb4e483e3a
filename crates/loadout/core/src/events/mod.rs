//! Observer notifications.
//!
//! Outbound [`LoadoutEvent`]s go through a topic-based [`EventBus`]; inbound
//! host changes arrive through a [`ChangeFeed`] the controller subscribes to
//! while initialized.
mod bus;
mod types;

pub use bus::{ChangeFeed, EventBus, Topic};
pub use types::{ExternalChange, LoadoutEvent};
