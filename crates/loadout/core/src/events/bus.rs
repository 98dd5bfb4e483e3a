//! Topic-based event bus and the inbound change feed.

use std::collections::HashMap;
use std::sync::Arc;

use strum::IntoEnumIterator;
use tokio::sync::broadcast;

use super::types::{ExternalChange, LoadoutEvent};

/// Topics for event routing
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, strum::Display, strum::EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Topic {
    /// Stat and CP refreshes
    Stats,
    /// Notification badge
    Badge,
    /// Rune slot pick flow
    RuneSlot,
}

impl LoadoutEvent {
    pub fn topic(&self) -> Topic {
        match self {
            LoadoutEvent::StatsRecalculated { .. } => Topic::Stats,
            LoadoutEvent::BadgeChanged(_) => Topic::Badge,
            LoadoutEvent::RuneSlotPickRequested { .. } | LoadoutEvent::RuneSlotPickResolved { .. } => {
                Topic::RuneSlot
            }
        }
    }
}

/// Topic-based event bus
///
/// Allows observers to subscribe to specific topics and only receive
/// events they care about. Publishing never blocks; events without
/// subscribers are dropped.
pub struct EventBus {
    channels: Arc<HashMap<Topic, broadcast::Sender<LoadoutEvent>>>,
}

impl EventBus {
    /// Creates a new event bus with default capacity for each topic
    pub fn new() -> Self {
        Self::with_capacity(64)
    }

    /// Creates a new event bus with specified capacity per topic
    pub fn with_capacity(capacity: usize) -> Self {
        let channels = Topic::iter()
            .map(|topic| (topic, broadcast::channel(capacity).0))
            .collect();

        Self {
            channels: Arc::new(channels),
        }
    }

    /// Publish an event to its corresponding topic
    pub fn publish(&self, event: LoadoutEvent) {
        let topic = event.topic();
        if let Some(tx) = self.channels.get(&topic)
            && tx.send(event).is_err()
        {
            // No subscribers for this topic - this is normal, not an error
            tracing::trace!("No subscribers for topic {}", topic);
        }
    }

    /// Subscribe to a specific topic
    ///
    /// Returns a receiver that will only receive events for that topic.
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<LoadoutEvent> {
        match self.channels.get(&topic) {
            Some(tx) => tx.subscribe(),
            // Every topic is created up front; this arm is unreachable in practice.
            None => broadcast::channel(1).1,
        }
    }
}

impl Clone for EventBus {
    fn clone(&self) -> Self {
        Self {
            channels: Arc::clone(&self.channels),
        }
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

/// Host-side sender of [`ExternalChange`] notifications.
///
/// The controller subscribes while it is initialized and drops its receiver on
/// teardown, so `receiver_count` tells the host whether anyone is listening.
#[derive(Clone, Debug)]
pub struct ChangeFeed {
    tx: broadcast::Sender<ExternalChange>,
}

impl ChangeFeed {
    pub fn new() -> Self {
        Self::with_capacity(16)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            tx: broadcast::channel(capacity).0,
        }
    }

    /// Sends `change` to every live subscription. Returns the number reached.
    pub fn notify(&self, change: ExternalChange) -> usize {
        self.tx.send(change).unwrap_or(0)
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ExternalChange> {
        self.tx.subscribe()
    }

    pub fn receiver_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for ChangeFeed {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_are_routed_by_topic() {
        let bus = EventBus::new();
        let mut badge = bus.subscribe(Topic::Badge);
        let mut stats = bus.subscribe(Topic::Stats);

        bus.publish(LoadoutEvent::BadgeChanged(true));

        assert_eq!(badge.try_recv().ok(), Some(LoadoutEvent::BadgeChanged(true)));
        assert!(stats.try_recv().is_err());
    }

    #[test]
    fn publishing_without_subscribers_is_silent() {
        let bus = EventBus::with_capacity(1);
        bus.publish(LoadoutEvent::BadgeChanged(false));
    }

    #[test]
    fn change_feed_counts_receivers() {
        let feed = ChangeFeed::new();
        assert_eq!(feed.notify(ExternalChange::RuneStateChanged), 0);

        let mut rx = feed.subscribe();
        assert_eq!(feed.notify(ExternalChange::RuneSlotUnlockCountChanged(3)), 1);
        assert_eq!(rx.try_recv().ok(), Some(ExternalChange::RuneSlotUnlockCountChanged(3)));

        drop(rx);
        assert_eq!(feed.receiver_count(), 0);
    }
}
