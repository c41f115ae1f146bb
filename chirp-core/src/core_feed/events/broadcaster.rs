//! Event bus for feed change events
//!
//! Uses tokio broadcast channels to emit events to multiple subscribers.
//! Stores receive the bus by injection, so their logic is testable without
//! a live subscriber.

use super::FeedEvent;
use tokio::sync::broadcast;

/// Clonable publish handle for feed events
///
/// Emission is fire-and-forget from the mutator's perspective: sending with
/// no active receivers is not an error, and a publish failure never rolls
/// back the state change that preceded it.
#[derive(Clone)]
pub struct EventBus {
    tx: broadcast::Sender<FeedEvent>,
}

impl EventBus {
    /// Create a new bus with the given channel capacity
    pub fn new(capacity: usize) -> Self {
        let (tx, _rx) = broadcast::channel(capacity);
        Self { tx }
    }

    /// Emit an event to all subscribers
    ///
    /// Returns the number of active subscribers that received the event.
    pub fn emit(&self, event: FeedEvent) -> usize {
        match self.tx.send(event) {
            Ok(count) => count,
            Err(_) => 0, // No active receivers
        }
    }

    /// Subscribe to feed events
    pub fn subscribe(&self) -> broadcast::Receiver<FeedEvent> {
        self.tx.subscribe()
    }

    /// Get number of active subscribers
    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(256)
    }
}
