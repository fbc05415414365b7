//! Change notifications for single-threaded subscribers.
//!
//! The emitter only keeps the sending half of each subscription. Dropping an
//! [`EventListener`] disconnects its channel and the emitter forgets it on the
//! next [`EventEmitter::notify`].

use crossbeam_channel::{Receiver, Sender, TryRecvError};
use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};

pub struct EventEmitter<T: Clone> {
    next_listener_id: AtomicU64,
    senders: DashMap<u64, Sender<T>>,
}

impl<T: Clone> EventEmitter<T> {
    pub fn new() -> Self {
        Self {
            next_listener_id: AtomicU64::new(0),
            senders: DashMap::new(),
        }
    }

    /// Sends `data` to every live listener, dropped listeners are removed.
    pub fn notify(&self, data: &T) {
        let disconnected: Vec<u64> = self
            .senders
            .iter()
            .filter(|sender| sender.send(data.clone()).is_err())
            .map(|sender| *sender.key())
            .collect();

        for listener_id in disconnected {
            tracing::debug!("listener {listener_id} was dropped, unsubscribing it");
            self.senders.remove(&listener_id);
        }
    }

    pub fn subscribe(&self) -> EventListener<T> {
        let id = self.next_listener_id.fetch_add(1, Ordering::Relaxed);
        let (sender, receiver) = crossbeam_channel::unbounded();
        self.senders.insert(id, sender);
        EventListener { id, receiver }
    }

    pub fn unsubscribe(&self, listener_id: u64) {
        self.senders.remove(&listener_id);
    }

    pub fn listener_count(&self) -> usize {
        self.senders.len()
    }
}

impl<T: Clone> Default for EventEmitter<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Receiving end of a subscription, polled by its owner.
pub struct EventListener<T> {
    pub id: u64,
    receiver: Receiver<T>,
}

impl<T> EventListener<T> {
    /// Next pending notification, if any. Never blocks.
    pub fn try_recv(&self) -> Option<T> {
        match self.receiver.try_recv() {
            Ok(data) => Some(data),
            Err(TryRecvError::Empty | TryRecvError::Disconnected) => None,
        }
    }

    /// Every pending notification, oldest first.
    pub fn drain(&self) -> Vec<T> {
        self.receiver.try_iter().collect()
    }
}
