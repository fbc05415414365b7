use tracing::debug;

use crate::{Activity, EventEmitter, EventListener};

#[derive(Clone, Debug, PartialEq)]
pub enum StoreEvent {
    Appended(Activity),
}

/// Activities recorded during this session, in insertion order.
///
/// Nothing is persisted: the store starts empty and is dropped with the
/// process. Activities can only be appended.
#[derive(Default)]
pub struct ActivityStore {
    activities: Vec<Activity>,
    emitter: EventEmitter<StoreEvent>,
}

impl ActivityStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `activity` at the end of the list and notifies subscribers.
    pub fn append(&mut self, activity: Activity) {
        debug!(
            id = activity.id(),
            hobby_name = activity.hobby_name(),
            "appending activity"
        );
        self.activities.push(activity.clone());
        self.emitter.notify(&StoreEvent::Appended(activity));
    }

    pub fn list(&self) -> &[Activity] {
        &self.activities
    }

    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }

    pub fn subscribe(&self) -> EventListener<StoreEvent> {
        self.emitter.subscribe()
    }

    pub fn unsubscribe(&self, listener_id: u64) {
        self.emitter.unsubscribe(listener_id);
    }
}
