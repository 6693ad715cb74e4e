//! Ordered, observable entry collection.
//!
//! DESIGN
//! ======
//! The store is the single owner of entry identity. Ids come from a
//! monotonically increasing counter, so an id is never handed out twice even
//! after the entry holding it is removed. Mutations notify registered
//! observers synchronously, after the collection has been updated.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::fmt;

use serde::{Deserialize, Serialize};

/// Store-assigned entry identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(pub u64);

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One stored record together with its id.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry<T> {
    pub id: EntryId,
    #[serde(flatten)]
    pub data: T,
}

/// Mutation reported to observers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StoreEvent {
    Added(EntryId),
    Removed(EntryId),
}

/// Handle returned by [`EntryStore::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Observer<T> = Box<dyn Fn(&StoreEvent, &[Entry<T>]) + Send + Sync>;

/// Authoritative in-memory collection; insertion order is display order.
pub struct EntryStore<T> {
    entries: Vec<Entry<T>>,
    next_id: u64,
    observers: Vec<(SubscriptionId, Observer<T>)>,
    next_subscription: u64,
}

impl<T> EntryStore<T> {
    #[must_use]
    pub fn new() -> Self {
        Self { entries: Vec::new(), next_id: 1, observers: Vec::new(), next_subscription: 1 }
    }

    /// Append `data` under a fresh id. The caller is trusted to have validated it.
    pub fn add(&mut self, data: T) -> EntryId {
        let id = EntryId(self.next_id);
        self.next_id += 1;
        self.entries.push(Entry { id, data });
        self.notify(&StoreEvent::Added(id));
        id
    }

    /// Remove the entry with `id`. Returns `false` (and notifies nobody) when absent.
    pub fn remove(&mut self, id: EntryId) -> bool {
        let Some(index) = self.entries.iter().position(|e| e.id == id) else {
            return false;
        };
        self.entries.remove(index);
        self.notify(&StoreEvent::Removed(id));
        true
    }

    #[must_use]
    pub fn entries(&self) -> &[Entry<T>] {
        &self.entries
    }

    #[must_use]
    pub fn get(&self, id: EntryId) -> Option<&Entry<T>> {
        self.entries.iter().find(|e| e.id == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Register an observer called after every effective mutation.
    pub fn subscribe<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: Fn(&StoreEvent, &[Entry<T>]) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(sub, _)| *sub != id);
        self.observers.len() != before
    }

    fn notify(&self, event: &StoreEvent) {
        for (_, observer) in &self.observers {
            observer(event, &self.entries);
        }
    }
}

impl<T> Default for EntryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for EntryStore<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EntryStore")
            .field("entries", &self.entries)
            .field("next_id", &self.next_id)
            .field("observers", &self.observers.len())
            .finish()
    }
}
