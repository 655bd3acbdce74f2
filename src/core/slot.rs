//! Views that let the user switch category (playbook, library) can have several
//! fetches in flight. A response is only applied if it belongs to the most recent
//! request, so a slow answer for an abandoned category can never overwrite the
//! current one.

use std::fmt::Debug;

use crate::core::Content;

/// Receipt for one issued request. Hand it back with the result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket<K> {
    generation: u64,
    key: K,
}

impl<K> Ticket<K> {
    /// The key (usually a category) the request was issued for.
    pub fn key(&self) -> &K {
        &self.key
    }
}

/// A result slot that accepts only the latest request's completion.
#[derive(Debug, Clone)]
pub struct LatestSlot<K, V> {
    generation: u64,
    key: Option<K>,
    value: Option<V>,
}

impl<K, V> Default for LatestSlot<K, V> {
    fn default() -> Self {
        Self {
            generation: 0,
            key: None,
            value: None,
        }
    }
}

impl<K: Clone + PartialEq + Debug, V> LatestSlot<K, V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new request for `key`, invalidating all earlier tickets and
    /// clearing the displayed value.
    pub fn begin(&mut self, key: K) -> Ticket<K> {
        self.generation += 1;
        self.key = Some(key.clone());
        self.value = None;
        Ticket {
            generation: self.generation,
            key,
        }
    }

    /// Stores `value` if `ticket` is still current. Returns whether it was applied.
    pub fn complete(&mut self, ticket: Ticket<K>, value: V) -> bool {
        let current =
            ticket.generation == self.generation && self.key.as_ref() == Some(&ticket.key);
        if !current {
            tracing::debug!(
                key = ?ticket.key,
                issued = ticket.generation,
                latest = self.generation,
                "discarding stale response"
            );
            return false;
        }
        self.value = Some(value);
        true
    }

    /// True between `begin` and the matching `complete`.
    pub fn is_loading(&self) -> bool {
        self.key.is_some() && self.value.is_none()
    }

    pub fn current_key(&self) -> Option<&K> {
        self.key.as_ref()
    }

    pub fn value(&self) -> Option<&V> {
        self.value.as_ref()
    }
}

/// Category-switching view state: the selected category plus a [`LatestSlot`]
/// holding the content fetched for it.
#[derive(Debug, Clone)]
pub struct CategoryView<K, T> {
    active: K,
    slot: LatestSlot<K, Content<Vec<T>>>,
}

impl<K: Clone + PartialEq + Debug, T> CategoryView<K, T> {
    pub fn new(initial: K) -> Self {
        Self {
            active: initial,
            slot: LatestSlot::new(),
        }
    }

    pub fn active(&self) -> &K {
        &self.active
    }

    /// Switches to `category` and returns the ticket for its fetch. Any earlier
    /// in-flight fetch is now stale.
    pub fn select(&mut self, category: K) -> Ticket<K> {
        self.active = category.clone();
        self.slot.begin(category)
    }

    /// Applies a finished fetch; stale results are dropped and `false` is returned.
    pub fn apply(&mut self, ticket: Ticket<K>, content: Content<Vec<T>>) -> bool {
        self.slot.complete(ticket, content)
    }

    pub fn content(&self) -> Option<&Content<Vec<T>>> {
        self.slot.value()
    }

    pub fn is_loading(&self) -> bool {
        self.slot.is_loading()
    }
}
