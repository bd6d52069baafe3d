//! The currently selected item and its observers.
//!
//! # Design
//! Observers are plain callbacks registered in order. Each `set` delivers
//! exactly one notification carrying the new value (including `None`) to
//! every observer registered at that moment, in registration order. Setting
//! the same value again still notifies.

use std::fmt;

use crate::types::Item;

type Observer = Box<dyn FnMut(Option<&Item>)>;

/// Handle returned by `subscribe`, used to remove an observer again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

#[derive(Default)]
pub struct SelectionState {
    current: Option<Item>,
    observers: Vec<(SubscriptionId, Observer)>,
    next_id: u64,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<&Item> {
        self.current.as_ref()
    }

    pub fn set(&mut self, item: Option<Item>) {
        self.current = item;
        let current = self.current.as_ref();
        for (_, observer) in self.observers.iter_mut() {
            observer(current);
        }
    }

    pub fn subscribe(&mut self, observer: impl FnMut(Option<&Item>) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Returns `false` if the subscription was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(sid, _)| *sid != id);
        self.observers.len() != before
    }
}

impl fmt::Debug for SelectionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectionState")
            .field("current", &self.current)
            .field("observers", &self.observers.len())
            .finish()
    }
}
