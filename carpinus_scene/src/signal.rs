// Copyright 2025 the Carpinus Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Typed observer lists.
//!
//! A [`Signal`] holds listeners for one event type and calls them in subscription
//! order. Listeners receive a shared reference to the event and cannot reach back
//! into whatever emitted it; a listener that needs to trigger follow-up work records
//! it (for example in an `Rc<Cell<bool>>`) and the owner acts on it once emission
//! has returned.
//!
//! ```
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! use carpinus_scene::Signal;
//!
//! let mut signal: Signal<u32> = Signal::new();
//! let total = Rc::new(Cell::new(0));
//! let sink = Rc::clone(&total);
//! let id = signal.subscribe(move |n| sink.set(sink.get() + n));
//!
//! signal.emit(&3);
//! signal.emit(&4);
//! assert_eq!(total.get(), 7);
//!
//! assert!(signal.unsubscribe(id));
//! signal.emit(&100);
//! assert_eq!(total.get(), 7);
//! ```

use core::fmt;

/// Handle returned by [`Signal::subscribe`], used to unsubscribe.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

type Listener<T> = Box<dyn FnMut(&T)>;

/// An ordered list of listeners for events of type `T`.
pub struct Signal<T> {
    next_id: u64,
    listeners: Vec<(SubscriptionId, Listener<T>)>,
}

impl<T> Default for Signal<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Signal<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signal")
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}

impl<T> Signal<T> {
    /// Create a signal with no listeners.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            next_id: 0,
            listeners: Vec::new(),
        }
    }

    /// Add a listener. It is called after every listener added before it.
    pub fn subscribe(&mut self, listener: impl FnMut(&T) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns `false` if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(other, _)| *other != id);
        self.listeners.len() != before
    }

    /// Call every listener with `event`.
    pub fn emit(&mut self, event: &T) {
        for (_, listener) in &mut self.listeners {
            listener(event);
        }
    }

    /// Remove every listener.
    pub fn clear(&mut self) {
        self.listeners.clear();
    }

    /// Number of listeners.
    #[must_use]
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    /// Whether there are no listeners.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}
