//! Synchronous change listeners.
//!
//! State holders keep a [`Listeners`] registry and call [`Listeners::notify`]
//! after every mutation that changed state. Listeners run in subscription
//! order, on the caller's thread, before the mutating call returns.

use std::fmt;

/// Handle returned by `subscribe`, used to unsubscribe later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener<E, S> = Box<dyn FnMut(&E, &S)>;

/// Registry of listeners receiving an event and the new state.
pub struct Listeners<E, S> {
    next_id: u64,
    entries: Vec<(SubscriptionId, Listener<E, S>)>,
}

impl<E, S> Listeners<E, S> {
    pub fn new() -> Self {
        Self {
            next_id: 0,
            entries: Vec::new(),
        }
    }

    /// Register a listener.
    pub fn subscribe(&mut self, listener: impl FnMut(&E, &S) + 'static) -> SubscriptionId {
        self.next_id += 1;
        let id = SubscriptionId(self.next_id);
        self.entries.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns false if it was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let len_before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() < len_before
    }

    /// Call every listener with the event and the state after the change.
    pub fn notify(&mut self, event: &E, state: &S) {
        for (_, listener) in self.entries.iter_mut() {
            listener(event, state);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<E, S> Default for Listeners<E, S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E, S> fmt::Debug for Listeners<E, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listeners")
            .field("count", &self.entries.len())
            .finish()
    }
}
