//! Change notification for animated values.

use std::fmt;

/// Handle returned by [`Listeners::subscribe`], used to unsubscribe later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// An ordered list of payload-free change callbacks.
///
/// Callbacks are invoked in subscription order. The list owns the boxed
/// closures but nothing else: an observer that needs to reach back to the
/// value's owner should capture a shared flag rather than the owner itself.
#[derive(Default)]
pub struct Listeners {
    entries: Vec<(ListenerId, Box<dyn FnMut()>)>,
    next_id: u64,
}

impl Listeners {
    /// Creates an empty listener list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a callback and returns its handle.
    pub fn subscribe(&mut self, callback: impl FnMut() + 'static) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, Box::new(callback)));
        id
    }

    /// Removes a callback. Returns `false` if the handle was unknown.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    /// Returns the number of subscribed callbacks.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether no callback is subscribed.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Invokes every callback once.
    pub fn notify(&mut self) {
        for (_, callback) in &mut self.entries {
            callback();
        }
    }
}

impl fmt::Debug for Listeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listeners")
            .field("count", &self.entries.len())
            .finish()
    }
}
