//! The sensor-side abstraction.

use std::fmt;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// One device-orientation reading in degrees, or `None` when the device
/// reports no value.
pub type HeadingEvent = Option<f64>;

/// Callback registered against a [`HeadingSource`].
pub type HeadingListener = Box<dyn FnMut(HeadingEvent) + Send>;

/// Handle returned by [`HeadingSource::attach`], used to detach later.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct ListenerId(pub u64);

impl fmt::Display for ListenerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ListenerId({})", self.0)
    }
}

/// An external device-heading event stream.
///
/// Sources on hosts without the sensor simply never invoke their listeners.
///
/// # Re-entrancy
///
/// Sources may hold an internal lock while invoking listeners; a listener
/// must not call `attach` or `detach` on the source that is calling it.
pub trait HeadingSource: Send + Sync {
    /// Register `listener`; it is invoked for every event until detached.
    fn attach(&self, listener: HeadingListener) -> ListenerId;

    /// Remove a listener.  Returns `false` if `id` was not attached.
    fn detach(&self, id: ListenerId) -> bool;
}

// ── Shared listener bookkeeping ───────────────────────────────────────────────

/// Listener list shared by the in-crate sources.
#[derive(Default)]
pub(crate) struct ListenerSet {
    next_id:   u64,
    listeners: Vec<(ListenerId, HeadingListener)>,
}

impl ListenerSet {
    pub(crate) fn insert(&mut self, listener: HeadingListener) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, listener));
        id
    }

    pub(crate) fn remove(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(l, _)| *l != id);
        self.listeners.len() != before
    }

    pub(crate) fn emit(&mut self, event: HeadingEvent) {
        for (_, listener) in &mut self.listeners {
            listener(event);
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.listeners.len()
    }
}

/// Lock a mutex, recovering the data if a listener panicked while holding it.
pub(crate) fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    m.lock().unwrap_or_else(PoisonError::into_inner)
}
