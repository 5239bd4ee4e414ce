//! Hand-driven and absent sensors.

use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::source::{ListenerSet, lock};
use crate::{HeadingEvent, HeadingListener, HeadingSource, ListenerId};

// ── ManualHeadingSource ───────────────────────────────────────────────────────

/// A heading source driven by explicit [`emit`][Self::emit] calls.
///
/// Stands in for the device sensor in tests and headless runs.
#[derive(Default)]
pub struct ManualHeadingSource {
    listeners: Mutex<ListenerSet>,
}

impl ManualHeadingSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deliver `event` to every attached listener, in attach order.
    pub fn emit(&self, event: HeadingEvent) {
        lock(&self.listeners).emit(event);
    }

    /// Number of listeners currently attached.
    pub fn listener_count(&self) -> usize {
        lock(&self.listeners).len()
    }
}

impl HeadingSource for ManualHeadingSource {
    fn attach(&self, listener: HeadingListener) -> ListenerId {
        lock(&self.listeners).insert(listener)
    }

    fn detach(&self, id: ListenerId) -> bool {
        lock(&self.listeners).remove(id)
    }
}

// ── NullHeadingSource ─────────────────────────────────────────────────────────

/// The source used on hosts without an orientation sensor.  Listeners are
/// dropped on attach and never invoked, so the compass keeps its default.
#[derive(Default)]
pub struct NullHeadingSource {
    next_id: AtomicU64,
}

impl HeadingSource for NullHeadingSource {
    fn attach(&self, _listener: HeadingListener) -> ListenerId {
        ListenerId(self.next_id.fetch_add(1, Ordering::Relaxed))
    }

    /// Always `false`: no listener is ever kept.
    fn detach(&self, _id: ListenerId) -> bool {
        false
    }
}
