//! The orientation adapter and its scoped subscriptions.

use std::sync::{Arc, Mutex};

use tracing::debug;

use crate::source::lock;
use crate::{HeadingSource, ListenerId};

/// Compass value shown before the first reading arrives.
pub const DEFAULT_HEADING: f64 = 0.0;

// ── OrientationAdapter ────────────────────────────────────────────────────────

/// Feeds a display-only compass value from a [`HeadingSource`].
///
/// The adapter keeps the latest available reading (see
/// [`compass_heading`][Self::compass_heading]) and republishes each one,
/// unchanged, to the callbacks registered with
/// [`subscribe`][Self::subscribe].  One adapter belongs to one driver; its
/// subscriptions are never shared across sessions.
pub struct OrientationAdapter<S: HeadingSource> {
    source: Arc<S>,
    latest: Arc<Mutex<f64>>,
}

impl<S: HeadingSource + 'static> OrientationAdapter<S> {
    pub fn new(source: Arc<S>) -> Self {
        Self {
            source,
            latest: Arc::new(Mutex::new(DEFAULT_HEADING)),
        }
    }

    /// The underlying sensor.
    pub fn source(&self) -> &Arc<S> {
        &self.source
    }

    /// Latest available reading, or [`DEFAULT_HEADING`] if none arrived yet.
    pub fn compass_heading(&self) -> f64 {
        *lock(&self.latest)
    }

    /// Register `callback` for every available heading.
    ///
    /// The returned [`Subscription`] owns the registration: dropping it (or
    /// calling [`Subscription::unsubscribe`]) detaches the listener from the
    /// source and frees the callback.
    #[must_use = "dropping the subscription immediately unsubscribes"]
    pub fn subscribe<F>(&self, mut callback: F) -> Subscription<S>
    where
        F: FnMut(f64) + Send + 'static,
    {
        let latest = Arc::clone(&self.latest);
        let id = self.source.attach(Box::new(move |event| {
            if let Some(heading) = event {
                *lock(&latest) = heading;
                callback(heading);
            }
        }));
        debug!(listener = %id, "orientation subscription attached");
        Subscription {
            source: Arc::clone(&self.source),
            id:     Some(id),
        }
    }
}

// ── Subscription ──────────────────────────────────────────────────────────────

/// Scoped registration returned by [`OrientationAdapter::subscribe`].
///
/// Detaches from the source exactly once, on [`unsubscribe`][Self::unsubscribe]
/// or on drop, whichever comes first.
pub struct Subscription<S: HeadingSource> {
    source: Arc<S>,
    id:     Option<ListenerId>,
}

impl<S: HeadingSource> Subscription<S> {
    /// The listener handle while still attached.
    pub fn id(&self) -> Option<ListenerId> {
        self.id
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.id.is_some()
    }

    /// Detach now.  Returns `true` if the source still knew the listener.
    pub fn unsubscribe(mut self) -> bool {
        self.release()
    }

    fn release(&mut self) -> bool {
        match self.id.take() {
            Some(id) => {
                let removed = self.source.detach(id);
                debug!(listener = %id, removed, "orientation subscription released");
                removed
            }
            None => false,
        }
    }
}

impl<S: HeadingSource> Drop for Subscription<S> {
    fn drop(&mut self) {
        self.release();
    }
}
