//! The live navigation session and the driver's phases.

use std::fmt;
use std::sync::Arc;

use cw_core::{PROGRESS_MAX, Tick};
use cw_route::{Destination, PathSample, Route};

// ── NavPhase ──────────────────────────────────────────────────────────────────

/// Externally visible driver state.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum NavPhase {
    /// No session.
    Idle,
    /// A session is live and ticking.
    Navigating,
    /// Progress reached 100; the session is kept for display until reset.
    Arrived,
}

impl NavPhase {
    pub fn as_str(self) -> &'static str {
        match self {
            NavPhase::Idle       => "idle",
            NavPhase::Navigating => "navigating",
            NavPhase::Arrived    => "arrived",
        }
    }
}

impl fmt::Display for NavPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── SimulationSession ─────────────────────────────────────────────────────────

/// The state of one walk: which route, how far along, whether still moving.
///
/// A session is a plain value.  Advancing it returns a new session rather
/// than mutating in place, so [`advanced`][Self::advanced] can be tested
/// without a driver or a clock.  The route sits behind an `Arc`, making each
/// step a cheap copy.
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationSession {
    pub route: Arc<Route>,

    /// Percent of the route travelled, in `[0, 100]`.
    pub progress: f64,

    /// Ticks elapsed since the session started.
    pub ticks: Tick,

    /// Progress added per tick.  Fixed for the lifetime of the session.
    pub step: f64,

    /// `false` once progress reaches 100.
    pub is_active: bool,

    /// Room the walk was started for, when known.
    pub destination: Option<Destination>,
}

impl SimulationSession {
    /// A fresh session at progress 0.
    pub fn new(route: Arc<Route>, step: f64, destination: Option<Destination>) -> Self {
        Self {
            route,
            progress: 0.0,
            ticks: Tick::ZERO,
            step,
            is_active: true,
            destination,
        }
    }

    /// The session `n` ticks later.
    ///
    /// Progress is recomputed from the tick count, `min(ticks * step, 100)`,
    /// so repeated single steps never accumulate float drift.  An inactive
    /// session is returned unchanged.
    pub fn advanced(&self, n: u64) -> SimulationSession {
        if !self.is_active {
            return self.clone();
        }
        let ticks = self.ticks.offset(n);
        let progress = (ticks.0 as f64 * self.step).min(PROGRESS_MAX);
        SimulationSession {
            route: Arc::clone(&self.route),
            progress,
            ticks,
            step: self.step,
            is_active: progress < PROGRESS_MAX,
            destination: self.destination.clone(),
        }
    }

    #[inline]
    pub fn has_arrived(&self) -> bool {
        self.progress >= PROGRESS_MAX
    }

    /// Position, heading, and instruction at the current progress.
    #[inline]
    pub fn sample(&self) -> PathSample {
        self.route.position_at(self.progress)
    }
}
