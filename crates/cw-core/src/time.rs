//! Simulation time model and navigation timing configuration.
//!
//! # Design
//!
//! Time is a monotonically increasing `Tick` counter.  Walking "speed" is
//! calibrated in **percent of the route per tick**, not in metres per
//! second: every route, short or long, is covered in the same number of
//! ticks.
//!
//!   progress(tick) = min(tick * progress_step, 100)
//!
//! Deriving progress from the integer tick count (rather than accumulating
//! `+= step`) keeps the arrival tick exact: with the reference step of 0.15
//! the walker arrives on tick `ceil(100 / 0.15) = 667`.

use std::fmt;
use std::time::Duration;

use crate::{CwError, CwResult};

/// Progress value at which the walker has arrived.
pub const PROGRESS_MAX: f64 = 100.0;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute tick counter within one navigation session.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Return the tick `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Tick {
        Tick(self.0 + n)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── NavConfig ─────────────────────────────────────────────────────────────────

/// Timing configuration for one navigation driver.
///
/// Typically built with `NavConfig::default()` (the reference calibration)
/// and tweaked by the application.  The step must stay constant for the
/// whole session; the driver copies it when a session starts.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NavConfig {
    /// Wall-clock period between two ticks, in milliseconds.  Default: 30.
    pub tick_interval_ms: u32,

    /// Progress percentage added per tick.  Default: 0.15.
    pub progress_step: f64,

    /// Remaining-progress percentage represented by one ETA minute.
    /// Default: 20 (a full route displays as 5 minutes).
    pub eta_divisor: f64,

    /// ETA shown while no session is running.  Default: 5.
    pub idle_eta_minutes: u32,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: 30,
            progress_step:    0.15,
            eta_divisor:      20.0,
            idle_eta_minutes: 5,
        }
    }
}

impl NavConfig {
    /// Check that the calibration can actually reach the destination.
    pub fn validate(&self) -> CwResult<()> {
        if !(self.progress_step.is_finite() && self.progress_step > 0.0) {
            return Err(CwError::Config(format!(
                "progress_step must be a positive finite number, got {}",
                self.progress_step
            )));
        }
        if !(self.eta_divisor.is_finite() && self.eta_divisor > 0.0) {
            return Err(CwError::Config(format!(
                "eta_divisor must be a positive finite number, got {}",
                self.eta_divisor
            )));
        }
        if self.tick_interval_ms == 0 {
            return Err(CwError::Config("tick_interval_ms must be non-zero".into()));
        }
        Ok(())
    }

    /// Period between ticks as a `Duration`.
    #[inline]
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(u64::from(self.tick_interval_ms))
    }

    /// Progress reached after `ticks` ticks, clamped to 100.
    #[inline]
    pub fn progress_after(&self, ticks: u64) -> f64 {
        (ticks as f64 * self.progress_step).min(PROGRESS_MAX)
    }

    /// Number of ticks needed to go from progress 0 to 100.
    ///
    /// Equal to `ceil(100 / progress_step)`, corrected by one where float
    /// rounding would disagree with [`progress_after`][Self::progress_after].
    pub fn ticks_to_arrive(&self) -> u64 {
        let n = (PROGRESS_MAX / self.progress_step).ceil() as u64;
        if n > 0 && (n - 1) as f64 * self.progress_step >= PROGRESS_MAX {
            n - 1
        } else if (n as f64) * self.progress_step < PROGRESS_MAX {
            n + 1
        } else {
            n
        }
    }

    /// Wall-clock time a full traversal takes at this calibration.
    pub fn traversal_time(&self) -> Duration {
        Duration::from_millis(u64::from(self.tick_interval_ms).saturating_mul(self.ticks_to_arrive()))
    }

    /// Linear ETA projection in minutes: `ceil((100 - progress) / eta_divisor)`.
    pub fn eta_minutes(&self, progress: f64) -> u32 {
        let remaining = PROGRESS_MAX - progress.clamp(0.0, PROGRESS_MAX);
        (remaining / self.eta_divisor).ceil() as u32
    }
}
