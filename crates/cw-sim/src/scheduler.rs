//! The repeating tick task.
//!
//! [`TickScheduler`] owns the only loop that advances a driver.  Each
//! iteration waits one period, checks its [`CancelToken`], and only then
//! ticks, so a cancel requested during the wait never mutates the session.
//! Iterations run back to back on the calling thread; ticks never overlap.
//!
//! Waiting goes through the [`Pacer`] trait.  [`RealtimePacer`] sleeps;
//! [`ManualPacer`] only records elapsed time, which lets tests walk a whole
//! route instantly while still asserting on wall-clock totals.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use tracing::debug;

use cw_core::NavConfig;
use cw_orientation::HeadingSource;
use cw_route::WaypointResolver;

use crate::{NavDriver, NavObserver, NavPhase, SimResult};

// ── Pacer ─────────────────────────────────────────────────────────────────────

/// Blocks between ticks.
pub trait Pacer {
    fn wait(&mut self, period: Duration);
}

/// Sleeps the calling thread for each period.
#[derive(Copy, Clone, Debug, Default)]
pub struct RealtimePacer;

impl Pacer for RealtimePacer {
    fn wait(&mut self, period: Duration) {
        thread::sleep(period);
    }
}

/// Fake clock: never blocks, only accumulates the time it was asked to wait.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ManualPacer {
    pub elapsed: Duration,
    pub waits:   u64,
}

impl Pacer for ManualPacer {
    fn wait(&mut self, period: Duration) {
        self.elapsed = self.elapsed.saturating_add(period);
        self.waits += 1;
    }
}

// Lets a test keep the pacer and inspect it after the run.
impl<P: Pacer + ?Sized> Pacer for &mut P {
    fn wait(&mut self, period: Duration) {
        (**self).wait(period);
    }
}

// ── CancelToken ───────────────────────────────────────────────────────────────

/// Shared stop flag.  Clones observe the same flag, so another thread (or an
/// observer) can stop a running scheduler.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

// ── RunOutcome ────────────────────────────────────────────────────────────────

/// Why a scheduler run stopped.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RunOutcome {
    /// The session reached 100 % and the driver is in `Arrived`.
    Arrived,
    /// The cancel token fired; the session was discarded.
    Cancelled,
    /// `run_ticks` used up its budget with the session still navigating.
    Suspended,
}

// ── TickScheduler ─────────────────────────────────────────────────────────────

/// Drives a [`NavDriver`] at a fixed period until arrival or cancellation.
pub struct TickScheduler<P: Pacer> {
    period: Duration,
    pacer:  P,
    cancel: CancelToken,
}

impl<P: Pacer> TickScheduler<P> {
    pub fn new(period: Duration, pacer: P) -> Self {
        Self { period, pacer, cancel: CancelToken::new() }
    }

    /// A scheduler ticking at `config.tick_interval()`.
    pub fn for_config(config: &NavConfig, pacer: P) -> Self {
        Self::new(config.tick_interval(), pacer)
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// A handle that stops this scheduler before its next tick.
    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    pub fn pacer(&self) -> &P {
        &self.pacer
    }

    /// Replace a fired cancel token with a fresh one so the scheduler can
    /// drive another session.  Previously handed-out tokens stay cancelled.
    pub fn rearm(&mut self) {
        self.cancel = CancelToken::new();
    }

    /// Tick `driver` until it arrives or the cancel token fires.
    ///
    /// The driver must be Navigating; otherwise the first tick returns
    /// [`SimError::InvalidState`][crate::SimError::InvalidState].
    pub fn run<R, S, O>(&mut self, driver: &mut NavDriver<R, S>, observer: &mut O) -> SimResult<RunOutcome>
    where
        R: WaypointResolver,
        S: HeadingSource + 'static,
        O: NavObserver,
    {
        loop {
            if let Some(outcome) = self.step(driver, observer)? {
                return Ok(outcome);
            }
        }
    }

    /// Tick `driver` at most `n` times.  Returns `Suspended` if the session
    /// is still navigating afterwards.
    pub fn run_ticks<R, S, O>(
        &mut self,
        n: u64,
        driver: &mut NavDriver<R, S>,
        observer: &mut O,
    ) -> SimResult<RunOutcome>
    where
        R: WaypointResolver,
        S: HeadingSource + 'static,
        O: NavObserver,
    {
        for _ in 0..n {
            if let Some(outcome) = self.step(driver, observer)? {
                return Ok(outcome);
            }
        }
        Ok(RunOutcome::Suspended)
    }

    fn step<R, S, O>(&mut self, driver: &mut NavDriver<R, S>, observer: &mut O) -> SimResult<Option<RunOutcome>>
    where
        R: WaypointResolver,
        S: HeadingSource + 'static,
        O: NavObserver,
    {
        self.pacer.wait(self.period);

        if self.cancel.is_cancelled() {
            let at = driver.session().map(|s| s.ticks).unwrap_or_default();
            driver.cancel();
            debug!(%at, "scheduler stopped by cancel token");
            observer.on_cancelled(at);
            return Ok(Some(RunOutcome::Cancelled));
        }

        match driver.tick(observer)? {
            NavPhase::Arrived => Ok(Some(RunOutcome::Arrived)),
            _ => Ok(None),
        }
    }
}
