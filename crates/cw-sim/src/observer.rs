//! Observer trait through which the driver publishes to the rendering layer.

use cw_core::Tick;

use crate::NavUpdate;

/// Callbacks invoked by [`NavDriver`][crate::NavDriver] and
/// [`TickScheduler`][crate::TickScheduler] as a walk progresses.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example: instruction printer
///
/// ```rust,ignore
/// struct InstructionPrinter { last: String }
///
/// impl NavObserver for InstructionPrinter {
///     fn on_update(&mut self, update: &NavUpdate) {
///         if update.headline != self.last {
///             println!("{} ({} min)", update.headline, update.eta_minutes);
///             self.last = update.headline.clone();
///         }
///     }
/// }
/// ```
pub trait NavObserver {
    /// Called once when a session starts, before its first `on_update`.
    fn on_start(&mut self, _update: &NavUpdate) {}

    /// Called on start and after every tick with the freshly published
    /// position, heading, instruction, and ETA.
    fn on_update(&mut self, _update: &NavUpdate) {}

    /// Called once, right after the `on_update` of the tick that reached 100 %.
    fn on_arrived(&mut self, _update: &NavUpdate) {}

    /// Called by the scheduler when a run stops on its cancel token.
    ///
    /// `at` is the last tick the session completed.
    fn on_cancelled(&mut self, _at: Tick) {}
}

/// A [`NavObserver`] that does nothing.  Use when you need to drive a session
/// but don't want callbacks.
pub struct NoopObserver;

impl NavObserver for NoopObserver {}
