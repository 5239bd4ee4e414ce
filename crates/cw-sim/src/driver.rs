//! The `NavDriver` state machine.

use std::sync::Arc;

use tracing::{debug, info, trace, warn};

use cw_core::{NavConfig, Point, Tick};
use cw_orientation::{HeadingSource, OrientationAdapter, Subscription};
use cw_route::{Destination, Instruction, Route, WaypointResolver};

use crate::{NavObserver, NavPhase, SimError, SimResult, SimulationSession};

/// Banner shown while no session is live.
pub const IDLE_HEADLINE: &str = "Head to the main entrance";

// ── NavUpdate ─────────────────────────────────────────────────────────────────

/// One publication to the rendering layer.
#[derive(Clone, Debug, PartialEq)]
pub struct NavUpdate {
    pub tick:        Tick,
    pub progress:    f64,
    pub position:    Point,
    /// Direction of travel, screen-space degrees.
    pub heading_deg: f64,
    pub instruction: Instruction,
    /// Linear ETA projection in minutes.
    pub eta_minutes: u32,
    /// Device compass at the time of publication.  Display only.
    pub compass_deg: f64,
    /// Text for the instruction banner.  On arrival names the room and
    /// floor when the session was started from a room code.
    pub headline:    String,
}

// ── Driver state ──────────────────────────────────────────────────────────────

enum DriverState {
    Idle,
    Navigating(SimulationSession),
    Arrived(SimulationSession),
}

impl DriverState {
    fn phase(&self) -> NavPhase {
        match self {
            DriverState::Idle          => NavPhase::Idle,
            DriverState::Navigating(_) => NavPhase::Navigating,
            DriverState::Arrived(_)    => NavPhase::Arrived,
        }
    }
}

// ── NavDriver ─────────────────────────────────────────────────────────────────

/// Owns the single live [`SimulationSession`] and moves it through
/// Idle → Navigating → Arrived.
///
/// # Type parameters
///
/// - `R: WaypointResolver` turns room codes into waypoints (e.g.
///   [`cw_route::CampusLayout`]).
/// - `S: HeadingSource` feeds the display compass.
///
/// The driver never schedules itself; ticks come from a
/// [`TickScheduler`][crate::TickScheduler] or from the caller.  Create via
/// [`NavBuilder`][crate::NavBuilder].
pub struct NavDriver<R: WaypointResolver, S: HeadingSource> {
    /// Timing calibration.  The step is copied into each session at start.
    pub config: NavConfig,

    resolver:    R,
    orientation: OrientationAdapter<S>,

    /// Compass subscriptions taken for the current session; released on
    /// cancel/reset.
    compass_subs: Vec<Subscription<S>>,

    state: DriverState,
}

impl<R: WaypointResolver, S: HeadingSource + 'static> NavDriver<R, S> {
    pub(crate) fn new(config: NavConfig, resolver: R, source: Arc<S>) -> Self {
        Self {
            config,
            resolver,
            orientation: OrientationAdapter::new(source),
            compass_subs: Vec::new(),
            state: DriverState::Idle,
        }
    }

    // ── Inspection ────────────────────────────────────────────────────────

    pub fn phase(&self) -> NavPhase {
        self.state.phase()
    }

    /// The live session, if any (Navigating or Arrived).
    pub fn session(&self) -> Option<&SimulationSession> {
        match &self.state {
            DriverState::Idle => None,
            DriverState::Navigating(s) | DriverState::Arrived(s) => Some(s),
        }
    }

    /// Progress of the live session; 0 when idle.
    pub fn progress(&self) -> f64 {
        self.session().map_or(0.0, |s| s.progress)
    }

    /// Minutes left.  Shows the configured idle estimate when no session is
    /// live.
    pub fn eta_minutes(&self) -> u32 {
        match self.session() {
            None    => self.config.idle_eta_minutes,
            Some(s) => self.config.eta_minutes(s.progress),
        }
    }

    /// Current banner text; [`IDLE_HEADLINE`] when no session is live.
    pub fn headline(&self) -> String {
        match self.session() {
            None    => IDLE_HEADLINE.to_owned(),
            Some(s) => self.update_for(s).headline,
        }
    }

    pub fn resolver(&self) -> &R {
        &self.resolver
    }

    pub fn orientation(&self) -> &OrientationAdapter<S> {
        &self.orientation
    }

    /// Snapshot of what the rendering layer would currently show.
    pub fn current_update(&self) -> Option<NavUpdate> {
        self.session().map(|s| self.update_for(s))
    }

    // ── Commands ──────────────────────────────────────────────────────────

    /// Begin walking `route`.  Valid only from Idle.
    ///
    /// Publishes the progress-0 update through `on_start` and `on_update`.
    pub fn start<O: NavObserver>(&mut self, route: Route, observer: &mut O) -> SimResult<NavUpdate> {
        self.start_session(route, None, observer)
    }

    /// Resolve `room`, build its route, and start walking it.
    ///
    /// Phase is checked before resolution.  A [`RouteError`][cw_route::RouteError]
    /// aborts the start and the driver stays Idle.
    pub fn start_for<O: NavObserver>(&mut self, room: &str, observer: &mut O) -> SimResult<NavUpdate> {
        self.require(NavPhase::Idle, "start")?;
        let destination = Destination::parse(room);
        let waypoints = self.resolver.resolve(room);
        let route = Route::build(&waypoints)?;
        debug!(%destination, zone = %waypoints.zone, "resolved destination");
        self.start_session(route, Some(destination), observer)
    }

    /// Advance the live session by one step.  Valid only while Navigating.
    ///
    /// Returns the phase after the tick: `Arrived` on the tick that reaches
    /// 100 %, `Navigating` otherwise.
    pub fn tick<O: NavObserver>(&mut self, observer: &mut O) -> SimResult<NavPhase> {
        let DriverState::Navigating(session) = &self.state else {
            return Err(self.invalid("tick"));
        };

        let next = session.advanced(1);
        let update = self.update_for(&next);
        trace!(tick = %update.tick, progress = update.progress, "tick");

        if next.has_arrived() {
            info!(tick = %update.tick, headline = %update.headline, "arrived");
            self.state = DriverState::Arrived(next);
            observer.on_update(&update);
            observer.on_arrived(&update);
            Ok(NavPhase::Arrived)
        } else {
            self.state = DriverState::Navigating(next);
            observer.on_update(&update);
            Ok(NavPhase::Navigating)
        }
    }

    /// Stop ticking, discard the session, release compass subscriptions, and
    /// return to Idle.  Valid from any phase; a no-op when already Idle.
    ///
    /// Returns `true` if a session was discarded.
    pub fn cancel(&mut self) -> bool {
        let released = self.compass_subs.len();
        self.compass_subs.clear();
        let prior = std::mem::replace(&mut self.state, DriverState::Idle);
        let discarded = !matches!(prior, DriverState::Idle);
        if discarded || released > 0 {
            debug!(from = %prior.phase(), released, "navigation cancelled");
        }
        discarded
    }

    /// Alias of [`cancel`][Self::cancel], used after arrival.
    pub fn reset(&mut self) -> bool {
        self.cancel()
    }

    /// Forward every compass reading to `callback` until the next
    /// cancel/reset.
    pub fn watch_compass<F>(&mut self, callback: F)
    where
        F: FnMut(f64) + Send + 'static,
    {
        let sub = self.orientation.subscribe(callback);
        self.compass_subs.push(sub);
    }

    /// Number of compass subscriptions held for the current session.
    pub fn compass_watchers(&self) -> usize {
        self.compass_subs.len()
    }

    // ── Internals ─────────────────────────────────────────────────────────

    fn start_session<O: NavObserver>(
        &mut self,
        route: Route,
        destination: Option<Destination>,
        observer: &mut O,
    ) -> SimResult<NavUpdate> {
        self.require(NavPhase::Idle, "start")?;

        let session = SimulationSession::new(Arc::new(route), self.config.progress_step, destination);
        let update = self.update_for(&session);
        info!(
            zone = %session.route.zone(),
            length = session.route.total_length(),
            step = session.step,
            "navigation started"
        );
        self.state = DriverState::Navigating(session);

        observer.on_start(&update);
        observer.on_update(&update);
        Ok(update)
    }

    fn update_for(&self, session: &SimulationSession) -> NavUpdate {
        let sample = session.sample();
        let headline = match (&sample.instruction, &session.destination) {
            (Instruction::Arrived, Some(dest)) => format!("Arrived! {dest}"),
            (instruction, _) => instruction.to_string(),
        };
        NavUpdate {
            tick:        session.ticks,
            progress:    session.progress,
            position:    sample.position,
            heading_deg: sample.heading_deg,
            instruction: sample.instruction,
            eta_minutes: self.config.eta_minutes(session.progress),
            compass_deg: self.orientation.compass_heading(),
            headline,
        }
    }

    fn require(&self, phase: NavPhase, op: &'static str) -> SimResult<()> {
        if self.phase() == phase { Ok(()) } else { Err(self.invalid(op)) }
    }

    fn invalid(&self, op: &'static str) -> SimError {
        let phase = self.phase();
        warn!(op, %phase, "rejected navigation command");
        SimError::InvalidState { op, phase }
    }
}
