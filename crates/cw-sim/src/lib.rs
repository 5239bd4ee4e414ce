//! `cw-sim`: the simulation driver for the campus_walk simulator.
//!
//! # State machine
//!
//! ```text
//!            start / start_for              progress reaches 100
//!   Idle ─────────────────────► Navigating ─────────────────────► Arrived
//!    ▲                              │                                │
//!    └──────── cancel / reset ──────┴────────── cancel / reset ──────┘
//! ```
//!
//! | Phase        | Valid operations                 |
//! |--------------|----------------------------------|
//! | `Idle`       | `start`, `start_for`, `cancel`   |
//! | `Navigating` | `tick`, `cancel`                 |
//! | `Arrived`    | `cancel` / `reset`               |
//!
//! Anything else returns [`SimError::InvalidState`] and leaves the current
//! session untouched.
//!
//! # Tick loop
//!
//! ```text
//! loop:
//!   ① Wait      Pacer sleeps one period (or just counts it, in tests).
//!   ② Liveness  CancelToken set?  discard the session, stop.
//!   ③ Advance   session = session.advanced(1)   (pure)
//!   ④ Publish   NavObserver::on_update, then on_arrived at 100 %.
//! ```
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use cw_route::CampusLayout;
//! use cw_sim::{NavBuilder, NoopObserver, ManualPacer, TickScheduler};
//!
//! let mut driver = NavBuilder::new(CampusLayout::default()).build()?;
//! driver.start_for("60TA - 601", &mut NoopObserver)?;
//! let mut scheduler = TickScheduler::for_config(&driver.config, ManualPacer::default());
//! scheduler.run(&mut driver, &mut NoopObserver)?;
//! ```

pub mod builder;
pub mod driver;
pub mod error;
pub mod observer;
pub mod scheduler;
pub mod session;


pub use builder::NavBuilder;
pub use driver::{IDLE_HEADLINE, NavDriver, NavUpdate};
pub use error::{SimError, SimResult};
pub use observer::{NavObserver, NoopObserver};
pub use scheduler::{CancelToken, ManualPacer, Pacer, RealtimePacer, RunOutcome, TickScheduler};
pub use session::{NavPhase, SimulationSession};
