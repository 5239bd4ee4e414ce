//! `cw-orientation`: display-only compass heading from an external sensor.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                      |
//! |---------------|---------------------------------------------------------------|
//! | [`source`]    | `HeadingSource` trait, `ListenerId`, `HeadingEvent`           |
//! | [`adapter`]   | `OrientationAdapter<S>`, RAII `Subscription<S>`               |
//! | [`manual`]    | `ManualHeadingSource` (injectable fake), `NullHeadingSource`  |
//! | [`simulated`] | `SimulatedCompass`, seeded jitter around a base heading       |
//!
//! # Decoupling
//!
//! Nothing in this crate knows about routes or progress, and nothing in the
//! route or simulation crates reads the compass.  The heading feeds the
//! rendering layer only.  Device events are republished unchanged; events
//! without a reading (`None`) are dropped and the last value persists.

pub mod adapter;
pub mod manual;
pub mod simulated;
pub mod source;


pub use adapter::{OrientationAdapter, Subscription};
pub use manual::{ManualHeadingSource, NullHeadingSource};
pub use simulated::SimulatedCompass;
pub use source::{HeadingEvent, HeadingListener, HeadingSource, ListenerId};
