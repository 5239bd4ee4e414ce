//! `cw-core`: foundational types for the `campus_walk` navigation simulator.
//!
//! This crate is a dependency of every other `cw-*` crate.  It has no `cw-*`
//! dependencies and minimal external ones (only `thiserror`, plus optional
//! `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`geo`]         | `Point`, distance, screen-space bearing, `Turn`       |
//! | [`time`]        | `Tick`, `NavConfig`                                   |
//! | [`error`]       | `CwError`, `CwResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod geo;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CwError, CwResult};
pub use geo::{Point, Turn, relative_bearing};
pub use time::{NavConfig, PROGRESS_MAX, Tick};
