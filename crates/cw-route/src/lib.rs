//! `cw-route`: campus layout, waypoint resolution, and the path model.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                    |
//! |---------------|-------------------------------------------------------------|
//! | [`zone`]      | `Zone`, `Destination` (room code → zone + floor)            |
//! | [`layout`]    | `CampusLayout`, `WaypointResolver` trait, `WaypointList`    |
//! | [`path`]      | `Route`, `PathSample`, `Instruction`                        |
//! | [`loader`]    | `load_zones_csv`, `load_zones_reader`                       |
//! | [`error`]     | `RouteError`, `RouteResult<T>`                              |
//!
//! # Route shape
//!
//! There is no pathfinding.  Every destination resolves to the same
//! four-waypoint L-shape:
//!
//! ```text
//!   entrance (50, 2)
//!       │  main avenue
//!       ▼
//!   corridor junction (50, 75) ──► zone junction (column, 75)
//!                                          │
//!                                          ▼
//!                                   door (column, 85)
//! ```
//!
//! Only the zone column varies.  Both [`CampusLayout::resolve`] and
//! [`Route::position_at`] are pure and may be shared freely across threads.

pub mod error;
pub mod layout;
pub mod loader;
pub mod path;
pub mod zone;

#[cfg(test)]
mod tests;

pub use error::{RouteError, RouteResult};
pub use layout::{CampusLayout, WaypointList, WaypointResolver};
pub use loader::{load_zones_csv, load_zones_reader};
pub use path::{Instruction, PathSample, Route};
pub use zone::{Destination, Zone};
