//! Route-subsystem error type.

use thiserror::Error;

use cw_core::CwError;

/// Errors produced by `cw-route`.
#[derive(Debug, Error)]
pub enum RouteError {
    /// Every waypoint coincides: the route has zero total length.  Never
    /// treated as "already arrived".
    #[error("degenerate route: total length is zero")]
    Degenerate,

    #[error("route needs at least 2 waypoints, got {0}")]
    TooFewWaypoints(usize),

    #[error("segment {index} has zero length (waypoints {index} and {} coincide)", .index + 1)]
    ZeroLengthSegment { index: usize },

    #[error("invalid campus layout: {0}")]
    Layout(#[from] CwError),

    #[error("zone table parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type RouteResult<T> = Result<T, RouteError>;
