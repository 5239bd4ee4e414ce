use cw_core::CwError;
use cw_route::RouteError;
use thiserror::Error;

use crate::NavPhase;

#[derive(Debug, Error)]
pub enum SimError {
    /// An operation was invoked from a phase that does not permit it.  A
    /// caller integration bug, never a crash: the session is left as it was.
    #[error("`{op}` is not valid while {phase}")]
    InvalidState {
        op:    &'static str,
        phase: NavPhase,
    },

    #[error("route error: {0}")]
    Route(#[from] RouteError),

    #[error("navigation configuration error: {0}")]
    Config(#[from] CwError),
}

pub type SimResult<T> = Result<T, SimError>;
