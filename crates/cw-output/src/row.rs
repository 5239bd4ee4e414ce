//! Plain data row types written by output backends.

use cw_sim::NavUpdate;

/// One published update.
#[derive(Debug, Clone, PartialEq)]
pub struct TraceRow {
    pub tick:        u64,
    pub progress:    f64,
    pub x:           f64,
    pub y:           f64,
    pub heading_deg: f64,
    pub compass_deg: f64,
    pub eta_minutes: u32,
    /// Banner text as shown to the user.
    pub headline:    String,
}

impl From<&NavUpdate> for TraceRow {
    fn from(u: &NavUpdate) -> Self {
        Self {
            tick:        u.tick.0,
            progress:    u.progress,
            x:           u.position.x,
            y:           u.position.y,
            heading_deg: u.heading_deg,
            compass_deg: u.compass_deg,
            eta_minutes: u.eta_minutes,
            headline:    u.headline.clone(),
        }
    }
}

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    Arrived,
    Cancelled,
}

impl SessionOutcome {
    pub fn as_str(self) -> &'static str {
        match self {
            SessionOutcome::Arrived   => "arrived",
            SessionOutcome::Cancelled => "cancelled",
        }
    }
}

/// Summary of one finished session.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionRow {
    pub outcome:        SessionOutcome,
    pub ticks:          u64,
    pub final_progress: f64,
    /// Headline of the last published update; empty if none was seen.
    pub headline:       String,
}
