//! The path model: a polyline parameterized by percent of distance travelled.
//!
//! # Parameterization
//!
//! A progress value `p ∈ [0, 100]` maps to an absolute distance
//! `d = p / 100 * total_length`.  Segments are scanned in order while
//! accumulating their lengths; the first segment whose cumulative end is
//! `>= d` contains the walker, so a distance landing exactly on a boundary
//! belongs to the **earlier** segment.  Inside the segment the position is a
//! plain linear interpolation.
//!
//! `p >= 100` snaps to the destination with a neutral heading and the
//! [`Instruction::Arrived`] instruction.

use std::fmt;

use cw_core::{PROGRESS_MAX, Point, Turn};

use crate::{RouteError, RouteResult, WaypointList, Zone};

/// Heading reported once the walker has arrived.
pub const NEUTRAL_HEADING: f64 = 0.0;

// ── Instruction ───────────────────────────────────────────────────────────────

/// Turn-by-turn instruction attached to each segment.
#[derive(Clone, Debug, PartialEq)]
pub enum Instruction {
    /// First segment: down the main avenue from the entrance.
    ProceedAlongMainAvenue,

    /// Any middle segment: across towards the destination zone.  `turn` is
    /// the direction taken at the waypoint that starts the segment.
    TurnTowardZone { zone: String, turn: Turn },

    /// Final segment: into the building.
    EnterBuilding { zone: String },

    /// Progress has reached 100.
    Arrived,
}

impl Instruction {
    #[inline]
    pub fn is_arrival(&self) -> bool {
        matches!(self, Instruction::Arrived)
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Instruction::ProceedAlongMainAvenue => {
                f.write_str("Proceed straight along the main avenue")
            }
            Instruction::TurnTowardZone { zone, turn } => {
                let phrase = turn.as_phrase();
                let mut chars = phrase.chars();
                if let Some(first) = chars.next() {
                    write!(f, "{}{}", first.to_ascii_uppercase(), chars.as_str())?;
                }
                write!(f, " toward {zone}")
            }
            Instruction::EnterBuilding { zone } => write!(f, "Enter {zone}"),
            Instruction::Arrived => f.write_str("You have arrived"),
        }
    }
}

// ── PathSample ────────────────────────────────────────────────────────────────

/// Result of a [`Route::position_at`] query.  Positions are never rounded;
/// consumers round for display only.
#[derive(Clone, Debug, PartialEq)]
pub struct PathSample {
    /// The progress actually used, after clamping.
    pub progress: f64,
    pub position: Point,
    /// Screen-space bearing of the current segment, degrees in `[0, 360)`.
    pub heading_deg: f64,
    pub instruction: Instruction,
    /// Distance along the polyline, in plane units.
    pub distance: f64,
    /// Index of the segment containing the walker; `None` once arrived.
    pub segment: Option<usize>,
}

// ── Route ─────────────────────────────────────────────────────────────────────

/// An immutable, pre-measured polyline.  Built once per navigation session.
#[derive(Clone, Debug, PartialEq)]
pub struct Route {
    waypoints: Vec<Point>,
    segment_lengths: Vec<f64>,
    bearings: Vec<f64>,
    /// Turn taken at each interior waypoint; `turns[i]` belongs to
    /// waypoint `i + 1`.
    turns: Vec<Turn>,
    total_length: f64,
    zone: Zone,
}

impl Route {
    /// Measure every segment of `list`.
    ///
    /// # Errors
    ///
    /// - [`RouteError::TooFewWaypoints`] for fewer than two points.
    /// - [`RouteError::Degenerate`] if all points coincide.
    /// - [`RouteError::ZeroLengthSegment`] if any two consecutive points
    ///   coincide.
    pub fn build(list: &WaypointList) -> RouteResult<Route> {
        let waypoints = list.points.clone();
        if waypoints.len() < 2 {
            return Err(RouteError::TooFewWaypoints(waypoints.len()));
        }

        let segment_lengths: Vec<f64> = waypoints
            .windows(2)
            .map(|w| w[0].distance(w[1]))
            .collect();
        let total_length: f64 = segment_lengths.iter().sum();

        if total_length == 0.0 {
            return Err(RouteError::Degenerate);
        }
        if let Some(index) = segment_lengths.iter().position(|&len| len == 0.0) {
            return Err(RouteError::ZeroLengthSegment { index });
        }

        let bearings: Vec<f64> = waypoints
            .windows(2)
            .map(|w| w[0].bearing_to(w[1]))
            .collect();
        let turns = bearings
            .windows(2)
            .map(|b| Turn::between(b[0], b[1]))
            .collect();

        Ok(Route {
            waypoints,
            segment_lengths,
            bearings,
            turns,
            total_length,
            zone: list.zone.clone(),
        })
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn waypoints(&self) -> &[Point] {
        &self.waypoints
    }

    pub fn segment_lengths(&self) -> &[f64] {
        &self.segment_lengths
    }

    pub fn bearings(&self) -> &[f64] {
        &self.bearings
    }

    pub fn total_length(&self) -> f64 {
        self.total_length
    }

    pub fn segment_count(&self) -> usize {
        self.segment_lengths.len()
    }

    pub fn zone(&self) -> &Zone {
        &self.zone
    }

    /// The entrance.
    pub fn start(&self) -> Point {
        self.waypoints[0]
    }

    /// The destination door.
    pub fn destination(&self) -> Point {
        self.waypoints[self.waypoints.len() - 1]
    }

    /// Turn taken at `waypoint`.  `None` for the first and last waypoints,
    /// which have no incoming or outgoing segment.
    pub fn turn_at(&self, waypoint: usize) -> Option<Turn> {
        waypoint.checked_sub(1).and_then(|i| self.turns.get(i).copied())
    }

    /// Instruction for segment `index`.
    pub fn instruction_for(&self, index: usize) -> Instruction {
        let last = self.segment_count() - 1;
        if index == 0 {
            Instruction::ProceedAlongMainAvenue
        } else if index >= last {
            Instruction::EnterBuilding { zone: self.zone.name.clone() }
        } else {
            Instruction::TurnTowardZone {
                zone: self.zone.name.clone(),
                turn: self.turn_at(index).unwrap_or(Turn::Straight),
            }
        }
    }

    // ── Parameterization ──────────────────────────────────────────────────

    /// Map `progress` (percent of total length) to a position, heading, and
    /// instruction.
    ///
    /// Out-of-range progress is clamped to `[0, 100]`; `NaN` reads as 0.
    pub fn position_at(&self, progress: f64) -> PathSample {
        let progress = if progress.is_nan() { 0.0 } else { progress.clamp(0.0, PROGRESS_MAX) };
        if progress >= PROGRESS_MAX {
            return self.arrival_sample();
        }

        let distance = progress / PROGRESS_MAX * self.total_length;
        let mut accumulated = 0.0;
        for (i, &len) in self.segment_lengths.iter().enumerate() {
            if distance <= accumulated + len {
                let t = (distance - accumulated) / len;
                let from = self.waypoints[i];
                let to = self.waypoints[i + 1];
                return PathSample {
                    progress,
                    position:    from.lerp(to, t),
                    heading_deg: self.bearings[i],
                    instruction: self.instruction_for(i),
                    distance,
                    segment:     Some(i),
                };
            }
            accumulated += len;
        }

        // Float slack left `distance` past the final cumulative length.
        self.arrival_sample()
    }

    fn arrival_sample(&self) -> PathSample {
        PathSample {
            progress:    PROGRESS_MAX,
            position:    self.destination(),
            heading_deg: NEUTRAL_HEADING,
            instruction: Instruction::Arrived,
            distance:    self.total_length,
            segment:     None,
        }
    }
}
