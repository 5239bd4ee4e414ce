//! Normalized campus-plane coordinates and planar geometry helpers.
//!
//! The campus map is a `[0, 100] × [0, 100]` plane in screen space: `x` grows
//! to the right and `y` grows **downward**.  No conversion to real-world
//! units happens anywhere in the framework.
//!
//! Bearings follow the screen's vertical axis convention: `0°` points "up"
//! (north on the map), `90°` right, `180°` down, `270°` left.

use std::fmt;

/// Lower bound of the normalized plane on both axes.
pub const PLANE_MIN: f64 = 0.0;

/// Upper bound of the normalized plane on both axes.
pub const PLANE_MAX: f64 = 100.0;

// ── Point ─────────────────────────────────────────────────────────────────────

/// A position on the normalized campus plane.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance in plane units.
    #[inline]
    pub fn distance(self, other: Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// Screen-space bearing from `self` towards `other`, in degrees within
    /// `[0, 360)`.
    ///
    /// Computed as `atan2(dy, dx)` rotated by +90° so that "up" is 0°.  The
    /// bearing between coincident points is 90° (`atan2(0, 0) = 0`); callers
    /// that care must reject zero-length segments first.
    pub fn bearing_to(self, other: Point) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dy.atan2(dx).to_degrees() + 90.0).rem_euclid(360.0)
    }

    /// Linear interpolation: `self + t * (other - self)`.
    ///
    /// `t` is not clamped.
    #[inline]
    pub fn lerp(self, other: Point, t: f64) -> Point {
        Point {
            x: self.x + (other.x - self.x) * t,
            y: self.y + (other.y - self.y) * t,
        }
    }

    /// `true` if both coordinates lie inside the normalized plane.
    #[inline]
    pub fn in_plane(self) -> bool {
        (PLANE_MIN..=PLANE_MAX).contains(&self.x) && (PLANE_MIN..=PLANE_MAX).contains(&self.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.2}, {:.2})", self.x, self.y)
    }
}

// ── Turns ─────────────────────────────────────────────────────────────────────

/// Signed change of heading from `incoming` to `outgoing`, normalized into
/// `(-180, 180]`.  Positive values are right (clockwise) turns.
pub fn relative_bearing(incoming: f64, outgoing: f64) -> f64 {
    let delta = (outgoing - incoming).rem_euclid(360.0);
    if delta > 180.0 { delta - 360.0 } else { delta }
}

/// Turn direction at a waypoint, classified from the relative bearing.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Turn {
    Straight,
    SlightLeft,
    Left,
    SharpLeft,
    SlightRight,
    Right,
    SharpRight,
    UTurn,
}

impl Turn {
    /// Classify a relative bearing (see [`relative_bearing`]).
    ///
    /// | \|angle\|   | Turn            |
    /// |-------------|-----------------|
    /// | ≤ 20°       | `Straight`      |
    /// | ≤ 60°       | `Slight*`       |
    /// | ≤ 120°      | `Left`/`Right`  |
    /// | ≤ 170°      | `Sharp*`        |
    /// | > 170°      | `UTurn`         |
    pub fn classify(angle: f64) -> Turn {
        let abs = angle.abs();
        let right = angle > 0.0;
        if abs > 170.0 {
            Turn::UTurn
        } else if abs > 120.0 {
            if right { Turn::SharpRight } else { Turn::SharpLeft }
        } else if abs > 60.0 {
            if right { Turn::Right } else { Turn::Left }
        } else if abs > 20.0 {
            if right { Turn::SlightRight } else { Turn::SlightLeft }
        } else {
            Turn::Straight
        }
    }

    /// Turn between two headings given in screen-space degrees.
    #[inline]
    pub fn between(incoming: f64, outgoing: f64) -> Turn {
        Turn::classify(relative_bearing(incoming, outgoing))
    }

    /// Phrase used inside instruction text, e.g. "turn left".
    pub fn as_phrase(self) -> &'static str {
        match self {
            Turn::Straight    => "continue straight",
            Turn::SlightLeft  => "bear left",
            Turn::Left        => "turn left",
            Turn::SharpLeft   => "turn sharp left",
            Turn::SlightRight => "bear right",
            Turn::Right       => "turn right",
            Turn::SharpRight  => "turn sharp right",
            Turn::UTurn       => "turn around",
        }
    }
}

impl fmt::Display for Turn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_phrase())
    }
}
