//! Campus layout and the waypoint resolver.
//!
//! # Pluggability
//!
//! The simulation driver asks for waypoints through the [`WaypointResolver`]
//! trait, so applications can substitute a different campus (or a test
//! double) without touching the driver.  [`CampusLayout`] is the reference
//! implementation: a fixed entrance, one main corridor, and an access road
//! along which each zone has its own column.

use cw_core::{CwError, CwResult, Point};

use crate::{Destination, Zone};

// ── WaypointList ──────────────────────────────────────────────────────────────

/// An ordered list of waypoints from the campus entrance to a destination
/// door, together with the zone that was resolved for it.
#[derive(Clone, Debug, PartialEq)]
pub struct WaypointList {
    pub points: Vec<Point>,
    /// The building entered on the final leg; named by the last instruction.
    pub zone: Zone,
}

impl WaypointList {
    pub fn new(points: Vec<Point>, zone: Zone) -> Self {
        Self { points, zone }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The entrance, if any.
    #[inline]
    pub fn first(&self) -> Option<Point> {
        self.points.first().copied()
    }

    /// The destination door, if any.
    #[inline]
    pub fn last(&self) -> Option<Point> {
        self.points.last().copied()
    }
}

// ── WaypointResolver trait ────────────────────────────────────────────────────

/// Maps a room descriptor to a concrete waypoint list.
///
/// Implementations must be total: every input, including garbage, maps to
/// some usable list.  Campus navigation never hard-fails on an unknown room
/// code.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync`; resolvers hold no mutable state.
pub trait WaypointResolver: Send + Sync {
    fn resolve(&self, room: &str) -> WaypointList;

    /// Check that every list this resolver can emit is buildable into a
    /// [`Route`][crate::Route].  Called once when a driver is built.
    fn validate(&self) -> CwResult<()> {
        Ok(())
    }
}

// ── CampusLayout ──────────────────────────────────────────────────────────────

/// The fixed campus geometry used to synthesize routes.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CampusLayout {
    /// Where every walk starts.  Default: `(50, 2)`, the main gate.
    pub entrance: Point,

    /// Horizontal position of the main corridor.  Default: 50.
    pub corridor_column: f64,

    /// Vertical position of the access road joining the corridor to the
    /// zones.  Default: 75.
    pub approach_row: f64,

    /// Distance from a zone's access point down to its door.  Default: 10.
    pub door_offset: f64,

    /// Zone table, matched against room codes in order.
    pub zones: Vec<Zone>,

    /// Zone used when no token matches.
    pub fallback_zone: Zone,
}

impl Default for CampusLayout {
    fn default() -> Self {
        Self {
            entrance:        Point::new(50.0, 2.0),
            corridor_column: 50.0,
            approach_row:    75.0,
            door_offset:     10.0,
            zones: vec![
                Zone::new("TA", "Tower A", 70.0),
                Zone::new("TB", "Tower B", 82.0),
                Zone::new("TC", "Tower C", 94.0),
            ],
            fallback_zone: Zone::new("", "Technology Complex", 72.0),
        }
    }
}

impl CampusLayout {
    /// Replace the zone table (e.g. with one loaded by
    /// [`load_zones_csv`][crate::load_zones_csv]).
    pub fn with_zones(mut self, zones: Vec<Zone>) -> Self {
        self.zones = zones;
        self
    }

    /// Replace the fallback zone.
    pub fn with_fallback(mut self, zone: Zone) -> Self {
        self.fallback_zone = zone;
        self
    }

    /// The shared junction where the main corridor meets the access road.
    #[inline]
    pub fn corridor_junction(&self) -> Point {
        Point::new(self.corridor_column, self.approach_row)
    }

    /// First zone whose token appears in `room`, or the fallback zone.
    ///
    /// Table order is the precedence: a code containing several tokens
    /// resolves to the earliest, and the instruction name and approach
    /// column always come from that one zone.
    pub fn zone_for(&self, room: &str) -> &Zone {
        self.zones
            .iter()
            .find(|z| z.matches(room))
            .unwrap_or(&self.fallback_zone)
    }

    /// Resolve a parsed destination.  Equivalent to `resolve(&dest.room)`.
    pub fn resolve_destination(&self, dest: &Destination) -> WaypointList {
        self.resolve(&dest.room)
    }

    /// Check that every route this layout can produce is buildable: all
    /// points inside the plane, no two consecutive waypoints coinciding, and
    /// no two zones sharing a column.
    pub fn validate(&self) -> CwResult<()> {
        let junction = self.corridor_junction();
        for (what, p) in [("entrance", self.entrance), ("corridor junction", junction)] {
            if !p.in_plane() {
                return Err(CwError::Config(format!("{what} {p} lies outside the campus plane")));
            }
        }
        if self.entrance == junction {
            return Err(CwError::Config("entrance coincides with the corridor junction".into()));
        }
        if !(self.door_offset.is_finite() && self.door_offset != 0.0) {
            return Err(CwError::Config(format!(
                "door_offset must be non-zero, got {}",
                self.door_offset
            )));
        }

        let all_zones = self.zones.iter().chain(std::iter::once(&self.fallback_zone));
        let mut columns: Vec<f64> = Vec::with_capacity(self.zones.len() + 1);
        for zone in all_zones {
            let access = Point::new(zone.column, self.approach_row);
            let door = Point::new(zone.column, self.approach_row + self.door_offset);
            if !access.in_plane() || !door.in_plane() {
                return Err(CwError::Config(format!(
                    "zone {:?} column {} puts its route outside the campus plane",
                    zone.name, zone.column
                )));
            }
            if zone.column == self.corridor_column {
                return Err(CwError::Config(format!(
                    "zone {:?} shares the corridor column {}",
                    zone.name, zone.column
                )));
            }
            if columns.contains(&zone.column) {
                return Err(CwError::Config(format!(
                    "zone {:?} reuses column {}",
                    zone.name, zone.column
                )));
            }
            columns.push(zone.column);
        }
        Ok(())
    }
}

impl WaypointResolver for CampusLayout {
    /// Always emits exactly four waypoints: entrance, corridor junction,
    /// zone access point, zone door.
    fn resolve(&self, room: &str) -> WaypointList {
        let zone = self.zone_for(room).clone();
        let access = Point::new(zone.column, self.approach_row);
        let door = Point::new(zone.column, self.approach_row + self.door_offset);
        WaypointList::new(
            vec![self.entrance, self.corridor_junction(), access, door],
            zone,
        )
    }

    fn validate(&self) -> CwResult<()> {
        CampusLayout::validate(self)
    }
}
