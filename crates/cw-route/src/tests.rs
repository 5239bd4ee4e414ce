//! Unit tests for cw-route.

use cw_core::{Point, Turn};

use crate::{CampusLayout, Route, WaypointList, WaypointResolver, Zone};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn tower_a() -> Zone {
    Zone::new("TA", "Tower A", 70.0)
}

/// The reference Tower A route: segments 73, 20, 10 (total 103).
fn tower_a_route() -> Route {
    let list = WaypointList::new(
        vec![
            Point::new(50.0, 2.0),
            Point::new(50.0, 75.0),
            Point::new(70.0, 75.0),
            Point::new(70.0, 85.0),
        ],
        tower_a(),
    );
    Route::build(&list).unwrap()
}

// ── Zones and destinations ────────────────────────────────────────────────────

#[cfg(test)]
mod zone {
    use crate::{Destination, Zone};

    #[test]
    fn floor_is_room_number_without_last_two_digits() {
        let d = Destination::parse("60TA - 601");
        assert_eq!(d.room_number, "601");
        assert_eq!(d.floor, "6");

        let d = Destination::parse("60TB - 1204");
        assert_eq!(d.floor, "12");
    }

    #[test]
    fn missing_room_number_defaults_to_first_floor() {
        let d = Destination::parse("60TC");
        assert_eq!(d.room_number, "101");
        assert_eq!(d.floor, "1");

        let d = Destination::parse("60TC - ");
        assert_eq!(d.room_number, "101");
    }

    #[test]
    fn short_room_number_is_first_floor() {
        assert_eq!(Destination::parse("Lab - 7").floor, "1");
    }

    #[test]
    fn display_names_room_and_floor() {
        assert_eq!(Destination::parse("60TA - 304").to_string(), "60TA - 304 (floor 3)");
    }

    #[test]
    fn empty_code_never_matches() {
        let fallback = Zone::new("", "Anywhere", 72.0);
        assert!(!fallback.matches("60TA - 601"));
        assert!(!fallback.matches(""));
    }
}

// ── Resolver ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod resolver {
    use super::*;

    #[test]
    fn always_four_waypoints() {
        let layout = CampusLayout::default();
        for room in ["60TA - 601", "60TB - 200", "60TC - 504", "???", ""] {
            assert_eq!(layout.resolve(room).len(), 4, "room {room:?}");
        }
    }

    #[test]
    fn towers_get_distinct_columns_and_share_the_corridor() {
        let layout = CampusLayout::default();
        let a = layout.resolve("60TA - 601");
        let b = layout.resolve("60TB - 200");
        let c = layout.resolve("60TC - 504");

        assert_eq!(a.points[..2], b.points[..2]);
        assert_eq!(b.points[..2], c.points[..2]);
        assert_eq!(a.points[0], Point::new(50.0, 2.0));
        assert_eq!(a.points[1], Point::new(50.0, 75.0));

        let (ax, bx, cx) = (a.points[2].x, b.points[2].x, c.points[2].x);
        assert!(ax < bx && bx < cx, "columns {ax} {bx} {cx}");
        assert_eq!(a.zone.name, "Tower A");
        assert_eq!(c.zone.name, "Tower C");
    }

    #[test]
    fn door_is_directly_below_zone_junction() {
        let list = CampusLayout::default().resolve("60TB - 200");
        assert_eq!(list.points[2], Point::new(82.0, 75.0));
        assert_eq!(list.points[3], Point::new(82.0, 85.0));
    }

    #[test]
    fn earliest_zone_in_table_wins_on_several_tokens() {
        let layout = CampusLayout::default();
        let list = layout.resolve("TC-TB-TA - 501");
        assert_eq!(list.zone.name, "Tower A");
        assert_eq!(list.points[2], Point::new(70.0, 75.0));

        let reordered = layout.clone().with_zones(layout.zones.iter().rev().cloned().collect());
        let list = reordered.resolve("TC-TB-TA - 501");
        assert_eq!(list.zone.name, "Tower C");
        assert_eq!(list.points[2], Point::new(94.0, 75.0));
    }

    #[test]
    fn unknown_room_falls_back_to_default_zone() {
        let layout = CampusLayout::default();
        let list = layout.resolve("Library");
        assert_eq!(list.zone, layout.fallback_zone);
        assert_eq!(list.points[3], Point::new(72.0, 85.0));
        assert!(Route::build(&list).is_ok());
    }

    #[test]
    fn every_resolution_builds() {
        let layout = CampusLayout::default();
        for room in ["60TA - 601", "60TB - 200", "60TC - 504", "nowhere"] {
            assert!(Route::build(&layout.resolve(room)).is_ok(), "room {room:?}");
        }
    }

    #[test]
    fn default_layout_is_valid() {
        assert!(CampusLayout::default().validate().is_ok());
    }

    #[test]
    fn validate_rejects_zone_on_corridor_column() {
        let layout = CampusLayout::default().with_zones(vec![Zone::new("TX", "Tower X", 50.0)]);
        assert!(layout.validate().is_err());
    }

    #[test]
    fn validate_rejects_zero_door_offset() {
        let layout = CampusLayout { door_offset: 0.0, ..CampusLayout::default() };
        assert!(layout.validate().is_err());
    }

    #[test]
    fn validate_rejects_duplicate_columns_and_off_plane_zones() {
        let dup = CampusLayout::default().with_zones(vec![
            Zone::new("TA", "Tower A", 70.0),
            Zone::new("TB", "Tower B", 70.0),
        ]);
        assert!(dup.validate().is_err());

        let off = CampusLayout::default().with_zones(vec![Zone::new("TZ", "Tower Z", 140.0)]);
        assert!(off.validate().is_err());
    }
}

// ── Route::build ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod build {
    use super::*;
    use crate::RouteError;

    #[test]
    fn measures_segments() {
        let route = tower_a_route();
        assert_eq!(route.segment_lengths(), &[73.0, 20.0, 10.0]);
        assert_eq!(route.total_length(), 103.0);
        assert_eq!(route.bearings(), &[180.0, 90.0, 180.0]);
    }

    #[test]
    fn all_coincident_points_are_degenerate() {
        let p = Point::new(10.0, 10.0);
        let list = WaypointList::new(vec![p, p, p], tower_a());
        assert!(matches!(Route::build(&list), Err(RouteError::Degenerate)));
    }

    #[test]
    fn single_zero_length_segment_is_rejected() {
        let list = WaypointList::new(
            vec![Point::new(0.0, 0.0), Point::new(10.0, 0.0), Point::new(10.0, 0.0)],
            tower_a(),
        );
        assert!(matches!(
            Route::build(&list),
            Err(RouteError::ZeroLengthSegment { index: 1 })
        ));
    }

    #[test]
    fn too_few_waypoints() {
        let list = WaypointList::new(vec![Point::new(1.0, 1.0)], tower_a());
        assert!(matches!(Route::build(&list), Err(RouteError::TooFewWaypoints(1))));
    }

    #[test]
    fn turns_at_interior_waypoints() {
        let route = tower_a_route();
        assert_eq!(route.turn_at(0), None);
        assert_eq!(route.turn_at(1), Some(Turn::Left));
        assert_eq!(route.turn_at(2), Some(Turn::Right));
        assert_eq!(route.turn_at(3), None);
    }
}

// ── Route::position_at ────────────────────────────────────────────────────────

#[cfg(test)]
mod position_at {
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    use super::*;
    use crate::Instruction;

    #[test]
    fn endpoints_are_exact() {
        let route = tower_a_route();
        assert_eq!(route.position_at(0.0).position, Point::new(50.0, 2.0));
        assert_eq!(route.position_at(100.0).position, Point::new(70.0, 85.0));
    }

    #[test]
    fn start_sample() {
        let s = tower_a_route().position_at(0.0);
        assert_eq!(s.heading_deg, 180.0);
        assert_eq!(s.instruction, Instruction::ProceedAlongMainAvenue);
        assert_eq!(s.segment, Some(0));
        assert_eq!(s.distance, 0.0);
    }

    #[test]
    fn corridor_junction_at_segment_boundary() {
        let route = tower_a_route();
        let s = route.position_at(73.0 / 103.0 * 100.0);
        assert_abs_diff_eq!(s.position.x, 50.0, epsilon = 1e-9);
        assert_abs_diff_eq!(s.position.y, 75.0, epsilon = 1e-9);
    }

    #[test]
    fn exact_boundary_distance_belongs_to_earlier_segment() {
        // Two 50-unit segments: progress 50 is exactly the boundary.
        let list = WaypointList::new(
            vec![Point::new(0.0, 50.0), Point::new(50.0, 50.0), Point::new(50.0, 100.0)],
            tower_a(),
        );
        let route = Route::build(&list).unwrap();
        let s = route.position_at(50.0);
        assert_eq!(s.segment, Some(0));
        assert_eq!(s.position, Point::new(50.0, 50.0));
        assert_eq!(s.heading_deg, 90.0);
    }

    #[test]
    fn instruction_switches_after_corridor() {
        let route = tower_a_route();
        assert_eq!(route.position_at(70.0).instruction, Instruction::ProceedAlongMainAvenue);
        assert_eq!(
            route.position_at(72.0).instruction,
            Instruction::TurnTowardZone { zone: "Tower A".into(), turn: Turn::Left }
        );
        assert_eq!(
            route.position_at(95.0).instruction,
            Instruction::EnterBuilding { zone: "Tower A".into() }
        );
    }

    #[test]
    fn arrival_snaps_with_neutral_heading() {
        let s = tower_a_route().position_at(100.0);
        assert_eq!(s.instruction, Instruction::Arrived);
        assert_eq!(s.heading_deg, 0.0);
        assert_eq!(s.segment, None);
    }

    #[test]
    fn progress_is_clamped() {
        let route = tower_a_route();
        assert_eq!(route.position_at(-5.0), route.position_at(0.0));
        assert_eq!(route.position_at(250.0), route.position_at(100.0));
        assert_eq!(route.position_at(f64::NAN), route.position_at(0.0));
    }

    #[test]
    fn interpolates_inside_segment() {
        // Halfway along the 20-unit access road: d = 73 + 10 = 83.
        let s = tower_a_route().position_at(83.0 / 103.0 * 100.0);
        assert_relative_eq!(s.position.x, 60.0, epsilon = 1e-9);
        assert_relative_eq!(s.position.y, 75.0, epsilon = 1e-9);
        assert_eq!(s.heading_deg, 90.0);
    }

    #[test]
    fn position_is_continuous() {
        let route = tower_a_route();
        let step = 0.01;
        let bound = step / 100.0 * route.total_length() + 1e-9;
        let mut prev = route.position_at(0.0).position;
        for i in 1..=10_000 {
            let cur = route.position_at(i as f64 * step).position;
            assert!(prev.distance(cur) <= bound, "jump at step {i}");
            prev = cur;
        }
    }

    #[test]
    fn travelled_distance_is_monotonic() {
        let route = tower_a_route();
        let mut prev = -1.0;
        for i in 0..=1_000 {
            let d = route.position_at(i as f64 * 0.1).distance;
            assert!(d >= prev, "distance decreased at step {i}");
            prev = d;
        }
    }

    #[test]
    fn instruction_text() {
        let route = tower_a_route();
        assert_eq!(route.position_at(10.0).instruction.to_string(), "Proceed straight along the main avenue");
        assert_eq!(route.position_at(80.0).instruction.to_string(), "Turn left toward Tower A");
        assert_eq!(route.position_at(99.0).instruction.to_string(), "Enter Tower A");
        assert_eq!(route.position_at(100.0).instruction.to_string(), "You have arrived");
    }

    #[test]
    fn single_segment_uses_first_segment_instruction() {
        let list = WaypointList::new(vec![Point::new(0.0, 0.0), Point::new(0.0, 10.0)], tower_a());
        let route = Route::build(&list).unwrap();
        assert_eq!(route.position_at(50.0).instruction, Instruction::ProceedAlongMainAvenue);
    }
}

// ── Loader ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod loader {
    use std::io::Cursor;

    use crate::{CampusLayout, RouteError, WaypointResolver, load_zones_reader};

    const ZONES_CSV: &str = "\
code,name,column\n\
TA, Tower A, 66\n\
TD, Tower D, 88\n\
";

    #[test]
    fn loads_zones_in_order() {
        let zones = load_zones_reader(Cursor::new(ZONES_CSV)).unwrap();
        assert_eq!(zones.len(), 2);
        assert_eq!(zones[0].code, "TA");
        assert_eq!(zones[0].name, "Tower A");
        assert_eq!(zones[1].column, 88.0);
    }

    #[test]
    fn loaded_table_drives_resolution() {
        let zones = load_zones_reader(Cursor::new(ZONES_CSV)).unwrap();
        let layout = CampusLayout::default().with_zones(zones);
        assert!(layout.validate().is_ok());
        assert_eq!(layout.resolve("60TD - 101").points[3].x, 88.0);
        // TB is no longer in the table.
        assert_eq!(layout.resolve("60TB - 200").zone, layout.fallback_zone);
    }

    #[test]
    fn bad_column_is_a_parse_error() {
        let csv = "code,name,column\nTA,Tower A,left\n";
        assert!(matches!(load_zones_reader(Cursor::new(csv)), Err(RouteError::Parse(_))));
    }

    #[test]
    fn empty_code_is_rejected() {
        let csv = "code,name,column\n,Nowhere,60\n";
        assert!(matches!(load_zones_reader(Cursor::new(csv)), Err(RouteError::Parse(_))));
    }

    #[test]
    fn missing_file_is_io_error() {
        let result = crate::load_zones_csv(std::path::Path::new("/nonexistent/zones.csv"));
        assert!(matches!(result, Err(RouteError::Io(_))));
    }
}
