//! Destination zones and room-code parsing.
//!
//! Room codes look like `"60TA - 601"`: a campus prefix with an embedded
//! zone token (`TA`), then a dash and a room number whose leading digits
//! are the floor (`6`).  Nothing here fails; unparseable parts fall back to
//! sensible defaults.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Room number assumed when the code carries none.
const DEFAULT_ROOM_NUMBER: &str = "101";

/// Floor assumed when the room number is too short to contain one.
const DEFAULT_FLOOR: &str = "1";

// ── Zone ──────────────────────────────────────────────────────────────────────

/// A destination building category.  Determines the horizontal column of the
/// final approach.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Zone {
    /// Token searched for in room codes, e.g. `"TA"`.  Empty for the
    /// fallback zone, which never matches by token.
    pub code: String,

    /// Display name used in instructions, e.g. `"Tower A"`.
    pub name: String,

    /// Horizontal plane coordinate of the zone's access point and door.
    pub column: f64,
}

impl Zone {
    pub fn new(code: impl Into<String>, name: impl Into<String>, column: f64) -> Self {
        Self { code: code.into(), name: name.into(), column }
    }

    /// `true` if `room` contains this zone's token.
    #[inline]
    pub fn matches(&self, room: &str) -> bool {
        !self.code.is_empty() && room.contains(self.code.as_str())
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

// ── Destination ───────────────────────────────────────────────────────────────

/// A parsed room descriptor.  Carries no route state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Destination {
    /// The room code exactly as given, e.g. `"60TA - 601"`.
    pub room: String,

    /// Room number after the dash, or `"101"` when absent.
    pub room_number: String,

    /// Floor derived from the room number: every digit but the last two.
    pub floor: String,
}

impl Destination {
    pub fn parse(room: &str) -> Self {
        let room_number = room
            .split('-')
            .nth(1)
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .unwrap_or(DEFAULT_ROOM_NUMBER)
            .to_owned();

        let len = room_number.chars().count();
        let floor = if len >= 3 {
            room_number.chars().take(len - 2).collect()
        } else {
            DEFAULT_FLOOR.to_owned()
        };

        Self { room: room.to_owned(), room_number, floor }
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (floor {})", self.room, self.floor)
    }
}
