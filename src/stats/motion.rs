//! Geometric primitives shared by the per-cell and per-culture statistics.

use crate::track::Point;

/// Direction of travel in degrees, reflected for the tracker's top-left
/// image origin: the raw atan2 heading is mirrored as `360 - (deg mod 360)`
/// so that "north" means up on screen. Values land in (0, 360]; due east
/// comes out as 360, which the compass table wraps back to "E".
pub fn heading_degrees(from: Point, to: Point) -> f64 {
    let raw = (to.y - from.y).atan2(to.x - from.x).to_degrees();
    360.0 - raw.rem_euclid(360.0)
}

/// 8 compass sectors of 45 degrees each, plus the wrap entry so an angle of
/// 360 indexes back onto "E".
pub const COMPASS_BRACKETS: [&str; 9] = ["E", "NE", "N", "NW", "W", "SW", "S", "SE", "E"];

/// Coarse compass classification of a heading in [0, 360].
pub fn compass_direction(angle_degrees: f64) -> &'static str {
    let sector = (angle_degrees / 45.0).round() as usize;
    COMPASS_BRACKETS[sector.min(COMPASS_BRACKETS.len() - 1)]
}
