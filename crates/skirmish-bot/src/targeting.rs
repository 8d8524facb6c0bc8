//! Fire control: firepower selection and the predictive lead estimate.
//!
//! Pure functions over plain data; the controller decides when to apply
//! them and how to fall back when no valid lead exists.

use glam::DVec2;

use skirmish_core::angles::polar_offset;
use skirmish_core::constants::*;

use crate::controller::EnemySnapshot;

/// Firepower for a target at `distance`: inversely proportional, floored
/// at [`MIN_FIREPOWER`]. There is deliberately no upper clamp.
pub fn firepower(distance: f64) -> f64 {
    (FIREPOWER_PER_DISTANCE / distance).max(MIN_FIREPOWER)
}

/// Projectile travel speed for a shot of the given power.
pub fn bullet_speed(power: f64) -> f64 {
    BULLET_SPEED_BASE - BULLET_SPEED_PER_POWER * power
}

/// Extra gun rotation (degrees) needed to lead a moving opponent.
///
/// Estimates the opponent's straight-line displacement over the
/// projectile's flight time, then solves the triangle {self, opponent-now,
/// opponent-future} with the law of cosines for the angle at our own
/// vertex. The sign follows the 2D cross product of the two legs combined
/// with the sign of the opponent's velocity: positive product means the
/// drift is to our left, so the angle is negated.
///
/// Returns NaN when the triangle degenerates (either leg has zero length).
/// Callers must treat NaN as "no valid lead" and aim directly instead.
pub fn lead_angle(
    enemy: &EnemySnapshot,
    self_pos: DVec2,
    body_heading_deg: f64,
    power: f64,
) -> f64 {
    let bullet_time = enemy.distance / bullet_speed(power);
    let path = (enemy.velocity * bullet_time).abs();
    let drift = polar_offset(enemy.heading_deg, path);

    let now = self_pos + polar_offset(body_heading_deg + enemy.bearing_deg, enemy.distance);
    let future = now + drift;

    let a1 = self_pos.distance(now);
    let a2 = self_pos.distance(future);
    let a3 = now.distance(future);
    let angle = angle_by_sides(a1, a2, a3);

    let cross = (now - self_pos).perp_dot(future - self_pos);
    let signed = if cross * enemy.velocity > 0.0 {
        -angle
    } else {
        angle
    };

    signed.to_degrees()
}

/// Angle opposite side `a3` in a triangle with side lengths `a1`, `a2`,
/// `a3` (law of cosines). NaN when `a1` or `a2` is zero.
fn angle_by_sides(a1: f64, a2: f64, a3: f64) -> f64 {
    ((a1 * a1 + a2 * a2 - a3 * a3) / (2.0 * a1 * a2)).acos()
}
