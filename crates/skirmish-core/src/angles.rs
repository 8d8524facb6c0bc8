//! Angle helpers for the battlefield's heading convention.
//!
//! Headings and bearings are measured in degrees, 0° = north ("up"),
//! increasing clockwise. Degree-to-radian conversion goes through
//! `f64::to_radians`.

use glam::DVec2;

/// Normalize an angle into (-180, 180] degrees.
///
/// Precondition: the input lies within (-540, 540). Callers only ever add
/// or subtract two angles that are already normalized, so a single
/// correction pass suffices. Not a general-purpose wrap.
pub fn calibrate(angle_deg: f64) -> f64 {
    if angle_deg > 180.0 {
        angle_deg - 360.0
    } else if angle_deg < -180.0 {
        angle_deg + 360.0
    } else {
        angle_deg
    }
}

/// Displacement after travelling `dist` units along `heading_deg`.
///
/// With 0° = north, x grows with the sine and y with the cosine.
pub fn polar_offset(heading_deg: f64, dist: f64) -> DVec2 {
    let rad = heading_deg.to_radians();
    DVec2::new(dist * rad.sin(), dist * rad.cos())
}
