use nalgebra::Vector2;
use std::f64::consts::PI;

/// Convert degrees to radians
#[inline]
pub fn deg_to_rad(deg: f64) -> f64 {
    deg * PI / 180.0
}

/// Convert radians to degrees
#[inline]
pub fn rad_to_deg(rad: f64) -> f64 {
    rad * 180.0 / PI
}

/// Resolve a force magnitude acting perpendicular to a surface tilted by
/// `tilt_deg` into (horizontal, vertical) components. Positive tilt leans
/// the force toward negative x.
#[inline]
pub fn resolve_tilted(magnitude: f64, tilt_deg: f64) -> Vector2<f64> {
    let tilt = deg_to_rad(tilt_deg);
    Vector2::new(-magnitude * tilt.sin(), magnitude * tilt.cos())
}

/// Quadratic drag magnitude signed to oppose `velocity`.
#[inline]
pub fn opposing_drag(density: f64, velocity: f64, drag_area: f64) -> f64 {
    let magnitude = 0.5 * density * velocity * velocity * drag_area;
    if velocity > 0.0 {
        -magnitude
    } else {
        magnitude
    }
}
