pub use kurbo::{BezPath, CubicBez, Point, Vec2};

/// Full turn in radians.
pub const TAU: f64 = std::f64::consts::TAU;

/// Angle of sample `i` when a full turn is split into `resolution` equal arcs.
pub fn sample_angle(i: usize, resolution: usize) -> f64 {
    (i as f64) * (TAU / resolution as f64)
}

/// Polar to Cartesian around `center`.
pub fn polar(center: Point, radius: f64, theta: f64) -> Point {
    center + Vec2::new(radius * theta.cos(), radius * theta.sin())
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
