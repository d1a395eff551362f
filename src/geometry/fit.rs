//! Closed Catmull-Rom spline through a point ring, emitted as cubic Beziers.

use crate::{
    foundation::{
        core::Point,
        error::{PenumbraError, PenumbraResult},
    },
    geometry::path::{PathCommand, PathDesc},
};

/// Points re-appended after the last sample so the seam has neighbours.
const WRAP: usize = 3;

/// Fit a smooth closed curve through `points` (one full turn, not repeated).
///
/// Every input point is the end point of exactly one segment and the curve is
/// C1 at the seam. Tension is the uniform 1/6.
pub fn fit_closed_curve(points: &[Point]) -> PenumbraResult<PathDesc> {
    if points.len() < 3 {
        return Err(PenumbraError::invalid_configuration(format!(
            "closed curve needs at least 3 points (got {})",
            points.len()
        )));
    }

    let wrapped: Vec<Point> = points
        .iter()
        .chain(points.iter().take(WRAP))
        .copied()
        .collect();

    let mut commands = Vec::with_capacity(points.len() + 1);
    for (i, w) in wrapped.windows(4).enumerate() {
        let [p0, p1, p2, p3] = [w[0], w[1], w[2], w[3]];
        if i == 0 {
            commands.push(PathCommand::MoveTo { to: p1 });
        }
        commands.push(PathCommand::CubicTo {
            c1: p1 + (p2 - p0) / 6.0,
            c2: p2 - (p3 - p1) / 6.0,
            to: p2,
        });
    }
    Ok(PathDesc::new(commands))
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/fit.rs"]
mod tests;
