use crate::{
    config::model::PenumbraConfig,
    foundation::core::{Point, Vec2, polar},
    wave::profile::RadialProfile,
};

/// Placement of one ring: how the shared profile is scaled and moved.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RingParams {
    /// Position in the ring set; 0 is innermost.
    pub index: usize,
    /// Radius before displacement.
    pub base_radius: f64,
    /// Multiplier applied to the profile displacement.
    pub scale: f64,
    /// Offset of the ring center.
    pub translation: Vec2,
}

impl RingParams {
    /// Quadratic growth in radius, wobble and downward drift.
    ///
    /// Ring 0 has zero scale and is a perfect circle of `base_radius`.
    pub fn for_index(index: usize, config: &PenumbraConfig) -> Self {
        let i = index as f64;
        let i_sq = i * i;
        Self {
            index,
            base_radius: config.base_radius + i_sq,
            scale: i_sq * config.scale_step,
            translation: Vec2::new(0.0, i_sq + config.translation_linear * i),
        }
    }

    /// Center of the ring after translation.
    pub fn center(&self) -> Point {
        Point::ORIGIN + self.translation
    }
}

/// Cartesian sample points of one ring, in angle order.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Ring {
    /// Placement used to build the points.
    pub params: RingParams,
    /// One point per profile sample.
    pub points: Vec<Point>,
}

impl Ring {
    /// `r = base_radius + displacement · scale`, `(x, y) = translation + (r cos θ, r sin θ)`.
    pub fn build(profile: &RadialProfile, params: RingParams) -> Self {
        let center = params.center();
        let points = profile
            .displacements()
            .iter()
            .enumerate()
            .map(|(i, d)| {
                let r = params.base_radius + d * params.scale;
                polar(center, r, profile.angle(i))
            })
            .collect();
        Self { params, points }
    }
}

/// Rings `0..ring_count` over one shared profile.
pub fn build_rings(profile: &RadialProfile, config: &PenumbraConfig) -> Vec<Ring> {
    (0..config.ring_count)
        .map(|i| Ring::build(profile, RingParams::for_index(i, config)))
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/ring.rs"]
mod tests;
