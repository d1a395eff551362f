use crate::{foundation::core::sample_angle, wave::model::WaveBundle};

/// Interference sampled at `resolution` equally spaced angles.
///
/// Computed once per cycle and shared by every ring, so all rings carry the
/// same wobble at different radius, scale and offset.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RadialProfile {
    displacements: Vec<f64>,
}

impl RadialProfile {
    /// Sample `bundle` at `angle_i = i · 2π/resolution` for `i` in `0..resolution`.
    pub fn sample(resolution: usize, bundle: &WaveBundle) -> Self {
        let displacements = (0..resolution)
            .map(|i| bundle.interference(sample_angle(i, resolution)))
            .collect();
        Self { displacements }
    }

    /// Wrap precomputed displacements.
    pub fn from_displacements(displacements: Vec<f64>) -> Self {
        Self { displacements }
    }

    /// Number of angular samples.
    pub fn resolution(&self) -> usize {
        self.displacements.len()
    }

    /// Displacements in angle order.
    pub fn displacements(&self) -> &[f64] {
        &self.displacements
    }

    /// Angle of sample `i`.
    pub fn angle(&self, i: usize) -> f64 {
        sample_angle(i, self.resolution())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/wave/profile.rs"]
mod tests;
