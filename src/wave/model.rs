use crate::{
    config::model::WaveSlot,
    foundation::{core::TAU, rng::RandomSource},
};

/// One sinusoidal contributor to the radial wobble.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Wave {
    /// Peak displacement.
    pub amplitude: f64,
    /// Cycles per full turn.
    pub frequency: f64,
    /// Phase offset in radians.
    pub phase: f64,
}

impl Wave {
    /// Build a wave.
    pub const fn new(amplitude: f64, frequency: f64, phase: f64) -> Self {
        Self {
            amplitude,
            frequency,
            phase,
        }
    }

    /// Displacement of this wave alone at `angle` radians.
    pub fn sample(&self, angle: f64) -> f64 {
        self.amplitude * (self.frequency * angle + self.phase).sin()
    }
}

/// The waves superposed for one cycle.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct WaveBundle {
    /// Contributors, in slot order.
    pub waves: Vec<Wave>,
}

impl WaveBundle {
    /// Build a bundle with pinned phases.
    pub fn new(waves: Vec<Wave>) -> Self {
        Self { waves }
    }

    /// Draw a fresh phase in `[0, 2π)` for every slot, independently.
    pub fn generate(slots: &[WaveSlot], rng: &mut impl RandomSource) -> Self {
        let waves = slots
            .iter()
            .map(|slot| Wave::new(slot.amplitude, slot.frequency, TAU * rng.next_f64_01()))
            .collect();
        Self { waves }
    }

    /// `Σ amplitude_k · sin(frequency_k · angle + phase_k)`.
    pub fn interference(&self, angle: f64) -> f64 {
        self.waves.iter().map(|w| w.sample(angle)).sum()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/wave/model.rs"]
mod tests;
