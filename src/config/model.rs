use crate::foundation::error::{PenumbraError, PenumbraResult};

/// Fixed `(amplitude, frequency)` pair for one wave of the bundle.
///
/// The phase is drawn fresh every cycle, so it is not part of the configuration.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct WaveSlot {
    /// Peak displacement in length units.
    pub amplitude: f64,
    /// Cycles per full turn. Must be integer-valued.
    pub frequency: f64,
}

impl WaveSlot {
    /// Build a slot.
    pub const fn new(amplitude: f64, frequency: f64) -> Self {
        Self {
            amplitude,
            frequency,
        }
    }
}

/// Which half of the ring set becomes tracers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TracerBand {
    /// Rings `N/2..N`, innermost first.
    Outer,
    /// Rings `N - N/2 - 1` down to `0`, outermost first.
    Inner,
}

/// Geometric and timing constants for the ring animation.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PenumbraConfig {
    /// Number of rings per cycle.
    pub ring_count: usize,
    /// Angular samples per ring.
    pub resolution: usize,
    /// Seconds per cycle.
    pub loop_duration: f64,
    /// Radius of ring 0.
    pub base_radius: f64,
    /// Wave bundle slots.
    pub waves: Vec<WaveSlot>,
    /// `scale_i = i² * scale_step`.
    pub scale_step: f64,
    /// `translation_i = (0, i² + translation_linear * i)`.
    pub translation_linear: f64,
    /// Stagger offset in the tracer `stayOn` formula.
    pub tracer_offset: f64,
    /// Trailing tracers dropped from the band.
    pub tracer_drop: usize,
    /// Ring half used for tracers.
    pub tracer_band: TracerBand,
    /// Keep every n-th keyframe of the morph sequence.
    pub keyframe_stride: usize,
    /// Rebuild on every loop instead of playing a single cycle forever.
    pub repeat: bool,
}

impl Default for PenumbraConfig {
    fn default() -> Self {
        Self::looping()
    }
}

impl PenumbraConfig {
    /// The regenerating, double-buffered animation.
    pub fn looping() -> Self {
        Self {
            ring_count: 20,
            resolution: 9,
            loop_duration: 10.0,
            base_radius: 128.0,
            waves: vec![
                WaveSlot::new(6.0, 3.0),
                WaveSlot::new(4.0, 5.0),
                WaveSlot::new(2.0, 7.0),
            ],
            scale_step: 0.09,
            translation_linear: 1.0,
            tracer_offset: 4.0 / 3.0,
            tracer_drop: 2,
            tracer_band: TracerBand::Outer,
            keyframe_stride: 1,
            repeat: true,
        }
    }

    /// One cycle generated once and played indefinitely.
    pub fn single_shot() -> Self {
        Self {
            translation_linear: 0.0,
            tracer_offset: 0.5,
            tracer_drop: 3,
            tracer_band: TracerBand::Inner,
            repeat: false,
            ..Self::looping()
        }
    }

    /// Parse a JSON document and validate it. Missing fields take defaults.
    pub fn from_json_str(s: &str) -> PenumbraResult<Self> {
        let config: Self = serde_json::from_str(s)
            .map_err(|e| PenumbraError::serde(format!("parse config JSON: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Rings in the tracer band: the larger half when `ring_count` is odd.
    pub fn tracer_band_len(&self) -> usize {
        self.ring_count - self.ring_count / 2
    }

    /// Number of tracers one cycle produces.
    pub fn tracer_count(&self) -> usize {
        self.tracer_band_len().saturating_sub(self.tracer_drop)
    }

    /// Reject constants that leave the spline window, ring set or timing undefined.
    pub fn validate(&self) -> PenumbraResult<()> {
        if self.resolution < 5 {
            return Err(PenumbraError::invalid_configuration(format!(
                "resolution must be >= 5 (got {})",
                self.resolution
            )));
        }
        if self.ring_count < 1 {
            return Err(PenumbraError::invalid_configuration(
                "ring_count must be >= 1",
            ));
        }
        if !self.loop_duration.is_finite() || self.loop_duration <= 0.0 {
            return Err(PenumbraError::invalid_configuration(
                "loop_duration must be finite and > 0",
            ));
        }
        if !self.base_radius.is_finite() {
            return Err(PenumbraError::invalid_configuration(
                "base_radius must be finite",
            ));
        }
        if !self.scale_step.is_finite() || !self.translation_linear.is_finite() {
            return Err(PenumbraError::invalid_configuration(
                "scale_step and translation_linear must be finite",
            ));
        }
        if self.waves.is_empty() {
            return Err(PenumbraError::invalid_configuration(
                "waves must contain at least one slot",
            ));
        }
        for (k, slot) in self.waves.iter().enumerate() {
            if !slot.amplitude.is_finite() {
                return Err(PenumbraError::invalid_configuration(format!(
                    "wave slot {k} amplitude must be finite"
                )));
            }
            // Integer frequencies keep the profile seamless at angle 0 / 2π.
            if !slot.frequency.is_finite() || slot.frequency.fract() != 0.0 {
                return Err(PenumbraError::invalid_configuration(format!(
                    "wave slot {k} frequency must be an integer (got {})",
                    slot.frequency
                )));
            }
        }
        if self.keyframe_stride == 0 {
            return Err(PenumbraError::invalid_configuration(
                "keyframe_stride must be >= 1",
            ));
        }
        if !self.tracer_offset.is_finite() || self.tracer_offset < 0.0 {
            return Err(PenumbraError::invalid_configuration(
                "tracer_offset must be finite and >= 0",
            ));
        }
        if self.tracer_offset >= self.tracer_drop as f64 && self.tracer_count() > 0 {
            return Err(PenumbraError::invalid_configuration(format!(
                "tracer_offset ({}) must be < tracer_drop ({}) to keep tracer windows inside the loop",
                self.tracer_offset, self.tracer_drop
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/model.rs"]
mod tests;
