use crate::{
    animation::track::ValueTrack,
    config::model::{PenumbraConfig, TracerBand},
    foundation::{error::PenumbraResult, rng::RandomSource},
    geometry::{
        fit::fit_closed_curve,
        path::PathDesc,
        ring::{Ring, build_rings},
    },
    wave::{model::WaveBundle, profile::RadialProfile},
};

/// Opacity of the morphing path over one loop: fades in by the middle.
pub const MORPH_OPACITY: [f64; 5] = [0.0, 0.0, 1.0, 1.0, 1.0];
/// Tracer visibility pulse, starting at its `stay_on`.
pub const TRACER_PULSE: [f64; 5] = [1.0, 1.0, 0.0, 0.0, 0.0];
/// Core circle opacity, starting one loop in.
pub const CORE_OPACITY: [f64; 5] = [1.0, 0.0, 0.0, 0.5, 0.2];

/// A static ring echo with a timed visibility pulse.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Tracer {
    /// Ring the curve was fitted from.
    pub ring_index: usize,
    /// Fitted curve, never animated.
    pub path: PathDesc,
    /// Seconds into the loop at which the pulse starts.
    pub stay_on: f64,
    /// Opacity track; the tracer is invisible before `stay_on`.
    pub visibility: ValueTrack<f64>,
}

impl Tracer {
    /// Opacity at `t` seconds since the cycle became visible.
    pub fn opacity_at(&self, t: f64) -> f64 {
        self.visibility.sample(t).unwrap_or(0.0)
    }
}

/// Everything one loop period shows, built in one burst and then left untouched.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Cycle {
    /// Position in the session, starting at 0.
    pub index: u64,
    /// Waves drawn for this cycle.
    pub waves: WaveBundle,
    /// Shared angular profile.
    pub profile: RadialProfile,
    /// Point rings, innermost first.
    pub rings: Vec<Ring>,
    /// Fitted curve per ring, innermost first.
    pub curves: Vec<PathDesc>,
    /// Morphing path: outermost ring shape down to the innermost.
    pub keyframes: ValueTrack<PathDesc>,
    /// Opacity of the morphing path.
    pub morph_opacity: ValueTrack<f64>,
    /// Opacity of the core circle.
    pub core_opacity: ValueTrack<f64>,
    /// Staggered ring echoes.
    pub tracers: Vec<Tracer>,
}

/// Draw a fresh wave bundle from `rng` and build the cycle around it.
pub fn build_cycle(
    config: &PenumbraConfig,
    index: u64,
    rng: &mut impl RandomSource,
) -> PenumbraResult<Cycle> {
    let waves = WaveBundle::generate(&config.waves, rng);
    build_cycle_with_waves(config, index, waves)
}

/// Build a cycle from a pinned wave bundle. Bit-reproducible for fixed inputs.
#[tracing::instrument(skip(config, waves))]
pub fn build_cycle_with_waves(
    config: &PenumbraConfig,
    index: u64,
    waves: WaveBundle,
) -> PenumbraResult<Cycle> {
    config.validate()?;

    let profile = RadialProfile::sample(config.resolution, &waves);
    let rings = build_rings(&profile, config);
    let curves = rings
        .iter()
        .map(|ring| fit_closed_curve(&ring.points))
        .collect::<PenumbraResult<Vec<_>>>()?;

    let dur = config.loop_duration;
    let keyframes = ValueTrack::new(
        keyframe_paths(&curves, config.keyframe_stride),
        0.0,
        dur,
        true,
    )?;
    let morph_opacity = ValueTrack::new(MORPH_OPACITY.to_vec(), 0.0, dur, true)?;
    let core_opacity = ValueTrack::new(CORE_OPACITY.to_vec(), dur, dur, true)?;
    let tracers = build_tracers(&curves, config)?;

    tracing::debug!(
        cycle = index,
        keyframes = keyframes.values().len(),
        tracers = tracers.len(),
        "built cycle"
    );

    Ok(Cycle {
        index,
        waves,
        profile,
        rings,
        curves,
        keyframes,
        morph_opacity,
        core_opacity,
        tracers,
    })
}

/// Curves from outermost to innermost, keeping every `stride`-th.
///
/// The innermost curve always closes the sequence so the loop lands on the
/// same shape every cycle.
pub fn keyframe_paths(curves: &[PathDesc], stride: usize) -> Vec<PathDesc> {
    let stride = stride.max(1);
    let mut out: Vec<PathDesc> = curves.iter().rev().step_by(stride).cloned().collect();
    if curves.len().saturating_sub(1) % stride != 0
        && let Some(innermost) = curves.first()
    {
        out.push(innermost.clone());
    }
    out
}

/// `duration/2 + ((i + offset) / (band_len - 1)) · duration/2`.
pub fn stay_on(i: usize, band_len: usize, offset: f64, duration: f64) -> f64 {
    let half = duration / 2.0;
    let denom = band_len.saturating_sub(1).max(1) as f64;
    half + ((i as f64 + offset) / denom) * half
}

/// Ring indices feeding the tracers, in stagger order.
pub fn tracer_ring_indices(config: &PenumbraConfig) -> Vec<usize> {
    let n = config.ring_count;
    let count = config.tracer_count();
    match config.tracer_band {
        TracerBand::Outer => (n / 2..n).take(count).collect(),
        TracerBand::Inner => (0..config.tracer_band_len()).rev().take(count).collect(),
    }
}

/// One tracer per selected ring, pulses staggered across the second half of the loop.
pub fn build_tracers(curves: &[PathDesc], config: &PenumbraConfig) -> PenumbraResult<Vec<Tracer>> {
    let band_len = config.tracer_band_len();
    let pulse = ValueTrack::new(TRACER_PULSE.to_vec(), 0.0, config.loop_duration, true)?;
    let tracers = tracer_ring_indices(config)
        .into_iter()
        .enumerate()
        .filter_map(|(i, ring_index)| curves.get(ring_index).map(|path| (i, ring_index, path)))
        .map(|(i, ring_index, path)| {
            let start = stay_on(i, band_len, config.tracer_offset, config.loop_duration);
            Tracer {
                ring_index,
                path: path.clone(),
                stay_on: start,
                visibility: pulse.clone().with_begin(start),
            }
        })
        .collect();
    Ok(tracers)
}

#[cfg(test)]
#[path = "../../tests/unit/sequence/cycle.rs"]
mod tests;
