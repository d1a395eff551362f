use crate::{
    config::model::PenumbraConfig,
    foundation::{
        error::{PenumbraError, PenumbraResult},
        rng::RandomSource,
    },
    geometry::path::PathDesc,
    sequence::cycle::{Cycle, build_cycle},
};

/// Visible state of one instant, ready for a surface to draw.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct FrameSnapshot {
    /// Cycle being shown.
    pub cycle: u64,
    /// Seconds since that cycle became visible.
    pub time: f64,
    /// Seconds since the session started, assuming one cycle per loop period.
    pub clock: f64,
    /// Current shape of the morphing path.
    pub morph_path: PathDesc,
    /// Opacity of the morphing path.
    pub morph_opacity: f64,
    /// Radius of the core circle.
    pub core_radius: f64,
    /// Core circle opacity on the session clock; 0 until its animation begins.
    pub core_opacity: f64,
    /// Tracer curves with their opacity at `time`.
    pub tracers: Vec<(PathDesc, f64)>,
}

/// Drives the animation one loop period at a time.
///
/// Two cycle slots form a double buffer: the next cycle is built into the
/// hidden slot and becomes visible only once complete.
pub struct PenumbraSession<R> {
    config: PenumbraConfig,
    rng: R,
    cycle_index: u64,
    current_buffer: usize,
    buffers: [Option<Cycle>; 2],
}

impl<R: RandomSource> PenumbraSession<R> {
    /// Validate `config` and build cycle 0 into slot 0.
    #[tracing::instrument(skip(config, rng))]
    pub fn new(config: PenumbraConfig, mut rng: R) -> PenumbraResult<Self> {
        config.validate()?;
        let first = build_cycle(&config, 0, &mut rng)?;
        Ok(Self {
            config,
            rng,
            cycle_index: 0,
            current_buffer: 0,
            buffers: [Some(first), None],
        })
    }

    /// Constants the session was built with.
    pub fn config(&self) -> &PenumbraConfig {
        &self.config
    }

    /// Index of the visible cycle.
    pub fn cycle_index(&self) -> u64 {
        self.cycle_index
    }

    /// Slot holding the visible cycle.
    pub fn current_buffer(&self) -> usize {
        self.current_buffer
    }

    /// Period of the external scheduler tick.
    pub fn loop_duration(&self) -> f64 {
        self.config.loop_duration
    }

    /// Visible cycle.
    pub fn current_cycle(&self) -> PenumbraResult<&Cycle> {
        self.buffers[self.current_buffer]
            .as_ref()
            .ok_or_else(|| PenumbraError::render("visible buffer is empty"))
    }

    /// Cycle shown before the last swap, if any.
    pub fn previous_cycle(&self) -> Option<&Cycle> {
        self.buffers[1 - self.current_buffer].as_ref()
    }

    /// Scheduler tick: regenerate into the hidden slot, then swap.
    ///
    /// Returns `false` and keeps the visible cycle when the session does not repeat.
    #[tracing::instrument(skip(self), fields(cycle = self.cycle_index))]
    pub fn advance_cycle(&mut self) -> PenumbraResult<bool> {
        if !self.config.repeat {
            return Ok(false);
        }

        let next_index = self.cycle_index + 1;
        let hidden = 1 - self.current_buffer;
        let next = build_cycle(&self.config, next_index, &mut self.rng)?;
        self.buffers[hidden] = Some(next);

        self.current_buffer = hidden;
        self.cycle_index = next_index;
        tracing::debug!(cycle = next_index, buffer = hidden, "swapped tracer group");
        Ok(true)
    }

    /// Evaluate the visible cycle `t` seconds after it became visible.
    pub fn snapshot(&self, t: f64) -> PenumbraResult<FrameSnapshot> {
        snapshot_cycle(self.current_cycle()?, t)
    }
}

/// Evaluate every track of `cycle` at `t`.
///
/// Cycle tracks run on `t`. The core circle belongs to the whole document, so
/// it runs on the session clock `index · loop_duration + t`.
pub fn snapshot_cycle(cycle: &Cycle, t: f64) -> PenumbraResult<FrameSnapshot> {
    if !t.is_finite() || t < 0.0 {
        return Err(PenumbraError::render(format!(
            "snapshot time must be finite and >= 0 (got {t})"
        )));
    }
    let morph_path = cycle
        .keyframes
        .sample(t)
        .ok_or_else(|| PenumbraError::render("morph keyframes have not started"))?;
    let clock = cycle.index as f64 * cycle.keyframes.dur() + t;
    let core_radius = cycle
        .rings
        .first()
        .map(|ring| ring.params.base_radius)
        .ok_or_else(|| PenumbraError::render("cycle has no rings"))?;
    Ok(FrameSnapshot {
        cycle: cycle.index,
        time: t,
        clock,
        morph_path,
        morph_opacity: cycle.morph_opacity.sample(t).unwrap_or(0.0),
        core_radius,
        core_opacity: cycle.core_opacity.sample(clock).unwrap_or(0.0),
        tracers: cycle
            .tracers
            .iter()
            .map(|tr| (tr.path.clone(), tr.opacity_at(t)))
            .collect(),
    })
}

#[cfg(test)]
#[path = "../../tests/unit/sequence/session.rs"]
mod tests;
