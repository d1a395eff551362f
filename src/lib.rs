//! Penumbra generates families of smooth, wobbly concentric rings and sequences
//! them into a seamless looping vector animation.
//!
//! # Pipeline overview
//!
//! 1. **Waves**: a bundle of sinusoids with fresh random phases (`WaveBundle`)
//! 2. **Profile**: interference sampled at equal angles, shared by every ring (`RadialProfile`)
//! 3. **Rings**: the profile scaled, grown and translated per ring index (`Ring`)
//! 4. **Fit**: each ring becomes a closed Catmull-Rom spline of cubic Beziers (`PathDesc`)
//! 5. **Sequence**: curves become morph keyframes and staggered tracers (`Cycle`),
//!    regenerated every loop by a double-buffered `PenumbraSession`
//!
//! The drawing surface is external: [`render`] serializes cycles to SVG and can
//! rasterize single instants for previews.
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic under a seed**: randomness comes only from an injected [`RandomSource`].
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod config;
mod foundation;
mod geometry;
mod sequence;
mod wave;

pub mod render;

pub use animation::track::{Lerp, ValueTrack};
pub use config::model::{PenumbraConfig, TracerBand, WaveSlot};
pub use foundation::core::{BezPath, CubicBez, Point, TAU, Vec2, polar, sample_angle};
pub use foundation::error::{PenumbraError, PenumbraResult};
pub use foundation::rng::{RandomSource, Rng64};
pub use geometry::fit::fit_closed_curve;
pub use geometry::path::{PathCommand, PathDesc};
pub use geometry::ring::{Ring, RingParams, build_rings};
pub use sequence::cycle::{
    CORE_OPACITY, Cycle, MORPH_OPACITY, TRACER_PULSE, Tracer, build_cycle, build_cycle_with_waves,
    build_tracers, keyframe_paths, stay_on, tracer_ring_indices,
};
pub use sequence::session::{FrameSnapshot, PenumbraSession, snapshot_cycle};
pub use wave::model::{Wave, WaveBundle};
pub use wave::profile::RadialProfile;
