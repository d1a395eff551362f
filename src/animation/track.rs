use crate::{
    foundation::error::{PenumbraError, PenumbraResult},
    geometry::path::{PathCommand, PathDesc},
};

/// Linear interpolation between two values of the same shape.
pub trait Lerp: Sized {
    /// Value at `t` in `[0, 1]` between `a` and `b`.
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a + (b - a) * t
    }
}

impl Lerp for PathCommand {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        match (*a, *b) {
            (Self::MoveTo { to: ta }, Self::MoveTo { to: tb }) => Self::MoveTo {
                to: ta.lerp(tb, t),
            },
            (
                Self::CubicTo {
                    c1: a1,
                    c2: a2,
                    to: ta,
                },
                Self::CubicTo {
                    c1: b1,
                    c2: b2,
                    to: tb,
                },
            ) => Self::CubicTo {
                c1: a1.lerp(b1, t),
                c2: a2.lerp(b2, t),
                to: ta.lerp(tb, t),
            },
            // Mismatched commands cannot morph; hold the earlier one.
            _ => *a,
        }
    }
}

impl Lerp for PathDesc {
    /// Command-wise morph. Paths of different length hold `a`.
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        if a.commands().len() != b.commands().len() {
            return a.clone();
        }
        PathDesc::new(
            a.commands()
                .iter()
                .zip(b.commands())
                .map(|(ca, cb)| PathCommand::lerp(ca, cb, t))
                .collect(),
        )
    }
}

/// Values spread evenly over `dur` seconds, starting at `begin`.
///
/// Mirrors a declarative `<animate values=".." begin=".." dur="..">`: value `k`
/// of `n` sits at `k/(n-1) · dur`, values in between interpolate linearly.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ValueTrack<T> {
    values: Vec<T>,
    begin: f64,
    dur: f64,
    repeat: bool,
}

impl<T> ValueTrack<T>
where
    T: Lerp + Clone,
{
    /// Build a track. Needs at least one value and a positive, finite `dur`.
    pub fn new(values: Vec<T>, begin: f64, dur: f64, repeat: bool) -> PenumbraResult<Self> {
        if values.is_empty() {
            return Err(PenumbraError::invalid_configuration(
                "value track needs at least one value",
            ));
        }
        if !dur.is_finite() || dur <= 0.0 {
            return Err(PenumbraError::invalid_configuration(
                "value track dur must be finite and > 0",
            ));
        }
        if !begin.is_finite() {
            return Err(PenumbraError::invalid_configuration(
                "value track begin must be finite",
            ));
        }
        Ok(Self {
            values,
            begin,
            dur,
            repeat,
        })
    }

    /// Values in order.
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Start offset in seconds.
    pub fn begin(&self) -> f64 {
        self.begin
    }

    /// Length of one pass in seconds.
    pub fn dur(&self) -> f64 {
        self.dur
    }

    /// Whether the track restarts after each pass.
    pub fn repeats(&self) -> bool {
        self.repeat
    }

    /// Time of value `k` within one pass.
    pub fn key_time(&self, k: usize) -> f64 {
        if self.values.len() < 2 {
            return 0.0;
        }
        (k as f64 / (self.values.len() - 1) as f64) * self.dur
    }

    /// Value at `t` seconds, or `None` before `begin`.
    pub fn sample(&self, t: f64) -> Option<T> {
        if t < self.begin {
            return None;
        }
        let elapsed = t - self.begin;
        let local = if self.repeat {
            elapsed.rem_euclid(self.dur)
        } else if elapsed >= self.dur {
            return self.values.last().cloned();
        } else {
            elapsed
        };

        let n = self.values.len();
        if n == 1 {
            return Some(self.values[0].clone());
        }
        let pos = (local / self.dur) * (n - 1) as f64;
        let idx = (pos.floor() as usize).min(n - 2);
        let frac = (pos - idx as f64).clamp(0.0, 1.0);
        Some(T::lerp(&self.values[idx], &self.values[idx + 1], frac))
    }

    /// Same values moved to a new `begin`.
    pub fn with_begin(mut self, begin: f64) -> Self {
        self.begin = begin;
        self
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/track.rs"]
mod tests;
