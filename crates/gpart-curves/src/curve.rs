//! Keyframed animation curves with Hermite interpolation

use crate::bake_positions;
use crate::keys::{Bracket, TimedKey, find_bracket};

/// A single curve key
///
/// Tangents are slopes (value per unit of normalized time), so a key pair
/// whose tangents equal the straight-line slope between them interpolates
/// linearly.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Keyframe {
    /// Position on the normalized time axis
    pub time: f32,
    /// Curve value at `time`
    pub value: f32,
    /// Incoming slope
    pub in_tangent: f32,
    /// Outgoing slope
    pub out_tangent: f32,
}

impl Keyframe {
    /// Create a key with flat tangents
    pub const fn new(time: f32, value: f32) -> Self {
        Self {
            time,
            value,
            in_tangent: 0.0,
            out_tangent: 0.0,
        }
    }

    /// Create a key with explicit tangents
    pub const fn with_tangents(time: f32, value: f32, in_tangent: f32, out_tangent: f32) -> Self {
        Self {
            time,
            value,
            in_tangent,
            out_tangent,
        }
    }
}

impl TimedKey for Keyframe {
    fn time(&self) -> f32 {
        self.time
    }
}

/// Cubic Hermite blend of two values and their span-scaled tangents
///
/// `u` is the local position inside the span, `m0`/`m1` are the outgoing
/// and incoming tangents already multiplied by the span length.
#[inline]
pub fn hermite(p0: f32, m0: f32, p1: f32, m1: f32, u: f32) -> f32 {
    let u2 = u * u;
    let u3 = u2 * u;

    let h00 = 2.0 * u3 - 3.0 * u2 + 1.0;
    let h10 = u3 - 2.0 * u2 + u;
    let h01 = -2.0 * u3 + 3.0 * u2;
    let h11 = u3 - u2;

    h00 * p0 + h10 * m0 + h01 * p1 + h11 * m1
}

/// 1-D function of normalized time defined by ordered keyframes
///
/// Evaluation outside the keyed range clamps to the boundary key, a
/// single key is constant, and an empty curve is zero.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnimationCurve {
    /// Keys, expected in ascending time order
    pub keys: Vec<Keyframe>,
}

impl AnimationCurve {
    /// Create a curve from keys
    pub fn new(keys: Vec<Keyframe>) -> Self {
        Self { keys }
    }

    /// Curve with a single key, constant everywhere
    pub fn constant(value: f32) -> Self {
        Self::new(vec![Keyframe::new(0.0, value)])
    }

    /// Straight line from `from` at `t = 0` to `to` at `t = 1`
    pub fn linear(from: f32, to: f32) -> Self {
        let slope = to - from;
        Self::new(vec![
            Keyframe::with_tangents(0.0, from, slope, slope),
            Keyframe::with_tangents(1.0, to, slope, slope),
        ])
    }

    /// Number of keys
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Whether the curve has no keys
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Evaluate the curve at `t`, clamped to `[0, 1]`
    pub fn evaluate(&self, t: f32) -> f32 {
        match find_bracket(&self.keys, t) {
            Bracket::Empty => 0.0,
            Bracket::Key(key) => key.value,
            Bracket::Between { from, to, span, u } => hermite(
                from.value,
                from.out_tangent * span,
                to.value,
                to.in_tangent * span,
                u,
            ),
        }
    }

    /// Sample the curve into a lookup table of `resolution` evenly spaced values
    pub fn bake(&self, resolution: usize) -> Vec<f32> {
        bake_positions(resolution).map(|t| self.evaluate(t)).collect()
    }
}

impl From<Vec<Keyframe>> for AnimationCurve {
    fn from(keys: Vec<Keyframe>) -> Self {
        Self::new(keys)
    }
}
