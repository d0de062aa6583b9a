//! Range curves: constants, curves, and randomized blends between bounds
//!
//! A [`MinMaxCurve`] never draws random numbers itself. The `random` argument
//! of [`MinMaxCurve::evaluate`] is supplied by the caller, so the same inputs
//! always give the same result.

use crate::bake_positions;
use crate::color::Lerp;
use crate::curve::AnimationCurve;

/// How a [`MinMaxCurve`] produces its value
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CurveMode {
    /// Fixed value
    Constant(f32),
    /// Value sampled from a curve
    Curve(AnimationCurve),
    /// Two bounds without a random draw; resolves to their midpoint
    TwoConstants { min: f32, max: f32 },
    /// Blend of two curves weighted by the caller's random value
    TwoCurves {
        min: AnimationCurve,
        max: AnimationCurve,
    },
    /// Random value between two bounds
    RandomBetweenTwoConstants { min: f32, max: f32 },
    /// Random blend between two curves
    RandomBetweenTwoCurves {
        min: AnimationCurve,
        max: AnimationCurve,
    },
}

impl Default for CurveMode {
    fn default() -> Self {
        Self::Constant(0.0)
    }
}

/// A scalar parameter that may be constant, curved over time, or randomized
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MinMaxCurve {
    /// Evaluation mode and its data
    pub mode: CurveMode,
    /// Scale applied to every evaluated value
    pub multiplier: f32,
}

impl Default for MinMaxCurve {
    fn default() -> Self {
        Self::constant(0.0)
    }
}

impl From<f32> for MinMaxCurve {
    fn from(value: f32) -> Self {
        Self::constant(value)
    }
}

impl MinMaxCurve {
    /// Create a range curve with a unit multiplier
    pub fn new(mode: CurveMode) -> Self {
        Self {
            mode,
            multiplier: 1.0,
        }
    }

    /// Fixed value
    pub fn constant(value: f32) -> Self {
        Self::new(CurveMode::Constant(value))
    }

    /// Value sampled from `curve`
    pub fn curve(curve: AnimationCurve) -> Self {
        Self::new(CurveMode::Curve(curve))
    }

    /// Midpoint of two bounds
    pub fn two_constants(min: f32, max: f32) -> Self {
        Self::new(CurveMode::TwoConstants { min, max })
    }

    /// Blend of two curves
    pub fn two_curves(min: AnimationCurve, max: AnimationCurve) -> Self {
        Self::new(CurveMode::TwoCurves { min, max })
    }

    /// Random value between two bounds
    pub fn random_between(min: f32, max: f32) -> Self {
        Self::new(CurveMode::RandomBetweenTwoConstants { min, max })
    }

    /// Random blend between two curves
    pub fn random_between_curves(min: AnimationCurve, max: AnimationCurve) -> Self {
        Self::new(CurveMode::RandomBetweenTwoCurves { min, max })
    }

    /// Replace the multiplier
    pub fn with_multiplier(mut self, multiplier: f32) -> Self {
        self.multiplier = multiplier;
        self
    }

    /// Whether evaluation depends on the random input
    pub fn uses_random(&self) -> bool {
        matches!(
            self.mode,
            CurveMode::TwoCurves { .. }
                | CurveMode::RandomBetweenTwoConstants { .. }
                | CurveMode::RandomBetweenTwoCurves { .. }
        )
    }

    /// Evaluate at normalized time `t` with a caller-supplied `random` in `[0, 1]`
    ///
    /// Curve modes clamp `t` to `[0, 1]`; constant modes ignore it. `random`
    /// only affects the two-curve and random-between modes.
    pub fn evaluate(&self, t: f32, random: f32) -> f32 {
        let value = match &self.mode {
            CurveMode::Constant(value) => *value,
            CurveMode::Curve(curve) => curve.evaluate(t),
            CurveMode::TwoConstants { min, max } => min.lerp(max, 0.5),
            CurveMode::RandomBetweenTwoConstants { min, max } => min.lerp(max, random),
            CurveMode::TwoCurves { min, max } | CurveMode::RandomBetweenTwoCurves { min, max } => {
                min.evaluate(t).lerp(&max.evaluate(t), random)
            }
        };

        value * self.multiplier
    }

    /// Sample into a lookup table using a fixed random input
    pub fn bake(&self, resolution: usize, random: f32) -> Vec<f32> {
        bake_positions(resolution)
            .map(|t| self.evaluate(t, random))
            .collect()
    }
}
