//! Color gradients with independently keyed alpha

use crate::bake_positions;
use crate::color::{Color, Lerp};
use crate::keys::{Bracket, TimedKey, find_bracket};

/// RGB key of a gradient
///
/// Only the red, green and blue channels of `color` are used; alpha comes
/// from the gradient's alpha keys.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GradientColorKey {
    pub color: Color,
    pub time: f32,
}

impl GradientColorKey {
    pub const fn new(color: Color, time: f32) -> Self {
        Self { color, time }
    }
}

impl TimedKey for GradientColorKey {
    fn time(&self) -> f32 {
        self.time
    }
}

/// Alpha key of a gradient
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GradientAlphaKey {
    pub alpha: f32,
    pub time: f32,
}

impl GradientAlphaKey {
    pub const fn new(alpha: f32, time: f32) -> Self {
        Self { alpha, time }
    }
}

impl Default for GradientAlphaKey {
    fn default() -> Self {
        Self::new(1.0, 0.0)
    }
}

impl TimedKey for GradientAlphaKey {
    fn time(&self) -> f32 {
        self.time
    }
}

/// Piecewise-linear color over normalized time
///
/// Color and alpha are looked up independently and composed. No color keys
/// means white, no alpha keys means fully opaque.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Gradient {
    pub color_keys: Vec<GradientColorKey>,
    pub alpha_keys: Vec<GradientAlphaKey>,
}

impl Gradient {
    /// Create a gradient from color and alpha keys
    pub fn new(color_keys: Vec<GradientColorKey>, alpha_keys: Vec<GradientAlphaKey>) -> Self {
        Self {
            color_keys,
            alpha_keys,
        }
    }

    /// Gradient that is `color` everywhere
    pub fn solid(color: Color) -> Self {
        Self::new(
            vec![GradientColorKey::new(color, 0.0)],
            vec![GradientAlphaKey::new(color.a, 0.0)],
        )
    }

    /// Linear blend from `start` at `t = 0` to `end` at `t = 1`
    pub fn two_color(start: Color, end: Color) -> Self {
        Self::new(
            vec![
                GradientColorKey::new(start, 0.0),
                GradientColorKey::new(end, 1.0),
            ],
            vec![
                GradientAlphaKey::new(start.a, 0.0),
                GradientAlphaKey::new(end.a, 1.0),
            ],
        )
    }

    /// Evaluate the gradient at `t`, clamped to `[0, 1]`
    pub fn evaluate(&self, t: f32) -> Color {
        let rgb = match find_bracket(&self.color_keys, t) {
            Bracket::Empty => Color::WHITE,
            Bracket::Key(key) => key.color,
            Bracket::Between { from, to, u, .. } => from.color.lerp(&to.color, u),
        };

        let alpha = match find_bracket(&self.alpha_keys, t) {
            Bracket::Empty => 1.0,
            Bracket::Key(key) => key.alpha,
            Bracket::Between { from, to, u, .. } => from.alpha.lerp(&to.alpha, u),
        };

        rgb.with_alpha(alpha)
    }

    /// Sample the gradient into a lookup table of `resolution` colors
    pub fn bake(&self, resolution: usize) -> Vec<Color> {
        bake_positions(resolution).map(|t| self.evaluate(t)).collect()
    }
}
