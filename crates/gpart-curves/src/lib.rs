//! Curve and gradient primitives for data-driven particle effects.
//!
//! Everything here evaluates over a normalized time axis `[0, 1]` and never
//! fails: empty, single-key and unsorted inputs resolve to well defined
//! fallback values so the evaluators can sit inside a per-frame loop.
//!
//! - [`AnimationCurve`]: keyframes blended with cubic Hermite interpolation
//! - [`MinMaxCurve`]: constant, curve, or randomized blend between two bounds
//! - [`Gradient`]: piecewise-linear RGB with independently keyed alpha
//!
//! # Examples
//!
//! ```
//! use gpart_curves::{AnimationCurve, Keyframe, MinMaxCurve};
//!
//! let fade = AnimationCurve::linear(1.0, 0.0);
//! assert!((fade.evaluate(0.5) - 0.5).abs() < 1e-6);
//!
//! let speed = MinMaxCurve::random_between(2.0, 4.0);
//! assert_eq!(speed.evaluate(0.0, 0.5), 3.0);
//!
//! let bump = AnimationCurve::new(vec![Keyframe::new(0.0, 0.0), Keyframe::new(1.0, 2.0)]);
//! assert_eq!(bump.evaluate(5.0), 2.0);
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod color;
pub mod curve;
pub mod gradient;
pub mod keys;
pub mod min_max;

pub use color::{Color, Lerp};
pub use curve::{AnimationCurve, Keyframe, hermite};
pub use gradient::{Gradient, GradientAlphaKey, GradientColorKey};
pub use keys::{Bracket, DEGENERATE_SPAN, TimedKey, find_bracket};
pub use min_max::{CurveMode, MinMaxCurve};

/// Sample count used when baking curves into lookup tables
pub const DEFAULT_BAKE_RESOLUTION: usize = 256;

/// Normalized sample positions for a lookup table of `resolution` entries
///
/// Samples are evenly spaced and include both ends of `[0, 1]`. A resolution
/// of one samples only `t = 0`.
pub(crate) fn bake_positions(resolution: usize) -> impl Iterator<Item = f32> {
    let last = resolution.saturating_sub(1).max(1) as f32;
    (0..resolution).map(move |i| i as f32 / last)
}

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
