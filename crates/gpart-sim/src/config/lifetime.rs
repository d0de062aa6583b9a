//! Modules evaluated against each particle's normalized age

use gpart_curves::{Gradient, MinMaxCurve};

use super::SimulationSpace;

/// Sets velocity directly from per-axis curves
///
/// The curves overwrite the particle velocity every frame rather than adding
/// to it. Only `SimulationSpace::Local` is applied.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct VelocityOverLifetimeModule {
    pub enabled: bool,
    pub x: MinMaxCurve,
    pub y: MinMaxCurve,
    pub z: MinMaxCurve,
    pub space: SimulationSpace,
}

/// Caps particle speed, removing `dampen` of the excess each frame
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LimitVelocityOverLifetimeModule {
    pub enabled: bool,
    /// Speed limit when `separate_axes` is off
    pub limit: MinMaxCurve,
    /// Fraction of the excess speed removed per frame, `0.0..=1.0`
    pub dampen: f32,
    pub separate_axes: bool,
    pub limit_x: MinMaxCurve,
    pub limit_y: MinMaxCurve,
    pub limit_z: MinMaxCurve,
}

impl Default for LimitVelocityOverLifetimeModule {
    fn default() -> Self {
        Self {
            enabled: false,
            limit: MinMaxCurve::constant(1.0),
            dampen: 0.5,
            separate_axes: false,
            limit_x: MinMaxCurve::constant(1.0),
            limit_y: MinMaxCurve::constant(1.0),
            limit_z: MinMaxCurve::constant(1.0),
        }
    }
}

/// Per-axis acceleration added to velocity
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ForceOverLifetimeModule {
    pub enabled: bool,
    pub x: MinMaxCurve,
    pub y: MinMaxCurve,
    pub z: MinMaxCurve,
    pub space: SimulationSpace,
    /// Draw a fresh random value every frame instead of the particle's own
    pub randomized: bool,
}

/// Replaces particle color with a gradient sample
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ColorOverLifetimeModule {
    pub enabled: bool,
    pub gradient: Gradient,
}

/// Scales the start size by a curve
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SizeOverLifetimeModule {
    pub enabled: bool,
    /// Multiplier applied to the start size
    pub size: MinMaxCurve,
    pub separate_axes: bool,
    pub x: MinMaxCurve,
    pub y: MinMaxCurve,
    pub z: MinMaxCurve,
}

impl Default for SizeOverLifetimeModule {
    fn default() -> Self {
        Self {
            enabled: false,
            size: MinMaxCurve::constant(1.0),
            separate_axes: false,
            x: MinMaxCurve::constant(1.0),
            y: MinMaxCurve::constant(1.0),
            z: MinMaxCurve::constant(1.0),
        }
    }
}

/// Angular velocity in degrees per second
///
/// Particles carry a single rotation angle, driven by the `z` curve.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RotationOverLifetimeModule {
    pub enabled: bool,
    pub x: MinMaxCurve,
    pub y: MinMaxCurve,
    pub z: MinMaxCurve,
    pub separate_axes: bool,
}
