//! Emission geometry
//!
//! Angles are drawn uniformly, not by solid angle, so cone and sphere
//! emission is denser towards the axis and the poles. Effects authored
//! against that distribution keep their look.

use std::f32::consts::{PI, TAU};

use glam::Vec3;

use crate::config::{ShapeModule, ShapeType};
use crate::rng::ParticleRng;

/// Emission-local spawn point and unit travel direction
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeSample {
    pub position: Vec3,
    pub direction: Vec3,
}

impl Default for ShapeSample {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            direction: Vec3::Z,
        }
    }
}

/// Unit vector from polar angle `phi` (measured from +Z) and azimuth `theta`
#[inline]
fn spherical(phi: f32, theta: f32) -> Vec3 {
    let (sin_phi, cos_phi) = phi.sin_cos();
    let (sin_theta, cos_theta) = theta.sin_cos();
    Vec3::new(sin_phi * cos_theta, sin_phi * sin_theta, cos_phi)
}

/// Sample a spawn point and direction from the shape module
///
/// A disabled module, or a shape type without a sampler, emits from the
/// origin along +Z. `shape.position` is added after sampling only when the
/// module is enabled.
pub fn sample_shape(shape: &ShapeModule, rng: &mut ParticleRng) -> ShapeSample {
    if !shape.enabled {
        return ShapeSample::default();
    }

    let mut sample = match shape.shape_type {
        ShapeType::Cone => {
            let radius = shape.radius * rng.unit();
            let theta = rng.range(0.0, TAU);
            let position = Vec3::new(radius * theta.cos(), radius * theta.sin(), 0.0);

            let half_angle = shape.angle.to_radians();
            let direction = spherical(rng.range(0.0, half_angle), rng.range(0.0, TAU));
            ShapeSample {
                position,
                direction,
            }
        }
        ShapeType::Sphere => {
            let theta = rng.range(0.0, TAU);
            let phi = rng.range(0.0, PI);
            let direction = spherical(phi, theta);
            ShapeSample {
                position: direction * shape.radius,
                direction,
            }
        }
        ShapeType::Box => {
            let position = Vec3::new(
                rng.range(-0.5, 0.5) * shape.scale.x,
                rng.range(-0.5, 0.5) * shape.scale.y,
                rng.range(-0.5, 0.5) * shape.scale.z,
            );
            ShapeSample {
                position,
                direction: Vec3::Z,
            }
        }
        ShapeType::Hemisphere
        | ShapeType::Circle
        | ShapeType::Edge
        | ShapeType::Rectangle => ShapeSample::default(),
    };

    sample.position += shape.position;
    sample
}
