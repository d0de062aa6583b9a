//! Individual particle record

use glam::Vec3;
use gpart_curves::Color;

/// A single slot in the particle pool
///
/// Records are never allocated per particle. The simulator owns a fixed array
/// of them and reinitializes a dead slot on spawn.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Particle {
    /// Emitter-local position
    pub position: Vec3,
    /// Velocity in units per second
    pub velocity: Vec3,
    pub color: Color,
    pub size: f32,
    /// Start size at `t = 0`, scaled by size over lifetime
    pub base_size: f32,
    /// Rotation in radians
    pub rotation: f32,
    /// Seconds since spawn
    pub age: f32,
    /// Total lifespan in seconds
    pub lifetime: f32,
    pub alive: bool,
    /// Random input for this particle's over-lifetime curve evaluations
    pub random_seed: f32,
}

impl Default for Particle {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            velocity: Vec3::ZERO,
            color: Color::WHITE,
            size: 1.0,
            base_size: 1.0,
            rotation: 0.0,
            age: 0.0,
            lifetime: 0.0,
            alive: false,
            random_seed: 0.0,
        }
    }
}

impl Particle {
    /// Check if the particle is still alive
    #[inline]
    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Get the age as a fraction of lifetime (0.0 to 1.0)
    #[inline]
    pub fn normalized_age(&self) -> f32 {
        if self.lifetime > 0.0 {
            (self.age / self.lifetime).clamp(0.0, 1.0)
        } else {
            1.0
        }
    }

    /// Advance age by `dt`, marking the particle dead once it reaches its lifetime
    ///
    /// Returns whether the particle is still alive.
    pub fn age_by(&mut self, dt: f32) -> bool {
        self.age += dt;
        if self.age >= self.lifetime {
            self.alive = false;
        }
        self.alive
    }

    pub(crate) fn kill(&mut self) {
        self.alive = false;
    }
}
