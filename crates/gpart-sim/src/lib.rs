//! CPU particle simulation for data-driven effects.
//!
//! A [`ParticleSimulator`] owns a copy of a [`config::ParticleSystemData`]
//! and a fixed pool of [`Particle`] records. Each frame the host calls
//! [`ParticleSimulator::update`] with its delta time and hands the resulting
//! [`ParticleSnapshot`] to a renderer. An [`EffectRegistry`] keeps named
//! templates and the instances spawned from them.
//!
//! # Examples
//!
//! ```
//! use gpart_curves::MinMaxCurve;
//! use gpart_sim::ParticleSimulator;
//! use gpart_sim::config::{EmissionModule, MainModule, ParticleSystemData};
//!
//! let data = ParticleSystemData {
//!     main: MainModule {
//!         max_particles: 10,
//!         duration: 1.0,
//!         looping: false,
//!         ..Default::default()
//!     },
//!     emission: EmissionModule {
//!         rate_over_time: MinMaxCurve::constant(100.0),
//!         ..Default::default()
//!     },
//!     ..Default::default()
//! };
//!
//! let mut sim = ParticleSimulator::with_seed(data, 7)?;
//! sim.update(0.05);
//! assert_eq!(sim.snapshot().alive_count, 5);
//! # Ok::<(), gpart_sim::SimulationError>(())
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod config;
pub mod emission;
pub mod error;
pub mod particle;
pub mod registry;
pub mod rng;
pub mod shape;
pub mod simulator;

pub use error::{Result, SimulationError};
pub use particle::Particle;
pub use registry::{EffectInstance, EffectRegistry, InstanceId};
pub use rng::ParticleRng;
pub use simulator::{ParticleSimulator, ParticleSnapshot, SimulationSettings};

/// Downward acceleration in units per second squared
pub const GRAVITY: f32 = 9.81;

/// Largest delta time integrated by a single update, in seconds
pub const MAX_DELTA_TIME: f32 = 0.1;

/// Capacity above which simulator creation logs a performance warning
pub const HIGH_PARTICLE_COUNT: usize = 100_000;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
