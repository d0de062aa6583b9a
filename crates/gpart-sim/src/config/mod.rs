//! Particle system configuration
//!
//! The configuration is a tree of modules, each with an `enabled` flag and
//! its own parameters. It is plain data: an external loader fills it in,
//! the simulator copies it at creation and never mutates it afterwards.
//!
//! Defaults follow the usual authoring-tool defaults so a configuration can
//! be written with struct update syntax:
//!
//! ```
//! use gpart_sim::config::{EmissionModule, MainModule, ParticleSystemData};
//! use gpart_curves::MinMaxCurve;
//!
//! let data = ParticleSystemData {
//!     name: "sparks".to_string(),
//!     main: MainModule {
//!         max_particles: 64,
//!         looping: false,
//!         ..Default::default()
//!     },
//!     emission: EmissionModule {
//!         rate_over_time: MinMaxCurve::constant(40.0),
//!         ..Default::default()
//!     },
//!     ..Default::default()
//! };
//! assert!(data.shape.enabled);
//! ```

mod emission;
mod extras;
mod lifetime;
mod main_module;
mod shape;

pub use emission::{Burst, EmissionModule};
pub use extras::{
    AnimationMode, AnimationType, CollisionMode, CollisionModule, CollisionType, NoiseModule,
    RenderMode, RendererModule, SortMode, SubEmitter, SubEmitterType,
    TextureSheetAnimationModule,
};
pub use lifetime::{
    ColorOverLifetimeModule, ForceOverLifetimeModule, LimitVelocityOverLifetimeModule,
    RotationOverLifetimeModule, SizeOverLifetimeModule, VelocityOverLifetimeModule,
};
pub use main_module::{MainModule, SimulationSpace};
pub use shape::{ArcMode, ShapeModule, ShapeType};

/// Complete particle system description
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ParticleSystemData {
    /// Effect name, used for logging and registry lookups
    pub name: String,
    /// Exporter format version
    pub version: String,

    pub main: MainModule,
    pub emission: EmissionModule,
    pub shape: ShapeModule,
    pub velocity_over_lifetime: VelocityOverLifetimeModule,
    pub limit_velocity_over_lifetime: LimitVelocityOverLifetimeModule,
    pub force_over_lifetime: ForceOverLifetimeModule,
    pub color_over_lifetime: ColorOverLifetimeModule,
    pub size_over_lifetime: SizeOverLifetimeModule,
    pub rotation_over_lifetime: RotationOverLifetimeModule,
    pub noise: NoiseModule,
    pub collision: CollisionModule,
    pub texture_sheet_animation: TextureSheetAnimationModule,
    pub renderer: RendererModule,

    /// Effects spawned in response to particle events
    pub sub_emitters: Vec<SubEmitter>,
}

impl Default for ParticleSystemData {
    fn default() -> Self {
        Self {
            name: String::new(),
            version: "1.0".to_string(),
            main: MainModule::default(),
            emission: EmissionModule::default(),
            shape: ShapeModule::default(),
            velocity_over_lifetime: VelocityOverLifetimeModule::default(),
            limit_velocity_over_lifetime: LimitVelocityOverLifetimeModule::default(),
            force_over_lifetime: ForceOverLifetimeModule::default(),
            color_over_lifetime: ColorOverLifetimeModule::default(),
            size_over_lifetime: SizeOverLifetimeModule::default(),
            rotation_over_lifetime: RotationOverLifetimeModule::default(),
            noise: NoiseModule::default(),
            collision: CollisionModule::default(),
            texture_sheet_animation: TextureSheetAnimationModule::default(),
            renderer: RendererModule::default(),
            sub_emitters: Vec::new(),
        }
    }
}
