//! Modules carried in the configuration for renderers and tooling
//!
//! The simulator does not evaluate these. They travel with the
//! configuration so a renderer or a device-side implementation sees the
//! complete effect description.

use glam::Vec3;
use gpart_curves::MinMaxCurve;

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct NoiseModule {
    pub enabled: bool,
    pub strength: MinMaxCurve,
    pub frequency: f32,
    pub scroll_speed: f32,
    pub damping: bool,
    pub octaves: u32,
    pub octave_multiplier: f32,
    pub octave_scale: f32,
    pub quality: u32,
    pub separate_axes: bool,
    pub strength_x: MinMaxCurve,
    pub strength_y: MinMaxCurve,
    pub strength_z: MinMaxCurve,
}

impl Default for NoiseModule {
    fn default() -> Self {
        Self {
            enabled: false,
            strength: MinMaxCurve::constant(1.0),
            frequency: 0.5,
            scroll_speed: 0.0,
            damping: true,
            octaves: 1,
            octave_multiplier: 0.5,
            octave_scale: 2.0,
            quality: 1,
            separate_axes: false,
            strength_x: MinMaxCurve::constant(1.0),
            strength_y: MinMaxCurve::constant(1.0),
            strength_z: MinMaxCurve::constant(1.0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CollisionType {
    Planes,
    #[default]
    World,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CollisionMode {
    #[default]
    Collision3D,
    Collision2D,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CollisionModule {
    pub enabled: bool,
    pub collision_type: CollisionType,
    pub mode: CollisionMode,
    pub dampen: MinMaxCurve,
    pub bounce: MinMaxCurve,
    pub lifetime_loss: MinMaxCurve,
    pub min_kill_speed: f32,
    pub max_kill_speed: f32,
    pub radius_scale: f32,
    pub collides_with_dynamic: bool,
    pub max_collision_shapes: u32,
}

impl Default for CollisionModule {
    fn default() -> Self {
        Self {
            enabled: false,
            collision_type: CollisionType::World,
            mode: CollisionMode::Collision3D,
            dampen: MinMaxCurve::constant(0.0),
            bounce: MinMaxCurve::constant(1.0),
            lifetime_loss: MinMaxCurve::constant(0.0),
            min_kill_speed: 0.0,
            max_kill_speed: 10_000.0,
            radius_scale: 1.0,
            collides_with_dynamic: true,
            max_collision_shapes: 256,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AnimationType {
    #[default]
    WholeSheet,
    SingleRow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AnimationMode {
    #[default]
    Grid,
    Sprites,
}

/// Flipbook settings; frame selection is left to the renderer
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TextureSheetAnimationModule {
    pub enabled: bool,
    pub num_tiles_x: u32,
    pub num_tiles_y: u32,
    pub animation_type: AnimationType,
    pub mode: AnimationMode,
    pub frame_over_time: MinMaxCurve,
    pub start_frame: MinMaxCurve,
    pub cycle_count: u32,
    pub row_index: u32,
}

impl Default for TextureSheetAnimationModule {
    fn default() -> Self {
        Self {
            enabled: false,
            num_tiles_x: 1,
            num_tiles_y: 1,
            animation_type: AnimationType::WholeSheet,
            mode: AnimationMode::Grid,
            frame_over_time: MinMaxCurve::default(),
            start_frame: MinMaxCurve::default(),
            cycle_count: 1,
            row_index: 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RenderMode {
    #[default]
    Billboard,
    Stretch,
    HorizontalBillboard,
    VerticalBillboard,
    Mesh,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SortMode {
    #[default]
    None,
    Distance,
    OldestInFront,
    YoungestInFront,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RendererModule {
    pub render_mode: RenderMode,
    pub sort_mode: SortMode,
    pub min_particle_size: f32,
    pub max_particle_size: f32,
    pub material: String,
    pub texture: String,
    pub pivot: Vec3,
    pub flip: bool,
    pub velocity_scale: Vec3,
    pub length_scale: f32,
    pub normal_direction: f32,
    pub sorting_order: i32,
}

impl Default for RendererModule {
    fn default() -> Self {
        Self {
            render_mode: RenderMode::Billboard,
            sort_mode: SortMode::None,
            min_particle_size: 0.0,
            max_particle_size: 0.5,
            material: String::new(),
            texture: String::new(),
            pivot: Vec3::ZERO,
            flip: false,
            velocity_scale: Vec3::ZERO,
            length_scale: 2.0,
            normal_direction: 1.0,
            sorting_order: 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SubEmitterType {
    #[default]
    Birth,
    Collision,
    Death,
}

/// Reference to another registered effect triggered by particle events
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SubEmitter {
    pub trigger: SubEmitterType,
    pub sub_emitter_name: String,
}
