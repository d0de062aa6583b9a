use glam::Vec3;

/// Emission volume
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ShapeType {
    Sphere,
    Hemisphere,
    #[default]
    Cone,
    Box,
    Circle,
    Edge,
    Rectangle,
}

/// How positions are distributed around an arc
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ArcMode {
    #[default]
    Random,
    Loop,
    PingPong,
}

/// Where particles spawn and which way they initially travel
///
/// Only cone, sphere and box are sampled; the remaining shape types emit
/// from the origin along +Z.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ShapeModule {
    pub enabled: bool,
    pub shape_type: ShapeType,
    /// Cone half-angle in degrees
    pub angle: f32,
    pub radius: f32,
    pub radius_thickness: f32,
    /// Arc in degrees
    pub arc: f32,
    pub box_scale: Vec3,
    /// Emitter-local offset added after sampling
    pub position: Vec3,
    /// Euler rotation in degrees
    pub rotation: Vec3,
    /// Per-axis extent of the box shape
    pub scale: Vec3,
    pub align_to_direction: bool,
    pub random_direction_amount: f32,
    pub spherical_direction_amount: f32,
    pub arc_mode: ArcMode,
}

impl Default for ShapeModule {
    fn default() -> Self {
        Self {
            enabled: true,
            shape_type: ShapeType::Cone,
            angle: 25.0,
            radius: 1.0,
            radius_thickness: 1.0,
            arc: 360.0,
            box_scale: Vec3::ONE,
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
            align_to_direction: false,
            random_direction_amount: 0.0,
            spherical_direction_amount: 0.0,
            arc_mode: ArcMode::Random,
        }
    }
}
