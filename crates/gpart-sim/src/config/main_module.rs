use gpart_curves::{Color, MinMaxCurve};

/// Coordinate space particles are simulated in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SimulationSpace {
    #[default]
    Local,
    World,
    Custom,
}

/// System-wide timing, start values and capacity
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MainModule {
    /// Length of one emission cycle in seconds
    pub duration: f32,
    /// Restart the cycle when `duration` elapses
    pub looping: bool,
    /// Start a looping system as if one full cycle had already run
    pub prewarm: bool,
    /// Seconds before the system clock starts
    pub start_delay: MinMaxCurve,
    pub start_lifetime: MinMaxCurve,
    pub start_speed: MinMaxCurve,
    pub start_size: MinMaxCurve,
    pub start_size_3d: bool,
    pub start_size_x: MinMaxCurve,
    pub start_size_y: MinMaxCurve,
    pub start_size_z: MinMaxCurve,
    pub start_rotation: MinMaxCurve,
    pub start_rotation_3d: bool,
    pub start_rotation_x: MinMaxCurve,
    pub start_rotation_y: MinMaxCurve,
    pub start_rotation_z: MinMaxCurve,
    pub start_color: Color,
    /// Scale of the 9.81 m/s² downward pull
    pub gravity_modifier: MinMaxCurve,
    pub simulation_space: SimulationSpace,
    /// Time scale applied to every update
    pub simulation_speed: f32,
    /// Emit as soon as the simulator is created
    pub play_on_awake: bool,
    /// Pool capacity; must be greater than zero
    pub max_particles: usize,
}

impl Default for MainModule {
    fn default() -> Self {
        Self {
            duration: 5.0,
            looping: true,
            prewarm: false,
            start_delay: MinMaxCurve::constant(0.0),
            start_lifetime: MinMaxCurve::constant(5.0),
            start_speed: MinMaxCurve::constant(5.0),
            start_size: MinMaxCurve::constant(1.0),
            start_size_3d: false,
            start_size_x: MinMaxCurve::constant(1.0),
            start_size_y: MinMaxCurve::constant(1.0),
            start_size_z: MinMaxCurve::constant(1.0),
            start_rotation: MinMaxCurve::constant(0.0),
            start_rotation_3d: false,
            start_rotation_x: MinMaxCurve::constant(0.0),
            start_rotation_y: MinMaxCurve::constant(0.0),
            start_rotation_z: MinMaxCurve::constant(0.0),
            start_color: Color::WHITE,
            gravity_modifier: MinMaxCurve::constant(0.0),
            simulation_space: SimulationSpace::Local,
            simulation_speed: 1.0,
            play_on_awake: true,
            max_particles: 1000,
        }
    }
}
