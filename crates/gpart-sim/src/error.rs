use thiserror::Error;

use crate::registry::InstanceId;

/// Error types for particle system setup and effect management
///
/// Nothing on the per-frame path returns these; they only come out of
/// simulator construction and registry operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SimulationError {
    /// The configuration asks for an empty particle pool
    #[error("Invalid max particles count: {0} (must be greater than zero)")]
    InvalidMaxParticles(usize),

    /// No template was registered under this name
    #[error("Particle system not registered: {0}")]
    UnknownSystem(String),

    /// The instance was killed or never spawned
    #[error("Unknown effect instance: {0}")]
    UnknownInstance(InstanceId),
}

/// Result type using SimulationError
pub type Result<T> = std::result::Result<T, SimulationError>;
