//! Named effect templates and their live instances

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use glam::Vec3;
use gpart_curves::Color;

use crate::config::ParticleSystemData;
use crate::error::{Result, SimulationError};
use crate::simulator::{ParticleSimulator, SimulationSettings};

/// Handle to a spawned effect; ids start at 1 and are never reused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InstanceId(pub u64);

impl fmt::Display for InstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A running copy of a registered effect
///
/// `position`, `scale` and `tint` place the effect for the renderer; the
/// simulator itself works in emitter-local space.
#[derive(Debug, Clone)]
pub struct EffectInstance {
    id: InstanceId,
    name: String,
    simulator: ParticleSimulator,
    pub position: Vec3,
    pub scale: f32,
    pub tint: Color,
}

impl EffectInstance {
    pub fn id(&self) -> InstanceId {
        self.id
    }

    /// Name of the template this instance was spawned from
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn simulator(&self) -> &ParticleSimulator {
        &self.simulator
    }

    pub fn simulator_mut(&mut self) -> &mut ParticleSimulator {
        &mut self.simulator
    }
}

/// Owner of effect templates and every instance spawned from them
///
/// # Examples
///
/// ```
/// use glam::Vec3;
/// use gpart_curves::Color;
/// use gpart_sim::EffectRegistry;
/// use gpart_sim::config::ParticleSystemData;
///
/// let mut registry = EffectRegistry::new();
/// registry.register("smoke", ParticleSystemData::default());
///
/// let id = registry.spawn("smoke", Vec3::ZERO, 1.0, Color::WHITE)?;
/// registry.update(0.1);
/// assert_eq!(registry.total_particle_count(), 1);
/// assert!(registry.kill(id));
/// # Ok::<(), gpart_sim::SimulationError>(())
/// ```
#[derive(Debug, Default)]
pub struct EffectRegistry {
    templates: HashMap<String, ParticleSystemData>,
    instances: BTreeMap<InstanceId, EffectInstance>,
    last_id: u64,
    settings: SimulationSettings,
}

impl EffectRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry whose instances use `settings`
    ///
    /// With a seed set, each instance is seeded with the registry seed plus
    /// its id.
    pub fn with_settings(settings: SimulationSettings) -> Self {
        Self {
            settings,
            ..Default::default()
        }
    }

    /// Store a template under `name`
    ///
    /// An existing template is kept and `false` returned.
    pub fn register(&mut self, name: impl Into<String>, data: ParticleSystemData) -> bool {
        let name = name.into();
        if self.templates.contains_key(&name) {
            log::debug!("Particle system '{}' already registered", name);
            return false;
        }
        log::debug!("Registered particle system '{}'", name);
        self.templates.insert(name, data);
        true
    }

    pub fn is_registered(&self, name: &str) -> bool {
        self.templates.contains_key(name)
    }

    /// Registered template names in arbitrary order
    pub fn system_names(&self) -> impl Iterator<Item = &str> {
        self.templates.keys().map(String::as_str)
    }

    /// Start a new instance of the template `name`
    pub fn spawn(
        &mut self,
        name: &str,
        position: Vec3,
        scale: f32,
        tint: Color,
    ) -> Result<InstanceId> {
        let data = self
            .templates
            .get(name)
            .ok_or_else(|| SimulationError::UnknownSystem(name.to_string()))?;

        let id = InstanceId(self.last_id + 1);
        let settings = SimulationSettings {
            seed: self.settings.seed.map(|seed| seed.wrapping_add(id.0)),
            ..self.settings.clone()
        };
        let simulator = ParticleSimulator::with_settings(data.clone(), settings)?;
        self.last_id = id.0;

        log::debug!("Spawned '{}' as instance {} at {}", name, id, position);
        self.instances.insert(
            id,
            EffectInstance {
                id,
                name: name.to_string(),
                simulator,
                position,
                scale,
                tint,
            },
        );
        Ok(id)
    }

    /// Remove an instance; `false` if it did not exist
    pub fn kill(&mut self, id: InstanceId) -> bool {
        let removed = self.instances.remove(&id).is_some();
        if removed {
            log::debug!("Killed instance {}", id);
        }
        removed
    }

    /// Remove every instance within `radius` of `center`, boundary included
    ///
    /// A NaN radius matches nothing.
    pub fn kill_in_radius(&mut self, center: Vec3, radius: f32) -> usize {
        if radius.is_nan() {
            return 0;
        }
        let before = self.instances.len();
        self.instances
            .retain(|_, instance| instance.position.distance(center) > radius);
        let killed = before - self.instances.len();
        if killed > 0 {
            log::debug!("Killed {} instances within {} of {}", killed, radius, center);
        }
        killed
    }

    /// Remove every instance
    pub fn clear(&mut self) {
        self.instances.clear();
    }

    /// Advance every instance by `delta_time`
    pub fn update(&mut self, delta_time: f32) {
        for instance in self.instances.values_mut() {
            instance.simulator.update(delta_time);
        }
    }

    /// Drop instances whose non-looping system has finished
    pub fn remove_finished(&mut self) -> usize {
        let before = self.instances.len();
        self.instances
            .retain(|_, instance| !instance.simulator.is_finished());
        before - self.instances.len()
    }

    /// Live particles across all instances
    pub fn total_particle_count(&self) -> usize {
        self.instances
            .values()
            .map(|instance| instance.simulator.alive_count())
            .sum()
    }

    pub fn instance(&self, id: InstanceId) -> Result<&EffectInstance> {
        self.instances
            .get(&id)
            .ok_or(SimulationError::UnknownInstance(id))
    }

    pub fn instance_mut(&mut self, id: InstanceId) -> Result<&mut EffectInstance> {
        self.instances
            .get_mut(&id)
            .ok_or(SimulationError::UnknownInstance(id))
    }

    /// Live instances in spawn order
    pub fn instances(&self) -> impl Iterator<Item = &EffectInstance> {
        self.instances.values()
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }
}
