//! Fixed-capacity particle pool and per-frame simulation

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use glam::Vec3;

use crate::config::{LimitVelocityOverLifetimeModule, ParticleSystemData, SimulationSpace};
use crate::emission::{BurstWindows, EmissionAccumulator, burst_firings};
use crate::error::{Result, SimulationError};
use crate::particle::Particle;
use crate::rng::ParticleRng;
use crate::shape::sample_shape;
use crate::{GRAVITY, HIGH_PARTICLE_COUNT, MAX_DELTA_TIME};

/// Upper bound on the number of steps a prewarm may take
const MAX_PREWARM_STEPS: usize = 10_000;

/// Runtime tunables that are not part of the effect description
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationSettings {
    /// Largest delta time a single update integrates, in seconds
    pub max_delta_time: f32,
    /// Fixed seed for reproducible runs; `None` seeds from the OS
    pub seed: Option<u64>,
    /// Capacity above which creation logs a performance warning
    pub high_particle_warning: usize,
}

impl Default for SimulationSettings {
    fn default() -> Self {
        Self {
            max_delta_time: MAX_DELTA_TIME,
            seed: None,
            high_particle_warning: HIGH_PARTICLE_COUNT,
        }
    }
}

impl SimulationSettings {
    /// Default settings with a fixed seed
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Default::default()
        }
    }
}

/// Read-only view handed to a renderer after an update
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleSnapshot<'a> {
    /// The whole pool, dead slots included
    pub particles: &'a [Particle],
    /// Live particles among `particles`
    pub alive_count: usize,
}

/// CPU simulator for a single particle system
///
/// Owns a copy of its configuration and a pool of `max_particles` records
/// allocated once at creation. Each [`update`](Self::update) emits, spawns
/// and integrates in one pass; nothing on that path allocates or fails.
///
/// # Examples
///
/// ```
/// use gpart_sim::{ParticleSimulator, SimulationSettings};
/// use gpart_sim::config::{MainModule, ParticleSystemData};
///
/// let data = ParticleSystemData {
///     main: MainModule { max_particles: 32, ..Default::default() },
///     ..Default::default()
/// };
/// let mut sim = ParticleSimulator::with_settings(data, SimulationSettings::seeded(1))?;
/// sim.update(0.1);
/// assert_eq!(sim.alive_count(), 1);
/// # Ok::<(), gpart_sim::SimulationError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ParticleSimulator {
    data: ParticleSystemData,
    settings: SimulationSettings,
    particles: Vec<Particle>,
    /// Dead slot indices, lowest first
    free_slots: BinaryHeap<Reverse<usize>>,
    alive_count: usize,
    /// Seconds into the current emission cycle
    system_time: f32,
    /// Start delay left before the clock runs
    delay_remaining: f32,
    accumulator: EmissionAccumulator,
    rng: ParticleRng,
    playing: bool,
    /// Set once a non-looping system has run its full duration
    suspended: bool,
}

impl ParticleSimulator {
    /// Create a simulator with default settings
    pub fn new(data: ParticleSystemData) -> Result<Self> {
        Self::with_settings(data, SimulationSettings::default())
    }

    /// Create a simulator whose random draws are reproducible
    pub fn with_seed(data: ParticleSystemData, seed: u64) -> Result<Self> {
        Self::with_settings(data, SimulationSettings::seeded(seed))
    }

    /// Create a simulator, validating the pool capacity
    pub fn with_settings(data: ParticleSystemData, settings: SimulationSettings) -> Result<Self> {
        let capacity = data.main.max_particles;
        if capacity == 0 {
            return Err(SimulationError::InvalidMaxParticles(capacity));
        }
        if capacity > settings.high_particle_warning {
            log::warn!(
                "High particle count ({}) for '{}' may impact performance",
                capacity,
                data.name
            );
        }

        let mut simulator = Self {
            particles: vec![Particle::default(); capacity],
            free_slots: (0..capacity).map(Reverse).collect(),
            alive_count: 0,
            system_time: 0.0,
            delay_remaining: 0.0,
            accumulator: EmissionAccumulator::new(),
            rng: ParticleRng::from_seed(settings.seed),
            playing: data.main.play_on_awake,
            suspended: false,
            data,
            settings,
        };
        simulator.restart_cycle();
        simulator.prewarm();

        log::info!(
            "Created particle system '{}' with capacity {}",
            simulator.data.name,
            capacity
        );
        Ok(simulator)
    }

    /// Advance the simulation by `delta_time` seconds
    ///
    /// The step is clamped to the configured maximum and scaled by the
    /// system's simulation speed. Negative or NaN input is treated as zero.
    pub fn update(&mut self, delta_time: f32) {
        let dt = self.step_size(delta_time);
        self.step(dt);
    }

    /// Kill every particle and restart the emission cycle
    ///
    /// The pool keeps its allocation.
    pub fn reset(&mut self) {
        for particle in &mut self.particles {
            particle.kill();
        }
        self.free_slots = (0..self.particles.len()).map(Reverse).collect();
        self.alive_count = 0;
        self.restart_cycle();
        log::debug!("Reset particle system '{}'", self.data.name);
        self.prewarm();
    }

    /// Start emitting; restarts the cycle of a system that already finished
    /// its duration
    pub fn play(&mut self) {
        self.playing = true;
        if self.suspended {
            self.restart_cycle();
        }
    }

    /// Stop emitting; alive particles keep simulating
    pub fn stop(&mut self) {
        self.playing = false;
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Whether the next update can emit particles
    pub fn is_emitting(&self) -> bool {
        self.playing && !self.suspended && self.data.emission.enabled
    }

    /// A non-looping system that ran its duration and has no live particles
    pub fn is_finished(&self) -> bool {
        self.suspended && self.alive_count == 0
    }

    /// The whole pool, dead slots included
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Live particles in pool order
    pub fn alive_particles(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter().filter(|p| p.alive)
    }

    /// Number of live particles after the last update
    pub fn alive_count(&self) -> usize {
        self.alive_count
    }

    pub fn snapshot(&self) -> ParticleSnapshot<'_> {
        ParticleSnapshot {
            particles: &self.particles,
            alive_count: self.alive_count,
        }
    }

    pub fn max_particles(&self) -> usize {
        self.particles.len()
    }

    /// Seconds into the current emission cycle
    pub fn system_time(&self) -> f32 {
        self.system_time
    }

    /// System time as a fraction of the duration
    pub fn normalized_time(&self) -> f32 {
        let duration = self.data.main.duration;
        if duration.is_finite() && duration > 0.0 {
            (self.system_time / duration).clamp(0.0, 1.0)
        } else {
            0.0
        }
    }

    /// Start delay still to elapse before the clock runs
    pub fn remaining_delay(&self) -> f32 {
        self.delay_remaining
    }

    pub fn data(&self) -> &ParticleSystemData {
        &self.data
    }

    pub fn settings(&self) -> &SimulationSettings {
        &self.settings
    }

    fn step_size(&self, delta_time: f32) -> f32 {
        let max_step = self.settings.max_delta_time.max(0.0);
        let clamped = if delta_time.is_nan() || delta_time <= 0.0 {
            0.0
        } else {
            delta_time.min(max_step)
        };

        let speed = self.data.main.simulation_speed;
        if speed.is_finite() && speed > 0.0 {
            clamped * speed
        } else {
            0.0
        }
    }

    fn step(&mut self, dt: f32) {
        let mut requested = 0;
        if self.playing && !self.suspended {
            let clock_dt = self.consume_delay(dt);
            if clock_dt > 0.0 {
                requested = self.advance_clock(clock_dt);
            }
        }

        self.spawn(requested);
        self.integrate(dt);
    }

    /// Spend the start delay, returning the part of `dt` left for the clock
    fn consume_delay(&mut self, dt: f32) -> f32 {
        if self.delay_remaining <= 0.0 {
            return dt;
        }
        let used = dt.min(self.delay_remaining);
        self.delay_remaining -= used;
        dt - used
    }

    /// Move the system clock forward and return how many particles to emit
    fn advance_clock(&mut self, dt: f32) -> u32 {
        let duration = self.data.main.duration;
        let looping = self.data.main.looping;
        let emitting = self.data.emission.enabled;

        if !(duration.is_finite() && duration > 0.0) {
            if !looping {
                self.suspend();
                return 0;
            }
            self.system_time = 0.0;
            return if emitting { self.rate_emission(dt) } else { 0 };
        }

        let before = self.system_time;
        let after = before + dt;
        let wrapped = after >= duration;

        let windows = if !wrapped {
            self.system_time = after;
            BurstWindows::within(before..after)
        } else if looping {
            self.system_time = after % duration;
            BurstWindows::wrapping(before, after, duration)
        } else {
            self.system_time = duration;
            BurstWindows::within(before..duration)
        };

        let mut requested = 0;
        if emitting {
            requested = self.burst_emission(&windows, duration);
        }
        if wrapped && !looping {
            self.suspend();
        } else if emitting {
            requested = requested.saturating_add(self.rate_emission(dt));
        }
        requested
    }

    fn rate_emission(&mut self, dt: f32) -> u32 {
        let t = self.normalized_time();
        let random = self.rng.unit();
        let rate = self.data.emission.rate_over_time.evaluate(t, random);
        self.accumulator.accumulate(rate, dt)
    }

    fn burst_emission(&mut self, windows: &BurstWindows, duration: f32) -> u32 {
        // Counts past the pool size are dropped at spawn anyway
        let capacity = u32::try_from(self.particles.len()).unwrap_or(u32::MAX);
        let mut total: u32 = 0;
        for burst in &self.data.emission.bursts {
            for window in windows.iter() {
                for _ in 0..burst_firings(burst, window, duration) {
                    let count = self.rng.count(burst.min_count, burst.max_count);
                    total = total.saturating_add(count);
                    if total >= capacity {
                        return total;
                    }
                }
            }
        }
        total
    }

    fn spawn(&mut self, requested: u32) {
        if requested == 0 {
            return;
        }

        let count = (requested as usize).min(self.free_slots.len());
        if count < requested as usize {
            log::trace!(
                "'{}' pool full: emitting {} of {} requested particles",
                self.data.name,
                count,
                requested
            );
        } else {
            log::trace!("'{}' emitting {} particles", self.data.name, count);
        }

        let t = self.normalized_time();
        for _ in 0..count {
            let Some(Reverse(index)) = self.free_slots.pop() else {
                break;
            };
            self.particles[index] = self.create_particle(t);
        }
    }

    /// Initialize a particle from the start values, sampled at system time `t`
    fn create_particle(&mut self, t: f32) -> Particle {
        let main = &self.data.main;
        let rng = &mut self.rng;

        let lifetime = main.start_lifetime.evaluate(t, rng.unit());
        let sample = sample_shape(&self.data.shape, rng);
        let speed = main.start_speed.evaluate(t, rng.unit());
        let size_random = rng.unit();
        let size = main.start_size.evaluate(t, size_random);
        let rotation = main.start_rotation.evaluate(t, rng.unit());

        Particle {
            position: sample.position,
            velocity: sample.direction * speed,
            color: main.start_color,
            size,
            base_size: main.start_size.evaluate(0.0, size_random),
            rotation,
            age: 0.0,
            lifetime,
            alive: true,
            random_seed: rng.unit(),
        }
    }

    fn integrate(&mut self, dt: f32) {
        let system_t = self.normalized_time();
        let data = &self.data;
        let rng = &mut self.rng;

        let mut alive = 0;
        for (index, particle) in self.particles.iter_mut().enumerate() {
            if !particle.alive {
                continue;
            }
            if !particle.age_by(dt) {
                self.free_slots.push(Reverse(index));
                continue;
            }

            apply_forces(data, particle, system_t, dt, rng);
            particle.position += particle.velocity * dt;
            apply_lifetime_modules(data, particle, dt);
            alive += 1;
        }
        self.alive_count = alive;
    }

    fn suspend(&mut self) {
        if !self.suspended {
            self.suspended = true;
            log::debug!(
                "Particle system '{}' reached its duration, emission stopped",
                self.data.name
            );
        }
    }

    /// Zero the clock and accumulator and draw a new start delay
    fn restart_cycle(&mut self) {
        self.system_time = 0.0;
        self.accumulator.reset();
        self.suspended = false;
        self.delay_remaining = if self.prewarm_enabled() {
            0.0
        } else {
            let random = self.rng.unit();
            self.data.main.start_delay.evaluate(0.0, random).max(0.0)
        };
    }

    fn prewarm_enabled(&self) -> bool {
        let main = &self.data.main;
        main.prewarm && main.looping && main.duration.is_finite() && main.duration > 0.0
    }

    /// Run one full cycle so a looping system starts in its steady state
    fn prewarm(&mut self) {
        let step = self.settings.max_delta_time;
        if !self.playing || !self.prewarm_enabled() || step.is_nan() || step <= 0.0 {
            return;
        }

        let mut remaining = self.data.main.duration;
        let mut steps = 0;
        while remaining > 0.0 && steps < MAX_PREWARM_STEPS {
            let dt = remaining.min(step);
            self.step(dt);
            remaining -= dt;
            steps += 1;
        }
        log::debug!(
            "Prewarmed '{}' over {} steps, {} particles alive",
            self.data.name,
            steps,
            self.alive_count
        );
    }
}

fn apply_forces(
    data: &ParticleSystemData,
    particle: &mut Particle,
    system_t: f32,
    dt: f32,
    rng: &mut ParticleRng,
) {
    let seed = particle.random_seed;
    let t = particle.normalized_age();

    let gravity = data.main.gravity_modifier.evaluate(system_t, seed);
    particle.velocity.z -= GRAVITY * gravity * dt;

    let force = &data.force_over_lifetime;
    if force.enabled {
        let random = if force.randomized { rng.unit() } else { seed };
        let acceleration = Vec3::new(
            force.x.evaluate(t, random),
            force.y.evaluate(t, random),
            force.z.evaluate(t, random),
        );
        particle.velocity += acceleration * dt;
    }

    // Overwrites, so it must run after the additive forces
    let velocity = &data.velocity_over_lifetime;
    if velocity.enabled && velocity.space == SimulationSpace::Local {
        particle.velocity = Vec3::new(
            velocity.x.evaluate(t, seed),
            velocity.y.evaluate(t, seed),
            velocity.z.evaluate(t, seed),
        );
    }

    let limit = &data.limit_velocity_over_lifetime;
    if limit.enabled {
        limit_velocity(limit, particle, t);
    }
}

/// Remove `dampen` of the speed above the limit
fn limit_velocity(limit: &LimitVelocityOverLifetimeModule, particle: &mut Particle, t: f32) {
    let seed = particle.random_seed;
    let dampen = limit.dampen.clamp(0.0, 1.0);
    let dampened = |value: f32, max: f32| {
        let max = max.max(0.0);
        let magnitude = value.abs();
        if magnitude > max {
            (magnitude - (magnitude - max) * dampen).copysign(value)
        } else {
            value
        }
    };

    if limit.separate_axes {
        let v = particle.velocity;
        particle.velocity = Vec3::new(
            dampened(v.x, limit.limit_x.evaluate(t, seed)),
            dampened(v.y, limit.limit_y.evaluate(t, seed)),
            dampened(v.z, limit.limit_z.evaluate(t, seed)),
        );
    } else {
        let speed = particle.velocity.length();
        if speed > 0.0 {
            let target = dampened(speed, limit.limit.evaluate(t, seed));
            particle.velocity *= target / speed;
        }
    }
}

fn apply_lifetime_modules(data: &ParticleSystemData, particle: &mut Particle, dt: f32) {
    let seed = particle.random_seed;
    let t = particle.normalized_age();

    if data.color_over_lifetime.enabled {
        particle.color = data.color_over_lifetime.gradient.evaluate(t);
    }

    if data.size_over_lifetime.enabled {
        particle.size = particle.base_size * data.size_over_lifetime.size.evaluate(t, seed);
    }

    if data.rotation_over_lifetime.enabled {
        let degrees_per_second = data.rotation_over_lifetime.z.evaluate(t, seed);
        particle.rotation += degrees_per_second.to_radians() * dt;
    }
}
