//! Per-frame behavior of the particle simulator

use glam::Vec3;
use gpart_curves::MinMaxCurve;
use gpart_sim::config::{
    Burst, EmissionModule, ForceOverLifetimeModule, MainModule, ParticleSystemData, ShapeModule,
    ShapeType, SimulationSpace, SizeOverLifetimeModule, VelocityOverLifetimeModule,
};
use gpart_sim::{MAX_DELTA_TIME, ParticleSimulator, SimulationError};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use test_case::test_case;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Non-looping one second system emitting at `rate` per second
fn one_shot_system(max_particles: usize, rate: f32) -> ParticleSystemData {
    ParticleSystemData {
        name: "one_shot".to_string(),
        main: MainModule {
            max_particles,
            duration: 1.0,
            looping: false,
            ..Default::default()
        },
        emission: EmissionModule {
            rate_over_time: MinMaxCurve::constant(rate),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// System that only emits through `bursts`
fn burst_system(looping: bool, bursts: Vec<Burst>) -> ParticleSystemData {
    ParticleSystemData {
        name: "bursts".to_string(),
        main: MainModule {
            max_particles: 100,
            duration: 1.0,
            looping,
            start_lifetime: MinMaxCurve::constant(10.0),
            ..Default::default()
        },
        emission: EmissionModule {
            rate_over_time: MinMaxCurve::constant(0.0),
            bursts,
            ..Default::default()
        },
        ..Default::default()
    }
}

#[test]
fn test_first_update_emits_rate_times_delta() {
    init_logging();
    let mut sim = ParticleSimulator::with_seed(one_shot_system(10, 100.0), 1).unwrap();

    sim.update(0.05);

    assert_eq!(sim.alive_count(), 5);
    assert_eq!(sim.snapshot().alive_count, 5);
    assert_eq!(sim.alive_particles().count(), 5);
}

#[test]
fn test_emission_stops_after_duration() {
    init_logging();
    let mut sim = ParticleSimulator::with_seed(one_shot_system(1000, 100.0), 2).unwrap();

    for _ in 0..11 {
        sim.update(0.1);
    }
    assert!(!sim.is_emitting());
    assert!(!sim.is_finished());

    let emitted = sim.alive_count();
    assert!(emitted > 0 && emitted <= 100);
    let oldest = sim
        .alive_particles()
        .map(|p| p.age)
        .fold(0.0_f32, f32::max);

    for _ in 0..5 {
        sim.update(0.1);
    }
    assert_eq!(sim.alive_count(), emitted);
    let oldest_after = sim
        .alive_particles()
        .map(|p| p.age)
        .fold(0.0_f32, f32::max);
    assert!(oldest_after > oldest);
}

#[test]
fn test_non_looping_system_finishes() {
    let mut data = one_shot_system(100, 50.0);
    data.main.start_lifetime = MinMaxCurve::constant(0.5);
    let mut sim = ParticleSimulator::with_seed(data, 3).unwrap();

    for _ in 0..30 {
        sim.update(0.1);
    }
    assert_eq!(sim.alive_count(), 0);
    assert!(sim.is_finished());
}

#[test]
fn test_looping_system_wraps_clock() {
    let mut data = one_shot_system(1000, 10.0);
    data.main.looping = true;
    let mut sim = ParticleSimulator::with_seed(data, 4).unwrap();

    for _ in 0..25 {
        sim.update(0.1);
    }
    assert!(sim.system_time() < 1.0);
    assert!(sim.is_emitting());
    assert!(!sim.is_finished());
}

#[test]
fn test_velocity_over_lifetime_overwrites() {
    let mut data = one_shot_system(10, 100.0);
    data.main.start_speed = MinMaxCurve::constant(20.0);
    data.velocity_over_lifetime = VelocityOverLifetimeModule {
        enabled: true,
        x: MinMaxCurve::constant(5.0),
        space: SimulationSpace::Local,
        ..Default::default()
    };
    let mut sim = ParticleSimulator::with_seed(data, 5).unwrap();

    sim.update(0.05);

    assert!(sim.alive_count() > 0);
    for particle in sim.alive_particles() {
        assert_eq!(particle.velocity.x, 5.0);
        assert_eq!(particle.velocity.y, 0.0);
        assert_eq!(particle.velocity.z, 0.0);
    }
}

#[test]
fn test_velocity_over_lifetime_wins_over_force() {
    let mut data = one_shot_system(10, 100.0);
    data.force_over_lifetime = ForceOverLifetimeModule {
        enabled: true,
        x: MinMaxCurve::constant(100.0),
        ..Default::default()
    };
    data.velocity_over_lifetime = VelocityOverLifetimeModule {
        enabled: true,
        x: MinMaxCurve::constant(5.0),
        ..Default::default()
    };
    let mut sim = ParticleSimulator::with_seed(data, 5).unwrap();

    sim.update(0.05);
    sim.update(0.05);

    assert!(sim.alive_count() > 0);
    for particle in sim.alive_particles() {
        assert_eq!(particle.velocity.x, 5.0);
    }
}

#[test]
fn test_size_over_lifetime_keeps_start_size() {
    let mut data = one_shot_system(50, 200.0);
    data.main.start_size = MinMaxCurve::random_between(1.0, 10.0);

    let mut plain = ParticleSimulator::with_seed(data.clone(), 3).unwrap();
    data.size_over_lifetime = SizeOverLifetimeModule {
        enabled: true,
        size: MinMaxCurve::constant(1.0),
        ..Default::default()
    };
    let mut scaled = ParticleSimulator::with_seed(data, 3).unwrap();

    plain.update(0.05);
    scaled.update(0.05);

    let plain_sizes: Vec<f32> = plain.alive_particles().map(|p| p.size).collect();
    let scaled_sizes: Vec<f32> = scaled.alive_particles().map(|p| p.size).collect();
    assert!(!plain_sizes.is_empty());
    assert_eq!(plain_sizes, scaled_sizes);
}

#[test]
fn test_velocity_over_lifetime_ignored_in_world_space() {
    let mut data = one_shot_system(10, 100.0);
    data.shape = ShapeModule {
        enabled: false,
        ..Default::default()
    };
    data.velocity_over_lifetime = VelocityOverLifetimeModule {
        enabled: true,
        x: MinMaxCurve::constant(5.0),
        space: SimulationSpace::World,
        ..Default::default()
    };
    let mut sim = ParticleSimulator::with_seed(data, 5).unwrap();

    sim.update(0.05);

    for particle in sim.alive_particles() {
        assert_eq!(particle.velocity, Vec3::new(0.0, 0.0, 5.0));
    }
}

#[test]
fn test_particle_lifecycle() {
    let mut data = burst_system(false, vec![Burst::new(0.0, 1, 1)]);
    data.main.start_lifetime = MinMaxCurve::constant(1.0);
    let mut sim = ParticleSimulator::with_seed(data, 6).unwrap();

    for _ in 0..3 {
        sim.update(0.25);
        assert_eq!(sim.alive_count(), 1);
    }

    sim.update(0.25);
    assert_eq!(sim.alive_count(), 0);
    assert!(sim.particles().iter().all(|p| !p.is_alive()));
}

#[test]
fn test_pool_capacity_clamps_emission() {
    let mut sim = ParticleSimulator::with_seed(one_shot_system(10, 1000.0), 7).unwrap();

    for _ in 0..5 {
        sim.update(0.1);
        assert_eq!(sim.alive_count(), 10);
    }
    assert_eq!(sim.particles().len(), 10);
}

#[test]
fn test_dead_slots_are_reused() {
    let mut data = one_shot_system(4, 40.0);
    data.main.looping = true;
    data.main.start_lifetime = MinMaxCurve::constant(0.15);
    let mut sim = ParticleSimulator::with_seed(data, 8).unwrap();

    let mut refills = 0;
    let mut previous = 0;
    for _ in 0..50 {
        sim.update(0.1);
        let alive = sim.alive_count();
        assert!(alive <= 4);
        if previous == 0 && alive > 0 {
            refills += 1;
        }
        previous = alive;
    }
    assert!(refills > 1);
}

#[test_case(10.0, 1.0 / 60.0, 120 ; "ten per second at 60 fps")]
#[test_case(30.0, 0.016, 250 ; "thirty per second at 16 ms")]
#[test_case(7.5, 0.033, 100 ; "fractional rate")]
#[test_case(100.0, 0.1, 50 ; "maximum step")]
fn test_accumulator_converges(rate: f32, dt: f32, frames: usize) {
    let data = ParticleSystemData {
        main: MainModule {
            max_particles: 10_000,
            duration: 100.0,
            looping: false,
            start_lifetime: MinMaxCurve::constant(100.0),
            ..Default::default()
        },
        emission: EmissionModule {
            rate_over_time: MinMaxCurve::constant(rate),
            ..Default::default()
        },
        ..Default::default()
    };
    let mut sim = ParticleSimulator::with_seed(data, 9).unwrap();

    for _ in 0..frames {
        sim.update(dt);
    }

    let expected = rate * dt * frames as f32;
    let emitted = sim.alive_count() as f32;
    assert!(
        (emitted - expected).abs() <= 1.0,
        "emitted {emitted}, expected {expected}"
    );
}

#[test]
fn test_reset_clears_pool() {
    let mut sim = ParticleSimulator::with_seed(one_shot_system(10, 100.0), 10).unwrap();
    for _ in 0..12 {
        sim.update(0.1);
    }
    assert!(!sim.is_emitting());

    sim.reset();
    assert_eq!(sim.alive_count(), 0);
    assert_eq!(sim.system_time(), 0.0);
    assert_eq!(sim.particles().len(), 10);
    assert!(sim.particles().iter().all(|p| !p.is_alive()));
    assert!(sim.is_emitting());

    sim.update(0.05);
    assert_eq!(sim.alive_count(), 5);
}

#[test]
fn test_burst_fires_once_per_cycle() {
    let mut sim =
        ParticleSimulator::with_seed(burst_system(true, vec![Burst::new(0.5, 3, 3)]), 11).unwrap();

    for _ in 0..4 {
        sim.update(0.1);
    }
    assert_eq!(sim.alive_count(), 0);

    for _ in 0..4 {
        sim.update(0.1);
    }
    assert_eq!(sim.alive_count(), 3);

    for _ in 0..12 {
        sim.update(0.1);
    }
    assert_eq!(sim.alive_count(), 6);
}

#[test]
fn test_burst_at_start_fires_on_first_update() {
    let mut sim =
        ParticleSimulator::with_seed(burst_system(false, vec![Burst::new(0.0, 4, 4)]), 12).unwrap();
    sim.update(0.02);
    assert_eq!(sim.alive_count(), 4);
}

#[test]
fn test_burst_count_within_bounds() {
    for seed in 0..20 {
        let mut sim =
            ParticleSimulator::with_seed(burst_system(false, vec![Burst::new(0.0, 2, 4)]), seed)
                .unwrap();
        sim.update(0.1);
        assert!((2..=4).contains(&sim.alive_count()));
    }
}

#[test]
fn test_burst_cycles_repeat() {
    let burst = Burst::new(0.0, 2, 2).with_cycles(3, 0.25);
    let mut sim = ParticleSimulator::with_seed(burst_system(false, vec![burst]), 13).unwrap();

    for _ in 0..10 {
        sim.update(0.1);
    }
    assert_eq!(sim.alive_count(), 6);
}

#[test]
fn test_burst_and_rate_combine() {
    let mut data = burst_system(false, vec![Burst::new(0.0, 3, 3)]);
    data.emission.rate_over_time = MinMaxCurve::constant(100.0);
    let mut sim = ParticleSimulator::with_seed(data, 14).unwrap();

    sim.update(0.05);
    assert_eq!(sim.alive_count(), 8);
}

#[test]
fn test_disabled_emission_spawns_nothing() {
    let mut data = burst_system(false, vec![Burst::new(0.0, 3, 3)]);
    data.emission.enabled = false;
    let mut sim = ParticleSimulator::with_seed(data, 15).unwrap();

    sim.update(0.1);
    assert_eq!(sim.alive_count(), 0);
    assert!(!sim.is_emitting());
}

#[test]
fn test_seeded_runs_are_identical() {
    let data = ParticleSystemData {
        main: MainModule {
            max_particles: 200,
            start_lifetime: MinMaxCurve::random_between(1.0, 3.0),
            start_speed: MinMaxCurve::random_between(1.0, 5.0),
            start_size: MinMaxCurve::random_between(0.5, 1.5),
            ..Default::default()
        },
        shape: ShapeModule {
            shape_type: ShapeType::Sphere,
            ..Default::default()
        },
        emission: EmissionModule {
            rate_over_time: MinMaxCurve::constant(50.0),
            ..Default::default()
        },
        ..Default::default()
    };

    let mut a = ParticleSimulator::with_seed(data.clone(), 99).unwrap();
    let mut b = ParticleSimulator::with_seed(data, 99).unwrap();
    for _ in 0..30 {
        a.update(1.0 / 30.0);
        b.update(1.0 / 30.0);
    }

    assert_eq!(a.particles(), b.particles());
}

#[test]
fn test_random_start_values_stay_in_range() {
    let mut data = one_shot_system(500, 400.0);
    data.main.start_lifetime = MinMaxCurve::random_between(2.0, 3.0);
    data.main.start_size = MinMaxCurve::random_between(0.5, 0.75);
    let mut sim = ParticleSimulator::with_seed(data, 16).unwrap();

    sim.update(0.1);
    assert!(sim.alive_count() > 0);
    for particle in sim.alive_particles() {
        assert!((2.0..=3.0).contains(&particle.lifetime));
        assert!((0.5..=0.75).contains(&particle.size));
    }
}

#[test]
fn test_zero_lifetime_particles_never_survive() {
    let mut data = one_shot_system(10, 100.0);
    data.main.start_lifetime = MinMaxCurve::constant(0.0);
    let mut sim = ParticleSimulator::with_seed(data, 17).unwrap();

    sim.update(0.05);
    assert_eq!(sim.alive_count(), 0);
}

#[test]
fn test_large_delta_is_clamped() {
    let mut sim = ParticleSimulator::with_seed(one_shot_system(1000, 100.0), 18).unwrap();
    sim.update(5.0);

    assert!((sim.system_time() - MAX_DELTA_TIME).abs() < 1e-6);
    assert_eq!(sim.alive_count(), 10);
}

#[test]
fn test_zero_capacity_is_an_error() {
    let err = ParticleSimulator::new(one_shot_system(0, 10.0)).unwrap_err();
    assert_eq!(err, SimulationError::InvalidMaxParticles(0));
    assert_eq!(
        err.to_string(),
        "Invalid max particles count: 0 (must be greater than zero)"
    );
}

proptest! {
    #[test]
    fn prop_alive_count_never_exceeds_capacity(
        capacity in 1usize..64,
        rate in 0.0f32..2000.0,
        steps in proptest::collection::vec(-0.05f32..0.3, 1..40),
    ) {
        let mut data = one_shot_system(capacity, rate);
        data.main.looping = true;
        data.main.start_lifetime = MinMaxCurve::random_between(0.05, 0.5);
        let mut sim = ParticleSimulator::with_seed(data, 0).unwrap();

        for dt in steps {
            sim.update(dt);
            prop_assert!(sim.alive_count() <= capacity);
            prop_assert_eq!(sim.alive_count(), sim.alive_particles().count());
        }
    }
}
