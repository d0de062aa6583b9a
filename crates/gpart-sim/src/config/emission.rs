use gpart_curves::MinMaxCurve;

/// Scheduled one-shot emission
///
/// Fires at `time`, then again every `repeat_interval` seconds until
/// `cycles` firings have happened. `cycles == 0` keeps repeating for the
/// rest of the system duration.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Burst {
    /// Offset from the start of the cycle, in seconds
    pub time: f32,
    pub min_count: u32,
    pub max_count: u32,
    pub cycles: u32,
    pub repeat_interval: f32,
}

impl Burst {
    /// Single firing of between `min_count` and `max_count` particles
    pub fn new(time: f32, min_count: u32, max_count: u32) -> Self {
        Self {
            time,
            min_count,
            max_count,
            ..Default::default()
        }
    }

    /// Repeat the burst `cycles` times, `interval` seconds apart
    pub fn with_cycles(mut self, cycles: u32, interval: f32) -> Self {
        self.cycles = cycles;
        self.repeat_interval = interval;
        self
    }
}

impl Default for Burst {
    fn default() -> Self {
        Self {
            time: 0.0,
            min_count: 0,
            max_count: 0,
            cycles: 1,
            repeat_interval: 0.0,
        }
    }
}

/// Continuous and scheduled particle emission
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EmissionModule {
    pub enabled: bool,
    /// Particles per second, over normalized system time
    pub rate_over_time: MinMaxCurve,
    /// Particles per unit of emitter travel. Not simulated: the core has no
    /// emitter motion.
    pub rate_over_distance: MinMaxCurve,
    pub bursts: Vec<Burst>,
}

impl Default for EmissionModule {
    fn default() -> Self {
        Self {
            enabled: true,
            rate_over_time: MinMaxCurve::constant(10.0),
            rate_over_distance: MinMaxCurve::constant(0.0),
            bursts: Vec::new(),
        }
    }
}
