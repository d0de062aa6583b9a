//! Emission accounting: fractional rate accumulation and burst scheduling

use std::ops::Range;

use crate::config::Burst;

/// Fractional carry-over of the continuous emission rate
///
/// Only whole particles leave the accumulator; the remainder carries to the
/// next frame so the long-run count matches `rate * elapsed` regardless of
/// frame rate.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EmissionAccumulator {
    pending: f32,
}

impl EmissionAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `rate * dt` and take the whole particles out
    ///
    /// Negative or non-finite contributions are ignored.
    pub fn accumulate(&mut self, rate: f32, dt: f32) -> u32 {
        let amount = rate * dt;
        if amount.is_finite() && amount > 0.0 {
            self.pending += amount;
        }

        let whole = self.pending.floor();
        self.pending -= whole;
        whole as u32
    }

    /// Fraction of a particle carried to the next frame
    pub fn pending(&self) -> f32 {
        self.pending
    }

    pub fn reset(&mut self) {
        self.pending = 0.0;
    }
}

/// Time of the `index`-th firing of a burst
#[inline]
fn firing_time(burst: &Burst, index: u32) -> f32 {
    if index == 0 {
        burst.time
    } else {
        burst.time + index as f32 * burst.repeat_interval
    }
}

/// Number of firings a burst can make within one cycle of `duration`
///
/// Firings must start before the end of the cycle. A non-positive interval
/// collapses the burst to a single firing.
fn firing_limit(burst: &Burst, duration: f32) -> u32 {
    if burst.repeat_interval <= 0.0 || !burst.repeat_interval.is_finite() {
        return 1;
    }
    if burst.cycles > 0 {
        return burst.cycles;
    }
    if burst.time >= duration {
        return 1;
    }
    let span = (duration - burst.time) / burst.repeat_interval;
    let mut limit = span.ceil().min(u32::MAX as f32) as u32;
    while limit > 1 && firing_time(burst, limit - 1) >= duration {
        limit -= 1;
    }
    limit.max(1)
}

/// First firing index whose time is not before `t`
fn first_index_at_or_after(burst: &Burst, t: f32, limit: u32) -> u32 {
    if !(burst.repeat_interval > 0.0 && burst.repeat_interval.is_finite()) || t <= burst.time {
        return if firing_time(burst, 0) >= t { 0 } else { limit };
    }
    let estimate = ((t - burst.time) / burst.repeat_interval).ceil();
    let mut index = estimate.clamp(0.0, limit as f32) as u32;
    while index > 0 && firing_time(burst, index - 1) >= t {
        index -= 1;
    }
    while index < limit && firing_time(burst, index) < t {
        index += 1;
    }
    index
}

/// Count the firings of `burst` scheduled inside `window`
///
/// The window is half-open, so a firing exactly at its end belongs to the
/// next frame. Firings at or past `duration` never happen.
pub fn burst_firings(burst: &Burst, window: Range<f32>, duration: f32) -> u32 {
    if window.is_empty() || !burst.time.is_finite() || burst.time < 0.0 {
        return 0;
    }

    let limit = firing_limit(burst, duration);
    let end = window.end.min(duration);
    let first = first_index_at_or_after(burst, window.start, limit);
    let last = first_index_at_or_after(burst, end, limit);
    last.saturating_sub(first)
}

/// Frame intervals of the system clock that bursts are checked against
///
/// A frame that wraps a looping clock covers the tail of the old cycle, any
/// whole cycles stepped over, and the head of the new one.
#[derive(Debug, Clone, PartialEq)]
pub struct BurstWindows {
    pub current: Range<f32>,
    /// Whole `0..duration` cycles passed through inside the frame
    pub skipped_cycles: u32,
    pub duration: f32,
    pub wrapped: Option<Range<f32>>,
}

impl BurstWindows {
    /// Frame that stays inside one cycle
    pub fn within(current: Range<f32>) -> Self {
        Self {
            current,
            skipped_cycles: 0,
            duration: 0.0,
            wrapped: None,
        }
    }

    /// Frame running from `before` to `after` on a clock that wraps at
    /// `duration`; `after` is not yet wrapped
    pub fn wrapping(before: f32, after: f32, duration: f32) -> Self {
        let cycles = (after / duration).floor();
        let skipped_cycles = (cycles - 1.0).clamp(0.0, u32::MAX as f32) as u32;
        Self {
            current: before..duration,
            skipped_cycles,
            duration,
            wrapped: Some(0.0..after % duration),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = Range<f32>> + '_ {
        std::iter::once(self.current.clone())
            .chain(std::iter::repeat_n(
                0.0..self.duration,
                self.skipped_cycles as usize,
            ))
            .chain(self.wrapped.clone())
    }
}
