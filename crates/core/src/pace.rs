//! Pace module - decides when the stack advances
//!
//! Time is passed in by the caller rather than read here, so the gate behaves
//! the same under a real monotonic clock and a scripted one.

use std::time::{Duration, Instant};

use crate::scoring::advance_interval;

#[derive(Debug, Clone)]
pub struct PaceGate {
    speed: u32,
    last_advance: Instant,
    /// Time since the last advance, frozen while paused.
    paused_elapsed: Option<Duration>,
}

impl PaceGate {
    pub fn new(speed: u32, now: Instant) -> Self {
        Self {
            speed,
            last_advance: now,
            paused_elapsed: None,
        }
    }

    pub fn speed(&self) -> u32 {
        self.speed
    }

    pub fn speed_up(&mut self) {
        self.speed = self.speed.saturating_add(1);
    }

    /// Current time between advances.
    pub fn interval(&self) -> Duration {
        advance_interval(self.speed)
    }

    pub fn is_paused(&self) -> bool {
        self.paused_elapsed.is_some()
    }

    /// Time counted toward the next advance.
    pub fn elapsed(&self, now: Instant) -> Duration {
        match self.paused_elapsed {
            Some(frozen) => frozen,
            None => now.saturating_duration_since(self.last_advance),
        }
    }

    /// True once a full interval has passed since the last advance.
    /// Always false while paused.
    pub fn advance_ready(&self, now: Instant) -> bool {
        !self.is_paused() && self.elapsed(now) >= self.interval()
    }

    pub fn mark_advanced(&mut self, now: Instant) {
        self.last_advance = now;
    }

    /// Freeze progress toward the next advance.
    pub fn pause(&mut self, now: Instant) {
        if self.is_paused() {
            return;
        }
        self.paused_elapsed = Some(now.saturating_duration_since(self.last_advance));
    }

    /// Resume with exactly the progress that existed at pause time.
    pub fn unpause(&mut self, now: Instant) {
        let Some(elapsed) = self.paused_elapsed.take() else {
            return;
        };
        self.last_advance = now.checked_sub(elapsed).unwrap_or(self.last_advance);
    }

    pub fn reset(&mut self, speed: u32, now: Instant) {
        self.speed = speed;
        self.last_advance = now;
        self.paused_elapsed = None;
    }
}
