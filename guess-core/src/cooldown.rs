use std::time::{Duration, Instant};

/// Identifies one arming of the gate. A release timer carries the generation
/// it was armed with, so a timer that outlived a re-arm cannot release the
/// newer cooldown.
pub type CooldownGeneration = u64;

#[derive(Debug)]
pub struct CooldownGate {
    duration: Duration,
    active: bool,
    armed_until: Option<Instant>,
    generation: CooldownGeneration,
}

impl CooldownGate {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            active: false,
            armed_until: None,
            generation: 0,
        }
    }

    /// Returns `Some(generation)` and arms the gate, or `None` with no effect
    /// while still cooling down.
    pub fn try_enter(&mut self, now: Instant) -> Option<CooldownGeneration> {
        if self.is_active(now) {
            return None;
        }

        self.generation += 1;
        self.active = true;
        self.armed_until = Some(now + self.duration);
        Some(self.generation)
    }

    /// True until the release timer fires or the deadline passes, whichever
    /// comes first.
    pub fn is_active(&self, now: Instant) -> bool {
        self.active && self.armed_until.is_some_and(|until| now < until)
    }

    /// Timer-driven release. Stale generations are ignored.
    pub fn release(&mut self, generation: CooldownGeneration) -> bool {
        if !self.active || generation != self.generation {
            return false;
        }

        self.active = false;
        self.armed_until = None;
        true
    }

    /// Clock-driven release for callers that poll instead of running timers.
    pub fn release_if_elapsed(&mut self, now: Instant) -> bool {
        if self.active && !self.is_active(now) {
            self.release(self.generation)
        } else {
            false
        }
    }

    pub fn armed_until(&self) -> Option<Instant> {
        self.armed_until
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn generation(&self) -> CooldownGeneration {
        self.generation
    }
}
