// Rotation scheduler: Idle / Running / Paused plus the repeating timer.
// The timer is a deadline on the host clock; the engine polls it from tick().

use log::debug;

use crate::types::{SchedulerState, Timestamp};

/// Owns the repeating rotation timer.
#[derive(Debug, Clone)]
pub struct RotationScheduler {
    state: SchedulerState,
    interval_ms: u64,
    next_fire: Option<Timestamp>,
}

impl RotationScheduler {
    pub fn new(interval_ms: u64) -> Self {
        RotationScheduler {
            state: SchedulerState::Idle,
            interval_ms,
            next_fire: None,
        }
    }

    pub fn state(&self) -> SchedulerState {
        self.state
    }

    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    /// When the timer fires next, if armed.
    pub fn next_fire(&self) -> Option<Timestamp> {
        self.next_fire
    }

    /// Idle -> Running. No-op in any other state.
    pub fn start(&mut self, now: Timestamp) -> bool {
        if self.state != SchedulerState::Idle {
            return false;
        }
        self.state = SchedulerState::Running;
        self.arm(now);
        debug!("scheduler started, first tick at {:?}", self.next_fire);
        true
    }

    /// Running -> Paused, cancelling the pending timer.
    pub fn pause(&mut self) -> bool {
        if self.state != SchedulerState::Running {
            return false;
        }
        self.state = SchedulerState::Paused;
        self.next_fire = None;
        debug!("scheduler paused");
        true
    }

    /// Paused -> Running, restarting the timer from `now`.
    pub fn resume(&mut self, now: Timestamp) -> bool {
        if self.state != SchedulerState::Paused {
            return false;
        }
        self.state = SchedulerState::Running;
        self.arm(now);
        debug!("scheduler resumed");
        true
    }

    /// Any state -> Idle. The timer is gone.
    pub fn stop(&mut self) {
        self.state = SchedulerState::Idle;
        self.next_fire = None;
    }

    /// Clear and re-arm the timer, as after a commit. Only while running.
    pub fn restart(&mut self, now: Timestamp) {
        if self.state == SchedulerState::Running {
            self.arm(now);
        }
    }

    /// Fire the timer at most once if its deadline has passed.
    /// Missed periods collapse into this single firing.
    pub fn poll(&mut self, now: Timestamp) -> bool {
        if self.state != SchedulerState::Running {
            return false;
        }
        match self.next_fire {
            Some(deadline) if now >= deadline => {
                self.arm(now);
                true
            }
            _ => false,
        }
    }

    fn arm(&mut self, now: Timestamp) {
        self.next_fire = Some(now.plus_millis(self.interval_ms));
    }
}
