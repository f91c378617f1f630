//! Debounced redraw scheduling for the transport readout.
//!
//! [`RefreshScheduler`] coalesces bursts of change notifications into one
//! pending render and keeps a fallback tick running while visible, so the
//! elapsed-time counter advances without any engine events. [`Blink`] drives
//! the one-second on/off cadence of the paused time display.

use std::time::{Duration, Instant};

use crate::timer::{Timer, earliest};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerState {
    Idle,
    Pending { deadline: Instant },
}

#[derive(Debug)]
pub struct RefreshScheduler {
    timer: Timer,
    fallback: Duration,
    visible: bool,
}

impl RefreshScheduler {
    /// `fallback` is the re-arm interval used after each render while visible.
    pub fn new(fallback: Duration) -> Self {
        Self {
            timer: Timer::default(),
            fallback,
            visible: false,
        }
    }

    /// Schedule a render `delay` from `now`, replacing any pending one.
    pub fn request_refresh(&mut self, now: Instant, delay: Duration) {
        self.timer.arm(now, delay);
    }

    pub fn set_visible(&mut self, now: Instant, visible: bool) {
        self.visible = visible;
        if visible {
            self.request_refresh(now, Duration::ZERO);
        } else {
            self.timer.cancel();
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn state(&self) -> SchedulerState {
        match self.timer.deadline() {
            Some(deadline) => SchedulerState::Pending { deadline },
            None => SchedulerState::Idle,
        }
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.timer.deadline()
    }

    /// Returns `true` when a render is due. The caller renders; the scheduler
    /// has already re-armed itself with the fallback interval if visible.
    pub fn poll(&mut self, now: Instant) -> bool {
        if !self.timer.fire_if_due(now) {
            return false;
        }
        if self.visible {
            self.timer.arm(now, self.fallback);
        }
        true
    }
}

/// On/off phase toggled on a fixed cadence while active.
#[derive(Debug)]
pub struct Blink {
    timer: Timer,
    interval: Duration,
    hidden: bool,
}

impl Blink {
    pub fn new(interval: Duration) -> Self {
        Self {
            timer: Timer::default(),
            interval,
            hidden: false,
        }
    }

    /// Start or stop blinking. Stopping always leaves the text shown.
    pub fn set_active(&mut self, now: Instant, active: bool) {
        if active {
            if !self.timer.is_armed() {
                self.timer.arm(now, self.interval);
            }
        } else {
            self.timer.cancel();
            self.hidden = false;
        }
    }

    pub fn is_active(&self) -> bool {
        self.timer.is_armed()
    }

    pub fn hidden(&self) -> bool {
        self.hidden
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.timer.deadline()
    }

    /// Toggle the phase when due. Returns `true` if it changed.
    pub fn poll(&mut self, now: Instant) -> bool {
        if !self.timer.fire_if_due(now) {
            return false;
        }
        self.hidden = !self.hidden;
        self.timer.arm(now, self.interval);
        true
    }
}

/// Earliest deadline across a scheduler and a blink.
pub fn next_deadline(scheduler: &RefreshScheduler, blink: &Blink) -> Option<Instant> {
    earliest(scheduler.deadline(), blink.deadline())
}
