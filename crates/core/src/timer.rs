//! Round timers - countdown and one-shot delays
//!
//! Both timers are plain owned state advanced by `tick(elapsed_ms)`. Nothing runs
//! in the background: a cancelled or dropped timer can never fire later.

use crate::types::TIMER_TICK_MS;

/// Result of advancing a [`Countdown`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CountdownTick {
    /// Whole seconds that elapsed during this tick
    pub seconds: u32,
    /// The countdown reached zero during this tick
    pub expired: bool,
}

/// Remaining-seconds counter decremented once per accumulated second
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Countdown {
    remaining_secs: u32,
    carry_ms: u32,
    running: bool,
}

impl Countdown {
    /// Idle countdown (never ticks until started)
    pub fn idle() -> Self {
        Self::default()
    }

    /// (Re)start from `secs`
    pub fn start(&mut self, secs: u32) {
        self.remaining_secs = secs;
        self.carry_ms = 0;
        self.running = true;
    }

    /// Stop ticking. Remaining time is kept for reporting.
    pub fn cancel(&mut self) {
        self.running = false;
        self.carry_ms = 0;
    }

    pub fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Milliseconds accumulated towards the next decrement
    pub fn carry_ms(&self) -> u32 {
        self.carry_ms
    }

    pub fn tick(&mut self, elapsed_ms: u32) -> CountdownTick {
        let mut out = CountdownTick::default();
        if !self.running {
            return out;
        }

        self.carry_ms = self.carry_ms.saturating_add(elapsed_ms);
        while self.carry_ms >= TIMER_TICK_MS && self.remaining_secs > 0 {
            self.carry_ms -= TIMER_TICK_MS;
            self.remaining_secs -= 1;
            out.seconds += 1;
        }

        if self.remaining_secs == 0 {
            self.cancel();
            out.expired = true;
        }
        out
    }
}

/// One-shot cancelable delay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Delay {
    remaining_ms: u32,
    armed: bool,
}

impl Delay {
    /// Arm (or re-arm) to fire after `ms`
    pub fn arm(&mut self, ms: u32) {
        self.remaining_ms = ms;
        self.armed = true;
    }

    pub fn cancel(&mut self) {
        self.armed = false;
        self.remaining_ms = 0;
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    pub fn remaining_ms(&self) -> u32 {
        self.remaining_ms
    }

    /// Advance; returns true exactly once, on the tick the delay elapses
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if !self.armed {
            return false;
        }
        self.remaining_ms = self.remaining_ms.saturating_sub(elapsed_ms);
        if self.remaining_ms == 0 {
            self.armed = false;
            return true;
        }
        false
    }
}
