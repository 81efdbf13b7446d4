use std::time::{Duration, Instant};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DriverState {
    Stopped,
    Running,
    Paused,
}

/// Fixed-interval scheduler polled once per frame.
///
/// The caller passes the current time in and runs one engine step per step
/// reported by [`LoopDriver::poll`], then renders.
#[derive(Debug)]
pub struct LoopDriver {
    interval: Duration,
    state: DriverState,
    next_due: Option<Instant>,
    max_catch_up: u32,
}

impl LoopDriver {
    /// Steps returned by a single `poll` after a stall; the rest of the backlog is dropped.
    pub const DEFAULT_MAX_CATCH_UP: u32 = 4;

    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            state: DriverState::Stopped,
            next_due: None,
            max_catch_up: Self::DEFAULT_MAX_CATCH_UP,
        }
    }

    pub fn with_max_catch_up(mut self, max_catch_up: u32) -> Self {
        self.max_catch_up = max_catch_up.max(1);
        self
    }

    pub fn state(&self) -> DriverState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == DriverState::Running
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Takes effect from the next scheduled step on.
    pub fn set_interval(&mut self, interval: Duration) {
        self.interval = interval;
    }

    /// (Re)starts the schedule; the first step is due one interval from `now`.
    pub fn start(&mut self, now: Instant) {
        self.state = DriverState::Running;
        self.next_due = Some(now + self.interval);
    }

    pub fn pause(&mut self) {
        if self.state == DriverState::Running {
            self.state = DriverState::Paused;
            self.next_due = None;
        }
    }

    pub fn resume(&mut self, now: Instant) {
        if self.state == DriverState::Paused {
            self.start(now);
        }
    }

    pub fn stop(&mut self) {
        self.state = DriverState::Stopped;
        self.next_due = None;
    }

    /// Play/pause toggle; a stopped driver is started.
    pub fn toggle(&mut self, now: Instant) {
        match self.state {
            DriverState::Running => self.pause(),
            DriverState::Paused => self.resume(now),
            DriverState::Stopped => self.start(now),
        }
    }

    /// Number of steps that became due up to `now`.
    pub fn poll(&mut self, now: Instant) -> u32 {
        let Some(mut due) = self.next_due.filter(|_| self.is_running()) else {
            return 0;
        };
        let mut steps = 0;
        while due <= now && steps < self.max_catch_up {
            steps += 1;
            due += self.interval;
        }
        if due <= now {
            log::trace!("loop driver fell behind, dropping backlog");
            due = now + self.interval;
        }
        self.next_due = Some(due);
        steps
    }

    /// Time left until the next step, if one is scheduled.
    pub fn time_until_next(&self, now: Instant) -> Option<Duration> {
        self.next_due.map(|due| due.saturating_duration_since(now))
    }
}
