//! Software timer driven by a polled uptime counter
//!
//! A [`Timer`] measures elapsed time against a period by sampling an
//! [`UptimeSource`] every time it is polled. It never blocks and owns no
//! interrupt or hardware resource: the host loop calls [`Timer::tick`] often
//! and reacts to the result or to the latched ready flag.
//!
//! # Overflow safety
//!
//! The anchor and every uptime sample are 32-bit counters combined only with
//! wrapping subtraction, so elapsed time stays correct across counter wrap as
//! long as `tick` is called at least once per wrap period.
//!
//! # Example
//!
//! ```
//! use atimer_core::{MockUptime, Timer, TimerMode};
//!
//! let uptime = MockUptime::new();
//! let mut timer = Timer::new(&uptime, 1000, true, TimerMode::Repeat);
//!
//! uptime.set_ms(500);
//! assert!(!timer.tick());
//!
//! uptime.set_ms(1000);
//! assert!(timer.tick());
//! assert!(timer.is_ready_consume());
//! assert!(!timer.is_ready_consume());
//! ```

pub mod types;

pub use types::{TimerConfig, TimerMode, TimerUnit, DEFAULT_PERIOD, MIN_PERIOD};

use crate::traits::UptimeSource;

/// Polled software timer
///
/// `U` is the uptime source; pass `&source` to share one clock between
/// several timers.
#[derive(Debug, Clone)]
pub struct Timer<U: UptimeSource> {
    uptime: U,

    /// Duration between triggers, never 0
    period: u32,

    /// Uptime at the last start/resume/repeat rollover
    anchor: u32,

    /// `now - anchor` as of the last poll; frozen while stopped
    elapsed: u32,

    running: bool,

    /// Latched trigger, cleared by `is_ready_consume`
    ready: bool,

    mode: TimerMode,
    unit: TimerUnit,
}

impl<U: UptimeSource> Timer<U> {
    /// Create a millisecond timer
    ///
    /// # Arguments
    ///
    /// * `uptime` - Uptime source to sample
    /// * `period` - Duration between triggers in ms (0 is clamped to 1)
    /// * `running` - Start counting immediately
    /// * `mode` - Firing policy
    pub fn new(uptime: U, period: u32, running: bool, mode: TimerMode) -> Self {
        let config = TimerConfig {
            period,
            running,
            mode,
            unit: TimerUnit::Ms,
        };
        Self::from_config(uptime, config)
    }

    /// Create a timer from a full configuration
    ///
    /// The unit is applied before the timer is started, so the first anchor
    /// is taken from the right counter.
    pub fn from_config(uptime: U, config: TimerConfig) -> Self {
        let mut timer = Self {
            uptime,
            period: MIN_PERIOD,
            anchor: 0,
            elapsed: 0,
            running: false,
            ready: false,
            mode: config.mode,
            unit: config.unit,
        };
        timer.set_time(config.period);
        if config.running {
            timer.start();
        }
        timer
    }

    #[inline]
    fn now(&self) -> u32 {
        self.uptime.now(self.unit)
    }

    // ------------------------------------------------------------------------
    // Configuration
    // ------------------------------------------------------------------------

    /// Set the trigger period
    ///
    /// A period of 0 is stored as 1: repeat mode would otherwise divide by
    /// zero on the next firing. The anchor is left untouched, so the new
    /// period applies from the next `tick`.
    pub fn set_time(&mut self, period: u32) {
        self.period = period.max(MIN_PERIOD);
    }

    /// Current period in the configured unit
    pub fn period(&self) -> u32 {
        self.period
    }

    pub fn set_mode(&mut self, mode: TimerMode) {
        self.mode = mode;
    }

    /// Select which uptime counter is read
    ///
    /// The anchor is not converted. Changing the unit while the timer is
    /// running mixes two counter scales and corrupts elapsed time until the
    /// next `start`. Prefer fixing the unit through [`TimerConfig`].
    pub fn set_unit(&mut self, unit: TimerUnit) {
        self.unit = unit;
    }

    pub fn mode(&self) -> TimerMode {
        self.mode
    }

    pub fn unit(&self) -> TimerUnit {
        self.unit
    }

    /// Borrow the uptime source
    pub fn uptime(&self) -> &U {
        &self.uptime
    }

    // ------------------------------------------------------------------------
    // Lifecycle
    // ------------------------------------------------------------------------

    /// Start counting from zero, whatever the current state
    pub fn start(&mut self) {
        self.running = true;
        self.anchor = self.now();
        self.elapsed = 0;
    }

    /// Alias for [`start`](Self::start)
    pub fn restart(&mut self) {
        self.start();
    }

    /// Pause, keeping the progress made so far
    ///
    /// No-op when already stopped.
    pub fn stop(&mut self) {
        if self.running {
            self.elapsed = self.now().wrapping_sub(self.anchor);
            self.running = false;
        }
    }

    /// Continue from where [`stop`](Self::stop) left off
    ///
    /// The anchor is rebuilt as `now - elapsed` so no time is lost or gained
    /// across the pause. No-op when already running.
    pub fn resume(&mut self) {
        if !self.running {
            self.anchor = self.now().wrapping_sub(self.elapsed);
            self.running = true;
        }
    }

    /// Make a full period appear elapsed
    ///
    /// A running timer fires on the next `tick`; a stopped one fires on the
    /// first `tick` after `resume`. The cached progress of a running timer
    /// is left for `tick` to refresh.
    pub fn force(&mut self) {
        self.anchor = self.now().wrapping_sub(self.period);
        if !self.running {
            self.elapsed = self.period;
        }
    }

    // ------------------------------------------------------------------------
    // Polling
    // ------------------------------------------------------------------------

    /// Poll the timer
    ///
    /// Must be called often enough that less than one full counter wrap
    /// passes between calls.
    ///
    /// Returns `true` when this call observed the period elapsing. In that
    /// case the ready flag is latched as well and:
    /// - `Repeat`: the anchor advances by whole periods only, so any
    ///   overshoot carries into the next period and late polls do not drift
    ///   the schedule. The sampled elapsed time is kept until the next poll,
    ///   so `time_left` reads 0 right after a firing.
    /// - `Once`: the timer stops with the sampled elapsed time frozen.
    pub fn tick(&mut self) -> bool {
        if !self.running {
            return false;
        }

        self.elapsed = self.now().wrapping_sub(self.anchor);
        if self.elapsed < self.period {
            return false;
        }

        match self.mode {
            TimerMode::Repeat => {
                // period * (elapsed / period) <= elapsed, cannot overflow
                let advance = self.period * (self.elapsed / self.period);
                self.anchor = self.anchor.wrapping_add(advance);
            }
            TimerMode::Once => {
                self.running = false;
            }
        }

        self.ready = true;
        true
    }

    // ------------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------------

    /// Peek at the latched trigger without clearing it
    pub fn is_ready(&self) -> bool {
        self.ready
    }

    /// Take the latched trigger
    ///
    /// Returns `true` at most once per firing.
    pub fn is_ready_consume(&mut self) -> bool {
        core::mem::take(&mut self.ready)
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Whether a full period has passed since the anchor
    ///
    /// Always reads the live counter, whatever the run state. Unlike `tick`
    /// this never changes state.
    pub fn is_elapsed(&self) -> bool {
        self.now().wrapping_sub(self.anchor) >= self.period
    }

    /// Running and not yet due
    pub fn is_active(&self) -> bool {
        self.running && !self.is_elapsed()
    }

    /// Time remaining until the next trigger as of the last poll, never below 0
    pub fn time_left(&self) -> u32 {
        self.period.saturating_sub(self.elapsed)
    }

    /// Remaining time scaled to 0-255 (255 = full period left)
    pub fn time_left_u8(&self) -> u8 {
        self.time_left_scaled(u8::MAX as u64) as u8
    }

    /// Remaining time scaled to 0-65535 (65535 = full period left)
    pub fn time_left_u16(&self) -> u16 {
        self.time_left_scaled(u16::MAX as u64) as u16
    }

    fn time_left_scaled(&self, full: u64) -> u64 {
        if self.elapsed >= self.period {
            return 0;
        }
        full - (self.elapsed as u64 * full) / self.period as u64
    }
}
