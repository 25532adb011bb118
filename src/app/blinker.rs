//! Trigger-driven output toggling
//!
//! The polling pattern every host loop follows: `tick` the timer, consume the
//! latched trigger, act on it. Here the action is flipping an output pin
//! (typically the onboard LED) and logging the uptime of the trigger.
//!
//! # Example
//!
//! ```ignore
//! let mut blinker = Blinker::new(EmbassyUptime, led, BUILD_CONFIG);
//! loop {
//!     blinker.poll()?;
//!     yield_now().await;
//! }
//! ```

use atimer_core::{Timer, TimerConfig, UptimeSource};

use crate::platform::{GpioInterface, Result};
use crate::{log_error, log_info, log_warn};

/// Timer plus the pin it toggles
pub struct Blinker<U: UptimeSource, P: GpioInterface> {
    timer: Timer<U>,
    pin: P,
    /// Triggers handled so far
    toggles: u32,
    /// Uptime (in the timer's unit) of the last handled trigger
    last_trigger: Option<u32>,
}

impl<U: UptimeSource, P: GpioInterface> Blinker<U, P> {
    /// Build the timer from `config` and start it
    ///
    /// `config.running` is ignored; a blinker always starts counting
    /// immediately.
    pub fn new(uptime: U, pin: P, config: TimerConfig) -> Self {
        if !config.is_valid() {
            log_warn!("blinker: period {} is invalid, clamping to 1", config.period);
        }

        let timer = Timer::from_config(uptime, config.with_running(true));
        log_info!(
            "blinker: period {} {}, mode {}",
            timer.period(),
            timer.unit().as_str(),
            timer.mode().as_str()
        );

        Self {
            timer,
            pin,
            toggles: 0,
            last_trigger: None,
        }
    }

    /// Run one iteration of the polling loop
    ///
    /// Returns `Ok(true)` when a trigger was consumed and the pin toggled.
    ///
    /// # Errors
    ///
    /// Propagates the pin error; the trigger is still consumed.
    pub fn poll(&mut self) -> Result<bool> {
        self.timer.tick();
        if !self.timer.is_ready_consume() {
            return Ok(false);
        }

        let now = self.timer.uptime().now(self.timer.unit());
        self.pin.toggle().map_err(|e| {
            log_error!("blinker: toggle failed at {}: {}", now, e.as_str());
            e
        })?;

        self.toggles = self.toggles.wrapping_add(1);
        self.last_trigger = Some(now);
        log_info!("[{}] Trigger!", now);

        Ok(true)
    }

    pub fn timer(&self) -> &Timer<U> {
        &self.timer
    }

    /// Mutable timer access for reconfiguration (pause, new period, ...)
    pub fn timer_mut(&mut self) -> &mut Timer<U> {
        &mut self.timer
    }

    pub fn pin(&self) -> &P {
        &self.pin
    }

    pub fn toggles(&self) -> u32 {
        self.toggles
    }

    pub fn last_trigger(&self) -> Option<u32> {
        self.last_trigger
    }
}
