//! Timer configuration types
//!
//! - [`TimerMode`]: firing policy (one-shot or repeating)
//! - [`TimerUnit`]: which uptime counter the timer reads
//! - [`TimerConfig`]: construction-time settings with the stock defaults

/// Default period in the configured unit
pub const DEFAULT_PERIOD: u32 = 1000;

/// Smallest period a timer will hold; zero is clamped up to this
pub const MIN_PERIOD: u32 = 1;

/// Firing policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimerMode {
    /// Fire once, then stop
    #[default]
    Once,
    /// Fire every period, keeping phase across late polls
    Repeat,
}

impl TimerMode {
    /// Return variant name as a static string (usable with defmt on embedded)
    pub fn as_str(&self) -> &'static str {
        match self {
            TimerMode::Once => "Once",
            TimerMode::Repeat => "Repeat",
        }
    }
}

/// Resolution of the uptime counter a timer reads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimerUnit {
    /// Milliseconds since boot
    #[default]
    Ms,
    /// Microseconds since boot
    Us,
}

impl TimerUnit {
    /// Return variant name as a static string (usable with defmt on embedded)
    pub fn as_str(&self) -> &'static str {
        match self {
            TimerUnit::Ms => "ms",
            TimerUnit::Us => "us",
        }
    }
}

/// Timer construction settings
///
/// Building a timer from a config applies the unit before the first anchor
/// is taken, which avoids the mid-run unit switch caveat of
/// [`Timer::set_unit`](super::Timer::set_unit).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerConfig {
    /// Duration between triggers, in `unit`
    pub period: u32,
    /// Start counting immediately on construction
    pub running: bool,
    /// Firing policy
    pub mode: TimerMode,
    /// Uptime counter resolution
    pub unit: TimerUnit,
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            period: DEFAULT_PERIOD,
            running: false,
            mode: TimerMode::Once,
            unit: TimerUnit::Ms,
        }
    }
}

impl TimerConfig {
    /// Set the period (0 is accepted here and clamped by the timer)
    pub const fn with_period(mut self, period: u32) -> Self {
        self.period = period;
        self
    }

    /// Set whether the timer starts on construction
    pub const fn with_running(mut self, running: bool) -> Self {
        self.running = running;
        self
    }

    /// Set the firing policy
    pub const fn with_mode(mut self, mode: TimerMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the uptime counter resolution
    pub const fn with_unit(mut self, unit: TimerUnit) -> Self {
        self.unit = unit;
        self
    }

    /// Validate configuration
    ///
    /// # Returns
    ///
    /// true if the period is usable without clamping
    pub const fn is_valid(&self) -> bool {
        self.period >= MIN_PERIOD
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = TimerConfig::default();
        assert_eq!(config.period, 1000);
        assert!(!config.running);
        assert_eq!(config.mode, TimerMode::Once);
        assert_eq!(config.unit, TimerUnit::Ms);
        assert!(config.is_valid());
    }

    #[test]
    fn test_config_builder() {
        let config = TimerConfig::default()
            .with_period(250)
            .with_running(true)
            .with_mode(TimerMode::Repeat)
            .with_unit(TimerUnit::Us);

        assert_eq!(config.period, 250);
        assert!(config.running);
        assert_eq!(config.mode, TimerMode::Repeat);
        assert_eq!(config.unit, TimerUnit::Us);
    }

    #[test]
    fn test_config_zero_period_invalid() {
        let config = TimerConfig::default().with_period(0);
        assert!(!config.is_valid());
    }

    #[test]
    fn test_enum_names() {
        assert_eq!(TimerMode::Once.as_str(), "Once");
        assert_eq!(TimerMode::Repeat.as_str(), "Repeat");
        assert_eq!(TimerUnit::Ms.as_str(), "ms");
        assert_eq!(TimerUnit::Us.as_str(), "us");
    }
}
