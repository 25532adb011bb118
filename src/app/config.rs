//! Build-time timer configuration
//!
//! `build.rs` forwards the optional environment variables below to the
//! compiler; they are parsed here at compile time into [`BUILD_CONFIG`].
//!
//! - `ATIMER_PERIOD` - period in the selected unit (default `1000`)
//! - `ATIMER_MODE` - `once` or `repeat` (default `repeat`)
//! - `ATIMER_UNIT` - `ms` or `us` (default `ms`)
//!
//! Values that fail to parse fall back to the defaults. A period of `0`
//! parses fine and is clamped to 1 by the timer.

use atimer_core::{TimerConfig, TimerMode, TimerUnit, DEFAULT_PERIOD};

/// Timer configuration baked in at build time
pub const BUILD_CONFIG: TimerConfig = config_from_strs(
    env!("ATIMER_PERIOD"),
    env!("ATIMER_MODE"),
    env!("ATIMER_UNIT"),
);

/// Assemble a running timer configuration from raw setting strings
pub const fn config_from_strs(period: &str, mode: &str, unit: &str) -> TimerConfig {
    let period = match parse_period(period) {
        Some(p) => p,
        None => DEFAULT_PERIOD,
    };
    let mode = match parse_mode(mode) {
        Some(m) => m,
        None => TimerMode::Repeat,
    };
    let unit = match parse_unit(unit) {
        Some(u) => u,
        None => TimerUnit::Ms,
    };

    TimerConfig {
        period,
        running: true,
        mode,
        unit,
    }
}

/// Parse a decimal `u32` at compile time
///
/// Rejects empty input, non-digits and values above `u32::MAX`.
pub const fn parse_period(s: &str) -> Option<u32> {
    let bytes = s.as_bytes();
    if bytes.is_empty() {
        return None;
    }

    let mut value: u32 = 0;
    let mut i = 0;
    while i < bytes.len() {
        let b = bytes[i];
        if !b.is_ascii_digit() {
            return None;
        }
        value = match value.checked_mul(10) {
            Some(v) => match v.checked_add((b - b'0') as u32) {
                Some(v) => v,
                None => return None,
            },
            None => return None,
        };
        i += 1;
    }
    Some(value)
}

/// Parse `once`/`repeat`
pub const fn parse_mode(s: &str) -> Option<TimerMode> {
    if bytes_eq(s.as_bytes(), b"once") {
        Some(TimerMode::Once)
    } else if bytes_eq(s.as_bytes(), b"repeat") {
        Some(TimerMode::Repeat)
    } else {
        None
    }
}

/// Parse `ms`/`us`
pub const fn parse_unit(s: &str) -> Option<TimerUnit> {
    if bytes_eq(s.as_bytes(), b"ms") {
        Some(TimerUnit::Ms)
    } else if bytes_eq(s.as_bytes(), b"us") {
        Some(TimerUnit::Us)
    } else {
        None
    }
}

const fn bytes_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut i = 0;
    while i < a.len() {
        if a[i] != b[i] {
            return false;
        }
        i += 1;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_period() {
        assert_eq!(parse_period("1000"), Some(1000));
        assert_eq!(parse_period("0"), Some(0));
        assert_eq!(parse_period("4294967295"), Some(u32::MAX));
        assert_eq!(parse_period("4294967296"), None);
        assert_eq!(parse_period(""), None);
        assert_eq!(parse_period("-5"), None);
        assert_eq!(parse_period("1e3"), None);
    }

    #[test]
    fn test_parse_mode_and_unit() {
        assert_eq!(parse_mode("once"), Some(TimerMode::Once));
        assert_eq!(parse_mode("repeat"), Some(TimerMode::Repeat));
        assert_eq!(parse_mode("twice"), None);

        assert_eq!(parse_unit("ms"), Some(TimerUnit::Ms));
        assert_eq!(parse_unit("us"), Some(TimerUnit::Us));
        assert_eq!(parse_unit("s"), None);
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = config_from_strs("soon", "sometimes", "fortnights");
        assert_eq!(config.period, DEFAULT_PERIOD);
        assert_eq!(config.mode, TimerMode::Repeat);
        assert_eq!(config.unit, TimerUnit::Ms);
        assert!(config.running);
    }

    #[test]
    fn test_valid_values_applied() {
        let config = config_from_strs("250", "once", "us");
        assert_eq!(config.period, 250);
        assert_eq!(config.mode, TimerMode::Once);
        assert_eq!(config.unit, TimerUnit::Us);
    }

    #[test]
    fn test_build_config_is_running() {
        assert!(BUILD_CONFIG.running);
    }
}
