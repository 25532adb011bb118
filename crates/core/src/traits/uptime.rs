//! Uptime abstraction for platform-agnostic timer polling.
//!
//! This module provides the `UptimeSource` trait that abstracts over the
//! "time since boot" counters of different platforms (Embassy, mock, etc.)
//! so timer logic can be tested on host without embedded dependencies.

use core::cell::Cell;

use crate::timer::TimerUnit;

/// Monotonic 32-bit uptime counter.
///
/// Both readings increase monotonically modulo 2^32 and wrap on overflow,
/// like `millis()`/`micros()` on a microcontroller. Consumers must only
/// ever subtract an earlier reading from a later one with wrapping
/// arithmetic; the result is correct as long as the true interval is
/// shorter than one full wrap (~49.7 days in ms, ~71.6 minutes in us).
///
/// Implementations:
/// - `EmbassyUptime` (in the root crate) for embedded targets using Embassy
/// - [`MockUptime`] for host testing with controllable time
///
/// # Example
///
/// ```
/// use atimer_core::traits::{MockUptime, UptimeSource};
///
/// fn elapsed_ms<U: UptimeSource>(uptime: &U, since: u32) -> u32 {
///     uptime.now_ms().wrapping_sub(since)
/// }
///
/// let uptime = MockUptime::new();
/// uptime.set_ms(u32::MAX as u64 - 9);
/// let since = uptime.now_ms();
///
/// uptime.advance_ms(25); // wraps past zero
/// assert_eq!(elapsed_ms(&uptime, since), 25);
/// ```
pub trait UptimeSource {
    /// Returns milliseconds since system start, modulo 2^32.
    fn now_ms(&self) -> u32;

    /// Returns microseconds since system start, modulo 2^32.
    fn now_us(&self) -> u32;

    /// Returns the reading matching `unit`.
    #[inline]
    fn now(&self, unit: TimerUnit) -> u32 {
        match unit {
            TimerUnit::Ms => self.now_ms(),
            TimerUnit::Us => self.now_us(),
        }
    }
}

impl<S: UptimeSource + ?Sized> UptimeSource for &S {
    #[inline]
    fn now_ms(&self) -> u32 {
        (**self).now_ms()
    }

    #[inline]
    fn now_us(&self) -> u32 {
        (**self).now_us()
    }
}

// ============================================================================
// Mock Implementation (always available for testing)
// ============================================================================

/// Mock uptime source with controllable time advancement.
///
/// Time is kept as a 64-bit microsecond count; each reading exposes only the
/// low 32 bits of its own scale, so the millisecond and microsecond counters
/// wrap independently exactly like hardware counters do.
///
/// Hand timers a shared reference (`Timer::new(&uptime, ...)`) so the test
/// can keep moving the clock while the timer reads it.
///
/// # Example
///
/// ```
/// use atimer_core::traits::{MockUptime, UptimeSource};
///
/// let uptime = MockUptime::new();
/// assert_eq!(uptime.now_us(), 0);
///
/// uptime.advance(1000); // Advance 1ms
/// assert_eq!(uptime.now_us(), 1000);
/// assert_eq!(uptime.now_ms(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockUptime {
    current_us: Cell<u64>,
}

impl MockUptime {
    /// Creates a new `MockUptime` starting at time 0.
    pub fn new() -> Self {
        Self {
            current_us: Cell::new(0),
        }
    }

    /// Creates a new `MockUptime` starting at the specified microsecond count.
    pub fn with_initial(us: u64) -> Self {
        Self {
            current_us: Cell::new(us),
        }
    }

    /// Sets the current time to an absolute microsecond count.
    pub fn set(&self, us: u64) {
        self.current_us.set(us);
    }

    /// Sets the current time to an absolute millisecond count.
    pub fn set_ms(&self, ms: u64) {
        self.set(ms.wrapping_mul(1000));
    }

    /// Advances the current time by the specified number of microseconds.
    pub fn advance(&self, us: u64) {
        self.current_us.set(self.current_us.get().wrapping_add(us));
    }

    /// Advances the current time by the specified number of milliseconds.
    pub fn advance_ms(&self, ms: u64) {
        self.advance(ms.wrapping_mul(1000));
    }
}

impl UptimeSource for MockUptime {
    fn now_ms(&self) -> u32 {
        (self.current_us.get() / 1000) as u32
    }

    fn now_us(&self) -> u32 {
        self.current_us.get() as u32
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
