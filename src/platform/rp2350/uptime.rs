//! Embassy uptime source
//!
//! Embassy keeps a 64-bit tick counter that never wraps in practice. The
//! timer core expects the 32-bit `millis()`/`micros()` behaviour of small
//! MCUs, so readings are truncated to their low 32 bits and wrap like a
//! hardware counter would.

use atimer_core::traits::UptimeSource;
use embassy_time::Instant;

/// Uptime source backed by the Embassy time driver.
#[derive(Clone, Copy, Default)]
pub struct EmbassyUptime;

impl UptimeSource for EmbassyUptime {
    #[inline]
    fn now_ms(&self) -> u32 {
        Instant::now().as_millis() as u32
    }

    #[inline]
    fn now_us(&self) -> u32 {
        Instant::now().as_micros() as u32
    }
}
