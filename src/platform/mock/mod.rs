//! Mock platform implementation for testing
//!
//! Mock peripherals usable in host tests without actual hardware.
//! The uptime mock lives in `atimer_core::traits::MockUptime`.
//!
//! # Feature Gate
//!
//! This module is available in two contexts:
//! - During test builds (`#[cfg(test)]`)
//! - When the `mock` feature is enabled

#![cfg(any(test, feature = "mock"))]

mod gpio;

pub use gpio::MockGpio;
