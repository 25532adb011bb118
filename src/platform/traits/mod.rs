//! Platform abstraction traits
//!
//! The uptime trait lives in `atimer_core::traits`; only pin I/O is
//! defined here.

pub mod gpio;

pub use gpio::{GpioInterface, GpioMode};
