//! Platform abstraction layer
//!
//! Hardware-facing pieces the timer harness needs: the GPIO interface for
//! the trigger output and the uptime source of each target. All
//! platform-specific code is isolated to this module.

pub mod error;
pub mod traits;

// Platform implementations (feature-gated)
#[cfg(feature = "pico2_w")]
pub mod rp2350;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

// Re-export commonly used types
pub use error::{GpioError, PlatformError, Result};
pub use traits::{GpioInterface, GpioMode};
