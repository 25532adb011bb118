//! Platform error types
//!
//! This module defines error types for platform operations used by the
//! timer harness. Timer arithmetic itself is infallible; only pin I/O can
//! fail.

use core::fmt;

/// Result type for platform operations
pub type Result<T> = core::result::Result<T, PlatformError>;

/// Platform-level errors
///
/// All platform implementations map their HAL-specific errors to these variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "pico2_w", derive(defmt::Format))]
pub enum PlatformError {
    /// GPIO operation failed
    Gpio(GpioError),
}

/// GPIO-specific errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "pico2_w", derive(defmt::Format))]
pub enum GpioError {
    /// Invalid mode for operation
    InvalidMode,
    /// Underlying HAL reported a failure
    HardwareError,
}

impl fmt::Display for PlatformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlatformError::Gpio(e) => write!(f, "GPIO error: {}", e),
        }
    }
}

impl fmt::Display for GpioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GpioError::InvalidMode => write!(f, "pin mode does not allow this operation"),
            GpioError::HardwareError => write!(f, "hardware failure"),
        }
    }
}

impl PlatformError {
    /// Return a short static description (usable with defmt on embedded)
    pub fn as_str(&self) -> &'static str {
        match self {
            PlatformError::Gpio(GpioError::InvalidMode) => "GPIO InvalidMode",
            PlatformError::Gpio(GpioError::HardwareError) => "GPIO HardwareError",
        }
    }
}
