//! GPIO interface trait
//!
//! Output pins driven by the timer harness (status LED, trigger line).

use crate::platform::Result;

/// GPIO pin mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "pico2_w", derive(defmt::Format))]
pub enum GpioMode {
    /// Input mode (high impedance)
    Input,
    /// Output mode (push-pull)
    OutputPushPull,
    /// Output mode (open-drain)
    OutputOpenDrain,
}

impl GpioMode {
    /// Whether the pin can be driven in this mode
    pub const fn is_output(&self) -> bool {
        matches!(self, GpioMode::OutputPushPull | GpioMode::OutputOpenDrain)
    }
}

/// GPIO interface trait
///
/// Platform implementations must provide this interface for pins the
/// harness drives on timer triggers.
///
/// # Safety Invariants
///
/// - Only one owner per GPIO pin instance
/// - No concurrent access to the same GPIO pin from multiple contexts
pub trait GpioInterface {
    /// Set GPIO pin high (logic level 1)
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Gpio(GpioError::InvalidMode)` if the pin
    /// is not configured as an output.
    fn set_high(&mut self) -> Result<()>;

    /// Set GPIO pin low (logic level 0)
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Gpio(GpioError::InvalidMode)` if the pin
    /// is not configured as an output.
    fn set_low(&mut self) -> Result<()>;

    /// Toggle GPIO pin state
    ///
    /// The default implementation reads back the level and writes the
    /// opposite one.
    fn toggle(&mut self) -> Result<()> {
        if self.read() {
            self.set_low()
        } else {
            self.set_high()
        }
    }

    /// Read GPIO pin state
    ///
    /// Returns `true` if the pin is high, `false` if low.
    fn read(&self) -> bool;

    /// Get current GPIO pin mode
    fn mode(&self) -> GpioMode;
}
