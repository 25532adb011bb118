//! Mock GPIO implementation for testing

use crate::platform::{
    error::{GpioError, PlatformError},
    traits::{GpioInterface, GpioMode},
    Result,
};

/// Mock GPIO implementation
///
/// Tracks pin level, mode and the number of level changes for test
/// verification.
#[derive(Debug)]
pub struct MockGpio {
    state: bool,
    mode: GpioMode,
    edges: u32,
}

impl MockGpio {
    /// Create a new mock GPIO in output mode, driven low
    pub fn new_output() -> Self {
        Self {
            state: false,
            mode: GpioMode::OutputPushPull,
            edges: 0,
        }
    }

    /// Create a new mock GPIO in input mode
    pub fn new_input() -> Self {
        Self {
            state: false,
            mode: GpioMode::Input,
            edges: 0,
        }
    }

    /// Number of times the driven level actually changed
    pub fn edges(&self) -> u32 {
        self.edges
    }

    fn drive(&mut self, high: bool) -> Result<()> {
        if !self.mode.is_output() {
            return Err(PlatformError::Gpio(GpioError::InvalidMode));
        }
        if self.state != high {
            self.edges += 1;
        }
        self.state = high;
        Ok(())
    }
}

impl Default for MockGpio {
    fn default() -> Self {
        Self::new_output()
    }
}

impl GpioInterface for MockGpio {
    fn set_high(&mut self) -> Result<()> {
        self.drive(true)
    }

    fn set_low(&mut self) -> Result<()> {
        self.drive(false)
    }

    fn read(&self) -> bool {
        self.state
    }

    fn mode(&self) -> GpioMode {
        self.mode
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_gpio_output() {
        let mut gpio = MockGpio::new_output();
        assert!(!gpio.read());

        gpio.set_high().unwrap();
        assert!(gpio.read());

        gpio.set_low().unwrap();
        assert!(!gpio.read());
        assert_eq!(gpio.edges(), 2);
    }

    #[test]
    fn test_mock_gpio_toggle() {
        let mut gpio = MockGpio::new_output();

        gpio.toggle().unwrap();
        assert!(gpio.read());

        gpio.toggle().unwrap();
        assert!(!gpio.read());
    }

    #[test]
    fn test_mock_gpio_repeated_level_is_not_an_edge() {
        let mut gpio = MockGpio::new_output();
        gpio.set_low().unwrap();
        gpio.set_high().unwrap();
        gpio.set_high().unwrap();
        assert_eq!(gpio.edges(), 1);
    }

    #[test]
    fn test_mock_gpio_input_rejects_writes() {
        let mut gpio = MockGpio::new_input();
        assert_eq!(gpio.mode(), GpioMode::Input);

        assert_eq!(
            gpio.set_high(),
            Err(PlatformError::Gpio(GpioError::InvalidMode))
        );
        assert!(gpio.set_low().is_err());
        assert!(gpio.toggle().is_err());
    }
}
