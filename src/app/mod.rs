//! Application harness
//!
//! Glue that polls a timer from a cooperative loop and reacts to triggers.
//!
//! - [`config`]: build-time timer defaults (`ATIMER_*` environment variables)
//! - [`blinker`]: toggles an output pin and logs on every trigger

pub mod blinker;
pub mod config;

pub use blinker::Blinker;
pub use config::BUILD_CONFIG;
