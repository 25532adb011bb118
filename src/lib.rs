#![cfg_attr(not(test), no_std)]

//! atimer - Overflow-safe software timers for cooperative embedded loops
//!
//! This library wires the pure timer core (`atimer_core`) to real targets:
//! platform uptime sources and output pins, logging, build-time
//! configuration, and the polling harness that reacts to triggers.

// Platform abstraction layer (uptime sources, GPIO)
pub mod platform;

// Logging infrastructure
pub mod core;

// Polling harness and build-time configuration
pub mod app;

pub use atimer_core::{
    traits, MockUptime, Timer, TimerConfig, TimerMode, TimerUnit, UptimeSource,
};
