//! atimer_core - Pure no_std software timer for cooperative polling loops
//!
//! This crate contains the platform-agnostic timer state machine and the
//! uptime abstraction it reads from. Everything here can be tested on host
//! without any feature flags or embassy dependencies.
//!
//! # Design Principles
//!
//! - **Zero cfg**: No `#[cfg(feature = ...)]` directives allowed
//! - **Pure no_std**: No std library dependencies
//! - **Trait abstractions**: The uptime counter is injected via [`traits::UptimeSource`]
//!
//! # Modules
//!
//! - [`traits`]: Uptime source trait and its mock
//! - [`timer`]: `Timer` state machine, firing modes, units and configuration

#![no_std]

pub mod timer;
pub mod traits;

pub use timer::{Timer, TimerConfig, TimerMode, TimerUnit, DEFAULT_PERIOD, MIN_PERIOD};
pub use traits::{MockUptime, UptimeSource};
