//! Core traits for platform-agnostic timer functionality.
//!
//! This module provides trait abstractions that decouple the timer state
//! machine from platform-specific uptime counters (Embassy, etc.).
//!
//! # Design
//!
//! - Trait definitions are pure and have no feature gates
//! - Mock implementations are always available for host testing
//! - Platform implementations (Embassy) live in the root crate

pub mod uptime;

pub use uptime::{MockUptime, UptimeSource};
