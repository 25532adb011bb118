//! Core infrastructure shared by the harness and platform layers

pub mod logging;
