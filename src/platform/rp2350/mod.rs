//! RP2350 platform implementation (Raspberry Pi Pico 2 W)
//!
//! Embassy-backed uptime counter and output pin wrapper.

mod gpio;
mod uptime;

pub use gpio::Rp2350Output;
pub use uptime::EmbassyUptime;
