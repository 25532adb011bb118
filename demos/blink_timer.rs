//! Repeat-timer LED blink for RP2350
//!
//! Polls a software timer from a cooperative loop and toggles the onboard
//! LED on every trigger, logging each one over defmt.
//!
//! # Hardware
//!
//! Raspberry Pi Pico 2 W - LED on GPIO25
//!
//! # Usage
//!
//! ```bash
//! ATIMER_PERIOD=500 cargo run --release --features pico2_w --example blink_timer
//! ```

#![no_std]
#![no_main]

use atimer::app::{Blinker, BUILD_CONFIG};
use atimer::platform::rp2350::{EmbassyUptime, Rp2350Output};
use atimer::{log_error, log_info};
use embassy_executor::Spawner;
use embassy_futures::yield_now;
use embassy_rp::block::ImageDef;
use embassy_rp::gpio::Level;
use {defmt_rtt as _, panic_probe as _};

#[link_section = ".start_block"]
#[used]
pub static IMAGE_DEF: ImageDef = ImageDef::secure_exe();

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let p = embassy_rp::init(Default::default());
    log_info!("Starting blink_timer");

    let led = Rp2350Output::new(p.PIN_25, Level::Low);
    let mut blinker = Blinker::new(EmbassyUptime, led, BUILD_CONFIG);

    loop {
        if let Err(e) = blinker.poll() {
            log_error!("blink_timer: {}", e);
        }
        yield_now().await;
    }
}
