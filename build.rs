use std::env;
use std::fs;
use std::path::PathBuf;

/// Build-time defaults for the blinker harness: (variable, fallback)
const TIMER_DEFAULTS: [(&str, &str); 3] = [
    ("ATIMER_PERIOD", "1000"),
    ("ATIMER_MODE", "repeat"),
    ("ATIMER_UNIT", "ms"),
];

fn main() {
    // Read timer configuration from environment variables (optional).
    // Values are validated at compile time by `app::config`; anything it
    // cannot parse falls back to the stock defaults there.
    for (name, fallback) in TIMER_DEFAULTS {
        if let Ok(value) = env::var(name) {
            let value = value.trim().to_ascii_lowercase();
            println!("cargo:rustc-env={}={}", name, value);
            println!("cargo:warning=Using {} from environment: {}", name, value);
        } else {
            println!("cargo:rustc-env={}={}", name, fallback);
        }
    }

    // Rerun if environment variables change
    for (name, _) in TIMER_DEFAULTS {
        println!("cargo:rerun-if-env-changed={}", name);
    }
    println!("cargo:rerun-if-changed=build.rs");

    // Linker setup for the RP2350 demo binaries only
    if env::var_os("CARGO_FEATURE_PICO2_W").is_some() {
        let out = PathBuf::from(env::var("OUT_DIR").expect("OUT_DIR is set by cargo"));
        fs::copy("memory.x", out.join("memory.x")).expect("memory.x is readable");
        println!("cargo:rustc-link-search={}", out.display());
        println!("cargo:rerun-if-changed=memory.x");
        println!("cargo:rustc-link-arg-examples=--nmagic");
        println!("cargo:rustc-link-arg-examples=-Tlink.x");
        println!("cargo:rustc-link-arg-examples=-Tdefmt.x");
    }
}
