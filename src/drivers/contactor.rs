//! Contactor relay drivers for the compressor and the blower fan.
//!
//! Each driver owns one output GPIO and caches the last commanded level so
//! redundant register writes are skipped and state changes can be logged
//! exactly once. The relays are driven through NPN transistors, active
//! HIGH.

use log::info;

use crate::drivers::hw_init;

/// Compressor contactor relay.
pub struct CompressorContactor {
    gpio: i32,
    on: bool,
}

impl CompressorContactor {
    /// The pin was already initialised LOW by hw_init, so the cached state
    /// starts as off.
    pub fn new(gpio: i32) -> Self {
        Self { gpio, on: false }
    }

    pub fn set(&mut self, on: bool) {
        if on == self.on {
            return;
        }
        hw_init::gpio_write(self.gpio, on);
        self.on = on;
        info!("Compressor contactor {}", if on { "ENERGISED" } else { "released" });
    }

    pub fn is_on(&self) -> bool {
        self.on
    }
}

/// Blower fan contactor relay.
pub struct FanContactor {
    gpio: i32,
    on: bool,
}

impl FanContactor {
    pub fn new(gpio: i32) -> Self {
        Self { gpio, on: false }
    }

    pub fn set(&mut self, on: bool) {
        if on == self.on {
            return;
        }
        hw_init::gpio_write(self.gpio, on);
        self.on = on;
        info!("Fan contactor {}", if on { "energised" } else { "released" });
    }

    pub fn is_on(&self) -> bool {
        self.on
    }
}
