//! Thermostat cooling-call input.
//!
//! The Y wire from the thermostat arrives through an opto-isolator and
//! reads HIGH while the thermostat is calling for cooling.  Level-sensed
//! each tick; the opto plus RC filter on the board debounce the line, so
//! no software debouncing is applied.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: reads the real GPIO level via hw_init helpers.
//! On host/test: reads an atomic set by `sim_set_cool_call` (default: not
//! calling — the safe default).

#[cfg(not(target_os = "espidf"))]
use core::sync::atomic::{AtomicBool, Ordering};

#[cfg(target_os = "espidf")]
use crate::drivers::hw_init;
#[cfg(target_os = "espidf")]
use crate::pins;

#[cfg(not(target_os = "espidf"))]
static SIM_COOL_CALL: AtomicBool = AtomicBool::new(false);

#[cfg(not(target_os = "espidf"))]
pub fn sim_set_cool_call(calling: bool) {
    SIM_COOL_CALL.store(calling, Ordering::Relaxed);
}

pub struct CoolCallSensor {
    _gpio: i32,
    last: bool,
}

impl CoolCallSensor {
    pub fn new(gpio: i32) -> Self {
        Self { _gpio: gpio, last: false }
    }

    pub fn read(&mut self) -> bool {
        self.last = self.read_gpio();
        self.last
    }

    /// Last sampled level without touching the line again.
    pub fn last_level(&self) -> bool {
        self.last
    }

    #[cfg(target_os = "espidf")]
    fn read_gpio(&self) -> bool {
        hw_init::gpio_read(pins::COOL_CALL_GPIO)
    }

    #[cfg(not(target_os = "espidf"))]
    fn read_gpio(&self) -> bool {
        SIM_COOL_CALL.load(Ordering::Relaxed)
    }
}
