//! Evaporator freeze stat input.
//!
//! A bimetallic freeze stat clamped to the suction line closes when the
//! coil temperature approaches icing, pulling the line HIGH through the
//! reference output.  Level-sensed each tick, no software debouncing.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: reads the real GPIO level via hw_init helpers.
//! On host/test: reads an atomic set by `sim_set_freeze` (default: no
//! freeze condition).

#[cfg(not(target_os = "espidf"))]
use core::sync::atomic::{AtomicBool, Ordering};

#[cfg(target_os = "espidf")]
use crate::drivers::hw_init;
#[cfg(target_os = "espidf")]
use crate::pins;

#[cfg(not(target_os = "espidf"))]
static SIM_FREEZE: AtomicBool = AtomicBool::new(false);

#[cfg(not(target_os = "espidf"))]
pub fn sim_set_freeze(active: bool) {
    SIM_FREEZE.store(active, Ordering::Relaxed);
}

pub struct FreezeStatSensor {
    _gpio: i32,
    last: bool,
}

impl FreezeStatSensor {
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
        hw_init::gpio_read(pins::FREEZE_STAT_GPIO)
    }

    #[cfg(not(target_os = "espidf"))]
    fn read_gpio(&self) -> bool {
        SIM_FREEZE.load(Ordering::Relaxed)
    }
}
