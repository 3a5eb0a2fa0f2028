//! Hardware adapter — bridges real peripherals to domain port traits.
//!
//! Owns the [`SensorHub`] and both contactor drivers, exposing them
//! through [`SensorPort`] and [`ActuatorPort`].  This is the only module
//! in the system that touches actual hardware.  On non-espidf targets,
//! the underlying drivers use cfg-gated simulation stubs.

use crate::app::ports::{ActuatorPort, SensorPort};
use crate::drivers::contactor::{CompressorContactor, FanContactor};
use crate::drivers::status_led::StatusLed;
use crate::fsm::context::InputSnapshot;
use crate::sensors::SensorHub;

/// Concrete adapter that combines all hardware behind port traits.
pub struct HardwareAdapter {
    sensor_hub: SensorHub,
    compressor: CompressorContactor,
    fan: FanContactor,
    led: StatusLed,
}

impl HardwareAdapter {
    pub fn new(
        sensor_hub: SensorHub,
        compressor: CompressorContactor,
        fan: FanContactor,
        led: StatusLed,
    ) -> Self {
        Self {
            sensor_hub,
            compressor,
            fan,
            led,
        }
    }
}

// ── SensorPort implementation ─────────────────────────────────

impl SensorPort for HardwareAdapter {
    fn read_inputs(&mut self) -> InputSnapshot {
        self.sensor_hub.read_all()
    }
}

// ── ActuatorPort implementation ───────────────────────────────

impl ActuatorPort for HardwareAdapter {
    fn set_compressor(&mut self, on: bool) {
        self.compressor.set(on);
    }

    fn set_fan(&mut self, on: bool) {
        self.fan.set(on);
    }

    fn set_status_led(&mut self, on: bool) {
        self.led.set(on);
    }

    fn all_off(&mut self) {
        self.compressor.set(false);
        self.fan.set(false);
        self.led.set(false);
    }
}
