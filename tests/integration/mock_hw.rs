//! Mock hardware adapter for integration tests.
//!
//! Records every actuator call so tests can assert on the full command
//! history without touching real GPIO registers.

use frostguard::app::events::AppEvent;
use frostguard::app::ports::{ActuatorPort, EventSink, SensorPort};
use frostguard::fsm::context::InputSnapshot;

// ── Actuator call record ──────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActuatorCall {
    SetCompressor(bool),
    SetFan(bool),
    SetLed(bool),
    AllOff,
}

// ── MockHardware ──────────────────────────────────────────────

pub struct MockHardware {
    pub inputs: InputSnapshot,
    pub calls: Vec<ActuatorCall>,
}

#[allow(dead_code)]
impl MockHardware {
    pub fn new() -> Self {
        Self {
            inputs: InputSnapshot::default(),
            calls: Vec::new(),
        }
    }

    pub fn set_cool_call(&mut self, calling: bool) {
        self.inputs.cool_call = calling;
    }

    pub fn set_freeze(&mut self, active: bool) {
        self.inputs.freeze_signal = active;
    }

    /// Compressor level implied by the most recent relevant call.
    pub fn compressor_on(&self) -> bool {
        self.calls
            .iter()
            .rev()
            .find_map(|c| match c {
                ActuatorCall::SetCompressor(on) => Some(*on),
                ActuatorCall::AllOff => Some(false),
                _ => None,
            })
            .unwrap_or(false)
    }

    /// Fan level implied by the most recent relevant call.
    pub fn fan_on(&self) -> bool {
        self.calls
            .iter()
            .rev()
            .find_map(|c| match c {
                ActuatorCall::SetFan(on) => Some(*on),
                ActuatorCall::AllOff => Some(false),
                _ => None,
            })
            .unwrap_or(false)
    }
}

impl Default for MockHardware {
    fn default() -> Self {
        Self::new()
    }
}

impl SensorPort for MockHardware {
    fn read_inputs(&mut self) -> InputSnapshot {
        self.inputs
    }
}

impl ActuatorPort for MockHardware {
    fn set_compressor(&mut self, on: bool) {
        self.calls.push(ActuatorCall::SetCompressor(on));
    }

    fn set_fan(&mut self, on: bool) {
        self.calls.push(ActuatorCall::SetFan(on));
    }

    fn set_status_led(&mut self, on: bool) {
        self.calls.push(ActuatorCall::SetLed(on));
    }

    fn all_off(&mut self) {
        self.calls.push(ActuatorCall::AllOff);
    }
}

// ── LogSink ───────────────────────────────────────────────────

pub struct LogSink {
    pub events: Vec<String>,
}

#[allow(dead_code)]
impl LogSink {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.events.iter().any(|e| e.contains(needle))
    }
}

impl Default for LogSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for LogSink {
    fn emit(&mut self, event: &AppEvent) {
        self.events.push(format!("{:?}", event));
    }
}
