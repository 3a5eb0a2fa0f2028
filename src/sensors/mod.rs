//! Sensor subsystem — individual line drivers and the aggregating [`SensorHub`].
//!
//! The hub owns both input drivers and produces an [`InputSnapshot`] each
//! tick that gets written into `FsmContext.inputs`.

pub mod call;
pub mod freeze;

use crate::fsm::context::InputSnapshot;
use call::CoolCallSensor;
use freeze::FreezeStatSensor;

/// Aggregates both input drivers and produces a unified snapshot.
pub struct SensorHub {
    pub cool_call: CoolCallSensor,
    pub freeze: FreezeStatSensor,
}

impl SensorHub {
    /// Construct a new hub.  Pass in pre-built drivers (built in main
    /// where peripheral ownership is established).
    pub fn new(cool_call: CoolCallSensor, freeze: FreezeStatSensor) -> Self {
        Self { cool_call, freeze }
    }

    /// Sample both lines and return a unified snapshot.
    pub fn read_all(&mut self) -> InputSnapshot {
        InputSnapshot {
            cool_call: self.cool_call.read(),
            freeze_signal: self.freeze.read(),
        }
    }
}
