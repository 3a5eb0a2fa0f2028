//! Application service — the hexagonal core.
//!
//! [`ControllerService`] owns the FSM and shared context.  It exposes a
//! clean, hardware-agnostic API.  All I/O flows through port traits
//! injected at call sites, making the entire service testable with mock
//! adapters.
//!
//! ```text
//!  SensorPort ──▶ ┌────────────────────────┐ ──▶ EventSink
//!                 │   ControllerService     │
//! ActuatorPort ◀──│  FSM · rest timer       │
//!                 └────────────────────────┘
//! ```

use log::{info, warn};

use crate::config::SystemConfig;
use crate::fsm::context::FsmContext;
use crate::fsm::states::build_state_table;
use crate::fsm::{Fsm, StateId};

use super::events::{AppEvent, TelemetryData};
use super::ports::{ActuatorPort, EventSink, SensorPort};

// ───────────────────────────────────────────────────────────────
// ControllerService
// ───────────────────────────────────────────────────────────────

/// The application service orchestrates all domain logic.
pub struct ControllerService {
    fsm: Fsm,
    ctx: FsmContext,
    tick_count: u64,
    /// Last freeze-stat level, for edge detection in event emission.
    last_freeze: bool,
}

impl ControllerService {
    /// Construct the service from configuration.
    ///
    /// Does **not** start the FSM — call [`Self::start_with_recovery`] (or
    /// [`Self::start`] in tests) next.
    pub fn new(config: SystemConfig) -> Self {
        let ctx = FsmContext::new(config);
        let state_table = build_state_table();
        let fsm = Fsm::new(state_table, StateId::Idle);

        Self {
            fsm,
            ctx,
            tick_count: 0,
            last_freeze: false,
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Start the FSM in its default initial state (Idle).
    pub fn start(&mut self, sink: &mut impl EventSink) {
        self.fsm.start(&mut self.ctx);
        sink.emit(&AppEvent::Started(self.fsm.current_state()));
        info!("ControllerService started in {:?}", self.fsm.current_state());
    }

    /// Power-loss recovery rule.  Runs exactly once, before the sampling
    /// loop.
    ///
    /// The controller has no memory of compressor history across a restart.
    /// If the thermostat is already calling for cool at first sample, a
    /// power blip may have interrupted a run — assume the worst and take a
    /// full minimum-offtime rest (compressor off, fan purging) before any
    /// run is allowed.  If the call reads false, no run can be pending and
    /// no rest is needed.
    pub fn start_with_recovery(
        &mut self,
        hw: &mut (impl SensorPort + ActuatorPort),
        sink: &mut impl EventSink,
    ) {
        let snapshot = hw.read_inputs();
        self.ctx.inputs = snapshot;

        self.fsm.start(&mut self.ctx);
        if snapshot.cool_call {
            warn!("Recovery: cool call active at boot, forcing a full rest");
            self.ctx.ticks_since_stop = 0;
            self.fsm.force_transition(StateId::Resting, &mut self.ctx);
        }
        self.apply_actuators(hw);
        sink.emit(&AppEvent::Started(self.fsm.current_state()));
        info!("ControllerService started in {:?}", self.fsm.current_state());
    }

    // ── Per-tick orchestration ────────────────────────────────

    /// Run one full control cycle: sample lines → FSM → rest timer →
    /// contactors.
    ///
    /// The `hw` parameter satisfies **both** [`SensorPort`] and
    /// [`ActuatorPort`] — this avoids a double mutable borrow while
    /// keeping the port boundary explicit.
    pub fn tick(&mut self, hw: &mut (impl SensorPort + ActuatorPort), sink: &mut impl EventSink) {
        self.tick_count += 1;
        let prev_state = self.fsm.current_state();

        // 1. Sample both lines via SensorPort
        let snapshot = hw.read_inputs();
        self.ctx.inputs = snapshot;

        if snapshot.freeze_signal && !self.last_freeze {
            warn!("Freeze stat asserted");
            sink.emit(&AppEvent::FreezeDetected);
        }
        self.last_freeze = snapshot.freeze_signal;

        // 2. FSM tick (pure state logic; freeze checked before call logic)
        self.fsm.tick(&mut self.ctx);

        // 3. Maintain the anti-short-cycle rest timer from the commanded
        //    output, so the offtime guard holds across every path into
        //    Running, including freeze holds cut short by a fast thaw.
        if self.ctx.commands.compressor {
            self.ctx.ticks_since_stop = 0;
        } else {
            self.ctx.ticks_since_stop = self.ctx.ticks_since_stop.saturating_add(1);
        }

        // 4. Apply contactor commands via ActuatorPort
        self.apply_actuators(hw);

        // 5. Emit state change if the FSM moved
        let new_state = self.fsm.current_state();
        if new_state != prev_state {
            sink.emit(&AppEvent::StateChanged {
                from: prev_state,
                to: new_state,
            });
        }
    }

    // ── Queries ───────────────────────────────────────────────

    /// Build a telemetry snapshot from the current context.
    pub fn build_telemetry(&self) -> TelemetryData {
        TelemetryData {
            state: self.fsm.current_state(),
            cool_call: self.ctx.inputs.cool_call,
            freeze_signal: self.ctx.inputs.freeze_signal,
            compressor_on: self.ctx.commands.compressor,
            fan_on: self.ctx.commands.fan,
            total_ticks: self.ctx.total_ticks,
        }
    }

    /// Current FSM state.
    pub fn state(&self) -> StateId {
        self.fsm.current_state()
    }

    /// Total control ticks executed since startup.
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Clone of the live configuration (for diagnostics dumps).
    pub fn current_config(&self) -> SystemConfig {
        self.ctx.config.clone()
    }

    // ── Internal ──────────────────────────────────────────────

    /// Translate FSM contactor commands into port calls.
    ///
    /// Ordering matters when dropping out of a run: the compressor is
    /// released before the fan is touched, so a fault between the two
    /// writes can never leave the compressor running without the fan.
    fn apply_actuators(&self, hw: &mut impl ActuatorPort) {
        let cmds = &self.ctx.commands;

        if cmds.compressor {
            hw.set_fan(true);
            hw.set_compressor(true);
        } else {
            hw.set_compressor(false);
            hw.set_fan(cmds.fan);
        }
    }
}
