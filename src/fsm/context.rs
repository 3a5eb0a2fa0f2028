//! Shared mutable context threaded through every FSM handler.
//!
//! `FsmContext` is the single struct that state handlers read from and
//! write to.  It contains the latest input sample, the contactor command
//! outputs, timing information, and configuration.  Think of it as the
//! "blackboard" in a blackboard architecture.

use crate::config::SystemConfig;

// ---------------------------------------------------------------------------
// Input snapshot (read-only to state handlers; written by the service)
// ---------------------------------------------------------------------------

/// A point-in-time sample of both sensor lines.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputSnapshot {
    /// Thermostat is calling for cooling.
    pub cool_call: bool,
    /// Freeze stat reports an evaporator icing risk.
    pub freeze_signal: bool,
}

// ---------------------------------------------------------------------------
// Output commands (written by state handlers; applied by the service)
// ---------------------------------------------------------------------------

/// Commands that state handlers write to request contactor actions.
/// The service applies these to the actual drivers each tick.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputCommands {
    /// Compressor contactor energised.
    pub compressor: bool,
    /// Blower fan contactor energised.
    pub fan: bool,
}

impl OutputCommands {
    /// Both contactors off — safe default.
    pub fn all_off() -> Self {
        Self::default()
    }
}

// ---------------------------------------------------------------------------
// FsmContext
// ---------------------------------------------------------------------------

/// The shared context passed to every state handler function.
pub struct FsmContext {
    // -- Timing --
    /// Ticks elapsed since the current state was entered.
    pub ticks_in_state: u64,
    /// Monotonic total tick count.
    pub total_ticks: u64,
    /// Duration of one tick in seconds (inverse of control loop frequency).
    pub tick_period_secs: f32,
    /// Ticks since the compressor contactor last dropped out.  Maintained by
    /// the service: reset while the compressor is commanded on, incremented
    /// while it is off.  This is the anti-short-cycle rest timer — it spans
    /// state changes, so a freeze hold cut short by a fast thaw still cannot
    /// restart the compressor early.
    pub ticks_since_stop: u64,

    // -- Input data --
    /// Latest line sample.  Updated before each FSM tick.
    pub inputs: InputSnapshot,

    // -- Contactor outputs --
    /// Commands to be applied to the contactors after the FSM tick.
    pub commands: OutputCommands,

    // -- Freeze handling --
    /// Cool-call level captured when `FreezePending` was entered; the delay
    /// is abandoned as soon as the live call differs from this.
    pub freeze_entry_call: bool,

    // -- Configuration --
    /// System configuration (timing thresholds).
    pub config: SystemConfig,
}

impl FsmContext {
    /// Create a new context with the given configuration.
    ///
    /// The rest timer starts pre-satisfied: with no compressor history at
    /// all, a cold boot with no cooling call may start the compressor on the
    /// first call.  The power-loss recovery rule zeroes the timer instead
    /// when the call is already active at boot.
    pub fn new(config: SystemConfig) -> Self {
        let ticks_since_stop = config.ticks_for_secs(config.min_offtime_secs) + 1;
        Self {
            ticks_in_state: 0,
            total_ticks: 0,
            tick_period_secs: config.sample_period_ms as f32 / 1000.0,
            ticks_since_stop,
            inputs: InputSnapshot::default(),
            commands: OutputCommands::all_off(),
            freeze_entry_call: false,
            config,
        }
    }

    /// Seconds elapsed since the current state was entered.
    pub fn secs_in_state(&self) -> f32 {
        self.ticks_in_state as f32 * self.tick_period_secs
    }

    /// Seconds since the compressor last stopped.
    pub fn secs_since_stop(&self) -> f32 {
        self.ticks_since_stop as f32 * self.tick_period_secs
    }

    /// Whether the minimum-offtime rest guard is satisfied.
    pub fn rest_complete(&self) -> bool {
        self.secs_since_stop() >= self.config.min_offtime_secs as f32
    }

    /// Whether the compressor has met its minimum run duration in this state.
    pub fn min_runtime_met(&self) -> bool {
        self.secs_in_state() >= self.config.min_runtime_secs as f32
    }
}
