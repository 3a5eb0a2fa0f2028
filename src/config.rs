//! System configuration parameters
//!
//! All timing constants for the compressor protection machine. These are
//! fixed at build time — there is deliberately no runtime reconfiguration
//! path, and nothing is persisted across restarts (the power-loss recovery
//! rule compensates for that).

use serde::{Deserialize, Serialize};

/// Core system configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemConfig {
    // --- Compressor protection ---
    /// Minimum compressor run duration (seconds) once started.
    pub min_runtime_secs: u32,
    /// Minimum rest duration (seconds) after any compressor stop.
    pub min_offtime_secs: u32,

    // --- Freeze protection ---
    /// Fan-purge hold after a freeze shutdown (seconds). Only used by the
    /// immediate-hold policy, i.e. when `freeze_response_delay_secs` is None.
    pub freeze_hold_secs: u32,
    /// How long to defer the freeze shutdown while the cooling call is
    /// steady (seconds). `Some` selects the delayed-response freeze policy
    /// (level-triggered thaw wait); `None` selects immediate hold.
    pub freeze_response_delay_secs: Option<u32>,

    // --- Timing ---
    /// Input sampling / control loop period (milliseconds).
    pub sample_period_ms: u32,
    /// Telemetry report interval (seconds)
    pub telemetry_interval_secs: u32,

    // --- Board ---
    /// Static level driven on the reference output at boot.
    pub reference_level: bool,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            // Compressor protection
            min_runtime_secs: 180, // 3 minutes
            min_offtime_secs: 300, // 5 minutes

            // Freeze protection — delayed-response policy by default
            freeze_hold_secs: 600,
            freeze_response_delay_secs: Some(3600), // 60 minutes

            // Timing
            sample_period_ms: 1000, // 1 Hz
            telemetry_interval_secs: 60,

            // Board
            reference_level: true,
        }
    }
}

impl SystemConfig {
    /// Ticks per second of the control loop (at least 1).
    pub fn ticks_per_sec(&self) -> u64 {
        (1000 / self.sample_period_ms.max(1)).max(1) as u64
    }

    /// Convert a seconds threshold to control-loop ticks.
    pub fn ticks_for_secs(&self, secs: u32) -> u64 {
        secs as u64 * self.ticks_per_sec()
    }
}
