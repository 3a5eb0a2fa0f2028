//! Port traits — the hexagonal boundary between domain logic and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ ControllerService (domain)
//! ```
//!
//! Driven adapters (sensor lines, contactors, event sinks) implement these
//! traits.  The [`ControllerService`](super::service::ControllerService)
//! consumes them via generics, so the domain core never touches raw pin
//! numbers or initialisation.
//!
//! ## Safety notes
//!
//! - Reads and writes are **infallible** on this target (memory-mapped
//!   GPIO).  On a platform where they can fail, an implementation must treat
//!   the failure as fatal and halt — there is no safe partial-operation mode
//!   for a compressor contactor.

use crate::fsm::context::InputSnapshot;

// ───────────────────────────────────────────────────────────────
// Sensor port (driven adapter: hardware → domain)
// ───────────────────────────────────────────────────────────────

/// Read-side port: the domain calls this to sample both sensor lines.
pub trait SensorPort {
    /// Sample the cooling-call and freeze-stat lines.  Level-sensed; the
    /// lines are assumed externally debounced.
    fn read_inputs(&mut self) -> InputSnapshot;
}

// ───────────────────────────────────────────────────────────────
// Actuator port (driven adapter: domain → hardware)
// ───────────────────────────────────────────────────────────────

/// Write-side port: the domain calls this to command the contactors.
pub trait ActuatorPort {
    /// Energise or release the compressor contactor.
    fn set_compressor(&mut self, on: bool);

    /// Energise or release the fan contactor.
    fn set_fan(&mut self, on: bool);

    /// Drive the status LED level.
    fn set_status_led(&mut self, on: bool);

    /// Release every output (contactors and LED) — safe shutdown.
    fn all_off(&mut self);
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging / telemetry)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured [`AppEvent`](super::events::AppEvent)s
/// through this port.  Adapters decide where they go (serial log, a
/// diagnostics dump, etc.).
pub trait EventSink {
    fn emit(&mut self, event: &super::events::AppEvent);
}
