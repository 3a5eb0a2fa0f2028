//! GPIO pin assignments for the FrostGuard controller board.
//!
//! Single source of truth — every driver references this module rather than
//! hard-coding pin numbers.  Change a pin here and it propagates everywhere.
//!
//! The thermostat lines are 24 VAC signals brought down to logic level by
//! opto-isolators; the contactor outputs drive relay coils through NPN
//! drivers.

// ---------------------------------------------------------------------------
// Thermostat / sensor inputs
// ---------------------------------------------------------------------------

/// Thermostat cooling call (Y wire via opto-isolator). HIGH = calling.
pub const COOL_CALL_GPIO: i32 = 2;

/// Freeze stat on the evaporator coil. HIGH = freeze-risk condition.
pub const FREEZE_STAT_GPIO: i32 = 3;

// ---------------------------------------------------------------------------
// Contactor outputs
// ---------------------------------------------------------------------------

/// Compressor contactor relay. HIGH = compressor energised.
pub const COMPRESSOR_GPIO: i32 = 4;

/// Blower fan contactor relay. HIGH = fan running.
pub const FAN_GPIO: i32 = 5;

/// Fixed reference output (feeds the common side of the sensor loop).
/// Driven once at boot to [`crate::config::SystemConfig::reference_level`].
pub const REFERENCE_GPIO: i32 = 6;

// ---------------------------------------------------------------------------
// Status LED
// ---------------------------------------------------------------------------

/// Single status LED, active HIGH.
pub const STATUS_LED_GPIO: i32 = 8;
