//! Hardware drivers — one-shot peripheral init, contactor relays, status
//! LED, and the task watchdog.

pub mod contactor;
pub mod hw_init;
pub mod led_patterns;
pub mod status_led;
pub mod watchdog;
