//! Adapters — concrete implementations of the hexagonal port traits.
//!
//! | Adapter    | Implements   | Connects to            |
//! |------------|--------------|------------------------|
//! | `hardware` | SensorPort   | ESP32 GPIO inputs      |
//! |            | ActuatorPort | ESP32 GPIO outputs     |
//! | `log_sink` | EventSink    | Serial log output      |

pub mod hardware;
pub mod log_sink;
