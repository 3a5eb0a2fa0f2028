//! FrostGuard Firmware — Main Entry Point
//!
//! Hexagonal architecture around a sampled compressor protection FSM.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │                 Adapters (outer ring)                │
//! │                                                      │
//! │  HardwareAdapter            LogEventSink             │
//! │  (Sensor+Actuator)          (EventSink)              │
//! │                                                      │
//! │  ─────────── Port Trait Boundary ────────────        │
//! │                                                      │
//! │  ┌──────────────────────────────────────────────┐    │
//! │  │        ControllerService (pure logic)        │    │
//! │  │  FSM · anti-short-cycle · freeze protection  │    │
//! │  └──────────────────────────────────────────────┘    │
//! └──────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

// ── Module declarations ───────────────────────────────────────
pub mod config;
mod error;
mod pins;

pub mod app;
mod adapters;
mod drivers;
pub mod fsm;
mod sensors;

// ── Imports ───────────────────────────────────────────────────
use anyhow::Result;
use log::info;

use adapters::hardware::HardwareAdapter;
use adapters::log_sink::LogEventSink;
use app::events::AppEvent;
use app::ports::{ActuatorPort, EventSink};
use app::service::ControllerService;
use config::SystemConfig;
use drivers::contactor::{CompressorContactor, FanContactor};
use drivers::led_patterns::{LedPatternEngine, PatternId};
use drivers::status_led::StatusLed;
use fsm::StateId;

// ── Main ──────────────────────────────────────────────────────

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("╔══════════════════════════════════════╗");
    info!("║  FrostGuard v{}                     ║", env!("CARGO_PKG_VERSION"));
    info!("╚══════════════════════════════════════╝");

    // ── 2. Initialise hardware peripherals ────────────────────
    if let Err(e) = drivers::hw_init::init_peripherals() {
        // Peripheral init failure is critical — log and halt with every
        // output at its power-on LOW level. The watchdog is not armed
        // yet, so the halt is permanent until a power cycle.
        log::error!("HAL init failed: {} — halting", e);
        #[allow(clippy::empty_loop)]
        loop {}
    }
    let watchdog = drivers::watchdog::Watchdog::new();

    // ── 3. Configuration ──────────────────────────────────────
    // Build-time constants only; nothing is persisted across restarts.
    let config = SystemConfig::default();

    // Reference output is a static level, driven once and never touched
    // again.
    drivers::hw_init::gpio_write(pins::REFERENCE_GPIO, config.reference_level);
    info!(
        "Reference output driven {}",
        if config.reference_level { "HIGH" } else { "LOW" }
    );

    // ── 4. Construct adapters ─────────────────────────────────
    let sensor_hub = sensors::SensorHub::new(
        sensors::call::CoolCallSensor::new(pins::COOL_CALL_GPIO),
        sensors::freeze::FreezeStatSensor::new(pins::FREEZE_STAT_GPIO),
    );

    let mut hw = HardwareAdapter::new(
        sensor_hub,
        CompressorContactor::new(pins::COMPRESSOR_GPIO),
        FanContactor::new(pins::FAN_GPIO),
        StatusLed::new(pins::STATUS_LED_GPIO),
    );

    let mut log_sink = LogEventSink::new();

    // ── 5. Boot-complete flash ────────────────────────────────
    // Five quick pulses before the sampling loop starts, so a tech at
    // the air handler can confirm the controller rebooted.
    let mut led_engine = LedPatternEngine::new();
    led_engine.start_startup_flash();
    let lit = led_engine.tick(0);
    hw.set_status_led(lit);
    while led_engine.startup_flash_active() {
        std::thread::sleep(std::time::Duration::from_millis(50));
        let lit = led_engine.tick(50);
        hw.set_status_led(lit);
        watchdog.feed();
    }

    // ── 6. Construct the controller service ───────────────────
    let mut app = ControllerService::new(config.clone());
    app.start_with_recovery(&mut hw, &mut log_sink);

    info!("System ready. Entering sampling loop.");

    // ── 7. Sampling loop ──────────────────────────────────────
    let telemetry_ticks = config.ticks_for_secs(config.telemetry_interval_secs);
    let mut telemetry_counter: u64 = 0;

    loop {
        std::thread::sleep(std::time::Duration::from_millis(
            config.sample_period_ms as u64,
        ));

        app.tick(&mut hw, &mut log_sink);

        // Status LED reflects the current FSM state.
        let pattern = match app.state() {
            StateId::Idle => PatternId::Off,
            StateId::Running => PatternId::Solid,
            StateId::Resting => PatternId::SlowBlink,
            StateId::FreezePending => PatternId::Solid,
            StateId::FreezeHold => PatternId::SlowBlink,
        };
        led_engine.set_fsm_pattern(pattern);
        let lit = led_engine.tick(config.sample_period_ms);
        hw.set_status_led(lit);

        telemetry_counter += 1;
        if telemetry_counter >= telemetry_ticks {
            let t = app.build_telemetry();
            log_sink.emit(&AppEvent::Telemetry(t));
            telemetry_counter = 0;
        }

        // Feed watchdog on every iteration.
        watchdog.feed();
    }
}
