//! End-to-end controller scenarios through the full service + port stack.
//!
//! Timing uses a scaled-down configuration (seconds instead of minutes)
//! with the default 1 Hz sample period, so one service tick equals one
//! second of protected-timing progress.

use frostguard::app::service::ControllerService;
use frostguard::config::SystemConfig;
use frostguard::fsm::StateId;

use crate::mock_hw::{LogSink, MockHardware};

/// min runtime 3s, min offtime 5s, freeze hold 6s, freeze delay 4s.
fn test_config() -> SystemConfig {
    SystemConfig {
        min_runtime_secs: 3,
        min_offtime_secs: 5,
        freeze_hold_secs: 6,
        freeze_response_delay_secs: Some(4),
        ..SystemConfig::default()
    }
}

fn ticks(app: &mut ControllerService, hw: &mut MockHardware, sink: &mut LogSink, n: u32) {
    for _ in 0..n {
        app.tick(hw, sink);
    }
}

// ── Boot and recovery ─────────────────────────────────────────

#[test]
fn quiet_boot_starts_first_call_immediately() {
    let mut app = ControllerService::new(test_config());
    let mut hw = MockHardware::new();
    let mut sink = LogSink::new();

    app.start_with_recovery(&mut hw, &mut sink);
    assert_eq!(app.state(), StateId::Idle);
    assert!(!hw.compressor_on());

    // With no call at boot there is no interrupted run to protect against,
    // so the first call starts the compressor on the very next tick.
    hw.set_cool_call(true);
    ticks(&mut app, &mut hw, &mut sink, 1);
    assert_eq!(app.state(), StateId::Running);
    assert!(hw.compressor_on());
    assert!(hw.fan_on());
}

#[test]
fn recovery_with_active_call_takes_full_rest() {
    let mut app = ControllerService::new(test_config());
    let mut hw = MockHardware::new();
    let mut sink = LogSink::new();

    hw.set_cool_call(true);
    app.start_with_recovery(&mut hw, &mut sink);
    assert_eq!(app.state(), StateId::Resting);
    assert!(!hw.compressor_on());
    assert!(hw.fan_on(), "recovery rest purges with the fan");

    // Call held the whole time: four more ticks resting, Idle on the
    // fifth, Running on the sixth — a full offtime after the boot.
    for _ in 0..4 {
        ticks(&mut app, &mut hw, &mut sink, 1);
        assert_eq!(app.state(), StateId::Resting);
        assert!(!hw.compressor_on());
        assert!(hw.fan_on());
    }
    ticks(&mut app, &mut hw, &mut sink, 1);
    assert_eq!(app.state(), StateId::Idle);
    ticks(&mut app, &mut hw, &mut sink, 1);
    assert_eq!(app.state(), StateId::Running);
}

// ── Normal cooling cycle ──────────────────────────────────────

#[test]
fn full_cooling_cycle_with_fan_purge() {
    let mut app = ControllerService::new(test_config());
    let mut hw = MockHardware::new();
    let mut sink = LogSink::new();
    app.start_with_recovery(&mut hw, &mut sink);

    hw.set_cool_call(true);
    ticks(&mut app, &mut hw, &mut sink, 1);
    assert_eq!(app.state(), StateId::Running);

    // A healthy long run.
    ticks(&mut app, &mut hw, &mut sink, 10);
    assert_eq!(app.state(), StateId::Running);

    // Thermostat satisfied: compressor drops, fan keeps purging.
    hw.set_cool_call(false);
    ticks(&mut app, &mut hw, &mut sink, 1);
    assert_eq!(app.state(), StateId::Resting);
    assert!(!hw.compressor_on());
    assert!(hw.fan_on());

    // Rest runs its fixed 5s, then everything is off.
    ticks(&mut app, &mut hw, &mut sink, 5);
    assert_eq!(app.state(), StateId::Idle);
    assert!(!hw.compressor_on());
    assert!(!hw.fan_on());
}

#[test]
fn short_call_still_runs_minimum_time() {
    let mut app = ControllerService::new(test_config());
    let mut hw = MockHardware::new();
    let mut sink = LogSink::new();
    app.start_with_recovery(&mut hw, &mut sink);

    hw.set_cool_call(true);
    ticks(&mut app, &mut hw, &mut sink, 1);
    assert_eq!(app.state(), StateId::Running);

    // Call drops after a single second of runtime.
    hw.set_cool_call(false);
    ticks(&mut app, &mut hw, &mut sink, 1);
    assert_eq!(app.state(), StateId::Running, "min runtime not met yet");
    ticks(&mut app, &mut hw, &mut sink, 1);
    assert_eq!(app.state(), StateId::Running);
    ticks(&mut app, &mut hw, &mut sink, 1);
    assert_eq!(app.state(), StateId::Resting);
}

#[test]
fn rapid_call_cycling_is_absorbed() {
    let mut app = ControllerService::new(test_config());
    let mut hw = MockHardware::new();
    let mut sink = LogSink::new();
    app.start_with_recovery(&mut hw, &mut sink);

    hw.set_cool_call(true);
    ticks(&mut app, &mut hw, &mut sink, 1);
    hw.set_cool_call(false);
    ticks(&mut app, &mut hw, &mut sink, 3);
    assert_eq!(app.state(), StateId::Resting);

    // Call flaps during the rest — the rest is a fixed wait, and the
    // compressor must not restart until it has fully elapsed.
    for i in 0..4 {
        hw.set_cool_call(i % 2 == 0);
        ticks(&mut app, &mut hw, &mut sink, 1);
        assert!(!hw.compressor_on(), "compressor restarted mid-rest");
    }
}

// ── Freeze protection (delayed-response policy) ───────────────

#[test]
fn freeze_during_run_defers_then_holds() {
    let mut app = ControllerService::new(test_config());
    let mut hw = MockHardware::new();
    let mut sink = LogSink::new();
    app.start_with_recovery(&mut hw, &mut sink);

    hw.set_cool_call(true);
    ticks(&mut app, &mut hw, &mut sink, 5);
    assert_eq!(app.state(), StateId::Running);

    hw.set_freeze(true);
    ticks(&mut app, &mut hw, &mut sink, 1);
    assert_eq!(app.state(), StateId::FreezePending);
    assert!(hw.compressor_on(), "shutdown deferred while the call is steady");
    assert!(sink.contains("FreezeDetected"));

    // The 4s delay expires with the call unchanged.
    ticks(&mut app, &mut hw, &mut sink, 3);
    assert_eq!(app.state(), StateId::FreezePending);
    ticks(&mut app, &mut hw, &mut sink, 1);
    assert_eq!(app.state(), StateId::FreezeHold);
    assert!(!hw.compressor_on());
    assert!(hw.fan_on(), "fan thaws the coil during the hold");
}

#[test]
fn thaw_release_still_honours_rest_guard() {
    let mut app = ControllerService::new(test_config());
    let mut hw = MockHardware::new();
    let mut sink = LogSink::new();
    app.start_with_recovery(&mut hw, &mut sink);

    hw.set_cool_call(true);
    ticks(&mut app, &mut hw, &mut sink, 5);
    hw.set_freeze(true);
    ticks(&mut app, &mut hw, &mut sink, 5); // pending delay expires
    assert_eq!(app.state(), StateId::FreezeHold);

    // Fast thaw: stat clears after only two ticks of hold.
    ticks(&mut app, &mut hw, &mut sink, 1);
    hw.set_freeze(false);
    ticks(&mut app, &mut hw, &mut sink, 1);
    assert_eq!(app.state(), StateId::Idle);

    // Call is still active, but the compressor stopped only three ticks
    // ago — Idle must absorb the remainder of the minimum offtime.
    ticks(&mut app, &mut hw, &mut sink, 1);
    assert_eq!(app.state(), StateId::Idle);
    assert!(!hw.compressor_on());
    ticks(&mut app, &mut hw, &mut sink, 1);
    assert_eq!(app.state(), StateId::Idle);
    ticks(&mut app, &mut hw, &mut sink, 1);
    assert_eq!(app.state(), StateId::Running);
}

#[test]
fn freeze_pending_abandoned_when_thermostat_satisfied() {
    let mut app = ControllerService::new(test_config());
    let mut hw = MockHardware::new();
    let mut sink = LogSink::new();
    app.start_with_recovery(&mut hw, &mut sink);

    hw.set_cool_call(true);
    ticks(&mut app, &mut hw, &mut sink, 5);
    hw.set_freeze(true);
    ticks(&mut app, &mut hw, &mut sink, 1);
    assert_eq!(app.state(), StateId::FreezePending);

    // Thermostat satisfied one tick into the delay: no point running on.
    hw.set_cool_call(false);
    ticks(&mut app, &mut hw, &mut sink, 1);
    assert_eq!(app.state(), StateId::FreezeHold);
    assert!(!hw.compressor_on());
}

// ── Freeze protection (immediate-hold policy) ─────────────────

#[test]
fn immediate_policy_cuts_run_and_holds_fixed_time() {
    let mut config = test_config();
    config.freeze_response_delay_secs = None;
    let mut app = ControllerService::new(config);
    let mut hw = MockHardware::new();
    let mut sink = LogSink::new();
    app.start_with_recovery(&mut hw, &mut sink);

    hw.set_cool_call(true);
    ticks(&mut app, &mut hw, &mut sink, 1);
    assert_eq!(app.state(), StateId::Running);

    // Freeze one tick into the run: min runtime does not apply.
    hw.set_freeze(true);
    ticks(&mut app, &mut hw, &mut sink, 1);
    assert_eq!(app.state(), StateId::FreezeHold);
    assert!(!hw.compressor_on());

    // The stat clears right away, but the hold runs its fixed 6s.
    hw.set_freeze(false);
    for _ in 0..5 {
        ticks(&mut app, &mut hw, &mut sink, 1);
        assert_eq!(app.state(), StateId::FreezeHold);
        assert!(hw.fan_on());
    }
    ticks(&mut app, &mut hw, &mut sink, 1);
    assert_eq!(app.state(), StateId::Idle);

    // The 6s hold more than covers the 5s rest guard, so the still-active
    // call restarts the compressor on the next tick.
    ticks(&mut app, &mut hw, &mut sink, 1);
    assert_eq!(app.state(), StateId::Running);
}

// ── Cross-cutting invariants and events ───────────────────────

#[test]
fn fan_always_covers_compressor() {
    let mut app = ControllerService::new(test_config());
    let mut hw = MockHardware::new();
    let mut sink = LogSink::new();
    app.start_with_recovery(&mut hw, &mut sink);

    hw.set_cool_call(true);
    for i in 0..40 {
        match i {
            12 => hw.set_freeze(true),
            20 => hw.set_freeze(false),
            30 => hw.set_cool_call(false),
            _ => {}
        }
        ticks(&mut app, &mut hw, &mut sink, 1);
        assert!(
            !hw.compressor_on() || hw.fan_on(),
            "compressor on without fan at tick {i}"
        );
    }
}

#[test]
fn state_changes_are_reported() {
    let mut app = ControllerService::new(test_config());
    let mut hw = MockHardware::new();
    let mut sink = LogSink::new();
    app.start_with_recovery(&mut hw, &mut sink);
    assert!(sink.contains("Started(Idle)"));

    hw.set_cool_call(true);
    ticks(&mut app, &mut hw, &mut sink, 1);
    assert!(sink.contains("StateChanged { from: Idle, to: Running }"));
}

#[test]
fn telemetry_snapshot_matches_hardware() {
    let mut app = ControllerService::new(test_config());
    let mut hw = MockHardware::new();
    let mut sink = LogSink::new();
    app.start_with_recovery(&mut hw, &mut sink);

    hw.set_cool_call(true);
    ticks(&mut app, &mut hw, &mut sink, 2);

    let t = app.build_telemetry();
    assert_eq!(t.state, StateId::Running);
    assert_eq!(t.compressor_on, hw.compressor_on());
    assert_eq!(t.fan_on, hw.fan_on());
    assert!(t.cool_call);
    assert!(!t.freeze_signal);
}
