//! Concrete state handler functions and table builder.
//!
//! Each state is defined by three plain `fn` pointers — no closures, no
//! dynamic dispatch, no heap.  This is the classic embedded C FSM pattern
//! expressed in safe Rust.
//!
//! ```text
//!  IDLE ──[call ∧ rest done]──▶ RUNNING
//!    ▲                             │
//!    │                  [call dropped ∧ min runtime met]
//!    │                             ▼
//!    └───────[rest done]──────  RESTING
//!
//!  Any state ──[freeze]──▶ FREEZE_PENDING ──[delay up / call change]──┐
//!                 │         (delayed policy, call active)             │
//!                 └──────────────────────────────▶ FREEZE_HOLD ◀──────┘
//!                                                      │
//!                                        [thawed / hold elapsed]
//!                                                      ▼
//!                                                    IDLE
//! ```
//!
//! The freeze check runs **first** in every update handler: freeze
//! protection outranks the anti-short-cycle rules, never the converse.

use super::context::FsmContext;
use super::{StateDescriptor, StateId};
use log::{info, warn};

// ═══════════════════════════════════════════════════════════════════════════
//  Table builder
// ═══════════════════════════════════════════════════════════════════════════

/// Build the static state table.  Called once at startup.
pub fn build_state_table() -> [StateDescriptor; StateId::COUNT] {
    [
        // Index 0 — Idle
        StateDescriptor {
            id: StateId::Idle,
            name: "Idle",
            on_enter: Some(idle_enter),
            on_exit: None,
            on_update: idle_update,
        },
        // Index 1 — Running
        StateDescriptor {
            id: StateId::Running,
            name: "Running",
            on_enter: Some(running_enter),
            on_exit: None,
            on_update: running_update,
        },
        // Index 2 — Resting
        StateDescriptor {
            id: StateId::Resting,
            name: "Resting",
            on_enter: Some(resting_enter),
            on_exit: Some(resting_exit),
            on_update: resting_update,
        },
        // Index 3 — FreezePending
        StateDescriptor {
            id: StateId::FreezePending,
            name: "FreezePending",
            on_enter: Some(freeze_pending_enter),
            on_exit: None,
            on_update: freeze_pending_update,
        },
        // Index 4 — FreezeHold
        StateDescriptor {
            id: StateId::FreezeHold,
            name: "FreezeHold",
            on_enter: Some(freeze_hold_enter),
            on_exit: Some(freeze_hold_exit),
            on_update: freeze_hold_update,
        },
    ]
}

// ═══════════════════════════════════════════════════════════════════════════
//  Freeze response routing
// ═══════════════════════════════════════════════════════════════════════════

/// Where an asserted freeze signal sends the machine.
///
/// Delayed policy with an active cooling call: defer through `FreezePending`
/// to squeeze out runtime before icing actually obstructs airflow.  In every
/// other case (immediate policy, or nothing calling for cool) go straight to
/// the thaw hold.
fn freeze_response_target(ctx: &FsmContext) -> StateId {
    match ctx.config.freeze_response_delay_secs {
        Some(_) if ctx.inputs.cool_call => StateId::FreezePending,
        _ => StateId::FreezeHold,
    }
}

// ═══════════════════════════════════════════════════════════════════════════
//  IDLE state
// ═══════════════════════════════════════════════════════════════════════════

fn idle_enter(ctx: &mut FsmContext) {
    // Both contactors released.
    ctx.commands = super::context::OutputCommands::all_off();
    info!("IDLE: contactors released, monitoring call/freeze lines");
}

fn idle_update(ctx: &mut FsmContext) -> Option<StateId> {
    // Guard: freeze protection outranks everything.
    if ctx.inputs.freeze_signal {
        return Some(freeze_response_target(ctx));
    }

    if ctx.inputs.cool_call {
        if ctx.rest_complete() {
            return Some(StateId::Running);
        }
        // Call pending but the compressor stopped too recently.  Stay put;
        // the rest timer is maintained by the service every tick.
        return None;
    }

    None
}

// ═══════════════════════════════════════════════════════════════════════════
//  RUNNING state — compressor and fan energised
// ═══════════════════════════════════════════════════════════════════════════

fn running_enter(ctx: &mut FsmContext) {
    ctx.commands.compressor = true;
    ctx.commands.fan = true;
    info!(
        "RUNNING: compressor started (min runtime {}s)",
        ctx.config.min_runtime_secs
    );
}

fn running_update(ctx: &mut FsmContext) -> Option<StateId> {
    // Freeze protection may cut a run short; nothing else can.
    if ctx.inputs.freeze_signal {
        warn!(
            "RUNNING: freeze stat asserted after {:.0}s of runtime",
            ctx.secs_in_state()
        );
        return Some(freeze_response_target(ctx));
    }

    if !ctx.inputs.cool_call && ctx.min_runtime_met() {
        info!(
            "RUNNING: call satisfied after {:.0}s, shutting down",
            ctx.secs_in_state()
        );
        return Some(StateId::Resting);
    }

    None
}

// ═══════════════════════════════════════════════════════════════════════════
//  RESTING state — anti-short-cycle rest with fan purge
// ═══════════════════════════════════════════════════════════════════════════

fn resting_enter(ctx: &mut FsmContext) {
    ctx.commands.compressor = false;
    ctx.commands.fan = true;
    info!(
        "RESTING: compressor off, fan purging for {}s",
        ctx.config.min_offtime_secs
    );
}

fn resting_exit(ctx: &mut FsmContext) {
    ctx.commands.fan = false;
    info!("RESTING: rest complete, fan off");
}

fn resting_update(ctx: &mut FsmContext) -> Option<StateId> {
    if ctx.inputs.freeze_signal {
        return Some(freeze_response_target(ctx));
    }

    // The rest is a fixed wait, not reduced by elapsed run time.
    if ctx.secs_in_state() >= ctx.config.min_offtime_secs as f32 {
        return Some(StateId::Idle);
    }

    None
}

// ═══════════════════════════════════════════════════════════════════════════
//  FREEZE_PENDING state — shutdown deferred while the call is steady
// ═══════════════════════════════════════════════════════════════════════════

fn freeze_pending_enter(ctx: &mut FsmContext) {
    // Outputs deliberately untouched: a low-temperature event can trigger
    // some time before icing actually obstructs airflow, so a run in
    // progress keeps running until the delay expires.
    ctx.freeze_entry_call = ctx.inputs.cool_call;
    warn!(
        "FREEZE PENDING: deferring shutdown up to {}s",
        ctx.config.freeze_response_delay_secs.unwrap_or(0)
    );
}

fn freeze_pending_update(ctx: &mut FsmContext) -> Option<StateId> {
    // A call-state change abandons the delay immediately.
    if ctx.inputs.cool_call != ctx.freeze_entry_call {
        info!("FREEZE PENDING: call changed, abandoning delay");
        return Some(StateId::FreezeHold);
    }

    // The freeze signal itself is not re-sampled during the delay.
    let delay = ctx.config.freeze_response_delay_secs.unwrap_or(0);
    if ctx.secs_in_state() >= delay as f32 {
        return Some(StateId::FreezeHold);
    }

    None
}

// ═══════════════════════════════════════════════════════════════════════════
//  FREEZE_HOLD state — compressor off, fan on while the coil thaws
// ═══════════════════════════════════════════════════════════════════════════

fn freeze_hold_enter(ctx: &mut FsmContext) {
    ctx.commands.compressor = false;
    ctx.commands.fan = true;
    warn!("FREEZE HOLD: compressor forced off, fan thawing the coil");
}

fn freeze_hold_exit(ctx: &mut FsmContext) {
    ctx.commands.fan = false;
    info!("FREEZE HOLD: thaw complete, fan off");
}

fn freeze_hold_update(ctx: &mut FsmContext) -> Option<StateId> {
    match ctx.config.freeze_response_delay_secs {
        // Delayed policy: level-triggered — hold until the stat clears.
        Some(_) => {
            if !ctx.inputs.freeze_signal {
                return Some(StateId::Idle);
            }
        }
        // Immediate policy: fixed hold, signal not re-checked.
        None => {
            if ctx.secs_in_state() >= ctx.config.freeze_hold_secs as f32 {
                return Some(StateId::Idle);
            }
        }
    }

    None
}
