//! Status LED pattern engine with priority-based pattern selection.
//!
//! Generates an on/off waveform for the single status LED. The main loop
//! calls `tick()` each cycle and feeds the result into
//! [`StatusLed::set`](super::status_led::StatusLed::set).
//!
//! ## Priority hierarchy (highest first)
//!
//! 1. **Startup** — the boot-complete flash sequence, auto-expires
//! 2. **FSM state** — steady pattern reflecting the current state
//!
//! ## Pattern types
//!
//! | Pattern       | Description                     | Rate  |
//! |---------------|---------------------------------|-------|
//! | Solid         | Constantly lit                  | —     |
//! | SlowBlink     | On/off square wave              | 1 Hz  |
//! | StartupFlash  | Five quick pulses, then expires | 5 Hz  |
//! | Off           | Dark                            | —     |

/// Pattern identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternId {
    Solid,
    SlowBlink,
    StartupFlash,
    Off,
}

/// A pattern request with its layer priority.
#[derive(Debug, Clone, Copy)]
struct PatternRequest {
    pattern: PatternId,
    priority: u8,
}

/// LED pattern engine. Stack-allocated, no heap.
pub struct LedPatternEngine {
    phase_ms: u32,
    active: Option<PatternRequest>,
    fsm_request: Option<PatternRequest>,
    startup_request: Option<PatternRequest>,
}

/// Duration of the five-pulse startup flash (100ms on / 100ms off each).
pub const STARTUP_FLASH_MS: u32 = 1000;

impl LedPatternEngine {
    pub fn new() -> Self {
        Self {
            phase_ms: 0,
            active: None,
            fsm_request: None,
            startup_request: None,
        }
    }

    /// Set the FSM-layer pattern (priority 2).
    pub fn set_fsm_pattern(&mut self, pattern: PatternId) {
        self.fsm_request = Some(PatternRequest {
            pattern,
            priority: 2,
        });
    }

    /// Begin the boot-complete flash sequence (priority 1 — highest).
    /// Expires on its own after [`STARTUP_FLASH_MS`].
    pub fn start_startup_flash(&mut self) {
        self.startup_request = Some(PatternRequest {
            pattern: PatternId::StartupFlash,
            priority: 1,
        });
    }

    /// True while the startup flash is still playing.
    pub fn startup_flash_active(&self) -> bool {
        self.startup_request.is_some()
    }

    /// Advance the pattern phase and return whether the LED should be lit.
    /// `delta_ms` is the time since the last call.
    pub fn tick(&mut self, delta_ms: u32) -> bool {
        self.phase_ms = self.phase_ms.wrapping_add(delta_ms);

        // Expire the startup flash once its pulses have played out.
        if let Some(req) = &self.startup_request {
            if req.pattern == PatternId::StartupFlash
                && self.active.map(|a| a.priority) == Some(req.priority)
                && self.phase_ms >= STARTUP_FLASH_MS
            {
                self.startup_request = None;
            }
        }

        let selected = self.select_active();
        let reset_phase = match (&self.active, &selected) {
            (Some(prev), Some(next)) => {
                prev.priority != next.priority || prev.pattern != next.pattern
            }
            (None, Some(_)) => true,
            _ => false,
        };
        if reset_phase {
            self.phase_ms = 0;
        }
        self.active = selected;

        match &self.active {
            Some(req) => self.generate(req.pattern),
            None => false,
        }
    }

    fn select_active(&self) -> Option<PatternRequest> {
        // Priority: startup (1) > fsm (2)
        self.startup_request.or(self.fsm_request)
    }

    fn generate(&self, pattern: PatternId) -> bool {
        match pattern {
            PatternId::Solid => true,
            PatternId::Off => false,
            PatternId::SlowBlink => (self.phase_ms % 1000) < 500,
            PatternId::StartupFlash => {
                self.phase_ms < STARTUP_FLASH_MS && (self.phase_ms % 200) < 100
            }
        }
    }
}

impl Default for LedPatternEngine {
    fn default() -> Self {
        Self::new()
    }
}
