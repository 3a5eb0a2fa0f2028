//! Single status LED driver.
//!
//! The board has one indicator LED, active HIGH. The pattern engine in
//! [`led_patterns`](super::led_patterns) decides the on/off waveform; this
//! driver just pushes levels to the pin, skipping redundant writes.

use crate::drivers::hw_init;

pub struct StatusLed {
    gpio: i32,
    lit: bool,
}

impl StatusLed {
    pub fn new(gpio: i32) -> Self {
        Self { gpio, lit: false }
    }

    pub fn set(&mut self, lit: bool) {
        if lit == self.lit {
            return;
        }
        hw_init::gpio_write(self.gpio, lit);
        self.lit = lit;
    }

    pub fn is_lit(&self) -> bool {
        self.lit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pins;

    #[test]
    fn led_tracks_state() {
        let mut led = StatusLed::new(pins::STATUS_LED_GPIO);
        assert!(!led.is_lit());
        led.set(true);
        assert!(led.is_lit());
        led.set(false);
        assert!(!led.is_lit());
    }
}
