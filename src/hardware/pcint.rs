//! Pin-change interrupt handler for BUTTON1.
//!
//! The interrupt fires on both edges of the button. The handler does not get
//! the level that caused it: it samples the pin again, so a press and release
//! that both happen before the vector runs are seen as one event with the
//! final level. Contact bounce is not filtered, every bounce that samples as
//! pressed toggles the LED once more.

use super::gpio_button::PortButton;
use super::gpio_led::PortLed;
use super::port;
use super::registers::RegisterBank;
use super::traits::{Button, Led};
use crate::config::{BUTTON1, BUTTON1_PRESSED, LED1};

/// Toggles LED1 if BUTTON1 currently reads as pressed, does nothing otherwise.
pub fn on_pin_change_event<B: RegisterBank>(bank: &mut B) {
    let pressed = PortButton::new(&*bank, BUTTON1, BUTTON1_PRESSED).is_pressed();
    if pressed {
        let mut led = PortLed::new(bank, LED1);
        led.toggle();
        trace!("button pressed, led -> {}", led.level());
    }
}

/// Body of the pin-change vector.
///
/// Clears the pending request of BUTTON1 before sampling, so an edge arriving
/// while the handler runs raises a fresh request instead of being lost.
pub fn service_pin_change<B: RegisterBank>(bank: &mut B) {
    port::acknowledge_pin_change(bank, BUTTON1);
    on_pin_change_event(bank);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hardware::configurator::initialize;
    use crate::hardware::port::Level;
    use crate::sim::SimulatedPort;

    fn armed() -> SimulatedPort {
        let mut bank = SimulatedPort::new();
        initialize(&mut bank);
        bank
    }

    #[test]
    fn pressed_sample_toggles_low_to_high_and_back() {
        let mut bank = armed();
        bank.drive(BUTTON1, Level::Low);

        on_pin_change_event(&mut bank);
        assert_eq!(port::read_output_level(&bank, LED1), Level::High);

        on_pin_change_event(&mut bank);
        assert_eq!(port::read_output_level(&bank, LED1), Level::Low);
    }

    #[test]
    fn released_sample_leaves_led_alone() {
        let mut bank = armed();
        bank.drive(BUTTON1, Level::Low);
        on_pin_change_event(&mut bank);
        bank.release(BUTTON1);

        on_pin_change_event(&mut bank);
        on_pin_change_event(&mut bank);
        assert_eq!(port::read_output_level(&bank, LED1), Level::High);
    }

    #[test]
    fn service_clears_the_request() {
        let mut bank = armed();
        bank.drive(BUTTON1, Level::Low);
        assert!(bank.has_pending_event());

        service_pin_change(&mut bank);
        assert!(!bank.has_pending_event());
        assert_eq!(port::read_output_level(&bank, LED1), Level::High);
    }
}
