//! Board wiring for the Blue Pill
//!
//! Hardware Connections:
//!   LED1    -> PB0 (active high, series resistor to GND)
//!   BUTTON1 -> PB5 (other leg to GND, internal pull-up)

use crate::hardware::port::{Level, Pin, Pull};

/// LED driven by the interrupt handler.
pub const LED1: Pin = Pin::new(0);

/// Push button watched by the pin-change interrupt.
pub const BUTTON1: Pin = Pin::new(5);

/// Pull resistor enabled on [`BUTTON1`] by the configurator.
pub const BUTTON1_PULL: Pull = Pull::Up;

/// Level [`BUTTON1`] reads while held down.
pub const BUTTON1_PRESSED: Level = BUTTON1_PULL.pressed_level();
