use core::convert::Infallible;

use embedded_hal::digital::{ErrorType, InputPin};

use super::port::{self, Level, Pin};
use super::registers::RegisterBank;
use super::traits::Button;

/// Push button on an input pin of a [`RegisterBank`].
///
/// Every query samples the pin again; nothing is cached between calls.
pub struct PortButton<'r, B> {
    bank: &'r B,
    pin: Pin,
    pressed: Level,
}

impl<'r, B: RegisterBank> PortButton<'r, B> {
    pub fn new(bank: &'r B, pin: Pin, pressed: Level) -> Self {
        Self { bank, pin, pressed }
    }

    pub fn level(&self) -> Level {
        port::read_input_level(self.bank, self.pin)
    }
}

impl<'r, B: RegisterBank> Button for PortButton<'r, B> {
    fn is_pressed(&self) -> bool {
        self.level() == self.pressed
    }
}

impl<'r, B> ErrorType for PortButton<'r, B> {
    type Error = Infallible;
}

impl<'r, B: RegisterBank> InputPin for PortButton<'r, B> {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Ok(self.level() == Level::High)
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Ok(self.level() == Level::Low)
    }
}
