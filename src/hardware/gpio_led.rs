use super::port::{self, Level, Pin};
use super::registers::RegisterBank;
use super::traits::Led;

/// LED on an output pin of a [`RegisterBank`].
pub struct PortLed<'r, B> {
    bank: &'r mut B,
    pin: Pin,
}

impl<'r, B: RegisterBank> PortLed<'r, B> {
    pub fn new(bank: &'r mut B, pin: Pin) -> Self {
        Self { bank, pin }
    }
}

impl<'r, B: RegisterBank> Led for PortLed<'r, B> {
    fn toggle(&mut self) {
        port::toggle_output(&mut *self.bank, self.pin);
    }

    fn level(&self) -> Level {
        port::read_output_level(&*self.bank, self.pin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LED1;
    use crate::hardware::registers::Register;
    use crate::sim::SimulatedPort;

    #[test]
    fn toggle_is_a_single_input_register_write() {
        let mut bank = SimulatedPort::new();
        port::set_direction(&mut bank, LED1.mask());

        let mut led = PortLed::new(&mut bank, LED1);
        assert_eq!(led.level(), Level::Low);
        led.toggle();
        assert_eq!(led.level(), Level::High);
        led.toggle();
        assert_eq!(led.level(), Level::Low);

        assert_eq!(
            bank.writes_to(Register::Input),
            2,
            "toggling must not read-modify-write the port register"
        );
        assert_eq!(bank.writes_to(Register::Port), 0);
    }
}
