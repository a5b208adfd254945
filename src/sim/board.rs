use heapless::HistoryBuffer;

use super::port::SimulatedPort;
use crate::config::{BUTTON1, BUTTON1_PRESSED, LED1};
use crate::hardware::configurator;
use crate::hardware::pcint;
use crate::hardware::port::{self, Level};

/// LED levels kept for inspection, oldest dropped first.
const TRACE_DEPTH: usize = 32;

/// The whole system on the host: the simulated port, the startup sequence, a
/// finger on the button and the CPU dispatching pin-change requests.
pub struct Board {
    port: SimulatedPort,
    trace: HistoryBuffer<Level, TRACE_DEPTH>,
    invocations: usize,
    toggles: usize,
}

impl Board {
    /// Power-on reset followed by the startup configuration.
    pub fn power_on() -> Self {
        let mut port = SimulatedPort::new();
        configurator::initialize(&mut port);

        let mut trace = HistoryBuffer::new();
        trace.write(port::read_output_level(&port, LED1));

        Self {
            port,
            trace,
            invocations: 0,
            toggles: 0,
        }
    }

    /// Closes the button contact.
    pub fn press(&mut self) {
        self.port.drive(BUTTON1, BUTTON1_PRESSED);
    }

    /// Opens the button contact; the pull-up takes the pin back.
    pub fn release(&mut self) {
        self.port.release(BUTTON1);
    }

    /// One pass of the foreground loop, which has nothing to do.
    pub fn idle(&mut self) {}

    /// Runs the vector for every request the port hands out, returns how many
    /// times it ran.
    pub fn service_interrupts(&mut self) -> usize {
        let mut ran = 0;
        while self.port.take_event().is_some() {
            let before = self.led();
            pcint::service_pin_change(&mut self.port);
            ran += 1;

            let after = self.led();
            if after != before {
                self.toggles += 1;
                self.trace.write(after);
            }
        }
        self.invocations += ran;
        ran
    }

    /// Press and release with the vector dispatched after each edge.
    pub fn click(&mut self) {
        self.press();
        self.service_interrupts();
        self.release();
        self.service_interrupts();
    }

    pub fn led(&self) -> Level {
        port::read_output_level(&self.port, LED1)
    }

    pub fn button(&self) -> Level {
        port::read_input_level(&self.port, BUTTON1)
    }

    /// Handler invocations since power-on.
    pub fn invocations(&self) -> usize {
        self.invocations
    }

    /// LED level changes since power-on.
    pub fn toggles(&self) -> usize {
        self.toggles
    }

    /// LED levels from power-on (or the oldest retained one) to now.
    pub fn led_trace(&self) -> impl Iterator<Item = Level> + '_ {
        self.trace.oldest_ordered().copied()
    }

    pub fn port(&self) -> &SimulatedPort {
        &self.port
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn powers_on_dark_and_released() {
        let board = Board::power_on();
        assert_eq!(board.led(), Level::Low);
        assert_eq!(board.button(), Level::High);
        assert!(!board.port().has_pending_event());
    }

    #[test]
    fn click_toggles_once_with_two_invocations() {
        let mut board = Board::power_on();
        board.click();

        assert_eq!(board.led(), Level::High);
        assert_eq!(board.invocations(), 2);
        assert_eq!(board.toggles(), 1);
        assert!(board.led_trace().eq([Level::Low, Level::High]));
    }
}
