//! Named bit operations on a [`RegisterBank`].

use core::fmt;

use super::registers::{GLOBAL_INTERRUPT_ENABLE, PIN_CHANGE_ENABLE, Register, RegisterBank};

/// A pin of the port, by bit index.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(target_os = "none", derive(defmt::Format))]
pub struct Pin(u8);

impl Pin {
    pub const fn new(index: u8) -> Self {
        assert!(index < 16);
        Self(index)
    }

    pub const fn index(self) -> u8 {
        self.0
    }

    /// Single-bit mask selecting this pin in a port register.
    pub const fn mask(self) -> u16 {
        1 << self.0
    }
}

/// Digital level of a pin.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(target_os = "none", derive(defmt::Format))]
pub enum Level {
    Low,
    High,
}

impl Level {
    pub const fn toggled(self) -> Self {
        match self {
            Level::Low => Level::High,
            Level::High => Level::Low,
        }
    }
}

impl From<bool> for Level {
    fn from(val: bool) -> Self {
        match val {
            true => Self::High,
            false => Self::Low,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Low => write!(f, "LOW"),
            Level::High => write!(f, "HIGH"),
        }
    }
}

/// Internal pull resistor of an input pin.
///
/// The port only has pull-ups, a button wired against a pull-up shorts the
/// pin to ground.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(target_os = "none", derive(defmt::Format))]
pub enum Pull {
    Up,
}

impl Pull {
    /// Level a button wired against this pull reads while pressed.
    pub const fn pressed_level(self) -> Level {
        match self {
            Pull::Up => Level::Low,
        }
    }
}

/// Makes the pins in `outputs` outputs and every other pin an input.
pub fn set_direction<B: RegisterBank>(bank: &mut B, outputs: u16) {
    bank.write(Register::Direction, outputs);
}

/// Enables the pull-up on the input pins in `pulled` and clears the output
/// latch of every other pin.
pub fn configure_pull_ups<B: RegisterBank>(bank: &mut B, pulled: u16) {
    bank.write(Register::Port, pulled);
}

/// Samples the current level of `pin`.
pub fn read_input_level<B: RegisterBank>(bank: &B, pin: Pin) -> Level {
    Level::from(bank.read(Register::Input) & pin.mask() != 0)
}

/// Level currently held in the output latch of `pin`.
pub fn read_output_level<B: RegisterBank>(bank: &B, pin: Pin) -> Level {
    Level::from(bank.read(Register::Port) & pin.mask() != 0)
}

/// Flips the output latch of `pin` with a single write to the input register.
pub fn toggle_output<B: RegisterBank>(bank: &mut B, pin: Pin) {
    bank.write(Register::Input, pin.mask());
}

pub fn enable_global_interrupts<B: RegisterBank>(bank: &mut B) {
    let status = bank.read(Register::Status);
    bank.write(Register::Status, status | GLOBAL_INTERRUPT_ENABLE);
}

pub fn global_interrupts_enabled<B: RegisterBank>(bank: &B) -> bool {
    bank.read(Register::Status) & GLOBAL_INTERRUPT_ENABLE != 0
}

pub fn enable_pin_change_source<B: RegisterBank>(bank: &mut B) {
    bank.write(Register::PinChangeControl, PIN_CHANGE_ENABLE);
}

/// Arms exactly the pins in `watched`, all other pins are disarmed.
pub fn set_pin_change_mask<B: RegisterBank>(bank: &mut B, watched: u16) {
    bank.write(Register::PinChangeMask, watched);
}

/// Clears a pending pin-change request of `pin`.
pub fn acknowledge_pin_change<B: RegisterBank>(bank: &mut B, pin: Pin) {
    bank.write(Register::PinChangeFlag, pin.mask());
}
