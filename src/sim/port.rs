use embassy_sync::blocking_mutex::raw::NoopRawMutex;
use embassy_sync::channel::Channel;

use crate::hardware::port::{Level, Pin};
use crate::hardware::registers::{
    GLOBAL_INTERRUPT_ENABLE, PIN_CHANGE_ENABLE, Register, RegisterBank,
};

/// "A watched pin changed level". Carries nothing: the handler has to sample
/// the pin itself.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PinChange;

const REGISTERS: usize = 7;

/// Register bank of one simulated port.
///
/// Input sampling: an output pin reads its latch, an externally driven input
/// reads the driven level, an undriven input reads high with its pull-up
/// enabled and low without.
///
/// A level change on an unmasked pin latches its bit in
/// [`Register::PinChangeFlag`] and posts a [`PinChange`]. The channel holds a
/// single request, so transitions arriving before it is taken merge into it.
pub struct SimulatedPort {
    direction: u16,
    port: u16,
    control: u16,
    mask: u16,
    flag: u16,
    status: u16,
    driven: u16,
    driven_high: u16,
    events: Channel<NoopRawMutex, PinChange, 1>,
    writes: [usize; REGISTERS],
}

impl SimulatedPort {
    /// Port in its power-on reset state: all inputs, no pull-ups, nothing
    /// armed, interrupts globally disabled.
    pub const fn new() -> Self {
        Self {
            direction: 0,
            port: 0,
            control: 0,
            mask: 0,
            flag: 0,
            status: 0,
            driven: 0,
            driven_high: 0,
            events: Channel::new(),
            writes: [0; REGISTERS],
        }
    }

    /// Drives `pin` from outside, as a closed button contact does.
    pub fn drive(&mut self, pin: Pin, level: Level) {
        let before = self.sample();
        self.driven |= pin.mask();
        match level {
            Level::High => self.driven_high |= pin.mask(),
            Level::Low => self.driven_high &= !pin.mask(),
        }
        self.sense(before);
    }

    /// Stops driving `pin`, it falls back to its pull-up or floats.
    pub fn release(&mut self, pin: Pin) {
        let before = self.sample();
        self.driven &= !pin.mask();
        self.sense(before);
    }

    /// Whether a pin-change request is waiting for the vector.
    pub fn has_pending_event(&self) -> bool {
        !self.events.is_empty()
    }

    /// Vector entry: hands out the pending request if the source and global
    /// interrupts are both enabled, clearing the flag like the hardware does.
    pub fn take_event(&mut self) -> Option<PinChange> {
        if self.control & PIN_CHANGE_ENABLE == 0 || self.status & GLOBAL_INTERRUPT_ENABLE == 0 {
            return None;
        }
        let event = self.events.try_receive().ok()?;
        self.flag = 0;
        Some(event)
    }

    /// Number of writes `reg` has received since power-on.
    pub fn writes_to(&self, reg: Register) -> usize {
        self.writes[slot(reg)]
    }

    fn sample(&self) -> u16 {
        let inputs = !self.direction;
        let outputs = self.direction & self.port;
        let driven = inputs & self.driven & self.driven_high;
        let pulled = inputs & !self.driven & self.port;
        outputs | driven | pulled
    }

    fn sense(&mut self, before: u16) {
        let changed = (before ^ self.sample()) & self.mask;
        if changed == 0 {
            return;
        }
        self.flag |= changed;
        if self.events.try_send(PinChange).is_err() {
            trace!("pin change merged into pending request");
        }
    }
}

impl Default for SimulatedPort {
    fn default() -> Self {
        Self::new()
    }
}

impl RegisterBank for SimulatedPort {
    fn read(&self, reg: Register) -> u16 {
        match reg {
            Register::Direction => self.direction,
            Register::Port => self.port,
            Register::Input => self.sample(),
            Register::PinChangeControl => self.control,
            Register::PinChangeMask => self.mask,
            Register::PinChangeFlag => self.flag,
            Register::Status => self.status,
        }
    }

    fn write(&mut self, reg: Register, value: u16) {
        self.writes[slot(reg)] += 1;
        let before = self.sample();
        match reg {
            Register::Direction => self.direction = value,
            Register::Port => self.port = value,
            Register::Input => self.port ^= value,
            Register::PinChangeControl => self.control = value & PIN_CHANGE_ENABLE,
            Register::PinChangeMask => self.mask = value,
            Register::PinChangeFlag => {
                self.flag &= !value;
                if self.flag == 0 {
                    let _ = self.events.try_receive();
                }
            }
            Register::Status => self.status = value,
        }
        self.sense(before);
    }
}

fn slot(reg: Register) -> usize {
    match reg {
        Register::Direction => 0,
        Register::Port => 1,
        Register::Input => 2,
        Register::PinChangeControl => 3,
        Register::PinChangeMask => 4,
        Register::PinChangeFlag => 5,
        Register::Status => 6,
    }
}
