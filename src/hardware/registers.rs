/// Addressable registers of one I/O port and its pin-change interrupt source.
///
/// Every register is at most 16 bits wide, bit `n` belongs to pin `n` unless
/// noted otherwise.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(target_os = "none", derive(defmt::Format))]
pub enum Register {
    /// Pin direction, 1 = output.
    Direction,
    /// Output latch. On input pins a 1 enables the pull-up resistor.
    Port,
    /// Read: sampled pin levels. Write: toggles the output latch of every pin
    /// written as 1, pins written as 0 are untouched.
    Input,
    /// Port-level pin-change interrupt enable, bit 0.
    PinChangeControl,
    /// Pins whose level changes raise the pin-change interrupt.
    PinChangeMask,
    /// Pending pin-change requests. Writing 1 clears the bit.
    PinChangeFlag,
    /// CPU status, bit 7 is the global interrupt enable.
    Status,
}

/// Port-level enable bit in [`Register::PinChangeControl`].
pub const PIN_CHANGE_ENABLE: u16 = 1 << 0;

/// Global interrupt enable bit in [`Register::Status`].
pub const GLOBAL_INTERRUPT_ENABLE: u16 = 1 << 7;

/// Raw register access.
///
/// Implemented by the memory-mapped port on the target and by
/// [`crate::sim::SimulatedPort`] on the host. Writes assign the whole register.
pub trait RegisterBank {
    fn read(&self, reg: Register) -> u16;
    fn write(&mut self, reg: Register, value: u16);
}
