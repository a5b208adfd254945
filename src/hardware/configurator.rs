use super::port;
use super::registers::{Register, RegisterBank};
use crate::config::{BUTTON1, BUTTON1_PULL, LED1};
use crate::hardware::port::Pull;

/// Brings the LED, the button and the pin-change interrupt into the armed
/// state. Runs once at startup, before the idle loop.
///
/// 1. LED1 becomes the only output of the port.
/// 2. The pull-up on BUTTON1 is enabled before the pin is armed, so the
///    floating input settling high cannot leave a request pending.
/// 3. Global interrupts are enabled.
/// 4. The pin-change source of the port is enabled with BUTTON1 as the only
///    unmasked pin.
pub fn initialize<B: RegisterBank>(bank: &mut B) {
    port::set_direction(bank, LED1.mask());

    let pulled = match BUTTON1_PULL {
        Pull::Up => BUTTON1.mask(),
    };
    port::configure_pull_ups(bank, pulled);

    port::enable_global_interrupts(bank);

    port::enable_pin_change_source(bank);
    port::set_pin_change_mask(bank, BUTTON1.mask());

    info!(
        "pin-change armed: dir={:#x} port={:#x} mask={:#x}",
        bank.read(Register::Direction),
        bank.read(Register::Port),
        bank.read(Register::PinChangeMask),
    );
}
