//! [`RegisterBank`] on GPIOB of the STM32F103.
//!
//! | Register           | STM32F1                                   |
//! |--------------------|-------------------------------------------|
//! | `Direction`        | GPIOB CRL/CRH mode bits                   |
//! | `Port`             | GPIOB ODR (+ CRL/CRH pull selection)      |
//! | `Input`            | GPIOB IDR, writes toggle through BSRR     |
//! | `PinChangeControl` | NVIC enable of `EXTI9_5`                  |
//! | `PinChangeMask`    | EXTI IMR (lines routed to port B)         |
//! | `PinChangeFlag`    | EXTI PR                                   |
//! | `Status`           | PRIMASK                                   |
//!
//! Only EXTI lines 5 to 9 share the `EXTI9_5` vector that is bound to the
//! handler, so the watched pin has to be one of PB5..PB9.

use cortex_m::register::primask;
use embassy_stm32::interrupt::{self, InterruptExt};
use embassy_stm32::pac;

use super::registers::{GLOBAL_INTERRUPT_ENABLE, PIN_CHANGE_ENABLE, Register, RegisterBank};

// CNF/MODE nibbles of CRL/CRH
const CR_INPUT_FLOATING: u32 = 0b0100;
const CR_INPUT_PULL: u32 = 0b1000;
const CR_OUTPUT_PUSH_PULL_2MHZ: u32 = 0b0010;

// Port B selector in AFIO_EXTICRx
const EXTICR_PORT_B: u32 = 0b0001;

// RCC_APB2ENR
const APB2ENR_AFIOEN: u32 = 1 << 0;
const APB2ENR_IOPBEN: u32 = 1 << 3;

const PORT_PINS: u32 = 0xFFFF;

/// Memory-mapped GPIOB together with its EXTI lines.
///
/// Holds no state of its own: every read and write goes straight to the
/// peripheral registers.
pub struct PortB {
    _private: (),
}

impl PortB {
    /// Clocks GPIOB and AFIO and hands out the port. Called once at startup.
    pub fn take() -> Self {
        pac::RCC
            .apb2enr()
            .modify(|w| w.0 |= APB2ENR_AFIOEN | APB2ENR_IOPBEN);
        Self { _private: () }
    }

    /// Handle for the interrupt vector, the clocks are already running.
    pub fn steal() -> Self {
        Self { _private: () }
    }

    fn direction(&self) -> u16 {
        let mut outputs = 0;
        for half in 0..2 {
            let cr = pac::GPIOB.cr(half).read().0;
            for slot in 0..8 {
                if (cr >> (slot * 4)) & 0b11 != 0 {
                    outputs |= 1 << (half * 8 + slot);
                }
            }
        }
        outputs
    }

    fn output_latch(&self) -> u16 {
        (pac::GPIOB.odr().read().0 & PORT_PINS) as u16
    }

    /// Rewrites CRL/CRH from the direction bits and the output latch.
    fn apply_pin_modes(&mut self, outputs: u16, latch: u16) {
        for half in 0..2 {
            let mut cr = 0;
            for slot in 0..8 {
                let bit = 1u16 << (half * 8 + slot);
                let mode = if outputs & bit != 0 {
                    CR_OUTPUT_PUSH_PULL_2MHZ
                } else if latch & bit != 0 {
                    CR_INPUT_PULL
                } else {
                    CR_INPUT_FLOATING
                };
                cr |= mode << (slot * 4);
            }
            pac::GPIOB.cr(half).write(|w| w.0 = cr);
        }
    }

    /// No toggle register on the F1: one ODR read, then a single atomic BSRR
    /// write sets the cleared bits and resets the set ones.
    fn toggle(&mut self, pins: u16) {
        let odr = pac::GPIOB.odr().read().0 & PORT_PINS;
        let pins = u32::from(pins);
        let set = !odr & pins;
        let reset = odr & pins;
        pac::GPIOB.bsrr().write(|w| w.0 = set | (reset << 16));
    }

    fn arm_lines(&mut self, lines: u16) {
        for line in 0..16usize {
            if lines & (1 << line) == 0 {
                continue;
            }
            let shift = (line % 4) * 4;
            pac::AFIO
                .exticr(line / 4)
                .modify(|w| w.0 = (w.0 & !(0xF << shift)) | (EXTICR_PORT_B << shift));
        }

        let lines = u32::from(lines);
        pac::EXTI
            .rtsr(0)
            .modify(|w| w.0 = (w.0 & !PORT_PINS) | lines);
        pac::EXTI
            .ftsr(0)
            .modify(|w| w.0 = (w.0 & !PORT_PINS) | lines);
        pac::EXTI.pr(0).write(|w| w.0 = lines);
        pac::EXTI
            .imr(0)
            .modify(|w| w.0 = (w.0 & !PORT_PINS) | lines);
    }
}

impl RegisterBank for PortB {
    fn read(&self, reg: Register) -> u16 {
        match reg {
            Register::Direction => self.direction(),
            Register::Port => self.output_latch(),
            Register::Input => (pac::GPIOB.idr().read().0 & PORT_PINS) as u16,
            Register::PinChangeControl => {
                if interrupt::EXTI9_5.is_enabled() {
                    PIN_CHANGE_ENABLE
                } else {
                    0
                }
            }
            Register::PinChangeMask => (pac::EXTI.imr(0).read().0 & PORT_PINS) as u16,
            Register::PinChangeFlag => (pac::EXTI.pr(0).read().0 & PORT_PINS) as u16,
            Register::Status => {
                if primask::read().is_active() {
                    GLOBAL_INTERRUPT_ENABLE
                } else {
                    0
                }
            }
        }
    }

    fn write(&mut self, reg: Register, value: u16) {
        match reg {
            Register::Direction => {
                let latch = self.output_latch();
                self.apply_pin_modes(value, latch);
            }
            Register::Port => {
                let outputs = self.direction();
                pac::GPIOB.odr().write(|w| w.0 = u32::from(value));
                self.apply_pin_modes(outputs, value);
            }
            Register::Input => self.toggle(value),
            Register::PinChangeControl => {
                if value & PIN_CHANGE_ENABLE != 0 {
                    interrupt::EXTI9_5.unpend();
                    // SAFETY: the vector only touches GPIOB and EXTI through `PortB`.
                    unsafe { interrupt::EXTI9_5.enable() };
                } else {
                    interrupt::EXTI9_5.disable();
                }
            }
            Register::PinChangeMask => self.arm_lines(value),
            Register::PinChangeFlag => pac::EXTI.pr(0).write(|w| w.0 = u32::from(value)),
            Register::Status => {
                if value & GLOBAL_INTERRUPT_ENABLE != 0 {
                    // SAFETY: no critical section is open while the port is configured.
                    unsafe { cortex_m::interrupt::enable() };
                } else {
                    cortex_m::interrupt::disable();
                }
            }
        }
    }
}
