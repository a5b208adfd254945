//! Pin-change interrupt LED toggle
//!
//! A push button on PB5 toggles an LED on PB0. The button is watched by a
//! pin-change interrupt instead of being polled; the foreground does nothing.
//!
//! The configurator and the interrupt handler are written against the
//! [`hardware::registers::RegisterBank`] trait, so the same code runs on the
//! Blue Pill (`hardware::stm32f1`) and on the host against [`sim`].

#![cfg_attr(not(test), no_std)]

#[macro_use]
mod fmt;

pub mod config;
pub mod hardware;

#[cfg(not(target_os = "none"))]
pub mod sim;
