//! Host-side stand-in for the port and its pin-change interrupt.
//!
//! [`SimulatedPort`] implements [`crate::hardware::registers::RegisterBank`]
//! and raises payload-free [`PinChange`] events through a one-slot channel;
//! [`Board`] plays the role of the CPU dispatching them to the vector.

mod board;
mod port;

pub use board::Board;
pub use port::{PinChange, SimulatedPort};
