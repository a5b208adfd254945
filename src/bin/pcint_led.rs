//! STM32F103 Blue Pill Pin-Change Interrupt LED Toggle
//! =============================================================================================
//!
//! This firmware toggles an LED each time a push button is pressed, without
//! polling the button:
//! - PB5 is an input with its internal pull-up, the button pulls it to ground
//! - Both edges of PB5 raise EXTI line 5 (`EXTI9_5` vector)
//! - The vector samples PB5 and toggles PB0 only when it reads low
//!
//! Hardware Connections:
//!   LED    -> PB0 (anode, with series resistor; cathode to GND)
//!   Button -> PB5 and GND
//!
//! Expected Behavior:
//!   - LED toggles once per press, nothing happens on release
//!   - No debouncing: a bouncing contact can toggle the LED more than once
//!   - Startup and register state are logged via defmt RTT
//!
//! On the host this binary replays two clean presses on the simulated board.

#![cfg_attr(target_os = "none", no_std)]
#![cfg_attr(target_os = "none", no_main)]

#[cfg(target_os = "none")]
mod firmware {
    use embassy_executor::Spawner;
    use embassy_stm32::interrupt;
    use pcint_led::hardware::{configurator, pcint, stm32f1::PortB};
    use {defmt_rtt as _, panic_probe as _}; // Logging and panic handlers

    /// Main application entry point
    #[embassy_executor::main]
    async fn main(_spawner: Spawner) {
        // Clocks and time driver with the default configuration
        let _p = embassy_stm32::init(Default::default());

        defmt::info!("System start");

        // Pins, pull-up and pin-change interrupt
        let mut port = PortB::take();
        configurator::initialize(&mut port);

        defmt::info!("Waiting for button presses");

        // Everything else happens in the EXTI9_5 vector
        loop {
            embassy_time::Timer::after_secs(1000).await;
        }
    }

    /// Pin-change vector for EXTI lines 5..9
    #[interrupt]
    fn EXTI9_5() {
        pcint::service_pin_change(&mut PortB::steal());
    }
}

#[cfg(not(target_os = "none"))]
fn main() {
    use pcint_led::sim::Board;

    let mut board = Board::power_on();
    println!("power on: led={}", board.led());

    for n in 1..=2 {
        board.press();
        board.service_interrupts();
        println!("press {n}:   led={}", board.led());

        board.release();
        board.service_interrupts();
        println!("release {n}: led={}", board.led());
    }

    println!(
        "{} invocations, {} toggles",
        board.invocations(),
        board.toggles()
    );
}
