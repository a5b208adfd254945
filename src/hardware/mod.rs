pub mod configurator;
pub mod gpio_button;
pub mod gpio_led;
pub mod pcint;
pub mod port;
pub mod registers;
pub mod traits;

#[cfg(target_os = "none")]
pub mod stm32f1;
