use pcint_led::config::{BUTTON1, LED1};
use pcint_led::hardware::port::{self, Level};
use pcint_led::hardware::registers::{GLOBAL_INTERRUPT_ENABLE, Register, RegisterBank};
use pcint_led::sim::Board;

#[test]
fn configuration_arms_only_the_button() {
    let board = Board::power_on();
    let bank = board.port();

    assert_eq!(bank.read(Register::Direction), LED1.mask());
    assert_eq!(bank.read(Register::Direction) & BUTTON1.mask(), 0);
    assert_eq!(bank.read(Register::Port) & BUTTON1.mask(), BUTTON1.mask());
    assert_ne!(bank.read(Register::Status) & GLOBAL_INTERRUPT_ENABLE, 0);
    assert_eq!(bank.read(Register::PinChangeMask), BUTTON1.mask());
    assert!(port::global_interrupts_enabled(bank));
}

#[test]
fn foreground_never_touches_the_led() {
    let mut board = Board::power_on();
    board.press();
    for _ in 0..10 {
        board.idle();
    }
    assert_eq!(board.led(), Level::Low, "no vector has run yet");

    board.service_interrupts();
    assert_eq!(board.led(), Level::High);

    for _ in 0..10 {
        board.idle();
    }
    assert_eq!(board.led(), Level::High);
    assert_eq!(board.toggles(), 1);
}

#[test]
fn release_is_a_no_op() {
    let mut board = Board::power_on();
    board.press();
    board.service_interrupts();

    board.release();
    assert_eq!(board.service_interrupts(), 1, "release still runs the vector");
    assert_eq!(board.led(), Level::High);
    assert_eq!(board.toggles(), 1);
}

#[test]
fn pressed_sample_is_a_pure_toggle() {
    let mut board = Board::power_on();
    assert_eq!(board.led(), Level::Low);

    board.press();
    board.service_interrupts();
    assert_eq!(board.led(), Level::High);

    board.release();
    board.service_interrupts();
    board.press();
    board.service_interrupts();
    assert_eq!(board.led(), Level::Low);
}

#[test]
fn scenario_a_single_press_cycle() {
    let mut board = Board::power_on();
    assert_eq!(board.led(), Level::Low);

    board.press();
    board.service_interrupts();
    assert_eq!(board.button(), Level::Low);
    assert_eq!(board.led(), Level::High);

    board.release();
    board.service_interrupts();
    assert_eq!(board.button(), Level::High);
    assert_eq!(board.led(), Level::High);
}

#[test]
fn scenario_b_two_press_cycles_restore_the_led() {
    let mut board = Board::power_on();
    board.click();
    assert_eq!(board.led(), Level::High);

    board.press();
    board.service_interrupts();
    assert_eq!(board.led(), Level::Low);

    board.release();
    board.service_interrupts();
    assert_eq!(board.led(), Level::Low);

    assert_eq!(board.invocations(), 4);
    assert!(
        board
            .led_trace()
            .eq([Level::Low, Level::High, Level::Low])
    );
}

#[test]
fn bounce_with_three_pressed_samples_toggles_three_times() {
    let mut board = Board::power_on();

    // contact chatters closed-open-closed-open-closed, each edge dispatched
    for _ in 0..2 {
        board.press();
        board.service_interrupts();
        board.release();
        board.service_interrupts();
    }
    board.press();
    board.service_interrupts();

    assert_eq!(board.toggles(), 3);
    assert_eq!(board.led(), Level::High);

    board.release();
    board.service_interrupts();
    assert_eq!(board.led(), Level::High);
    assert_eq!(board.invocations(), 6);
}

#[test]
fn bounce_with_two_pressed_samples_swallows_the_press() {
    let mut board = Board::power_on();

    board.click();
    board.press();
    board.service_interrupts();
    board.release();
    board.service_interrupts();

    assert_eq!(board.toggles(), 2);
    assert_eq!(board.led(), Level::Low);
}

#[test]
fn edges_faster_than_dispatch_are_seen_as_one() {
    let mut board = Board::power_on();

    board.press();
    board.release();
    assert_eq!(board.service_interrupts(), 1);
    assert_eq!(board.led(), Level::Low, "only the released level was sampled");

    board.press();
    board.release();
    board.press();
    assert_eq!(board.service_interrupts(), 1);
    assert_eq!(board.led(), Level::High);
}

#[test]
fn led_level_is_read_from_the_output_latch() {
    let mut board = Board::power_on();
    board.click();
    assert_eq!(port::read_output_level(board.port(), LED1), board.led());
    assert_eq!(port::read_input_level(board.port(), LED1), Level::High);
}
