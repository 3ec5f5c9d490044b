mod common;

use common::*;
use ks0108_lcd::{ChipSelect, Config, Half, Ks0108, Ks0108Error, ParallelBus};

#[test]
fn init_parks_lines_and_pulses_reset() {
    let (_lcd, wire) = build(Config::default().with_reset_pulse_ms(5), true);
    let w = wire.borrow();
    assert!(!w.cs1 && !w.cs2, "both halves deselected");
    assert!(!w.en && !w.rw && !w.rs);
    assert_eq!(w.rst_history, vec![false, true]);
    assert_eq!(w.delay_ms, 10);
    assert!(w.cycles.is_empty());
}

#[test]
fn init_without_reset_line_skips_the_pulse() {
    let (_lcd, wire) = build(Config::default(), false);
    let w = wire.borrow();
    assert!(w.rst_history.is_empty());
    assert_eq!(w.delay_ms, 0);
}

#[test]
fn active_low_select_inverts_chip_select_levels() {
    let config = Config::default().with_chip_select(ChipSelect::ActiveLow);
    let (mut lcd, wire) = build(config, true);
    {
        let w = wire.borrow();
        assert!(w.cs1 && w.cs2, "deselected means high when active low");
    }

    lcd.write_byte(0x42).unwrap();
    {
        let w = wire.borrow();
        assert!(!w.cs1, "left half asserted low");
        assert!(w.cs2);
    }

    lcd.on().unwrap();
    assert_eq!(take_cycles(&wire), vec![data(Half::Left, 0x42), cmd(Half::Both, 0x3F)]);
}

#[test]
fn every_cycle_holds_enable_for_the_configured_pulse() {
    let (mut lcd, wire) = build(Config::default(), true);
    lcd.on().unwrap();
    assert_eq!(wire.borrow().delay_ns, 450);

    let (mut lcd, wire) = build(Config::default().with_enable_pulse_ns(1_000), true);
    lcd.set_position(10, 1).unwrap();
    // Left column, Right column, page
    assert_eq!(wire.borrow().delay_ns, 3 * 1_000);
}

#[test]
fn control_pin_failure_is_reported() {
    let (mut lcd, wire) = driver();
    wire.borrow_mut().fail_line = Some(Line::En);
    assert_eq!(lcd.on(), Err(Ks0108Error::Pin(FakeError)));
    assert!(take_cycles(&wire).is_empty());
}

#[test]
fn data_port_failure_leaves_the_cursor_alone() {
    let (mut lcd, wire) = driver();
    lcd.set_position(12, 3).unwrap();
    take_cycles(&wire);

    wire.borrow_mut().fail_line = Some(Line::Data(0));
    assert_eq!(lcd.write_byte(0x01), Err(Ks0108Error::Bus(FakeError)));
    assert_eq!(lcd.cursor(), (12, 3));
    assert!(take_cycles(&wire).is_empty());
}

#[test]
fn init_failure_is_returned_from_new() {
    let config = Config::default();
    let wire = wire_for(&config);
    wire.borrow_mut().fail_line = Some(Line::Rst);

    let result = Ks0108::new(data_bus(&wire), control_pins(&wire, true), delay(&wire), config);
    assert!(matches!(result, Err(Ks0108Error::Pin(FakeError))));
}

#[test]
fn pin_bus_puts_d0_on_the_first_pin() {
    let wire = wire_for(&Config::default());
    let mut bus = data_bus(&wire);
    bus.write(0xA5).unwrap();
    assert_eq!(wire.borrow().data, 0xA5);
    bus.write(0x01).unwrap();
    assert_eq!(wire.borrow().data, 0x01);
}

#[test]
fn release_hands_the_pins_back() {
    let (lcd, wire) = driver();
    let (bus, pins, _delay) = lcd.release();
    assert!(pins.rst.is_some());
    assert_eq!(bus.release().len(), 8);
    assert!(take_cycles(&wire).is_empty());
}
