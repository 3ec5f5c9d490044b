//! Fake panel wiring shared by the integration tests.
//!
//! Every pin writes into one `Wire`. On each EN falling edge the wire latches
//! a `Cycle` from the current CS/RS/data levels, the same moment a real
//! KS0108 samples the bus, so tests compare decoded bus cycles rather than
//! raw pin toggles.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{self, ErrorKind, ErrorType, OutputPin};
use ks0108_lcd::{ChipSelect, Config, ControlPins, Half, Ks0108, PinBus, Register};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Line {
    Cs1,
    Cs2,
    Rw,
    Rs,
    En,
    Rst,
    Data(u8),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Cycle {
    pub half: Half,
    pub register: Register,
    pub byte: u8,
}

pub fn cmd(half: Half, byte: u8) -> Cycle {
    Cycle { half, register: Register::Command, byte }
}

pub fn data(half: Half, byte: u8) -> Cycle {
    Cycle { half, register: Register::Data, byte }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FakeError;

impl digital::Error for FakeError {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Other
    }
}

#[derive(Default)]
pub struct Wire {
    pub cs1: bool,
    pub cs2: bool,
    pub rw: bool,
    pub rs: bool,
    pub en: bool,
    pub data: u8,
    pub active_low: bool,
    pub cycles: Vec<Cycle>,
    pub rst_history: Vec<bool>,
    pub delay_ns: u64,
    pub delay_ms: u64,
    /// Writes to this line fail with `FakeError`.
    pub fail_line: Option<Line>,
}

impl Wire {
    fn drive(&mut self, line: Line, level: bool) -> Result<(), FakeError> {
        if self.fail_line == Some(line) {
            return Err(FakeError);
        }
        match line {
            Line::Cs1 => self.cs1 = level,
            Line::Cs2 => self.cs2 = level,
            Line::Rw => self.rw = level,
            Line::Rs => self.rs = level,
            Line::Rst => self.rst_history.push(level),
            Line::Data(bit) => {
                if level {
                    self.data |= 1 << bit;
                } else {
                    self.data &= !(1 << bit);
                }
            }
            Line::En => {
                let falling = self.en && !level;
                self.en = level;
                if falling {
                    self.latch();
                }
            }
        }
        Ok(())
    }

    fn latch(&mut self) {
        assert!(!self.rw, "EN pulsed during a read cycle");
        let left = self.cs1 != self.active_low;
        let right = self.cs2 != self.active_low;
        let half = match (left, right) {
            (true, true) => Half::Both,
            (true, false) => Half::Left,
            (false, true) => Half::Right,
            (false, false) => panic!("EN pulsed with no controller selected"),
        };
        let register = if self.rs { Register::Data } else { Register::Command };
        self.cycles.push(Cycle { half, register, byte: self.data });
    }
}

pub type SharedWire = Rc<RefCell<Wire>>;

pub struct FakePin {
    line: Line,
    wire: SharedWire,
}

impl ErrorType for FakePin {
    type Error = FakeError;
}

impl OutputPin for FakePin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.wire.borrow_mut().drive(self.line, false)
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.wire.borrow_mut().drive(self.line, true)
    }
}

pub struct FakeDelay {
    wire: SharedWire,
}

impl DelayNs for FakeDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.wire.borrow_mut().delay_ns += u64::from(ns);
    }

    fn delay_ms(&mut self, ms: u32) {
        self.wire.borrow_mut().delay_ms += u64::from(ms);
    }
}

pub type Display = Ks0108<PinBus<FakePin>, FakePin, FakeDelay>;

fn pin(wire: &SharedWire, line: Line) -> FakePin {
    FakePin { line, wire: Rc::clone(wire) }
}

pub fn control_pins(wire: &SharedWire, with_rst: bool) -> ControlPins<FakePin> {
    ControlPins {
        cs1: pin(wire, Line::Cs1),
        cs2: pin(wire, Line::Cs2),
        rw: pin(wire, Line::Rw),
        rs: pin(wire, Line::Rs),
        en: pin(wire, Line::En),
        rst: with_rst.then(|| pin(wire, Line::Rst)),
    }
}

pub fn data_bus(wire: &SharedWire) -> PinBus<FakePin> {
    PinBus::new(core::array::from_fn(|bit| pin(wire, Line::Data(bit as u8))))
}

pub fn delay(wire: &SharedWire) -> FakeDelay {
    FakeDelay { wire: Rc::clone(wire) }
}

pub fn wire_for(config: &Config) -> SharedWire {
    Rc::new(RefCell::new(Wire {
        active_low: config.chip_select == ChipSelect::ActiveLow,
        ..Wire::default()
    }))
}

pub fn build(config: Config, with_rst: bool) -> (Display, SharedWire) {
    let wire = wire_for(&config);
    let display = Ks0108::new(data_bus(&wire), control_pins(&wire, with_rst), delay(&wire), config)
        .expect("fake pins never fail during init");
    (display, wire)
}

pub fn driver() -> (Display, SharedWire) {
    build(Config::default(), true)
}

/// Drain the bus cycles recorded so far.
pub fn take_cycles(wire: &SharedWire) -> Vec<Cycle> {
    std::mem::take(&mut wire.borrow_mut().cycles)
}

/// Cycles `set_column(x)` must produce.
pub fn column_cycles(x: u8) -> Vec<Cycle> {
    if x < 64 {
        vec![cmd(Half::Left, 0x40 | x), cmd(Half::Right, 0x40)]
    } else {
        vec![cmd(Half::Both, 0x40 | (x & 63))]
    }
}

/// Cycles `set_position(x, y)` must produce.
pub fn position_cycles(x: u8, y: u8) -> Vec<Cycle> {
    let mut cycles = column_cycles(x);
    cycles.push(cmd(Half::Both, 0xB8 | (y & 7)));
    cycles
}

pub fn data_bytes(cycles: &[Cycle]) -> Vec<u8> {
    cycles
        .iter()
        .filter(|c| c.register == Register::Data)
        .map(|c| c.byte)
        .collect()
}
