// KS0108 parallel bus cycle.
//
// Wiring (one cycle per byte, write only):
//   CS1 = left controller  (columns 0..63)
//   CS2 = right controller (columns 64..127)
//   R/W = low for write (reads are never issued)
//   RS  = low for instruction, high for display data
//   EN  = latched on the falling edge
//   D0..D7 = shared 8-bit data port

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{ErrorType, OutputPin};

use crate::config::{ChipSelect, Config};
use crate::error::Ks0108Error;

/// Which controller half a bus cycle addresses.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Half {
    Left,
    Right,
    Both,
}

impl Half {
    #[inline]
    fn selects_left(self) -> bool {
        matches!(self, Half::Left | Half::Both)
    }

    #[inline]
    fn selects_right(self) -> bool {
        matches!(self, Half::Right | Half::Both)
    }
}

/// Value of the RS line for a bus cycle.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Register {
    Command,
    Data,
}

/// The 8-bit data port shared by both controllers.
pub trait ParallelBus {
    type Error: core::fmt::Debug;

    /// Drive `byte` onto D0..D7. The value must stay put until the next call.
    fn write(&mut self, byte: u8) -> Result<(), Self::Error>;
}

/// Data port built from eight individual output pins, D0 first.
pub struct PinBus<P> {
    pins: [P; 8],
}

impl<P: OutputPin> PinBus<P> {
    pub fn new(pins: [P; 8]) -> Self {
        Self { pins }
    }

    pub fn release(self) -> [P; 8] {
        self.pins
    }
}

impl<P: OutputPin> ParallelBus for PinBus<P> {
    type Error = P::Error;

    fn write(&mut self, byte: u8) -> Result<(), Self::Error> {
        for (bit, pin) in self.pins.iter_mut().enumerate() {
            pin.set_state(((byte >> bit) & 1 != 0).into())?;
        }
        Ok(())
    }
}

/// Control lines of the panel. `rst` is optional, many modules tie it high.
pub struct ControlPins<P> {
    pub cs1: P,
    pub cs2: P,
    pub rw: P,
    pub rs: P,
    pub en: P,
    pub rst: Option<P>,
}

/// Result of any driver operation that touches the bus.
pub type BusResult<BUS, P> =
    Result<(), Ks0108Error<<BUS as ParallelBus>::Error, <P as ErrorType>::Error>>;

/// Owns the data port, the control lines and the delay source, and performs
/// single write cycles. Knows nothing about cursors or columns.
pub struct Ks0108Bus<BUS, P, D> {
    data: BUS,
    pins: ControlPins<P>,
    delay: D,
    chip_select: ChipSelect,
    enable_pulse_ns: u32,
}

impl<BUS, P, D> Ks0108Bus<BUS, P, D>
where
    BUS: ParallelBus,
    P: OutputPin,
    D: DelayNs,
{
    pub fn new(data: BUS, pins: ControlPins<P>, delay: D, config: &Config) -> Self {
        Self {
            data,
            pins,
            delay,
            chip_select: config.chip_select,
            enable_pulse_ns: config.enable_pulse_ns,
        }
    }

    /// Park every line: both halves deselected, EN/RW/RS low.
    pub fn idle(&mut self) -> BusResult<BUS, P> {
        let off = self.chip_select.level(false).into();
        self.pins.cs1.set_state(off).map_err(Ks0108Error::Pin)?;
        self.pins.cs2.set_state(off).map_err(Ks0108Error::Pin)?;
        self.pins.en.set_low().map_err(Ks0108Error::Pin)?;
        self.pins.rw.set_low().map_err(Ks0108Error::Pin)?;
        self.pins.rs.set_low().map_err(Ks0108Error::Pin)?;
        Ok(())
    }

    /// Hard reset: RST low for `pulse_ms`, then high. No-op without a RST pin.
    pub fn reset(&mut self, pulse_ms: u32) -> BusResult<BUS, P> {
        if let Some(r) = self.pins.rst.as_mut() {
            r.set_low().map_err(Ks0108Error::Pin)?;
            self.delay.delay_ms(pulse_ms);
            r.set_high().map_err(Ks0108Error::Pin)?;
            self.delay.delay_ms(pulse_ms);
        }
        Ok(())
    }

    /// One write cycle: select, R/W low, RS, data, EN pulse.
    pub fn write(&mut self, half: Half, register: Register, byte: u8) -> BusResult<BUS, P> {
        let cs = self.chip_select;
        self.pins
            .cs1
            .set_state(cs.level(half.selects_left()).into())
            .map_err(Ks0108Error::Pin)?;
        self.pins
            .cs2
            .set_state(cs.level(half.selects_right()).into())
            .map_err(Ks0108Error::Pin)?;

        self.pins.rw.set_low().map_err(Ks0108Error::Pin)?; // write
        let rs = match register {
            Register::Command => self.pins.rs.set_low(),
            Register::Data => self.pins.rs.set_high(),
        };
        rs.map_err(Ks0108Error::Pin)?;

        self.data.write(byte).map_err(Ks0108Error::Bus)?;

        // Latch on the falling edge
        self.pins.en.set_high().map_err(Ks0108Error::Pin)?;
        self.delay.delay_ns(self.enable_pulse_ns);
        self.pins.en.set_low().map_err(Ks0108Error::Pin)?;
        Ok(())
    }

    pub fn release(self) -> (BUS, ControlPins<P>, D) {
        (self.data, self.pins, self.delay)
    }
}
