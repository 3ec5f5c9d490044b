// KS0108 dual-controller driver: two 64x64 chips presented as one 128x64 panel.
//
// Instruction set used (RS low):
//   0x3E / 0x3F       display off / on
//   0x40 | col (0..63) set column (Y address in datasheet terms)
//   0xB8 | page (0..7) set page   (X address in datasheet terms)
//
// Both controllers auto-increment their own column after every data write.
// The driver mirrors that in `x` so it knows which half to select next and
// when a line is full. Nothing is buffered; all rendering is write-only.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use crate::bus::{BusResult, ControlPins, Half, Ks0108Bus, ParallelBus, Register};
use crate::config::Config;
use crate::error::Ks0108Error;
use crate::font::FontSize;

/// Panel width in columns.
pub const WIDTH: u8 = 128;
/// Width of one controller half.
pub const HALF_WIDTH: u8 = WIDTH / 2;
/// Panel height in 8-pixel pages.
pub const PAGES: u8 = 8;

const CMD_DISPLAY_ON: u8 = 0x3F;
const CMD_DISPLAY_OFF: u8 = 0x3E;
const CMD_SET_COLUMN: u8 = 0x40;
const COLUMN_MASK: u8 = 63;
const CMD_SET_PAGE: u8 = 0xB8;
const PAGE_MASK: u8 = 7;

pub struct Ks0108<BUS, P, D> {
    bus: Ks0108Bus<BUS, P, D>,
    x: u8,
    y: u8,
}

impl<BUS, P, D> Ks0108<BUS, P, D>
where
    BUS: ParallelBus,
    P: OutputPin,
    D: DelayNs,
{
    /// Take ownership of the bus and pins and bring the controllers out of reset.
    ///
    /// * `data` - the 8-bit data port (see [`crate::bus::PinBus`])
    /// * `pins` - CS1, CS2, R/W, RS, EN and the optional RST line
    /// * `delay` - any `DelayNs` impl, used for the EN pulse and reset timing
    ///
    /// Nothing is written to the controllers; call [`Ks0108::on`] and
    /// [`Ks0108::clear`] once the panel should show something.
    pub fn new(
        data: BUS,
        pins: ControlPins<P>,
        delay: D,
        config: Config,
    ) -> Result<Self, Ks0108Error<BUS::Error, P::Error>> {
        let mut this = Self {
            bus: Ks0108Bus::new(data, pins, delay, &config),
            x: 0,
            y: 0,
        };

        this.bus.idle()?;
        this.bus.reset(config.reset_pulse_ms)?;

        log::debug!(
            "ks0108: init, cs {:?}, EN pulse {} ns",
            config.chip_select,
            config.enable_pulse_ns
        );
        Ok(this)
    }

    /// Hand the data port, pins and delay back.
    pub fn release(self) -> (BUS, ControlPins<P>, D) {
        self.bus.release()
    }

    /// Engine-side cursor `(column, page)`, both 0-based.
    #[inline]
    pub fn cursor(&self) -> (u8, u8) {
        (self.x, self.y)
    }

    // ---- Addressing ----

    /// Move both controllers to column `x` (0..128).
    ///
    /// When `x` lands in the left half, the right controller is parked at
    /// column 0. A following run of data writes that crosses into the right
    /// half then continues at column 64 instead of leaving a gap up to a
    /// stale right-hand pointer.
    ///
    /// `x` is not range checked; the command only carries its low 6 bits.
    pub fn set_column(&mut self, x: u8) -> BusResult<BUS, P> {
        log::trace!("ks0108: column {}", x);
        if x < HALF_WIDTH {
            self.command(Half::Left, CMD_SET_COLUMN | (x & COLUMN_MASK))?;
            self.command(Half::Right, CMD_SET_COLUMN)?;
        } else {
            self.command(Half::Both, CMD_SET_COLUMN | (x & COLUMN_MASK))?;
        }
        self.x = x;
        Ok(())
    }

    /// Move both controllers to page `y`, taken modulo 8.
    pub fn set_page(&mut self, y: u8) -> BusResult<BUS, P> {
        let y = y & PAGE_MASK;
        log::trace!("ks0108: page {}", y);
        self.command(Half::Both, CMD_SET_PAGE | y)?;
        self.y = y;
        Ok(())
    }

    pub fn set_position(&mut self, x: u8, y: u8) -> BusResult<BUS, P> {
        self.set_column(x)?;
        self.set_page(y)
    }

    /// Write one column byte at the cursor and advance it.
    ///
    /// Running off the right edge wraps back to column 0 on the same page.
    pub fn write_byte(&mut self, data: u8) -> BusResult<BUS, P> {
        if self.x >= WIDTH {
            // Half is picked from the wrapped column, so this byte goes to
            // the left controller rather than staying on the right one.
            self.set_column(0)?;
        }
        let half = if self.x < HALF_WIDTH { Half::Left } else { Half::Right };
        self.bus.write(half, Register::Data, data)?;
        self.x += 1;
        Ok(())
    }

    // ---- Page operations ----

    /// Blank the whole panel and return to (0, 0).
    pub fn clear(&mut self) -> BusResult<BUS, P> {
        log::debug!("ks0108: clear");
        self.sweep(0x00)
    }

    /// Light every pixel and return to (0, 0).
    pub fn fill_all(&mut self) -> BusResult<BUS, P> {
        log::debug!("ks0108: fill");
        self.sweep(0xFF)
    }

    fn sweep(&mut self, pattern: u8) -> BusResult<BUS, P> {
        for page in 0..PAGES {
            self.set_position(0, page)?;
            for _ in 0..WIDTH {
                self.write_byte(pattern)?;
            }
        }
        self.set_position(0, 0)
    }

    // ---- Commands ----

    pub fn on(&mut self) -> BusResult<BUS, P> {
        log::debug!("ks0108: display on");
        self.command(Half::Both, CMD_DISPLAY_ON)
    }

    pub fn off(&mut self) -> BusResult<BUS, P> {
        log::debug!("ks0108: display off");
        self.command(Half::Both, CMD_DISPLAY_OFF)
    }

    // ---- 1-based caller API ----

    /// Move the cursor to column `x` (1..=128) and text row `y` (1..=8).
    ///
    /// Out-of-range coordinates are not rejected; they wrap like the
    /// underlying 8-bit arithmetic does.
    pub fn goto(&mut self, x: u8, y: u8) -> BusResult<BUS, P> {
        self.set_position(x.wrapping_sub(1), y.wrapping_sub(1))
    }

    /// Render `text` in the given font, optionally moving to the 1-based
    /// position first. A missing coordinate defaults to 1 when the other
    /// one is given; with neither, rendering continues at the cursor.
    pub fn write(
        &mut self,
        text: &str,
        size: FontSize,
        x: Option<u8>,
        y: Option<u8>,
    ) -> BusResult<BUS, P> {
        if x.is_some() || y.is_some() {
            self.goto(x.unwrap_or(1), y.unwrap_or(1))?;
        }
        self.write_str(text, size.into())
    }

    #[inline]
    fn command(&mut self, half: Half, cmd: u8) -> BusResult<BUS, P> {
        self.bus.write(half, Register::Command, cmd)
    }
}
