//! Text rendering on top of the addressing engine.
//!
//! Text is a byte stream. Control characters:
//! - `\n` starts the next text line (one glyph height down) at column 0
//! - `\f` clears the panel and homes the cursor
//! - `\r` returns to column 0, only for fonts with `carriage_return` set
//!
//! Everything else is a glyph. A glyph that would not fit on the current
//! line wraps to the next one first.

use core::fmt;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use crate::bus::{BusResult, ParallelBus};
use crate::error::Ks0108Error;
use crate::font::Font;
use crate::ks0108::{Ks0108, WIDTH};

const LINE_FEED: u8 = b'\n';
const FORM_FEED: u8 = 0x0C;
const CARRIAGE_RETURN: u8 = b'\r';

impl<BUS, P, D> Ks0108<BUS, P, D>
where
    BUS: ParallelBus,
    P: OutputPin,
    D: DelayNs,
{
    /// Render `text` at the cursor with `font`.
    ///
    /// Stops at the first byte the font has no glyph for and returns
    /// [`Ks0108Error::GlyphOutOfRange`]; everything before it is already on
    /// the panel.
    pub fn write_str(&mut self, text: &str, font: Font) -> BusResult<BUS, P> {
        for ch in text.bytes() {
            self.write_char(ch, &font)?;
        }
        Ok(())
    }

    fn write_char(&mut self, ch: u8, font: &Font) -> BusResult<BUS, P> {
        let (x, y) = self.cursor();
        match ch {
            LINE_FEED => self.set_position(0, y.wrapping_add(font.pages)),
            FORM_FEED => {
                self.clear()?;
                self.set_position(0, 0)
            }
            CARRIAGE_RETURN if font.carriage_return => self.set_column(0),
            _ => {
                let Some(glyph) = font.glyph(ch) else {
                    log::warn!("ks0108: no glyph for 0x{:02X}", ch);
                    return Err(Ks0108Error::GlyphOutOfRange(ch));
                };
                if x > WIDTH.saturating_sub(font.width) {
                    self.set_position(0, y.wrapping_add(font.pages))?;
                }
                if font.pages == 1 {
                    self.blit_line(glyph, font)
                } else {
                    self.blit_tall(glyph, font)
                }
            }
        }
    }

    // One page tall: stream the columns, then the spacing.
    fn blit_line(&mut self, glyph: &[u8], font: &Font) -> BusResult<BUS, P> {
        for &col in glyph {
            self.write_byte(col)?;
        }
        for _ in 0..font.spacing {
            self.write_byte(0)?;
        }
        Ok(())
    }

    // A column write only reaches one page, so tall glyphs go page by page:
    // after each page-row step back to the glyph's left edge one page lower,
    // and after the last one return to the top page just right of the glyph.
    // Page arithmetic wraps modulo 8, a glyph on the last page continues on page 0.
    fn blit_tall(&mut self, glyph: &[u8], font: &Font) -> BusResult<BUS, P> {
        let advance = font.advance();
        for row in glyph.chunks(font.width as usize) {
            self.blit_line(row, font)?;
            let (x, y) = self.cursor();
            self.set_position(x.wrapping_sub(advance), y.wrapping_add(1))?;
        }
        let (x, y) = self.cursor();
        self.set_position(x.wrapping_add(advance), y.wrapping_sub(font.pages))
    }

    /// `core::fmt::Write` adapter rendering with `font`.
    pub fn text(&mut self, font: impl Into<Font>) -> TextWriter<'_, BUS, P, D> {
        TextWriter { display: self, font: font.into(), error: None }
    }
}

/// Formatted text output, e.g. `write!(lcd.text(FontSize::Small), "{}", n)`.
///
/// `fmt::Write` can only report `fmt::Error`; the driver error that caused
/// it is kept and can be taken with [`TextWriter::take_error`].
pub struct TextWriter<'d, BUS, P, D>
where
    BUS: ParallelBus,
    P: OutputPin,
{
    display: &'d mut Ks0108<BUS, P, D>,
    font: Font,
    error: Option<Ks0108Error<BUS::Error, P::Error>>,
}

impl<BUS, P, D> TextWriter<'_, BUS, P, D>
where
    BUS: ParallelBus,
    P: OutputPin,
{
    pub fn take_error(&mut self) -> Option<Ks0108Error<BUS::Error, P::Error>> {
        self.error.take()
    }
}

impl<BUS, P, D> fmt::Write for TextWriter<'_, BUS, P, D>
where
    BUS: ParallelBus,
    P: OutputPin,
    D: DelayNs,
{
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.display.write_str(s, self.font).map_err(|e| {
            self.error = Some(e);
            fmt::Error
        })
    }
}
