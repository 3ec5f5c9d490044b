//! Fixed bitmap fonts for the text renderer.
//!
//! Glyph bytes are page-major: for each 8-pixel page of the glyph, `width`
//! column bytes follow, LSB at the top. That is the order the controller
//! consumes them in, so a glyph row is streamed straight onto the bus.

use font8x8::legacy::BASIC_LEGACY;

/// Font shape plus its bitmap table.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Font {
    /// Glyph width in columns.
    pub width: u8,
    /// Glyph height in pages (8 pixel rows each).
    pub pages: u8,
    /// Blank columns written after each glyph row.
    pub spacing: u8,
    /// Code of the first glyph in the table.
    pub first_char: u8,
    /// Whether `\r` returns to column 0. Otherwise it is looked up like any glyph.
    pub carriage_return: bool,
    glyphs: &'static [u8],
}

impl Font {
    pub const fn new(
        width: u8,
        pages: u8,
        spacing: u8,
        first_char: u8,
        carriage_return: bool,
        glyphs: &'static [u8],
    ) -> Self {
        Self { width, pages, spacing, first_char, carriage_return, glyphs }
    }

    /// 6x8 cell: 5x7 glyph plus one spacing column.
    pub const SMALL: Font = Font::new(5, 1, 1, FIRST_CHAR, true, &SMALL_GLYPHS);

    /// 8x16 cell, no spacing.
    pub const BIG: Font = Font::new(8, 2, 0, FIRST_CHAR, false, &BIG_GLYPHS);

    #[inline]
    pub const fn glyph_len(&self) -> usize {
        self.width as usize * self.pages as usize
    }

    /// Columns the cursor moves per glyph.
    #[inline]
    pub const fn advance(&self) -> u8 {
        self.width.wrapping_add(self.spacing)
    }

    pub fn glyph_count(&self) -> usize {
        self.glyphs.len().checked_div(self.glyph_len()).unwrap_or(0)
    }

    /// Bitmap for `ch`, or `None` when the table does not cover it.
    /// A font with zero width or zero pages has no glyphs at all.
    pub fn glyph(&self, ch: u8) -> Option<&'static [u8]> {
        let index = ch.checked_sub(self.first_char)? as usize;
        let len = self.glyph_len();
        if len == 0 {
            return None;
        }
        let glyphs: &'static [u8] = self.glyphs;
        glyphs.get(index * len..(index + 1) * len)
    }
}

/// Font selector used by the caller-facing API.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum FontSize {
    #[default]
    Small,
    Big,
}

impl From<FontSize> for Font {
    fn from(size: FontSize) -> Self {
        match size {
            FontSize::Small => Font::SMALL,
            FontSize::Big => Font::BIG,
        }
    }
}

const FIRST_CHAR: u8 = 0x20;
const LAST_CHAR: u8 = 0x7E;
const GLYPH_COUNT: usize = (LAST_CHAR - FIRST_CHAR + 1) as usize;

const BIG_GLYPH_LEN: usize = 16;

const BIG_GLYPHS: [u8; GLYPH_COUNT * BIG_GLYPH_LEN] = build_big_glyphs();

// font8x8 stores 8 rows per glyph, bit 0 = leftmost pixel. Each source row is
// doubled to get 16 rows, then transposed into two pages of column bytes.
const fn build_big_glyphs() -> [u8; GLYPH_COUNT * BIG_GLYPH_LEN] {
    let mut out = [0u8; GLYPH_COUNT * BIG_GLYPH_LEN];
    let mut g = 0;
    while g < GLYPH_COUNT {
        let rows = BASIC_LEGACY[FIRST_CHAR as usize + g];
        let mut page = 0;
        while page < 2 {
            let mut col = 0;
            while col < 8 {
                let mut byte = 0u8;
                let mut bit = 0;
                while bit < 8 {
                    let src_row = (page * 8 + bit) / 2;
                    if (rows[src_row] >> col) & 1 != 0 {
                        byte |= 1 << bit;
                    }
                    bit += 1;
                }
                out[g * BIG_GLYPH_LEN + page * 8 + col] = byte;
                col += 1;
            }
            page += 1;
        }
        g += 1;
    }
    out
}

#[rustfmt::skip]
const SMALL_GLYPHS: [u8; GLYPH_COUNT * 5] = [
    0x00, 0x00, 0x00, 0x00, 0x00, // ' '
    0x00, 0x00, 0x5F, 0x00, 0x00, // '!'
    0x00, 0x07, 0x00, 0x07, 0x00, // '"'
    0x14, 0x7F, 0x14, 0x7F, 0x14, // '#'
    0x24, 0x2A, 0x7F, 0x2A, 0x12, // '$'
    0x23, 0x13, 0x08, 0x64, 0x62, // '%'
    0x36, 0x49, 0x55, 0x22, 0x50, // '&'
    0x00, 0x05, 0x03, 0x00, 0x00, // '''
    0x00, 0x1C, 0x22, 0x41, 0x00, // '('
    0x00, 0x41, 0x22, 0x1C, 0x00, // ')'
    0x08, 0x2A, 0x1C, 0x2A, 0x08, // '*'
    0x08, 0x08, 0x3E, 0x08, 0x08, // '+'
    0x00, 0x50, 0x30, 0x00, 0x00, // ','
    0x08, 0x08, 0x08, 0x08, 0x08, // '-'
    0x00, 0x60, 0x60, 0x00, 0x00, // '.'
    0x20, 0x10, 0x08, 0x04, 0x02, // '/'
    0x3E, 0x51, 0x49, 0x45, 0x3E, // '0'
    0x00, 0x42, 0x7F, 0x40, 0x00, // '1'
    0x42, 0x61, 0x51, 0x49, 0x46, // '2'
    0x21, 0x41, 0x45, 0x4B, 0x31, // '3'
    0x18, 0x14, 0x12, 0x7F, 0x10, // '4'
    0x27, 0x45, 0x45, 0x45, 0x39, // '5'
    0x3C, 0x4A, 0x49, 0x49, 0x30, // '6'
    0x01, 0x71, 0x09, 0x05, 0x03, // '7'
    0x36, 0x49, 0x49, 0x49, 0x36, // '8'
    0x06, 0x49, 0x49, 0x29, 0x1E, // '9'
    0x00, 0x36, 0x36, 0x00, 0x00, // ':'
    0x00, 0x56, 0x36, 0x00, 0x00, // ';'
    0x08, 0x14, 0x22, 0x41, 0x00, // '<'
    0x14, 0x14, 0x14, 0x14, 0x14, // '='
    0x00, 0x41, 0x22, 0x14, 0x08, // '>'
    0x02, 0x01, 0x51, 0x09, 0x06, // '?'
    0x32, 0x49, 0x79, 0x41, 0x3E, // '@'
    0x7E, 0x11, 0x11, 0x11, 0x7E, // 'A'
    0x7F, 0x49, 0x49, 0x49, 0x36, // 'B'
    0x3E, 0x41, 0x41, 0x41, 0x22, // 'C'
    0x7F, 0x41, 0x41, 0x22, 0x1C, // 'D'
    0x7F, 0x49, 0x49, 0x49, 0x41, // 'E'
    0x7F, 0x09, 0x09, 0x09, 0x01, // 'F'
    0x3E, 0x41, 0x49, 0x49, 0x7A, // 'G'
    0x7F, 0x08, 0x08, 0x08, 0x7F, // 'H'
    0x00, 0x41, 0x7F, 0x41, 0x00, // 'I'
    0x20, 0x40, 0x41, 0x3F, 0x01, // 'J'
    0x7F, 0x08, 0x14, 0x22, 0x41, // 'K'
    0x7F, 0x40, 0x40, 0x40, 0x40, // 'L'
    0x7F, 0x02, 0x0C, 0x02, 0x7F, // 'M'
    0x7F, 0x04, 0x08, 0x10, 0x7F, // 'N'
    0x3E, 0x41, 0x41, 0x41, 0x3E, // 'O'
    0x7F, 0x09, 0x09, 0x09, 0x06, // 'P'
    0x3E, 0x41, 0x51, 0x21, 0x5E, // 'Q'
    0x7F, 0x09, 0x19, 0x29, 0x46, // 'R'
    0x46, 0x49, 0x49, 0x49, 0x31, // 'S'
    0x01, 0x01, 0x7F, 0x01, 0x01, // 'T'
    0x3F, 0x40, 0x40, 0x40, 0x3F, // 'U'
    0x1F, 0x20, 0x40, 0x20, 0x1F, // 'V'
    0x3F, 0x40, 0x38, 0x40, 0x3F, // 'W'
    0x63, 0x14, 0x08, 0x14, 0x63, // 'X'
    0x07, 0x08, 0x70, 0x08, 0x07, // 'Y'
    0x61, 0x51, 0x49, 0x45, 0x43, // 'Z'
    0x00, 0x7F, 0x41, 0x41, 0x00, // '['
    0x02, 0x04, 0x08, 0x10, 0x20, // '\'
    0x00, 0x41, 0x41, 0x7F, 0x00, // ']'
    0x04, 0x02, 0x01, 0x02, 0x04, // '^'
    0x40, 0x40, 0x40, 0x40, 0x40, // '_'
    0x00, 0x01, 0x02, 0x04, 0x00, // '`'
    0x20, 0x54, 0x54, 0x54, 0x78, // 'a'
    0x7F, 0x48, 0x44, 0x44, 0x38, // 'b'
    0x38, 0x44, 0x44, 0x44, 0x20, // 'c'
    0x38, 0x44, 0x44, 0x48, 0x7F, // 'd'
    0x38, 0x54, 0x54, 0x54, 0x18, // 'e'
    0x08, 0x7E, 0x09, 0x01, 0x02, // 'f'
    0x0C, 0x52, 0x52, 0x52, 0x3E, // 'g'
    0x7F, 0x08, 0x04, 0x04, 0x78, // 'h'
    0x00, 0x44, 0x7D, 0x40, 0x00, // 'i'
    0x20, 0x40, 0x44, 0x3D, 0x00, // 'j'
    0x7F, 0x10, 0x28, 0x44, 0x00, // 'k'
    0x00, 0x41, 0x7F, 0x40, 0x00, // 'l'
    0x7C, 0x04, 0x18, 0x04, 0x78, // 'm'
    0x7C, 0x08, 0x04, 0x04, 0x78, // 'n'
    0x38, 0x44, 0x44, 0x44, 0x38, // 'o'
    0x7C, 0x14, 0x14, 0x14, 0x08, // 'p'
    0x08, 0x14, 0x14, 0x18, 0x7C, // 'q'
    0x7C, 0x08, 0x04, 0x04, 0x08, // 'r'
    0x48, 0x54, 0x54, 0x54, 0x20, // 's'
    0x04, 0x3F, 0x44, 0x40, 0x20, // 't'
    0x3C, 0x40, 0x40, 0x20, 0x7C, // 'u'
    0x1C, 0x20, 0x40, 0x20, 0x1C, // 'v'
    0x3C, 0x40, 0x30, 0x40, 0x3C, // 'w'
    0x44, 0x28, 0x10, 0x28, 0x44, // 'x'
    0x0C, 0x50, 0x50, 0x50, 0x3C, // 'y'
    0x44, 0x64, 0x54, 0x4C, 0x44, // 'z'
    0x00, 0x08, 0x36, 0x41, 0x00, // '{'
    0x00, 0x00, 0x7F, 0x00, 0x00, // '|'
    0x00, 0x41, 0x36, 0x08, 0x00, // '}'
    0x08, 0x04, 0x08, 0x10, 0x08, // '~'
];
