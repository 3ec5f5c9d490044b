use core::fmt;

/// Error type that wraps data bus and GPIO errors.
#[derive(Debug, PartialEq, Eq)]
pub enum Ks0108Error<BusE, PinE> {
    /// The data port write failed.
    Bus(BusE),
    /// A control line (CS1, CS2, R/W, RS, EN, RST) could not be driven.
    Pin(PinE),
    /// The character is not covered by the selected font.
    GlyphOutOfRange(u8),
}

impl<BusE: fmt::Debug, PinE: fmt::Debug> fmt::Display for Ks0108Error<BusE, PinE> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ks0108Error::Bus(e) => write!(f, "data bus write failed: {e:?}"),
            Ks0108Error::Pin(e) => write!(f, "control pin write failed: {e:?}"),
            Ks0108Error::GlyphOutOfRange(ch) => {
                write!(f, "character 0x{ch:02X} is not in the font")
            }
        }
    }
}

impl<BusE: fmt::Debug, PinE: fmt::Debug> core::error::Error for Ks0108Error<BusE, PinE> {}

#[cfg(test)]
mod tests {
    use super::*;

    type TestError = Ks0108Error<u8, ()>;

    #[test]
    fn messages_name_the_failing_part() {
        assert_eq!(TestError::Bus(3).to_string(), "data bus write failed: 3");
        assert_eq!(TestError::Pin(()).to_string(), "control pin write failed: ()");
        assert_eq!(
            TestError::GlyphOutOfRange(0x7F).to_string(),
            "character 0x7F is not in the font"
        );
    }
}
