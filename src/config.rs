//! Runtime configuration for the KS0108 driver.
//!
//! Board selection happens through Cargo features; everything that varies
//! between panels wired to the same board lives here.

/// Level that selects a controller half on its CS line.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum ChipSelect {
    /// CS high selects the half (WG864A style modules).
    #[default]
    ActiveHigh,
    /// CS low selects the half (most JHD12864 style modules).
    ActiveLow,
}

impl ChipSelect {
    /// Pin level to drive for the given selection state.
    #[inline]
    pub fn level(self, selected: bool) -> bool {
        match self {
            ChipSelect::ActiveHigh => selected,
            ChipSelect::ActiveLow => !selected,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub chip_select: ChipSelect,
    /// How long EN is held high for each bus cycle.
    pub enable_pulse_ns: u32,
    /// How long RST is held low during bring-up.
    pub reset_pulse_ms: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            chip_select: ChipSelect::ActiveHigh,
            // KS0108 datasheet: E high level width >= 450 ns
            enable_pulse_ns: 450,
            reset_pulse_ms: 1,
        }
    }
}

impl Config {
    pub fn with_chip_select(mut self, chip_select: ChipSelect) -> Self {
        self.chip_select = chip_select;
        self
    }

    pub fn with_enable_pulse_ns(mut self, ns: u32) -> Self {
        self.enable_pulse_ns = ns;
        self
    }

    pub fn with_reset_pulse_ms(mut self, ms: u32) -> Self {
        self.reset_pulse_ms = ms;
        self
    }
}
