// This module handles board-specific pin mappings and initialization.
// Profiles are selected via Cargo features; only ESP32-S3 is wired up so far.
//! The following wiring is assumed (ESP32-S3 DevKitC, WG12864A style panel):
//! - D0..D7 => GPIO4, GPIO5, GPIO6, GPIO7, GPIO15, GPIO16, GPIO17, GPIO18
//! - CS1 => GPIO8   (left controller)
//! - CS2 => GPIO9   (right controller)
//! - R/W => GPIO10
//! - RS  => GPIO11  (a.k.a. D/I)
//! - EN  => GPIO12
//! - RST => GPIO13
//! - LED => GPIO1 (heartbeat)
//! - VEE/contrast pot as per panel datasheet, GND => GND, VCC => 5V
//! The panel runs at 5V; use level shifters or a 3.3V tolerant module.

use esp_hal::gpio::{Level, Output, OutputConfig};
use esp_hal::peripherals::Peripherals;

pub struct DisplayPins<'a> {
    pub data: [Output<'a>; 8],
    pub cs1: Output<'a>,
    pub cs2: Output<'a>,
    pub rw:  Output<'a>,
    pub rs:  Output<'a>,
    pub en:  Output<'a>,
    pub rst: Output<'a>,
}

pub struct BoardPins<'a> {
    pub led1: Output<'a>,
    pub display_pins: DisplayPins<'a>,
}

// Default profile
pub fn init_board_pins<'a>(p: Peripherals) -> BoardPins<'a> {
    // Data bus, D0 first
    let data = [
        Output::new(p.GPIO4,  Level::Low, OutputConfig::default()),
        Output::new(p.GPIO5,  Level::Low, OutputConfig::default()),
        Output::new(p.GPIO6,  Level::Low, OutputConfig::default()),
        Output::new(p.GPIO7,  Level::Low, OutputConfig::default()),
        Output::new(p.GPIO15, Level::Low, OutputConfig::default()),
        Output::new(p.GPIO16, Level::Low, OutputConfig::default()),
        Output::new(p.GPIO17, Level::Low, OutputConfig::default()),
        Output::new(p.GPIO18, Level::Low, OutputConfig::default()),
    ];

    // Control lines: everything idle low, RST held in reset until the driver releases it
    let cs1 = Output::new(p.GPIO8,  Level::Low, OutputConfig::default());
    let cs2 = Output::new(p.GPIO9,  Level::Low, OutputConfig::default());
    let rw  = Output::new(p.GPIO10, Level::Low, OutputConfig::default());
    let rs  = Output::new(p.GPIO11, Level::Low, OutputConfig::default());
    let en  = Output::new(p.GPIO12, Level::Low, OutputConfig::default());
    let rst = Output::new(p.GPIO13, Level::Low, OutputConfig::default());

    // LED
    let mut led1 = Output::new(p.GPIO1, Level::Low, OutputConfig::default());
    led1.set_high();

    BoardPins {
        led1,
        display_pins: DisplayPins { data, cs1, cs2, rw, rs, en, rst },
    }
}
