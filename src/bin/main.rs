//! KS0108 Demo
//! ========================================
//! source ~/export-esp.sh
//! cargo run --release --features esp32s3
//! ========================================
//!
//! Draws a banner in both fonts, then keeps an uptime counter on the
//! bottom line and blinks the LED once a second.

//% CHIPS: esp32s3
//% FEATURES: esp-hal/unstable

#![no_std]
#![no_main]

// Define the application description, which is placed in a special section of the binary.
// This is used by the bootloader to verify the application.
// The macro automatically fills in the fields.
esp_bootloader_esp_idf::esp_app_desc!();

use core::fmt::Write;

use esp_backtrace as _;
use esp_hal::{delay::Delay, main, Config as HalConfig};
use esp_println::println;

use ks0108_lcd::{
    display::{setup_display, DisplayType},
    wiring::{init_board_pins, BoardPins},
    Config, FontSize, SharedDisplay,
};

// Shared so interrupt handlers added later can draw without tearing a sweep
static DISPLAY: SharedDisplay<DisplayType<'static>> = SharedDisplay::new();

#[main]
fn main() -> ! {
    esp_println::logger::init_logger(log::LevelFilter::Info);

    // Initialize peripherals
    let peripherals = esp_hal::init(HalConfig::default());

    // one call gives you all the role pins from wiring.rs
    let BoardPins { mut led1, display_pins } = init_board_pins(peripherals);

    DISPLAY.install(setup_display(display_pins, Config::default()));
    println!("KS0108 ready");

    DISPLAY.with(|lcd| {
        let banner = lcd
            .write("KS0108", FontSize::Big, Some(1), Some(1))
            .and_then(|_| lcd.write("128x64, two halves", FontSize::Small, Some(1), Some(4)))
            .and_then(|_| lcd.write("spans x=64 cleanly", FontSize::Small, Some(10), Some(5)));
        if let Err(e) = banner {
            println!("banner failed: {:?}", e);
        }
    });

    let delay = Delay::new();
    let mut seconds: u32 = 0;
    loop {
        DISPLAY.with(|lcd| {
            if let Err(e) = lcd.goto(1, 8) {
                println!("goto failed: {:?}", e);
                return;
            }
            let mut out = lcd.text(FontSize::Small);
            if write!(out, "uptime {:>6} s", seconds).is_err() {
                println!("uptime failed: {:?}", out.take_error());
            }
        });

        led1.toggle();
        delay.delay_millis(1000);
        seconds = seconds.wrapping_add(1);
    }
}
