//! Display setup and initialization module.
//
// - `setup_display` turns the board's `DisplayPins` into a ready driver.
// - The data port is eight plain GPIOs (`PinBus`), no parallel peripheral.
// - Timing comes from `SpinDelay`, the EN pulse is well under a microsecond.

use esp_backtrace as _;

use esp_hal::gpio::Output;

use crate::bus::{ControlPins, PinBus};
use crate::config::Config;
use crate::ks0108::Ks0108;
use crate::wiring::DisplayPins;

// A tiny busy-wait delay that satisfies embedded-hal 1.0 DelayNs.
pub struct SpinDelay;

impl embedded_hal::delay::DelayNs for SpinDelay {
    #[inline]
    fn delay_ns(&mut self, ns: u32) {
        // ~50 ns per spin, at least one
        for _ in 0..=ns / 50 {
            core::hint::spin_loop();
        }
    }

    #[inline]
    fn delay_us(&mut self, us: u32) {
        for _ in 0..us {
            self.delay_ns(1_000);
        }
    }

    #[inline]
    fn delay_ms(&mut self, ms: u32) {
        for _ in 0..ms {
            self.delay_us(1_000);
        }
    }
}

pub type DisplayType<'a> = Ks0108<PinBus<Output<'a>>, Output<'a>, SpinDelay>;

pub fn setup_display<'a>(display_pins: DisplayPins<'a>, config: Config) -> DisplayType<'a> {
    // Destructure pins
    let DisplayPins { data, cs1, cs2, rw, rs, en, rst } = display_pins;

    let pins = ControlPins { cs1, cs2, rw, rs, en, rst: Some(rst) };

    let mut display = Ks0108::new(PinBus::new(data), pins, SpinDelay, config)
        .expect("KS0108 init failed");

    // Panel RAM is random after power-up
    display.clear().expect("KS0108 clear failed");
    display.on().expect("KS0108 display on failed");
    display
}
