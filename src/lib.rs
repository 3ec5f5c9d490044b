#![cfg_attr(not(test), no_std)]

pub mod bus;
pub mod config;
pub mod error;
pub mod font;
pub mod ks0108;
pub mod shared;
pub mod text;

cfg_if::cfg_if! {
    if #[cfg(feature = "esp32s3")] {
        pub mod display;
        pub mod wiring;
    }
}

pub use bus::{BusResult, ControlPins, Half, ParallelBus, PinBus, Register};
pub use config::{ChipSelect, Config};
pub use error::Ks0108Error;
pub use font::{Font, FontSize};
pub use ks0108::{Ks0108, HALF_WIDTH, PAGES, WIDTH};
pub use shared::SharedDisplay;
pub use text::TextWriter;
