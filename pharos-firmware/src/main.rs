//! Pharos - Scrolling LED Matrix Marquee Firmware
//!
//! Main firmware binary for RP2040 boards driving an 8x8 LED matrix.
//! All rendering logic lives in pharos-core; this binary only brings up
//! the sixteen matrix lines and hands them to the scroll loop.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::gpio::{Level, Output};
use {defmt_rtt as _, panic_probe as _};

use pharos_core::scroll::Scroller;
use pharos_drivers::ScanDriver;
use pharos_hal_rp2040::{MatrixPin, UptimeClock};

/// The text the marquee loops through (lowercase letters and space only)
const MESSAGE: &str = "hello world ";

/// Main entry point
#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("Pharos firmware starting...");

    let p = embassy_rp::init(Default::default());

    // Matrix row lines on GPIO0-7 (top row first) and column selects on
    // GPIO8-15 (leftmost column first). Everything starts low so the
    // matrix stays dark until the first scan pass.
    let rows = [
        MatrixPin::new(Output::new(p.PIN_0, Level::Low)),
        MatrixPin::new(Output::new(p.PIN_1, Level::Low)),
        MatrixPin::new(Output::new(p.PIN_2, Level::Low)),
        MatrixPin::new(Output::new(p.PIN_3, Level::Low)),
        MatrixPin::new(Output::new(p.PIN_4, Level::Low)),
        MatrixPin::new(Output::new(p.PIN_5, Level::Low)),
        MatrixPin::new(Output::new(p.PIN_6, Level::Low)),
        MatrixPin::new(Output::new(p.PIN_7, Level::Low)),
    ];
    let cols = [
        MatrixPin::new(Output::new(p.PIN_8, Level::Low)),
        MatrixPin::new(Output::new(p.PIN_9, Level::Low)),
        MatrixPin::new(Output::new(p.PIN_10, Level::Low)),
        MatrixPin::new(Output::new(p.PIN_11, Level::Low)),
        MatrixPin::new(Output::new(p.PIN_12, Level::Low)),
        MatrixPin::new(Output::new(p.PIN_13, Level::Low)),
        MatrixPin::new(Output::new(p.PIN_14, Level::Low)),
        MatrixPin::new(Output::new(p.PIN_15, Level::Low)),
    ];

    let mut driver = ScanDriver::new(rows, cols, UptimeClock::new());
    let mut scroller = Scroller::new(MESSAGE);

    info!("Matrix lines configured, scrolling {}", MESSAGE);

    scroller.run(&mut driver);
}
