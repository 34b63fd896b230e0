//! RP2040-specific HAL for the Pharos marquee firmware
//!
//! This crate provides RP2040 implementations of the `pharos-hal` traits:
//! - GPIO output pins for the matrix row and column lines
//! - Millisecond uptime clock for scan timing

#![no_std]

pub mod clock;
pub mod gpio;

pub use clock::UptimeClock;
pub use gpio::MatrixPin;
