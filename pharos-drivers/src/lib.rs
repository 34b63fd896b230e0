//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the rendering traits
//! defined in pharos-core, generic over the pharos-hal pin and clock
//! abstractions:
//!
//! - Multiplexed row/column scan driver for the 8x8 LED matrix

#![no_std]
#![deny(unsafe_code)]

pub mod scan;

pub use scan::ScanDriver;
