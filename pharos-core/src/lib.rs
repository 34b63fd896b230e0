//! Board-agnostic rendering core for the Pharos LED marquee
//!
//! This crate contains all marquee logic that does not depend on real
//! hardware:
//!
//! - Column-bitmap glyph table (lowercase letters and space)
//! - Message ring buffer with the glyph rasterizer and window extractor
//! - Frame buffer snapshot handed to the scan driver each cycle
//! - Scroll orchestrator advancing the window and recycling the message
//! - `FrameSink` trait implemented by the hardware scan driver

#![no_std]
#![deny(unsafe_code)]

pub mod font;
pub mod frame;
pub mod message;
pub mod scroll;
pub mod traits;

// Re-export key types at crate root for convenience
pub use font::{glyph_for, Glyph, CHAR_HEIGHT, CHAR_WIDTH};
pub use frame::{FrameBuffer, COLS, ROWS};
pub use message::{wrap_col, MessageMatrix, MAX_CHARS_STAGED, MSG_COLUMNS};
pub use scroll::{Scroller, COLUMN_DWELL_MS, FRAME_DURATION_MS};
pub use traits::FrameSink;
