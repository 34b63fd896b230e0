//! Message ring buffer
//!
//! A pixel staging area three characters wide, addressed circularly along
//! the column axis. Glyphs for the characters currently in flight are
//! blitted in at the tail while the visible window slides over the rest.

use crate::font::{Glyph, CHAR_WIDTH};
use crate::frame::{FrameBuffer, COLS, ROWS};

/// Number of characters staged in the ring at once
pub const MAX_CHARS_STAGED: usize = 3;

/// Total ring width in columns
pub const MSG_COLUMNS: usize = CHAR_WIDTH * MAX_CHARS_STAGED;

/// Wrap a column index into the ring
///
/// Every circular access goes through here so the wraparound arithmetic
/// lives in exactly one place, and works for any step size.
pub const fn wrap_col(col: usize) -> usize {
    col % MSG_COLUMNS
}

/// Circular pixel buffer holding the characters currently in flight
///
/// Single writer (the glyph blit), single reader (the window extractor).
/// Stale pixels are never cleared; they are retired when the next glyph
/// lands on the same columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageMatrix {
    columns: [u8; MSG_COLUMNS],
}

impl Default for MessageMatrix {
    fn default() -> Self {
        Self::new()
    }
}

impl MessageMatrix {
    /// Create an all-unlit ring
    pub const fn new() -> Self {
        Self {
            columns: [0; MSG_COLUMNS],
        }
    }

    /// Write one glyph's columns into the ring starting at column `at`
    ///
    /// Each column goes through the circular index, so a glyph landing near
    /// the seam wraps cleanly even though in-sequence insertions always
    /// start on a character boundary and never straddle it.
    pub fn blit_glyph(&mut self, glyph: &Glyph, at: usize) {
        for (i, &bits) in glyph.columns.iter().enumerate() {
            self.columns[wrap_col(at + i)] = bits;
        }
    }

    /// Copy the display-sized window starting at ring column `left`
    pub fn window(&self, left: usize) -> FrameBuffer {
        let mut frame = FrameBuffer::new();
        for i in 0..COLS {
            frame.columns[i] = self.columns[wrap_col(left + i)];
        }
        frame
    }

    /// Read one pixel (bit 0 of a column byte is the bottom row)
    pub fn pixel(&self, row: usize, col: usize) -> bool {
        (self.columns[wrap_col(col)] >> (ROWS - 1 - row)) & 1 != 0
    }

    /// Raw column byte at a (wrapped) ring index
    pub fn column(&self, col: usize) -> u8 {
        self.columns[wrap_col(col)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::glyph_for;
    use proptest::prelude::*;

    #[test]
    fn test_glyph_round_trip() {
        // Every glyph in the table survives blit + window unchanged
        for glyph in &crate::font::GLYPHS {
            let mut ring = MessageMatrix::new();
            ring.blit_glyph(glyph, 0);
            let frame = ring.window(0);

            for (i, &bits) in glyph.columns.iter().enumerate() {
                assert_eq!(frame.column(i), bits, "glyph '{}' column {}", glyph.ch, i);
            }
            // Columns past the glyph stay unlit
            assert_eq!(frame.column(CHAR_WIDTH), 0);
            assert_eq!(frame.column(CHAR_WIDTH + 1), 0);
        }
    }

    #[test]
    fn test_blit_at_last_boundary_stays_in_bounds() {
        let mut ring = MessageMatrix::new();
        let o = glyph_for('o').unwrap();

        ring.blit_glyph(o, MSG_COLUMNS - CHAR_WIDTH);

        for (i, &bits) in o.columns.iter().enumerate() {
            assert_eq!(ring.column(MSG_COLUMNS - CHAR_WIDTH + i), bits);
        }
        // Nothing leaked past the seam
        assert_eq!(ring.column(0), 0);
    }

    #[test]
    fn test_blit_straddling_the_seam_wraps() {
        let mut ring = MessageMatrix::new();
        let w = glyph_for('w').unwrap();

        ring.blit_glyph(w, MSG_COLUMNS - 3);

        // First three columns before the seam, remainder from column 0
        assert_eq!(ring.column(MSG_COLUMNS - 3), w.columns[0]);
        assert_eq!(ring.column(MSG_COLUMNS - 2), w.columns[1]);
        assert_eq!(ring.column(MSG_COLUMNS - 1), w.columns[2]);
        assert_eq!(ring.column(0), w.columns[3]);
        assert_eq!(ring.column(1), w.columns[4]);
        assert_eq!(ring.column(2), w.columns[5]);
    }

    #[test]
    fn test_window_wraps_past_the_seam() {
        let mut ring = MessageMatrix::new();
        let a = glyph_for('a').unwrap();
        let b = glyph_for('b').unwrap();

        ring.blit_glyph(a, MSG_COLUMNS - CHAR_WIDTH);
        ring.blit_glyph(b, 0);

        let frame = ring.window(MSG_COLUMNS - 1);

        // Frame column 0 comes from the last ring column, column 1 from
        // ring column 0
        assert_eq!(frame.column(0), a.columns[CHAR_WIDTH - 1]);
        assert_eq!(frame.column(1), b.columns[0]);
        assert_eq!(frame.column(2), b.columns[1]);
    }

    #[test]
    fn test_blit_retires_stale_pixels() {
        let mut ring = MessageMatrix::new();
        let m = glyph_for('m').unwrap();
        let i = glyph_for('i').unwrap();

        ring.blit_glyph(m, 6);
        ring.blit_glyph(i, 6);

        for (k, &bits) in i.columns.iter().enumerate() {
            assert_eq!(ring.column(6 + k), bits);
        }
    }

    #[test]
    fn test_window_does_not_mutate_ring() {
        let mut ring = MessageMatrix::new();
        ring.blit_glyph(glyph_for('z').unwrap(), 3);
        let before = ring.clone();

        let _ = ring.window(17);
        let _ = ring.window(0);

        assert_eq!(ring, before);
    }

    proptest! {
        #[test]
        fn wrap_col_stays_in_range(col in 0usize..10_000) {
            assert!(wrap_col(col) < MSG_COLUMNS);
        }

        #[test]
        fn wrap_col_is_periodic(col in 0usize..10_000) {
            assert_eq!(wrap_col(col + MSG_COLUMNS), wrap_col(col));
        }

        #[test]
        fn window_reads_every_column_through_the_wrap(left in 0usize..MSG_COLUMNS) {
            let mut ring = MessageMatrix::new();
            ring.blit_glyph(glyph_for('x').unwrap(), 0);
            ring.blit_glyph(glyph_for('o').unwrap(), 6);
            ring.blit_glyph(glyph_for('x').unwrap(), 12);

            let frame = ring.window(left);
            for i in 0..COLS {
                assert_eq!(frame.column(i), ring.column(left + i));
            }
        }
    }
}
