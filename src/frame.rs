//! DNA frame generation.
//!
//! The whole animation reduces to one pure function: two out-of-phase
//! sinusoids (sine for the left strand, cosine for the right) drawn into a
//! fixed 60x15 character grid, with `-` rungs filling the vertical gap
//! between them in each column. Everything else in the crate is presentation.
//!
//! # Determinism
//!
//! `generate_frame` is a pure function of `(frame_index, strand_char)`: no
//! clock, no RNG, no hidden state. Identical inputs produce byte-identical
//! output, which is what the property tests in `tests/frame_properties.rs`
//! pin down.

/// Frame width in columns.
pub const FRAME_WIDTH: usize = 60;

/// Frame height in rows.
pub const FRAME_HEIGHT: usize = 15;

/// Glyph used for the rungs connecting the two strands.
pub const BOND_CHAR: char = '-';

/// Phase advance per column (and per frame), in radians.
pub const PHASE_STEP: f64 = 0.2;

/// Vertical amplitude of each strand, in rows.
const AMPLITUDE: f64 = 4.0;

/// Generate one animation frame.
///
/// Returns exactly [`FRAME_HEIGHT`] rows of [`FRAME_WIDTH`] characters each.
/// `frame_index` only shifts the phase, so any value is valid; `strand_char`
/// may be any printable character, including wide or multi-byte glyphs.
///
/// Strand rows are obtained by truncating the floating-point positions toward
/// zero. When both strands truncate to the same cell, the right (cosine)
/// strand is drawn last and wins. Rows falling outside the grid are silently
/// skipped.
#[must_use]
pub fn generate_frame(frame_index: u64, strand_char: char) -> Vec<String> {
    let mut grid = vec![vec![' '; FRAME_WIDTH]; FRAME_HEIGHT];
    let center_y = (FRAME_HEIGHT / 2) as f64;

    for i in 0..FRAME_WIDTH {
        let phase = (i as f64 + frame_index as f64) * PHASE_STEP;

        let y1 = center_y + phase.sin() * AMPLITUDE;
        let y2 = center_y + phase.cos() * AMPLITUDE;

        // Truncation toward zero, matching int().
        let row1 = y1 as i64;
        let row2 = y2 as i64;

        if (0..FRAME_HEIGHT as i64).contains(&row1) {
            grid[row1 as usize][i] = strand_char;
        }
        if (0..FRAME_HEIGHT as i64).contains(&row2) {
            grid[row2 as usize][i] = strand_char;
        }

        if row1 != row2 {
            let lo = row1.min(row2);
            let hi = row1.max(row2);
            for row in (lo + 1)..hi {
                if (0..FRAME_HEIGHT as i64).contains(&row) {
                    grid[row as usize][i] = BOND_CHAR;
                }
            }
        }
    }

    grid.into_iter().map(|row| row.into_iter().collect()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(rows: &[String], row: usize, col: usize) -> char {
        rows[row].chars().nth(col).unwrap()
    }

    #[test]
    fn test_center_column_at_origin() {
        // Frame 0, column 0: sin(0) = 0, cos(0) = 1.
        // Left strand at row 7, right strand at row 7 + 4 = 11,
        // bonds filling rows 8..=10.
        let rows = generate_frame(0, '●');
        assert_eq!(cell(&rows, 7, 0), '●');
        assert_eq!(cell(&rows, 11, 0), '●');
        for row in 8..=10 {
            assert_eq!(cell(&rows, row, 0), BOND_CHAR);
        }
        for row in (0..FRAME_HEIGHT).filter(|r| !(7..=11).contains(r)) {
            assert_eq!(cell(&rows, row, 0), ' ');
        }
    }

    #[test]
    fn test_strand_collision_draws_single_glyph() {
        // Frame 0, column 4: phase 0.8, where sin and cos are close enough
        // that both strands truncate to row 9. No bonds in that column, and
        // exactly one strand glyph.
        let rows = generate_frame(0, '●');
        let column: Vec<char> = (0..FRAME_HEIGHT).map(|r| cell(&rows, r, 4)).collect();
        assert_eq!(column[9], '●');
        assert_eq!(column.iter().filter(|&&c| c == '●').count(), 1);
        assert!(!column.contains(&BOND_CHAR));
    }

    #[test]
    fn test_shape_invariant() {
        let rows = generate_frame(123, '◆');
        assert_eq!(rows.len(), FRAME_HEIGHT);
        for row in &rows {
            assert_eq!(row.chars().count(), FRAME_WIDTH);
        }
    }

    #[test]
    fn test_multibyte_strand_char() {
        let rows = generate_frame(0, '⬢');
        for row in &rows {
            assert_eq!(row.chars().count(), FRAME_WIDTH);
        }
        assert_eq!(cell(&rows, 7, 0), '⬢');
    }

    #[test]
    fn test_every_column_has_a_strand() {
        // Amplitude 4 around row 7 keeps both strands inside the grid, so
        // each column carries at least one strand glyph.
        let rows = generate_frame(42, '●');
        for col in 0..FRAME_WIDTH {
            let hits = (0..FRAME_HEIGHT)
                .filter(|&r| cell(&rows, r, col) == '●')
                .count();
            assert!(hits >= 1, "column {col} has no strand glyph");
        }
    }
}
