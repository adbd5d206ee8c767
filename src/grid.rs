//! Region grid representation: cell indexing and occupancy bitmasks.
//!
//! A region of width `W` and height `H` has `W * H` cells, indexed
//! row-major as `y * W + x`. Occupancy is one bit per cell, packed into
//! `u64` words, so regions are not capped at 64 cells.

use crate::shapes::PlacedShape;

/// Converts (x, y) coordinates to a linear cell index (row-major).
#[inline(always)]
pub const fn cell_index(width: usize, x: usize, y: usize) -> usize {
    y * width + x
}

/// A bit-per-cell occupancy mask over one region's grid.
///
/// All masks for a given region hold the same number of words, so equality
/// and hashing compare word by word.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CellMask {
    words: Vec<u64>,
}

impl CellMask {
    /// Creates an all-zero mask covering `cells` bits.
    pub fn empty(cells: usize) -> Self {
        Self {
            words: vec![0; cells.div_ceil(64)],
        }
    }

    /// Sets the bit for one cell.
    pub fn set(&mut self, index: usize) {
        self.words[index / 64] |= 1 << (index % 64);
    }

    /// Returns whether the bit for one cell is set.
    pub fn get(&self, index: usize) -> bool {
        self.words[index / 64] >> (index % 64) & 1 != 0
    }

    /// Returns whether any cell is set in both masks.
    #[inline]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.words.iter().zip(&other.words).any(|(a, b)| a & b != 0)
    }

    /// Returns a new mask with every cell set in either mask.
    pub fn union(&self, other: &Self) -> Self {
        let words = self
            .words
            .iter()
            .zip(&other.words)
            .map(|(a, b)| a | b)
            .collect();
        Self { words }
    }

    /// Number of set cells.
    pub fn count_ones(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }
}

/// Formats a packing as a human-readable grid.
///
/// Each placed shape is drawn with a 1-based id, letters above 9; cells
/// covered by no shape show as '.'. Ids cycle after 'Z', which only loses
/// uniqueness, not placement boundaries against '.' cells.
pub fn format_packing(width: usize, height: usize, packing: &[PlacedShape]) -> String {
    let mut ids = vec![0u8; width * height];
    for (nth, placed) in packing.iter().enumerate() {
        for (cell, id) in ids.iter_mut().enumerate() {
            if placed.mask.get(cell) {
                *id = (nth % 35) as u8 + 1;
            }
        }
    }

    let mut output = String::new();
    for y in 0..height {
        for x in 0..width {
            let id = ids[cell_index(width, x, y)];
            let display_char = if id == 0 {
                '.'
            } else if id < 10 {
                char::from(b'0' + id)
            } else {
                char::from(b'A' + id - 10)
            };
            output.push(display_char);
        }
        output.push('\n');
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get_across_words() {
        // 9x9 region spans two words
        let mut mask = CellMask::empty(81);
        for index in [0, 17, 63, 64, 80] {
            assert!(!mask.get(index));
            mask.set(index);
            assert!(mask.get(index));
        }
        assert_eq!(mask.count_ones(), 5);
    }

    #[test]
    fn test_overlap_and_union() {
        let mut a = CellMask::empty(100);
        let mut b = CellMask::empty(100);
        a.set(3);
        a.set(70);
        b.set(4);
        b.set(71);
        assert!(!a.overlaps(&b));

        let both = a.union(&b);
        assert_eq!(both.count_ones(), 4);

        b.set(70);
        assert!(a.overlaps(&b));
    }

    #[test]
    fn test_empty_masks_compare_equal() {
        assert_eq!(CellMask::empty(10), CellMask::empty(10));
        assert_ne!(
            {
                let mut mask = CellMask::empty(10);
                mask.set(0);
                mask
            },
            CellMask::empty(10)
        );
    }

    #[test]
    fn test_format_packing_draws_shape_ids() {
        let mut top = CellMask::empty(4);
        top.set(0);
        top.set(1);
        let mut bottom = CellMask::empty(4);
        bottom.set(2);

        let packing = vec![
            PlacedShape { shape: 0, mask: top },
            PlacedShape { shape: 1, mask: bottom },
        ];
        assert_eq!(format_packing(2, 2, &packing), "11\n2.\n");
    }
}
