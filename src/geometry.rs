//! 2D rotation and reflection utilities.
//!
//! A polyomino has at most 8 distinct orientations in the plane (the
//! dihedral group of the square): 4 quarter-turn rotations, each plain
//! or mirrored.

use rustc_hash::FxHashSet;

/// A 2D coordinate representing a unit cell position.
pub type Cell = (i32, i32);

/// Rotates a cell a quarter turn around the origin.
#[inline]
pub fn rotate90((x, y): Cell) -> Cell {
    (y, -x)
}

/// Mirrors a cell across the y-axis.
#[inline]
pub fn reflect((x, y): Cell) -> Cell {
    (-x, y)
}

/// Translates cells so the minimum x and y values are both zero, then sorts
/// them by `(y, x)` into a canonical order.
///
/// Two orientations that differ only by translation normalize to the same
/// cell list, so canonical lists can be compared for equality directly.
pub fn normalize(mut cells: Vec<Cell>) -> Vec<Cell> {
    let min_x = cells.iter().map(|&(x, _)| x).min().unwrap_or(0);
    let min_y = cells.iter().map(|&(_, y)| y).min().unwrap_or(0);

    for (x, y) in &mut cells {
        *x -= min_x;
        *y -= min_y;
    }

    cells.sort_unstable_by_key(|&(x, y)| (y, x));
    cells
}

/// Generates all unique orientations of a cell set.
///
/// Walks the four rotations, considering each with and without a mirror,
/// normalizes every candidate to the origin, and removes duplicates.
/// Symmetric shapes produce fewer than 8 unique orientations.
pub fn all_variants(cells: &[Cell]) -> Vec<Vec<Cell>> {
    let mut seen: FxHashSet<Vec<Cell>> = FxHashSet::default();
    let mut variants = Vec::new();

    let mut current = cells.to_vec();
    for _ in 0..4 {
        for mirrored in [false, true] {
            let candidate = if mirrored {
                current.iter().copied().map(reflect).collect()
            } else {
                current.clone()
            };
            let canonical = normalize(candidate);
            if seen.insert(canonical.clone()) {
                variants.push(canonical);
            }
        }
        current = current.into_iter().map(rotate90).collect();
    }

    variants
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_four_rotations_return_to_start() {
        let cell = (3, 1);
        let mut rotated = cell;
        for _ in 0..4 {
            rotated = rotate90(rotated);
        }
        assert_eq!(rotated, cell);
    }

    #[test]
    fn test_normalize_translates_and_sorts() {
        let cells = vec![(2, 3), (1, 3), (1, 2)];
        assert_eq!(normalize(cells), vec![(0, 0), (0, 1), (1, 1)]);
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let canonical = normalize(vec![(4, -1), (5, -1), (5, 0)]);
        assert_eq!(normalize(canonical.clone()), canonical);
    }

    #[test]
    fn test_variant_counts_match_shape_symmetry() {
        // (shape cells, expected unique orientations)
        let cases: [(&[Cell], usize); 5] = [
            (&[(0, 0)], 1),                         // monomino
            (&[(0, 0), (1, 0)], 2),                 // domino
            (&[(0, 0), (1, 0), (0, 1), (1, 1)], 1), // square
            (&[(0, 0), (1, 0), (2, 0), (1, 1)], 4), // T tetromino
            (&[(0, 0), (0, 1), (0, 2), (1, 2)], 8), // L tetromino
        ];

        for (cells, expected) in cases {
            let variants = all_variants(cells);
            assert_eq!(
                variants.len(),
                expected,
                "wrong variant count for {cells:?}"
            );
            assert!((1..=8).contains(&variants.len()));
        }
    }

    #[test]
    fn test_variants_from_any_orientation_agree() {
        let base: &[Cell] = &[(0, 0), (1, 0), (1, 1), (2, 1)];

        let mut from_base = all_variants(base);
        from_base.sort();

        // generating from any member of the orbit yields the same orbit
        for variant in all_variants(base) {
            let mut from_variant = all_variants(&variant);
            from_variant.sort();
            assert_eq!(from_variant, from_base);
        }
    }
}
