//! Shape catalogue types.
//!
//! Shapes come from the input file rather than a fixed set, so each one is
//! expanded into its unique orientations once at parse time and shared
//! read-only by every region decision.

use crate::geometry::{all_variants, Cell};
use crate::grid::CellMask;

/// One orientation of a shape, normalized so the minimum coordinates are
/// at the origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShapeVariant {
    /// Cells in canonical order, all coordinates non-negative.
    pub cells: Vec<Cell>,
    /// Bounding width (max x + 1).
    pub width: usize,
    /// Bounding height (max y + 1).
    pub height: usize,
}

impl ShapeVariant {
    fn new(cells: Vec<Cell>) -> Self {
        let width = cells.iter().map(|&(x, _)| x as usize + 1).max().unwrap_or(0);
        let height = cells.iter().map(|&(_, y)| y as usize + 1).max().unwrap_or(0);
        Self {
            cells,
            width,
            height,
        }
    }
}

/// A catalogue entry: every unique orientation of one base cell pattern,
/// plus its area. Shapes are indexed by input order.
#[derive(Debug, Clone)]
pub struct Shape {
    /// Unique orientations, deduplicated by canonical cell list.
    pub variants: Vec<ShapeVariant>,
    /// Number of cells in the shape, the same for every orientation.
    pub area: usize,
}

impl Shape {
    /// Builds a shape from its base cells, generating all unique orientations.
    pub fn from_cells(cells: &[Cell]) -> Self {
        let variants = all_variants(cells)
            .into_iter()
            .map(ShapeVariant::new)
            .collect();
        Self {
            variants,
            area: cells.len(),
        }
    }
}

/// A shape placed at a specific position within one region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedShape {
    /// Index of the shape in the catalogue.
    pub shape: usize,
    /// Region cells this placement occupies.
    pub mask: CellMask,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_bounding_boxes() {
        // vertical tromino: one 1x3 and one 3x1 orientation
        let shape = Shape::from_cells(&[(0, 0), (0, 1), (0, 2)]);
        assert_eq!(shape.area, 3);
        assert_eq!(shape.variants.len(), 2);

        let mut boxes: Vec<_> = shape
            .variants
            .iter()
            .map(|v| (v.width, v.height))
            .collect();
        boxes.sort();
        assert_eq!(boxes, vec![(1, 3), (3, 1)]);
    }

    #[test]
    fn test_area_is_orientation_invariant() {
        let shape = Shape::from_cells(&[(0, 0), (1, 0), (1, 1), (2, 1)]);
        for variant in &shape.variants {
            assert_eq!(variant.cells.len(), shape.area);
        }
    }
}
