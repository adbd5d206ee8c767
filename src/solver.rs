//! Region packing decisions.
//!
//! Key points:
//! - Placement bitmasks are precomputed per region size for instant
//!   collision detection (mask AND)
//! - FxHashMap memoizes (occupied, remaining) sub-states so identical
//!   states reached through different placement orders are solved once
//! - Most-constrained shape first, with an early exit when some shape has
//!   a single legal placement left
//! - A node budget turns runaway searches into a distinct verdict instead
//!   of an unbounded run

use rustc_hash::{FxHashMap, FxHashSet};

use crate::grid::{cell_index, CellMask};
use crate::parse::{Puzzle, Region};
use crate::shapes::{PlacedShape, Shape, ShapeVariant};

/// Default cap on search nodes per region before giving up.
pub const DEFAULT_NODE_BUDGET: u64 = 5_000_000;

/// Outcome of one region's packing decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// The required shapes fit; holds one witness packing.
    Packable(Vec<PlacedShape>),
    /// Proven impossible.
    Unpackable,
    /// The search hit its node budget before settling either way.
    BudgetExceeded,
}

impl Verdict {
    pub fn is_packable(&self) -> bool {
        matches!(self, Verdict::Packable(_))
    }
}

/// Every distinct placement mask per shape for one region size, plus each
/// shape's area.
pub struct PlacementTable {
    /// `placements[shape_id]` = distinct masks across all variants.
    pub placements: Vec<Vec<CellMask>>,
    /// `areas[shape_id]` = cell count, rotation-invariant.
    pub areas: Vec<usize>,
}

/// Every translation of one variant that fits a `width` x `height` region.
///
/// Produces exactly `(W - w + 1) * (H - h + 1)` masks when the variant's
/// bounding box fits, and none otherwise. Duplicates across variants of the
/// same shape are removed later.
pub fn variant_placements(width: usize, height: usize, variant: &ShapeVariant) -> Vec<CellMask> {
    if variant.width > width || variant.height > height {
        return Vec::new();
    }

    let mut masks = Vec::new();
    for oy in 0..=height - variant.height {
        for ox in 0..=width - variant.width {
            let mut mask = CellMask::empty(width * height);
            for &(x, y) in &variant.cells {
                mask.set(cell_index(width, ox + x as usize, oy + y as usize));
            }
            masks.push(mask);
        }
    }
    masks
}

/// Builds the placement table for one region size.
///
/// Masks encode absolute offsets, so the table depends on the region
/// dimensions: it is rebuilt per region and discarded afterwards, and masks
/// never leak between regions of different sizes.
pub fn build_placements(width: usize, height: usize, shapes: &[Shape]) -> PlacementTable {
    let mut placements = Vec::with_capacity(shapes.len());
    let mut areas = Vec::with_capacity(shapes.len());

    for shape in shapes {
        let mut seen: FxHashSet<CellMask> = FxHashSet::default();
        let mut masks = Vec::new();
        for variant in &shape.variants {
            for mask in variant_placements(width, height, variant) {
                if seen.insert(mask.clone()) {
                    masks.push(mask);
                }
            }
        }
        placements.push(masks);
        areas.push(shape.area);
    }

    PlacementTable { placements, areas }
}

/// Remaining copies of each shape still to place, indexed by shape id.
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
struct ShapeCounts(Vec<usize>);

impl ShapeCounts {
    fn all_placed(&self) -> bool {
        self.0.iter().all(|&c| c == 0)
    }
}

/// Backtracking search state for one region.
///
/// The memo maps (occupied cells, remaining counts) to a settled decision,
/// so identical sub-states reached through different placement orders
/// resolve once. It is scoped to the region and dropped with it.
struct Search<'a> {
    placements: &'a [Vec<CellMask>],
    memo: FxHashMap<(CellMask, ShapeCounts), bool>,
    nodes: u64,
    budget: u64,
}

impl<'a> Search<'a> {
    /// Returns whether the remaining shapes fit into the unoccupied cells,
    /// or `None` once the node budget is exhausted.
    ///
    /// On success `chosen` holds the witness placements; on any other
    /// outcome its contents are meaningless and the caller discards them.
    fn fits(
        &mut self,
        occupied: &CellMask,
        remaining: &ShapeCounts,
        chosen: &mut Vec<PlacedShape>,
    ) -> Option<bool> {
        if remaining.all_placed() {
            return Some(true);
        }

        let key = (occupied.clone(), remaining.clone());
        if let Some(&settled) = self.memo.get(&key) {
            return Some(settled);
        }

        self.nodes += 1;
        if self.nodes > self.budget {
            return None;
        }

        // most-constrained shape first: fewest placements compatible with
        // the occupied cells. A required shape with none settles this state
        // as infeasible immediately.
        let mut best: Option<(usize, Vec<&'a CellMask>)> = None;
        for (shape, &count) in remaining.0.iter().enumerate() {
            if count == 0 {
                continue;
            }
            let options: Vec<&'a CellMask> = self.placements[shape]
                .iter()
                .filter(|mask| !mask.overlaps(occupied))
                .collect();
            if options.is_empty() {
                self.memo.insert(key, false);
                return Some(false);
            }
            if best
                .as_ref()
                .map_or(true, |(_, current)| options.len() < current.len())
            {
                let single_option = options.len() == 1;
                best = Some((shape, options));
                if single_option {
                    break;
                }
            }
        }
        let (shape, options) = best.expect("some shape has a remaining count");

        // value semantics: each branch gets its own counts snapshot
        let mut next = remaining.clone();
        next.0[shape] -= 1;

        for mask in options {
            chosen.push(PlacedShape {
                shape,
                mask: mask.clone(),
            });
            if self.fits(&occupied.union(mask), &next, chosen)? {
                self.memo.insert(key, true);
                return Some(true);
            }
            chosen.pop();
        }

        self.memo.insert(key, false);
        Some(false)
    }
}

/// Decides whether one region can hold its required shapes.
///
/// Fast rejects run before any search: a count vector longer than the
/// catalogue, a total required area exceeding the board, or a required
/// shape with no placement at all each settle the region immediately. The
/// search itself only enforces non-overlap; leftover empty cells are
/// acceptable.
pub fn pack_region(region: &Region, shapes: &[Shape], budget: u64) -> Verdict {
    if region.counts.len() > shapes.len() {
        return Verdict::Unpackable;
    }
    let mut counts = region.counts.clone();
    counts.resize(shapes.len(), 0);

    let table = build_placements(region.width, region.height, shapes);

    let board_area = region.width * region.height;
    let needed_area: usize = counts.iter().zip(&table.areas).map(|(c, a)| c * a).sum();
    if needed_area > board_area {
        return Verdict::Unpackable;
    }

    if counts
        .iter()
        .enumerate()
        .any(|(shape, &count)| count > 0 && table.placements[shape].is_empty())
    {
        return Verdict::Unpackable;
    }

    let mut search = Search {
        placements: &table.placements,
        memo: FxHashMap::default(),
        nodes: 0,
        budget,
    };
    let mut chosen = Vec::new();
    let occupied = CellMask::empty(board_area);

    match search.fits(&occupied, &ShapeCounts(counts), &mut chosen) {
        Some(true) => Verdict::Packable(chosen),
        Some(false) => Verdict::Unpackable,
        None => Verdict::BudgetExceeded,
    }
}

/// Aggregate result over all regions of a puzzle.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct PackSummary {
    /// Regions whose required shapes fit.
    pub packable: usize,
    /// Regions abandoned at the node budget, counted as not packable.
    pub budget_exceeded: usize,
}

/// Decides every region of a puzzle and tallies the packable ones.
pub fn count_packable(puzzle: &Puzzle, budget: u64) -> PackSummary {
    let mut summary = PackSummary::default();
    for region in &puzzle.regions {
        match pack_region(region, &puzzle.shapes, budget) {
            Verdict::Packable(_) => summary.packable += 1,
            Verdict::Unpackable => {}
            Verdict::BudgetExceeded => summary.budget_exceeded += 1,
        }
    }
    summary
}
