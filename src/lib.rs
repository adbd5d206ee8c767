//! Region Packer Library
//!
//! Decides, for each rectangular region of a puzzle input, whether a
//! required multiset of polyomino shapes can be placed in it without
//! overlap, and counts the regions where they fit. Full coverage is not
//! required: leftover empty cells are acceptable.
//!
//! Data flows one way: input text is parsed into a shape catalogue and
//! region list ([`parse`]), shapes expand into their unique orientations
//! ([`geometry`], [`shapes`]), orientations become per-region placement
//! bitmasks ([`grid`], [`solver`]), and a memoized backtracking search
//! settles each region ([`solver`]).

pub mod geometry;
pub mod grid;
pub mod parse;
pub mod shapes;
pub mod solver;
