//! Input file parsing.
//!
//! The input has two sections: a catalogue of shape blocks, each introduced
//! by a header line `<id>:` and followed by consecutive non-blank diagram
//! rows where `#` marks a filled cell, then one line per region of the form
//! `<W>x<H>: <space-separated counts>` giving how many copies of each shape
//! (by input order) the region must hold.
//!
//! Lines matching neither form are skipped. Malformed numbers inside a
//! recognized region line fail the whole parse: this is a one-shot batch
//! tool, so a half-understood input produces no output at all.

use std::num::ParseIntError;

use thiserror::Error;

use crate::geometry::Cell;
use crate::shapes::Shape;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("shape {0} has no filled cells")]
    EmptyShape(usize),
    #[error("line {line}: bad region dimensions '{text}'")]
    BadDimensions {
        line: usize,
        text: String,
        #[source]
        source: ParseIntError,
    },
    #[error("line {line}: bad shape count '{text}'")]
    BadCount {
        line: usize,
        text: String,
        #[source]
        source: ParseIntError,
    },
}

/// One board to pack: its dimensions plus the required copies of each
/// shape, indexed by shape id.
///
/// A count vector shorter than the catalogue means zero for the missing
/// shapes; a longer one makes the region infeasible by construction.
#[derive(Debug, Clone)]
pub struct Region {
    pub width: usize,
    pub height: usize,
    pub counts: Vec<usize>,
}

/// A parsed input: the shape catalogue and the regions to decide.
#[derive(Debug)]
pub struct Puzzle {
    pub shapes: Vec<Shape>,
    pub regions: Vec<Region>,
}

impl Puzzle {
    /// Parses both input sections.
    ///
    /// Shape header ids are recognized for block detection but otherwise
    /// ignored; shapes are indexed by input order.
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        let lines: Vec<&str> = input.lines().map(str::trim).collect();

        let mut shapes = Vec::new();
        let mut i = 0;

        // shape catalogue, up to the first region line
        while i < lines.len() {
            let line = lines[i];
            if line.is_empty() {
                i += 1;
                continue;
            }
            if is_region_line(line) {
                break;
            }

            if is_shape_header(line) {
                i += 1;
                let mut rows = Vec::new();
                while i < lines.len() && !lines[i].is_empty() {
                    rows.push(lines[i]);
                    i += 1;
                }
                let cells = diagram_cells(&rows);
                if cells.is_empty() {
                    return Err(ParseError::EmptyShape(shapes.len()));
                }
                shapes.push(Shape::from_cells(&cells));
            } else {
                i += 1;
            }
        }

        let mut regions = Vec::new();
        for (offset, line) in lines[i..].iter().enumerate() {
            if let Some(region) = parse_region(line, i + offset + 1)? {
                regions.push(region);
            }
        }

        Ok(Self { shapes, regions })
    }
}

/// A region line has a `:` with an `x` somewhere before it.
fn is_region_line(line: &str) -> bool {
    match line.split_once(':') {
        Some((left, _)) => left.contains('x'),
        None => false,
    }
}

/// A shape header is a bare integer followed by `:`.
fn is_shape_header(line: &str) -> bool {
    match line.strip_suffix(':') {
        Some(id) => !id.is_empty() && id.bytes().all(|b| b.is_ascii_digit()),
        None => false,
    }
}

/// Collects the coordinates of `#` characters in a diagram block.
///
/// Any other character is empty, and rows may have uneven lengths.
fn diagram_cells(rows: &[&str]) -> Vec<Cell> {
    let mut cells = Vec::new();
    for (y, row) in rows.iter().enumerate() {
        for (x, ch) in row.chars().enumerate() {
            if ch == '#' {
                cells.push((x as i32, y as i32));
            }
        }
    }
    cells
}

/// Parses one region line, or returns `None` for a line to skip.
fn parse_region(line: &str, line_no: usize) -> Result<Option<Region>, ParseError> {
    let Some((left, right)) = line.split_once(':') else {
        return Ok(None);
    };
    let left = left.trim();
    let Some((w_text, h_text)) = left.split_once('x') else {
        return Ok(None);
    };

    let parse_dim = |text: &str| {
        text.trim().parse().map_err(|source| ParseError::BadDimensions {
            line: line_no,
            text: left.to_string(),
            source,
        })
    };
    let width = parse_dim(w_text)?;
    let height = parse_dim(h_text)?;

    let mut counts = Vec::new();
    for token in right.split_whitespace() {
        let count = token.parse().map_err(|source| ParseError::BadCount {
            line: line_no,
            text: token.to_string(),
            source,
        })?;
        counts.push(count);
    }

    Ok(Some(Region {
        width,
        height,
        counts,
    }))
}
