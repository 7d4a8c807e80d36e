use ndarray::Array2;

use crate::{GameError, Result};

/// Single coordinate axis used for board rows, columns, and in-grid positions.
pub type Ix = usize;

/// In-grid position or size `(row, col)`.
pub type Ix2 = (Ix, Ix);

/// Activation position `(row, col)`, possibly outside the grid.
pub type Pos = (isize, isize);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Ix2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0, self.1]
    }
}

pub trait NeighborhoodExt {
    fn iter_neighborhood(&self, center: Pos) -> NeighborIter;
}

impl<T> NeighborhoodExt for Array2<T> {
    fn iter_neighborhood(&self, center: Pos) -> NeighborIter {
        NeighborIter::new(center, self.dim())
    }
}

/// Center first, then up, down, left, right.
const DISPLACEMENTS: [(isize, isize); 5] = [(0, 0), (-1, 0), (1, 0), (0, -1), (0, 1)];

/// Applies `delta` to `center`, returning a value only when it lands inside `bounds`.
fn apply_delta(center: Pos, delta: (isize, isize), bounds: Ix2) -> Option<Ix2> {
    let (row, col) = center;
    let (dr, dc) = delta;
    let (rows, cols) = bounds;

    let next_row: Ix = row.checked_add(dr)?.try_into().ok()?;
    if next_row >= rows {
        return None;
    }

    let next_col: Ix = col.checked_add(dc)?.try_into().ok()?;
    if next_col >= cols {
        return None;
    }

    Some((next_row, next_col))
}

/// Iterates the neighbor set of a position: the position itself and its four orthogonal
/// adjacents, skipping whatever falls off the grid.
#[derive(Debug)]
pub struct NeighborIter {
    center: Pos,
    bounds: Ix2,
    index: u8,
}

impl NeighborIter {
    pub(crate) fn new(center: Pos, bounds: Ix2) -> Self {
        Self {
            center,
            bounds,
            index: 0,
        }
    }
}

impl Iterator for NeighborIter {
    type Item = Ix2;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if usize::from(self.index) >= DISPLACEMENTS.len() {
                return None;
            }

            let next_item =
                apply_delta(self.center, DISPLACEMENTS[self.index as usize], self.bounds);
            self.index += 1;

            if next_item.is_some() {
                return next_item;
            }
        }
    }
}

/// Parses a cell key, either `row-col` or `row col`.
///
/// Negative components are accepted since activations may point off the grid, e.g. `-1-0`.
pub fn parse_coord(text: &str) -> Result<Pos> {
    let text = text.trim();
    let mut parts = text.split_whitespace();
    let (row, col) = match (parts.next(), parts.next(), parts.next()) {
        (Some(row), Some(col), None) => (row, col),
        (Some(key), None, None) => {
            // skip a leading sign so `-1-0` splits on the second dash
            let split = key
                .get(1..)
                .and_then(|rest| rest.find('-'))
                .ok_or(GameError::InvalidCoords)?
                + 1;
            (&key[..split], &key[split + 1..])
        }
        _ => return Err(GameError::InvalidCoords),
    };

    let row = row.parse().map_err(|_| GameError::InvalidCoords)?;
    let col = col.parse().map_err(|_| GameError::InvalidCoords)?;
    Ok((row, col))
}
