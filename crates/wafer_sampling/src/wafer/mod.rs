//! Wafer grid model: circular masks, grid coordinates and radial strata.
//!
//! A wafer is a square grid of `size × size` cells with a circular region of
//! radius `size / 2` centered at `(radius, radius)`. [`create_mask`] builds the
//! immutable [`WaferMask`]; every sampler derives its population from
//! [`WaferMask::valid_coords`], which lists the masked-in cells in row-major order.
use glam::DVec2;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

pub mod strata;

pub use strata::StrataAssignment;

/// Integer cell coordinate on the wafer grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GridCoord {
    /// Row index (first axis).
    pub row: usize,
    /// Column index (second axis).
    pub col: usize,
}

impl GridCoord {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Euclidean distance to `other` in cell units.
    pub fn distance(&self, other: GridCoord) -> f64 {
        self.as_dvec2().distance(other.as_dvec2())
    }

    /// Squared distance using exact integer arithmetic.
    pub fn distance_squared(&self, other: GridCoord) -> u64 {
        let dr = self.row.abs_diff(other.row) as u64;
        let dc = self.col.abs_diff(other.col) as u64;
        dr * dr + dc * dc
    }

    /// Cell position as `(x = col, y = row)`.
    pub fn as_dvec2(&self) -> DVec2 {
        DVec2::new(self.col as f64, self.row as f64)
    }
}

impl From<(usize, usize)> for GridCoord {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl From<GridCoord> for (usize, usize) {
    fn from(c: GridCoord) -> Self {
        (c.row, c.col)
    }
}

/// Ordered list of coordinates drawn by a sampler.
pub type Sample = Vec<GridCoord>;

/// Square boolean grid marking the cells inside the circular wafer.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WaferMask {
    size: usize,
    cells: Vec<bool>,
}

impl WaferMask {
    /// Side length of the grid.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Radius of the circular region, `size / 2`.
    pub fn radius(&self) -> usize {
        self.size / 2
    }

    /// Center cell `(radius, radius)`.
    pub fn center(&self) -> GridCoord {
        let r = self.radius();
        GridCoord::new(r, r)
    }

    /// Get the value at `(row, col)`, returning `false` if out of bounds.
    pub fn get(&self, row: usize, col: usize) -> bool {
        if row >= self.size || col >= self.size {
            return false;
        }
        self.cells[row * self.size + col]
    }

    /// Whether `coord` lies inside the wafer.
    pub fn contains(&self, coord: GridCoord) -> bool {
        self.get(coord.row, coord.col)
    }

    /// Number of masked-in cells (the mask sum).
    pub fn valid_count(&self) -> usize {
        self.cells.iter().filter(|&&v| v).count()
    }

    /// All masked-in cells in row-major order.
    pub fn valid_coords(&self) -> Vec<GridCoord> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, &v)| v)
            .map(|(i, _)| GridCoord::new(i / self.size, i % self.size))
            .collect()
    }

    /// Iterate the grid row by row.
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> + '_ {
        self.cells.chunks(self.size)
    }
}

/// Build the circular mask for a `wafer_size × wafer_size` grid together with its center.
///
/// A cell `(r, c)` is inside iff `(r - radius)^2 + (c - radius)^2 <= radius^2`
/// with `radius = wafer_size / 2`. Even sizes are accepted; the center then sits
/// on the lower-right of the four middle cells.
pub fn create_mask(wafer_size: usize) -> Result<(WaferMask, GridCoord)> {
    if wafer_size == 0 {
        return Err(Error::InvalidArgument("wafer_size must be > 0".into()));
    }

    let radius = wafer_size / 2;
    let center = GridCoord::new(radius, radius);
    let r2 = (radius as u64) * (radius as u64);

    let mut cells = Vec::with_capacity(wafer_size * wafer_size);
    for row in 0..wafer_size {
        for col in 0..wafer_size {
            cells.push(GridCoord::new(row, col).distance_squared(center) <= r2);
        }
    }

    Ok((
        WaferMask {
            size: wafer_size,
            cells,
        },
        center,
    ))
}
