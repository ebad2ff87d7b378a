//! Radial strata over the valid cells of a wafer.
//!
//! Bands are `n_strata` equal-width intervals spanning `[0, radius]`. Each band
//! is closed on the left and open on the right, except that distances at or
//! beyond the outer edge fall into the last band.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::wafer::GridCoord;

/// Stratum id for each valid coordinate, indexed like [`crate::wafer::WaferMask::valid_coords`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StrataAssignment {
    n_strata: usize,
    edges: Vec<f64>,
    labels: Vec<usize>,
}

impl StrataAssignment {
    /// Assign every coordinate in `coords` to a radial band around `center`.
    pub fn compute(
        coords: &[GridCoord],
        center: GridCoord,
        radius: f64,
        n_strata: usize,
    ) -> Result<Self> {
        if n_strata == 0 {
            return Err(Error::InvalidArgument("n_strata must be > 0".into()));
        }
        if radius.is_nan() || radius < 0.0 {
            return Err(Error::InvalidArgument(format!(
                "radius must be >= 0, got {radius}"
            )));
        }

        let edges = band_edges(radius, n_strata);
        let labels = coords
            .iter()
            .map(|c| band_index(&edges, c.distance(center)))
            .collect();

        Ok(Self {
            n_strata,
            edges,
            labels,
        })
    }

    pub fn n_strata(&self) -> usize {
        self.n_strata
    }

    /// Band boundaries, `n_strata + 1` values from `0` to `radius`.
    pub fn edges(&self) -> &[f64] {
        &self.edges
    }

    /// Stratum id per coordinate index.
    pub fn labels(&self) -> &[usize] {
        &self.labels
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Stratum of the coordinate at `index`, or `None` if out of range.
    pub fn stratum_of(&self, index: usize) -> Option<usize> {
        self.labels.get(index).copied()
    }

    /// Number of coordinates in each stratum.
    pub fn sizes(&self) -> Vec<usize> {
        let mut sizes = vec![0; self.n_strata];
        for &s in &self.labels {
            sizes[s] += 1;
        }
        sizes
    }

    /// Coordinate indices belonging to `stratum`, in ascending order.
    pub fn members(&self, stratum: usize) -> Vec<usize> {
        self.labels
            .iter()
            .enumerate()
            .filter(|(_, &s)| s == stratum)
            .map(|(i, _)| i)
            .collect()
    }
}

fn band_edges(radius: f64, n_strata: usize) -> Vec<f64> {
    let step = radius / n_strata as f64;
    (0..=n_strata)
        .map(|i| {
            if i == n_strata {
                radius
            } else {
                i as f64 * step
            }
        })
        .collect()
}

#[inline]
fn band_index(edges: &[f64], distance: f64) -> usize {
    let last = edges.len() - 2;
    edges
        .partition_point(|&e| e <= distance)
        .saturating_sub(1)
        .min(last)
}
