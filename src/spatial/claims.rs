use crate::spatial::direction::Coordinate;
use crate::spatial::index::StageBounds;
use bitvec::prelude::*;
use std::fmt;

/// Claim set keyed by coordinate and layer
///
/// Covers a fixed raster with `layers` bits per cell. Coordinates outside the
/// raster are never claimed. Provides O(1) test-and-set.
#[derive(Clone, Debug)]
pub struct ClaimSet {
    bits: BitVec,
    bounds: Option<StageBounds>,
    layers: usize,
}

impl ClaimSet {
    /// Create an empty claim set over `bounds`
    pub fn new(bounds: Option<StageBounds>, layers: usize) -> Self {
        let cells = bounds.map_or(0, |b| b.width() * b.height());
        Self {
            bits: bitvec![0; cells * layers],
            bounds,
            layers,
        }
    }

    fn slot(&self, coordinate: Coordinate, layer: usize) -> Option<usize> {
        if layer >= self.layers {
            return None;
        }
        let bounds = self.bounds?;
        let [row, col] = bounds.cell(coordinate)?;
        Some((row * bounds.width() + col) * self.layers + layer)
    }

    /// Claim a cell on a layer
    ///
    /// Returns true only if the cell was unclaimed and inside the raster
    pub fn claim(&mut self, coordinate: Coordinate, layer: usize) -> bool {
        let Some(slot) = self.slot(coordinate, layer) else {
            return false;
        };
        match self.bits.get_mut(slot) {
            Some(mut bit) if !*bit => {
                *bit = true;
                true
            }
            _ => false,
        }
    }

    /// Test whether a cell is claimed on a layer
    pub fn is_claimed(&self, coordinate: Coordinate, layer: usize) -> bool {
        self.slot(coordinate, layer)
            .is_some_and(|slot| self.bits.get(slot).as_deref() == Some(&true))
    }

    /// Count claimed cells across all layers
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Test if nothing is claimed
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }
}

impl fmt::Display for ClaimSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ClaimSet({} claimed, {} layers)", self.count(), self.layers)
    }
}
