//! Constant-time coordinate lookup over an authored tile list
//!
//! The index is a dense raster covering the bounding box of the authored
//! coordinates. Each cell stores a tile reference (0 = empty, 1+ = authored
//! position plus one), so lookups never hash. The raster is a cache over the
//! authored list; the list stays authoritative.

use crate::io::configuration::{CLAIM_MARGIN, MAX_STAGE_DIMENSION};
use crate::io::error::{Result, StageError};
use crate::spatial::direction::Coordinate;
use crate::stage::tile::Tile;
use ndarray::Array2;

/// Axis-aligned inclusive bounding box in grid coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StageBounds {
    /// Minimum coordinate (inclusive)
    pub min: Coordinate,
    /// Maximum coordinate (inclusive)
    pub max: Coordinate,
}

impl StageBounds {
    /// Smallest box holding every coordinate, or None when there are none
    pub fn enclosing(coordinates: impl IntoIterator<Item = Coordinate>) -> Option<Self> {
        coordinates.into_iter().fold(None, |bounds, c| {
            Some(bounds.map_or(Self { min: c, max: c }, |b: Self| b.including(c)))
        })
    }

    /// Grow the box to include `coordinate`
    #[must_use]
    pub fn including(self, coordinate: Coordinate) -> Self {
        Self {
            min: Coordinate::new(self.min.x.min(coordinate.x), self.min.y.min(coordinate.y)),
            max: Coordinate::new(self.max.x.max(coordinate.x), self.max.y.max(coordinate.y)),
        }
    }

    /// Grow the box by `margin` cells on every side, or None if that
    /// leaves the `i32` coordinate range
    #[must_use]
    pub fn padded(self, margin: i32) -> Option<Self> {
        Some(Self {
            min: Coordinate::new(
                self.min.x.checked_sub(margin)?,
                self.min.y.checked_sub(margin)?,
            ),
            max: Coordinate::new(
                self.max.x.checked_add(margin)?,
                self.max.y.checked_add(margin)?,
            ),
        })
    }

    /// Check if a coordinate is within the bounds
    pub const fn contains(&self, coordinate: Coordinate) -> bool {
        coordinate.x >= self.min.x
            && coordinate.x <= self.max.x
            && coordinate.y >= self.min.y
            && coordinate.y <= self.max.y
    }

    /// Number of columns
    pub const fn width(&self) -> usize {
        (self.max.x as i64 - self.min.x as i64 + 1) as usize
    }

    /// Number of rows
    pub const fn height(&self) -> usize {
        (self.max.y as i64 - self.min.y as i64 + 1) as usize
    }

    /// Raster cell `[row, col]` for a coordinate inside the bounds
    pub const fn cell(&self, coordinate: Coordinate) -> Option<[usize; 2]> {
        if self.contains(coordinate) {
            Some([
                (coordinate.y as i64 - self.min.y as i64) as usize,
                (coordinate.x as i64 - self.min.x as i64) as usize,
            ])
        } else {
            None
        }
    }
}

/// Coordinate to tile lookup built once per compilation pass
#[derive(Debug, Clone)]
pub struct TileIndex<'a> {
    tiles: &'a [Tile],
    bounds: Option<StageBounds>,
    cells: Array2<u32>,
}

impl<'a> TileIndex<'a> {
    /// Build the lookup raster for `tiles`
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Two tiles share a coordinate
    /// - The footprint exceeds `MAX_STAGE_DIMENSION` on either axis
    /// - The footprint padded by `CLAIM_MARGIN` leaves the `i32` range
    pub fn build(tiles: &'a [Tile]) -> Result<Self> {
        let bounds = StageBounds::enclosing(tiles.iter().map(Tile::coordinate));

        let Some(bounds) = bounds else {
            return Ok(Self {
                tiles,
                bounds: None,
                cells: Array2::zeros((0, 0)),
            });
        };

        if bounds.width() > MAX_STAGE_DIMENSION || bounds.height() > MAX_STAGE_DIMENSION {
            return Err(StageError::StageTooLarge {
                width: bounds.width(),
                height: bounds.height(),
                max: MAX_STAGE_DIMENSION,
            });
        }

        // Every neighbor step the passes take stays inside the padded box
        if bounds.padded(CLAIM_MARGIN as i32).is_none() {
            return Err(StageError::CoordinateOutOfRange {
                min: bounds.min,
                max: bounds.max,
                margin: CLAIM_MARGIN,
            });
        }

        let mut cells = Array2::zeros((bounds.height(), bounds.width()));
        for (position, tile) in tiles.iter().enumerate() {
            let Some(slot) = bounds.cell(tile.coordinate()).and_then(|cell| cells.get_mut(cell))
            else {
                continue;
            };
            if *slot != 0 {
                return Err(StageError::DuplicateCoordinate {
                    coordinate: tile.coordinate(),
                    first: *slot as usize - 1,
                    second: position,
                });
            }
            *slot = position as u32 + 1;
        }

        Ok(Self {
            tiles,
            bounds: Some(bounds),
            cells,
        })
    }

    /// Tile at `coordinate`, or None if nothing was authored there
    pub fn lookup(&self, coordinate: Coordinate) -> Option<&'a Tile> {
        let cell = self.bounds?.cell(coordinate)?;
        let reference = self.cells.get(cell).copied()?;
        self.resolve(reference)
    }

    /// Test whether a tile was authored at `coordinate`
    pub fn contains(&self, coordinate: Coordinate) -> bool {
        self.lookup(coordinate).is_some()
    }

    /// Tiles in authoring order
    pub const fn tiles(&self) -> &'a [Tile] {
        self.tiles
    }

    /// Tiles in row-major order (y ascending, then x ascending)
    pub fn canonical_order(&self) -> impl Iterator<Item = &'a Tile> + '_ {
        self.cells
            .iter()
            .filter_map(|&reference| self.resolve(reference))
    }

    /// Bounding box of the authored coordinates
    pub const fn bounds(&self) -> Option<StageBounds> {
        self.bounds
    }

    /// Number of indexed tiles
    pub const fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Index holds no tiles
    pub const fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    fn resolve(&self, reference: u32) -> Option<&'a Tile> {
        let position = (reference as usize).checked_sub(1)?;
        self.tiles.get(position)
    }
}
