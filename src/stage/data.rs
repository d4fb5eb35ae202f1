//! Ordered list of authored tiles
//!
//! The list order is the authoring order. Block anchors and board descriptor
//! order depend on it, so nothing here sorts the tiles.

use crate::io::error::{Result, StageError};
use crate::spatial::direction::Coordinate;
use crate::stage::tile::Tile;
use serde::{Deserialize, Serialize};

/// Authored stage as supplied by the level editor
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageData {
    /// Tiles in authoring order
    pub tiles: Vec<Tile>,
}

impl StageData {
    /// Create a stage from tiles in authoring order
    pub const fn new(tiles: Vec<Tile>) -> Self {
        Self { tiles }
    }

    /// Drop tiles with no flags and no goal markers
    pub fn clear_empty(&mut self) {
        self.tiles.retain(|tile| !tile.is_empty());
    }

    /// First authored tile at `coordinate`
    ///
    /// Linear scan over the authored list; compiled passes use
    /// [`crate::spatial::TileIndex`] instead.
    pub fn tile_at(&self, coordinate: Coordinate) -> Option<&Tile> {
        self.tiles
            .iter()
            .find(|tile| tile.coordinate() == coordinate)
    }

    /// Mutable access to the first authored tile at `coordinate`
    pub fn tile_mut(&mut self, coordinate: Coordinate) -> Option<&mut Tile> {
        self.tiles
            .iter_mut()
            .find(|tile| tile.coordinate() == coordinate)
    }

    /// Replace the tile at the same coordinate, or append it
    pub fn upsert(&mut self, tile: Tile) {
        match self.tile_mut(tile.coordinate()) {
            Some(existing) => *existing = tile,
            None => self.tiles.push(tile),
        }
    }

    /// Parse a stage from JSON text
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a valid stage document
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(StageError::from)
    }

    /// Serialize the stage to JSON after dropping empty tiles
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails
    pub fn to_json(&mut self, pretty: bool) -> Result<String> {
        self.clear_empty();
        let text = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(text)
    }
}
