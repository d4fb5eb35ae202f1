//! Block shapes grouped by color
//!
//! Every block tile of one color joins a single group, whether or not the
//! cells touch. The first block tile of a color in authored order anchors
//! the group; the rest are stored as offsets from it.

use crate::spatial::direction::Coordinate;
use crate::spatial::index::TileIndex;
use crate::stage::tile::{ColorType, TileFlags};
use log::debug;

/// One draggable multi-cell block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockGroup {
    /// Shared color of every cell
    pub color: ColorType,
    /// Authored position of the first cell
    pub anchor: Coordinate,
    /// Cell offsets from the anchor; the anchor itself is `(0, 0)`
    pub shape: Vec<Coordinate>,
}

/// Bounding box of a block shape relative to its anchor
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlockExtents {
    /// Width and height in cells
    pub size: [i32; 2],
    /// Center of the bounding box, relative to the anchor
    pub center: [f64; 2],
}

impl BlockGroup {
    /// Absolute cells when the anchor rests at `anchor`
    pub fn cells_at(&self, anchor: Coordinate) -> impl Iterator<Item = Coordinate> + '_ {
        self.shape.iter().map(move |&offset| anchor + offset)
    }

    /// Absolute cells at the authored position
    pub fn cells(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.cells_at(self.anchor)
    }

    /// Bounding size and center of the shape
    pub fn extents(&self) -> BlockExtents {
        let Some(first) = self.shape.first() else {
            return BlockExtents {
                size: [0, 0],
                center: [0.0, 0.0],
            };
        };

        let (min, max) = self
            .shape
            .iter()
            .fold((*first, *first), |(min, max), offset| {
                (
                    Coordinate::new(min.x.min(offset.x), min.y.min(offset.y)),
                    Coordinate::new(max.x.max(offset.x), max.y.max(offset.y)),
                )
            });

        BlockExtents {
            size: [max.x - min.x + 1, max.y - min.y + 1],
            center: [
                f64::from(min.x) + f64::from(max.x - min.x) * 0.5,
                f64::from(min.y) + f64::from(max.y - min.y) * 0.5,
            ],
        }
    }
}

/// Group block tiles by color in authored order
pub fn group_blocks(index: &TileIndex<'_>) -> Vec<BlockGroup> {
    let mut groups: Vec<BlockGroup> = Vec::new();

    for tile in index.tiles() {
        if !tile.has_flag(TileFlags::BLOCK) {
            continue;
        }

        match groups.iter_mut().find(|group| group.color == tile.color()) {
            Some(group) => {
                let offset = tile.coordinate() - group.anchor;
                group.shape.push(offset);
            }
            None => groups.push(BlockGroup {
                color: tile.color(),
                anchor: tile.coordinate(),
                shape: vec![Coordinate::new(0, 0)],
            }),
        }
    }

    debug!("grouped {} block colors", groups.len());
    groups
}
