//! Authored tile records and their flag invariants
//!
//! A tile is one authored grid cell. Two rules hold after every mutation:
//! a `Block` tile always sits on a `Board` tile, and a `Board` tile never
//! carries goal markers. Tiles read from a stage file pass through the same
//! rules, so downstream passes can rely on them.

use crate::spatial::direction::{Coordinate, Direction};
use log::warn;
use serde::{Deserialize, Serialize};
use std::ops::BitOr;

/// Color identity shared by blocks and goal gates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ColorType {
    /// No color; clears goals when used as a goal marker
    #[default]
    None,
    /// Red
    Red,
    /// Orange
    Orange,
    /// Yellow
    Yellow,
    /// Gray
    Gray,
    /// Purple
    Purple,
    /// Beige
    Beige,
    /// Blue
    Blue,
    /// Green
    Green,
}

impl ColorType {
    /// Number of color variants
    pub const COUNT: usize = 9;

    /// Every color in declaration order
    pub const ALL: [Self; Self::COUNT] = [
        Self::None,
        Self::Red,
        Self::Orange,
        Self::Yellow,
        Self::Gray,
        Self::Purple,
        Self::Beige,
        Self::Blue,
        Self::Green,
    ];

    /// Dense index used by claim sets
    pub const fn index(self) -> usize {
        match self {
            Self::None => 0,
            Self::Red => 1,
            Self::Orange => 2,
            Self::Yellow => 3,
            Self::Gray => 4,
            Self::Purple => 5,
            Self::Beige => 6,
            Self::Blue => 7,
            Self::Green => 8,
        }
    }

    /// Opaque RGBA swatch used by stage previews
    pub const fn preview_rgba(self) -> [u8; 4] {
        match self {
            Self::None => [255, 255, 255, 255],
            Self::Red => [255, 0, 0, 255],
            Self::Orange => [255, 153, 0, 255],
            Self::Yellow => [255, 235, 4, 255],
            Self::Gray => [128, 128, 128, 255],
            Self::Purple => [179, 0, 255, 255],
            Self::Beige => [230, 230, 179, 255],
            Self::Blue => [0, 0, 255, 255],
            Self::Green => [0, 255, 0, 255],
        }
    }
}

/// Special tile behavior
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GimmickKind {
    /// Plain tile
    #[default]
    None,
    /// Collectible star
    Star,
}

/// Tile flag set
///
/// Bit values match the stage file encoding: Board = 1, Block = 2, Gimmick = 8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TileFlags(u8);

impl TileFlags {
    /// No flags
    pub const NONE: Self = Self(0);
    /// Walkable board footprint
    pub const BOARD: Self = Self(1);
    /// Movable block cell
    pub const BLOCK: Self = Self(1 << 1);
    /// Carries a gimmick
    pub const GIMMICK: Self = Self(1 << 3);

    const KNOWN: u8 = Self::BOARD.0 | Self::BLOCK.0 | Self::GIMMICK.0;

    /// Build from raw bits, dropping unknown ones
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits & Self::KNOWN)
    }

    /// Raw bits
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Test whether any bit of `flag` is set
    pub const fn contains(self, flag: Self) -> bool {
        self.0 & flag.0 != 0
    }

    /// No flag set
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Copy with `flag` set or cleared
    #[must_use]
    pub const fn with(self, flag: Self, state: bool) -> Self {
        if state {
            Self(self.0 | flag.0)
        } else {
            Self(self.0 & !flag.0)
        }
    }
}

impl BitOr for TileFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

/// Exit marker placed on a non-board tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GoalMarker {
    /// Direction a block travels to leave through this marker
    pub direction: Direction,
    /// Color of blocks the marker accepts
    #[serde(rename = "colorType")]
    pub color: ColorType,
}

impl GoalMarker {
    /// Create a marker
    pub const fn new(direction: Direction, color: ColorType) -> Self {
        Self { direction, color }
    }
}

/// One authored grid cell
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "TileRecord", into = "TileRecord")]
pub struct Tile {
    coordinate: Coordinate,
    flags: TileFlags,
    color: ColorType,
    gimmick: GimmickKind,
    goals: Vec<GoalMarker>,
}

impl Tile {
    /// Empty tile at `coordinate`
    pub const fn new(coordinate: Coordinate) -> Self {
        Self {
            coordinate,
            flags: TileFlags::NONE,
            color: ColorType::None,
            gimmick: GimmickKind::None,
            goals: Vec::new(),
        }
    }

    /// Board tile at `coordinate`
    pub fn board(coordinate: Coordinate) -> Self {
        let mut tile = Self::new(coordinate);
        tile.set_flag(TileFlags::BOARD, true);
        tile
    }

    /// Board tile carrying a block of `color`
    pub fn block(coordinate: Coordinate, color: ColorType) -> Self {
        let mut tile = Self::board(coordinate);
        tile.set_flag(TileFlags::BLOCK, true);
        tile.set_color(color);
        tile
    }

    /// Non-board tile carrying `markers`, applied in order
    pub fn goal(coordinate: Coordinate, markers: &[GoalMarker]) -> Self {
        let mut tile = Self::new(coordinate);
        for marker in markers {
            tile.set_goal(*marker);
        }
        tile
    }

    /// Grid position
    pub const fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    /// Current flag set
    pub const fn flags(&self) -> TileFlags {
        self.flags
    }

    /// Test a single flag
    pub const fn has_flag(&self, flag: TileFlags) -> bool {
        self.flags.contains(flag)
    }

    /// Block color
    pub const fn color(&self) -> ColorType {
        self.color
    }

    /// Gimmick kind
    pub const fn gimmick(&self) -> GimmickKind {
        self.gimmick
    }

    /// Goal markers in authored order
    pub fn goals(&self) -> &[GoalMarker] {
        &self.goals
    }

    /// Tile has neither flags nor goal markers
    pub fn is_empty(&self) -> bool {
        self.flags.is_empty() && self.goals.is_empty()
    }

    /// Set or clear a flag, then re-apply the tile invariants
    pub fn set_flag(&mut self, flag: TileFlags, state: bool) {
        self.flags = self.flags.with(flag, state);

        if self.flags.contains(TileFlags::BLOCK) && !self.flags.contains(TileFlags::BOARD) {
            self.flags = self.flags.with(TileFlags::BLOCK, false);
        }

        if self.flags.contains(TileFlags::BOARD) {
            self.goals.clear();
        }
    }

    /// Set the block color
    pub const fn set_color(&mut self, color: ColorType) {
        self.color = color;
    }

    /// Set the gimmick kind
    pub const fn set_gimmick(&mut self, gimmick: GimmickKind) {
        self.gimmick = gimmick;
    }

    /// Marker facing `direction`, if any
    pub fn goal_in(&self, direction: Direction) -> Option<GoalMarker> {
        self.goals
            .iter()
            .find(|goal| goal.direction == direction)
            .copied()
    }

    /// Upsert a goal marker keyed by its direction
    ///
    /// A marker colored `None` clears every marker. Board tiles refuse markers;
    /// returns whether the marker was applied.
    pub fn set_goal(&mut self, marker: GoalMarker) -> bool {
        if self.flags.contains(TileFlags::BOARD) {
            return false;
        }

        if marker.color == ColorType::None {
            self.goals.clear();
            return true;
        }

        if let Some(existing) = self
            .goals
            .iter_mut()
            .find(|goal| goal.direction == marker.direction)
        {
            *existing = marker;
        } else {
            self.goals.push(marker);
        }
        true
    }

    /// Remove the marker facing `direction`
    pub fn remove_goal(&mut self, direction: Direction) {
        self.goals.retain(|goal| goal.direction != direction);
    }

    /// Remove every goal marker
    pub fn clear_goals(&mut self) {
        self.goals.clear();
    }
}

/// Wire form of a tile as stored in stage files
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TileRecord {
    x: i32,
    y: i32,
    #[serde(default)]
    flags: TileFlags,
    #[serde(default)]
    color_type: ColorType,
    #[serde(default)]
    gimmick_type: GimmickKind,
    #[serde(default)]
    goals: Vec<GoalMarker>,
}

impl From<TileRecord> for Tile {
    fn from(record: TileRecord) -> Self {
        let coordinate = Coordinate::new(record.x, record.y);
        let raw_flags = TileFlags::from_bits(record.flags.bits());

        let mut tile = Self::new(coordinate);
        tile.color = record.color_type;
        tile.gimmick = record.gimmick_type;
        for marker in record.goals {
            tile.set_goal(marker);
        }
        let authored_goals = tile.goals.len();
        for flag in [TileFlags::BOARD, TileFlags::BLOCK, TileFlags::GIMMICK] {
            if raw_flags.contains(flag) {
                tile.set_flag(flag, true);
            }
        }

        if raw_flags.contains(TileFlags::BLOCK) && !tile.has_flag(TileFlags::BLOCK) {
            warn!("tile {coordinate}: block flag without board dropped");
        }
        if tile.goals.len() < authored_goals {
            warn!("tile {coordinate}: goal markers on board tile dropped");
        }
        tile
    }
}

impl From<Tile> for TileRecord {
    fn from(tile: Tile) -> Self {
        Self {
            x: tile.coordinate.x,
            y: tile.coordinate.y,
            flags: tile.flags,
            color_type: tile.color,
            gimmick_type: tile.gimmick,
            goals: tile.goals,
        }
    }
}
