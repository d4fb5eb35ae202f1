//! Exit conditions on board tiles next to goal gates
//!
//! A board tile gains one condition per gate that touches it from the side
//! the gate faces. Conditions are not de-duplicated.

use crate::compile::goals::GoalGroup;
use crate::compile::segment::Segment;
use crate::spatial::direction::{Coordinate, Direction};
use crate::spatial::index::TileIndex;
use crate::stage::tile::{ColorType, TileFlags};
use log::debug;

/// Exit eligibility attached to a board tile
#[derive(Debug, Clone, PartialEq)]
pub struct BoardCondition {
    /// Direction of the adjacent gate
    pub direction: Direction,
    /// Color the gate accepts
    pub color: ColorType,
    /// Gate length in cells
    pub total_length: usize,
    /// Board tile position relative to the gate center, along the gate span
    pub offset_from_center: f64,
}

/// Board footprint cell with its exit conditions
#[derive(Debug, Clone, PartialEq)]
pub struct BoardTile {
    /// Grid position
    pub coordinate: Coordinate,
    /// Conditions in gate order
    pub conditions: Vec<BoardCondition>,
}

/// Build board descriptors in authored order and attach gate conditions
pub fn link_board_conditions(index: &TileIndex<'_>, goals: &[GoalGroup]) -> Vec<BoardTile> {
    let boards: Vec<BoardTile> = index
        .tiles()
        .iter()
        .filter(|tile| tile.has_flag(TileFlags::BOARD))
        .map(|tile| BoardTile {
            coordinate: tile.coordinate(),
            conditions: conditions_for(tile.coordinate(), goals),
        })
        .collect();

    debug!(
        "linked {} board tiles, {} with exit conditions",
        boards.len(),
        boards
            .iter()
            .filter(|board| !board.conditions.is_empty())
            .count()
    );
    boards
}

/// Conditions a board tile at `coordinate` receives from `goals`
///
/// A gate qualifies when it holds the neighbor one step in some direction D
/// and itself faces the inverse of D.
pub fn conditions_for(coordinate: Coordinate, goals: &[GoalGroup]) -> Vec<BoardCondition> {
    let mut conditions = Vec::new();

    for goal in goals {
        for side in Direction::ALL {
            if goal.direction != side.invert() || !goal.contains(coordinate.step(side)) {
                continue;
            }
            conditions.push(BoardCondition {
                direction: side.invert(),
                color: goal.color,
                total_length: goal.length(),
                offset_from_center: goal.offset_from_center(coordinate),
            });
        }
    }

    conditions
}
