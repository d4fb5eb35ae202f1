//! Exit eligibility queries over a compiled stage
//!
//! Runtime logic asks whether a block, resting with its anchor at some cell,
//! lines up with a gate of its color. The answer only reads compiled board
//! conditions; it never moves blocks or checks what lies in the way.

use crate::compile::blocks::BlockGroup;
use crate::compile::conditions::BoardCondition;
use crate::compile::executor::CompiledStage;
use crate::io::configuration::EXIT_WINDOW_TOLERANCE;
use crate::spatial::direction::{Axis, Coordinate, Direction};

/// Stretch of a gate a block center must fall within, in grid units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExitWindow {
    /// Axis the gate spans
    pub axis: Axis,
    /// Gate center along `axis`
    pub gate_center: f64,
    /// Gate length in cells
    pub gate_length: f64,
}

impl ExitWindow {
    /// Test whether a block centered at `center` with extent `span` fits the gate
    ///
    /// Both ends are exclusive and widened by `EXIT_WINDOW_TOLERANCE`.
    pub fn admits(&self, center: f64, span: f64) -> bool {
        let reach = (self.gate_length - span) * 0.5;
        let min = self.gate_center - reach - EXIT_WINDOW_TOLERANCE;
        let max = self.gate_center + reach + EXIT_WINDOW_TOLERANCE;
        center > min && center < max
    }
}

impl BoardCondition {
    /// Window of the gate this condition refers to, seen from `board`
    pub fn exit_window(&self, board: Coordinate) -> ExitWindow {
        let axis = self.direction.span_axis();
        ExitWindow {
            axis,
            gate_center: f64::from(board.along(axis)) - self.offset_from_center,
            gate_length: self.total_length as f64,
        }
    }
}

/// A block cell that qualifies for leaving the board
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExitMatch {
    /// Board cell the qualifying block cell rests on
    pub board: Coordinate,
    /// Direction the block travels to reach the gate
    pub travel: Direction,
    /// Window of the matched gate
    pub window: ExitWindow,
}

/// First block cell, in shape order, that lines up with a same-color gate
pub fn find_exit(stage: &CompiledStage, block: &BlockGroup, anchor: Coordinate) -> Option<ExitMatch> {
    let extents = block.extents();
    let center = [
        f64::from(anchor.x) + extents.center[0],
        f64::from(anchor.y) + extents.center[1],
    ];

    for cell in block.cells_at(anchor) {
        let Some(board) = stage.board_at(cell) else {
            continue;
        };

        for condition in board
            .conditions
            .iter()
            .filter(|condition| condition.color == block.color)
        {
            let window = condition.exit_window(cell);
            let (along, span) = match window.axis {
                Axis::Horizontal => (center[0], extents.size[0]),
                Axis::Vertical => (center[1], extents.size[1]),
            };
            if window.admits(along, f64::from(span)) {
                return Some(ExitMatch {
                    board: cell,
                    travel: condition.direction.invert(),
                    window,
                });
            }
        }
    }

    None
}
