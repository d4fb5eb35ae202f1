//! Perimeter wall tracing
//!
//! Every open side of the stage footprint gets sealed by bounded wall runs.
//! A run starts at the empty cell beside a tile and grows both ways along
//! the edge while the cell behind it is board, the cell itself is neither
//! board nor a goal facing the same way, no earlier run took it, and the run
//! is still shorter than the segment limit.

use crate::compile::segment::Segment;
use crate::compile::session::CompileSession;
use crate::spatial::direction::{Coordinate, Direction};
use crate::spatial::index::TileIndex;
use crate::stage::tile::TileFlags;
use log::debug;

/// One bounded run of wall cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WallGroup {
    /// Side the wall faces, pointing back at the board
    pub direction: Direction,
    /// Member cells, ascending along the span axis
    pub members: Vec<Coordinate>,
}

impl Segment for WallGroup {
    fn direction(&self) -> Direction {
        self.direction
    }

    fn members(&self) -> &[Coordinate] {
        &self.members
    }
}

/// Trace wall runs around every tile
///
/// Tiles are visited in row-major order and openings in `Direction::ALL`
/// order; that order decides which run claims a shared border cell.
pub fn trace_walls(index: &TileIndex<'_>, session: &mut CompileSession) -> Vec<WallGroup> {
    let mut walls = Vec::new();

    for tile in index.canonical_order() {
        for opening in Direction::ALL {
            if let Some(wall) = trace_opening(index, session, tile.coordinate(), opening) {
                walls.push(wall);
            }
        }
    }

    debug!("traced {} wall runs", walls.len());
    walls
}

/// Grow the run sealing the opening beside `origin` in direction `opening`
///
/// Returns None when the neighbor exists or no cell could be claimed.
pub fn trace_opening(
    index: &TileIndex<'_>,
    session: &mut CompileSession,
    origin: Coordinate,
    opening: Direction,
) -> Option<WallGroup> {
    let start = origin.step(opening);
    if index.contains(start) {
        return None;
    }

    let direction = opening.invert();
    let outward = opening.offset();
    let along = outward.orthogonal();
    let limit = session.max_segment_length();
    let mut members = Vec::new();

    for (first, step) in [(start, -along), (start + along, along)] {
        let mut probe = first;
        while members.len() < limit
            && can_seal(index, probe, outward, direction)
            && session.claim_wall(probe, direction)
        {
            members.push(probe);
            probe = probe + step;
        }
    }

    if members.is_empty() {
        return None;
    }

    members.sort_by_key(|c| c.along(direction.span_axis()));
    Some(WallGroup { direction, members })
}

// The probe must be free of board and same-facing goals, and the cell one
// step back against `outward` must be board
fn can_seal(
    index: &TileIndex<'_>,
    probe: Coordinate,
    outward: Coordinate,
    direction: Direction,
) -> bool {
    let blocked = index
        .lookup(probe)
        .is_some_and(|tile| tile.has_flag(TileFlags::BOARD) || tile.goal_in(direction).is_some());
    if blocked {
        return false;
    }

    index
        .lookup(probe - outward)
        .is_some_and(|behind| behind.has_flag(TileFlags::BOARD))
}
