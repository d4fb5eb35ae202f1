//! Goal gate extraction
//!
//! Adjacent goal markers that share a direction and a color form one gate.
//! Gates grow perpendicular to their direction: markers facing Up or Down
//! merge along x, markers facing Left or Right merge along y.

use crate::compile::segment::Segment;
use crate::compile::session::CompileSession;
use crate::io::error::{Result, StageError};
use crate::spatial::direction::{Axis, Coordinate, Direction};
use crate::spatial::index::TileIndex;
use crate::stage::tile::{ColorType, GoalMarker};
use log::debug;

/// One maximal run of same-color, same-direction goal markers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoalGroup {
    /// Exit direction shared by every marker in the run
    pub direction: Direction,
    /// Color of blocks the gate accepts
    pub color: ColorType,
    /// Member cells, ascending along the span axis
    pub members: Vec<Coordinate>,
}

impl GoalGroup {
    /// Marker every member carries
    pub const fn marker(&self) -> GoalMarker {
        GoalMarker::new(self.direction, self.color)
    }
}

impl Segment for GoalGroup {
    fn direction(&self) -> Direction {
        self.direction
    }

    fn members(&self) -> &[Coordinate] {
        &self.members
    }
}

/// Merge goal markers into gates
///
/// Tiles are seeded in row-major order and each tile's markers in authored
/// order. Every accepted cell is claimed in `session`, so a marker seeds at
/// most one gate.
///
/// # Errors
///
/// Returns an error if a gate is longer than the session's segment limit
pub fn extract_goal_groups(
    index: &TileIndex<'_>,
    session: &mut CompileSession,
) -> Result<Vec<GoalGroup>> {
    let mut groups = Vec::new();

    for tile in index.canonical_order() {
        let seed = tile.coordinate();
        for &marker in tile.goals() {
            if session.goal_claimed(seed, marker) {
                continue;
            }

            let group = grow_goal_group(index, session, seed, marker);
            if group.length() > session.max_segment_length() {
                return Err(StageError::SegmentTooLong {
                    kind: "goal",
                    start: group.members.first().copied().unwrap_or(seed),
                    length: group.length(),
                    max: session.max_segment_length(),
                });
            }
            groups.push(group);
        }
    }

    debug!("extracted {} goal groups", groups.len());
    Ok(groups)
}

fn grow_goal_group(
    index: &TileIndex<'_>,
    session: &mut CompileSession,
    seed: Coordinate,
    marker: GoalMarker,
) -> GoalGroup {
    let axis = marker.direction.span_axis();
    let forward = match axis {
        Axis::Horizontal => Direction::Right,
        Axis::Vertical => Direction::Up,
    };

    session.claim_goal(seed, marker);
    let mut members = vec![seed];
    members.extend(sweep(index, session, seed, forward, marker));
    members.extend(sweep(index, session, seed, forward.invert(), marker));
    members.sort_by_key(|c| c.along(axis));

    GoalGroup {
        direction: marker.direction,
        color: marker.color,
        members,
    }
}

// Walks from `seed` until the first cell lacking a matching marker
fn sweep(
    index: &TileIndex<'_>,
    session: &mut CompileSession,
    seed: Coordinate,
    step: Direction,
    marker: GoalMarker,
) -> Vec<Coordinate> {
    let mut accepted = Vec::new();
    let mut probe = seed.step(step);

    while let Some(tile) = index.lookup(probe) {
        let matches = tile
            .goal_in(marker.direction)
            .is_some_and(|goal| goal.color == marker.color);
        if !matches {
            break;
        }
        session.claim_goal(probe, marker);
        accepted.push(probe);
        probe = probe.step(step);
    }

    accepted
}
