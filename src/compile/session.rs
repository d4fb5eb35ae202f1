//! Claim state owned by a single compilation pass
//!
//! The goal extractor and wall tracer each need to remember which cells an
//! earlier run already took. That state lives here rather than in globals, so
//! two passes never share claims and the pipeline stays a pure function of
//! its input tiles.

use crate::io::configuration::CLAIM_MARGIN;
use crate::spatial::claims::ClaimSet;
use crate::spatial::direction::{Coordinate, Direction};
use crate::spatial::index::TileIndex;
use crate::stage::tile::{ColorType, GoalMarker};

/// Per-pass claim sets and limits
#[derive(Debug, Clone)]
pub struct CompileSession {
    goal_claims: ClaimSet,
    wall_claims: ClaimSet,
    max_segment_length: usize,
}

impl CompileSession {
    /// Create fresh claim sets sized for `index`
    ///
    /// Wall probes may sit one cell outside the authored footprint, so the
    /// wall raster is padded by `CLAIM_MARGIN`.
    pub fn new(index: &TileIndex<'_>, max_segment_length: usize) -> Self {
        let bounds = index.bounds();
        let wall_bounds = bounds.and_then(|b| b.padded(CLAIM_MARGIN as i32));

        Self {
            goal_claims: ClaimSet::new(bounds, Direction::ALL.len() * ColorType::COUNT),
            wall_claims: ClaimSet::new(wall_bounds, Direction::ALL.len()),
            max_segment_length,
        }
    }

    /// Longest run either tracer may emit
    pub const fn max_segment_length(&self) -> usize {
        self.max_segment_length
    }

    /// Test whether a goal marker at `coordinate` already belongs to a group
    pub fn goal_claimed(&self, coordinate: Coordinate, marker: GoalMarker) -> bool {
        self.goal_claims
            .is_claimed(coordinate, Self::goal_layer(marker))
    }

    /// Claim a goal marker at `coordinate`; false if already claimed
    pub fn claim_goal(&mut self, coordinate: Coordinate, marker: GoalMarker) -> bool {
        self.goal_claims.claim(coordinate, Self::goal_layer(marker))
    }

    /// Test whether a wall facing `direction` already covers `coordinate`
    pub fn wall_claimed(&self, coordinate: Coordinate, direction: Direction) -> bool {
        self.wall_claims.is_claimed(coordinate, direction.index())
    }

    /// Claim a wall cell facing `direction`; false if already claimed
    pub fn claim_wall(&mut self, coordinate: Coordinate, direction: Direction) -> bool {
        self.wall_claims.claim(coordinate, direction.index())
    }

    const fn goal_layer(marker: GoalMarker) -> usize {
        marker.direction.index() * ColorType::COUNT + marker.color.index()
    }
}
