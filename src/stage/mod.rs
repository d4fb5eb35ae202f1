//! Authored stage data
//!
//! This module contains the in-memory form of an authored stage:
//! - Tile records with flag and goal-marker invariants
//! - The ordered tile list and its housekeeping operations

/// Ordered authored tile list
pub mod data;
/// Tile records, flags, colors and goal markers
pub mod tile;

pub use data::StageData;
pub use tile::{ColorType, GimmickKind, GoalMarker, Tile, TileFlags};
