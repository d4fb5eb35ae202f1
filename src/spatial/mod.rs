//! Spatial data structures for stage compilation
//!
//! This module contains spatial-related functionality including:
//! - Grid coordinates and cardinal directions
//! - Dense coordinate lookup over authored tiles
//! - Claim sets shared by the tracing passes

/// Claim bitsets keyed by coordinate and layer
pub mod claims;
/// Grid coordinates, axes and directions
pub mod direction;
/// Constant-time tile lookup
pub mod index;

pub use direction::{Axis, Coordinate, Direction};
pub use index::{StageBounds, TileIndex};
