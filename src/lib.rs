//! Compiler from authored puzzle stage tiles to play-layer descriptors
//!
//! A stage is a sparse list of authored tiles. Compilation indexes the tiles,
//! merges goal markers into gates, attaches exit conditions to the board
//! tiles beside those gates, groups block cells by color and seals the open
//! board perimeter with bounded wall runs.

#![forbid(unsafe_code)]

/// Stage compilation passes and compiled output
pub mod compile;
/// Input/output operations and error handling
pub mod io;
/// Coordinates, directions, tile lookup and claim sets
pub mod spatial;
/// Authored stage data
pub mod stage;

pub use compile::{CompiledStage, CompilerConfig, StageCompiler, compile_stage};
pub use io::error::{Result, StageError};
pub use stage::{StageData, Tile};
