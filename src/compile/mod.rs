//! Stage compilation from authored tiles to play-layer descriptors

/// Block shapes grouped by color
pub mod blocks;
/// Exit conditions on board tiles next to goal gates
pub mod conditions;
/// Pass orchestration and compiled output
pub mod executor;
/// Exit eligibility queries
pub mod exit;
/// Goal gate extraction
pub mod goals;
/// Shared run geometry
pub mod segment;
/// Per-pass claim state
pub mod session;
/// Perimeter wall tracing
pub mod walls;

pub use executor::{CompiledStage, CompilerConfig, StageCompiler, compile_stage};
