//! Input/output operations and error handling

/// Command-line parsing and batch orchestration
pub mod cli;
/// Compiler constants and defaults
pub mod configuration;
/// Error types and context helpers
pub mod error;
/// PNG stage previews
pub mod image;
/// Batch progress display
pub mod progress;
/// Stage file loading and compiled descriptor export
pub mod stage_file;
