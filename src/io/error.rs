//! Error types and context management for stage compilation

use crate::spatial::direction::Coordinate;
use std::fmt;
use std::path::{Path, PathBuf};

const UNKNOWN_PATH: &str = "<unknown>";

/// Main error type for all stage operations
#[derive(Debug)]
pub enum StageError {
    /// Stage document could not be parsed
    StageParse {
        /// Path to the stage file
        path: PathBuf,
        /// Underlying JSON error
        source: serde_json::Error,
    },

    /// Two authored tiles share one coordinate
    DuplicateCoordinate {
        /// The contested coordinate
        coordinate: Coordinate,
        /// Authored position of the first tile
        first: usize,
        /// Authored position of the second tile
        second: usize,
    },

    /// Stage footprint exceeds the supported raster size
    StageTooLarge {
        /// Footprint width in cells
        width: usize,
        /// Footprint height in cells
        height: usize,
        /// Largest accepted extent on either axis
        max: usize,
    },

    /// Stage footprint sits too close to the edge of the coordinate range
    CoordinateOutOfRange {
        /// Minimum authored coordinate
        min: Coordinate,
        /// Maximum authored coordinate
        max: Coordinate,
        /// Cells required beyond the footprint on every side
        margin: usize,
    },

    /// A merged run is longer than the presentation layer can render
    SegmentTooLong {
        /// Which kind of run overflowed
        kind: &'static str,
        /// First member of the run
        start: Coordinate,
        /// Run length in cells
        length: usize,
        /// Configured maximum length
        max: usize,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Command-line target is neither a stage file nor a directory
    InvalidTarget {
        /// Offending path
        path: PathBuf,
        /// What was expected
        reason: &'static str,
    },

    /// Failed to save a preview image
    PreviewExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for StageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StageParse { path, source } => {
                write!(f, "Failed to parse stage '{}': {source}", path.display())
            }
            Self::DuplicateCoordinate {
                coordinate,
                first,
                second,
            } => {
                write!(
                    f,
                    "Duplicate tile at {coordinate} (authored at positions {first} and {second})"
                )
            }
            Self::StageTooLarge { width, height, max } => {
                write!(
                    f,
                    "Stage footprint {width}x{height} exceeds the {max} cell limit"
                )
            }
            Self::CoordinateOutOfRange { min, max, margin } => {
                write!(
                    f,
                    "Stage footprint {min} to {max} leaves no {margin} cell margin in range"
                )
            }
            Self::SegmentTooLong {
                kind,
                start,
                length,
                max,
            } => {
                write!(
                    f,
                    "{kind} run starting at {start} has length {length} (max: {max})"
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::InvalidTarget { path, reason } => {
                write!(f, "Invalid target '{}': {reason}", path.display())
            }
            Self::PreviewExport { path, source } => {
                write!(
                    f,
                    "Failed to export preview to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for StageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::StageParse { source, .. } => Some(source),
            Self::PreviewExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for stage results
pub type Result<T> = std::result::Result<T, StageError>;

/// Additional context to enrich error messages
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// File the failing operation worked on
    pub path: Option<PathBuf>,
    /// Operation being performed
    pub operation: Option<&'static str>,
}

/// Enriches errors raised without file information
pub trait WithContext<T> {
    /// Add error context to a Result
    ///
    /// # Errors
    ///
    /// Propagates the original error with additional context applied
    fn with_context(self, context: ErrorContext) -> Result<T>;

    /// Add just the file path
    ///
    /// # Errors
    ///
    /// Propagates the original error with the path applied
    fn with_path(self, path: &Path) -> Result<T>;
}

impl<T, E> WithContext<T> for std::result::Result<T, E>
where
    E: Into<StageError>,
{
    fn with_context(self, context: ErrorContext) -> Result<T> {
        self.map_err(|e| {
            let mut error = e.into();
            match &mut error {
                StageError::StageParse { path, .. } | StageError::PreviewExport { path, .. } => {
                    fill_path(path, context.path.as_deref());
                }
                StageError::FileSystem {
                    path, operation, ..
                } => {
                    fill_path(path, context.path.as_deref());
                    if let Some(op) = context.operation {
                        *operation = op;
                    }
                }
                _ => {}
            }
            error
        })
    }

    fn with_path(self, path: &Path) -> Result<T> {
        self.with_context(ErrorContext {
            path: Some(path.to_path_buf()),
            ..Default::default()
        })
    }
}

// Only placeholder paths are replaced; a path set at the failure site wins
fn fill_path(slot: &mut PathBuf, path: Option<&Path>) {
    if let Some(path) = path.filter(|_| slot.as_os_str() == UNKNOWN_PATH) {
        *slot = path.to_path_buf();
    }
}

impl From<serde_json::Error> for StageError {
    fn from(err: serde_json::Error) -> Self {
        Self::StageParse {
            path: PathBuf::from(UNKNOWN_PATH),
            source: err,
        }
    }
}

impl From<std::io::Error> for StageError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from(UNKNOWN_PATH),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> StageError {
    StageError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
