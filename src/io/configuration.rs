//! Compiler constants and runtime configuration defaults

/// Longest wall or goal run the presentation layer has a mesh for
pub const MAX_SEGMENT_LENGTH: usize = 5;

// Keeps the dense tile raster within a few megabytes
/// Largest stage footprint accepted on either axis
pub const MAX_STAGE_DIMENSION: usize = 1024;

/// Extra cells kept around the tile footprint in claim rasters
pub const CLAIM_MARGIN: usize = 1;

/// Tolerance applied at both ends of an exit window, in cells
pub const EXIT_WINDOW_TOLERANCE: f64 = 0.1;

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;

// Output settings
/// Extension of stage files picked up by the command line
pub const STAGE_EXTENSION: &str = "json";
/// Suffix added to compiled output filenames
pub const OUTPUT_SUFFIX: &str = "_compiled";
/// Suffix added to preview image filenames
pub const PREVIEW_SUFFIX: &str = "_preview";
/// Edge length of one grid cell in preview images
pub const PREVIEW_CELL_PIXELS: u32 = 16;
