//! Gallery constants and command-line defaults

// Grid settings shared by both programs
/// Default side length of the tile grid
pub const DEFAULT_FACTOR: u32 = 32;

/// Extension given to every copied tile, whatever its real format
pub const TILE_EXTENSION: &str = "jpg";

// Compositor settings
/// Default side length of the composite canvas in pixels
pub const DEFAULT_DIM: u32 = 500;

/// Default stem of the composite output file
pub const DEFAULT_TILE_NAME: &str = "default_tile_name";

/// Extension of the composite output file
pub const OUTPUT_EXTENSION: &str = "jpg";

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
