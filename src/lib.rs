//! Image gallery construction for tiled navigation views
//!
//! The sampler copies the smallest files of a source folder into a
//! `<base>/<factor>/<row>/<col>.jpg` grid, and the compositor stitches that
//! grid into one square JPEG thumbnail. The two only meet on the file system.

#![forbid(unsafe_code)]

/// Grid layout, sampling and compositing
pub mod gallery;
/// Command-line interfaces, configuration, errors and progress output
pub mod io;

pub use io::error::{GalleryError, Result};
