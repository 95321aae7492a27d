//! Stitch a gallery layout into one square JPEG thumbnail

use crate::gallery::layout::{CanvasLayout, GridLayout};
use crate::io::error::{GalleryError, Result, WithPath};
use crate::io::progress::CellProgress;
use image::imageops::{self, FilterType};
use image::{DynamicImage, ImageError, ImageFormat, ImageReader, RgbImage};
use std::fs;
use std::path::{Path, PathBuf};

/// Parameters for one compositing run
#[derive(Debug, Clone)]
pub struct CompositorConfig {
    /// Base directory holding `<factor>/<row>/<col>.jpg`
    pub base_dir: PathBuf,
    /// Canvas side length in pixels
    pub dim: u32,
    /// Side length of the grid
    pub factor: u32,
    /// Where the JPEG is written
    pub output: PathBuf,
}

impl CompositorConfig {
    /// Canvas geometry for this configuration
    ///
    /// # Errors
    ///
    /// Returns an error if `factor` or `dim` is zero
    pub fn canvas_layout(&self) -> Result<CanvasLayout> {
        CanvasLayout::new(GridLayout::new(self.factor)?, self.dim)
    }
}

// Tiles keep their source bytes under a `.jpg` name, so the decoder is chosen
// from the file contents rather than the extension
fn load_tile(path: &Path) -> Result<DynamicImage> {
    let image_load = |source: ImageError| GalleryError::ImageLoad {
        path: path.to_path_buf(),
        source,
    };
    ImageReader::open(path)
        .and_then(ImageReader::with_guessed_format)
        .map_err(|e| image_load(ImageError::IoError(e)))?
        .decode()
        .map_err(image_load)
}

/// Build the composite canvas in memory
///
/// Every tile is resized to `tile_dim × tile_dim` with a Lanczos filter and
/// pasted at its grid offset. Tiles overhanging the right or bottom edge are
/// clipped. Only one decoded source image is held at a time.
///
/// # Errors
///
/// Returns an error if the parameters are invalid, or if any tile is missing
/// or cannot be decoded. A missing tile is never replaced with a blank one.
pub fn composite(config: &CompositorConfig, progress: &CellProgress) -> Result<RgbImage> {
    let canvas_layout = config.canvas_layout()?;
    let grid = canvas_layout.grid();
    let tile_dim = canvas_layout.tile_dim();

    let mut canvas = RgbImage::new(canvas_layout.dim(), canvas_layout.dim());

    for cell in grid.cells() {
        let path = grid.cell_path(&config.base_dir, cell);
        let source = load_tile(&path)?;

        let tile = imageops::resize(&source.to_rgb8(), tile_dim, tile_dim, FilterType::Lanczos3);
        drop(source);

        let (x, y) = canvas_layout.tile_origin(cell);
        imageops::overlay(&mut canvas, &tile, x as i64, y as i64);
        progress.advance(&path);
    }

    Ok(canvas)
}

/// Build the composite and save it as a JPEG at `config.output`
///
/// Nothing is written unless every tile was pasted.
///
/// # Errors
///
/// Returns an error if compositing fails, the output directory cannot be
/// created, or the JPEG cannot be encoded or written
pub fn write_composite(config: &CompositorConfig, progress: &CellProgress) -> Result<()> {
    let canvas = composite(config, progress)?;

    if let Some(parent) = config.output.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).with_path(parent, "create directory")?;
    }

    canvas
        .save_with_format(&config.output, ImageFormat::Jpeg)
        .map_err(|e| GalleryError::ImageExport {
            path: config.output.clone(),
            source: e,
        })?;

    Ok(())
}
