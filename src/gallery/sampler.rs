//! Sample a source folder into the `<base>/<factor>/<row>/<col>.jpg` layout

use crate::gallery::layout::{GridCell, GridLayout};
use crate::gallery::selection::{SortOrder, SourceFile, files_by_size, take_smallest};
use crate::io::error::{GalleryError, Result, WithPath};
use crate::io::progress::CellProgress;
use rand::seq::SliceRandom;
use rand::{SeedableRng, rngs::StdRng};
use std::fs;
use std::path::{Path, PathBuf};

/// Parameters for one sampling run
#[derive(Debug, Clone)]
pub struct SamplerConfig {
    /// Destination base directory
    pub base_dir: PathBuf,
    /// Folder holding the source images
    pub folder: PathBuf,
    /// Side length of the grid
    pub factor: u32,
    /// Which end of the size ordering to sample from
    pub order: SortOrder,
    /// Fixed shuffle seed; `None` draws one from the OS
    pub seed: Option<u64>,
}

/// A single source-to-cell copy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlannedCopy<'a> {
    /// Destination cell
    pub cell: GridCell,
    /// File copied into the cell
    pub source: &'a Path,
}

/// Outcome of a completed sampling run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GallerySummary {
    /// Number of tile files written, always `factor²`
    pub cells_written: usize,
    /// Number of distinct source files used
    pub distinct_sources: usize,
}

/// Assign a source to every cell in row-major order, cycling through `sources`
///
/// # Errors
///
/// Returns [`GalleryError::EmptySource`] if `sources` is empty
pub fn plan_gallery<'a>(
    folder: &Path,
    sources: &'a [SourceFile],
    layout: GridLayout,
) -> Result<Vec<PlannedCopy<'a>>> {
    let empty = || GalleryError::EmptySource {
        folder: folder.to_path_buf(),
    };
    if sources.is_empty() {
        return Err(empty());
    }

    layout
        .cells()
        .map(|cell| -> Result<PlannedCopy<'a>> {
            let source = layout
                .source_index(cell, sources.len())
                .and_then(|index| sources.get(index))
                .ok_or_else(empty)?;
            Ok(PlannedCopy {
                cell,
                source: &source.path,
            })
        })
        .collect()
}

/// Select, shuffle and copy source files into the gallery layout
///
/// Files are copied byte for byte; nothing is decoded. A failure part way
/// through leaves the copies made so far on disk.
///
/// # Errors
///
/// Returns an error if:
/// - `factor` is zero
/// - The source folder cannot be read
/// - The source folder contains no regular files
/// - A destination directory cannot be created or a copy fails
pub fn build_gallery(config: &SamplerConfig, progress: &CellProgress) -> Result<GallerySummary> {
    let layout = GridLayout::new(config.factor)?;

    let listing = files_by_size(&config.folder, config.order)?;
    let mut selected = take_smallest(listing, layout.cell_count());

    let mut rng = config
        .seed
        .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
    selected.shuffle(&mut rng);

    let plan = plan_gallery(&config.folder, &selected, layout)?;

    let mut current_row = None;
    for copy in &plan {
        if current_row != Some(copy.cell.row) {
            let row_dir = layout.row_dir(&config.base_dir, copy.cell.row);
            fs::create_dir_all(&row_dir).with_path(&row_dir, "create directory")?;
            current_row = Some(copy.cell.row);
        }

        let destination = layout.cell_path(&config.base_dir, copy.cell);
        fs::copy(copy.source, &destination).with_path(&destination, "copy tile")?;
        progress.advance(&destination);
    }

    Ok(GallerySummary {
        cells_written: plan.len(),
        distinct_sources: selected.len(),
    })
}
