//! Command-line interfaces for the gallery sampler and tile compositor

use crate::gallery::compositor::{CompositorConfig, write_composite};
use crate::gallery::layout::GridLayout;
use crate::gallery::sampler::{GallerySummary, SamplerConfig, build_gallery};
use crate::gallery::selection::SortOrder;
use crate::io::configuration::{DEFAULT_DIM, DEFAULT_FACTOR, DEFAULT_TILE_NAME, OUTPUT_EXTENSION};
use crate::io::error::Result;
use crate::io::progress::CellProgress;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "gallery-sample")]
#[command(
    author,
    version,
    about = "Copy the smallest images of a folder into a factor x factor gallery layout"
)]
/// Command-line arguments for the gallery sampler
pub struct SamplerCli {
    /// Destination base directory; tiles land in <BASE_DIR>/<FACTOR>/<row>/<col>.jpg
    #[arg(value_name = "BASE_DIR")]
    pub base_dir: PathBuf,

    /// Folder of source images to sample from
    #[arg(value_name = "FOLDER")]
    pub folder: PathBuf,

    /// Side length of the tile grid
    #[arg(short, long, default_value_t = DEFAULT_FACTOR)]
    pub factor: u32,

    /// Sample the largest files instead of the smallest
    #[arg(short, long)]
    pub reverse: bool,

    /// Seed the shuffle for a reproducible layout
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl SamplerCli {
    /// Size ordering selected by the flags
    pub const fn sort_order(&self) -> SortOrder {
        if self.reverse {
            SortOrder::Descending
        } else {
            SortOrder::Ascending
        }
    }

    /// Library configuration for these arguments
    pub fn config(&self) -> SamplerConfig {
        SamplerConfig {
            base_dir: self.base_dir.clone(),
            folder: self.folder.clone(),
            factor: self.factor,
            order: self.sort_order(),
            seed: self.seed,
        }
    }

    /// Build the gallery layout
    ///
    /// # Errors
    ///
    /// Returns an error if the factor is invalid, the source folder is
    /// unreadable or empty, or any copy fails
    // Allow print for the completion summary
    #[allow(clippy::print_stderr)]
    pub fn run(&self) -> Result<GallerySummary> {
        let layout = GridLayout::new(self.factor)?;
        let progress = CellProgress::for_run("copy", layout.cell_count(), self.quiet);

        let summary = build_gallery(&self.config(), &progress)?;

        progress.finish("done");
        if !self.quiet {
            eprintln!(
                "Wrote {} tiles from {} source files to {}",
                summary.cells_written,
                summary.distinct_sources,
                layout.level_dir(&self.base_dir).display()
            );
        }
        Ok(summary)
    }
}

#[derive(Parser, Debug)]
#[command(name = "gallery-tile")]
#[command(
    author,
    version,
    about = "Stitch a gallery layout into a single square thumbnail"
)]
/// Command-line arguments for the tile compositor
pub struct CompositorCli {
    /// Base directory holding <FACTOR>/<row>/<col>.jpg
    #[arg(value_name = "BASE_DIR")]
    pub base_dir: PathBuf,

    /// Side length of the output canvas in pixels
    #[arg(short, long, default_value_t = DEFAULT_DIM)]
    pub dim: u32,

    /// Side length of the tile grid
    #[arg(short, long, default_value_t = DEFAULT_FACTOR)]
    pub factor: u32,

    /// Output file stem; the thumbnail is written to <FNAME>.jpg
    #[arg(short = 'n', long, default_value = DEFAULT_TILE_NAME)]
    pub fname: String,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl CompositorCli {
    /// Output path, `<fname>.jpg` relative to the working directory
    pub fn output_path(&self) -> PathBuf {
        PathBuf::from(format!("{}.{OUTPUT_EXTENSION}", self.fname))
    }

    /// Library configuration for these arguments
    pub fn config(&self) -> CompositorConfig {
        CompositorConfig {
            base_dir: self.base_dir.clone(),
            dim: self.dim,
            factor: self.factor,
            output: self.output_path(),
        }
    }

    /// Composite the gallery and write the thumbnail
    ///
    /// # Errors
    ///
    /// Returns an error if the parameters are invalid, any tile is missing or
    /// undecodable, or the output cannot be written
    // Allow print for the completion summary
    #[allow(clippy::print_stderr)]
    pub fn run(&self) -> Result<PathBuf> {
        let config = self.config();
        let layout = config.canvas_layout()?;
        let progress = CellProgress::for_run("paste", layout.grid().cell_count(), self.quiet);

        write_composite(&config, &progress)?;

        progress.finish("done");
        if !self.quiet {
            eprintln!(
                "Wrote {}x{} thumbnail ({}px tiles) to {}",
                layout.dim(),
                layout.dim(),
                layout.tile_dim(),
                config.output.display()
            );
        }
        Ok(config.output)
    }
}
