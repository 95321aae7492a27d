//! Grid geometry shared by the sampler and the compositor
//!
//! A gallery of factor `F` is stored as `<base>/<F>/<row>/<col>.jpg` for every
//! `row, col` in `[0, F)`. The compositor lays the same grid over a square
//! canvas using tiles of `floor(dim / F) + 1` pixels.

use crate::io::configuration::TILE_EXTENSION;
use crate::io::error::{Result, invalid_parameter};
use std::path::{Path, PathBuf};

/// One cell of the tile grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GridCell {
    /// Row index, also the second directory level
    pub row: u32,
    /// Column index, also the tile file stem
    pub col: u32,
}

impl GridCell {
    /// Create a cell at `(row, col)`
    pub const fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }
}

/// Dense `factor × factor` grid of cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    factor: u32,
}

impl GridLayout {
    /// Create a grid of side `factor`
    ///
    /// # Errors
    ///
    /// Returns an error if `factor` is zero
    pub fn new(factor: u32) -> Result<Self> {
        if factor == 0 {
            return Err(invalid_parameter(
                "factor",
                &factor,
                &"grid factor must be at least 1",
            ));
        }
        Ok(Self { factor })
    }

    /// Side length of the grid
    pub const fn factor(&self) -> u32 {
        self.factor
    }

    /// Total number of cells, `factor²`
    pub const fn cell_count(&self) -> usize {
        self.factor as usize * self.factor as usize
    }

    /// All cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = GridCell> + use<> {
        let factor = self.factor;
        (0..factor).flat_map(move |row| (0..factor).map(move |col| GridCell::new(row, col)))
    }

    /// `<base>/<factor>`
    pub fn level_dir(&self, base: &Path) -> PathBuf {
        base.join(self.factor.to_string())
    }

    /// `<base>/<factor>/<row>`
    pub fn row_dir(&self, base: &Path, row: u32) -> PathBuf {
        self.level_dir(base).join(row.to_string())
    }

    /// `<base>/<factor>/<row>/<col>.jpg`
    pub fn cell_path(&self, base: &Path, cell: GridCell) -> PathBuf {
        self.row_dir(base, cell.row).join(format!("{}.{TILE_EXTENSION}", cell.col))
    }

    /// Index into a list of `len` sources for `cell`, cycling when `len < factor²`
    ///
    /// Returns `None` when `len` is zero
    pub const fn source_index(&self, cell: GridCell, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        let linear = cell.row as usize * self.factor as usize + cell.col as usize;
        Some(linear % len)
    }
}

/// Pixel geometry of the grid laid over a `dim × dim` canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasLayout {
    grid: GridLayout,
    dim: u32,
}

impl CanvasLayout {
    /// Create the canvas geometry for `grid` on a `dim × dim` canvas
    ///
    /// # Errors
    ///
    /// Returns an error if `dim` is zero
    pub fn new(grid: GridLayout, dim: u32) -> Result<Self> {
        if dim == 0 {
            return Err(invalid_parameter(
                "dim",
                &dim,
                &"canvas dimension must be at least 1",
            ));
        }
        Ok(Self { grid, dim })
    }

    /// Underlying grid
    pub const fn grid(&self) -> GridLayout {
        self.grid
    }

    /// Canvas side length in pixels
    pub const fn dim(&self) -> u32 {
        self.dim
    }

    /// Tile side length, `floor(dim / factor) + 1`
    ///
    /// The extra pixel means `tile_dim * factor` can exceed `dim`; the last
    /// row and column of tiles overhang the canvas and get clipped on paste.
    pub const fn tile_dim(&self) -> u32 {
        self.dim / self.grid.factor + 1
    }

    /// Top-left pixel `(x, y)` of the tile for `cell`
    pub const fn tile_origin(&self, cell: GridCell) -> (u64, u64) {
        let tile = self.tile_dim() as u64;
        (cell.col as u64 * tile, cell.row as u64 * tile)
    }

    /// The cell whose tile covers pixel `(x, y)`, if the pixel is on the canvas
    ///
    /// `tile_dim * factor > dim`, so every on-canvas pixel maps into the grid
    pub const fn pixel_to_cell(&self, x: u32, y: u32) -> Option<GridCell> {
        if x >= self.dim || y >= self.dim {
            return None;
        }
        let tile = self.tile_dim();
        Some(GridCell::new(y / tile, x / tile))
    }
}
