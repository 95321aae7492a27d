//! CLI entry point for stitching a gallery layout into one thumbnail

use clap::Parser;
use gallerytile::io::cli::CompositorCli;

fn main() -> gallerytile::Result<()> {
    let cli = CompositorCli::parse();
    cli.run()?;
    Ok(())
}
