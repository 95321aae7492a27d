//! CLI entry point for sampling a source folder into a gallery layout

use clap::Parser;
use gallerytile::io::cli::SamplerCli;

fn main() -> gallerytile::Result<()> {
    let cli = SamplerCli::parse();
    cli.run()?;
    Ok(())
}
