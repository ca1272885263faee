//! CLI entry point for the tessellation pattern generator

use clap::Parser;
use tessellate::io::cli::{Cli, PatternWriter};

fn main() -> tessellate::Result<()> {
    let cli = Cli::parse();
    let writer = PatternWriter::new(cli);
    writer.run()
}
