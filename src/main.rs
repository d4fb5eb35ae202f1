//! CLI entry point for the stage compiler

use clap::Parser;
use tilestage::io::cli::{Cli, FileProcessor};

fn main() -> tilestage::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let mut processor = FileProcessor::new(cli);
    processor.process()
}
