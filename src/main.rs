//! CLI entry point for the dungeon generator

use clap::Parser;
use donjon::io::cli::{BatchGenerator, Cli};
use simplelog::{ColorChoice, ConfigBuilder, LevelFilter, TermLogger, TerminalMode};

fn main() -> donjon::Result<()> {
    let cli = Cli::parse();

    TermLogger::init(
        cli.log_level(),
        ConfigBuilder::new()
            .set_target_level(LevelFilter::Off)
            .set_location_level(LevelFilter::Off)
            .build(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )?;

    let mut generator = BatchGenerator::new(cli);
    generator.run()?;
    Ok(())
}
