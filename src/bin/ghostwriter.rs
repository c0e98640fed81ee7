//! Ghostwriter CLI binary.

use std::io::Write;

use anyhow::Context;
use clap::Parser;
use env_logger::Builder;

use ghostwriter::cli::args::*;
use ghostwriter::cli::commands::*;

fn main() -> anyhow::Result<()> {
    let args = GhostwriterArgs::parse();
    let config = args.config().context("invalid configuration")?;

    Builder::new()
        .filter_level(args.log_level(&config)?)
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();

    execute_command(args, config)?;
    Ok(())
}
