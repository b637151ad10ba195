//! vpfs-mk - Voice Prompt File System builder
//!
//! Packs VPC8, raw PCM or ADPCM prompt files into one VPFS container for
//! firmware images.
//!
//! # Usage
//!
//! ```bash
//! # Pack two VPC8 prompts
//! vpfs-mk -f 1 -o prompts.bin power_on.vpc power_off.vpc
//!
//! # Same, with per-file logging
//! vpfs-mk -f 1 -o prompts.bin -v 1 power_on.vpc power_off.vpc
//!
//! # Build from a manifest
//! vpfs-mk -m vpfs.toml
//!
//! # List an existing container
//! vpfs-mk -l prompts.bin
//! ```
//!
//! Exit code 0 on success (and for `-h`), 1 on any error.

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use tracing::Level;
use tracing_subscriber::EnvFilter;

use vpfs_mk::args::verbosity_level;
use vpfs_mk::{Cli, PackConfig, PackError};

fn init_logging(level: Level) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(level.into())
                .from_env_lossy(),
        )
        .init();
}

fn parse_args() -> Cli {
    match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => err.exit(),
            _ => {
                err.print().ok();
                std::process::exit(1);
            }
        },
    }
}

fn run(cli: &Cli) -> Result<(), PackError> {
    if let Some(container) = &cli.list {
        init_logging(verbosity_level(cli.verbose));
        let report = vpfs_mk::inspect(container)?;
        print!("{}", report);
        return Ok(());
    }

    let config = PackConfig::from_cli(cli)?;
    init_logging(config.log_level());
    tracing::debug!("verbose: {}", config.verbosity);
    vpfs_mk::execute(&config)?;
    Ok(())
}

fn main() -> Result<()> {
    let cli = parse_args();

    if let Err(err) = run(&cli) {
        if err.is_usage() {
            eprintln!("{}\n", err);
            Cli::command().print_help().ok();
            std::process::exit(1);
        }
        return Err(err).context("vpfs-mk failed");
    }

    Ok(())
}
