//! Command-line arguments

use clap::Parser;
use std::path::PathBuf;
use tracing::Level;

/// Build a VPFS (Voice Prompt File System) container from prompt files
#[derive(Debug, Parser)]
#[command(name = "vpfs-mk")]
#[command(about = "Build a VPFS voice prompt container")]
#[command(version)]
pub struct Cli {
    /// Input files format [1:VPC8, 2:RawPCM, 3:ADPCM]
    #[arg(short = 'f', long = "format", value_name = "FORMAT")]
    pub format: Option<String>,

    /// Binary file system to write
    #[arg(short = 'o', long = "output", value_name = "OUTPUT_FILE")]
    pub output: Option<PathBuf>,

    /// Verbose/debug level (0: summary, 1: per-file, 2: sizes and headers)
    #[arg(short = 'v', long = "verbose", value_name = "LEVEL", default_value_t = 0)]
    pub verbose: u8,

    /// Read format, output and prompt list from a vpfs.toml manifest
    #[arg(short = 'm', long = "manifest", value_name = "MANIFEST")]
    pub manifest: Option<PathBuf>,

    /// Print the entries of an existing container instead of packing
    #[arg(
        short = 'l',
        long = "list",
        value_name = "CONTAINER",
        conflicts_with_all = ["format", "output", "manifest", "inputs"]
    )]
    pub list: Option<PathBuf>,

    /// Prompt files to pack, in container order
    #[arg(value_name = "FILE")]
    pub inputs: Vec<PathBuf>,
}

/// Default log level for a `-v` value
pub fn verbosity_level(verbose: u8) -> Level {
    match verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    }
}
