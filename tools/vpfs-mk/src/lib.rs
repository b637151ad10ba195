//! vpfs-mk library
//!
//! Everything the `vpfs-mk` binary does, split out so it can be tested without
//! spawning a process: argument handling, the optional `vpfs.toml` manifest,
//! input gathering, packing and container inspection.

pub mod args;
pub mod config;
pub mod error;
pub mod gather;
pub mod inspect;
pub mod manifest;
pub mod pack;

pub use args::Cli;
pub use config::{InputSpec, PackConfig};
pub use error::PackError;
pub use inspect::{InspectReport, inspect};
pub use pack::{PackSummary, execute};
