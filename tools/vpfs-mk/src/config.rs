//! Pack configuration
//!
//! Merges command-line flags with an optional manifest into one value that the
//! packer consumes. Flags win over the manifest; command-line inputs are
//! appended after the manifest's prompts.

use std::path::PathBuf;
use tracing::Level;
use vpfs::FormatCode;

use crate::args::{Cli, verbosity_level};
use crate::error::PackError;
use crate::manifest::{self, FormatSpec, ManifestContext};

/// One input file and the format code stamped on its frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputSpec {
    pub path: PathBuf,
    pub format: FormatCode,
}

/// Everything needed for one packing run
#[derive(Debug, Clone)]
pub struct PackConfig {
    pub format: FormatCode,
    pub output: PathBuf,
    pub inputs: Vec<InputSpec>,
    /// `-v` level; drives the default log filter
    pub verbosity: u8,
}

fn parse_format(value: &str) -> Result<FormatCode, PackError> {
    match value.trim().parse::<u32>() {
        Ok(code) => FormatCode::try_from(code)
            .map_err(|_| PackError::Usage(format!("Unsupported format: {}", code))),
        Err(_) => value.parse().map_err(PackError::Usage),
    }
}

impl PackConfig {
    /// Default log level for this run
    pub fn log_level(&self) -> Level {
        verbosity_level(self.verbosity)
    }

    /// Build from parsed arguments, loading the manifest if one is given
    pub fn from_cli(cli: &Cli) -> Result<Self, PackError> {
        let ctx = cli
            .manifest
            .as_deref()
            .map(manifest::load_manifest)
            .transpose()?;
        Self::merge(cli, ctx.as_ref())
    }

    /// Merge flags with an already-loaded manifest
    ///
    /// Checks run in a fixed order: format, output, then the file list.
    pub fn merge(cli: &Cli, ctx: Option<&ManifestContext>) -> Result<Self, PackError> {
        let format = match (&cli.format, ctx.and_then(|c| c.manifest.format.as_ref())) {
            (Some(flag), _) => parse_format(flag)?,
            (None, Some(spec)) => spec.resolve()?,
            (None, None) => return Err(PackError::Usage("format parameter missing".into())),
        };

        let output = match (&cli.output, ctx) {
            (Some(path), _) => path.clone(),
            (None, Some(ctx)) => match &ctx.manifest.output {
                Some(path) => ctx.resolve(path),
                None => return Err(PackError::Usage("output file parameter missing".into())),
            },
            (None, None) => return Err(PackError::Usage("output file parameter missing".into())),
        };

        let mut inputs = Vec::new();
        if let Some(ctx) = ctx {
            for prompt in &ctx.manifest.prompts {
                let prompt_format = prompt
                    .format
                    .as_ref()
                    .map(FormatSpec::resolve)
                    .transpose()?
                    .unwrap_or(format);
                inputs.push(InputSpec {
                    path: ctx.resolve(&prompt.path),
                    format: prompt_format,
                });
            }
        }
        inputs.extend(cli.inputs.iter().map(|path| InputSpec {
            path: path.clone(),
            format,
        }));

        if inputs.is_empty() {
            return Err(PackError::Usage("no input files".into()));
        }

        Ok(Self {
            format,
            output,
            inputs,
            verbosity: cli.verbose,
        })
    }
}
