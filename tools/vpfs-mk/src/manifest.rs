//! vpfs.toml manifest parsing
//!
//! ```toml
//! format = 1               # or "vpc8" / "pcm" / "adpcm"
//! output = "prompts.bin"
//!
//! [[prompts]]
//! path = "prompts/power_on.vpc"
//!
//! [[prompts]]
//! path = "prompts/beep.pcm"
//! format = "pcm"           # per-entry override
//! ```
//!
//! Relative paths are resolved against the manifest's directory.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use vpfs::FormatCode;

use crate::error::PackError;

/// vpfs.toml manifest structure
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VpfsManifest {
    /// Format applied to every prompt without its own override
    #[serde(default)]
    pub format: Option<FormatSpec>,

    /// Output container path
    #[serde(default)]
    pub output: Option<String>,

    /// Prompts in container order
    #[serde(default)]
    pub prompts: Vec<PromptEntry>,
}

/// Single prompt entry
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PromptEntry {
    pub path: String,

    #[serde(default)]
    pub format: Option<FormatSpec>,
}

/// Format given either as its numeric code or by name
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum FormatSpec {
    Code(u32),
    Name(String),
}

impl FormatSpec {
    pub fn resolve(&self) -> Result<FormatCode, PackError> {
        match self {
            FormatSpec::Code(code) => FormatCode::try_from(*code)
                .map_err(|_| PackError::Usage(format!("Unsupported format: {}", code))),
            FormatSpec::Name(name) => name.parse().map_err(PackError::Usage),
        }
    }
}

/// A loaded manifest plus the directory its paths are relative to
#[derive(Debug)]
pub struct ManifestContext {
    pub manifest: VpfsManifest,
    pub base_dir: PathBuf,
}

impl ManifestContext {
    pub fn resolve(&self, path: &str) -> PathBuf {
        self.base_dir.join(path)
    }
}

impl VpfsManifest {
    /// Parse manifest from string
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}

/// Load manifest from file
pub fn load_manifest(path: &Path) -> Result<ManifestContext, PackError> {
    let content = std::fs::read_to_string(path).map_err(|source| PackError::ManifestRead {
        path: path.to_path_buf(),
        source,
    })?;
    let manifest = VpfsManifest::parse(&content).map_err(|source| PackError::ManifestParse {
        path: path.to_path_buf(),
        source,
    })?;

    let base_dir = path
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_default();

    tracing::debug!(
        "Loaded manifest {} ({} prompts)",
        path.display(),
        manifest.prompts.len()
    );

    Ok(ManifestContext { manifest, base_dir })
}
