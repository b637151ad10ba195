//! Packing: gather inputs, then stream the container to the output file

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use vpfs::{VpfsEntry, VpfsError, VpfsHeader, container_size, write_vpfs};

use crate::config::PackConfig;
use crate::error::PackError;
use crate::gather::gather_inputs;

/// Result of a successful run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackSummary {
    pub output: PathBuf,
    pub entry_count: usize,
    /// Value stored in the header's `total_size` field
    pub total_size: u32,
    /// Bytes written, header included
    pub container_bytes: usize,
}

/// Run one packing job
///
/// The output file is only created once every input has been read. If writing
/// fails midway the partial file is left in place.
pub fn execute(config: &PackConfig) -> Result<PackSummary, PackError> {
    tracing::info!("files_format: {}", config.format);
    tracing::info!("output_file: {}", config.output.display());

    let entries = gather_inputs(&config.inputs)?;
    log_layout(&entries);

    let total_size = container_size(&entries);
    write_output(config, &entries)?;

    let summary = PackSummary {
        output: config.output.clone(),
        entry_count: entries.len(),
        total_size,
        container_bytes: VpfsHeader::SIZE + total_size as usize,
    };
    tracing::info!(
        "Packed {} prompts into {} ({} bytes)",
        summary.entry_count,
        summary.output.display(),
        summary.container_bytes
    );
    Ok(summary)
}

fn log_layout(entries: &[VpfsEntry]) {
    tracing::debug!("nb input files: {}", entries.len());

    let payload_bytes: usize = entries.iter().map(|e| e.payload.len()).sum();
    let header = VpfsHeader::new(container_size(entries));
    tracing::trace!("total_files_size: {}", payload_bytes);
    tracing::trace!("fs_size: {}", header.total_size);
    tracing::trace!("header bytes: {:02x?}", header.to_bytes());
}

fn write_output(config: &PackConfig, entries: &[VpfsEntry]) -> Result<(), PackError> {
    let output_error = |source: VpfsError| PackError::Output {
        path: config.output.clone(),
        source,
    };

    let file = File::create(&config.output).map_err(|e| output_error(e.into()))?;
    let mut writer = BufWriter::new(file);
    write_vpfs(&mut writer, entries).map_err(output_error)
}
