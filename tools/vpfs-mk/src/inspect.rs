//! Container inspection (`vpfs-mk --list`)

use std::fmt;
use std::path::{Path, PathBuf};
use vpfs::{FormatCode, VpfsError, VpfsHeader, VpfsReader, version_parts};
use xxhash_rust::xxh3::xxh3_64;

use crate::error::PackError;
use crate::gather::read_input;

/// One entry as listed by the inspector
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryInfo {
    pub index: usize,
    pub offset: usize,
    pub format_code: u32,
    pub payload_len: usize,
    /// xxh3-64 of the payload, for diffing prompt banks
    pub hash: u64,
}

impl EntryInfo {
    pub fn format(&self) -> Option<FormatCode> {
        FormatCode::try_from(self.format_code).ok()
    }
}

#[derive(Debug, Clone)]
pub struct InspectReport {
    pub path: PathBuf,
    pub header: VpfsHeader,
    pub entries: Vec<EntryInfo>,
}

/// Read and scan a container, failing on the first malformed frame
pub fn inspect(path: &Path) -> Result<InspectReport, PackError> {
    let data = read_input(path)?;
    let invalid = |source: VpfsError| PackError::InvalidContainer {
        path: path.to_path_buf(),
        source,
    };

    let reader = VpfsReader::new(&data).map_err(invalid)?;
    let header = *reader.header();

    let entries = reader
        .map(|entry| {
            entry.map(|e| EntryInfo {
                index: e.index,
                offset: e.offset,
                format_code: e.format_code(),
                payload_len: e.payload.len(),
                hash: xxh3_64(e.payload),
            })
        })
        .collect::<Result<Vec<_>, _>>()
        .map_err(invalid)?;

    Ok(InspectReport {
        path: path.to_path_buf(),
        header,
        entries,
    })
}

impl fmt::Display for InspectReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (major, minor) = version_parts(self.header.version);
        writeln!(f, "{}", self.path.display())?;
        writeln!(f, "  Version: {}.{}", major, minor)?;
        writeln!(f, "  Total size: {} bytes", self.header.total_size)?;
        writeln!(f, "  Entries: {}", self.entries.len())?;

        for entry in &self.entries {
            let (name, description) = entry
                .format()
                .map(|code| (code.name(), code.description()))
                .unwrap_or(("?", "unknown"));
            writeln!(
                f,
                "  [{:>3}] @{:<8} format {} {:<5} ({}) {:>8} bytes  xxh3 {:016x}",
                entry.index,
                entry.offset,
                entry.format_code,
                name,
                description,
                entry.payload_len,
                entry.hash
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;
    use vpfs::{VpfsEntry, encode_vpfs};

    #[test]
    fn test_inspect_container() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bank.bin");
        let entries = [
            VpfsEntry::new(FormatCode::Vpc8, vec![0xAA; 5]),
            VpfsEntry::new(FormatCode::Vpc8, vec![0xBB; 3]),
        ];
        std::fs::write(&path, encode_vpfs(&entries).unwrap()).unwrap();

        let report = inspect(&path).unwrap();
        assert_eq!(report.header.total_size, 24);
        assert_eq!(report.entries.len(), 2);
        assert_eq!(report.entries[1].offset, 25);
        assert_eq!(report.entries[1].payload_len, 3);
        assert_eq!(report.entries[0].hash, xxh3_64(&[0xAA; 5]));
        assert_eq!(report.entries[0].format(), Some(FormatCode::Vpc8));

        let text = report.to_string();
        assert!(text.contains("Version: 1.0"));
        assert!(text.contains("Entries: 2"));
        assert!(text.contains("format 1 vpc8"));
    }

    #[test]
    fn test_inspect_rejects_garbage() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("junk.bin");
        std::fs::write(&path, b"not a prompt bank").unwrap();

        assert!(matches!(
            inspect(&path),
            Err(PackError::InvalidContainer {
                source: VpfsError::InvalidSignature(_),
                ..
            })
        ));
    }
}
