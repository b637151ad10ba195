//! Input gathering
//!
//! Every input is checked and read in full before the output is opened, so a
//! missing file aborts the run without touching the output path.

use std::io;
use std::path::Path;
use vpfs::VpfsEntry;

use crate::config::InputSpec;
use crate::error::PackError;

fn input_not_found(path: &Path, source: io::Error) -> PackError {
    PackError::InputNotFound {
        path: path.to_path_buf(),
        source,
    }
}

/// Read a single prompt file, which must be a regular file
pub fn read_input(path: &Path) -> Result<Vec<u8>, PackError> {
    let metadata = std::fs::metadata(path).map_err(|e| input_not_found(path, e))?;
    if !metadata.is_file() {
        return Err(input_not_found(
            path,
            io::Error::new(io::ErrorKind::InvalidInput, "not a regular file"),
        ));
    }
    std::fs::read(path).map_err(|e| input_not_found(path, e))
}

/// Read every input, in order, into container entries
pub fn gather_inputs(inputs: &[InputSpec]) -> Result<Vec<VpfsEntry>, PackError> {
    inputs
        .iter()
        .map(|input| {
            let payload = read_input(&input.path)?;
            tracing::debug!(
                "processing input file: {} ({} bytes, {})",
                input.path.display(),
                payload.len(),
                input.format.description()
            );
            Ok(VpfsEntry::new(input.format, payload))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;
    use vpfs::FormatCode;

    #[test]
    fn test_gather_preserves_order_and_bytes() {
        let dir = tempdir().unwrap();
        let a = dir.path().join("a.vpc");
        let b = dir.path().join("b.vpc");
        std::fs::write(&a, [1, 2, 3]).unwrap();
        std::fs::write(&b, [4, 5]).unwrap();

        let entries = gather_inputs(&[
            InputSpec {
                path: b.clone(),
                format: FormatCode::Vpc8,
            },
            InputSpec {
                path: a.clone(),
                format: FormatCode::Adpcm,
            },
        ])
        .unwrap();

        assert_eq!(entries[0], VpfsEntry::new(FormatCode::Vpc8, vec![4, 5]));
        assert_eq!(entries[1], VpfsEntry::new(FormatCode::Adpcm, vec![1, 2, 3]));
    }

    #[test]
    fn test_missing_input() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("missing.vpc");
        let err = gather_inputs(&[InputSpec {
            path: missing.clone(),
            format: FormatCode::Vpc8,
        }])
        .unwrap_err();

        match err {
            PackError::InputNotFound { path, .. } => assert_eq!(path, missing),
            other => panic!("expected InputNotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_directory_is_not_an_input() {
        let dir = tempdir().unwrap();
        assert!(matches!(
            read_input(dir.path()),
            Err(PackError::InputNotFound { .. })
        ));
    }
}
