//! VPFS encoder
//!
//! The global header carries the size of everything after it, so the encoder
//! sums every frame before the first byte is written, then emits header and
//! frames in a single pass.

use std::io::Write;

use crate::serialization::write_header;
use crate::{FormatCode, VpfsEntryHeader, VpfsError, VpfsHeader};

/// One prompt to pack: an opaque payload tagged with its format code
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VpfsEntry {
    /// Stored verbatim; callers validate it against [`FormatCode`] beforehand
    pub format_code: u32,
    pub payload: Vec<u8>,
}

impl VpfsEntry {
    pub fn new(format_code: impl Into<u32>, payload: Vec<u8>) -> Self {
        Self {
            format_code: format_code.into(),
            payload,
        }
    }

    /// Known codec of this entry, if the code is one of the enumerated values
    pub fn format(&self) -> Option<FormatCode> {
        FormatCode::try_from(self.format_code).ok()
    }

    /// Frame header for this entry
    pub fn header(&self) -> VpfsEntryHeader {
        VpfsEntryHeader::new(self.payload.len(), self.format_code)
    }

    /// Value stored in the frame's `frame_length` field
    pub fn frame_length(&self) -> u32 {
        self.header().frame_length
    }

    /// Bytes this entry occupies in the container (8-byte header + payload)
    pub fn frame_size(&self) -> u32 {
        self.frame_length()
            .wrapping_add(VpfsEntryHeader::SIZE as u32 - crate::VPFS_FORMAT_CODE_SIZE)
    }
}

/// Compute the `total_size` header field: the sum of every frame size
///
/// Wraps modulo 2^32 like the on-disk field.
pub fn container_size(entries: &[VpfsEntry]) -> u32 {
    entries
        .iter()
        .fold(0u32, |total, entry| total.wrapping_add(entry.frame_size()))
}

/// Write a complete VPFS container to `w`
///
/// Fails with [`VpfsError::Empty`] before writing anything if `entries` is
/// empty. On an I/O error the sink may hold a partial container; this function
/// does not truncate or roll back.
pub fn write_vpfs<W: Write>(w: &mut W, entries: &[VpfsEntry]) -> Result<(), VpfsError> {
    if entries.is_empty() {
        return Err(VpfsError::Empty);
    }

    let header = VpfsHeader::new(container_size(entries));
    write_header(w, &header)?;

    for entry in entries {
        write_header(w, &entry.header())?;
        w.write_all(&entry.payload)?;
    }

    w.flush()?;
    Ok(())
}

/// Encode a complete VPFS container into memory
pub fn encode_vpfs(entries: &[VpfsEntry]) -> Result<Vec<u8>, VpfsError> {
    let capacity = VpfsHeader::SIZE + container_size(entries) as usize;
    let mut bytes = Vec::with_capacity(capacity);
    write_vpfs(&mut bytes, entries)?;
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn u32_at(bytes: &[u8], offset: usize) -> u32 {
        u32::from_le_bytes(bytes[offset..offset + 4].try_into().unwrap())
    }

    #[test]
    fn test_single_pcm_file() {
        let entries = [VpfsEntry::new(FormatCode::RawPcm, vec![0; 10])];
        let bytes = encode_vpfs(&entries).unwrap();

        assert_eq!(bytes.len(), 30);
        assert_eq!(&bytes[0..4], b"VPFS");
        assert_eq!(&bytes[4..8], &[0x00, 0x00, 0x01, 0x00]);
        assert_eq!(&bytes[8..12], &[0x0E, 0x00, 0x00, 0x00]);
        assert_eq!(&bytes[12..16], &[0x0E, 0x00, 0x00, 0x00]);
        assert_eq!(&bytes[16..20], &[0x02, 0x00, 0x00, 0x00]);
        assert!(bytes[20..].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_two_vpc8_files() {
        let entries = [
            VpfsEntry::new(FormatCode::Vpc8, vec![0xAA; 5]),
            VpfsEntry::new(FormatCode::Vpc8, vec![0xBB; 3]),
        ];
        let bytes = encode_vpfs(&entries).unwrap();

        assert_eq!(u32_at(&bytes, 8), 24);
        assert_eq!(bytes.len(), 36);

        // First frame
        assert_eq!(u32_at(&bytes, 12), 9);
        assert_eq!(u32_at(&bytes, 16), 1);
        assert_eq!(&bytes[20..25], &[0xAA; 5]);

        // Second frame starts right after, no padding
        assert_eq!(u32_at(&bytes, 25), 7);
        assert_eq!(u32_at(&bytes, 29), 1);
        assert_eq!(&bytes[33..36], &[0xBB; 3]);
    }

    #[test]
    fn test_total_size_matches_frames() {
        let entries: Vec<VpfsEntry> = (0..6)
            .map(|i| VpfsEntry::new(FormatCode::Adpcm, vec![i as u8; i * 7]))
            .collect();
        let bytes = encode_vpfs(&entries).unwrap();

        let expected: usize = entries.iter().map(|e| e.payload.len() + 8).sum();
        assert_eq!(u32_at(&bytes, 8) as usize, expected);
        assert_eq!(bytes.len(), VpfsHeader::SIZE + expected);
    }

    #[test]
    fn test_per_entry_format_codes() {
        let entries = [
            VpfsEntry::new(FormatCode::Vpc8, vec![1]),
            VpfsEntry::new(FormatCode::Adpcm, vec![2]),
        ];
        let bytes = encode_vpfs(&entries).unwrap();
        assert_eq!(u32_at(&bytes, 16), 1);
        assert_eq!(u32_at(&bytes, 25), 3);
    }

    #[test]
    fn test_empty_payload_entry() {
        let entries = [VpfsEntry::new(FormatCode::Vpc8, Vec::new())];
        let bytes = encode_vpfs(&entries).unwrap();
        assert_eq!(bytes.len(), 20);
        assert_eq!(u32_at(&bytes, 8), 8);
        assert_eq!(u32_at(&bytes, 12), 4);
    }

    #[test]
    fn test_empty_list_rejected() {
        let mut sink = Vec::new();
        let result = write_vpfs(&mut sink, &[]);
        assert!(matches!(result, Err(VpfsError::Empty)));
        assert!(sink.is_empty(), "Nothing should be written for an empty list");
    }

    #[test]
    fn test_encoder_does_not_validate_format_code() {
        let entries = [VpfsEntry::new(0xFFFF_FFFFu32, vec![7])];
        let bytes = encode_vpfs(&entries).unwrap();
        assert_eq!(u32_at(&bytes, 16), 0xFFFF_FFFF);
        assert!(entries[0].format().is_none());
    }

    #[test]
    fn test_frame_accessors() {
        let entry = VpfsEntry::new(FormatCode::RawPcm, vec![0; 100]);
        assert_eq!(entry.frame_length(), 104);
        assert_eq!(entry.frame_size(), 108);
        assert_eq!(entry.format(), Some(FormatCode::RawPcm));
    }

    struct FailingSink {
        accepted: usize,
        limit: usize,
    }

    impl Write for FailingSink {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            if self.accepted + buf.len() > self.limit {
                return Err(std::io::Error::other("sink full"));
            }
            self.accepted += buf.len();
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_sink_failure_surfaces_io_error() {
        let entries = [VpfsEntry::new(FormatCode::RawPcm, vec![0; 64])];
        let mut sink = FailingSink {
            accepted: 0,
            limit: 16,
        };
        let result = write_vpfs(&mut sink, &entries);
        assert!(matches!(result, Err(VpfsError::Io(_))));
        // Header went out before the failure; no rollback
        assert_eq!(sink.accepted, 12);
    }
}
