//! VPFS header types
//!
//! Both headers are POD: fixed size, little-endian u32 fields, no padding.
//!
//! # Global header
//! ```text
//! 0x00: signature "VPFS"
//! 0x04: version u32 LE
//! 0x08: total_size u32 LE
//! ```
//!
//! # Entry header
//! ```text
//! 0x00: frame_length u32 LE
//! 0x04: format_code u32 LE
//! ```

use crate::{VPFS_FORMAT_CODE_SIZE, VPFS_SIGNATURE, VPFS_VERSION};

#[inline]
fn read_u32_le(bytes: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes([
        bytes[offset],
        bytes[offset + 1],
        bytes[offset + 2],
        bytes[offset + 3],
    ])
}

/// Container header (12 bytes)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(C)]
pub struct VpfsHeader {
    pub signature: [u8; 4],
    pub version: u32,
    pub total_size: u32,
}

impl VpfsHeader {
    pub const SIZE: usize = 12;

    /// Header for the current format revision
    pub fn new(total_size: u32) -> Self {
        Self {
            signature: VPFS_SIGNATURE,
            version: VPFS_VERSION,
            total_size,
        }
    }

    pub fn has_valid_signature(&self) -> bool {
        self.signature == VPFS_SIGNATURE
    }

    /// Write header to bytes
    pub fn to_bytes(&self) -> [u8; Self::SIZE] {
        let mut bytes = [0u8; Self::SIZE];
        bytes[0..4].copy_from_slice(&self.signature);
        bytes[4..8].copy_from_slice(&self.version.to_le_bytes());
        bytes[8..12].copy_from_slice(&self.total_size.to_le_bytes());
        bytes
    }

    /// Read header from bytes
    ///
    /// Only checks length; signature and version are checked by the reader.
    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        if bytes.len() < Self::SIZE {
            return None;
        }
        Some(Self {
            signature: [bytes[0], bytes[1], bytes[2], bytes[3]],
            version: read_u32_le(bytes, 4),
            total_size: read_u32_le(bytes, 8),
        })
    }
}

/// Per-entry frame header (8 bytes)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(C)]
pub struct VpfsEntryHeader {
    /// Payload length + 4 (the format code); excludes this field itself
    pub frame_length: u32,
    pub format_code: u32,
}

impl VpfsEntryHeader {
    pub const SIZE: usize = 8;

    /// Header for a payload of `payload_len` bytes
    ///
    /// Lengths past 4 GiB wrap; that is the format's ceiling.
    pub fn new(payload_len: usize, format_code: u32) -> Self {
        Self {
            frame_length: (payload_len as u32).wrapping_add(VPFS_FORMAT_CODE_SIZE),
            format_code,
        }
    }

    /// Payload bytes that follow this header, or `None` if the frame is malformed
    pub fn payload_len(&self) -> Option<usize> {
        self.frame_length
            .checked_sub(VPFS_FORMAT_CODE_SIZE)
            .map(|len| len as usize)
    }

    /// Write header to bytes
    pub fn to_bytes(&self) -> [u8; Self::SIZE] {
        let mut bytes = [0u8; Self::SIZE];
        bytes[0..4].copy_from_slice(&self.frame_length.to_le_bytes());
        bytes[4..8].copy_from_slice(&self.format_code.to_le_bytes());
        bytes
    }

    /// Read header from bytes
    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        if bytes.len() < Self::SIZE {
            return None;
        }
        Some(Self {
            frame_length: read_u32_le(bytes, 0),
            format_code: read_u32_le(bytes, 4),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_layout() {
        let bytes = VpfsHeader::new(14).to_bytes();
        assert_eq!(
            bytes,
            [b'V', b'P', b'F', b'S', 0x00, 0x00, 0x01, 0x00, 0x0E, 0x00, 0x00, 0x00]
        );
    }

    #[test]
    fn test_header_roundtrip() {
        let header = VpfsHeader::new(0xDEAD_BEEF);
        let decoded = VpfsHeader::from_bytes(&header.to_bytes()).unwrap();
        assert_eq!(decoded, header);
        assert!(decoded.has_valid_signature());
    }

    #[test]
    fn test_header_too_small() {
        assert!(VpfsHeader::from_bytes(&[0; 11]).is_none());
        assert!(VpfsEntryHeader::from_bytes(&[0; 7]).is_none());
    }

    #[test]
    fn test_entry_header_layout() {
        let header = VpfsEntryHeader::new(10, 2);
        assert_eq!(header.frame_length, 14);
        assert_eq!(
            header.to_bytes(),
            [0x0E, 0x00, 0x00, 0x00, 0x02, 0x00, 0x00, 0x00]
        );
        assert_eq!(header.payload_len(), Some(10));
    }

    #[test]
    fn test_entry_header_empty_payload() {
        let header = VpfsEntryHeader::new(0, 1);
        assert_eq!(header.frame_length, 4);
        assert_eq!(header.payload_len(), Some(0));
    }

    #[test]
    fn test_entry_header_malformed_length() {
        let header = VpfsEntryHeader {
            frame_length: 3,
            format_code: 1,
        };
        assert_eq!(header.payload_len(), None);
    }

    #[test]
    fn test_le_byte_order() {
        let header = VpfsEntryHeader {
            frame_length: 0x0403_0201,
            format_code: 0x0807_0605,
        };
        assert_eq!(header.to_bytes(), [1, 2, 3, 4, 5, 6, 7, 8]);
    }
}
