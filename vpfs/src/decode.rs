//! Sequential VPFS reader
//!
//! Walks frames front to back the same way firmware does. There is no index
//! and no attempt to resynchronise after a malformed frame.

use crate::serialization::read_header;
use crate::{VPFS_VERSION, VpfsEntry, VpfsEntryHeader, VpfsError, VpfsHeader};

/// Borrowed view of one entry inside a container
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VpfsEntryRef<'a> {
    /// Position in the container (0-based)
    pub index: usize,
    /// Byte offset of the frame header from the start of the container
    pub offset: usize,
    pub header: VpfsEntryHeader,
    pub payload: &'a [u8],
}

impl VpfsEntryRef<'_> {
    pub fn format_code(&self) -> u32 {
        self.header.format_code
    }

    /// Copy out into an owned entry
    pub fn to_entry(&self) -> VpfsEntry {
        VpfsEntry::new(self.header.format_code, self.payload.to_vec())
    }
}

/// Iterator over the entries of a VPFS container
#[derive(Debug, Clone)]
pub struct VpfsReader<'a> {
    header: VpfsHeader,
    data: &'a [u8],
    pos: usize,
    index: usize,
    failed: bool,
}

impl<'a> VpfsReader<'a> {
    /// Validate the global header and position the reader at the first frame
    pub fn new(data: &'a [u8]) -> Result<Self, VpfsError> {
        let header: VpfsHeader = read_header(data, 0)?;

        if !header.has_valid_signature() {
            return Err(VpfsError::InvalidSignature(header.signature));
        }
        if header.version != VPFS_VERSION {
            return Err(VpfsError::UnsupportedVersion(header.version));
        }

        let actual = data.len() - VpfsHeader::SIZE;
        if header.total_size as usize != actual {
            return Err(VpfsError::SizeMismatch {
                declared: header.total_size,
                actual,
            });
        }

        Ok(Self {
            header,
            data,
            pos: VpfsHeader::SIZE,
            index: 0,
            failed: false,
        })
    }

    pub fn header(&self) -> &VpfsHeader {
        &self.header
    }

    fn read_frame(&mut self) -> Result<VpfsEntryRef<'a>, VpfsError> {
        let data = self.data;
        let offset = self.pos;
        let header: VpfsEntryHeader = read_header(data, offset)?;
        let payload_len = header
            .payload_len()
            .ok_or(VpfsError::InvalidFrameLength {
                index: self.index,
                frame_length: header.frame_length,
            })?;

        let start = offset + VpfsEntryHeader::SIZE;
        let end = start
            .checked_add(payload_len)
            .filter(|&end| end <= data.len())
            .ok_or(VpfsError::Truncated)?;

        let entry = VpfsEntryRef {
            index: self.index,
            offset,
            header,
            payload: &data[start..end],
        };
        self.pos = end;
        self.index += 1;
        Ok(entry)
    }
}

impl<'a> Iterator for VpfsReader<'a> {
    type Item = Result<VpfsEntryRef<'a>, VpfsError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.pos >= self.data.len() {
            return None;
        }
        let result = self.read_frame();
        if result.is_err() {
            self.failed = true;
        }
        Some(result)
    }
}

/// Decode every entry of a VPFS container
pub fn decode_vpfs(data: &[u8]) -> Result<Vec<VpfsEntry>, VpfsError> {
    VpfsReader::new(data)?
        .map(|entry| entry.map(|e| e.to_entry()))
        .collect()
}
