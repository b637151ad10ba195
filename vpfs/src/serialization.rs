//! Shared header I/O for the encoder and reader.
//!
//! The writer and the sequential reader go through [`write_header`] and
//! [`read_header`] for both header kinds, so truncation handling lives in one place.

use std::io::Write;

use crate::VpfsError;

/// A fixed-size VPFS header.
///
/// # Example
///
/// ```
/// use vpfs::{BinarySerializable, VpfsEntryHeader};
///
/// let header = VpfsEntryHeader::new(10, 2);
/// let parsed = VpfsEntryHeader::deserialize(&header.serialize()).unwrap();
/// assert_eq!(parsed.frame_length, 14);
/// ```
pub trait BinarySerializable: Sized {
    /// Encoded size in bytes.
    const SIZE: usize;

    fn serialize(&self) -> Vec<u8>;

    /// `None` if `bytes` is shorter than [`Self::SIZE`].
    fn deserialize(bytes: &[u8]) -> Option<Self>;
}

impl BinarySerializable for super::VpfsHeader {
    const SIZE: usize = Self::SIZE;

    fn serialize(&self) -> Vec<u8> {
        self.to_bytes().to_vec()
    }

    fn deserialize(bytes: &[u8]) -> Option<Self> {
        Self::from_bytes(bytes)
    }
}

impl BinarySerializable for super::VpfsEntryHeader {
    const SIZE: usize = Self::SIZE;

    fn serialize(&self) -> Vec<u8> {
        self.to_bytes().to_vec()
    }

    fn deserialize(bytes: &[u8]) -> Option<Self> {
        Self::from_bytes(bytes)
    }
}

/// Read a header at `offset`, failing with [`VpfsError::Truncated`] if it runs past the end
pub(crate) fn read_header<T: BinarySerializable>(
    bytes: &[u8],
    offset: usize,
) -> Result<T, VpfsError> {
    bytes
        .get(offset..)
        .and_then(T::deserialize)
        .ok_or(VpfsError::Truncated)
}

pub(crate) fn write_header<W: Write, T: BinarySerializable>(
    w: &mut W,
    header: &T,
) -> Result<(), VpfsError> {
    w.write_all(&header.serialize())?;
    Ok(())
}
