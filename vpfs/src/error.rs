//! Error type shared by the VPFS encoder and reader

/// Errors produced while building or scanning a VPFS container
#[derive(Debug, thiserror::Error)]
pub enum VpfsError {
    /// A container must hold at least one prompt
    #[error("no entries to pack (a VPFS container needs at least one prompt)")]
    Empty,

    /// Format code outside the known enumeration
    #[error("unsupported format code: {0} (expected 1:VPC8, 2:RawPCM or 3:ADPCM)")]
    UnsupportedFormat(u32),

    /// Writing to the output sink failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Data ended before a complete header or frame
    #[error("truncated VPFS data")]
    Truncated,

    /// First 4 bytes are not "VPFS"
    #[error("invalid VPFS signature: {0:02x?}")]
    InvalidSignature([u8; 4]),

    /// Version word is not one this crate understands
    #[error("unsupported VPFS version: {0:#010x}")]
    UnsupportedVersion(u32),

    /// Declared `total_size` disagrees with the bytes that follow the header
    #[error("VPFS size mismatch: header declares {declared} bytes, found {actual}")]
    SizeMismatch { declared: u32, actual: usize },

    /// A frame too short to contain its own format code
    #[error("entry {index} has invalid frame length {frame_length}")]
    InvalidFrameLength { index: usize, frame_length: u32 },
}
