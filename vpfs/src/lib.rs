//! VPFS: Voice Prompt File System container format
//!
//! A VPFS container packs a set of voice prompt payloads into one flat binary
//! blob that embedded firmware reads sequentially. Payloads are opaque: this
//! crate never inspects the VPC8, PCM or ADPCM data it frames.
//!
//! # Layout
//!
//! ```text
//! Global header (12 bytes):
//!   0x00: signature "VPFS" (4 ASCII bytes, no terminator)
//!   0x04: version u32 LE (0x00010000 = 1.0)
//!   0x08: total_size u32 LE (sum of every entry frame, header excluded)
//!
//! Entry frame (8 + payload bytes, repeats in input order):
//!   0x00: frame_length u32 LE (payload length + 4)
//!   0x04: format_code u32 LE (1 = VPC8, 2 = raw PCM, 3 = ADPCM)
//!   0x08: payload (frame_length - 4 bytes, verbatim)
//! ```
//!
//! There is no padding between fields or between entries, and no index:
//! consumers locate prompt `n` by walking the first `n` frames.
//!
//! # Usage
//!
//! ```
//! use vpfs::{FormatCode, VpfsEntry, decode_vpfs, encode_vpfs};
//!
//! let entries = vec![
//!     VpfsEntry::new(FormatCode::RawPcm, vec![0; 10]),
//!     VpfsEntry::new(FormatCode::RawPcm, vec![1, 2, 3]),
//! ];
//!
//! let bytes = encode_vpfs(&entries).unwrap();
//! assert_eq!(&bytes[0..4], b"VPFS");
//!
//! let decoded = decode_vpfs(&bytes).unwrap();
//! assert_eq!(decoded, entries);
//! ```

mod decode;
mod encode;
mod error;
mod format;
mod header;
mod serialization;

pub use decode::{VpfsEntryRef, VpfsReader, decode_vpfs};
pub use encode::{VpfsEntry, container_size, encode_vpfs, write_vpfs};
pub use error::VpfsError;
pub use format::FormatCode;
pub use header::{VpfsEntryHeader, VpfsHeader};
pub use serialization::BinarySerializable;

// =============================================================================
// Constants
// =============================================================================

/// Container signature, stored as the first 4 bytes
pub const VPFS_SIGNATURE: [u8; 4] = *b"VPFS";

/// Format revision 1.0 (major in the high half, minor in the low half)
pub const VPFS_VERSION: u32 = 0x0001_0000;

/// Size of the `format_code` field counted by each frame's `frame_length`
pub const VPFS_FORMAT_CODE_SIZE: u32 = 4;

/// Split a version word into `(major, minor)`
pub const fn version_parts(version: u32) -> (u16, u16) {
    ((version >> 16) as u16, (version & 0xFFFF) as u16)
}
