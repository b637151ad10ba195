//! Payload format codes
//!
//! The container does not interpret payloads; the code only tells firmware
//! which decoder to hand the bytes to.

use std::fmt;
use std::str::FromStr;

use crate::VpfsError;

/// Audio codec of an entry's payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum FormatCode {
    /// Voice Prompt Codec, 8 kHz
    Vpc8 = 1,
    /// Signed 16-bit PCM, 8 kHz, mono
    RawPcm = 2,
    /// ADPCM
    Adpcm = 3,
}

impl FormatCode {
    /// All known codes, in numeric order
    pub const ALL: [FormatCode; 3] = [FormatCode::Vpc8, FormatCode::RawPcm, FormatCode::Adpcm];

    /// Numeric value stored in the entry header
    pub const fn code(self) -> u32 {
        self as u32
    }

    /// Human-readable codec description
    pub const fn description(self) -> &'static str {
        match self {
            FormatCode::Vpc8 => "VoicePromptCodec 8kHz",
            FormatCode::RawPcm => "Raw PCM (S16, 8kHz, Mono)",
            FormatCode::Adpcm => "ADPCM",
        }
    }

    /// Short name, as accepted by [`FromStr`]
    pub const fn name(self) -> &'static str {
        match self {
            FormatCode::Vpc8 => "vpc8",
            FormatCode::RawPcm => "pcm",
            FormatCode::Adpcm => "adpcm",
        }
    }
}

impl TryFrom<u32> for FormatCode {
    type Error = VpfsError;

    fn try_from(code: u32) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(FormatCode::Vpc8),
            2 => Ok(FormatCode::RawPcm),
            3 => Ok(FormatCode::Adpcm),
            other => Err(VpfsError::UnsupportedFormat(other)),
        }
    }
}

impl From<FormatCode> for u32 {
    fn from(format: FormatCode) -> u32 {
        format.code()
    }
}

impl fmt::Display for FormatCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.code(), self.description())
    }
}

/// Parse either the numeric code or a codec name (case-insensitive)
impl FromStr for FormatCode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(code) = s.parse::<u32>() {
            return FormatCode::try_from(code).map_err(|e| e.to_string());
        }
        match s.to_ascii_lowercase().as_str() {
            "vpc8" | "vpc" => Ok(FormatCode::Vpc8),
            "pcm" | "rawpcm" | "raw_pcm" => Ok(FormatCode::RawPcm),
            "adpcm" => Ok(FormatCode::Adpcm),
            _ => Err(format!(
                "unknown format '{}' (use 1:VPC8, 2:RawPCM or 3:ADPCM)",
                s
            )),
        }
    }
}
