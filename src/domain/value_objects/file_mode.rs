//! File Mode Value Object
//!
//! Permission bits parsed from the octal text used in manifests (`"0644"`).

use std::fmt;
use std::str::FromStr;

/// Error when a mode string is not a valid octal permission value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModeError {
    /// Nothing to parse
    Empty,
    /// Contains a character other than an ASCII digit
    NotDigits,
    /// Contains `8` or `9`
    NotOctal,
    /// Larger than `0o7777`
    OutOfRange,
}

impl fmt::Display for ModeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModeError::Empty => write!(f, "mode is empty"),
            ModeError::NotDigits => write!(f, "mode must contain only digits"),
            ModeError::NotOctal => write!(f, "mode digits must be 0-7"),
            ModeError::OutOfRange => write!(f, "mode exceeds 7777"),
        }
    }
}

impl std::error::Error for ModeError {}

/// Unix permission bits (including set-id and sticky bits)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FileMode(u32);

impl FileMode {
    /// Highest value accepted: all permission, set-id and sticky bits
    pub const MAX: u32 = 0o7777;

    pub fn from_bits(bits: u32) -> Result<Self, ModeError> {
        if bits > Self::MAX {
            return Err(ModeError::OutOfRange);
        }
        Ok(Self(bits))
    }

    pub fn bits(self) -> u32 {
        self.0
    }
}

impl FromStr for FileMode {
    type Err = ModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ModeError::Empty);
        }
        if !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ModeError::NotDigits);
        }
        if s.bytes().any(|b| b == b'8' || b == b'9') {
            return Err(ModeError::NotOctal);
        }

        // Leading zeros carry no value; strip them so long inputs like
        // "0000644" do not overflow.
        let significant = s.trim_start_matches('0');
        if significant.is_empty() {
            return Ok(Self(0));
        }
        if significant.len() > 4 {
            return Err(ModeError::OutOfRange);
        }
        let bits = u32::from_str_radix(significant, 8).map_err(|_| ModeError::NotOctal)?;
        Self::from_bits(bits)
    }
}

impl fmt::Display for FileMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04o}", self.0)
    }
}
