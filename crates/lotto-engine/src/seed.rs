//! Reproducible draw seeds.
//!
//! A [`DrawSeed`] is 32 bytes of PRNG seed material with a 64-character
//! lowercase-hex text form. Seeds come from OS entropy for everyday runs,
//! from a SHA-256-hashed phrase for memorable reproducibility, or from a
//! previously printed hex string to replay an exact draw.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use rand::{Rng as _, SeedableRng as _};
use rand_pcg::Pcg64;
use sha2::{Digest as _, Sha256};

/// Length of the hex text form of a seed.
const SEED_HEX_LEN: usize = 64;

/// Seed material for one reproducible draw.
///
/// # Examples
///
/// ```
/// use std::str::FromStr as _;
///
/// use lotto_engine::DrawSeed;
///
/// let seed = DrawSeed::from_phrase("saturday night");
/// let text = seed.to_string();
/// assert_eq!(text.len(), 64);
/// assert_eq!(DrawSeed::from_str(&text)?, seed);
/// # Ok::<(), lotto_engine::ParseSeedError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DrawSeed([u8; 32]);

/// Error returned when a seed string is not 64 hex characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseSeedError {
    /// The string was not exactly 64 characters long.
    #[display("seed must be 64 hex characters, got {len}")]
    InvalidLength {
        /// Length of the rejected string in bytes.
        len: usize,
    },
    /// A character was not a hex digit.
    #[display("invalid hex digit {byte:#04x} at position {index}")]
    InvalidHexDigit {
        /// The offending byte.
        byte: u8,
        /// Byte position within the string.
        index: usize,
    },
}

impl DrawSeed {
    /// Creates a seed from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Creates a fresh seed from OS entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        let mut bytes = [0; 32];
        rand::rng().fill_bytes(&mut bytes);
        Self(bytes)
    }

    /// Derives a seed from an arbitrary phrase via SHA-256.
    ///
    /// The same phrase always yields the same seed.
    #[must_use]
    pub fn from_phrase(phrase: &str) -> Self {
        Self(Sha256::digest(phrase.as_bytes()).into())
    }

    /// Returns the raw seed bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Creates the PRNG stream for this seed.
    #[must_use]
    pub fn rng(&self) -> Pcg64 {
        Pcg64::from_seed(self.0)
    }
}

impl Display for DrawSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl FromStr for DrawSeed {
    type Err = ParseSeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != SEED_HEX_LEN {
            return Err(ParseSeedError::InvalidLength { len: s.len() });
        }
        let mut bytes = [0; 32];
        for (index, byte) in s.bytes().enumerate() {
            let value = hex_value(byte).ok_or(ParseSeedError::InvalidHexDigit { byte, index })?;
            bytes[index / 2] = (bytes[index / 2] << 4) | value;
        }
        Ok(Self(bytes))
    }
}

fn hex_value(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}
