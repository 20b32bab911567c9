//! Geohash precision, measured either in bits per axis or in base-32
//! characters.
//!
//! A character carries 5 bits, so an odd number of characters encodes an
//! odd number of bits in total. Longitude then gets one more bit than
//! latitude. Keeping the unit as an explicit tag lets the code derive the
//! per-axis widths exactly instead of guessing them from a bit count.

use serde::{Deserialize, Serialize};

/// Number of bits each base-32 character carries.
pub const BITS_PER_CHARACTER: u32 = 5;

/// Largest supported per-axis bit precision.
pub const MAX_BIT_PRECISION: u32 = 32;

/// Longest geohash text whose precision fits in 32 bits per axis.
pub const MAX_CHARACTER_PRECISION: u8 = 12;

/// Precision of a geohash.
///
/// # Examples
///
/// ```
/// use geocell::Precision;
///
/// assert_eq!(Precision::Characters(12).bit_precision(), 30);
/// assert_eq!(Precision::Characters(11).bit_precision(), 28);
/// assert_eq!(Precision::Bits(26).character_precision(), 10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Precision {
    /// Bits per axis.
    Bits(u8),
    /// Number of base-32 characters.
    Characters(u8),
}

impl Precision {
    /// Bits per axis needed to hold this precision (`ceil(5n / 2)` for
    /// characters).
    pub fn bit_precision(self) -> u32 {
        match self {
            Precision::Bits(n) => n as u32,
            Precision::Characters(n) => (n as u32 * BITS_PER_CHARACTER).div_ceil(2),
        }
    }

    /// Number of whole base-32 characters this precision renders to.
    pub fn character_precision(self) -> u32 {
        match self {
            Precision::Bits(n) => 2 * n as u32 / BITS_PER_CHARACTER,
            Precision::Characters(n) => n as u32,
        }
    }

    /// `2^bit_precision`, the number of cells along a full-width axis.
    pub fn max_binary_value(self) -> f64 {
        (1u64 << self.bit_precision().min(MAX_BIT_PRECISION)) as f64
    }

    /// Whether the total encoded width is odd.
    ///
    /// Only an odd character count produces an odd width; the lowest
    /// latitude bit is then padding.
    pub fn is_odd_characters(self) -> bool {
        match self {
            Precision::Bits(_) => false,
            Precision::Characters(n) => n % 2 == 1,
        }
    }

    /// Effective latitude bits.
    pub fn latitude_bits(self) -> u32 {
        if self.is_odd_characters() {
            self.bit_precision() - 1
        } else {
            self.bit_precision()
        }
    }

    /// Effective longitude bits.
    pub fn longitude_bits(self) -> u32 {
        self.bit_precision()
    }

    /// Width of the interleaved window in bits (`2 * bit_precision`).
    pub(crate) fn window_width(self) -> u32 {
        2 * self.bit_precision()
    }

    pub(crate) fn is_valid(self) -> bool {
        self.bit_precision() <= MAX_BIT_PRECISION
    }
}

impl Default for Precision {
    fn default() -> Self {
        Precision::Characters(8)
    }
}
