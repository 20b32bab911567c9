//! Bit-level primitives: axis scaling, Morton interleaving and the base-32
//! alphabet.
//!
//! Interleaving follows the "magic bits" spread from
//! <https://graphics.stanford.edu/~seander/bithacks.html#InterleaveBMN>:
//! each 32-bit input is widened in five masked shift-or steps so that a
//! zero gap sits between consecutive bits.

use once_cell::sync::Lazy;
use std::ops::RangeInclusive;

/// Geohash base-32 alphabet; the index of a character is its 5-bit value.
pub const BASE32_ALPHABET: &[u8; 32] = b"0123456789bcdefghjkmnpqrstuvwxyz";

/// Marker for bytes that are not part of the alphabet.
const INVALID: u8 = 0xff;

/// Reverse lookup from ASCII byte to 5-bit value.
static BASE32_VALUES: Lazy<[u8; 256]> = Lazy::new(|| {
    let mut table = [INVALID; 256];
    for (value, &byte) in BASE32_ALPHABET.iter().enumerate() {
        table[byte as usize] = value as u8;
    }
    table
});

/// Even bit positions (0, 2, 4, ...).
pub(crate) const EVEN_BITS: u64 = 0x5555_5555_5555_5555;

/// Odd bit positions (1, 3, 5, ...).
pub(crate) const ODD_BITS: u64 = 0xaaaa_aaaa_aaaa_aaaa;

/// Map a 5-bit value to its alphabet character.
#[inline]
pub fn encode_char(value: u8) -> char {
    BASE32_ALPHABET[(value & 0x1f) as usize] as char
}

/// Map an alphabet character to its 5-bit value, or `None` if it is not
/// part of the alphabet.
#[inline]
pub fn decode_char(c: char) -> Option<u8> {
    if !c.is_ascii() {
        return None;
    }
    match BASE32_VALUES[c as usize] {
        INVALID => None,
        value => Some(value),
    }
}

/// Scale `value` within `range` onto a `precision`-bit cell index.
///
/// `max_binary_value` is `2^precision`. The caller guarantees that `value`
/// lies within `range`; the upper edge of the range is folded into the
/// last cell.
#[inline]
pub fn scale(value: f64, range: &RangeInclusive<f64>, max_binary_value: f64) -> u32 {
    let fraction = (value - range.start()) / (range.end() - range.start());
    let cell = (fraction * max_binary_value) as u64;
    let last = max_binary_value as u64 - 1;
    cell.min(last) as u32
}

/// Lower edge of the cell that `bits` identifies at a precision whose
/// cell count is `max_binary_value`.
#[inline]
pub fn unscale(bits: u64, range: &RangeInclusive<f64>, max_binary_value: f64) -> f64 {
    let fraction = bits as f64 / max_binary_value;
    range.start() + fraction * (range.end() - range.start())
}

#[inline]
fn spread(x: u32) -> u64 {
    let mut x = x as u64;
    x = (x | (x << 16)) & 0x0000_ffff_0000_ffff;
    x = (x | (x << 8)) & 0x00ff_00ff_00ff_00ff;
    x = (x | (x << 4)) & 0x0f0f_0f0f_0f0f_0f0f;
    x = (x | (x << 2)) & 0x3333_3333_3333_3333;
    x = (x | (x << 1)) & EVEN_BITS;
    x
}

#[inline]
fn squash(x: u64) -> u32 {
    let mut x = x & EVEN_BITS;
    x = (x | (x >> 1)) & 0x3333_3333_3333_3333;
    x = (x | (x >> 2)) & 0x0f0f_0f0f_0f0f_0f0f;
    x = (x | (x >> 4)) & 0x00ff_00ff_00ff_00ff;
    x = (x | (x >> 8)) & 0x0000_ffff_0000_ffff;
    x = (x | (x >> 16)) & 0x0000_0000_ffff_ffff;
    x as u32
}

/// Interleave two 32-bit values into a 64-bit Morton code: `even_bits`
/// lands on even positions, `odd_bits` on odd positions.
///
/// # Examples
///
/// ```
/// use geocell::codec::interleave;
///
/// assert_eq!(interleave(0b11, 0b00), 0b0101);
/// assert_eq!(interleave(0b00, 0b11), 0b1010);
/// ```
#[inline]
pub fn interleave(even_bits: u32, odd_bits: u32) -> u64 {
    spread(even_bits) | (spread(odd_bits) << 1)
}

/// Split a Morton code back into its `(even_bits, odd_bits)` halves.
#[inline]
pub fn deinterleave(interleaved: u64) -> (u32, u32) {
    (squash(interleaved), squash(interleaved >> 1))
}
