//! Interleaved geohash codes.
//!
//! A [`GeohashBits`] stores latitude bits on the even positions and
//! longitude bits on the odd positions of a `u64`, occupying the low
//! `2 * bit_precision` bits. Text decoding places the first character at
//! the top of that window, so an odd-length hash leaves bit 0 as padding.

use crate::codec::{self, EVEN_BITS, ODD_BITS, deinterleave, interleave};
use crate::config::Config;
use crate::error::{GeohashError, Result};
use crate::precision::{BITS_PER_CHARACTER, MAX_CHARACTER_PRECISION, Precision};
use crate::types::{BoundingBox, LATITUDE_RANGE, LONGITUDE_RANGE, Location};
use std::fmt;
use std::str::FromStr;

/// Cardinal direction for neighbor stepping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

/// Which half of the interleaved word a step modifies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InterleaveSet {
    /// Latitude.
    Evens,
    /// Longitude.
    Odds,
}

impl InterleaveSet {
    fn modify_mask(self) -> u64 {
        match self {
            InterleaveSet::Evens => EVEN_BITS,
            InterleaveSet::Odds => ODD_BITS,
        }
    }

    fn keep_mask(self) -> u64 {
        match self {
            InterleaveSet::Evens => ODD_BITS,
            InterleaveSet::Odds => EVEN_BITS,
        }
    }
}

/// The eight cells surrounding a geohash.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Neighbors {
    pub n: GeohashBits,
    pub ne: GeohashBits,
    pub e: GeohashBits,
    pub se: GeohashBits,
    pub s: GeohashBits,
    pub sw: GeohashBits,
    pub w: GeohashBits,
    pub nw: GeohashBits,
}

/// Mask selecting the low `width` bits.
#[inline]
fn low_bits(width: u32) -> u64 {
    if width >= u64::BITS {
        u64::MAX
    } else {
        (1u64 << width) - 1
    }
}

/// Number of cells along an axis encoded with `bits` bits.
#[inline]
fn axis_cells(bits: u32) -> f64 {
    (1u64 << bits) as f64
}

/// A geohash as an interleaved bit pattern plus its precision.
///
/// Values are immutable; neighbor stepping returns a new code with the
/// same precision.
///
/// # Examples
///
/// ```
/// use geocell::{Direction, GeohashBits, Location};
///
/// let bits = GeohashBits::from_location_characters(Location::new(-0.1, 51.5), 12)?;
/// assert_eq!(bits.hash(), "gcpuvxr1jzfd");
///
/// let parsed: GeohashBits = "u10hfr2c4pv6".parse()?;
/// assert_eq!(parsed.neighbor(Direction::North).hash(), "u10hfr2c4pv7");
/// # Ok::<(), geocell::GeohashError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GeohashBits {
    bits: u64,
    precision: Precision,
}

impl GeohashBits {
    /// Wrap a raw interleaved value. Bits above the precision window are
    /// discarded, as is the latitude padding bit of an odd-length hash.
    ///
    /// # Errors
    ///
    /// [`GeohashError::InvalidPrecision`] if the precision exceeds 32 bits
    /// per axis.
    pub fn from_bits(bits: u64, precision: Precision) -> Result<Self> {
        if !precision.is_valid() {
            return Err(GeohashError::InvalidPrecision(precision.bit_precision()));
        }

        let mut bits = bits & low_bits(precision.window_width());
        if precision.is_odd_characters() {
            bits &= !1;
        }

        Ok(Self { bits, precision })
    }

    /// Encode a location at the given precision.
    ///
    /// # Errors
    ///
    /// [`GeohashError::InvalidPrecision`] for precisions above 32 bits per
    /// axis, then [`GeohashError::InvalidLocation`] for coordinates that
    /// are not finite or outside [-180, 180] x [-90, 90].
    pub fn from_location(location: Location, precision: Precision) -> Result<Self> {
        if !precision.is_valid() {
            return Err(GeohashError::InvalidPrecision(precision.bit_precision()));
        }

        if !location.is_valid() {
            return Err(GeohashError::InvalidLocation {
                longitude: location.longitude(),
                latitude: location.latitude(),
            });
        }

        let latitude_bits = precision.latitude_bits();
        let padding = precision.bit_precision() - latitude_bits;

        let lat = codec::scale(
            location.latitude(),
            &LATITUDE_RANGE,
            axis_cells(latitude_bits),
        ) << padding;
        let lon = codec::scale(
            location.longitude(),
            &LONGITUDE_RANGE,
            precision.max_binary_value(),
        );

        Ok(Self {
            bits: interleave(lat, lon),
            precision,
        })
    }

    /// Encode a location with `bit_precision` bits per axis.
    pub fn from_location_bits(location: Location, bit_precision: u8) -> Result<Self> {
        Self::from_location(location, Precision::Bits(bit_precision))
    }

    /// Encode a location to `character_precision` base-32 characters.
    pub fn from_location_characters(location: Location, character_precision: u8) -> Result<Self> {
        Self::from_location(location, Precision::Characters(character_precision))
    }

    /// Encode a location at the configured precision.
    ///
    /// # Errors
    ///
    /// [`GeohashError::InvalidConfig`] if `config` fails validation, then
    /// the errors of [`GeohashBits::from_location`].
    pub fn with_config(location: Location, config: &Config) -> Result<Self> {
        config.validate().map_err(GeohashError::InvalidConfig)?;
        Self::from_location(location, config.precision)
    }

    /// Decode base-32 geohash text.
    ///
    /// # Errors
    ///
    /// - [`GeohashError::EmptyHash`] for empty text.
    /// - [`GeohashError::InvalidPrecision`] for more than 12 characters.
    /// - [`GeohashError::InvalidCharacter`] for characters outside the
    ///   alphabet; nothing is partially decoded.
    pub fn from_hash(hash: &str) -> Result<Self> {
        let length = hash.chars().count();
        if length == 0 {
            return Err(GeohashError::EmptyHash);
        }
        if length > MAX_CHARACTER_PRECISION as usize {
            let bits = (length as u64 * BITS_PER_CHARACTER as u64).div_ceil(2);
            return Err(GeohashError::InvalidPrecision(
                u32::try_from(bits).unwrap_or(u32::MAX),
            ));
        }

        let precision = Precision::Characters(length as u8);
        let window = precision.window_width();

        let mut bits = 0u64;
        for (position, character) in hash.chars().enumerate() {
            let value = codec::decode_char(character).ok_or(GeohashError::InvalidCharacter {
                character,
                position,
            })?;
            let shift = window - (position as u32 + 1) * BITS_PER_CHARACTER;
            bits |= (value as u64) << shift;
        }

        Self::from_bits(bits, precision)
    }

    /// Raw interleaved value.
    pub fn bits(&self) -> u64 {
        self.bits
    }

    /// Precision this code was built with.
    pub fn precision(&self) -> Precision {
        self.precision
    }

    /// Render as base-32 text of `precision.character_precision()`
    /// characters.
    ///
    /// Bit precisions that do not fill a whole number of characters are
    /// truncated; below 3 bits per axis the result is empty.
    pub fn hash(&self) -> String {
        let characters = self.precision.character_precision();
        let window = self.precision.window_width();

        (1..=characters)
            .map(|i| {
                let index = (self.bits >> (window - i * BITS_PER_CHARACTER)) & 0x1f;
                codec::encode_char(index as u8)
            })
            .collect()
    }

    /// The cell this code denotes.
    pub fn bounding_box(&self) -> BoundingBox {
        let (lat_bits, lon_bits) = deinterleave(self.bits);
        let lat_bits = (lat_bits as u64)
            >> (self.precision.bit_precision() - self.precision.latitude_bits());
        let lon_bits = lon_bits as u64;

        let lat_cells = axis_cells(self.precision.latitude_bits());
        let lon_cells = self.precision.max_binary_value();

        BoundingBox::from_ordered(
            Location::new(
                codec::unscale(lon_bits, &LONGITUDE_RANGE, lon_cells),
                codec::unscale(lat_bits, &LATITUDE_RANGE, lat_cells),
            ),
            Location::new(
                codec::unscale(lon_bits + 1, &LONGITUDE_RANGE, lon_cells),
                codec::unscale(lat_bits + 1, &LATITUDE_RANGE, lat_cells),
            ),
        )
    }

    /// The adjacent cell in `direction`.
    ///
    /// Steps past the edge of the world wrap modulo the axis width; compare
    /// bounding boxes to detect it.
    pub fn neighbor(&self, direction: Direction) -> GeohashBits {
        match direction {
            Direction::North => self.incremented(InterleaveSet::Evens, true),
            Direction::South => self.incremented(InterleaveSet::Evens, false),
            Direction::East => self.incremented(InterleaveSet::Odds, true),
            Direction::West => self.incremented(InterleaveSet::Odds, false),
        }
    }

    /// All eight adjacent cells.
    pub fn neighbors(&self) -> Neighbors {
        let n = self.neighbor(Direction::North);
        let s = self.neighbor(Direction::South);

        Neighbors {
            n,
            ne: n.neighbor(Direction::East),
            e: self.neighbor(Direction::East),
            se: s.neighbor(Direction::East),
            s,
            sw: s.neighbor(Direction::West),
            w: self.neighbor(Direction::West),
            nw: n.neighbor(Direction::West),
        }
    }

    /// Add or subtract one in the field selected by `set` without touching
    /// the other field.
    ///
    /// The kept field's positions are filled with ones so that carries and
    /// borrows ripple across the gaps, then masked off again.
    fn incremented(&self, set: InterleaveSet, forward: bool) -> GeohashBits {
        let window = self.precision.window_width();
        if window == 0 {
            return *self;
        }
        let shift = u64::BITS - window;

        let mut modify_bits = self.bits & set.modify_mask();
        let keep_bits = self.bits & set.keep_mask();
        let increment = set.keep_mask() >> shift;

        // Odd-length text pads latitude with a zero bit 0.
        let compact = set == InterleaveSet::Evens && self.precision.is_odd_characters();
        if compact {
            modify_bits >>= 2;
        }

        if forward {
            modify_bits = modify_bits.wrapping_add(increment + 1);
        } else {
            modify_bits |= increment;
            modify_bits = modify_bits.wrapping_sub(increment + 1);
        }

        if compact {
            modify_bits <<= 2;
        }
        modify_bits &= set.modify_mask() >> shift;

        debug_assert!(self.precision.is_valid());
        GeohashBits {
            bits: modify_bits | keep_bits,
            precision: self.precision,
        }
    }
}

impl fmt::Display for GeohashBits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hash())
    }
}

impl FromStr for GeohashBits {
    type Err = GeohashError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hash(s)
    }
}
