//! Error types for geohash construction and parsing.

use thiserror::Error;

/// Result type alias using [`GeohashError`].
pub type Result<T> = std::result::Result<T, GeohashError>;

/// Errors raised while building locations, bounding boxes and geohashes.
///
/// Every variant is detected synchronously at construction time; nothing
/// is silently coerced into range.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeohashError {
    /// Per-axis bit precision above 32 (including one derived from text).
    #[error("Invalid precision: {0} bits per axis exceeds the maximum of 32")]
    InvalidPrecision(u32),

    /// Coordinate is not finite or lies outside [-180, 180] x [-90, 90].
    #[error("Invalid location: longitude {longitude}, latitude {latitude}")]
    InvalidLocation { longitude: f64, latitude: f64 },

    /// Bounding box corners are inconsistent.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// Geohash text contains a character outside the base-32 alphabet.
    #[error("Invalid geohash character {character:?} at position {position}")]
    InvalidCharacter { character: char, position: usize },

    /// Configuration failed validation.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Geohash text is empty.
    #[error("Geohash text must contain at least one character")]
    EmptyHash,
}
