//! Bit-level geohash encoding with neighbor stepping and region scanning.
//!
//! ```rust
//! use geocell::{BoundingBox, Direction, GeohashBits, GeohashIterator, Location};
//!
//! let london = Location::new(-0.1, 51.5);
//! let cell = GeohashBits::from_location_characters(london, 12)?;
//! assert_eq!(cell.hash(), "gcpuvxr1jzfd");
//! assert!(cell.bounding_box().contains(&london));
//!
//! let east = cell.neighbor(Direction::East);
//! let bounds = BoundingBox::new(cell.bounding_box().min(), east.bounding_box().max())?;
//! let covering = GeohashIterator::new(bounds, 30)?.count();
//! assert!(covering >= 2);
//! # Ok::<(), geocell::GeohashError>(())
//! ```

pub mod bits;
pub mod codec;
pub mod config;
pub mod error;
pub mod iter;
pub mod precision;
pub mod types;

pub use bits::{Direction, GeohashBits, Neighbors};
pub use config::Config;
pub use error::{GeohashError, Result};
pub use iter::GeohashIterator;
pub use precision::{MAX_BIT_PRECISION, MAX_CHARACTER_PRECISION, Precision};
pub use types::{BoundingBox, LATITUDE_RANGE, LONGITUDE_RANGE, Location};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common imports
pub mod prelude {

    pub use crate::{BoundingBox, Config, Location, Precision, Result};

    pub use crate::{Direction, GeohashBits, GeohashError, GeohashIterator, Neighbors};
}
