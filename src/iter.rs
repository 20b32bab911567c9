//! Streaming enumeration of the geohash cells covering a bounding box.
//!
//! The scanner keeps two cursors: the first cell of the current row and
//! the cell within that row. It walks east until a cell no longer
//! intersects the target box, then moves the row cursor north, stopping
//! once the new row misses the box as well. Only O(1) state is held.

use crate::bits::{Direction, GeohashBits};
use crate::config::Config;
use crate::error::{GeohashError, Result};
use crate::precision::Precision;
use crate::types::BoundingBox;
use std::iter::FusedIterator;

/// Iterator over every cell at a fixed precision that intersects a
/// bounding box, row by row from south-west to north-east.
///
/// Cells touching the box only along an edge are included. A step that
/// wraps across the antimeridian or the north pole ends the row or the
/// scan, so boxes spanning the whole globe terminate.
///
/// # Examples
///
/// ```
/// use geocell::{BoundingBox, GeohashIterator, Location};
///
/// let bounds = BoundingBox::new(
///     Location::new(0.09991, 51.49996),
///     Location::new(0.10059, 51.50028),
/// )?;
/// let hashes: Vec<String> = GeohashIterator::new(bounds, 20)?
///     .map(|cell| cell.hash())
///     .collect();
/// assert_eq!(hashes, ["u10hfr2c", "u10hfr31", "u10hfr2f", "u10hfr34"]);
/// # Ok::<(), geocell::GeohashError>(())
/// ```
#[derive(Debug, Clone)]
pub struct GeohashIterator {
    bounds: BoundingBox,
    lat_baseline: GeohashBits,
    current: Option<GeohashBits>,
    remaining: Option<usize>,
    produced: usize,
}

impl GeohashIterator {
    /// Scan `bounds` with `bit_precision` bits per axis.
    pub fn new(bounds: BoundingBox, bit_precision: u8) -> Result<Self> {
        Self::with_precision(bounds, Precision::Bits(bit_precision))
    }

    /// Scan `bounds` at any precision, including odd character counts.
    pub fn with_precision(bounds: BoundingBox, precision: Precision) -> Result<Self> {
        let lat_baseline = GeohashBits::from_location(bounds.min(), precision)?;

        log::debug!(
            "Starting geohash scan of {:?} at {:?} from cell {:#x}",
            bounds,
            precision,
            lat_baseline.bits()
        );

        Ok(Self {
            bounds,
            lat_baseline,
            current: Some(lat_baseline),
            remaining: None,
            produced: 0,
        })
    }

    /// Scan `bounds` at the configured precision, stopping after
    /// `config.scan_limit` cells when set.
    ///
    /// # Errors
    ///
    /// [`GeohashError::InvalidConfig`] if `config` fails validation.
    pub fn with_config(bounds: BoundingBox, config: &Config) -> Result<Self> {
        config.validate().map_err(GeohashError::InvalidConfig)?;

        let mut iter = Self::with_precision(bounds, config.precision)?;
        iter.remaining = config.scan_limit;
        Ok(iter)
    }

    /// The box being scanned.
    pub fn bounds(&self) -> &BoundingBox {
        &self.bounds
    }

    /// Number of cells yielded so far.
    pub fn produced(&self) -> usize {
        self.produced
    }

    fn advance(&mut self) {
        let Some(current) = self.current else {
            return;
        };

        let east = current.neighbor(Direction::East);
        if self.accepts(&current, &east, Direction::East) {
            self.current = Some(east);
            return;
        }

        let north = self.lat_baseline.neighbor(Direction::North);
        if self.accepts(&self.lat_baseline, &north, Direction::North) {
            log::trace!("Geohash scan moving to row {:#x}", north.bits());
            self.lat_baseline = north;
            self.current = Some(north);
        } else {
            log::debug!("Geohash scan finished after {} cells", self.produced + 1);
            self.current = None;
        }
    }

    /// Whether stepping from `from` to `to` stays inside the scan.
    fn accepts(&self, from: &GeohashBits, to: &GeohashBits, direction: Direction) -> bool {
        let from_box = from.bounding_box();
        let to_box = to.bounding_box();

        let wrapped = match direction {
            Direction::East => to_box.min().longitude() <= from_box.min().longitude(),
            Direction::North => to_box.min().latitude() <= from_box.min().latitude(),
            Direction::West | Direction::South => false,
        };
        if wrapped {
            log::debug!("Geohash scan discarding {:?} step that wraps the globe", direction);
            return false;
        }

        self.bounds.intersects(&to_box)
    }
}

impl Iterator for GeohashIterator {
    type Item = GeohashBits;

    fn next(&mut self) -> Option<GeohashBits> {
        let current = self.current?;
        self.advance();
        self.produced += 1;

        if let Some(remaining) = self.remaining.as_mut() {
            *remaining -= 1;
            if *remaining == 0 && self.current.is_some() {
                log::warn!(
                    "Geohash scan truncated at the configured limit of {} cells",
                    self.produced
                );
                self.current = None;
            }
        }

        Some(current)
    }
}

impl FusedIterator for GeohashIterator {}
