//! Coordinate and region value types.
//!
//! [`Location`] is a plain longitude/latitude pair and [`BoundingBox`] an
//! axis-aligned rectangle built from two of them. Both are immutable and
//! convert to and from the `geo` primitives.

use crate::error::{GeohashError, Result};
use geo::{Distance, Haversine, Point, Rect};
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Valid longitude range in degrees.
pub const LONGITUDE_RANGE: RangeInclusive<f64> = -180.0..=180.0;

/// Valid latitude range in degrees.
pub const LATITUDE_RANGE: RangeInclusive<f64> = -90.0..=90.0;

/// A geographic coordinate in degrees.
///
/// Construction never fails; range checks happen where a location is
/// encoded (see [`crate::GeohashBits::from_location`]).
///
/// # Examples
///
/// ```
/// use geocell::Location;
///
/// let london = Location::new(-0.1, 51.5);
/// assert_eq!(london.longitude(), -0.1);
/// assert_eq!(london.latitude(), 51.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    longitude: f64,
    latitude: f64,
}

impl Location {
    /// Create a location from longitude and latitude in degrees.
    pub const fn new(longitude: f64, latitude: f64) -> Self {
        Self {
            longitude,
            latitude,
        }
    }

    /// Get the longitude in degrees.
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Get the latitude in degrees.
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Whether both axes are finite and inside their valid ranges.
    pub fn is_valid(&self) -> bool {
        LONGITUDE_RANGE.contains(&self.longitude) && LATITUDE_RANGE.contains(&self.latitude)
    }

    /// Great-circle distance to another location in meters (haversine).
    ///
    /// # Examples
    ///
    /// ```
    /// use geocell::Location;
    ///
    /// let a = Location::new(-9.10, 51.5);
    /// let b = Location::new(-9.11, 51.6);
    /// let meters = a.distance_in_meters(&b);
    /// assert!((meters - 11_140.9).abs() < 1.0);
    /// ```
    pub fn distance_in_meters(&self, other: &Location) -> f64 {
        Haversine.distance(Point::from(*self), Point::from(*other))
    }
}

impl From<Point<f64>> for Location {
    fn from(point: Point<f64>) -> Self {
        Self::new(point.x(), point.y())
    }
}

impl From<Location> for Point<f64> {
    fn from(location: Location) -> Self {
        Point::new(location.longitude, location.latitude)
    }
}

/// A 2D axis-aligned bounding box in longitude/latitude degrees.
///
/// The minimum corner never exceeds the maximum corner on either axis.
/// Wrap-around at the antimeridian is not modelled: a box always spans
/// eastward from `min` to `max`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawBoundingBox")]
pub struct BoundingBox {
    min: Location,
    max: Location,
}

#[derive(Deserialize)]
struct RawBoundingBox {
    min: Location,
    max: Location,
}

impl TryFrom<RawBoundingBox> for BoundingBox {
    type Error = GeohashError;

    fn try_from(raw: RawBoundingBox) -> Result<Self> {
        BoundingBox::new(raw.min, raw.max)
    }
}

impl BoundingBox {
    /// Create a bounding box from its south-west and north-east corners.
    ///
    /// # Errors
    ///
    /// Returns [`GeohashError::InvalidArguments`] when `min` exceeds `max`
    /// on either axis (or when a corner is NaN).
    ///
    /// # Examples
    ///
    /// ```
    /// use geocell::{BoundingBox, Location};
    ///
    /// let bbox = BoundingBox::new(Location::new(-10.0, -10.0), Location::new(10.0, 10.0))?;
    /// assert_eq!(bbox.center(), Location::new(0.0, 0.0));
    ///
    /// assert!(BoundingBox::new(Location::new(10.0, 0.0), Location::new(-10.0, 1.0)).is_err());
    /// # Ok::<(), geocell::GeohashError>(())
    /// ```
    pub fn new(min: Location, max: Location) -> Result<Self> {
        let ordered = min.longitude <= max.longitude && min.latitude <= max.latitude;
        if !ordered {
            return Err(GeohashError::InvalidArguments(format!(
                "bounding box min ({}, {}) exceeds max ({}, {})",
                min.longitude, min.latitude, max.longitude, max.latitude
            )));
        }

        Ok(Self { min, max })
    }

    /// Build a box from corners the caller has already ordered, such as
    /// the edges of a decoded cell.
    pub(crate) fn from_ordered(min: Location, max: Location) -> Self {
        debug_assert!(
            min.longitude <= max.longitude && min.latitude <= max.latitude,
            "cell corners out of order: {min:?} > {max:?}"
        );
        Self { min, max }
    }

    /// Get the south-west corner.
    pub fn min(&self) -> Location {
        self.min
    }

    /// Get the north-east corner.
    pub fn max(&self) -> Location {
        self.max
    }

    /// Get the center point of the bounding box.
    pub fn center(&self) -> Location {
        Location::new(
            0.5 * (self.min.longitude + self.max.longitude),
            0.5 * (self.min.latitude + self.max.latitude),
        )
    }

    /// Get the width (longitude span) in degrees.
    pub fn width(&self) -> f64 {
        self.max.longitude - self.min.longitude
    }

    /// Get the height (latitude span) in degrees.
    pub fn height(&self) -> f64 {
        self.max.latitude - self.min.latitude
    }

    /// Check if a location lies within this bounding box, edges included.
    pub fn contains(&self, location: &Location) -> bool {
        location.longitude >= self.min.longitude
            && location.longitude <= self.max.longitude
            && location.latitude >= self.min.latitude
            && location.latitude <= self.max.latitude
    }

    /// Check if this bounding box intersects with another.
    ///
    /// Boxes that only share an edge or a corner count as intersecting.
    pub fn intersects(&self, other: &BoundingBox) -> bool {
        !(self.max.longitude < other.min.longitude
            || self.max.latitude < other.min.latitude
            || self.min.longitude > other.max.longitude
            || self.min.latitude > other.max.latitude)
    }
}

impl From<BoundingBox> for Rect<f64> {
    fn from(bbox: BoundingBox) -> Self {
        Rect::new(Point::from(bbox.min), Point::from(bbox.max))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn subject() -> BoundingBox {
        BoundingBox::new(Location::new(-10.0, -10.0), Location::new(10.0, 10.0)).unwrap()
    }

    #[test]
    fn test_location_validity() {
        assert!(Location::new(180.0, 90.0).is_valid());
        assert!(Location::new(-180.0, -90.0).is_valid());
        assert!(!Location::new(-200.0, 51.5).is_valid());
        assert!(!Location::new(0.0, 90.5).is_valid());
        assert!(!Location::new(f64::NAN, 0.0).is_valid());
        assert!(!Location::new(0.0, f64::INFINITY).is_valid());
    }

    #[test]
    fn test_distance() {
        let a = Location::new(-9.10, 51.5);
        let b = Location::new(-9.11, 51.6);

        let meters = a.distance_in_meters(&b);
        assert!((meters - 11_140.9).abs() < 1.0, "got {meters}");
        assert_eq!(a.distance_in_meters(&a), 0.0);
    }

    #[test]
    fn test_point_conversion() {
        let location = Location::new(-74.0060, 40.7128);
        let point: Point<f64> = location.into();
        assert_eq!(point.x(), -74.0060);
        assert_eq!(point.y(), 40.7128);
        assert_eq!(Location::from(point), location);
    }

    #[test]
    fn test_bounding_box_rejects_inverted_corners() {
        let inverted_lon = BoundingBox::new(Location::new(1.0, 0.0), Location::new(0.0, 1.0));
        assert!(matches!(
            inverted_lon,
            Err(GeohashError::InvalidArguments(_))
        ));

        let inverted_lat = BoundingBox::new(Location::new(0.0, 1.0), Location::new(1.0, 0.0));
        assert!(matches!(
            inverted_lat,
            Err(GeohashError::InvalidArguments(_))
        ));

        let nan = BoundingBox::new(Location::new(f64::NAN, 0.0), Location::new(1.0, 1.0));
        assert!(nan.is_err());
    }

    #[test]
    fn test_degenerate_box_is_allowed() {
        let point = Location::new(3.0, 4.0);
        let bbox = BoundingBox::new(point, point).unwrap();
        assert_eq!(bbox.width(), 0.0);
        assert_eq!(bbox.height(), 0.0);
        assert!(bbox.contains(&point));
    }

    #[test]
    fn test_center_and_dimensions() {
        let bbox = BoundingBox::new(Location::new(-74.0, 40.7), Location::new(-73.0, 41.7)).unwrap();
        let center = bbox.center();
        assert!((center.longitude() - -73.5).abs() < 1e-12);
        assert!((center.latitude() - 41.2).abs() < 1e-12);
        assert!((bbox.width() - 1.0).abs() < 1e-12);
        assert!((bbox.height() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_intersects_intersecting() {
        let other = BoundingBox::new(Location::new(-20.0, -20.0), Location::new(-9.0, -9.0)).unwrap();
        assert!(subject().intersects(&other));
        assert!(other.intersects(&subject()));
    }

    #[test]
    fn test_intersects_non_intersecting() {
        let other =
            BoundingBox::new(Location::new(-20.0, -20.0), Location::new(-9.0, -10.1)).unwrap();
        assert!(!subject().intersects(&other));
        assert!(!other.intersects(&subject()));
    }

    #[test]
    fn test_intersects_touching_edge() {
        let east = BoundingBox::new(Location::new(10.0, -5.0), Location::new(20.0, 5.0)).unwrap();
        assert!(subject().intersects(&east));

        let corner = BoundingBox::new(Location::new(10.0, 10.0), Location::new(11.0, 11.0)).unwrap();
        assert!(subject().intersects(&corner));
    }

    #[test]
    fn test_contained_box_intersects() {
        let inner = BoundingBox::new(Location::new(-1.0, -1.0), Location::new(1.0, 1.0)).unwrap();
        assert!(subject().intersects(&inner));
        assert!(inner.intersects(&subject()));
    }

    #[test]
    fn test_rect_conversion() {
        let rect: Rect<f64> = subject().into();
        assert_eq!(rect.min().x, -10.0);
        assert_eq!(rect.max().y, 10.0);
    }

    #[test]
    fn test_serde_validates_corners() {
        let json = serde_json::to_string(&subject()).unwrap();
        let parsed: BoundingBox = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, subject());

        let inverted = r#"{"min":{"longitude":5.0,"latitude":0.0},"max":{"longitude":1.0,"latitude":1.0}}"#;
        assert!(serde_json::from_str::<BoundingBox>(inverted).is_err());
    }
}
