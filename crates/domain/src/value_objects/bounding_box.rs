//! Bounding box value object

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// A rectangular region given by its south/north/west/east extents
///
/// Fields are stored in the order the place lookup service returns them:
/// `(south, north, west, east)`. Consumers that need another order
/// (the spatial query language wants `(south, west, north, east)`)
/// must reorder explicitly. West may be greater than east for boxes that
/// cross the antimeridian; no wrapping is applied.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    south: f64,
    north: f64,
    west: f64,
    east: f64,
}

impl BoundingBox {
    /// Create a bounding box from its four extents
    ///
    /// # Errors
    ///
    /// Returns `DomainError::ValidationError` if `south > north` or any
    /// extent is not finite, and `DomainError::InvalidCoordinates` for the
    /// first corner outside latitude ±90 or longitude ±180.
    pub fn new(south: f64, north: f64, west: f64, east: f64) -> Result<Self, DomainError> {
        if [south, north, west, east].iter().any(|v| !v.is_finite()) {
            return Err(DomainError::ValidationError(
                "bounding box extents must be finite".to_string(),
            ));
        }
        for (latitude, longitude) in [(south, west), (north, east)] {
            if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
                return Err(DomainError::InvalidCoordinates {
                    latitude,
                    longitude,
                });
            }
        }
        if south > north {
            return Err(DomainError::ValidationError(format!(
                "bounding box south ({south}) must not exceed north ({north})"
            )));
        }
        Ok(Self {
            south,
            north,
            west,
            east,
        })
    }

    /// Southern latitude
    #[must_use]
    pub const fn south(&self) -> f64 {
        self.south
    }

    /// Northern latitude
    #[must_use]
    pub const fn north(&self) -> f64 {
        self.north
    }

    /// Western longitude
    #[must_use]
    pub const fn west(&self) -> f64 {
        self.west
    }

    /// Eastern longitude
    #[must_use]
    pub const fn east(&self) -> f64 {
        self.east
    }

    /// Extents in native `(south, north, west, east)` order
    #[must_use]
    pub const fn as_south_north_west_east(&self) -> [f64; 4] {
        [self.south, self.north, self.west, self.east]
    }
}
