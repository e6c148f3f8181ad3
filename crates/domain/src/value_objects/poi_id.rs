//! Point-of-interest identifier

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identifier of a point of interest, as issued by the spatial data provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PoiId(u64);

impl PoiId {
    /// Wrap a raw provider identifier
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw provider identifier
    #[must_use]
    pub const fn value(&self) -> u64 {
        self.0
    }
}

impl From<u64> for PoiId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for PoiId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
