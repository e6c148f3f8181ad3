//! POI discovery port

use async_trait::async_trait;
use domain::{BoundingBox, PointOfInterest};
#[cfg(test)]
use mockall::automock;

/// Port for finding points of interest inside an area
///
/// Discovery is best-effort: provider failures degrade to an empty list
/// and are never surfaced to the caller.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait PoiDiscoveryPort: Send + Sync {
    /// POIs within `area`, in provider order
    async fn discover(&self, area: &BoundingBox) -> Vec<PointOfInterest>;
}
