//! Stop selection
//!
//! Picks the stops of a plan from the discovered candidates. The policy is
//! positional: the first [`MAX_STOPS`] candidates in provider order.

use domain::{MAX_STOPS, PointOfInterest};

/// Select at most [`MAX_STOPS`] stops, keeping the input order
#[must_use]
pub fn select(candidates: &[PointOfInterest]) -> Vec<PointOfInterest> {
    candidates.iter().take(MAX_STOPS).cloned().collect()
}
