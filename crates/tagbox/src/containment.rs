//! Containment of a centroid set in the box.

use crate::boundary::BoxBoundary;
use crate::cfg::BoxCfg;
use crate::types::{AsCentroid, CentroidError};

/// True iff every centroid lies in the centred box described by `cfg`.
///
/// Errors: `EmptyInput` for an empty slice, `MissingField` for a record
/// without `x`/`y`. Stops at the first centroid outside the box, so records
/// after it are not validated.
pub fn are_centroids_within_box<C: AsCentroid>(
    centroids: &[C],
    cfg: &BoxCfg,
) -> Result<bool, CentroidError> {
    are_centroids_within(centroids, &cfg.boundaries())
}

/// Same check against an arbitrary box (e.g. one from `sample::draw_box`).
pub fn are_centroids_within<C: AsCentroid>(
    centroids: &[C],
    bounds: &BoxBoundary,
) -> Result<bool, CentroidError> {
    if centroids.is_empty() {
        return Err(CentroidError::EmptyInput);
    }
    for record in centroids {
        let c = record.as_centroid()?;
        if !bounds.contains(c.as_vec2()) {
            return Ok(false);
        }
    }
    Ok(true)
}
