//! Left-to-right tag order and swap plans that restore it.
//!
//! Model
//! - `sorting_permutation` maps each original index to its slot in the
//!   x-ascending order (ties keep input order).
//! - That permutation splits into disjoint cycles; a cycle of length `k`
//!   needs `k-1` swaps, so a plan has `n - #cycles` steps, the minimum for
//!   any sequence of transpositions.
//! - Each cycle contributes its consecutive index pairs. They are emitted
//!   tail first: swapping `(c[j], c[j+1])` parks the element from `c[j]` in
//!   its final slot `c[j+1]`, and the element travelling back toward `c[0]`
//!   ends where it belongs.

use serde::{Deserialize, Serialize};

use crate::types::{validate_x, AsCentroid, Centroid, CentroidError};

/// Swap of the elements currently at two positions of the original sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReorderStep(pub usize, pub usize);

impl ReorderStep {
    #[inline]
    pub fn from_index(&self) -> usize {
        self.0
    }
    #[inline]
    pub fn to_index(&self) -> usize {
        self.1
    }
}

/// Exactly three tags with strictly increasing `x`.
pub fn are_tags_in_order(centroids: &[Centroid]) -> bool {
    match centroids {
        [a, b, c] => a.x < b.x && b.x < c.x,
        _ => false,
    }
}

/// `are_tags_in_order` for keyed records; a record without a numeric `x`
/// makes the set "not in order" rather than an error.
pub fn are_records_in_order<C: AsCentroid>(records: &[C]) -> bool {
    match validate_x(records).as_deref() {
        Ok([a, b, c]) => a < b && b < c,
        _ => false,
    }
}

/// `mapping[original_index] = target_index` of the stable x-ascending sort.
pub fn sorting_permutation(centroids: &[Centroid]) -> Vec<usize> {
    let xs: Vec<f64> = centroids.iter().map(|c| c.x).collect();
    permutation_of(&xs)
}

/// Sorts with `f64::total_cmp` on `x + 0.0`: NaN lands after every number
/// and `-0.0` ties with `0.0`.
fn permutation_of(xs: &[f64]) -> Vec<usize> {
    let mut by_x: Vec<usize> = (0..xs.len()).collect();
    by_x.sort_by(|&a, &b| (xs[a] + 0.0).total_cmp(&(xs[b] + 0.0)).then(a.cmp(&b)));
    let mut mapping = vec![0; xs.len()];
    for (target, &original) in by_x.iter().enumerate() {
        mapping[original] = target;
    }
    mapping
}

/// Minimal swap plan that sorts `centroids` by ascending `x`.
///
/// Empty and already sorted inputs yield no steps.
pub fn determine_reorder_steps(centroids: &[Centroid]) -> Vec<ReorderStep> {
    let xs: Vec<f64> = centroids.iter().map(|c| c.x).collect();
    steps_for(&xs)
}

/// `determine_reorder_steps` for keyed records; only `x` is required.
pub fn determine_reorder_steps_for<C: AsCentroid>(
    records: &[C],
) -> Result<Vec<ReorderStep>, CentroidError> {
    Ok(steps_for(&validate_x(records)?))
}

fn steps_for(xs: &[f64]) -> Vec<ReorderStep> {
    let mapping = permutation_of(xs);
    let mut visited = vec![false; mapping.len()];
    let mut steps = Vec::new();
    let mut cycle = Vec::new();
    for start in 0..mapping.len() {
        if visited[start] || mapping[start] == start {
            continue;
        }
        cycle.clear();
        let mut i = start;
        while !visited[i] {
            visited[i] = true;
            cycle.push(i);
            i = mapping[i];
        }
        steps.extend(cycle.windows(2).rev().map(|w| ReorderStep(w[0], w[1])));
    }
    steps
}

/// Apply `steps` as sequential swaps.
///
/// Panics if a step refers to an index outside `items`.
pub fn apply_reorder_steps<T>(items: &mut [T], steps: &[ReorderStep]) {
    for step in steps {
        items.swap(step.0, step.1);
    }
}
