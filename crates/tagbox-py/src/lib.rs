//! PyO3 bindings for the `tagbox` queries.
//!
//! Notes
//! - Centroids arrive as dicts with `x`/`y`; a missing (or non-numeric) key
//!   raises `ValueError` naming it, other keys are ignored.
//! - Defaults mirror `BoxCfg::default()` (40, 20, 100, 85).

mod common;

use common::{map_centroid_err, wrap};
use pyo3::prelude::*;
use pyo3::types::PyDict;
use tagbox::BoxCfg;

fn cfg(box_width: f64, box_height: f64, field_width: f64, field_height: f64) -> BoxCfg {
    BoxCfg {
        box_width,
        box_height,
        field_width,
        field_height,
    }
}

/// `(min_x, max_x, min_y, max_y)` of the centred box.
#[pyfunction]
fn calculate_box_boundaries(
    box_width: f64,
    box_height: f64,
    field_width: f64,
    field_height: f64,
) -> (f64, f64, f64, f64) {
    tagbox::calculate_box_boundaries(box_width, box_height, field_width, field_height).as_tuple()
}

#[pyfunction]
#[pyo3(signature = (centroids, box_width=40.0, box_height=20.0, field_width=100.0, field_height=85.0))]
fn are_centroids_within_box(
    centroids: Vec<&PyDict>,
    box_width: f64,
    box_height: f64,
    field_width: f64,
    field_height: f64,
) -> PyResult<bool> {
    tagbox::containment::are_centroids_within_box(
        &wrap(centroids),
        &cfg(box_width, box_height, field_width, field_height),
    )
    .map_err(map_centroid_err)
}

/// `False` unless exactly three dicts with numeric, strictly increasing `x`.
#[pyfunction]
fn are_tags_in_order(centroids: Vec<&PyDict>) -> bool {
    tagbox::order::are_records_in_order(&wrap(centroids))
}

/// Swap plan as a list of `(from_index, to_index)` tuples. Only `x` is read.
#[pyfunction]
fn determine_reorder_steps(centroids: Vec<&PyDict>) -> PyResult<Vec<(usize, usize)>> {
    let steps = tagbox::order::determine_reorder_steps_for(&wrap(centroids))
        .map_err(map_centroid_err)?;
    Ok(steps
        .into_iter()
        .map(|s| (s.from_index(), s.to_index()))
        .collect())
}

/// Move hints as a list of `(index, direction)` tuples.
#[pyfunction]
#[pyo3(signature = (centroids, box_width=40.0, box_height=20.0, field_width=100.0, field_height=85.0))]
fn determine_move_steps(
    centroids: Vec<&PyDict>,
    box_width: f64,
    box_height: f64,
    field_width: f64,
    field_height: f64,
) -> PyResult<Vec<(usize, String)>> {
    let steps = tagbox::direction::determine_move_steps(
        &wrap(centroids),
        &cfg(box_width, box_height, field_width, field_height),
    )
    .map_err(map_centroid_err)?;
    Ok(steps
        .into_iter()
        .map(|s| (s.index, s.direction.to_string()))
        .collect())
}

/// Box overlay as `(xs, ys, fill_color, border_color)`.
#[pyfunction]
#[pyo3(signature = (box_width=40.0, box_height=20.0, field_width=100.0, field_height=85.0))]
fn get_box_coordinates(
    box_width: f64,
    box_height: f64,
    field_width: f64,
    field_height: f64,
) -> (Vec<f64>, Vec<f64>, String, String) {
    let o = tagbox::outline::get_box_coordinates(&cfg(
        box_width,
        box_height,
        field_width,
        field_height,
    ));
    (o.x.to_vec(), o.y.to_vec(), o.color, o.line.color)
}

#[pymodule]
fn tagbox_native(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(calculate_box_boundaries, m)?)?;
    m.add_function(wrap_pyfunction!(are_centroids_within_box, m)?)?;
    m.add_function(wrap_pyfunction!(are_tags_in_order, m)?)?;
    m.add_function(wrap_pyfunction!(determine_reorder_steps, m)?)?;
    m.add_function(wrap_pyfunction!(determine_move_steps, m)?)?;
    m.add_function(wrap_pyfunction!(get_box_coordinates, m)?)?;
    Ok(())
}
