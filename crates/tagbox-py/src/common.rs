use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyDict;
use tagbox::{AsCentroid, CentroidError, Field};

/// Borrowed centroid dict. Keys are read only when a query asks for them, so
/// containment can stop early and order queries never touch `y`.
pub struct PyCentroid<'py>(pub &'py PyDict);

impl AsCentroid for PyCentroid<'_> {
    fn coord(&self, field: Field) -> Result<f64, CentroidError> {
        self.0
            .get_item(field.key())
            .ok()
            .flatten()
            .and_then(|v| v.extract::<f64>().ok())
            .ok_or(CentroidError::MissingField { field })
    }
}

/// Wraps without reading any key; validation happens inside each query.
pub fn wrap(ds: Vec<&PyDict>) -> Vec<PyCentroid<'_>> {
    ds.into_iter().map(PyCentroid).collect()
}

pub fn map_centroid_err(err: CentroidError) -> PyErr {
    PyValueError::new_err(err.to_string())
}
