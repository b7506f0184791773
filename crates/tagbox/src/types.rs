//! Centroid records and the validation errors raised when turning keyed
//! records into them.
//!
//! - `Centroid`: validated marker position, `x`/`y` always present.
//! - `RawCentroid`: keyed record as it arrives from JSON or Python, fields optional.
//! - `AsCentroid`: one validation step at the boundary; generic queries call it
//!   once per record.

use std::collections::HashMap;
use std::fmt;

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

/// Tracked marker position in field coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Centroid {
    pub x: f64,
    pub y: f64,
}

impl Centroid {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
    #[inline]
    pub fn as_vec2(&self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }
}

impl From<Vector2<f64>> for Centroid {
    fn from(p: Vector2<f64>) -> Self {
        Self { x: p.x, y: p.y }
    }
}

/// Keyed record with possibly missing coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RawCentroid {
    pub x: Option<f64>,
    pub y: Option<f64>,
}

/// Coordinate key of a centroid record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    X,
    Y,
}

impl Field {
    pub fn key(self) -> &'static str {
        match self {
            Field::X => "x",
            Field::Y => "y",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Input validation errors for centroid queries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CentroidError {
    /// Containment was asked about zero centroids.
    EmptyInput,
    /// A record lacks one of the coordinate keys (or holds a non-number there).
    MissingField { field: Field },
}

impl fmt::Display for CentroidError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CentroidError::EmptyInput => write!(f, "centroids list cannot be empty"),
            CentroidError::MissingField { field } => {
                write!(f, "each centroid must have the key: '{}'", field)
            }
        }
    }
}

impl std::error::Error for CentroidError {}

/// Anything that can be validated into a `Centroid`.
///
/// Implementors only look up single coordinates; order queries need `x` alone.
pub trait AsCentroid {
    fn coord(&self, field: Field) -> Result<f64, CentroidError>;

    #[inline]
    fn as_centroid(&self) -> Result<Centroid, CentroidError> {
        Ok(Centroid {
            x: self.coord(Field::X)?,
            y: self.coord(Field::Y)?,
        })
    }
}

impl AsCentroid for Centroid {
    #[inline]
    fn coord(&self, field: Field) -> Result<f64, CentroidError> {
        Ok(match field {
            Field::X => self.x,
            Field::Y => self.y,
        })
    }
    #[inline]
    fn as_centroid(&self) -> Result<Centroid, CentroidError> {
        Ok(*self)
    }
}

impl AsCentroid for RawCentroid {
    fn coord(&self, field: Field) -> Result<f64, CentroidError> {
        match field {
            Field::X => self.x,
            Field::Y => self.y,
        }
        .ok_or(CentroidError::MissingField { field })
    }
}

impl AsCentroid for serde_json::Value {
    fn coord(&self, field: Field) -> Result<f64, CentroidError> {
        self.get(field.key())
            .and_then(serde_json::Value::as_f64)
            .ok_or(CentroidError::MissingField { field })
    }
}

impl<S: std::hash::BuildHasher> AsCentroid for HashMap<String, f64, S> {
    fn coord(&self, field: Field) -> Result<f64, CentroidError> {
        self.get(field.key())
            .copied()
            .ok_or(CentroidError::MissingField { field })
    }
}

/// Validate a whole slice up front, failing on the first bad record.
pub fn validate_all<C: AsCentroid>(records: &[C]) -> Result<Vec<Centroid>, CentroidError> {
    records.iter().map(AsCentroid::as_centroid).collect()
}

/// `x` of every record, failing on the first record without one.
pub fn validate_x<C: AsCentroid>(records: &[C]) -> Result<Vec<f64>, CentroidError> {
    records.iter().map(|r| r.coord(Field::X)).collect()
}
