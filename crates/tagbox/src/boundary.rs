//! Axis-aligned box boundaries.
//!
//! `calculate_box_boundaries` centres a box of the given size in the field.
//! No validation: negative or oversized boxes give inverted or out-of-field
//! bounds and are the caller's problem.

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

/// Closed box `[min_x, max_x] × [min_y, max_y]`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoxBoundary {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl BoxBoundary {
    /// Box of size `width × height` centred at `center`.
    #[inline]
    pub fn centered_at(center: Vector2<f64>, width: f64, height: f64) -> Self {
        Self {
            min_x: center.x - width / 2.0,
            max_x: center.x + width / 2.0,
            min_y: center.y - height / 2.0,
            max_y: center.y + height / 2.0,
        }
    }
    /// Inclusive on all four edges.
    #[inline]
    pub fn contains(&self, p: Vector2<f64>) -> bool {
        self.min_x <= p.x && p.x <= self.max_x && self.min_y <= p.y && p.y <= self.max_y
    }
    #[inline]
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }
    #[inline]
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }
    #[inline]
    pub fn center(&self) -> Vector2<f64> {
        Vector2::new(
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }
    /// `(min_x, max_x, min_y, max_y)`
    #[inline]
    pub fn as_tuple(&self) -> (f64, f64, f64, f64) {
        (self.min_x, self.max_x, self.min_y, self.max_y)
    }
}

/// Boundaries of a `box_width × box_height` box centred at
/// `(field_width/2, field_height/2)`.
pub fn calculate_box_boundaries(
    box_width: f64,
    box_height: f64,
    field_width: f64,
    field_height: f64,
) -> BoxBoundary {
    let center = Vector2::new(field_width / 2.0, field_height / 2.0);
    BoxBoundary::centered_at(center, box_width, box_height)
}
