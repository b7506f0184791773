//! Box overlay descriptor for the field renderer.

use serde::{Deserialize, Serialize};

use crate::boundary::BoxBoundary;
use crate::cfg::{BoxCfg, BORDER_COLOR, FILL_COLOR};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LineStyle {
    pub color: String,
}

/// Closed polygon (first vertex repeated last) plus fill/border colours.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoxOutline {
    pub x: [f64; 5],
    pub y: [f64; 5],
    pub color: String,
    pub line: LineStyle,
}

pub fn get_box_coordinates(cfg: &BoxCfg) -> BoxOutline {
    outline_of(&cfg.boundaries())
}

/// Counter-clockwise from `(min_x, min_y)`.
pub fn outline_of(b: &BoxBoundary) -> BoxOutline {
    BoxOutline {
        x: [b.min_x, b.max_x, b.max_x, b.min_x, b.min_x],
        y: [b.min_y, b.min_y, b.max_y, b.max_y, b.min_y],
        color: FILL_COLOR.to_string(),
        line: LineStyle {
            color: BORDER_COLOR.to_string(),
        },
    }
}
