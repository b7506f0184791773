//! Box/field dimensions and presentation constants.

use serde::{Deserialize, Serialize};

use crate::boundary::{calculate_box_boundaries, BoxBoundary};

/// Fill colour of the box overlay consumed by the renderer.
pub const FILL_COLOR: &str = "rgba(0, 255, 0, 0.2)";
/// Border colour of the box overlay consumed by the renderer.
pub const BORDER_COLOR: &str = "rgba(0, 255, 0, 0.8)";

/// Box and field dimensions. The field spans `[0, field_width] × [0, field_height]`
/// and the box is centred in it.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoxCfg {
    pub box_width: f64,
    pub box_height: f64,
    pub field_width: f64,
    pub field_height: f64,
}

impl Default for BoxCfg {
    fn default() -> Self {
        Self {
            box_width: 40.0,
            box_height: 20.0,
            field_width: 100.0,
            field_height: 85.0,
        }
    }
}

impl BoxCfg {
    #[inline]
    pub fn boundaries(&self) -> BoxBoundary {
        calculate_box_boundaries(
            self.box_width,
            self.box_height,
            self.field_width,
            self.field_height,
        )
    }
}
