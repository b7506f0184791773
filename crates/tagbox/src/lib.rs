//! Marker-box geometry: containment, left-to-right tag order, and move hints.
//!
//! Layout
//! - `boundary`: centred box bounds (`BoxBoundary`).
//! - `containment`: are all centroids inside the box.
//! - `order`: three-tag order check and minimal swap plans (cycle decomposition).
//! - `direction`: compass hints for centroids outside the box.
//! - `outline`: box overlay descriptor for the renderer.
//! - `sample`: replayable random boxes and scattered centroids.
//!
//! All queries are pure and allocate their own outputs; inputs are never mutated.

pub mod boundary;
pub mod cfg;
pub mod containment;
pub mod direction;
pub mod order;
pub mod outline;
pub mod sample;
pub mod types;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use boundary::{calculate_box_boundaries, BoxBoundary};
pub use cfg::BoxCfg;
pub use types::{AsCentroid, Centroid, CentroidError, Field, RawCentroid};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::boundary::{calculate_box_boundaries, BoxBoundary};
    pub use crate::cfg::{BoxCfg, BORDER_COLOR, FILL_COLOR};
    pub use crate::containment::{are_centroids_within, are_centroids_within_box};
    pub use crate::direction::{
        classify, determine_move_steps, determine_move_steps_within, Direction, Horizontal,
        MoveStep, Vertical,
    };
    pub use crate::order::{
        apply_reorder_steps, are_records_in_order, are_tags_in_order, determine_reorder_steps,
        determine_reorder_steps_for, sorting_permutation, ReorderStep,
    };
    pub use crate::outline::{get_box_coordinates, outline_of, BoxOutline, LineStyle};
    pub use crate::sample::{draw_box, scatter_centroids, BoxDrawCfg, ReplayToken};
    pub use crate::types::{
        validate_all, validate_x, AsCentroid, Centroid, CentroidError, Field, RawCentroid,
    };
}
