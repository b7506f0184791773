//! Compass hints for centroids outside the box.
//!
//! Field coordinates grow east along `x` and north along `y`, so a centroid
//! left of the box must move East and one below it must move North.

use std::fmt;

use nalgebra::Vector2;
use serde::{Serialize, Serializer};

use crate::boundary::BoxBoundary;
use crate::cfg::BoxCfg;
use crate::types::{AsCentroid, CentroidError};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Horizontal {
    East,
    West,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Vertical {
    North,
    South,
}

/// Combined move direction. Both components absent means "Inside".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Direction {
    pub horizontal: Option<Horizontal>,
    pub vertical: Option<Vertical>,
}

impl Direction {
    pub const INSIDE: Direction = Direction {
        horizontal: None,
        vertical: None,
    };

    #[inline]
    pub fn is_inside(&self) -> bool {
        self.horizontal.is_none() && self.vertical.is_none()
    }
}

impl fmt::Display for Horizontal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Horizontal::East => "East",
            Horizontal::West => "West",
        })
    }
}

impl fmt::Display for Vertical {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Vertical::North => "North",
            Vertical::South => "South",
        })
    }
}

/// Horizontal part first, joined with `" and "`.
impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.horizontal, self.vertical) {
            (Some(h), Some(v)) => write!(f, "{} and {}", h, v),
            (Some(h), None) => write!(f, "{}", h),
            (None, Some(v)) => write!(f, "{}", v),
            (None, None) => f.write_str("Inside"),
        }
    }
}

impl Serialize for Direction {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Move hint for one centroid outside the box.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct MoveStep {
    /// Position in the input sequence.
    pub index: usize,
    pub direction: Direction,
}

/// Direction that brings `p` back into `bounds`.
pub fn classify(p: Vector2<f64>, bounds: &BoxBoundary) -> Direction {
    let horizontal = if p.x < bounds.min_x {
        Some(Horizontal::East)
    } else if p.x > bounds.max_x {
        Some(Horizontal::West)
    } else {
        None
    };
    let vertical = if p.y < bounds.min_y {
        Some(Vertical::North)
    } else if p.y > bounds.max_y {
        Some(Vertical::South)
    } else {
        None
    };
    Direction {
        horizontal,
        vertical,
    }
}

/// Move hints for every centroid outside the centred box, in input order.
pub fn determine_move_steps<C: AsCentroid>(
    centroids: &[C],
    cfg: &BoxCfg,
) -> Result<Vec<MoveStep>, CentroidError> {
    determine_move_steps_within(centroids, &cfg.boundaries())
}

/// Same as `determine_move_steps` for an arbitrary box.
pub fn determine_move_steps_within<C: AsCentroid>(
    centroids: &[C],
    bounds: &BoxBoundary,
) -> Result<Vec<MoveStep>, CentroidError> {
    let mut steps = Vec::new();
    for (index, record) in centroids.iter().enumerate() {
        let direction = classify(record.as_centroid()?.as_vec2(), bounds);
        if !direction.is_inside() {
            steps.push(MoveStep { index, direction });
        }
    }
    Ok(steps)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Centroid, Field};
    use serde_json::json;

    fn names(steps: &[MoveStep]) -> Vec<(usize, String)> {
        steps
            .iter()
            .map(|s| (s.index, s.direction.to_string()))
            .collect()
    }

    #[test]
    fn west_of_box_moves_east() {
        let cs = [Centroid::new(0.0, 42.5)];
        let steps = determine_move_steps(&cs, &BoxCfg::default()).unwrap();
        assert_eq!(names(&steps), vec![(0, "East".to_string())]);
    }

    #[test]
    fn corner_combines_horizontal_first() {
        let cs = [Centroid::new(0.0, 0.0)];
        let steps = determine_move_steps(&cs, &BoxCfg::default()).unwrap();
        assert_eq!(names(&steps), vec![(0, "East and North".to_string())]);
    }

    #[test]
    fn all_eight_outside_regions() {
        let b = BoxCfg::default().boundaries();
        let cases = [
            ((20.0, 40.0), "East"),
            ((80.0, 40.0), "West"),
            ((50.0, 10.0), "North"),
            ((50.0, 80.0), "South"),
            ((20.0, 10.0), "East and North"),
            ((20.0, 80.0), "East and South"),
            ((80.0, 10.0), "West and North"),
            ((80.0, 80.0), "West and South"),
            ((50.0, 42.5), "Inside"),
        ];
        for ((x, y), want) in cases {
            assert_eq!(classify(Vector2::new(x, y), &b).to_string(), want);
        }
    }

    #[test]
    fn inside_centroids_are_skipped_and_indices_kept() {
        let cs = [
            Centroid::new(50.0, 42.5),
            Centroid::new(75.0, 42.5),
            Centroid::new(30.0, 32.5),
            Centroid::new(50.0, 60.0),
        ];
        let steps = determine_move_steps(&cs, &BoxCfg::default()).unwrap();
        assert_eq!(
            names(&steps),
            vec![(1, "West".to_string()), (3, "South".to_string())]
        );
    }

    #[test]
    fn empty_input_gives_no_steps() {
        let none: [Centroid; 0] = [];
        assert_eq!(determine_move_steps(&none, &BoxCfg::default()), Ok(vec![]));
    }

    #[test]
    fn missing_field_fails_even_after_outside_records() {
        let recs = vec![json!({"x": 0.0, "y": 0.0}), json!({"y": 3.0})];
        assert_eq!(
            determine_move_steps(&recs, &BoxCfg::default()),
            Err(CentroidError::MissingField { field: Field::X })
        );
    }

    #[test]
    fn move_steps_serialize_as_text() {
        let step = MoveStep {
            index: 2,
            direction: Direction {
                horizontal: Some(Horizontal::West),
                vertical: Some(Vertical::North),
            },
        };
        assert_eq!(
            serde_json::to_value(step).unwrap(),
            json!({"index": 2, "direction": "West and North"})
        );
        assert!(Direction::INSIDE.is_inside());
        assert_eq!(Direction::default(), Direction::INSIDE);
    }
}
