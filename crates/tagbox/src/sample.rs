//! Random box placement and scattered centroids (replayable).
//!
//! Purpose
//! - Check markers against a box of random size and position instead of the
//!   fixed centred one.
//! - Feed benches and randomized tests with reproducible centroid sets.
//!
//! Model
//! - Width and height are drawn uniformly from their ranges after clamping
//!   to the field; the centre is then drawn so the box lies inside the field.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::boundary::BoxBoundary;
use crate::types::Centroid;

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    pub fn new(seed: u64, index: u64) -> Self {
        Self { seed, index }
    }
    /// Token for the next draw in the same stream.
    #[inline]
    pub fn next(self) -> Self {
        Self {
            seed: self.seed,
            index: self.index.wrapping_add(1),
        }
    }
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        StdRng::seed_from_u64(mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15))))
    }
}

/// Size ranges for a random box inside a `field_width × field_height` field.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoxDrawCfg {
    /// `(min, max)` box width, clamped to `[0, field_width]`.
    pub width: (f64, f64),
    /// `(min, max)` box height, clamped to `[0, field_height]`.
    pub height: (f64, f64),
    pub field_width: f64,
    pub field_height: f64,
}

impl Default for BoxDrawCfg {
    fn default() -> Self {
        Self {
            width: (20.0, 60.0),
            height: (10.0, 30.0),
            field_width: 100.0,
            field_height: 85.0,
        }
    }
}

fn clamp_range((lo, hi): (f64, f64), limit: f64) -> Option<(f64, f64)> {
    if !limit.is_finite() || limit <= 0.0 {
        return None;
    }
    let lo = lo.max(0.0);
    let hi = hi.min(limit);
    if !(lo.is_finite() && hi.is_finite()) || hi <= 0.0 || lo > hi {
        return None;
    }
    Some((lo, hi))
}

#[inline]
fn uniform<R: Rng>(rng: &mut R, lo: f64, hi: f64) -> f64 {
    if lo < hi {
        rng.gen_range(lo..=hi)
    } else {
        lo
    }
}

/// Draw a box that fits entirely in the field.
///
/// Returns `None` when a field side is not finite and positive, or a size
/// range is empty after clamping to the field.
pub fn draw_box(cfg: BoxDrawCfg, tok: ReplayToken) -> Option<BoxBoundary> {
    let (w_lo, w_hi) = clamp_range(cfg.width, cfg.field_width)?;
    let (h_lo, h_hi) = clamp_range(cfg.height, cfg.field_height)?;
    let mut rng = tok.to_std_rng();
    let w = uniform(&mut rng, w_lo, w_hi);
    let h = uniform(&mut rng, h_lo, h_hi);
    let cx = uniform(&mut rng, w / 2.0, cfg.field_width - w / 2.0);
    let cy = uniform(&mut rng, h / 2.0, cfg.field_height - h / 2.0);
    Some(BoxBoundary::centered_at(Vector2::new(cx, cy), w, h))
}

/// `n` centroids uniform in `[0, field_width) × [0, field_height)`.
pub fn scatter_centroids(
    n: usize,
    field_width: f64,
    field_height: f64,
    tok: ReplayToken,
) -> Vec<Centroid> {
    let mut rng = tok.to_std_rng();
    (0..n)
        .map(|_| {
            Centroid::new(
                rng.gen::<f64>() * field_width,
                rng.gen::<f64>() * field_height,
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::containment::are_centroids_within;

    #[test]
    fn drawn_boxes_fit_the_field() {
        let cfg = BoxDrawCfg::default();
        let mut tok = ReplayToken::new(11, 0);
        for _ in 0..500 {
            let b = draw_box(cfg, tok).expect("valid ranges");
            assert!(b.min_x >= -1e-9 && b.max_x <= cfg.field_width + 1e-9);
            assert!(b.min_y >= -1e-9 && b.max_y <= cfg.field_height + 1e-9);
            assert!(b.width() >= 20.0 - 1e-9 && b.width() <= 60.0 + 1e-9);
            assert!(b.height() >= 10.0 - 1e-9 && b.height() <= 30.0 + 1e-9);
            tok = tok.next();
        }
    }

    #[test]
    fn draws_replay_exactly() {
        let cfg = BoxDrawCfg::default();
        let tok = ReplayToken::new(3, 9);
        assert_eq!(draw_box(cfg, tok), draw_box(cfg, tok));
        assert_ne!(draw_box(cfg, tok), draw_box(cfg, tok.next()));
        assert_eq!(
            scatter_centroids(4, 100.0, 85.0, tok),
            scatter_centroids(4, 100.0, 85.0, tok)
        );
    }

    #[test]
    fn empty_or_oversized_ranges() {
        let inverted = BoxDrawCfg {
            width: (50.0, 10.0),
            ..BoxDrawCfg::default()
        };
        assert!(draw_box(inverted, ReplayToken::new(0, 0)).is_none());
        let too_wide = BoxDrawCfg {
            width: (150.0, 200.0),
            ..BoxDrawCfg::default()
        };
        assert!(draw_box(too_wide, ReplayToken::new(0, 0)).is_none());
        // a range touching the field size yields the full-width box
        let full = BoxDrawCfg {
            width: (100.0, 300.0),
            ..BoxDrawCfg::default()
        };
        let b = draw_box(full, ReplayToken::new(0, 0)).unwrap();
        assert!((b.width() - 100.0).abs() < 1e-9);
        assert!(b.min_x.abs() < 1e-9);
    }

    #[test]
    fn unbounded_or_degenerate_fields_draw_nothing() {
        let tok = ReplayToken::new(0, 0);
        for (fw, fh) in [
            (f64::INFINITY, 85.0),
            (100.0, f64::INFINITY),
            (f64::NAN, 85.0),
            (0.0, 85.0),
            (100.0, -5.0),
        ] {
            let cfg = BoxDrawCfg {
                field_width: fw,
                field_height: fh,
                ..BoxDrawCfg::default()
            };
            assert!(draw_box(cfg, tok).is_none(), "field {fw} x {fh}");
        }
    }

    #[test]
    fn scattered_centroids_fit_a_field_sized_box() {
        let cs = scatter_centroids(64, 100.0, 85.0, ReplayToken::new(5, 1));
        assert_eq!(cs.len(), 64);
        let field = BoxBoundary {
            min_x: 0.0,
            max_x: 100.0,
            min_y: 0.0,
            max_y: 85.0,
        };
        assert_eq!(are_centroids_within(&cs, &field), Ok(true));
    }
}
