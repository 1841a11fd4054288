//! Seeded random points for demos and benchmarks.
//!
//! Model
//! - Integer coordinates drawn uniformly from `[min, max]` (inclusive), stored
//!   as `f64`. The defaults reproduce the five-point demo on `[-10, 10]`.
//! - Determinism: one `StdRng` seeded from `seed`; same inputs, same points.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::point::Point;

/// Sampler configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SampleCfg {
    pub count: usize,
    /// Inclusive bounds for both coordinates. Swapped if given in reverse.
    pub min: i64,
    pub max: i64,
}

impl Default for SampleCfg {
    fn default() -> Self {
        Self {
            count: 5,
            min: -10,
            max: 10,
        }
    }
}

/// Draw `cfg.count` points with integer coordinates.
pub fn draw_points(cfg: SampleCfg, seed: u64) -> Vec<Point> {
    let (lo, hi) = if cfg.min <= cfg.max {
        (cfg.min, cfg.max)
    } else {
        (cfg.max, cfg.min)
    };
    let mut rng = StdRng::seed_from_u64(seed);
    (0..cfg.count)
        .map(|_| {
            let x = rng.gen_range(lo..=hi) as f64;
            let y = rng.gen_range(lo..=hi) as f64;
            Point::new(x, y)
        })
        .collect()
}
