use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

pub const DEFAULT_SEED: u64 = 2025;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JitterConfig {
    /// Offset range in years added to the English attestation year.
    pub x_range: (f64, f64),
    /// Offset range in years added to the time gap.
    pub y_range: (f64, f64),
    pub seed: u64,
}

impl Default for JitterConfig {
    fn default() -> Self {
        Self {
            x_range: (-3.0, 3.0),
            y_range: (-5.0, 5.0),
            seed: DEFAULT_SEED,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct JitteredPoint {
    pub x: f64,
    pub y: f64,
}

/// Offsets each `(x, y)` pair with seeded uniform noise, rounded to two decimals.
///
/// All x offsets are drawn before any y offset, so a point's jitter depends only on the seed and
/// its position in `points`.
pub fn apply_jitter(points: &[(f64, f64)], config: &JitterConfig) -> Vec<JitteredPoint> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let x_offsets: Vec<f64> = points
        .iter()
        .map(|_| sample(&mut rng, config.x_range))
        .collect();
    let y_offsets: Vec<f64> = points
        .iter()
        .map(|_| sample(&mut rng, config.y_range))
        .collect();

    points
        .iter()
        .zip(x_offsets.into_iter().zip(y_offsets))
        .map(|(&(x, y), (dx, dy))| JitteredPoint {
            x: round_hundredths(x + dx),
            y: round_hundredths(y + dy),
        })
        .collect()
}

fn sample(rng: &mut StdRng, (low, high): (f64, f64)) -> f64 {
    if high > low {
        rng.gen_range(low..high)
    } else {
        low
    }
}

fn round_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
