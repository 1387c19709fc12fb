//! Common test utilities and data builders.

use production_forecast::prelude::*;

pub const PREDICTORS: [&str; 4] = ["yield", "productivity", "workforce", "hours"];

/// Simple deterministic "random" for reproducibility.
fn next_rand(state: &mut u64) -> f64 {
    *state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
    ((*state >> 33) as f64) / (u32::MAX as f64)
}

/// Synthetic production history: four predictors in realistic operating
/// ranges, outcome linear in the predictors plus bounded noise.
pub fn production_dataset(n: usize, seed: u64) -> Dataset {
    let mut state = seed;
    let mut dataset = Dataset::new(PREDICTORS.to_vec());

    for _ in 0..n {
        let yield_pct = 80.0 + 15.0 * next_rand(&mut state);
        let productivity = 1.0 + next_rand(&mut state);
        let workforce = (40.0 + 21.0 * next_rand(&mut state)).floor();
        let hours = (160.0 + 41.0 * next_rand(&mut state)).floor();
        let noise = 6.0 * (next_rand(&mut state) - 0.5);

        let production =
            -45.0 + 1.2 * yield_pct + 14.0 * productivity + 0.35 * workforce + 0.1 * hours + noise;

        dataset
            .push(Observation::new(
                vec![yield_pct, productivity, workforce, hours],
                production,
            ))
            .expect("record matches predictor layout");
    }

    dataset
}

/// Noise-free data with linearly independent predictor columns, for exact
/// coefficient-recovery checks: y = 1 + 2·x₁ + 3·x₂.
pub fn noiseless_dataset(n: usize) -> Dataset {
    let mut dataset = Dataset::new(vec!["x1", "x2"]);

    for i in 0..n {
        let x1 = i as f64;
        let x2 = (i * i) as f64;
        dataset
            .push(Observation::new(vec![x1, x2], 1.0 + 2.0 * x1 + 3.0 * x2))
            .expect("record matches predictor layout");
    }

    dataset
}

/// Data whose second predictor is an exact multiple of the first.
pub fn collinear_dataset(n: usize) -> Dataset {
    let mut dataset = Dataset::new(vec!["a", "a_doubled"]);

    for i in 0..n {
        let a = i as f64;
        dataset
            .push(Observation::new(vec![a, 2.0 * a], 1.0 + a))
            .expect("record matches predictor layout");
    }

    dataset
}

/// Centroid of the predictor columns of a cleaned dataset.
pub fn predictor_centroid(data: &CleanedDataset) -> Vec<f64> {
    let m = data.n_observations() as f64;
    let k = data.n_predictors();

    let mut centroid = vec![0.0; k];
    for record in data.records() {
        for (j, &value) in record.predictors().iter().enumerate() {
            centroid[j] += value;
        }
    }
    for value in &mut centroid {
        *value /= m;
    }
    centroid
}
