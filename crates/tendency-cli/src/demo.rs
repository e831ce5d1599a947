//! Synthetic example dataset
//!
//! Four columns drawn from distributions of different shapes, so that mean,
//! median and mode visibly diverge on the skewed ones:
//!
//! | column       | distribution                  |
//! |--------------|-------------------------------|
//! | `Variabile1` | normal, mean 100, std dev 15  |
//! | `Variabile2` | exponential, scale 50         |
//! | `Variabile3` | uniform on `[0, 100)`         |
//! | `Variabile4` | gamma, shape 2, scale 2       |

use anyhow::Context;
use rand::{Rng, SeedableRng as _, distr::Uniform};
use rand_distr::{Distribution, Exp, Gamma, Normal};
use rand_pcg::Pcg64;
use tendency_analysis::dataset::Dataset;

pub const DEFAULT_ROWS: usize = 1000;
pub const DEFAULT_SEED: u64 = 42;

/// Generates the example dataset with `rows` values per column.
///
/// The same `seed` always produces the same dataset. Columns are sampled one
/// after another from a single generator.
pub fn generate(rows: usize, seed: u64) -> anyhow::Result<Dataset> {
    let mut rng = Pcg64::seed_from_u64(seed);

    let normal = Normal::new(100.0, 15.0).context("Invalid normal distribution parameters")?;
    let exponential = Exp::new(1.0 / 50.0).context("Invalid exponential distribution parameters")?;
    let uniform = Uniform::new(0.0, 100.0).context("Invalid uniform distribution parameters")?;
    let gamma = Gamma::new(2.0, 2.0).context("Invalid gamma distribution parameters")?;

    let dataset = Dataset::from_columns([
        ("Variabile1", sample(&normal, rows, &mut rng)),
        ("Variabile2", sample(&exponential, rows, &mut rng)),
        ("Variabile3", sample(&uniform, rows, &mut rng)),
        ("Variabile4", sample(&gamma, rows, &mut rng)),
    ])?;
    tracing::info!(rows, seed, "generated example dataset");
    Ok(dataset)
}

fn sample<D, R>(distribution: &D, rows: usize, rng: &mut R) -> Vec<f64>
where
    D: Distribution<f64>,
    R: Rng,
{
    (0..rows).map(|_| distribution.sample(rng)).collect()
}
