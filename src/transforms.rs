//! Synthetic noise for building test datasets
//!
//! Real measurements are never exact. These helpers perturb the y channel of
//! an `(x, y)` dataset so fits can be exercised on realistic input.
//!
//! - Gaussian noise: [`NoiseTransform::Gaussian`] / [`ApplyNoise::apply_normal_noise`]
//! - Uniform noise: [`NoiseTransform::Uniform`] / [`ApplyNoise::apply_uniform_noise`]
//!
//! Both take an optional seed; the same seed always produces the same noise.
//!
//! ```rust
//! use chartfit::transforms::ApplyNoise;
//!
//! let clean: Vec<(f64, f64)> = (0..10).map(|x| (x as f64, 2.0 * x as f64)).collect();
//! let noisy = clean.clone().apply_normal_noise(0.1, Some(42));
//! assert_eq!(noisy, clean.apply_normal_noise(0.1, Some(42)));
//! ```
use rand::SeedableRng;
use rand_distr::{Distribution, Normal, Uniform};

use crate::value::Value;

pub use rand;
pub use rand_distr;

/// Types of noise that can be added to data
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NoiseTransform {
    /// Adds independent Gaussian noise to every value.
    ///
    /// <div class="warning">
    ///
    /// **Technical Details**
    ///
    /// ```math
    /// yₙ' = yₙ + εₙ
    /// where
    ///   εₙ ~ N(0, strength²)
    /// ```
    /// </div>
    Gaussian {
        /// Standard deviation of the noise, in the units of the data
        strength: f64,

        /// Fixes the RNG seed for reproducibility.
        /// If not provided, a system RNG will be used each run.
        seed: Option<u64>,
    },

    /// Adds noise drawn uniformly from `[-strength, strength)` to every value.
    ///
    /// The standard deviation of the noise is `strength / √3`.
    Uniform {
        /// Half-width of the noise interval
        strength: f64,

        /// Fixes the RNG seed for reproducibility.
        /// If not provided, a system RNG will be used each run.
        seed: Option<u64>,
    },
}
impl NoiseTransform {
    fn seed(&self) -> Option<u64> {
        match self {
            NoiseTransform::Gaussian { seed, .. } | NoiseTransform::Uniform { seed, .. } => *seed,
        }
    }

    fn rng(seed: Option<u64>) -> rand::rngs::SmallRng {
        match seed {
            Some(s) => rand::rngs::SmallRng::seed_from_u64(s),
            None => rand::rngs::SmallRng::from_rng(&mut rand::rng()),
        }
    }

    /// Applies the noise to each value in turn.
    ///
    /// A zero or non-finite strength leaves the data unchanged.
    pub fn apply<'a, T: Value>(&self, data: impl Iterator<Item = &'a mut T>) {
        let mut rng = Self::rng(self.seed());
        match *self {
            NoiseTransform::Gaussian { strength, .. } => {
                let Ok(gaussian) = Normal::new(0.0, strength.abs()) else {
                    return;
                };
                for v in data {
                    perturb(v, gaussian.sample(&mut rng));
                }
            }

            NoiseTransform::Uniform { strength, .. } => {
                let strength = strength.abs();
                let Ok(uniform) = Uniform::new(-strength, strength) else {
                    return;
                };
                for v in data {
                    perturb(v, uniform.sample(&mut rng));
                }
            }
        }
    }
}

/// Adds `noise` to a value, leaving it unchanged if the result is not representable
fn perturb<T: Value>(value: &mut T, noise: f64) {
    if let Ok(noisy) = value.widen().and_then(|v| T::narrow(v + noise)) {
        *value = noisy;
    }
}

/// Trait for applying noise to the y channel of a dataset.
pub trait ApplyNoise {
    /// Adds Gaussian noise with standard deviation `strength` to every y value.
    ///
    /// See [`NoiseTransform::Gaussian`].
    #[must_use]
    fn apply_normal_noise(self, strength: f64, seed: Option<u64>) -> Self;

    /// Adds uniform noise in `[-strength, strength)` to every y value.
    ///
    /// See [`NoiseTransform::Uniform`].
    #[must_use]
    fn apply_uniform_noise(self, strength: f64, seed: Option<u64>) -> Self;
}

impl<T: Value> ApplyNoise for Vec<(T, T)> {
    fn apply_normal_noise(mut self, strength: f64, seed: Option<u64>) -> Self {
        NoiseTransform::Gaussian { strength, seed }.apply(self.iter_mut().map(|(_, y)| y));
        self
    }

    fn apply_uniform_noise(mut self, strength: f64, seed: Option<u64>) -> Self {
        NoiseTransform::Uniform { strength, seed }.apply(self.iter_mut().map(|(_, y)| y));
        self
    }
}
