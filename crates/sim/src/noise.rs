use std::f64::consts::TAU;

use rand::{Rng, SeedableRng, rngs::StdRng};

/// Nominal voltmeter standard deviation, in volts.
pub(crate) const VOLTMETER_SIGMA: f64 = 0.1;

/// Nominal ammeter standard deviation, in amperes.
pub(crate) const AMMETER_SIGMA: f64 = 5e-4;

/// Measurement noise of the simulated meters.
///
/// Each reading gets independent zero-mean Gaussian noise with the given
/// standard deviation, which is also the uncertainty the meter reports
/// through [`Sensor::uncertainty`](ohmic_core::Sensor::uncertainty).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct NoiseConfig {
    /// Voltmeter noise, in volts.
    pub voltmeter_sigma: f64,
    /// Ammeter noise, in amperes.
    pub ammeter_sigma: f64,
    /// Seed for the noise generator; equal seeds give equal readings.
    pub seed: u64,
}

impl NoiseConfig {
    /// Noise free meters, which then report zero uncertainty.
    #[must_use]
    pub fn noiseless() -> Self {
        Self {
            voltmeter_sigma: 0.0,
            ammeter_sigma: 0.0,
            ..Self::default()
        }
    }

    /// Returns this config with a different seed.
    #[must_use]
    pub fn with_seed(self, seed: u64) -> Self {
        Self { seed, ..self }
    }
}

impl Default for NoiseConfig {
    fn default() -> Self {
        Self {
            voltmeter_sigma: VOLTMETER_SIGMA,
            ammeter_sigma: AMMETER_SIGMA,
            seed: 0,
        }
    }
}

/// Seeded Gaussian noise source.
#[derive(Debug)]
pub(crate) struct NoiseSource {
    rng: StdRng,
}

impl NoiseSource {
    pub(crate) fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Draws one sample from `N(0, sigma²)` using the Box-Muller transform.
    pub(crate) fn sample(&mut self, sigma: f64) -> f64 {
        if sigma <= 0.0 {
            return 0.0;
        }

        let u1: f64 = self.rng.gen_range(f64::MIN_POSITIVE..1.0);
        let u2: f64 = self.rng.gen_range(0.0..1.0);
        sigma * (-2.0 * u1.ln()).sqrt() * (TAU * u2).cos()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_sigma_is_silent() {
        let mut noise = NoiseSource::new(7);
        assert!((0..100).all(|_| noise.sample(0.0) == 0.0));
    }

    #[test]
    fn same_seed_same_sequence() {
        let mut a = NoiseSource::new(42);
        let mut b = NoiseSource::new(42);

        let xs: Vec<f64> = (0..10).map(|_| a.sample(1.0)).collect();
        let ys: Vec<f64> = (0..10).map(|_| b.sample(1.0)).collect();
        assert_eq!(xs, ys);
    }

    #[test]
    fn samples_have_roughly_the_requested_spread() {
        let mut noise = NoiseSource::new(3);
        let n = 20_000;

        let samples: Vec<f64> = (0..n).map(|_| noise.sample(2.0)).collect();
        #[allow(clippy::cast_precision_loss)]
        let mean = samples.iter().sum::<f64>() / n as f64;
        #[allow(clippy::cast_precision_loss)]
        let variance = samples.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n as f64;

        assert!(mean.abs() < 0.1, "mean {mean}");
        assert!((variance.sqrt() - 2.0).abs() < 0.1, "std {}", variance.sqrt());
    }
}
