use rand::Rng;

use super::config::{SimConfig, NUM_REGIONS};
use super::error::{Result, SimError};

/// Draws one search-effectiveness value per region per round, uniform in a
/// configured band.
pub struct EffectivenessSampler {
    min: f64,
    max: f64,
}

impl EffectivenessSampler {
    pub fn new(min: f64, max: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&min) || !(0.0..=1.0).contains(&max) || min > max {
            return Err(SimError::InvalidBand(min, max));
        }
        Ok(EffectivenessSampler { min, max })
    }

    pub fn from_config(config: &SimConfig) -> Result<Self> {
        EffectivenessSampler::new(config.effectiveness_min, config.effectiveness_max)
    }

    pub fn sample<R: Rng>(&self, rng: &mut R) -> [f64; NUM_REGIONS] {
        let mut values = [0.0; NUM_REGIONS];
        for value in &mut values {
            *value = rng.gen_range(self.min..=self.max);
        }
        values
    }
}
