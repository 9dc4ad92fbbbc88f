//! Trajectory generator configuration
use super::{IdentityGenerator, OpenLoopSine, PhaseModulated, TrajectoryGenerator};
use crate::spaces::{BoxSpace, IntervalSpace, Space};
use crate::EnvError;
use ndarray::Array1;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Configuration of a trajectory generator over real-vector spaces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TrajectoryGeneratorConfig {
    Identity,
    OpenLoopSine(OpenLoopSine),
    PhaseModulated(PhaseModulatedConfig),
}

impl Default for TrajectoryGeneratorConfig {
    fn default() -> Self {
        Self::Identity
    }
}

impl TrajectoryGeneratorConfig {
    /// Build the configured generator.
    pub fn build<OS, AS>(&self) -> Result<Box<dyn TrajectoryGenerator<OS, AS>>, EnvError>
    where
        OS: Space<Element = Array1<f64>> + From<BoxSpace> + 'static,
        AS: Space<Element = Array1<f64>> + From<BoxSpace> + 'static,
    {
        let generator: Box<dyn TrajectoryGenerator<OS, AS>> = match self {
            Self::Identity => Box::new(IdentityGenerator),
            Self::OpenLoopSine(generator) => {
                generator.validate()?;
                Box::new(generator.clone())
            }
            Self::PhaseModulated(config) => Box::new(config.build()?),
        };
        Ok(generator)
    }
}

/// Configuration of a [`PhaseModulated`] generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhaseModulatedConfig {
    /// Observation space of the environment being wrapped.
    pub observation_space: BoxSpace,
    /// Gait frequency (Hz) before policy modulation.
    pub base_frequency: f64,
    /// Per-motor phase offset (radians).
    pub phase_offsets: Vec<f64>,
    pub frequency_range: IntervalSpace,
    pub amplitude_range: IntervalSpace,
    pub residual_range: IntervalSpace,
}

impl PhaseModulatedConfig {
    pub fn build(&self) -> Result<PhaseModulated, EnvError> {
        if !(self.base_frequency.is_finite() && self.base_frequency >= 0.0) {
            return Err(EnvError::InvalidConfig(format!(
                "base frequency must be finite and non-negative, got {}",
                self.base_frequency
            )));
        }
        if self.phase_offsets.is_empty() {
            return Err(EnvError::InvalidConfig(
                "at least one phase offset is required".into(),
            ));
        }
        let ranges = [
            self.frequency_range,
            self.amplitude_range,
            self.residual_range,
        ];
        if !ranges.iter().all(IntervalSpace::is_bounded) {
            return Err(EnvError::InvalidConfig(
                "modulation ranges must be bounded".into(),
            ));
        }
        // Bounded ranges hold no NaN
        if ranges.iter().any(|range| range.low > range.high) {
            return Err(EnvError::InvalidConfig(
                "modulation ranges must have low <= high".into(),
            ));
        }
        let observation_space = &self.observation_space;
        if observation_space.low.len() != observation_space.high.len()
            || observation_space
                .low
                .iter()
                .zip(&observation_space.high)
                .any(|(low, high)| low.partial_cmp(high).map_or(true, Ordering::is_gt))
        {
            return Err(EnvError::InvalidConfig(
                "observation space bounds must have equal lengths and low <= high".into(),
            ));
        }
        Ok(PhaseModulated::new(
            self.observation_space.clone(),
            self.base_frequency,
            self.phase_offsets.clone(),
            self.frequency_range,
            self.amplitude_range,
            self.residual_range,
        ))
    }
}
