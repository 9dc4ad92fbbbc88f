use super::{check_len, TrajectoryGenerator};
use crate::spaces::{BoxSpace, Space};
use crate::EnvError;
use ndarray::Array1;
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

/// Open-loop periodic signal added on top of the policy action.
///
/// Motor `i` receives `action[i] + amplitude * sin(2π * frequency * t + phase_offsets[i])`.
/// The policy then only has to learn a residual around a fixed gait.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpenLoopSine {
    /// Signal amplitude (radians).
    pub amplitude: f64,
    /// Signal frequency (Hz).
    pub frequency: f64,
    /// Per-motor phase offset (radians). Also fixes the number of motors.
    pub phase_offsets: Vec<f64>,
    /// Bounds the combined action is clipped into, if any.
    #[serde(default)]
    pub action_bounds: Option<BoxSpace>,
}

impl OpenLoopSine {
    pub fn new(amplitude: f64, frequency: f64, phase_offsets: Vec<f64>) -> Self {
        Self {
            amplitude,
            frequency,
            phase_offsets,
            action_bounds: None,
        }
    }

    #[must_use]
    pub fn with_action_bounds(mut self, bounds: BoxSpace) -> Self {
        self.action_bounds = Some(bounds);
        self
    }

    pub fn num_motors(&self) -> usize {
        self.phase_offsets.len()
    }

    /// The open-loop signal at time `time`.
    pub fn signal(&self, time: f64) -> Array1<f64> {
        let angle = TAU * self.frequency * time;
        self.phase_offsets
            .iter()
            .map(|offset| self.amplitude * (angle + offset).sin())
            .collect()
    }

    /// Check the parameters are usable.
    pub fn validate(&self) -> Result<(), EnvError> {
        if !(self.amplitude.is_finite() && self.frequency.is_finite()) {
            return Err(EnvError::InvalidConfig(
                "amplitude and frequency must be finite".into(),
            ));
        }
        if let Some(bounds) = &self.action_bounds {
            if bounds.len() != self.num_motors() {
                return Err(EnvError::InvalidConfig(format!(
                    "action bounds have {} dimensions but there are {} phase offsets",
                    bounds.len(),
                    self.num_motors()
                )));
            }
        }
        Ok(())
    }
}

impl<OS, AS> TrajectoryGenerator<OS, AS> for OpenLoopSine
where
    OS: Space,
    AS: Space<Element = Array1<f64>>,
{
    fn get_action(&mut self, time: f64, action: &Array1<f64>) -> Result<Array1<f64>, EnvError> {
        check_len(
            action.len(),
            self.num_motors(),
            "action length must match the number of motors",
        )?;
        if let Some(bounds) = &self.action_bounds {
            check_len(
                bounds.len(),
                self.num_motors(),
                "action bounds length must match the number of motors",
            )?;
        }
        let combined = action + &self.signal(time);
        Ok(match &self.action_bounds {
            Some(bounds) => bounds.clip(&combined),
            None => combined,
        })
    }

    fn get_observation(&mut self, observation: OS::Element) -> Result<OS::Element, EnvError> {
        Ok(observation)
    }
}
