use super::{check_len, TrajectoryGenerator};
use crate::spaces::{BoxSpace, IntervalSpace, Space};
use crate::EnvError;
use log::debug;
use ndarray::{s, Array1};
use std::f64::consts::TAU;

/// Number of leading action entries that modulate the generator.
const NUM_MODULATION_PARAMS: usize = 2;

/// A trajectory generator modulated by the policy.
///
/// The policy action is `[frequency_delta, amplitude, residual_0, ..., residual_{n-1}]`.
/// The generator keeps a phase that advances at `base_frequency + frequency_delta`
/// and commands motor `i` with `amplitude * sin(phase + phase_offsets[i]) + residual_i`.
/// Observations are extended with `[sin(phase), cos(phase)]` so the policy can
/// track the gait cycle.
///
/// Since both the action and the observation change shape,
/// the generator supplies its own spaces.
#[derive(Debug, Clone, PartialEq)]
pub struct PhaseModulated {
    base_frequency: f64,
    phase_offsets: Vec<f64>,
    frequency_range: IntervalSpace,
    amplitude_range: IntervalSpace,
    residual_range: IntervalSpace,
    base_observation_space: BoxSpace,

    /// Phase in `[0, 2π)`
    phase: f64,
    /// Robot time at the previous action
    last_time: Option<f64>,
}

impl PhaseModulated {
    /// Create a phase-modulated generator.
    ///
    /// # Args
    /// * `base_observation_space` - Observation space of the wrapped environment.
    /// * `base_frequency` - Gait frequency (Hz) when the policy adds no offset.
    /// * `phase_offsets` - Per-motor phase offset (radians).
    /// * `frequency_range` - Allowed frequency offsets chosen by the policy.
    /// * `amplitude_range` - Allowed amplitudes chosen by the policy.
    /// * `residual_range` - Allowed per-motor residuals chosen by the policy.
    pub fn new(
        base_observation_space: BoxSpace,
        base_frequency: f64,
        phase_offsets: Vec<f64>,
        frequency_range: IntervalSpace,
        amplitude_range: IntervalSpace,
        residual_range: IntervalSpace,
    ) -> Self {
        Self {
            base_frequency,
            phase_offsets,
            frequency_range,
            amplitude_range,
            residual_range,
            base_observation_space,
            phase: 0.0,
            last_time: None,
        }
    }

    pub fn num_motors(&self) -> usize {
        self.phase_offsets.len()
    }

    /// Current phase in `[0, 2π)`.
    pub const fn phase(&self) -> f64 {
        self.phase
    }

    /// The policy action space: modulation parameters followed by residuals.
    pub fn policy_action_space(&self) -> BoxSpace {
        let intervals: Vec<_> = [self.frequency_range, self.amplitude_range]
            .into_iter()
            .chain(std::iter::repeat(self.residual_range).take(self.num_motors()))
            .collect();
        BoxSpace::from_intervals(&intervals)
    }

    /// The extended observation space: base observation followed by the phase features.
    pub fn extended_observation_space(&self) -> BoxSpace {
        self.base_observation_space
            .concat(&BoxSpace::uniform(2, -1.0, 1.0))
    }

    fn advance_phase(&mut self, time: f64, frequency: f64) {
        let elapsed = self
            .last_time
            .map_or(0.0, |last_time| (time - last_time).max(0.0));
        self.phase = (self.phase + TAU * frequency * elapsed).rem_euclid(TAU);
        self.last_time = Some(time);
    }
}

impl<OS, AS> TrajectoryGenerator<OS, AS> for PhaseModulated
where
    OS: Space<Element = Array1<f64>> + From<BoxSpace>,
    AS: Space<Element = Array1<f64>> + From<BoxSpace>,
{
    fn get_action(&mut self, time: f64, action: &Array1<f64>) -> Result<Array1<f64>, EnvError> {
        check_len(
            action.len(),
            NUM_MODULATION_PARAMS + self.num_motors(),
            "action must hold frequency, amplitude and one residual per motor",
        )?;
        let frequency = self.base_frequency + self.frequency_range.clip(action[0]);
        let amplitude = self.amplitude_range.clip(action[1]);
        self.advance_phase(time, frequency);

        let residuals = action.slice(s![NUM_MODULATION_PARAMS..]);
        Ok(self
            .phase_offsets
            .iter()
            .zip(residuals)
            .map(|(offset, residual)| {
                amplitude * (self.phase + offset).sin() + self.residual_range.clip(*residual)
            })
            .collect())
    }

    fn get_observation(&mut self, observation: Array1<f64>) -> Result<Array1<f64>, EnvError> {
        Ok(observation
            .iter()
            .copied()
            .chain([self.phase.sin(), self.phase.cos()])
            .collect())
    }

    fn reset(&mut self) {
        debug!("phase-modulated generator reset at phase {}", self.phase);
        self.phase = 0.0;
        self.last_time = None;
    }

    fn observation_space(&self) -> Option<OS> {
        Some(self.extended_observation_space().into())
    }

    fn action_space(&self) -> Option<AS> {
        Some(self.policy_action_space().into())
    }
}
