//! Trajectory generators: strategies that reshape actions and observations.
//!
//! A trajectory generator sits between a policy and a robot environment.
//! Before each step it may replace the policy action (for example by
//! superimposing an open-loop gait signal), and after each step or reset it may
//! transform the observation (for example by appending its own phase).
mod config;
mod fns;
mod identity;
mod open_loop;
mod phase_modulated;

pub use config::{PhaseModulatedConfig, TrajectoryGeneratorConfig};
pub use fns::{FnGenerator, FnGeneratorBuilder};
pub use identity::IdentityGenerator;
pub use open_loop::OpenLoopSine;
pub use phase_modulated::PhaseModulated;

use crate::spaces::Space;
use crate::EnvError;

/// A strategy that transforms actions before they reach an environment
/// and observations before they reach the caller.
///
/// `get_action` and `get_observation` are required.
/// `reset`, `observation_space` and `action_space` are optional capabilities:
/// the defaults do nothing and expose no space.
pub trait TrajectoryGenerator<OS: Space, AS: Space> {
    /// Compute the action to apply to the environment.
    ///
    /// # Args
    /// * `time` - Robot time in seconds since the last environment reset.
    /// * `action` - The action chosen by the policy.
    fn get_action(&mut self, time: f64, action: &AS::Element) -> Result<AS::Element, EnvError>;

    /// Transform an observation produced by the environment.
    fn get_observation(&mut self, observation: OS::Element) -> Result<OS::Element, EnvError>;

    /// Clear any internal state at the start of an episode.
    fn reset(&mut self) {}

    /// Observation space replacing that of the wrapped environment, if any.
    fn observation_space(&self) -> Option<OS> {
        None
    }

    /// Action space replacing that of the wrapped environment, if any.
    fn action_space(&self) -> Option<AS> {
        None
    }
}

impl<OS, AS, G> TrajectoryGenerator<OS, AS> for Box<G>
where
    OS: Space,
    AS: Space,
    G: TrajectoryGenerator<OS, AS> + ?Sized,
{
    fn get_action(&mut self, time: f64, action: &AS::Element) -> Result<AS::Element, EnvError> {
        G::get_action(self, time, action)
    }
    fn get_observation(&mut self, observation: OS::Element) -> Result<OS::Element, EnvError> {
        G::get_observation(self, observation)
    }
    fn reset(&mut self) {
        G::reset(self)
    }
    fn observation_space(&self) -> Option<OS> {
        G::observation_space(self)
    }
    fn action_space(&self) -> Option<AS> {
        G::action_space(self)
    }
}

impl<OS, AS, G> TrajectoryGenerator<OS, AS> for &mut G
where
    OS: Space,
    AS: Space,
    G: TrajectoryGenerator<OS, AS> + ?Sized,
{
    fn get_action(&mut self, time: f64, action: &AS::Element) -> Result<AS::Element, EnvError> {
        G::get_action(self, time, action)
    }
    fn get_observation(&mut self, observation: OS::Element) -> Result<OS::Element, EnvError> {
        G::get_observation(self, observation)
    }
    fn reset(&mut self) {
        G::reset(self)
    }
    fn observation_space(&self) -> Option<OS> {
        G::observation_space(self)
    }
    fn action_space(&self) -> Option<AS> {
        G::action_space(self)
    }
}

/// Check that a vector has the expected number of entries.
fn check_len(len: usize, expected: usize, what: &'static str) -> Result<(), EnvError> {
    if len == expected {
        Ok(())
    } else {
        Err(EnvError::InvalidArgument(what))
    }
}
