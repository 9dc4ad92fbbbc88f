use super::TrajectoryGenerator;
use crate::spaces::Space;
use crate::EnvError;
use serde::{Deserialize, Serialize};

/// Trajectory generator that leaves actions and observations unchanged.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IdentityGenerator;

impl<OS, AS> TrajectoryGenerator<OS, AS> for IdentityGenerator
where
    OS: Space,
    AS: Space,
    AS::Element: Clone,
{
    #[inline]
    fn get_action(&mut self, _time: f64, action: &AS::Element) -> Result<AS::Element, EnvError> {
        Ok(action.clone())
    }

    #[inline]
    fn get_observation(&mut self, observation: OS::Element) -> Result<OS::Element, EnvError> {
        Ok(observation)
    }
}
