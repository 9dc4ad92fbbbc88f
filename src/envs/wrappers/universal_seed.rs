use super::super::{Action, EnvStructure, Environment, Observation, SpacesMut, Step};
use super::{StructurePreservingWrapper, Wrapped};
use crate::logging::Logger;
use crate::spaces::SeedableSpace;
use crate::EnvError;
use log::debug;
use serde::{Deserialize, Serialize};

/// Wrapper that seeds every random component of an environment from a single seed.
///
/// Currently that is the action space and the observation space.
/// Everything else is forwarded unchanged.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UniversalSeed;

impl StructurePreservingWrapper for UniversalSeed {}

impl<E: SpacesMut> Wrapped<E, UniversalSeed>
where
    E::ObservationSpace: SeedableSpace,
    E::ActionSpace: SeedableSpace,
{
    /// Seed the action and observation spaces.
    ///
    /// Returns the seed used.
    pub fn seed(&mut self, seed: u64) -> u64 {
        self.inner.action_space_mut().seed(seed);
        self.inner.observation_space_mut().seed(seed);
        debug!("seeded action and observation spaces with {}", seed);
        seed
    }
}

impl<E: Environment> Environment for Wrapped<E, UniversalSeed> {
    type InitialState = E::InitialState;
    type Info = E::Info;

    fn reset(
        &mut self,
        initial_state: Option<&Self::InitialState>,
        duration: f64,
    ) -> Result<Observation<Self>, EnvError> {
        self.inner.reset(initial_state, duration)
    }

    fn step(
        &mut self,
        action: &Action<Self>,
        logger: &mut dyn Logger,
    ) -> Result<Step<Observation<Self>, Self::Info>, EnvError> {
        self.inner.step(action, logger)
    }
}
