//! Robot environments and environment wrappers
#[cfg(test)]
pub mod testing;
mod wrappers;

pub use wrappers::{
    StructurePreservingWrapper, TrajectoryGeneratorWrapper, UniversalSeed, Wrap, Wrapped,
};

use crate::logging::Logger;
use crate::spaces::Space;
use crate::EnvError;

/// Element type of an environment's observation space.
pub type Observation<E> = <<E as EnvStructure>::ObservationSpace as Space>::Element;
/// Element type of an environment's action space.
pub type Action<E> = <<E as EnvStructure>::ActionSpace as Space>::Element;

/// The external structure of a reinforcement learning environment.
pub trait EnvStructure {
    type ObservationSpace: Space;
    type ActionSpace: Space;

    /// Space containing all possible observations.
    ///
    /// This is not required to be tight:
    /// the space may contain elements that can never be produced as a state observation.
    fn observation_space(&self) -> Self::ObservationSpace;

    /// The space of all possible actions.
    ///
    /// Every element in this space must be a valid action.
    fn action_space(&self) -> Self::ActionSpace;

    /// A lower and upper bound on possible reward values.
    ///
    /// These bounds are not required to be tight but ideally will be as tight as possible.
    fn reward_range(&self) -> (f64, f64);

    /// A discount factor applied to future rewards.
    ///
    /// A value between `0` and `1`, inclusive.
    fn discount_factor(&self) -> f64;
}

/// The outcome of a single environment step.
#[derive(Debug, Clone, PartialEq)]
pub struct Step<O, I> {
    /// Observation of the resulting state.
    pub observation: O,
    /// Reward for this transition.
    pub reward: f64,
    /// Whether this step ends the episode.
    pub done: bool,
    /// Environment-specific side information. Opaque to wrappers.
    pub info: I,
}

impl<O, I> Step<O, I> {
    pub const fn new(observation: O, reward: f64, done: bool, info: I) -> Self {
        Self {
            observation,
            reward,
            done,
            info,
        }
    }

    /// `(observation, reward, done, info)`
    pub fn into_tuple(self) -> (O, f64, bool, I) {
        (self.observation, self.reward, self.done, self.info)
    }

    /// Replace the observation, keeping reward, done flag and info as they are.
    pub fn try_map_observation<P, F, Err>(self, f: F) -> Result<Step<P, I>, Err>
    where
        F: FnOnce(O) -> Result<P, Err>,
    {
        Ok(Step {
            observation: f(self.observation)?,
            reward: self.reward,
            done: self.done,
            info: self.info,
        })
    }
}

/// A reinforcement learning environment with internal state.
pub trait Environment: EnvStructure {
    /// Configuration the environment can be reset into (e.g. initial motor angles).
    type InitialState;
    /// Side information returned with every step.
    type Info;

    /// Reset the environment to an initial state.
    ///
    /// Must be called before each new episode.
    ///
    /// # Args
    /// * `initial_state` - State to reset into. `None` selects the environment default.
    /// * `duration` - Simulated time (seconds) spent settling into the initial state.
    ///
    /// # Returns
    /// An observation of the resulting state.
    fn reset(
        &mut self,
        initial_state: Option<&Self::InitialState>,
        duration: f64,
    ) -> Result<Observation<Self>, EnvError>;

    /// Reset into the default initial state with no settling time.
    fn reset_default(&mut self) -> Result<Observation<Self>, EnvError> {
        self.reset(None, 0.0)
    }

    /// Take a step in the environment.
    ///
    /// Fails with [`EnvError::NotReset`] if the environment has not been reset.
    fn step(
        &mut self,
        action: &Action<Self>,
        logger: &mut dyn Logger,
    ) -> Result<Step<Observation<Self>, Self::Info>, EnvError>;
}

/// A simulated robot embedded in an environment.
pub trait Robot {
    /// Simulated time in seconds since the last environment reset.
    fn time_since_reset(&self) -> f64;
}

/// An environment that exposes the robot it simulates.
pub trait RobotEnv: Environment {
    type Robot: Robot + ?Sized;

    fn robot(&self) -> &Self::Robot;
}

/// Mutable access to the space descriptors an environment owns.
///
/// Needed for operations that modify the spaces in place, like seeding.
pub trait SpacesMut: EnvStructure {
    fn observation_space_mut(&mut self) -> &mut Self::ObservationSpace;

    fn action_space_mut(&mut self) -> &mut Self::ActionSpace;
}

impl<E: EnvStructure + ?Sized> EnvStructure for Box<E> {
    type ObservationSpace = E::ObservationSpace;
    type ActionSpace = E::ActionSpace;

    fn observation_space(&self) -> Self::ObservationSpace {
        E::observation_space(self)
    }
    fn action_space(&self) -> Self::ActionSpace {
        E::action_space(self)
    }
    fn reward_range(&self) -> (f64, f64) {
        E::reward_range(self)
    }
    fn discount_factor(&self) -> f64 {
        E::discount_factor(self)
    }
}

impl<E: Environment + ?Sized> Environment for Box<E> {
    type InitialState = E::InitialState;
    type Info = E::Info;

    fn reset(
        &mut self,
        initial_state: Option<&Self::InitialState>,
        duration: f64,
    ) -> Result<Observation<Self>, EnvError> {
        E::reset(self, initial_state, duration)
    }

    fn step(
        &mut self,
        action: &Action<Self>,
        logger: &mut dyn Logger,
    ) -> Result<Step<Observation<Self>, Self::Info>, EnvError> {
        E::step(self, action, logger)
    }
}

impl<E: RobotEnv + ?Sized> RobotEnv for Box<E> {
    type Robot = E::Robot;

    fn robot(&self) -> &Self::Robot {
        E::robot(self)
    }
}

impl<E: SpacesMut + ?Sized> SpacesMut for Box<E> {
    fn observation_space_mut(&mut self) -> &mut Self::ObservationSpace {
        E::observation_space_mut(self)
    }
    fn action_space_mut(&mut self) -> &mut Self::ActionSpace {
        E::action_space_mut(self)
    }
}

/// A borrowed environment can be wrapped without giving up ownership.
impl<E: EnvStructure + ?Sized> EnvStructure for &mut E {
    type ObservationSpace = E::ObservationSpace;
    type ActionSpace = E::ActionSpace;

    fn observation_space(&self) -> Self::ObservationSpace {
        E::observation_space(self)
    }
    fn action_space(&self) -> Self::ActionSpace {
        E::action_space(self)
    }
    fn reward_range(&self) -> (f64, f64) {
        E::reward_range(self)
    }
    fn discount_factor(&self) -> f64 {
        E::discount_factor(self)
    }
}

impl<E: Environment + ?Sized> Environment for &mut E {
    type InitialState = E::InitialState;
    type Info = E::Info;

    fn reset(
        &mut self,
        initial_state: Option<&Self::InitialState>,
        duration: f64,
    ) -> Result<Observation<Self>, EnvError> {
        E::reset(self, initial_state, duration)
    }

    fn step(
        &mut self,
        action: &Action<Self>,
        logger: &mut dyn Logger,
    ) -> Result<Step<Observation<Self>, Self::Info>, EnvError> {
        E::step(self, action, logger)
    }
}

impl<E: RobotEnv + ?Sized> RobotEnv for &mut E {
    type Robot = E::Robot;

    fn robot(&self) -> &Self::Robot {
        E::robot(self)
    }
}

impl<E: SpacesMut + ?Sized> SpacesMut for &mut E {
    fn observation_space_mut(&mut self) -> &mut Self::ObservationSpace {
        E::observation_space_mut(self)
    }
    fn action_space_mut(&mut self) -> &mut Self::ActionSpace {
        E::action_space_mut(self)
    }
}

impl<R: Robot + ?Sized> Robot for Box<R> {
    fn time_since_reset(&self) -> f64 {
        R::time_since_reset(self)
    }
}
