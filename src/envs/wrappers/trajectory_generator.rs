use super::super::{
    Action, EnvStructure, Environment, Observation, Robot, RobotEnv, SpacesMut, Step,
};
use crate::logging::{Event, Logger};
use crate::trajectory::TrajectoryGenerator;
use crate::EnvError;
use log::{debug, warn};
use std::convert::TryInto;

/// Robot environment with a built-in trajectory generator.
///
/// On `reset` the generator is reset first, then the environment,
/// and the resulting observation passes through [`TrajectoryGenerator::get_observation`].
/// On `step` the policy action passes through [`TrajectoryGenerator::get_action`]
/// together with the robot time before reaching the environment;
/// only the observation of the step result is transformed.
///
/// If the generator supplies its own observation or action space, a copy is taken at
/// construction and reported instead of the environment's. Everything else about the
/// environment structure is read from the wrapped environment on each access.
#[derive(Debug, Clone)]
pub struct TrajectoryGeneratorWrapper<E: EnvStructure, G> {
    env: E,
    generator: G,
    observation_space: Option<E::ObservationSpace>,
    action_space: Option<E::ActionSpace>,
}

impl<E, G> TrajectoryGeneratorWrapper<E, G>
where
    E: EnvStructure,
    G: TrajectoryGenerator<E::ObservationSpace, E::ActionSpace>,
{
    pub fn new(env: E, generator: G) -> Self {
        let observation_space = generator.observation_space();
        if let Some(space) = &observation_space {
            debug!("trajectory generator supplies the observation space {}", space);
        }
        let action_space = generator.action_space();
        if let Some(space) = &action_space {
            debug!("trajectory generator supplies the action space {}", space);
        }
        Self {
            env,
            generator,
            observation_space,
            action_space,
        }
    }

    /// Wrap with a generator that is only known to be valid once converted.
    ///
    /// Fails with the conversion error, e.g. [`EnvError::InvalidStrategy`] for a
    /// [`FnGeneratorBuilder`](crate::trajectory::FnGeneratorBuilder) missing a capability.
    pub fn try_new<T>(env: E, generator: T) -> Result<Self, EnvError>
    where
        T: TryInto<G>,
        EnvError: From<T::Error>,
    {
        Ok(Self::new(env, generator.try_into()?))
    }
}

impl<E: EnvStructure, G> TrajectoryGeneratorWrapper<E, G> {
    /// The wrapped environment.
    pub const fn inner(&self) -> &E {
        &self.env
    }

    pub fn inner_mut(&mut self) -> &mut E {
        &mut self.env
    }

    pub const fn generator(&self) -> &G {
        &self.generator
    }

    /// Mutable access to the generator.
    ///
    /// Spaces copied from the generator at construction are not refreshed.
    pub fn generator_mut(&mut self) -> &mut G {
        &mut self.generator
    }

    pub fn into_inner(self) -> (E, G) {
        (self.env, self.generator)
    }
}

impl<E, G> TrajectoryGeneratorWrapper<E, G>
where
    E: RobotEnv,
    G: TrajectoryGenerator<E::ObservationSpace, E::ActionSpace>,
{
    /// Step with a possibly missing action.
    ///
    /// Fails with [`EnvError::InvalidArgument`] if `action` is `None`.
    /// Errors from the generator or the environment are returned unchanged.
    pub fn try_step(
        &mut self,
        action: Option<&Action<E>>,
        logger: &mut dyn Logger,
    ) -> Result<Step<Observation<E>, E::Info>, EnvError> {
        let action = action.ok_or(EnvError::InvalidArgument("action cannot be none"))?;

        let time = self.env.robot().time_since_reset();
        // Statistics are best effort
        if let Err(err) = logger.log(Event::Step, "tg_time", time.into()) {
            warn!("failed to log trajectory generator time: {}", err);
        }

        let new_action = self.generator.get_action(time, action)?;
        let step = self.env.step(&new_action, logger)?;
        let generator = &mut self.generator;
        step.try_map_observation(|observation| generator.get_observation(observation))
    }
}

impl<E, G> EnvStructure for TrajectoryGeneratorWrapper<E, G>
where
    E: EnvStructure,
    E::ObservationSpace: Clone,
    E::ActionSpace: Clone,
{
    type ObservationSpace = E::ObservationSpace;
    type ActionSpace = E::ActionSpace;

    fn observation_space(&self) -> Self::ObservationSpace {
        match &self.observation_space {
            Some(space) => space.clone(),
            None => self.env.observation_space(),
        }
    }

    fn action_space(&self) -> Self::ActionSpace {
        match &self.action_space {
            Some(space) => space.clone(),
            None => self.env.action_space(),
        }
    }

    fn reward_range(&self) -> (f64, f64) {
        self.env.reward_range()
    }

    fn discount_factor(&self) -> f64 {
        self.env.discount_factor()
    }
}

impl<E, G> Environment for TrajectoryGeneratorWrapper<E, G>
where
    E: RobotEnv,
    E::ObservationSpace: Clone,
    E::ActionSpace: Clone,
    G: TrajectoryGenerator<E::ObservationSpace, E::ActionSpace>,
{
    type InitialState = E::InitialState;
    type Info = E::Info;

    fn reset(
        &mut self,
        initial_state: Option<&Self::InitialState>,
        duration: f64,
    ) -> Result<Observation<Self>, EnvError> {
        self.generator.reset();
        let observation = self.env.reset(initial_state, duration)?;
        self.generator.get_observation(observation)
    }

    fn step(
        &mut self,
        action: &Action<Self>,
        logger: &mut dyn Logger,
    ) -> Result<Step<Observation<Self>, Self::Info>, EnvError> {
        self.try_step(Some(action), logger)
    }
}

impl<E, G> RobotEnv for TrajectoryGeneratorWrapper<E, G>
where
    E: RobotEnv,
    E::ObservationSpace: Clone,
    E::ActionSpace: Clone,
    G: TrajectoryGenerator<E::ObservationSpace, E::ActionSpace>,
{
    type Robot = E::Robot;

    fn robot(&self) -> &Self::Robot {
        self.env.robot()
    }
}

/// Mutable access reaches the copied space when the generator supplied one.
impl<E, G> SpacesMut for TrajectoryGeneratorWrapper<E, G>
where
    E: SpacesMut,
    E::ObservationSpace: Clone,
    E::ActionSpace: Clone,
{
    fn observation_space_mut(&mut self) -> &mut Self::ObservationSpace {
        match &mut self.observation_space {
            Some(space) => space,
            None => self.env.observation_space_mut(),
        }
    }

    fn action_space_mut(&mut self) -> &mut Self::ActionSpace {
        match &mut self.action_space {
            Some(space) => space,
            None => self.env.action_space_mut(),
        }
    }
}
