//! Trajectory generators assembled from closures at run time.
use super::TrajectoryGenerator;
use crate::spaces::Space;
use crate::EnvError;
use std::fmt;

type ActionFn<A> = Box<dyn FnMut(f64, &A) -> Result<A, EnvError>>;
type ObservationFn<O> = Box<dyn FnMut(O) -> Result<O, EnvError>>;
type ResetFn = Box<dyn FnMut()>;

/// Builds an [`FnGenerator`] from individually supplied capabilities.
///
/// The action and observation transforms are required; [`build`](Self::build)
/// fails with [`EnvError::InvalidStrategy`] when either is missing.
pub struct FnGeneratorBuilder<OS: Space, AS: Space> {
    get_action: Option<ActionFn<AS::Element>>,
    get_observation: Option<ObservationFn<OS::Element>>,
    reset: Option<ResetFn>,
    observation_space: Option<OS>,
    action_space: Option<AS>,
}

impl<OS: Space, AS: Space> Default for FnGeneratorBuilder<OS, AS> {
    fn default() -> Self {
        Self {
            get_action: None,
            get_observation: None,
            reset: None,
            observation_space: None,
            action_space: None,
        }
    }
}

impl<OS: Space, AS: Space> FnGeneratorBuilder<OS, AS> {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get_action<F>(mut self, f: F) -> Self
    where
        F: FnMut(f64, &AS::Element) -> Result<AS::Element, EnvError> + 'static,
    {
        self.get_action = Some(Box::new(f));
        self
    }

    #[must_use]
    pub fn get_observation<F>(mut self, f: F) -> Self
    where
        F: FnMut(OS::Element) -> Result<OS::Element, EnvError> + 'static,
    {
        self.get_observation = Some(Box::new(f));
        self
    }

    #[must_use]
    pub fn reset<F>(mut self, f: F) -> Self
    where
        F: FnMut() + 'static,
    {
        self.reset = Some(Box::new(f));
        self
    }

    #[must_use]
    pub fn observation_space(mut self, space: OS) -> Self {
        self.observation_space = Some(space);
        self
    }

    #[must_use]
    pub fn action_space(mut self, space: AS) -> Self {
        self.action_space = Some(space);
        self
    }

    /// Build the generator, checking that the required capabilities are present.
    pub fn build(self) -> Result<FnGenerator<OS, AS>, EnvError> {
        Ok(FnGenerator {
            get_action: self
                .get_action
                .ok_or(EnvError::InvalidStrategy("get_action"))?,
            get_observation: self
                .get_observation
                .ok_or(EnvError::InvalidStrategy("get_observation"))?,
            reset: self.reset,
            observation_space: self.observation_space,
            action_space: self.action_space,
        })
    }
}

impl<OS: Space, AS: Space> fmt::Debug for FnGeneratorBuilder<OS, AS> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("FnGeneratorBuilder")
            .field("get_action", &self.get_action.is_some())
            .field("get_observation", &self.get_observation.is_some())
            .field("reset", &self.reset.is_some())
            .field("observation_space", &self.observation_space)
            .field("action_space", &self.action_space)
            .finish()
    }
}

/// A trajectory generator made of closures.
///
/// A missing reset closure means there is no state to reset.
pub struct FnGenerator<OS: Space, AS: Space> {
    get_action: ActionFn<AS::Element>,
    get_observation: ObservationFn<OS::Element>,
    reset: Option<ResetFn>,
    observation_space: Option<OS>,
    action_space: Option<AS>,
}

impl<OS: Space, AS: Space> FnGenerator<OS, AS> {
    pub fn builder() -> FnGeneratorBuilder<OS, AS> {
        FnGeneratorBuilder::new()
    }

    /// Replace the exposed observation space.
    ///
    /// Wrappers already constructed keep the space they copied.
    pub fn set_observation_space(&mut self, space: Option<OS>) {
        self.observation_space = space;
    }

    /// Replace the exposed action space.
    ///
    /// Wrappers already constructed keep the space they copied.
    pub fn set_action_space(&mut self, space: Option<AS>) {
        self.action_space = space;
    }
}

impl<OS: Space, AS: Space> TryFrom<FnGeneratorBuilder<OS, AS>> for FnGenerator<OS, AS> {
    type Error = EnvError;

    fn try_from(builder: FnGeneratorBuilder<OS, AS>) -> Result<Self, Self::Error> {
        builder.build()
    }
}

impl<OS: Space, AS: Space> fmt::Debug for FnGenerator<OS, AS> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("FnGenerator")
            .field("reset", &self.reset.is_some())
            .field("observation_space", &self.observation_space)
            .field("action_space", &self.action_space)
            .finish()
    }
}

impl<OS, AS> TrajectoryGenerator<OS, AS> for FnGenerator<OS, AS>
where
    OS: Space + Clone,
    AS: Space + Clone,
{
    fn get_action(&mut self, time: f64, action: &AS::Element) -> Result<AS::Element, EnvError> {
        (self.get_action)(time, action)
    }

    fn get_observation(&mut self, observation: OS::Element) -> Result<OS::Element, EnvError> {
        (self.get_observation)(observation)
    }

    fn reset(&mut self) {
        if let Some(reset) = &mut self.reset {
            reset()
        }
    }

    fn observation_space(&self) -> Option<OS> {
        self.observation_space.clone()
    }

    fn action_space(&self) -> Option<AS> {
        self.action_space.clone()
    }
}
