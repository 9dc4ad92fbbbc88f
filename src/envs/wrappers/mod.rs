mod trajectory_generator;
mod universal_seed;

pub use trajectory_generator::TrajectoryGeneratorWrapper;
pub use universal_seed::UniversalSeed;

use super::{EnvStructure, Environment, RobotEnv, SpacesMut};
use crate::trajectory::TrajectoryGenerator;
use serde::{Deserialize, Serialize};

/// Trait providing wrapping methods for all sized types.
pub trait Wrap: Sized {
    /// Wrap in the given wrapper.
    #[inline]
    fn wrap<W>(self, wrapper: W) -> Wrapped<Self, W> {
        Wrapped {
            inner: self,
            wrapper,
        }
    }

    /// Run a trajectory generator around this environment's `reset` and `step`.
    #[inline]
    fn with_trajectory_generator<G>(self, generator: G) -> TrajectoryGeneratorWrapper<Self, G>
    where
        Self: EnvStructure,
        G: TrajectoryGenerator<Self::ObservationSpace, Self::ActionSpace>,
    {
        TrajectoryGeneratorWrapper::new(self, generator)
    }
}

impl<T> Wrap for T {}

/// A basic wrapped object.
///
/// Consists of the inner object and the wrapper state.
///
/// # Implementation
/// To implement a wrapper type, define `struct MyWrapper`,
/// mark it with [`StructurePreservingWrapper`] if it leaves the spaces alone,
/// and implement `impl<T: Environment> Environment for Wrapped<T, MyWrapper>`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Wrapped<T, W> {
    /// Wrapped object
    pub inner: T,
    /// The wrapper
    pub wrapper: W,
}

impl<T, W> Wrapped<T, W> {
    pub const fn new(inner: T, wrapper: W) -> Self {
        Self { inner, wrapper }
    }
}

/// Marker trait for a wrapper that does not modify the environment structure.
pub trait StructurePreservingWrapper {}

impl<E, W> EnvStructure for Wrapped<E, W>
where
    E: EnvStructure,
    W: StructurePreservingWrapper,
{
    type ObservationSpace = E::ObservationSpace;
    type ActionSpace = E::ActionSpace;

    #[inline]
    fn observation_space(&self) -> Self::ObservationSpace {
        self.inner.observation_space()
    }
    #[inline]
    fn action_space(&self) -> Self::ActionSpace {
        self.inner.action_space()
    }
    #[inline]
    fn reward_range(&self) -> (f64, f64) {
        self.inner.reward_range()
    }
    #[inline]
    fn discount_factor(&self) -> f64 {
        self.inner.discount_factor()
    }
}

impl<E, W> RobotEnv for Wrapped<E, W>
where
    E: RobotEnv,
    W: StructurePreservingWrapper,
    Self: Environment,
{
    type Robot = E::Robot;

    #[inline]
    fn robot(&self) -> &Self::Robot {
        self.inner.robot()
    }
}

impl<E, W> SpacesMut for Wrapped<E, W>
where
    E: SpacesMut,
    W: StructurePreservingWrapper,
{
    #[inline]
    fn observation_space_mut(&mut self) -> &mut Self::ObservationSpace {
        self.inner.observation_space_mut()
    }
    #[inline]
    fn action_space_mut(&mut self) -> &mut Self::ActionSpace {
        self.inner.action_space_mut()
    }
}
