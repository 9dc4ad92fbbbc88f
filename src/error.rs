//! Error type
use std::convert::Infallible;
use std::error::Error;
use thiserror::Error;

/// Error from an environment, a wrapper, or a trajectory generator.
#[derive(Error, Debug)]
pub enum EnvError {
    /// The trajectory generator lacks a required capability.
    #[error("trajectory generator does not implement `{0}`")]
    InvalidStrategy(&'static str),
    /// A call argument violated a precondition.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
    /// A configuration could not be built.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    /// The environment was stepped before being reset.
    #[error("environment must be reset before stepping")]
    NotReset,
    /// Error raised by the underlying simulation.
    #[error(transparent)]
    Simulation(#[from] Box<dyn Error + Send + Sync>),
}

impl From<Infallible> for EnvError {
    fn from(_: Infallible) -> Self {
        unreachable!();
    }
}
