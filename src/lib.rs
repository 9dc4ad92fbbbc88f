//! Environment wrappers for legged-robot reinforcement learning.
//!
//! The central piece is [`TrajectoryGeneratorWrapper`], which runs a
//! [`TrajectoryGenerator`] around the `reset` and `step` of a robot environment,
//! and [`UniversalSeed`], which seeds an environment's spaces from a single value.
#![warn(clippy::cast_lossless)]
#![warn(clippy::cast_possible_truncation)]
#![warn(clippy::doc_markdown)]
#![warn(clippy::explicit_iter_loop)]
#![warn(clippy::missing_const_for_fn)] // has some false positives
#![warn(clippy::needless_borrow)]
#![warn(clippy::needless_pass_by_value)]
#![warn(clippy::redundant_closure_for_method_calls)]
#![warn(clippy::use_self)]
pub mod envs;
mod error;
pub mod logging;
pub mod spaces;
pub mod trajectory;

pub use envs::{
    EnvStructure, Environment, Robot, RobotEnv, SpacesMut, Step, TrajectoryGeneratorWrapper,
    UniversalSeed, Wrap, Wrapped,
};
pub use error::EnvError;
pub use trajectory::TrajectoryGenerator;

/// Pseudo-random number generator type used by this crate.
pub type Prng = rand_chacha::ChaCha8Rng;
