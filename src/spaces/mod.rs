//! Spaces: sets of observations and actions.
mod boxes;
mod interval;
mod seeded;
#[cfg(test)]
pub mod testing;

pub use boxes::BoxSpace;
pub use interval::IntervalSpace;
pub use seeded::Seeded;

use rand::distributions::Distribution;
use std::fmt::{Debug, Display};

/// A mathematical space
pub trait Space: Display + Debug {
    type Element;

    /// Check if the space contains a particular value
    fn contains(&self, value: &Self::Element) -> bool;
}

/// A space from which elements can be sampled.
pub trait SampleSpace: Space + Distribution<<Self as Space>::Element> {}

impl<S> SampleSpace for S where S: Space + Distribution<<S as Space>::Element> {}

/// A space that carries its own random number generator.
pub trait SeedableSpace: Space {
    /// Reseed the internal generator.
    ///
    /// # Returns
    /// The seed that was applied.
    fn seed(&mut self, seed: u64) -> u64;
}

impl<S: Space + ?Sized> Space for Box<S> {
    type Element = S::Element;

    fn contains(&self, value: &Self::Element) -> bool {
        S::contains(self, value)
    }
}

impl<S: SeedableSpace + ?Sized> SeedableSpace for Box<S> {
    fn seed(&mut self, seed: u64) -> u64 {
        S::seed(self, seed)
    }
}
