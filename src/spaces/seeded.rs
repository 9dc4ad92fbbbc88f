//! Spaces with an attached random number generator.
use super::{SampleSpace, SeedableSpace, Space};
use crate::Prng;
use rand::distributions::Distribution;
use rand::{Rng, SeedableRng};
use std::fmt;

/// A space together with its own pseudo-random number generator.
///
/// Lets an environment expose spaces that can be sampled and reseeded in place.
#[derive(Debug, Clone)]
pub struct Seeded<S> {
    pub space: S,
    rng: Prng,
}

impl<S> Seeded<S> {
    pub fn new(space: S, seed: u64) -> Self {
        Self {
            space,
            rng: Prng::seed_from_u64(seed),
        }
    }

    /// Attach a generator seeded from system entropy.
    pub fn from_entropy(space: S) -> Self {
        Self {
            space,
            rng: Prng::from_entropy(),
        }
    }

    pub fn into_inner(self) -> S {
        self.space
    }
}

impl<S: SampleSpace> Seeded<S> {
    /// Sample an element using the attached generator.
    pub fn sample_next(&mut self) -> S::Element {
        self.space.sample(&mut self.rng)
    }
}

/// Attach a generator seeded from system entropy.
impl<S> From<S> for Seeded<S> {
    fn from(space: S) -> Self {
        Self::from_entropy(space)
    }
}

/// Equal if the underlying spaces are equal; generator state is ignored.
impl<S: PartialEq> PartialEq for Seeded<S> {
    fn eq(&self, other: &Self) -> bool {
        self.space == other.space
    }
}

impl<S: fmt::Display> fmt::Display for Seeded<S> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Seeded({})", self.space)
    }
}

impl<S: Space> Space for Seeded<S> {
    type Element = S::Element;

    fn contains(&self, value: &Self::Element) -> bool {
        self.space.contains(value)
    }
}

impl<S: SampleSpace> Distribution<S::Element> for Seeded<S> {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> S::Element {
        self.space.sample(rng)
    }
}

impl<S: Space> SeedableSpace for Seeded<S> {
    fn seed(&mut self, seed: u64) -> u64 {
        self.rng = Prng::seed_from_u64(seed);
        seed
    }
}
