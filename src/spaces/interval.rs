//! `IntervalSpace` definition
use super::Space;
use num_traits::Float;
use rand::distributions::Distribution;
use rand::Rng;
use rand_distr::{Exp1, StandardNormal};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A closed interval of floating-point numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IntervalSpace<T = f64> {
    pub low: T,
    pub high: T,
}

impl<T: PartialOrd> IntervalSpace<T> {
    pub fn new(low: T, high: T) -> Self {
        assert!(low <= high, "require low <= high");
        Self { low, high }
    }
}

impl<T: Float> IntervalSpace<T> {
    /// Whether both bounds are finite.
    pub fn is_bounded(&self) -> bool {
        self.low.is_finite() && self.high.is_finite()
    }

    /// Clamp a value into the interval.
    pub fn clip(&self, value: T) -> T {
        value.max(self.low).min(self.high)
    }
}

/// The default interval is the full real number line.
impl<T: Float> Default for IntervalSpace<T> {
    fn default() -> Self {
        Self {
            low: T::neg_infinity(),
            high: T::infinity(),
        }
    }
}

impl<T: fmt::Display> fmt::Display for IntervalSpace<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "IntervalSpace({}, {})", self.low, self.high)
    }
}

impl<T: Float + fmt::Debug + fmt::Display> Space for IntervalSpace<T> {
    type Element = T;

    fn contains(&self, value: &Self::Element) -> bool {
        &self.low <= value && value <= &self.high && value.is_finite()
    }
}

/// Uniform on bounded intervals, exponential tails on half-bounded ones,
/// standard normal on the real line.
impl<T> Distribution<T> for IntervalSpace<T>
where
    T: Float + rand::distributions::uniform::SampleUniform,
    Exp1: Distribution<T>,
    StandardNormal: Distribution<T>,
{
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> T {
        match (self.low.is_finite(), self.high.is_finite()) {
            (true, true) => rng.gen_range(self.low..=self.high),
            (true, false) => {
                let tail: T = Exp1.sample(rng);
                self.low + tail
            }
            (false, true) => {
                let tail: T = Exp1.sample(rng);
                self.high - tail
            }
            (false, false) => StandardNormal.sample(rng),
        }
    }
}

#[cfg(test)]
mod space {
    use super::super::testing;
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0.0, true)]
    #[case(0.5, true)]
    #[case(1.0, true)]
    #[case(2.0, false)]
    #[case(-1.0, false)]
    fn unit_contains(#[case] value: f64, #[case] expected: bool) {
        let space = IntervalSpace::new(0.0, 1.0);
        assert_eq!(space.contains(&value), expected);
    }

    #[rstest]
    #[case(IntervalSpace::new(0.0, 1.0))]
    #[case(IntervalSpace::default())]
    #[case(IntervalSpace::new(2.0, f64::INFINITY))]
    #[case(IntervalSpace::new(f64::NEG_INFINITY, -3.0))]
    #[case(IntervalSpace::new(2.0, 2.0))]
    fn contains_samples(#[case] space: IntervalSpace) {
        testing::check_contains_samples(&space, 20);
    }

    #[test]
    fn unbounded_not_contains_inf() {
        let space = IntervalSpace::default();
        assert!(!space.contains(&f64::INFINITY));
    }

    #[test]
    fn unbounded_not_contains_nan() {
        let space = IntervalSpace::default();
        assert!(!space.contains(&f64::NAN));
    }

    #[test]
    fn unbounded_eq_default() {
        let unbounded = IntervalSpace::new(f64::NEG_INFINITY, f64::INFINITY);
        assert_eq!(IntervalSpace::default(), unbounded);
        assert!(!unbounded.is_bounded());
    }

    #[test]
    fn clip_into_bounds() {
        let space = IntervalSpace::new(-1.0, 1.0);
        assert_eq!(space.clip(3.0), 1.0);
        assert_eq!(space.clip(-3.0), -1.0);
        assert_eq!(space.clip(0.25), 0.25);
    }

    #[test]
    #[should_panic]
    fn empty_interval_panics() {
        let _ = IntervalSpace::new(1.0, 0.0);
    }
}
