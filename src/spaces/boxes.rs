//! `BoxSpace` definition
use super::{IntervalSpace, Space};
use ndarray::{Array1, Zip};
use rand::distributions::Distribution;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A box of real vectors: the product of one closed interval per dimension.
///
/// Motor commands and proprioceptive observations live in spaces of this form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxSpace {
    pub low: Array1<f64>,
    pub high: Array1<f64>,
}

impl BoxSpace {
    pub fn new(low: Array1<f64>, high: Array1<f64>) -> Self {
        assert_eq!(low.len(), high.len(), "low and high must have the same length");
        assert!(
            low.iter().zip(&high).all(|(l, h)| l <= h),
            "require low <= high"
        );
        Self { low, high }
    }

    /// A box with the same bounds on every dimension.
    pub fn uniform(len: usize, low: f64, high: f64) -> Self {
        Self::new(Array1::from_elem(len, low), Array1::from_elem(len, high))
    }

    /// A box spanning all finite vectors of length `len`.
    pub fn unbounded(len: usize) -> Self {
        Self::uniform(len, f64::NEG_INFINITY, f64::INFINITY)
    }

    pub fn from_intervals<'a, I>(intervals: I) -> Self
    where
        I: IntoIterator<Item = &'a IntervalSpace>,
    {
        let (low, high): (Vec<_>, Vec<_>) = intervals
            .into_iter()
            .map(|interval| (interval.low, interval.high))
            .unzip();
        Self::new(Array1::from(low), Array1::from(high))
    }

    /// Number of dimensions.
    pub fn len(&self) -> usize {
        self.low.len()
    }

    pub fn is_empty(&self) -> bool {
        self.low.is_empty()
    }

    /// The interval of dimension `index`, if it exists.
    pub fn interval(&self, index: usize) -> Option<IntervalSpace> {
        Some(IntervalSpace {
            low: *self.low.get(index)?,
            high: *self.high.get(index)?,
        })
    }

    pub fn intervals(&self) -> impl Iterator<Item = IntervalSpace> + '_ {
        self.low
            .iter()
            .zip(&self.high)
            .map(|(&low, &high)| IntervalSpace { low, high })
    }

    /// Clamp each coordinate of `value` into its interval.
    ///
    /// `value` must have the same length as the box.
    pub fn clip(&self, value: &Array1<f64>) -> Array1<f64> {
        Zip::from(value)
            .and(&self.low)
            .and(&self.high)
            .map_collect(|&v, &low, &high| v.max(low).min(high))
    }

    /// The box of this space followed by the dimensions of `other`.
    pub fn concat(&self, other: &Self) -> Self {
        let intervals: Vec<_> = self.intervals().chain(other.intervals()).collect();
        Self::from_intervals(&intervals)
    }
}

impl fmt::Display for BoxSpace {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "BoxSpace(")?;
        for (i, interval) in self.intervals().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "[{}, {}]", interval.low, interval.high)?;
        }
        write!(f, ")")
    }
}

impl Space for BoxSpace {
    type Element = Array1<f64>;

    fn contains(&self, value: &Self::Element) -> bool {
        value.len() == self.len()
            && self
                .intervals()
                .zip(value)
                .all(|(interval, v)| interval.contains(v))
    }
}

impl Distribution<Array1<f64>> for BoxSpace {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Array1<f64> {
        self.intervals().map(|interval| interval.sample(rng)).collect()
    }
}
