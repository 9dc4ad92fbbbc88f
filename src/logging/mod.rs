//! Logging statistics from environment rollouts
mod memory;

pub use memory::MemoryLogger;

use enum_map::Enum;
use thiserror::Error;

/// Rollout events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Enum)]
pub enum Event {
    Step,
    Episode,
}

/// A value that can be logged.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Loggable {
    /// Nothing. No data to log.
    /// Logging Nothing data may still produce a placeholder entry for the name.
    Nothing,
    /// A scalar value. Aggregate by taking means.
    Scalar(f64),
}

impl From<f64> for Loggable {
    fn from(value: f64) -> Self {
        Self::Scalar(value)
    }
}

impl From<f32> for Loggable {
    fn from(value: f32) -> Self {
        Self::Scalar(value.into())
    }
}

/// Log statistics from an environment rollout.
pub trait Logger {
    /// Log a value.
    ///
    /// # Args
    /// * `event` - The event associated with this value.
    /// * `name` - The name that identifies this value.
    /// * `value` - The value to log.
    ///
    /// # Returns
    /// May return an error if the logged value is structurally incompatible
    /// with previous values logged under the same name.
    fn log(&mut self, event: Event, name: &'static str, value: Loggable) -> Result<(), LogError>;

    /// Mark the end of an event.
    fn done(&mut self, event: Event);
}

/// Logger that does nothing
impl Logger for () {
    fn log(&mut self, _: Event, _: &'static str, _: Loggable) -> Result<(), LogError> {
        Ok(())
    }

    fn done(&mut self, _: Event) {}
}

impl<L: Logger + ?Sized> Logger for &mut L {
    fn log(&mut self, event: Event, name: &'static str, value: Loggable) -> Result<(), LogError> {
        L::log(self, event, name, value)
    }

    fn done(&mut self, event: Event) {
        L::done(self, event)
    }
}

/// A value logged under a name that previously held an incompatible value.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("\"{name}\": incompatible value {value:?}, expected {expected}")]
pub struct LogError {
    name: &'static str,
    value: Loggable,
    expected: String,
}

impl LogError {
    pub const fn new(name: &'static str, value: Loggable, expected: String) -> Self {
        Self {
            name,
            value,
            expected,
        }
    }
}
