use super::{Event, LogError, Loggable, Logger};
use enum_map::EnumMap;
use std::collections::BTreeMap;
use std::mem;

/// Logger that keeps every logged value in memory, grouped by event and name.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct MemoryLogger {
    values: EnumMap<Event, BTreeMap<&'static str, Vec<Loggable>>>,
    done_counts: EnumMap<Event, u64>,
}

impl MemoryLogger {
    pub fn new() -> Self {
        Self::default()
    }

    /// All values logged under `name` for `event`, in logging order.
    pub fn values(&self, event: Event, name: &str) -> &[Loggable] {
        self.values[event]
            .get(name)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Scalar values logged under `name` for `event`.
    pub fn scalars(&self, event: Event, name: &str) -> Vec<f64> {
        self.values(event, name)
            .iter()
            .filter_map(|value| match value {
                Loggable::Scalar(x) => Some(*x),
                Loggable::Nothing => None,
            })
            .collect()
    }

    /// Number of times `event` has been marked done.
    pub fn done_count(&self, event: Event) -> u64 {
        self.done_counts[event]
    }
}

impl Logger for MemoryLogger {
    fn log(&mut self, event: Event, name: &'static str, value: Loggable) -> Result<(), LogError> {
        let entries = self.values[event].entry(name).or_default();
        if let Some(previous) = entries.last() {
            if mem::discriminant(previous) != mem::discriminant(&value) {
                return Err(LogError::new(name, value, format!("{:?}", previous)));
            }
        }
        entries.push(value);
        Ok(())
    }

    fn done(&mut self, event: Event) {
        self.done_counts[event] += 1;
    }
}
