//! Animation parameter sink.

use std::collections::HashMap;

/// Receives named numeric parameters that drive locomotion visuals.
pub trait AnimationSink {
    fn set_float(&mut self, name: &str, value: f32);
}

/// An [`AnimationSink`] that stores parameters in a map.
///
/// Stands in for an animator when running headless.
#[derive(Debug, Clone, Default)]
pub struct ParamBlock {
    values: HashMap<String, f32>,
    writes: u64,
}

impl ParamBlock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last value written under `name`.
    pub fn get(&self, name: &str) -> Option<f32> {
        self.values.get(name).copied()
    }

    /// Total number of `set_float` calls received.
    pub fn writes(&self) -> u64 {
        self.writes
    }
}

impl AnimationSink for ParamBlock {
    fn set_float(&mut self, name: &str, value: f32) {
        self.writes += 1;
        match self.values.get_mut(name) {
            Some(slot) => *slot = value,
            None => {
                self.values.insert(name.to_owned(), value);
            }
        }
    }
}
