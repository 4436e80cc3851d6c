//! Single-register calculator memory (M+, M-, MR, MC).

use crate::eval::round_to_precision;
use log::warn;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Memory {
    value: f64,
    has_value: bool,
}

impl Memory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, amount: f64) {
        self.accumulate(self.value + amount);
    }

    pub fn subtract(&mut self, amount: f64) {
        self.accumulate(self.value - amount);
    }

    /// Stored value, if anything has been stored since the last clear.
    pub fn recall(&self) -> Option<f64> {
        self.has_value.then_some(self.value)
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn has_value(&self) -> bool {
        self.has_value
    }

    fn accumulate(&mut self, total: f64) {
        if !total.is_finite() {
            warn!("memory overflow, keeping {}", self.value);
            return;
        }
        self.value = round_to_precision(total);
        self.has_value = true;
    }
}
