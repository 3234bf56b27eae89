//! Workload parameter bag
//!
//! The form layer (or any other caller) supplies inputs as a flat map of
//! field id to number-or-boolean. Accessors never fail: a missing or
//! wrongly-typed entry reads as 0 (numbers) or false (flags), matching
//! the coercion contract of the original form.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Field ids shared between the calculators and the field schemas
pub mod keys {
    pub const MIN_REPLICA_COUNT: &str = "minReplicaCount";
    pub const MAX_REPLICA_COUNT: &str = "maxReplicaCount";
    pub const PARALLELISM: &str = "parallelism";
    pub const REPLICAS: &str = "replicas";
    pub const HAS_HPA: &str = "hasHPA";
    pub const REQUESTED_MEMORY: &str = "requestedMemory";
    pub const REQUESTED_CPU: &str = "requestedCpu";
    pub const MAX_MEMORY: &str = "maxMemory";
}

/// A single form value
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Bool(bool),
    Number(f64),
}

impl From<f64> for ParamValue {
    fn from(v: f64) -> Self {
        ParamValue::Number(v)
    }
}

impl From<bool> for ParamValue {
    fn from(v: bool) -> Self {
        ParamValue::Bool(v)
    }
}

/// Flat mapping of field id to value for one workload kind
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParamBag(BTreeMap<String, ParamValue>);

impl ParamBag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<ParamValue>) {
        self.0.insert(key.into(), value.into());
    }

    /// Builder-style insert, convenient in tests and call sites
    pub fn with(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.set(key, value);
        self
    }

    /// Numeric value of a field, or `None` when absent or a flag
    pub fn number(&self, key: &str) -> Option<f64> {
        match self.0.get(key) {
            Some(ParamValue::Number(v)) if v.is_finite() => Some(*v),
            _ => None,
        }
    }

    /// Numeric value clamped to be non-negative, defaulting to 0
    pub fn number_or_zero(&self, key: &str) -> f64 {
        self.number(key).unwrap_or(0.0).max(0.0)
    }

    /// Boolean value of a field; absent or numeric reads as false
    pub fn flag(&self, key: &str) -> bool {
        matches!(self.0.get(key), Some(ParamValue::Bool(true)))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }
}
