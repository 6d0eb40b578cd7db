//! Model parameter handling
//!
//! Forecast requests carry an untyped JSON parameter bag
//! ([`ModelParameters`]); each model resolves the keys it cares about
//! into a typed view with explicit defaults before any computation.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ForecastError, Result};

/// Parameter key for the moving-average window size
pub const WINDOW_SIZE_KEY: &str = "windowSize";

/// Default moving-average window size
pub const DEFAULT_WINDOW_SIZE: usize = 7;

/// Untyped model tuning parameters supplied with a forecast request
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModelParameters(BTreeMap<String, Value>);

impl ModelParameters {
    /// Create an empty parameter bag
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a parameter, consuming and returning the bag
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Set a parameter
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    /// Get a raw parameter value
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Check if the bag has no parameters
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Read a parameter as `usize`, coercing from any non-negative
    /// JSON number. Missing or non-numeric values yield `None`.
    pub fn get_usize(&self, key: &str) -> Option<usize> {
        let value = self.0.get(key)?;
        value
            .as_u64()
            .map(|n| n as usize)
            .or_else(|| value.as_f64().filter(|f| *f >= 0.0).map(|f| f as usize))
    }

    /// Read a parameter as `f64`, coercing from any JSON number
    pub fn get_f64(&self, key: &str) -> Option<f64> {
        self.0.get(key)?.as_f64()
    }
}

/// Typed parameters for the moving-average model
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MovingAverageParams {
    /// Number of trailing observations averaged into the forecast
    pub window_size: usize,
}

impl Default for MovingAverageParams {
    fn default() -> Self {
        Self {
            window_size: DEFAULT_WINDOW_SIZE,
        }
    }
}

impl MovingAverageParams {
    /// Resolve typed parameters from an untyped bag.
    ///
    /// A missing or non-numeric `windowSize` falls back to the default
    /// window of 7 periods.
    pub fn from_parameters(params: &ModelParameters) -> Result<Self> {
        let window_size = params
            .get_usize(WINDOW_SIZE_KEY)
            .unwrap_or(DEFAULT_WINDOW_SIZE);

        if window_size == 0 {
            return Err(ForecastError::InvalidParameter(
                "Window size must be positive".to_string(),
            ));
        }

        Ok(Self { window_size })
    }
}
