//! Model registry and dispatch

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::Serialize;
use tracing::warn;

use crate::error::{ForecastError, Result};
use crate::models::{
    ExponentialModel, ForecastModel, LinearModel, MovingAverageModel, TrendModel,
};
use crate::params::ModelParameters;

/// Registry key of the fallback model
pub const LINEAR_MODEL_KEY: &str = "linear";

/// Catalog entry describing a registered model
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelInfo {
    /// Registry key used to select the model
    pub key: String,
    /// Human-readable model name
    pub name: String,
    /// What the model is suited for
    pub description: String,
    /// Parameters assumed when a request supplies none
    pub default_parameters: ModelParameters,
}

/// Maps model-type keys to forecasting model implementations
#[derive(Debug, Clone)]
pub struct ModelRegistry {
    models: BTreeMap<String, Arc<dyn ForecastModel>>,
}

impl Default for ModelRegistry {
    fn default() -> Self {
        Self::with_builtin()
    }
}

impl ModelRegistry {
    /// Create a registry with no models
    pub fn empty() -> Self {
        Self {
            models: BTreeMap::new(),
        }
    }

    /// Create a registry with the four built-in models
    pub fn with_builtin() -> Self {
        let mut registry = Self::empty();
        registry.register(Arc::new(LinearModel));
        registry.register(Arc::new(ExponentialModel));
        registry.register(Arc::new(MovingAverageModel));
        registry.register(Arc::new(TrendModel));
        registry
    }

    /// Register a model under its own key, replacing any existing
    /// entry for that key
    pub fn register(&mut self, model: Arc<dyn ForecastModel>) {
        self.models.insert(model.key().to_string(), model);
    }

    /// Look up the model registered under the given key
    pub fn resolve(&self, key: &str) -> Result<Arc<dyn ForecastModel>> {
        self.models
            .get(key)
            .cloned()
            .ok_or_else(|| ForecastError::UnknownModelType(key.to_string()))
    }

    /// Look up a model, falling back to linear regression when the key
    /// is unknown.
    ///
    /// Unrecognized model types have always been served by the linear
    /// model rather than rejected; callers that want a hard error use
    /// [`resolve`](Self::resolve) instead. Fails only when the linear
    /// model itself is unregistered.
    pub fn resolve_or_linear(&self, key: &str) -> Result<Arc<dyn ForecastModel>> {
        if let Some(model) = self.models.get(key) {
            return Ok(Arc::clone(model));
        }

        warn!(model_type = key, "unknown model type, falling back to linear");
        self.resolve(LINEAR_MODEL_KEY)
    }

    /// Check whether a key is registered
    pub fn contains(&self, key: &str) -> bool {
        self.models.contains_key(key)
    }

    /// Registered model keys, in sorted order
    pub fn keys(&self) -> Vec<&str> {
        self.models.keys().map(String::as_str).collect()
    }

    /// Describe every registered model, sorted by key
    pub fn catalog(&self) -> Vec<ModelInfo> {
        self.models
            .values()
            .map(|model| ModelInfo {
                key: model.key().to_string(),
                name: model.name().to_string(),
                description: model.description().to_string(),
                default_parameters: model.default_parameters(),
            })
            .collect()
    }

    /// Number of registered models
    pub fn len(&self) -> usize {
        self.models.len()
    }

    /// Check if the registry has no models
    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}
