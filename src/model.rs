//! Trained regression model artifact.
//!
//! The orchestrator treats the model as a black box behind [`Regressor`]:
//! a fixed-order numeric feature vector in, a scalar yield out. The
//! concrete artifact this build ships is a linear regressor serialized as
//! JSON by the training pipeline.

use serde::{Deserialize, Serialize};

use crate::error::{CosechaError, Result};

/// A trained regressor over the fixed-order feature vector
/// `[crop_code, soil_code, region_code, season_code, rainfall,
/// temperature, humidity]`.
///
/// Implementations must be safe for concurrent read-only use; the
/// serving context shares one instance across all request handlers.
pub trait Regressor: Send + Sync {
    /// Predict yield in kg/ha from the feature vector.
    ///
    /// # Errors
    ///
    /// Returns [`CosechaError::InferenceFailure`] when the vector does
    /// not match what the model was trained on.
    fn predict(&self, features: &[f64]) -> Result<f64>;

    /// Human-readable model type, reported by `/model-info`
    fn model_type(&self) -> &str;
}

fn default_model_type() -> String {
    "LinearRegression".to_string()
}

/// Linear regression artifact: `yield = weights · features + intercept`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearModel {
    /// Model type label written by the training pipeline
    #[serde(default = "default_model_type")]
    pub model_type: String,
    /// One weight per feature, in training feature order
    pub weights: Vec<f64>,
    /// Additive intercept term
    pub intercept: f64,
}

impl Regressor for LinearModel {
    fn predict(&self, features: &[f64]) -> Result<f64> {
        if features.len() != self.weights.len() {
            return Err(CosechaError::InferenceFailure {
                reason: format!(
                    "expected {} features, got {}",
                    self.weights.len(),
                    features.len()
                ),
            });
        }

        let dot: f64 = features
            .iter()
            .zip(self.weights.iter())
            .map(|(feature, weight)| feature * weight)
            .sum();

        Ok(dot + self.intercept)
    }

    fn model_type(&self) -> &str {
        &self.model_type
    }
}
