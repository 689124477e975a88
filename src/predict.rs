//! Prediction orchestrator.
//!
//! Decides between the model-backed and rule-based fallback paths and
//! assembles the final response. Strict precedence, each step falling
//! through to the fallback on failure:
//!
//! 1. model or encoders absent → fallback
//! 2. any categorical field without an encoder entry → fallback
//! 3. model invocation error → fallback
//!
//! The caller never observes an error from prediction.

use std::sync::Arc;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::confidence::estimate_confidence;
use crate::encoder::EncoderTable;
use crate::error::{CosechaError, Result};
use crate::fallback::fallback_predict;
use crate::input::PredictionInput;
use crate::metrics::MetricsRecord;
use crate::model::Regressor;

/// Final prediction returned to the caller
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionResult {
    /// Predicted yield in kg/ha, rounded to 2 decimals
    pub predicted_yield: f64,
    /// Heuristic confidence in [60.0, 95.0], rounded to 1 decimal
    pub confidence: f64,
    /// Metrics attached to this prediction: the loaded training record
    /// on the model path, fixed constants on the fallback path
    pub model_accuracy: MetricsRecord,
}

/// Immutable artifact set shared by all request handlers.
///
/// Constructed once at startup and never mutated afterwards; requests
/// only read it, so no locking is needed in steady-state serving.
pub struct ServingContext {
    model: Option<Arc<dyn Regressor>>,
    encoders: Option<EncoderTable>,
    metrics: MetricsRecord,
}

impl ServingContext {
    /// Build a context from whatever artifacts the loader found
    #[must_use]
    pub fn new(
        model: Option<Arc<dyn Regressor>>,
        encoders: Option<EncoderTable>,
        metrics: MetricsRecord,
    ) -> Self {
        Self {
            model,
            encoders,
            metrics,
        }
    }

    /// A context with no artifacts; every prediction takes the fallback path
    #[must_use]
    pub fn empty() -> Self {
        Self::new(None, None, MetricsRecord::default())
    }

    /// Whether a trained model is loaded
    #[must_use]
    pub fn model_loaded(&self) -> bool {
        self.model.is_some()
    }

    /// Whether the encoder table is loaded
    #[must_use]
    pub fn encoders_loaded(&self) -> bool {
        self.encoders.is_some()
    }

    /// The loaded training metrics (defaults when no artifact was found)
    #[must_use]
    pub fn metrics(&self) -> &MetricsRecord {
        &self.metrics
    }

    /// Model type label, when a model is loaded
    #[must_use]
    pub fn model_type(&self) -> Option<&str> {
        self.model.as_deref().map(Regressor::model_type)
    }

    /// Both artifacts the model path needs, or [`CosechaError::ArtifactsAbsent`]
    fn artifacts(&self) -> Result<(&dyn Regressor, &EncoderTable)> {
        match (&self.model, &self.encoders) {
            (Some(model), Some(encoders)) => Ok((model.as_ref(), encoders)),
            _ => Err(CosechaError::ArtifactsAbsent),
        }
    }

    /// Predict yield for `input`.
    ///
    /// Always returns a result: any failure on the model path degrades
    /// to [`fallback_predict`], which has no dependency that can fail.
    pub fn predict<R: Rng>(&self, input: &PredictionInput, rng: &mut R) -> PredictionResult {
        let (model, encoders) = match self.artifacts() {
            Ok(artifacts) => artifacts,
            Err(err) => {
                tracing::debug!(%err, "using fallback prediction");
                return fallback_predict(input, rng);
            }
        };

        let mut features = Vec::with_capacity(7);
        for (field, raw) in input.categorical_fields() {
            match encoders.encode(field, raw) {
                Ok(code) => features.push(code as f64),
                Err(err) => {
                    tracing::warn!(%err, "encoding failed, using fallback prediction");
                    return fallback_predict(input, rng);
                }
            }
        }
        features.extend([input.rainfall, input.temperature, input.humidity]);

        let predicted_yield = match model.predict(&features) {
            Ok(yield_kg_ha) => yield_kg_ha,
            Err(err) => {
                tracing::warn!(%err, "model inference failed, using fallback prediction");
                return fallback_predict(input, rng);
            }
        };

        let confidence =
            estimate_confidence(input.rainfall, input.temperature, input.humidity, rng);

        PredictionResult {
            predicted_yield: (predicted_yield * 100.0).round() / 100.0,
            confidence,
            model_accuracy: self.metrics.clone(),
        }
    }
}
