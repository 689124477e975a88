//! Startup artifact loader.
//!
//! Reads the training pipeline's outputs (model, encoders, metrics) from
//! a model directory, once, at process startup. Loading never fails the
//! process: a missing or unreadable artifact degrades to absence (model,
//! encoders) or defaults (metrics), and the serving context reflects
//! whatever was actually found.

use std::path::Path;
use std::sync::Arc;

use serde::de::DeserializeOwned;

use crate::encoder::EncoderTable;
use crate::error::CosechaError;
use crate::metrics::MetricsRecord;
use crate::model::{LinearModel, Regressor};
use crate::predict::ServingContext;

/// Model artifact file name within the model directory
pub const MODEL_FILE: &str = "model.json";
/// Encoder table artifact file name
pub const ENCODERS_FILE: &str = "encoders.json";
/// Training metrics artifact file name
pub const METRICS_FILE: &str = "metrics.json";

/// Load one JSON artifact; absence and errors both resolve to `None`
fn load_json<T: DeserializeOwned>(path: &Path) -> Option<T> {
    if !path.exists() {
        tracing::warn!(path = %path.display(), "artifact not found");
        return None;
    }

    let parsed = std::fs::read_to_string(path)
        .map_err(|err| CosechaError::ArtifactLoad {
            path: path.display().to_string(),
            reason: err.to_string(),
        })
        .and_then(|text| {
            serde_json::from_str(&text).map_err(|err| CosechaError::ArtifactLoad {
                path: path.display().to_string(),
                reason: err.to_string(),
            })
        });

    match parsed {
        Ok(value) => {
            tracing::info!(path = %path.display(), "artifact loaded");
            Some(value)
        }
        Err(err) => {
            tracing::warn!(%err, "artifact unusable, treating as absent");
            None
        }
    }
}

/// Load all serving artifacts from `dir` and build the context.
///
/// Outcomes per artifact: present → loaded; absent → not loaded (model,
/// encoders) or defaults (metrics); read/parse error → same as absent,
/// with a diagnostic.
#[must_use]
pub fn load_artifacts(dir: &Path) -> ServingContext {
    let model: Option<LinearModel> = load_json(&dir.join(MODEL_FILE));
    let encoders: Option<EncoderTable> = load_json(&dir.join(ENCODERS_FILE));
    let metrics: MetricsRecord = load_json(&dir.join(METRICS_FILE)).unwrap_or_default();

    if model.is_none() || encoders.is_none() {
        tracing::warn!("serving without model artifacts, predictions use the fallback path");
    }

    ServingContext::new(
        model.map(|m| Arc::new(m) as Arc<dyn Regressor>),
        encoders,
        metrics,
    )
}
