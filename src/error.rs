//! Error types for the prediction serving core.
//!
//! None of these errors ever reach an API caller as a failed prediction:
//! the orchestrator degrades every failure to the rule-based fallback
//! path. They exist so the degradation points are explicit and testable.

use thiserror::Error;

/// Result type alias using [`CosechaError`]
pub type Result<T> = std::result::Result<T, CosechaError>;

/// Error type for the serving core
#[derive(Debug, Error)]
pub enum CosechaError {
    /// Model or encoder artifacts are not loaded
    #[error("model artifacts not loaded")]
    ArtifactsAbsent,

    /// Encoder table lacks an expected categorical field.
    ///
    /// This is a configuration bug in the artifact set: the table was
    /// written without one of the fields the model was trained on.
    #[error("no encoder found for field '{field}'")]
    EncoderMissing {
        /// Categorical field with no encoder entry
        field: String,
    },

    /// Model invocation failed
    #[error("inference failed: {reason}")]
    InferenceFailure {
        /// What went wrong inside the model call
        reason: String,
    },

    /// An artifact file could not be read or parsed
    #[error("failed to load artifact {path}: {reason}")]
    ArtifactLoad {
        /// Path of the offending artifact file
        path: String,
        /// Underlying read or parse error
        reason: String,
    },

    /// Server startup failure (bind, invalid address)
    #[error("server error: {reason}")]
    Server {
        /// Underlying failure
        reason: String,
    },
}
