//! # Cosecha
//!
//! Crop yield prediction server with a rule-based fallback.
//!
//! Cosecha (Spanish: "harvest") serves yield predictions (kg/ha) from a
//! previously trained regression model over a small REST API. Model,
//! encoder, and metrics artifacts are loaded once at startup; whenever
//! they are absent or fail at inference time, a deterministic rule-based
//! estimator answers instead, so prediction never fails.
//!
//! ## Example
//!
//! ```rust
//! use cosecha::input::PredictionInput;
//! use cosecha::predict::ServingContext;
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let ctx = ServingContext::empty();
//! let input = PredictionInput {
//!     crop: "wheat".to_string(),
//!     soil_type: "loamy".to_string(),
//!     region: "north-india".to_string(),
//!     season: "rabi".to_string(),
//!     rainfall: 150.0,
//!     temperature: 28.0,
//!     humidity: 65.0,
//! };
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let result = ctx.predict(&input, &mut rng);
//! assert!(result.predicted_yield > 0.0);
//! ```

#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::cast_precision_loss)] // category codes -> f64 features are small integers
#![allow(clippy::must_use_candidate)]
#![allow(clippy::float_cmp)] // exact comparisons are intentional in tests
#![allow(clippy::manual_range_contains)]

/// HTTP API: request/response schemas, handlers, router
pub mod api;
/// Startup artifact loader (model, encoders, metrics)
pub mod artifacts;
/// Model-path confidence estimator
pub mod confidence;
/// Category encoder adapter with unknown-category handling
pub mod encoder;
/// Error taxonomy for the serving core
pub mod error;
/// Rule-based fallback yield estimator
pub mod fallback;
/// Input schema and feature-order constants
pub mod input;
/// Training metrics record
pub mod metrics;
/// Regressor trait and the linear model artifact
pub mod model;
/// Prediction orchestrator and serving context
pub mod predict;

// Re-exports for convenience
pub use error::{CosechaError, Result};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(VERSION.contains('.'));
        assert!(!VERSION.is_empty());
    }
}
