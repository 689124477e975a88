//! Model-path confidence estimator.
//!
//! A heuristic plausibility score, not a statistical interval: inputs
//! inside their agronomically typical ranges score higher, and a bounded
//! random jitter keeps the score from looking deterministic. The random
//! source is injected so tests can seed it.

use rand::Rng;

/// Starting confidence before range penalties and jitter
pub const BASE_CONFIDENCE: f64 = 85.0;
/// Lower clamp on the reported confidence
pub const MIN_CONFIDENCE: f64 = 60.0;
/// Upper clamp on the reported confidence
pub const MAX_CONFIDENCE: f64 = 95.0;

/// Estimate confidence for a model-backed prediction.
///
/// Starts at [`BASE_CONFIDENCE`], subtracts independent penalties for
/// each input outside its typical range (rainfall [50, 400]: -5,
/// temperature [10, 45]: -5, humidity [20, 95]: -3), adds uniform
/// jitter in [-5, 10), clamps to [60, 95] and rounds to one decimal.
pub fn estimate_confidence<R: Rng>(
    rainfall: f64,
    temperature: f64,
    humidity: f64,
    rng: &mut R,
) -> f64 {
    let mut confidence = BASE_CONFIDENCE;

    if rainfall < 50.0 || rainfall > 400.0 {
        confidence -= 5.0;
    }
    if temperature < 10.0 || temperature > 45.0 {
        confidence -= 5.0;
    }
    if humidity < 20.0 || humidity > 95.0 {
        confidence -= 3.0;
    }

    confidence += rng.gen_range(-5.0..10.0);

    (confidence.clamp(MIN_CONFIDENCE, MAX_CONFIDENCE) * 10.0).round() / 10.0
}
