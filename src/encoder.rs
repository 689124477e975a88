//! Category encoder adapter.
//!
//! Maps raw categorical strings to the integer codes the model was
//! trained on. Codes are positional: a category's code is its index in
//! the stored vocabulary. The training pipeline writes each vocabulary
//! in sorted order, so code 0 belongs to whichever category sorts first.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{CosechaError, Result};
use crate::input::normalize;

/// Code returned for a category the encoder has never seen.
///
/// Degrade-gracefully policy: an unknown category must never abort the
/// request, it maps to the first known category's code.
pub const UNKNOWN_CATEGORY_CODE: i64 = 0;

/// Ordered category vocabularies for the categorical input fields.
///
/// Immutable after load; shared read-only across requests for the
/// process lifetime.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EncoderTable {
    fields: BTreeMap<String, Vec<String>>,
}

impl EncoderTable {
    /// Build a table from field name → ordered vocabulary
    #[must_use]
    pub fn new(fields: BTreeMap<String, Vec<String>>) -> Self {
        Self { fields }
    }

    /// Whether the table carries an encoder for `field`
    #[must_use]
    pub fn contains_field(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Encode a raw categorical value to its trained integer code.
    ///
    /// The raw value is normalized (lowercase, trimmed) before lookup,
    /// matching the training pipeline. An unknown value resolves to
    /// [`UNKNOWN_CATEGORY_CODE`] with a diagnostic; a field with no
    /// encoder entry is a configuration bug and returns
    /// [`CosechaError::EncoderMissing`].
    ///
    /// # Errors
    ///
    /// Returns `EncoderMissing` when the table has no entry for `field`.
    pub fn encode(&self, field: &str, raw: &str) -> Result<i64> {
        let classes = self
            .fields
            .get(field)
            .ok_or_else(|| CosechaError::EncoderMissing {
                field: field.to_string(),
            })?;

        let value = normalize(raw);
        match classes.iter().position(|class| *class == value) {
            Some(code) => Ok(code as i64),
            None => {
                tracing::warn!(field, %value, "unknown category, using fallback code");
                Ok(UNKNOWN_CATEGORY_CODE)
            }
        }
    }
}
