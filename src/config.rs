//! Scoring configuration and flow presets
//!
//! The original service hardcoded a slightly different rule set into each of
//! its request handlers: confidence cutoffs, required item lists and score
//! weights all varied by entry point. [`ScoringConfig`] consolidates those
//! knobs into one structure with a named preset per flow, so the engine is
//! parameterized instead of branching.
//!
//! # Configuration Loading
//!
//! Configuration can be loaded from JSON files or constructed from a preset:
//!
//! ```no_run
//! use roomscan::ScoringConfig;
//! use std::path::Path;
//!
//! // Load from file
//! let config = ScoringConfig::from_json_file(Path::new("scoring.json"))?;
//!
//! // Or use a preset
//! let config = ScoringConfig::quick_scan();
//! # Ok::<(), roomscan::AnalysisError>(())
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::constants::{lighting, thresholds};
use crate::error::{AnalysisError, Result};

/// Weights of the three scoring factors
///
/// A valid weight set is convex: every weight non-negative and the three
/// summing to 1, so the total stays inside [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreWeights {
    /// Weight of the required-objects score
    pub required_objects: f64,

    /// Weight of the color match score
    pub color: f64,

    /// Weight of the lighting score
    pub lighting: f64,
}

impl ScoreWeights {
    /// Combine the three sub-scores into the weighted total
    pub fn combine(&self, required_objects: f64, color: f64, lighting: f64) -> f64 {
        self.required_objects * required_objects + self.color * color + self.lighting * lighting
    }

    fn sum(&self) -> f64 {
        self.required_objects + self.color + self.lighting
    }
}

/// Complete rule set for one scoring flow
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Minimum confidence for a detected object to count (kept iff
    /// confidence >= threshold)
    pub object_confidence: f64,

    /// Minimum confidence for a detected label to count
    pub label_confidence: f64,

    /// Object categories whose presence is scored; each contributes
    /// 1/len to the required-objects score
    pub required_items: Vec<String>,

    /// Count a required item as present when it only appears in the
    /// label set rather than the object set
    #[serde(default)]
    pub labels_count_for_presence: bool,

    /// Weights of the three scoring factors
    pub weights: ScoreWeights,

    /// Lightness (0-255 HLS scale) at which the lighting score saturates at 1
    pub wanted_lightness: f64,

    /// Only suggest a lamp for dark rooms when the total score is also low.
    /// The original flows disagreed on this gate; it is kept as an explicit
    /// toggle pending product clarification.
    #[serde(default)]
    pub lamp_requires_low_total: bool,
}

impl ScoringConfig {
    /// Preset of the quick-scan flow: strict object confidence, a single
    /// required item, and a total dominated by object presence.
    pub fn quick_scan() -> Self {
        Self {
            object_confidence: thresholds::STRICT_OBJECT_CONFIDENCE,
            label_confidence: thresholds::LABEL_CONFIDENCE,
            required_items: vec!["Plant".to_string()],
            labels_count_for_presence: false,
            weights: ScoreWeights {
                required_objects: 0.50,
                color: 0.40,
                lighting: 0.10,
            },
            wanted_lightness: lighting::WANTED_LIGHTNESS,
            lamp_requires_low_total: false,
        }
    }

    /// Preset of the full-report flow: relaxed object confidence, labels
    /// counted for presence, and a total dominated by lighting.
    pub fn full_report() -> Self {
        Self {
            object_confidence: thresholds::RELAXED_OBJECT_CONFIDENCE,
            label_confidence: thresholds::LABEL_CONFIDENCE,
            required_items: vec!["Plant".to_string(), "Lighting".to_string()],
            labels_count_for_presence: true,
            weights: ScoreWeights {
                required_objects: 0.30,
                color: 0.20,
                lighting: 0.50,
            },
            wanted_lightness: lighting::WANTED_LIGHTNESS,
            lamp_requires_low_total: true,
        }
    }

    /// Check every parameter against its valid range
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::InvalidParameter` for a confidence outside
    /// [0, 1], an empty required-item list, a non-positive wanted lightness,
    /// a negative weight, or weights that do not sum to 1.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.object_confidence) {
            return Err(AnalysisError::invalid_parameter(
                "object_confidence",
                self.object_confidence,
            ));
        }
        if !(0.0..=1.0).contains(&self.label_confidence) {
            return Err(AnalysisError::invalid_parameter(
                "label_confidence",
                self.label_confidence,
            ));
        }
        if self.required_items.is_empty() {
            return Err(AnalysisError::invalid_parameter("required_items", "[]"));
        }
        if self.wanted_lightness <= 0.0 {
            return Err(AnalysisError::invalid_parameter(
                "wanted_lightness",
                self.wanted_lightness,
            ));
        }
        let w = &self.weights;
        if w.required_objects < 0.0 || w.color < 0.0 || w.lighting < 0.0 {
            return Err(AnalysisError::invalid_parameter(
                "weights",
                format!("{:?}", w),
            ));
        }
        if (w.sum() - 1.0).abs() > 1e-6 {
            return Err(AnalysisError::invalid_parameter("weights.sum", w.sum()));
        }
        Ok(())
    }

    /// Load configuration from a JSON file
    ///
    /// # Errors
    ///
    /// Returns a configuration error when the file cannot be read or parsed,
    /// or an invalid parameter error when a loaded value is out of range.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| AnalysisError::config(format!("cannot read {}", path.display()), e))?;
        let config: Self = serde_json::from_str(&content)
            .map_err(|e| AnalysisError::config(format!("cannot parse {}", path.display()), e))?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a JSON file
    ///
    /// # Errors
    ///
    /// Returns a configuration error when the file cannot be written.
    pub fn to_json_file(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| AnalysisError::config("cannot serialize configuration", e))?;
        std::fs::write(path, json)
            .map_err(|e| AnalysisError::config(format!("cannot write {}", path.display()), e))?;
        Ok(())
    }
}
