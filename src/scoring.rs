//! Multi-factor room scoring
//!
//! Combines three signals into a weighted total:
//! - presence of the required object categories,
//! - suitability of the matched wall color for the declared room type,
//! - lighting level derived from the dominant color.
//!
//! The engine is a pure, stateless computation over its inputs: the only
//! shared resource is the immutable catalog, so independent analyses are
//! safe to run concurrently without locking.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::catalog::ColorCatalog;
use crate::color::{hls_lightness, lighting_score, ColorMatch, ColorMatcher};
use crate::config::ScoringConfig;
use crate::detection::{filter_labels, filter_objects, RoomObservation};
use crate::error::Result;
use crate::recommend::{self, AdviceInputs};

/// Per-item presence plus the aggregate required-objects score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequiredObjectsScore {
    /// Presence of each required item, keyed by item name
    #[serde(flatten)]
    pub items: BTreeMap<String, bool>,

    /// Always k/n: each of the n required items contributes 1/n when present
    pub score: f64,
}

/// A single-factor score in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FactorScore {
    pub score: f64,
}

/// Per-factor scores and their weighted total
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub required_objects: RequiredObjectsScore,
    pub color: FactorScore,
    pub lighting: FactorScore,
    pub total: f64,
}

/// Complete analysis result
///
/// Serializes to the wire layout the existing consumers expect: `objects`,
/// `colors`, `scoring.required_objects.score`, `scoring.color.score`,
/// `scoring.lighting.score`, `scoring.total`, `recommendations`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomReport {
    /// Deduplicated detected object names above the confidence threshold
    pub objects: Vec<String>,

    /// Matched reference color; `hexColor` holds the measured dominant color
    #[serde(rename = "colors")]
    pub color_match: ColorMatch,

    pub scoring: ScoreBreakdown,

    /// Advice strings, in rule order; purely informational
    pub recommendations: Vec<String>,
}

/// Stateless scoring engine over an immutable catalog and one rule set
pub struct ScoringEngine<'a> {
    catalog: &'a ColorCatalog,
    config: &'a ScoringConfig,
}

impl<'a> ScoringEngine<'a> {
    /// Create an engine, validating the configuration
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::InvalidParameter` when the configuration
    /// fails validation.
    pub fn new(catalog: &'a ColorCatalog, config: &'a ScoringConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { catalog, config })
    }

    /// Score one observed room
    pub fn analyze(&self, observation: &RoomObservation) -> RoomReport {
        let objects = filter_objects(&observation.objects, self.config.object_confidence);
        let labels = filter_labels(&observation.labels, self.config.label_confidence);

        let color_match = ColorMatcher::new(self.catalog).match_color(observation.dominant_color);

        let required_objects = self.required_objects_score(&objects, &labels);
        let color_suits_room = color_match
            .room_types
            .iter()
            .any(|t| t == &observation.room_type);
        let color = FactorScore {
            score: if color_suits_room { 1.0 } else { 0.0 },
        };

        let lightness = hls_lightness(observation.dominant_color);
        let lighting = FactorScore {
            score: lighting_score(lightness, self.config.wanted_lightness),
        };

        let total = self
            .config
            .weights
            .combine(required_objects.score, color.score, lighting.score);

        log::debug!(
            "room \"{}\": required {:.2}, color {:.0}, lighting {:.2}, total {:.2}",
            observation.room_type,
            required_objects.score,
            color.score,
            lighting.score,
            total
        );

        let recommendations = recommend::advise(
            &AdviceInputs {
                objects: &objects,
                lightness,
                color_suits_room,
                total,
                room_type: &observation.room_type,
            },
            self.catalog,
            self.config,
        );

        RoomReport {
            objects,
            color_match,
            scoring: ScoreBreakdown {
                required_objects,
                color,
                lighting,
                total,
            },
            recommendations,
        }
    }

    fn required_objects_score(&self, objects: &[String], labels: &[String]) -> RequiredObjectsScore {
        let required = &self.config.required_items;
        // Validation guarantees a non-empty list
        let share = 1.0 / required.len() as f64;

        let mut items = BTreeMap::new();
        let mut score = 0.0;
        for item in required {
            let mut present = objects.contains(item);
            if !present && self.config.labels_count_for_presence {
                present = labels.contains(item);
            }
            if present {
                score += share;
            }
            items.insert(item.clone(), present);
        }
        RequiredObjectsScore { items, score }
    }
}
