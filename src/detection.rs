//! Inputs from the external annotation collaborators
//!
//! The crate does not call any vision service itself; it consumes the plain
//! annotation data (object localizations, labels, dominant color) the
//! surrounding service layer already fetched, filters it by confidence and
//! deduplicates the names.

use palette::Srgb;
use serde::{Deserialize, Serialize};

/// An object localized in the room photo by the annotation service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectedObject {
    pub name: String,
    /// Detection confidence in [0, 1]
    pub confidence: f64,
}

/// A whole-image label produced by the annotation service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectedLabel {
    pub description: String,
    /// Detection confidence in [0, 1]
    pub confidence: f64,
}

/// Everything the collaborator layer hands over for one analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomObservation {
    /// Localized objects, unfiltered
    #[serde(default)]
    pub objects: Vec<DetectedObject>,

    /// Whole-image labels, unfiltered
    #[serde(default)]
    pub labels: Vec<DetectedLabel>,

    /// Dominant color extracted from the photo
    pub dominant_color: Srgb<u8>,

    /// Declared target room type, e.g. "bedroom" or "office"
    pub room_type: String,
}

/// Names of objects at or above `min_confidence`, deduplicated with
/// first-seen order preserved
pub fn filter_objects(objects: &[DetectedObject], min_confidence: f64) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for object in objects {
        if object.confidence >= min_confidence && !names.contains(&object.name) {
            names.push(object.name.clone());
        }
    }
    log::debug!(
        "{} of {} detected objects at or above confidence {}",
        names.len(),
        objects.len(),
        min_confidence
    );
    names
}

/// Label descriptions at or above `min_confidence`, deduplicated with
/// first-seen order preserved
pub fn filter_labels(labels: &[DetectedLabel], min_confidence: f64) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for label in labels {
        if label.confidence >= min_confidence && !names.contains(&label.description) {
            names.push(label.description.clone());
        }
    }
    names
}
