//! # roomscan
//!
//! A Rust crate for scoring photographed rooms against a small rule set.
//!
//! Given the plain annotation data an external vision layer already
//! extracted (detected objects, labels, dominant color), the library:
//! - Resolves the dominant color to the perceptually closest named
//!   reference color
//! - Scores required-object presence, color suitability and lighting,
//!   combined into one weighted total
//! - Derives textual recommendations from the same signals
//!
//! ## Example
//!
//! ```rust
//! use palette::Srgb;
//! use roomscan::{analyze_room, ColorCatalog, DetectedObject, RoomObservation, ScoringConfig};
//!
//! let catalog = ColorCatalog::builtin();
//! let config = ScoringConfig::quick_scan();
//! let observation = RoomObservation {
//!     objects: vec![DetectedObject { name: "Plant".to_string(), confidence: 0.92 }],
//!     labels: Vec::new(),
//!     dominant_color: Srgb::new(0x9c, 0xaf, 0x88),
//!     room_type: "bedroom".to_string(),
//! };
//!
//! let report = analyze_room(&catalog, &config, &observation)?;
//! println!("Matched {}, total score {:.2}", report.color_match.name, report.scoring.total);
//! # Ok::<(), roomscan::AnalysisError>(())
//! ```

pub mod catalog;
pub mod color;
pub mod config;
pub mod constants;
pub mod detection;
pub mod error;
pub mod recommend;
pub mod scoring;

pub use catalog::{ColorCatalog, ReferenceColor};
pub use color::{ColorMatch, ColorMatcher};
pub use config::{ScoreWeights, ScoringConfig};
pub use detection::{DetectedLabel, DetectedObject, RoomObservation};
pub use error::{AnalysisError, Result};
pub use scoring::{RoomReport, ScoreBreakdown, ScoringEngine};

/// Score one observed room
///
/// This is the main entry point. The catalog and configuration are built
/// once at startup and shared across calls; each call is an independent,
/// pure computation.
///
/// # Errors
///
/// Returns `AnalysisError::InvalidParameter` when the configuration fails
/// validation. Scoring itself cannot fail for valid inputs.
pub fn analyze_room(
    catalog: &ColorCatalog,
    config: &ScoringConfig,
    observation: &RoomObservation,
) -> Result<RoomReport> {
    let engine = ScoringEngine::new(catalog, config)?;
    Ok(engine.analyze(observation))
}

#[cfg(test)]
mod tests {
    use super::*;
    use palette::Srgb;

    #[test]
    fn test_room_report_serialization() {
        let catalog = ColorCatalog::builtin();
        let config = ScoringConfig::full_report();
        let observation = RoomObservation {
            objects: vec![DetectedObject {
                name: "Plant".to_string(),
                confidence: 0.9,
            }],
            labels: Vec::new(),
            dominant_color: Srgb::new(0x9c, 0xaf, 0x88),
            room_type: "bedroom".to_string(),
        };

        let report = analyze_room(&catalog, &config, &observation).unwrap();
        let json = serde_json::to_value(&report).unwrap();

        // Wire layout consumed by existing clients
        assert!(json["objects"].is_array());
        assert!(json["colors"]["name"].is_string());
        assert!(json["colors"]["hexColor"].is_string());
        assert!(json["colors"]["roomTypes"].is_array());
        assert!(json["scoring"]["required_objects"]["score"].is_number());
        assert!(json["scoring"]["required_objects"]["Plant"].is_boolean());
        assert!(json["scoring"]["color"]["score"].is_number());
        assert!(json["scoring"]["lighting"]["score"].is_number());
        assert!(json["scoring"]["total"].is_number());
        assert!(json["recommendations"].is_array());

        let round_trip: RoomReport =
            serde_json::from_str(&serde_json::to_string(&report).unwrap()).unwrap();
        assert_eq!(report, round_trip);
    }

    #[test]
    fn test_analyze_room_rejects_invalid_config() {
        let catalog = ColorCatalog::builtin();
        let mut config = ScoringConfig::quick_scan();
        config.required_items.clear();

        let observation = RoomObservation {
            objects: Vec::new(),
            labels: Vec::new(),
            dominant_color: Srgb::new(0, 0, 0),
            room_type: "bedroom".to_string(),
        };
        assert!(analyze_room(&catalog, &config, &observation).is_err());
    }
}
