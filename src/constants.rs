//! Fixed thresholds and reference values for room scoring
//!
//! The original service duplicated these constants across its request
//! handlers; they are collected here and surfaced through
//! [`ScoringConfig`](crate::ScoringConfig) presets.

/// Detection confidence thresholds
pub mod thresholds {
    /// Object confidence cutoff used by the strict flow
    pub const STRICT_OBJECT_CONFIDENCE: f64 = 0.5;

    /// Object confidence cutoff used by the relaxed flow
    pub const RELAXED_OBJECT_CONFIDENCE: f64 = 0.1;

    /// Label confidence cutoff (same in every flow)
    pub const LABEL_CONFIDENCE: f64 = 0.3;
}

/// Lighting evaluation parameters
///
/// Lightness values here live on the 0-255 HLS scale produced by
/// [`hls_lightness`](crate::color::lightness::hls_lightness), not the
/// canonical 0-1 scale.
pub mod lighting {
    /// Lightness at which a room counts as fully lit
    pub const WANTED_LIGHTNESS: f64 = 80.0;

    /// Lightness at or above which a room is bright enough for plants
    pub const BRIGHT_LIGHTNESS: f64 = 60.0;

    /// Lightness at or below which a room is considered dark
    pub const DARK_LIGHTNESS: f64 = 30.0;
}

/// Score-level thresholds
pub mod scores {
    /// Total below which a dark room also warrants the lamp suggestion
    /// in flows that gate it on the overall result
    pub const LOW_TOTAL: f64 = 0.7;
}

/// Object categories with dedicated recommendation rules
pub mod items {
    pub const PLANT: &str = "Plant";
    pub const LIGHTING: &str = "Lighting";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_ranges() {
        assert!(thresholds::RELAXED_OBJECT_CONFIDENCE < thresholds::STRICT_OBJECT_CONFIDENCE);
        assert!(thresholds::LABEL_CONFIDENCE > 0.0 && thresholds::LABEL_CONFIDENCE < 1.0);
    }

    #[test]
    fn test_lighting_scale_ordering() {
        // Dark < bright < wanted, all on the 0-255 lightness scale
        assert!(lighting::DARK_LIGHTNESS < lighting::BRIGHT_LIGHTNESS);
        assert!(lighting::BRIGHT_LIGHTNESS < lighting::WANTED_LIGHTNESS);
        assert!(lighting::WANTED_LIGHTNESS < 255.0);
    }

    #[test]
    fn test_low_total_is_a_valid_score() {
        assert!(scores::LOW_TOTAL > 0.0 && scores::LOW_TOTAL < 1.0);
    }
}
