//! Rule-based room improvement advice
//!
//! Inspects the same intermediate signals the scoring engine computed and
//! appends zero or more advice strings. Rules are evaluated independently,
//! in fixed order; the text never feeds back into any score.

use crate::catalog::ColorCatalog;
use crate::config::ScoringConfig;
use crate::constants::{items, lighting, scores};

/// Advice for a bright room without a plant
const PLANT_ADVICE: &str =
    "The room is bright enough for houseplants. Consider adding a plant to liven it up and improve the air quality.";

/// Advice for a dark room without dedicated lighting
const LAMP_ADVICE: &str = "The room looks dark. Consider adding a lamp to brighten it up.";

/// Fallback when no catalog color suits the room type
const REPAINT_GENERIC: &str =
    "Consider repainting the walls in a color that better suits the room.";

/// Signals the recommendation rules inspect
pub struct AdviceInputs<'a> {
    /// Deduplicated detected object names
    pub objects: &'a [String],

    /// Raw HLS lightness on the 0-255 scale
    pub lightness: f64,

    /// Whether the matched color's room types include the target room type
    pub color_suits_room: bool,

    /// Weighted total score
    pub total: f64,

    /// Declared target room type
    pub room_type: &'a str,
}

/// Evaluate every rule and collect the advice that applies
pub fn advise(
    inputs: &AdviceInputs<'_>,
    catalog: &ColorCatalog,
    config: &ScoringConfig,
) -> Vec<String> {
    let mut recommendations = Vec::new();

    // Rule 1: bright room, no plant
    if inputs.lightness >= lighting::BRIGHT_LIGHTNESS && !contains(inputs.objects, items::PLANT) {
        recommendations.push(PLANT_ADVICE.to_string());
    }

    // Rule 2: dark room, no lighting; one flow also requires a low total
    let lamp_gate_open = !config.lamp_requires_low_total || inputs.total < scores::LOW_TOTAL;
    if inputs.lightness <= lighting::DARK_LIGHTNESS
        && !contains(inputs.objects, items::LIGHTING)
        && lamp_gate_open
    {
        recommendations.push(LAMP_ADVICE.to_string());
    }

    // Rule 3: color mismatch, suggest the catalog colors that would suit
    if !inputs.color_suits_room {
        let better_colors = catalog.names_for_room_type(inputs.room_type);
        recommendations.push(repaint_advice(&better_colors));
    }

    recommendations
}

fn contains(objects: &[String], name: &str) -> bool {
    objects.iter().any(|o| o == name)
}

fn repaint_advice(better_colors: &[&str]) -> String {
    match better_colors {
        [] => REPAINT_GENERIC.to_string(),
        [only] => format!("Consider repainting the walls to {}", only),
        [init @ .., last] => format!(
            "Consider repainting the walls to be {}, or {}",
            init.join(", "),
            last
        ),
    }
}
