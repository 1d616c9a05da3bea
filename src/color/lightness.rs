//! HLS lightness on the 0-255 scale
//!
//! Lightness is computed directly from raw 0-255 channel values, so the
//! result lands on a 0-255 scale instead of the canonical 0-1 HLS scale.
//! Every lightness threshold in this crate (wanted 80, bright 60, dark 30)
//! is calibrated against that scale; normalizing the channels first would
//! silently rescale the whole scoring model.
//!
//! Algorithm tag: `algo-hls-lighting-score`

use palette::Srgb;

/// HLS lightness of a color, on the 0-255 scale
///
/// `(max + min) / 2` over the raw channel values.
pub fn hls_lightness(rgb: Srgb<u8>) -> f64 {
    let max = rgb.red.max(rgb.green).max(rgb.blue);
    let min = rgb.red.min(rgb.green).min(rgb.blue);
    f64::from(u16::from(max) + u16::from(min)) / 2.0
}

/// Normalize a lightness value into a [0, 1] score
///
/// Saturates at 1 once `lightness` reaches `wanted`; brighter rooms never
/// score above 1.
pub fn lighting_score(lightness: f64, wanted: f64) -> f64 {
    (lightness / wanted).clamp(0.0, 1.0)
}
