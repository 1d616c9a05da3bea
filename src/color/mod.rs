//! Color representation, matching and lightness evaluation
//!
//! Colors are carried as `palette::Srgb<u8>` throughout: the dominant color
//! handed in by the image-properties collaborator and the decoded catalog
//! references both live in 8-bit sRGB.

pub mod lightness;
pub mod matching;

pub use lightness::{hls_lightness, lighting_score};
pub use matching::{redmean_distance, ColorMatch, ColorMatcher};

use palette::Srgb;

use crate::error::{AnalysisError, Result};

/// Encode an sRGB color as a lowercase 6-digit hex string (no `#` prefix)
pub fn encode_hex(rgb: Srgb<u8>) -> String {
    format!("{:02x}{:02x}{:02x}", rgb.red, rgb.green, rgb.blue)
}

/// Parse a 6-digit hex color string, with or without a leading `#`
///
/// # Errors
///
/// Returns `AnalysisError::InvalidHexColor` for a string that is not exactly
/// six hex digits.
pub fn parse_hex(hex: &str) -> Result<Srgb<u8>> {
    let digits = hex.trim_start_matches('#');
    if digits.len() != 6 {
        return Err(AnalysisError::invalid_hex(
            hex,
            format!("expected 6 hex digits, got {}", digits.len()),
        ));
    }

    let r = u8::from_str_radix(&digits[0..2], 16)
        .map_err(|e| AnalysisError::invalid_hex(hex, format!("red channel: {}", e)))?;
    let g = u8::from_str_radix(&digits[2..4], 16)
        .map_err(|e| AnalysisError::invalid_hex(hex, format!("green channel: {}", e)))?;
    let b = u8::from_str_radix(&digits[4..6], 16)
        .map_err(|e| AnalysisError::invalid_hex(hex, format!("blue channel: {}", e)))?;

    Ok(Srgb::new(r, g, b))
}

/// Build an sRGB color from untrusted integer channels, clamping each to
/// [0, 255]
///
/// Collaborator payloads occasionally carry channel values just outside the
/// byte range; the policy here is to clamp rather than reject.
pub fn clamped_rgb(r: i64, g: i64, b: i64) -> Srgb<u8> {
    Srgb::new(
        r.clamp(0, 255) as u8,
        g.clamp(0, 255) as u8,
        b.clamp(0, 255) as u8,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_hex_lowercase() {
        assert_eq!(encode_hex(Srgb::new(255, 100, 255)), "ff64ff");
        assert_eq!(encode_hex(Srgb::new(0, 0, 0)), "000000");
    }

    #[test]
    fn test_parse_hex() {
        assert_eq!(parse_hex("FF64FF").unwrap(), Srgb::new(255, 100, 255));
        assert_eq!(parse_hex("#9caf88").unwrap(), Srgb::new(0x9c, 0xaf, 0x88));
    }

    #[test]
    fn test_parse_hex_invalid() {
        assert!(parse_hex("FF6").is_err()); // Too short
        assert!(parse_hex("GGGGGG").is_err()); // Invalid digits
        assert!(parse_hex("#FF64FF00").is_err()); // Too long
    }

    #[test]
    fn test_parse_encode_round_trip() {
        let rgb = parse_hex("c8755a").unwrap();
        assert_eq!(encode_hex(rgb), "c8755a");
    }

    #[test]
    fn test_clamped_rgb() {
        assert_eq!(clamped_rgb(-10, 300, 128), Srgb::new(0, 255, 128));
        assert_eq!(clamped_rgb(0, 255, 42), Srgb::new(0, 255, 42));
    }
}
