//! Nearest-reference-color matching
//!
//! Resolves a measured dominant color to the perceptually closest entry of
//! the reference catalog using a redmean-weighted RGB distance. The redmean
//! approximation weights the red and blue contributions by the average
//! redness of the pair, which tracks human perception far better than plain
//! Euclidean RGB distance at a fraction of the cost of a Lab conversion.
//!
//! Algorithm tag: `algo-redmean-nearest-color`

use palette::Srgb;
use serde::{Deserialize, Serialize};

use crate::catalog::ColorCatalog;
use crate::color::encode_hex;

/// Redmean-weighted distance between two sRGB colors
///
/// Integer arithmetic follows the reference formula exactly:
/// `rmean = (r1 + r2) / 2` with integer division, and the red/blue terms
/// shifted right by 8. Symmetry in the arguments is not part of the
/// contract; only the ranking of distances matters.
pub fn redmean_distance(a: Srgb<u8>, b: Srgb<u8>) -> f64 {
    let rmean = (i64::from(a.red) + i64::from(b.red)) / 2;
    let dr = i64::from(a.red) - i64::from(b.red);
    let dg = i64::from(a.green) - i64::from(b.green);
    let db = i64::from(a.blue) - i64::from(b.blue);

    let sum = (((512 + rmean) * dr * dr) >> 8) + 4 * dg * dg + (((767 - rmean) * db * db) >> 8);
    (sum as f64).sqrt()
}

/// Result of resolving a dominant color against the catalog
///
/// Carries the winning entry's name and room-type tags, but `hex_color`
/// holds the *measured* input color rather than the catalog reference, so
/// consumers recover the exact dominant color alongside the matched
/// category metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorMatch {
    pub name: String,
    pub hex_color: String,
    pub room_types: Vec<String>,
}

/// Catalog-backed nearest-color matcher
pub struct ColorMatcher<'a> {
    catalog: &'a ColorCatalog,
}

impl<'a> ColorMatcher<'a> {
    /// Create a matcher over a reference catalog
    pub fn new(catalog: &'a ColorCatalog) -> Self {
        Self { catalog }
    }

    /// Find the catalog entry closest to `rgb`
    ///
    /// Stable linear scan: ties are broken by catalog order, the first
    /// minimum wins. A constructed catalog is never empty, so a winner
    /// always exists.
    pub fn match_color(&self, rgb: Srgb<u8>) -> ColorMatch {
        // A constructed catalog always holds at least one entry
        let entries = self.catalog.entries();
        let mut best = &entries[0];
        let mut best_distance = redmean_distance(rgb, best.rgb());

        for entry in &entries[1..] {
            let distance = redmean_distance(rgb, entry.rgb());
            if distance < best_distance {
                best_distance = distance;
                best = entry;
            }
        }

        let winner = best.reference();
        log::debug!(
            "dominant color {} matched \"{}\" (distance {:.2})",
            encode_hex(rgb),
            winner.name,
            best_distance
        );

        ColorMatch {
            name: winner.name.clone(),
            hex_color: encode_hex(rgb),
            room_types: winner.room_types.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ReferenceColor;

    fn catalog(entries: &[(&str, &str, &[&str])]) -> ColorCatalog {
        ColorCatalog::new(
            entries
                .iter()
                .map(|(name, hex, rooms)| ReferenceColor {
                    name: (*name).to_string(),
                    hex_color: (*hex).to_string(),
                    room_types: rooms.iter().map(|r| (*r).to_string()).collect(),
                })
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn test_distance_zero_for_identical_colors() {
        let c = Srgb::new(140, 70, 200);
        assert_eq!(redmean_distance(c, c), 0.0);
    }

    #[test]
    fn test_distance_symmetry_not_relied_upon() {
        // The integer mean and shifts make symmetry an accident of the
        // formula, not a contract; callers must only rely on rankings.
        let a = Srgb::new(200, 10, 10);
        let b = Srgb::new(101, 10, 10);
        let ab = redmean_distance(a, b);
        let ba = redmean_distance(b, a);
        assert!((ab - ba).abs() < 2.0); // Same magnitude, equality not asserted
        // Rankings agree in both directions
        let far = Srgb::new(10, 200, 10);
        assert!(redmean_distance(a, far) > ab);
        assert!(redmean_distance(far, a) > ba);
    }

    #[test]
    fn test_exact_catalog_color_wins() {
        let cat = catalog(&[
            ("Teal", "367588", &["bathroom"]),
            ("Magenta Blush", "FF64FF", &["bedroom"]),
        ]);
        let matched = ColorMatcher::new(&cat).match_color(Srgb::new(255, 100, 255));
        assert_eq!(matched.name, "Magenta Blush");
        assert_eq!(matched.room_types, vec!["bedroom".to_string()]);
    }

    #[test]
    fn test_hex_overwritten_with_input_color() {
        let cat = catalog(&[("Magenta Blush", "FF64FF", &["bedroom"])]);
        let matched = ColorMatcher::new(&cat).match_color(Srgb::new(255, 100, 255));
        // Lowercase encoding of the measured color, not the catalog's "FF64FF"
        assert_eq!(matched.hex_color, "ff64ff");

        let off = ColorMatcher::new(&cat).match_color(Srgb::new(250, 99, 251));
        assert_eq!(off.hex_color, "fa63fb");
        assert_eq!(off.name, "Magenta Blush");
    }

    #[test]
    fn test_tie_broken_by_catalog_order() {
        // Two identical references: the first one listed must win
        let cat = catalog(&[
            ("First Gray", "808080", &["office"]),
            ("Second Gray", "808080", &["bedroom"]),
        ]);
        let matched = ColorMatcher::new(&cat).match_color(Srgb::new(128, 128, 128));
        assert_eq!(matched.name, "First Gray");
    }

    #[test]
    fn test_match_is_deterministic() {
        let cat = catalog(&[
            ("Sage", "9caf88", &["bedroom"]),
            ("Teal", "367588", &["bathroom"]),
            ("Cream", "f5f0e1", &["kitchen"]),
        ]);
        let matcher = ColorMatcher::new(&cat);
        let rgb = Srgb::new(120, 140, 130);
        let first = matcher.match_color(rgb);
        for _ in 0..10 {
            assert_eq!(matcher.match_color(rgb), first);
        }
    }

    #[test]
    fn test_nearest_by_perceptual_weighting() {
        let cat = catalog(&[
            ("Sage", "9caf88", &["bedroom"]),
            ("Charcoal", "36454f", &["office"]),
        ]);
        // A muted green sits much closer to sage than to charcoal
        let matched = ColorMatcher::new(&cat).match_color(Srgb::new(150, 170, 140));
        assert_eq!(matched.name, "Sage");
    }
}
