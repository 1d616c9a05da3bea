//! Reference color catalog
//!
//! A fixed table of named wall colors, each tagged with the room types it
//! suits. The catalog is constructed once at startup (from the embedded
//! default table or a JSON file), validated eagerly, and read-only
//! afterwards; lookups are linear scans over a few tens of entries.

use palette::Srgb;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::color::{encode_hex, parse_hex};
use crate::error::{AnalysisError, Result};

/// A named reference color and the room types it suits
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceColor {
    pub name: String,
    /// Six hex digits, optionally `#`-prefixed in input data
    pub hex_color: String,
    pub room_types: Vec<String>,
}

/// One catalog slot: the reference data plus its eagerly decoded color
#[derive(Debug, Clone)]
pub struct CatalogEntry {
    reference: ReferenceColor,
    rgb: Srgb<u8>,
}

impl CatalogEntry {
    pub fn reference(&self) -> &ReferenceColor {
        &self.reference
    }

    pub fn rgb(&self) -> Srgb<u8> {
        self.rgb
    }
}

/// Immutable, validated catalog of reference colors
pub struct ColorCatalog {
    entries: Vec<CatalogEntry>,
}

/// Embedded default catalog: (name, rgb, suited room types)
const BUILTIN_COLORS: &[(&str, (u8, u8, u8), &[&str])] = &[
    ("Sage", (0x9c, 0xaf, 0x88), &["living room", "bedroom"]),
    ("Teal", (0x36, 0x75, 0x88), &["bedroom", "bathroom"]),
    ("Cream", (0xf5, 0xf0, 0xe1), &["living room", "kitchen"]),
    ("Terracotta", (0xc8, 0x75, 0x5a), &["living room", "kitchen"]),
    ("Slate Blue", (0x6a, 0x7b, 0xa2), &["office", "bedroom"]),
    ("Warm White", (0xf8, 0xf4, 0xe3), &["kitchen", "bathroom", "living room"]),
    ("Blush Pink", (0xe8, 0xb4, 0xb8), &["bedroom"]),
    ("Forest Green", (0x3d, 0x5a, 0x45), &["office", "living room"]),
    ("Charcoal", (0x36, 0x45, 0x4f), &["office"]),
    ("Sunflower", (0xe3, 0xa8, 0x57), &["kitchen", "living room"]),
    ("Lavender", (0xb9, 0xa7, 0xd0), &["bedroom", "bathroom"]),
];

impl ColorCatalog {
    /// Build a catalog from reference colors, decoding every hex up front
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::CatalogError` for an empty list and
    /// `AnalysisError::InvalidHexColor` for an entry whose hex cannot be
    /// decoded. Both are configuration mistakes and surface at startup,
    /// never per request.
    pub fn new(colors: Vec<ReferenceColor>) -> Result<Self> {
        if colors.is_empty() {
            return Err(AnalysisError::CatalogError {
                reason: "catalog has no entries".to_string(),
            });
        }

        let mut entries = Vec::with_capacity(colors.len());
        for reference in colors {
            let rgb = parse_hex(&reference.hex_color)?;
            entries.push(CatalogEntry { reference, rgb });
        }
        Ok(Self { entries })
    }

    /// The embedded default catalog
    pub fn builtin() -> Self {
        let entries = BUILTIN_COLORS
            .iter()
            .map(|&(name, (r, g, b), room_types)| {
                let rgb = Srgb::new(r, g, b);
                CatalogEntry {
                    reference: ReferenceColor {
                        name: name.to_string(),
                        hex_color: encode_hex(rgb),
                        room_types: room_types.iter().map(|t| (*t).to_string()).collect(),
                    },
                    rgb,
                }
            })
            .collect();
        Self { entries }
    }

    /// Load a catalog from a JSON file holding an array of reference colors
    ///
    /// # Errors
    ///
    /// Returns a configuration error when the file cannot be read or parsed,
    /// plus the same validation errors as [`ColorCatalog::new`].
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| AnalysisError::config(format!("cannot read {}", path.display()), e))?;
        let colors: Vec<ReferenceColor> = serde_json::from_str(&content)
            .map_err(|e| AnalysisError::config(format!("cannot parse {}", path.display()), e))?;
        Self::new(colors)
    }

    /// Entries in catalog order; never empty
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Names of the entries suited to `room_type`, in catalog order
    pub fn names_for_room_type(&self, room_type: &str) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|e| e.reference.room_types.iter().any(|t| t == room_type))
            .map(|e| e.reference.name.as_str())
            .collect()
    }
}
