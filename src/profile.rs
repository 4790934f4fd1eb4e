//! Serializable icon profile.
//!
//! An [`IconProfile`] captures the sizes to generate and the style of every
//! layer in a JSON-friendly format. The default profile is the golf-ball
//! icon; any field left out of a JSON document falls back to it.
//!
//! # Example
//!
//! ```
//! use golfball_icons::{IconProfile, HexColor};
//!
//! let mut profile = IconProfile::from_json(r#"{ "sizes": [192, 512] }"#).unwrap();
//! assert_eq!(profile.sizes, [192, 512]);
//!
//! // Drop the crosshair and tint the ball
//! profile.crosshair = None;
//! profile.ball.as_mut().unwrap().color = HexColor::new(0xFF, 0xF7, 0xE0);
//!
//! let json = profile.to_json().unwrap();
//! let restored = IconProfile::from_json(&json).unwrap();
//! assert!(restored.crosshair.is_none());
//! ```

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use image::Rgba;
use palette::Srgb;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::icon::DEFAULT_SIZES;

// ============================================================================
// HexColor
// ============================================================================

/// An opaque RGB color written as `#RRGGBB` in JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor(Srgb<u8>);

impl HexColor {
    pub fn new(red: u8, green: u8, blue: u8) -> Self {
        Self(Srgb::new(red, green, blue))
    }

    /// Combines the color with an alpha value.
    pub fn with_alpha(self, alpha: u8) -> Rgba<u8> {
        Rgba([self.0.red, self.0.green, self.0.blue, alpha])
    }

    /// Drops the alpha channel of a layer color.
    pub fn from_rgba(color: Rgba<u8>) -> Self {
        Self::new(color[0], color[1], color[2])
    }
}

impl FromStr for HexColor {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Srgb::<u8>::from_str(s.trim())
            .map(Self)
            .map_err(|e| format!("invalid color {s:?}: {e}"))
    }
}

impl TryFrom<String> for HexColor {
    type Error = String;

    fn try_from(s: String) -> std::result::Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<HexColor> for String {
    fn from(color: HexColor) -> Self {
        color.to_string()
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.0.red, self.0.green, self.0.blue)
    }
}

#[cfg(feature = "jsonschema")]
impl schemars::JsonSchema for HexColor {
    fn schema_name() -> String {
        "HexColor".into()
    }

    fn json_schema(generator: &mut schemars::r#gen::SchemaGenerator) -> schemars::schema::Schema {
        String::json_schema(generator)
    }
}

// ============================================================================
// Layer Settings (Serializable)
// ============================================================================

/// Serializable settings for the radial backdrop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[serde(default, rename_all = "camelCase")]
pub struct BackdropSettings {
    /// Accent color; alpha comes from the radial falloff.
    pub color: HexColor,
    pub enabled: bool,
}

impl Default for BackdropSettings {
    fn default() -> Self {
        Self {
            color: HexColor::new(0x3B, 0x82, 0xF6),
            enabled: true,
        }
    }
}

/// Serializable settings for the drop shadow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[serde(default, rename_all = "camelCase")]
pub struct ShadowSettings {
    pub color: HexColor,
    /// Shadow alpha (0-255) before blurring.
    pub opacity: u8,
    /// Offset in pixels, applied to both axes.
    pub offset: f32,
    pub enabled: bool,
}

impl Default for ShadowSettings {
    fn default() -> Self {
        Self {
            color: HexColor::new(0, 0, 0),
            opacity: 50,
            offset: 2.0,
            enabled: true,
        }
    }
}

/// Serializable settings for the ball.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[serde(default, rename_all = "camelCase")]
pub struct BallSettings {
    pub color: HexColor,
    pub enabled: bool,
}

impl Default for BallSettings {
    fn default() -> Self {
        Self {
            color: HexColor::new(0xFF, 0xFF, 0xFF),
            enabled: true,
        }
    }
}

/// Serializable settings for the seam arcs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[serde(default, rename_all = "camelCase")]
pub struct PatternSettings {
    pub color: HexColor,
    pub enabled: bool,
}

impl Default for PatternSettings {
    fn default() -> Self {
        Self {
            color: HexColor::new(0xE5, 0xE7, 0xEB),
            enabled: true,
        }
    }
}

/// Serializable settings for the crosshair segments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[serde(default, rename_all = "camelCase")]
pub struct CrosshairSettings {
    pub color: HexColor,
    /// Alpha (0-255) of each of the three glow strokes.
    pub glow_alpha: u8,
    pub enabled: bool,
}

impl Default for CrosshairSettings {
    fn default() -> Self {
        Self {
            color: HexColor::new(0xFF, 0xFF, 0xFF),
            glow_alpha: 100,
            enabled: true,
        }
    }
}

// ============================================================================
// IconProfile
// ============================================================================

/// A serializable profile containing the size list and all layer settings.
///
/// A layer set to `null` has no configuration and is not drawn; a layer left
/// out of the document keeps its golf-ball default.
///
/// # JSON Format
///
/// ```json
/// {
///   "sizes": [72, 96, 128, 144, 152, 192, 384, 512],
///   "backdrop": { "color": "#3B82F6", "enabled": true },
///   "shadow": { "color": "#000000", "opacity": 50, "offset": 2.0, "enabled": true },
///   "ball": { "color": "#FFFFFF", "enabled": true },
///   "pattern": { "color": "#E5E7EB", "enabled": true },
///   "crosshair": { "color": "#FFFFFF", "glowAlpha": 100, "enabled": true }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[serde(default, rename_all = "camelCase")]
pub struct IconProfile {
    /// Edge lengths to generate, in output order.
    pub sizes: Vec<u32>,
    pub backdrop: Option<BackdropSettings>,
    pub shadow: Option<ShadowSettings>,
    pub ball: Option<BallSettings>,
    pub pattern: Option<PatternSettings>,
    pub crosshair: Option<CrosshairSettings>,
}

impl Default for IconProfile {
    fn default() -> Self {
        Self {
            sizes: DEFAULT_SIZES.to_vec(),
            backdrop: Some(BackdropSettings::default()),
            shadow: Some(ShadowSettings::default()),
            ball: Some(BallSettings::default()),
            pattern: Some(PatternSettings::default()),
            crosshair: Some(CrosshairSettings::default()),
        }
    }
}

impl IconProfile {
    /// Creates the golf-ball profile.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the size list.
    pub fn with_sizes(mut self, sizes: impl Into<Vec<u32>>) -> Self {
        self.sizes = sizes.into();
        self
    }

    /// Serializes the profile to a JSON string.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serializes the profile to a pretty-printed JSON string.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Deserializes a profile from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads a profile from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Returns the JSON schema of the profile format.
    #[cfg(feature = "jsonschema")]
    pub fn json_schema() -> schemars::schema::RootSchema {
        schemars::schema_for!(IconProfile)
    }
}

// ============================================================================
// Tests
// ============================================================================
