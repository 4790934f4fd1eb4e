//! golfball-icons: renders the golf-ball app icon as PNG files.
//!
//! The icon is painted by a fixed pipeline of layers onto a transparent
//! square canvas: a radial backdrop, a blurred drop shadow, the ball, its
//! seam arcs and a glowing crosshair. Every measurement scales with the edge
//! length, so one pipeline produces every icon size a web app manifest needs.
//!
//! # Example
//!
//! ```
//! use golfball_icons::IconGenerator;
//!
//! let mut generator = IconGenerator::new();
//!
//! // Layers can be toggled without losing their configuration
//! generator.pipeline.pattern.set_enabled(false);
//!
//! let icon = generator.render(72).unwrap();
//! assert_eq!(icon.dimensions(), (72, 72));
//! assert_eq!(icon.file_name(), "icon-72x72.png");
//! ```
//!
//! # Serializable Profiles
//!
//! Colors and the size list can be loaded from JSON with [`IconProfile`]
//! and the [`Configurable`] trait:
//!
//! ```
//! use golfball_icons::{Configurable, IconGenerator, IconProfile};
//!
//! let profile = IconProfile::from_json(r##"{
//!     "sizes": [192],
//!     "backdrop": { "color": "#10B981" }
//! }"##).unwrap();
//!
//! let mut generator = IconGenerator::new();
//! generator.apply_profile(&profile);
//! assert_eq!(generator.sizes(), [192]);
//!
//! let exported = generator.export_profile();
//! assert_eq!(exported, profile);
//! ```

mod error;
mod generator;
mod geometry;
mod icon;
mod layer;
mod profile;

pub use error::{Error, Result};
pub use generator::{Configurable, IconGenerator};
pub use geometry::{BackdropRing, IconGeometry, PatternArc, Segment};
pub use icon::{DEFAULT_SIZES, IconImage, IconSet, IconSize};
pub use layer::{
    BackdropConfig, BallConfig, CompositeLayer, CrosshairConfig, Layer, LayerConfig,
    LayerEffect, LayerPipeline, PatternConfig, RenderContext, ShadowConfig,
};
pub use profile::{
    BackdropSettings, BallSettings, CrosshairSettings, HexColor, IconProfile, PatternSettings,
    ShadowSettings,
};
