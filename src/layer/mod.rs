//! Layer infrastructure for icon rendering.
//!
//! The icon is painted by a fixed pipeline of layers. Each layer wraps an
//! optional configuration and an enabled flag, and paints onto the shared
//! canvas in [`RenderContext`] when it is active.
//!
//! # Architecture
//!
//! Each layer config implements [`LayerEffect`], which defines how the layer
//! paints itself. Geometry is computed once per size and handed to every
//! layer through the context, so layers never derive measurements on their
//! own.
//!
//! Compositing follows the painter's algorithm: later layers are drawn on top
//! of earlier ones with source-over blending, unless a layer documents
//! otherwise.

pub mod backdrop;
pub mod ball;
pub mod crosshair;
pub mod pattern;
pub mod raster;
pub mod shadow;

pub use backdrop::BackdropConfig;
pub use ball::BallConfig;
pub use crosshair::CrosshairConfig;
pub use pattern::PatternConfig;
pub use shadow::ShadowConfig;

use std::collections::HashMap;

use resvg::tiny_skia::{Pixmap, Point};
use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::geometry::IconGeometry;
use crate::icon::{IconImage, IconSize};

// ============================================================================
// Render Context
// ============================================================================

/// Context that flows through the rendering pipeline.
pub struct RenderContext {
    /// The canvas being painted, premultiplied RGBA, transparent at start.
    pub canvas: Pixmap,

    /// Measurements for the size being rendered.
    pub geometry: IconGeometry,
}

impl RenderContext {
    /// Allocates a transparent canvas for the given geometry.
    pub fn new(geometry: IconGeometry) -> Result<Self> {
        let canvas = Pixmap::new(geometry.edge, geometry.edge)
            .ok_or(Error::Canvas { size: geometry.edge })?;
        Ok(Self { canvas, geometry })
    }

    /// The icon center as a point.
    pub fn center(&self) -> Point {
        Point::from_xy(self.geometry.center, self.geometry.center)
    }

    /// Finishes rendering, converting the canvas to straight-alpha RGBA.
    pub fn into_image(self, size: IconSize) -> IconImage {
        IconImage::new(raster::pixmap_to_rgba_image(&self.canvas), size)
    }
}

// ============================================================================
// Layer Traits
// ============================================================================

/// Trait for layer configuration types.
///
/// Implementations must detect when a configuration meaningfully differs
/// from another, which drives cache invalidation.
pub trait LayerConfig: Clone {
    /// Returns true if this config differs from another in a way that
    /// would produce different rendering output.
    fn differs_from(&self, other: &Self) -> bool;
}

/// Trait for layer configurations that know how to paint themselves.
pub trait LayerEffect: LayerConfig {
    /// Short name used in log output.
    const NAME: &'static str;

    /// Paint onto `ctx.canvas`.
    fn paint(&self, ctx: &mut RenderContext) -> Result<()>;
}

// ============================================================================
// Generic Layer
// ============================================================================

/// A generic layer with configuration and version tracking.
///
/// The layer tracks:
/// - Optional configuration of type `C`
/// - Whether the layer is enabled (can be toggled without losing config)
/// - A version number that increments on any state change
pub struct Layer<C: LayerConfig> {
    config: Option<C>,
    enabled: bool,
    version: u64,
}

impl<C: LayerConfig> Default for Layer<C> {
    fn default() -> Self {
        Self {
            config: None,
            enabled: true,
            version: 0,
        }
    }
}

impl<C: LayerConfig> Layer<C> {
    /// Returns the current configuration, if any.
    pub fn config(&self) -> Option<&C> {
        self.config.as_ref()
    }

    /// Returns true if this layer is active (has config AND is enabled).
    pub fn is_active(&self) -> bool {
        self.enabled && self.config.is_some()
    }

    /// Returns true if the layer has a configuration set.
    pub fn has_config(&self) -> bool {
        self.config.is_some()
    }

    /// Returns whether the layer is enabled.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Sets whether the layer is enabled.
    ///
    /// Returns true if the enabled state changed.
    pub fn set_enabled(&mut self, enabled: bool) -> bool {
        if self.enabled != enabled {
            self.enabled = enabled;
            self.version = self.version.wrapping_add(1);
            true
        } else {
            false
        }
    }

    /// Returns the current version number.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Sets the configuration. Returns true if it changed.
    pub fn set_config(&mut self, config: Option<C>) -> bool {
        let differs = match (&self.config, &config) {
            (None, None) => false,
            (Some(_), None) | (None, Some(_)) => true,
            (Some(old), Some(new)) => old.differs_from(new),
        };

        if differs {
            self.config = config;
            self.version = self.version.wrapping_add(1);
            true
        } else {
            false
        }
    }
}

impl<C: LayerEffect> Layer<C> {
    /// Paints this layer if it is active; otherwise the canvas is untouched.
    pub fn apply(&self, ctx: &mut RenderContext) -> Result<()> {
        match self.config() {
            Some(config) if self.enabled => {
                trace!(layer = C::NAME, edge = ctx.geometry.edge, "painting layer");
                config.paint(ctx)
            }
            _ => Ok(()),
        }
    }
}

// ============================================================================
// Composite Layer
// ============================================================================

/// A cache-only layer for final rendered icons.
///
/// Entries remember the combined layer version they were rendered with and
/// are ignored once any layer has changed since.
#[derive(Default)]
pub struct CompositeLayer {
    cache: HashMap<IconSize, (IconImage, u64)>,
}

impl CompositeLayer {
    /// Gets a cached image if it was rendered with the given layer version.
    pub fn get_cached(&self, size: IconSize, version: u64) -> Option<&IconImage> {
        self.cache
            .get(&size)
            .and_then(|(img, stored)| (*stored == version).then_some(img))
    }

    /// Stores an image with the layer version it was rendered with.
    pub fn store(&mut self, image: IconImage, version: u64) {
        self.cache.insert(image.size, (image, version));
    }

    /// Drops every cached image.
    pub fn invalidate(&mut self) {
        self.cache.clear();
    }

    /// Returns the number of cached images.
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }
}

// ============================================================================
// Layer Pipeline
// ============================================================================

/// The layer pipeline, in painting order.
///
/// ```text
/// transparent canvas
///   -> backdrop   radial accent falloff (overwrites)
///   -> shadow     blurred offset disc, pasted through its own alpha
///   -> ball       solid disc
///   -> pattern    eight seam arcs
///   -> crosshair  four glowing segments
///   -> composite  cache of finished icons
/// ```
#[derive(Default)]
pub struct LayerPipeline {
    pub backdrop: Layer<BackdropConfig>,
    pub shadow: Layer<ShadowConfig>,
    pub ball: Layer<BallConfig>,
    pub pattern: Layer<PatternConfig>,
    pub crosshair: Layer<CrosshairConfig>,

    /// Composite cache (depends on all layers).
    pub composite: CompositeLayer,
}

impl LayerPipeline {
    /// Combined version of every layer. Versions only grow, so any change to
    /// any layer changes the sum.
    fn layers_version(&self) -> u64 {
        [
            self.backdrop.version(),
            self.shadow.version(),
            self.ball.version(),
            self.pattern.version(),
            self.crosshair.version(),
        ]
        .iter()
        .fold(0u64, |acc, v| acc.wrapping_add(*v))
    }

    /// Invalidates all caches.
    pub fn invalidate_all(&mut self) {
        self.composite.invalidate();
    }

    /// Renders an icon through the full layer pipeline.
    ///
    /// This is the main entry point for rendering. It:
    /// 1. Checks the composite cache first
    /// 2. Allocates a transparent canvas sized for `size`
    /// 3. Applies each layer in order
    /// 4. Caches and returns the final result
    pub fn render(&mut self, size: IconSize) -> Result<IconImage> {
        let version = self.layers_version();
        if let Some(cached) = self.composite.get_cached(size, version) {
            debug!(%size, "using cached icon");
            return Ok(cached.clone());
        }

        let image = self.render_uncached(size)?;
        self.composite.store(image.clone(), version);
        Ok(image)
    }

    /// Renders an icon without reading or filling the composite cache.
    ///
    /// The returned image is the only copy of the pixels, so dropping it
    /// releases everything the render allocated.
    pub fn render_uncached(&self, size: IconSize) -> Result<IconImage> {
        let mut ctx = RenderContext::new(IconGeometry::new(size))?;
        self.backdrop.apply(&mut ctx)?;
        self.shadow.apply(&mut ctx)?;
        self.ball.apply(&mut ctx)?;
        self.pattern.apply(&mut ctx)?;
        self.crosshair.apply(&mut ctx)?;
        Ok(ctx.into_image(size))
    }
}
