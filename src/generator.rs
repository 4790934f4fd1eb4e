//! Icon generation: drives the layer pipeline over a list of sizes.

use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::Result;
use crate::icon::{IconImage, IconSet, IconSize};
use crate::layer::{
    BackdropConfig, BallConfig, CrosshairConfig, LayerPipeline, PatternConfig, ShadowConfig,
};
use crate::profile::{
    BackdropSettings, BallSettings, CrosshairSettings, HexColor, IconProfile, PatternSettings,
    ShadowSettings,
};

// ============================================================================
// Configurable Trait
// ============================================================================

/// Trait for types that can be configured from an [`IconProfile`].
pub trait Configurable {
    /// Applies a profile's settings to this instance.
    fn apply_profile(&mut self, profile: &IconProfile);

    /// Exports the current settings as a profile.
    fn export_profile(&self) -> IconProfile;
}

// ============================================================================
// IconGenerator
// ============================================================================

/// Renders icons and writes them to disk.
///
/// `IconGenerator` holds the list of sizes to produce and the layer pipeline.
/// Access layers directly through the [`pipeline`](Self::pipeline) field to
/// restyle them.
///
/// # Layer Pipeline
///
/// 1. **Backdrop** (`pipeline.backdrop`) - Radial accent-colored glow
/// 2. **Shadow** (`pipeline.shadow`) - Blurred disc under the ball
/// 3. **Ball** (`pipeline.ball`) - Solid disc at the center
/// 4. **Pattern** (`pipeline.pattern`) - Seam arcs on the ball
/// 5. **Crosshair** (`pipeline.crosshair`) - Four glowing segments
///
/// # Example
///
/// ```no_run
/// use golfball_icons::IconGenerator;
/// use std::path::Path;
///
/// let mut generator = IconGenerator::new();
/// generator.pipeline.shadow.set_enabled(false);
///
/// let written = generator.generate(Path::new("icons"), &mut std::io::stdout())?;
/// assert_eq!(written.len(), 8);
/// # Ok::<(), golfball_icons::Error>(())
/// ```
pub struct IconGenerator {
    /// Edge lengths to generate, in output order.
    sizes: Vec<u32>,

    /// The layer pipeline. Access layers directly to configure them.
    pub pipeline: LayerPipeline,
}

impl Default for IconGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl IconGenerator {
    /// Creates a generator for the golf-ball icon at the default sizes.
    pub fn new() -> Self {
        Self::from_profile(&IconProfile::default())
    }

    /// Creates a generator configured from a profile.
    pub fn from_profile(profile: &IconProfile) -> Self {
        let mut generator = Self {
            sizes: Vec::new(),
            pipeline: LayerPipeline::default(),
        };
        generator.apply_profile(profile);
        generator
    }

    /// Returns the configured sizes.
    pub fn sizes(&self) -> &[u32] {
        &self.sizes
    }

    /// Replaces the configured sizes.
    pub fn set_sizes(&mut self, sizes: impl Into<Vec<u32>>) {
        self.sizes = sizes.into();
    }

    /// Renders a single icon at the given edge length.
    pub fn render(&mut self, edge: u32) -> Result<IconImage> {
        let size = IconSize::new(edge)?;
        self.pipeline.render(size)
    }

    /// Renders every configured size, in order.
    pub fn render_all(&mut self) -> Result<IconSet> {
        let sizes = self.validated_sizes()?;
        let mut set = IconSet::new();
        for size in sizes {
            set.add_image(self.pipeline.render(size)?);
        }
        Ok(set)
    }

    /// Renders one icon and writes it as `dir/icon-{edge}x{edge}.png`.
    ///
    /// The icon bypasses the cache and is dropped once written.
    pub fn write_icon(&self, edge: u32, dir: &Path) -> Result<PathBuf> {
        let size = IconSize::new(edge)?;
        let path = self.pipeline.render_uncached(size)?.save_png(dir)?;
        debug!(path = %path.display(), "wrote icon");
        Ok(path)
    }

    /// Writes every configured size into `dir`, reporting each file on `out`.
    ///
    /// Sizes are validated before anything is written. The directory must
    /// already exist. The first write failure stops the run; icons written
    /// before it stay on disk. No rendered icon outlives its file write.
    pub fn generate(&self, dir: &Path, out: &mut impl Write) -> Result<Vec<PathBuf>> {
        let sizes = self.validated_sizes()?;
        info!(count = sizes.len(), dir = %dir.display(), "generating icons");

        let mut written = Vec::with_capacity(sizes.len());
        for size in sizes {
            // The canvas is released at the end of this statement
            let path = self.pipeline.render_uncached(size)?.save_png(dir)?;
            writeln!(out, "Generated {}", size.file_name())?;
            debug!(path = %path.display(), "wrote icon");
            written.push(path);
        }
        Ok(written)
    }

    /// Clears the rendered-icon cache. Useful for freeing memory.
    pub fn clear_cache(&mut self) {
        self.pipeline.invalidate_all();
    }

    fn validated_sizes(&self) -> Result<Vec<IconSize>> {
        self.sizes.iter().map(|&edge| IconSize::new(edge)).collect()
    }
}

impl Configurable for IconGenerator {
    /// Applies a profile's settings to this generator.
    ///
    /// This sets the size list and the configuration and enabled state of
    /// each layer. A layer missing from the profile loses its configuration.
    fn apply_profile(&mut self, profile: &IconProfile) {
        self.sizes = profile.sizes.clone();

        // Backdrop
        if let Some(ref settings) = profile.backdrop {
            self.pipeline
                .backdrop
                .set_config(Some(BackdropConfig::new(settings.color.with_alpha(255))));
            self.pipeline.backdrop.set_enabled(settings.enabled);
        } else {
            self.pipeline.backdrop.set_config(None);
        }

        // Shadow
        if let Some(ref settings) = profile.shadow {
            self.pipeline.shadow.set_config(Some(ShadowConfig::new(
                settings.color.with_alpha(settings.opacity),
                settings.offset,
            )));
            self.pipeline.shadow.set_enabled(settings.enabled);
        } else {
            self.pipeline.shadow.set_config(None);
        }

        // Ball
        if let Some(ref settings) = profile.ball {
            self.pipeline
                .ball
                .set_config(Some(BallConfig::new(settings.color.with_alpha(255))));
            self.pipeline.ball.set_enabled(settings.enabled);
        } else {
            self.pipeline.ball.set_config(None);
        }

        // Pattern
        if let Some(ref settings) = profile.pattern {
            self.pipeline
                .pattern
                .set_config(Some(PatternConfig::new(settings.color.with_alpha(255))));
            self.pipeline.pattern.set_enabled(settings.enabled);
        } else {
            self.pipeline.pattern.set_config(None);
        }

        // Crosshair
        if let Some(ref settings) = profile.crosshair {
            self.pipeline.crosshair.set_config(Some(CrosshairConfig::new(
                settings.color.with_alpha(255),
                settings.glow_alpha,
            )));
            self.pipeline.crosshair.set_enabled(settings.enabled);
        } else {
            self.pipeline.crosshair.set_config(None);
        }
    }

    /// Exports the current settings as a profile.
    fn export_profile(&self) -> IconProfile {
        let backdrop = self.pipeline.backdrop.config().map(|c| BackdropSettings {
            color: HexColor::from_rgba(c.color),
            enabled: self.pipeline.backdrop.is_enabled(),
        });

        let shadow = self.pipeline.shadow.config().map(|c| ShadowSettings {
            color: HexColor::from_rgba(c.color),
            opacity: c.color[3],
            offset: c.offset,
            enabled: self.pipeline.shadow.is_enabled(),
        });

        let ball = self.pipeline.ball.config().map(|c| BallSettings {
            color: HexColor::from_rgba(c.color),
            enabled: self.pipeline.ball.is_enabled(),
        });

        let pattern = self.pipeline.pattern.config().map(|c| PatternSettings {
            color: HexColor::from_rgba(c.color),
            enabled: self.pipeline.pattern.is_enabled(),
        });

        let crosshair = self.pipeline.crosshair.config().map(|c| CrosshairSettings {
            color: HexColor::from_rgba(c.color),
            glow_alpha: c.glow_alpha,
            enabled: self.pipeline.crosshair.is_enabled(),
        });

        IconProfile {
            sizes: self.sizes.clone(),
            backdrop,
            shadow,
            ball,
            pattern,
            crosshair,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
