//! Radial backdrop layer.

use image::Rgba;
use resvg::tiny_skia::BlendMode;

use super::raster::{fill_circle, solid_paint};
use super::{LayerConfig, LayerEffect, RenderContext};
use crate::error::Result;

/// Configuration for the radial backdrop.
///
/// The backdrop is a stack of concentric circles in the accent color, from
/// `1.2 x edge` in diameter down to a point. Each circle is drawn with
/// [`BlendMode::Source`], so it replaces the fainter circle beneath it and the
/// alpha falls off purely through drawing order. Only the RGB part of
/// `color` is used; alpha comes from each ring.
#[derive(Debug, Clone, PartialEq)]
pub struct BackdropConfig {
    pub color: Rgba<u8>,
}

impl BackdropConfig {
    pub fn new(color: Rgba<u8>) -> Self {
        Self { color }
    }
}

impl Default for BackdropConfig {
    fn default() -> Self {
        Self::new(Rgba([59, 130, 246, 255]))
    }
}

impl LayerConfig for BackdropConfig {
    fn differs_from(&self, other: &Self) -> bool {
        self.color.0[..3] != other.color.0[..3]
    }
}

impl LayerEffect for BackdropConfig {
    const NAME: &'static str = "backdrop";

    fn paint(&self, ctx: &mut RenderContext) -> Result<()> {
        let center = ctx.center();
        let [r, g, b, _] = self.color.0;
        for ring in ctx.geometry.backdrop_rings() {
            let paint = solid_paint(Rgba([r, g, b, ring.alpha]), BlendMode::Source);
            fill_circle(&mut ctx.canvas, center, ring.diameter as f32 / 2.0, &paint);
        }
        Ok(())
    }
}
