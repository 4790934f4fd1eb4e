//! Ball layer: the solid disc at the center of the icon.

use image::Rgba;
use resvg::tiny_skia::BlendMode;

use super::raster::{fill_circle, solid_paint};
use super::{LayerConfig, LayerEffect, RenderContext};
use crate::error::Result;

#[derive(Debug, Clone, PartialEq)]
pub struct BallConfig {
    pub color: Rgba<u8>,
}

impl BallConfig {
    pub fn new(color: Rgba<u8>) -> Self {
        Self { color }
    }
}

impl Default for BallConfig {
    fn default() -> Self {
        Self::new(Rgba([255, 255, 255, 255]))
    }
}

impl LayerConfig for BallConfig {
    fn differs_from(&self, other: &Self) -> bool {
        self.color != other.color
    }
}

impl LayerEffect for BallConfig {
    const NAME: &'static str = "ball";

    fn paint(&self, ctx: &mut RenderContext) -> Result<()> {
        let center = ctx.center();
        let paint = solid_paint(self.color, BlendMode::SourceOver);
        fill_circle(&mut ctx.canvas, center, ctx.geometry.ball_radius, &paint);
        Ok(())
    }
}
