//! Drop shadow layer.

use image::Rgba;
use resvg::tiny_skia::{BlendMode, Pixmap, Point};

use super::raster::{blur, fill_circle, paste_with_mask, solid_paint};
use super::{LayerConfig, LayerEffect, RenderContext};
use crate::error::{Error, Result};

/// Configuration for the drop shadow under the ball.
///
/// The shadow disc is drawn on a separate canvas, offset down and right,
/// blurred with a sigma of `edge / 30`, then pasted onto the icon using its
/// own alpha as the mask.
#[derive(Debug, Clone, PartialEq)]
pub struct ShadowConfig {
    /// Shadow color; the alpha channel is the shadow opacity.
    pub color: Rgba<u8>,

    /// Offset of the shadow disc in pixels, applied to both axes.
    pub offset: f32,
}

impl ShadowConfig {
    pub fn new(color: Rgba<u8>, offset: f32) -> Self {
        Self { color, offset }
    }
}

impl Default for ShadowConfig {
    fn default() -> Self {
        Self::new(Rgba([0, 0, 0, 50]), 2.0)
    }
}

impl LayerConfig for ShadowConfig {
    fn differs_from(&self, other: &Self) -> bool {
        self.color != other.color || (self.offset - other.offset).abs() > 0.001
    }
}

impl LayerEffect for ShadowConfig {
    const NAME: &'static str = "shadow";

    fn paint(&self, ctx: &mut RenderContext) -> Result<()> {
        let geometry = ctx.geometry;
        let blurred = {
            let mut aux = Pixmap::new(geometry.edge, geometry.edge)
                .ok_or(Error::Canvas { size: geometry.edge })?;
            let center = Point::from_xy(geometry.center + self.offset, geometry.center + self.offset);
            let paint = solid_paint(self.color, BlendMode::SourceOver);
            fill_circle(&mut aux, center, geometry.ball_radius, &paint);
            blur(&aux, geometry.blur_radius)
        };
        paste_with_mask(&mut ctx.canvas, &blurred);
        Ok(())
    }
}
