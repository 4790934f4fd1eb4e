//! Crosshair layer: four glowing segments pointing at the ball.

use image::Rgba;
use resvg::tiny_skia::{BlendMode, Pixmap};

use super::raster::{solid_paint, stroke_segment};
use super::{LayerConfig, LayerEffect, RenderContext};
use crate::error::Result;
use crate::geometry::Segment;

/// Configuration for the crosshair segments.
///
/// Each segment is drawn as three translucent glow strokes, widest first,
/// followed by a solid core stroke.
#[derive(Debug, Clone, PartialEq)]
pub struct CrosshairConfig {
    /// Core stroke color.
    pub color: Rgba<u8>,

    /// Alpha of each glow stroke, drawn in the core color.
    pub glow_alpha: u8,
}

impl CrosshairConfig {
    pub fn new(color: Rgba<u8>, glow_alpha: u8) -> Self {
        Self { color, glow_alpha }
    }

    fn glow_color(&self) -> Rgba<u8> {
        let [r, g, b, _] = self.color.0;
        Rgba([r, g, b, self.glow_alpha])
    }
}

impl Default for CrosshairConfig {
    fn default() -> Self {
        Self::new(Rgba([255, 255, 255, 255]), 100)
    }
}

impl LayerConfig for CrosshairConfig {
    fn differs_from(&self, other: &Self) -> bool {
        self.color != other.color || self.glow_alpha != other.glow_alpha
    }
}

impl LayerEffect for CrosshairConfig {
    const NAME: &'static str = "crosshair";

    fn paint(&self, ctx: &mut RenderContext) -> Result<()> {
        let glow_widths = ctx.geometry.glow_widths();
        let core_width = ctx.geometry.line_width;
        for segment in ctx.geometry.crosshair_segments() {
            draw_glowing_line(
                &mut ctx.canvas,
                segment,
                &glow_widths,
                core_width,
                self.glow_color(),
                self.color,
            )?;
        }
        Ok(())
    }
}

/// Strokes `segment` once per glow width, then once with the core width.
pub fn draw_glowing_line(
    canvas: &mut Pixmap,
    segment: Segment,
    glow_widths: &[u32],
    core_width: u32,
    glow: Rgba<u8>,
    core: Rgba<u8>,
) -> Result<()> {
    let glow_paint = solid_paint(glow, BlendMode::SourceOver);
    for &width in glow_widths {
        stroke_segment(canvas, segment, width as f32, &glow_paint)?;
    }
    stroke_segment(canvas, segment, core_width as f32, &solid_paint(core, BlendMode::SourceOver))
}
