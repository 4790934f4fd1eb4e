//! Seam pattern layer: eight short arcs across the ball.

use image::Rgba;
use resvg::tiny_skia::BlendMode;

use super::raster::{solid_paint, stroke_arc};
use super::{LayerConfig, LayerEffect, RenderContext};
use crate::error::Result;

/// Configuration for the seam arcs.
///
/// Placement comes from [`IconGeometry::pattern_arcs`](crate::geometry::IconGeometry::pattern_arcs);
/// stroke width is `max(1, edge / 50)`.
#[derive(Debug, Clone, PartialEq)]
pub struct PatternConfig {
    pub color: Rgba<u8>,
}

impl PatternConfig {
    pub fn new(color: Rgba<u8>) -> Self {
        Self { color }
    }
}

impl Default for PatternConfig {
    fn default() -> Self {
        Self::new(Rgba([0xE5, 0xE7, 0xEB, 255]))
    }
}

impl LayerConfig for PatternConfig {
    fn differs_from(&self, other: &Self) -> bool {
        self.color != other.color
    }
}

impl LayerEffect for PatternConfig {
    const NAME: &'static str = "pattern";

    fn paint(&self, ctx: &mut RenderContext) -> Result<()> {
        let paint = solid_paint(self.color, BlendMode::SourceOver);
        let width = ctx.geometry.pattern_stroke as f32;
        for arc in ctx.geometry.pattern_arcs() {
            stroke_arc(
                &mut ctx.canvas,
                arc.center,
                arc.radius,
                arc.start_deg,
                arc.sweep_deg,
                width,
                &paint,
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::IconGeometry;
    use crate::icon::IconSize;

    #[test]
    fn arcs_stay_on_the_ball() {
        let mut ctx = RenderContext::new(IconGeometry::new(IconSize::new(192).unwrap())).unwrap();
        PatternConfig::default().paint(&mut ctx).unwrap();

        let g = ctx.geometry;
        let mut painted = 0;
        for y in 0..g.edge {
            for x in 0..g.edge {
                if ctx.canvas.pixel(x, y).unwrap().alpha() == 0 {
                    continue;
                }
                painted += 1;
                let dx = x as f32 + 0.5 - g.center;
                let dy = y as f32 + 0.5 - g.center;
                assert!((dx * dx + dy * dy).sqrt() <= g.ball_radius + 1.5);
            }
        }
        assert!(painted > 0);
        // The center of the ball is never crossed by a seam
        assert_eq!(ctx.canvas.pixel(96, 96).unwrap().alpha(), 0);
    }

    #[test]
    fn first_arc_starts_at_three_oclock() {
        let mut ctx = RenderContext::new(IconGeometry::new(IconSize::new(384).unwrap())).unwrap();
        PatternConfig::default().paint(&mut ctx).unwrap();

        let g = ctx.geometry;
        // Arc at 0 deg runs clockwise (downwards on screen) from the right
        let x = (g.center + g.pattern_radius() - g.pattern_stroke as f32 / 2.0) as u32;
        let below = (g.center + 4.0) as u32;
        assert!(ctx.canvas.pixel(x, below).unwrap().alpha() > 0);
    }
}
