//! Canvas helpers shared by the drawing layers.
//!
//! Drawing happens on a premultiplied `tiny_skia::Pixmap`; blurring and PNG
//! encoding happen on straight-alpha `image::RgbaImage` buffers. This module
//! owns the shapes, the paint setup and the conversions between the two.

use image::{Rgba, RgbaImage};
use resvg::tiny_skia::{
    BlendMode, ColorU8, FillRule, LineCap, Paint, Path, PathBuilder, Pixmap, Point, Stroke,
    Transform,
};

use crate::error::{Error, Result};
use crate::geometry::Segment;

// ============================================================================
// Paint
// ============================================================================

/// Builds an anti-aliased solid paint.
pub fn solid_paint(color: Rgba<u8>, blend_mode: BlendMode) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color_rgba8(color[0], color[1], color[2], color[3]);
    paint.anti_alias = true;
    paint.blend_mode = blend_mode;
    paint
}

// ============================================================================
// Shapes
// ============================================================================

/// Fills a circle. Circles with a non-positive radius draw nothing.
pub fn fill_circle(pixmap: &mut Pixmap, center: Point, radius: f32, paint: &Paint) {
    if radius <= 0.0 {
        return;
    }
    if let Some(path) = PathBuilder::from_circle(center.x, center.y, radius) {
        pixmap.fill_path(&path, paint, FillRule::Winding, Transform::identity(), None);
    }
}

/// Strokes a straight segment with butt caps.
pub fn stroke_segment(pixmap: &mut Pixmap, segment: Segment, width: f32, paint: &Paint) -> Result<()> {
    let mut pb = PathBuilder::new();
    pb.move_to(segment.start.x, segment.start.y);
    pb.line_to(segment.end.x, segment.end.y);
    let path = pb.finish().ok_or(Error::Path("line"))?;
    pixmap.stroke_path(&path, paint, &butt_stroke(width), Transform::identity(), None);
    Ok(())
}

/// Strokes a circular arc so that the stroke stays inside `radius`.
pub fn stroke_arc(
    pixmap: &mut Pixmap,
    center: Point,
    radius: f32,
    start_deg: f32,
    sweep_deg: f32,
    width: f32,
    paint: &Paint,
) -> Result<()> {
    let path =
        arc_path(center, radius - width / 2.0, start_deg, sweep_deg).ok_or(Error::Path("arc"))?;
    pixmap.stroke_path(&path, paint, &butt_stroke(width), Transform::identity(), None);
    Ok(())
}

fn butt_stroke(width: f32) -> Stroke {
    Stroke {
        width,
        line_cap: LineCap::Butt,
        ..Stroke::default()
    }
}

/// Builds a circular arc out of cubic segments of at most 90 degrees.
///
/// Angles are in degrees and grow clockwise on screen (y points down).
pub fn arc_path(center: Point, radius: f32, start_deg: f32, sweep_deg: f32) -> Option<Path> {
    if radius <= 0.0 || sweep_deg == 0.0 {
        return None;
    }

    let segments = (sweep_deg.abs() / 90.0).ceil().max(1.0) as usize;
    let step = sweep_deg.to_radians() / segments as f32;
    let k = 4.0 / 3.0 * (step / 4.0).tan() * radius;
    let at = |theta: f32| {
        (
            center.x + radius * theta.cos(),
            center.y + radius * theta.sin(),
        )
    };

    let mut theta = start_deg.to_radians();
    let (mut x0, mut y0) = at(theta);
    let mut pb = PathBuilder::new();
    pb.move_to(x0, y0);
    for _ in 0..segments {
        let next = theta + step;
        let (x3, y3) = at(next);
        pb.cubic_to(
            x0 - k * theta.sin(),
            y0 + k * theta.cos(),
            x3 + k * next.sin(),
            y3 - k * next.cos(),
            x3,
            y3,
        );
        theta = next;
        (x0, y0) = (x3, y3);
    }
    pb.finish()
}

// ============================================================================
// Conversions
// ============================================================================

/// Converts a tiny_skia Pixmap to an image::RgbaImage.
pub fn pixmap_to_rgba_image(pixmap: &Pixmap) -> RgbaImage {
    let width = pixmap.width();
    let pixels = pixmap.pixels();
    RgbaImage::from_fn(width, pixmap.height(), |x, y| {
        let pixel = pixels[(y * width + x) as usize].demultiply();
        Rgba([pixel.red(), pixel.green(), pixel.blue(), pixel.alpha()])
    })
}

/// Blurs a pixmap with a gaussian of the given sigma.
///
/// A radius of zero leaves the image untouched.
pub fn blur(pixmap: &Pixmap, radius: u32) -> RgbaImage {
    let img = pixmap_to_rgba_image(pixmap);
    if radius == 0 {
        return img;
    }
    image::imageops::blur(&img, radius as f32)
}

// ============================================================================
// Compositing
// ============================================================================

/// Pastes `src` over `dest` using `src`'s own alpha as the blend mask.
///
/// Every channel, alpha included, is interpolated between destination and
/// source by the mask: `out = src * m + dest * (1 - m)`. Both images must
/// have the same dimensions; extra pixels on either side are ignored.
pub fn paste_with_mask(dest: &mut Pixmap, src: &RgbaImage) {
    let width = dest.width().min(src.width());
    let height = dest.height().min(src.height());
    let stride = dest.width();
    let pixels = dest.pixels_mut();

    for y in 0..height {
        for x in 0..width {
            let src_pixel = src.get_pixel(x, y);
            let mask = src_pixel[3];
            if mask == 0 {
                continue;
            }

            let index = (y * stride + x) as usize;
            let dst = pixels[index].demultiply();
            let dst = [dst.red(), dst.green(), dst.blue(), dst.alpha()];
            let out = mask_blend(src_pixel.0, dst, mask);
            pixels[index] = ColorU8::from_rgba(out[0], out[1], out[2], out[3]).premultiply();
        }
    }
}

/// Interpolates each channel from `dst` towards `src` by `mask / 255`.
fn mask_blend(src: [u8; 4], dst: [u8; 4], mask: u8) -> [u8; 4] {
    let m = mask as f32 / 255.0;
    let mut out = [0u8; 4];
    for (o, (s, d)) in out.iter_mut().zip(src.into_iter().zip(dst)) {
        *o = (s as f32 * m + d as f32 * (1.0 - m)).round() as u8;
    }
    out
}

// ============================================================================
// Tests
// ============================================================================
