//! Measurements of the golf-ball icon, derived from the edge length.
//!
//! All layers read their placement from [`IconGeometry`] so that the drawing
//! code holds no magic numbers of its own.

use resvg::tiny_skia::Point;

use crate::icon::IconSize;

/// Backdrop rings are drawn out to this multiple of the edge length.
const BACKDROP_EXTENT: f64 = 1.2;

/// Pattern arcs are spaced this many degrees apart.
const PATTERN_STEP_DEG: u32 = 45;

/// Each pattern arc sweeps this many degrees.
const PATTERN_SWEEP_DEG: f32 = 30.0;

/// A straight stroke between two points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
}

impl Segment {
    fn new(x0: f32, y0: f32, x1: f32, y1: f32) -> Self {
        Self {
            start: Point::from_xy(x0, y0),
            end: Point::from_xy(x1, y1),
        }
    }

    pub fn length(&self) -> f32 {
        self.start.distance(self.end)
    }
}

/// One circle of the radial backdrop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackdropRing {
    /// Circle diameter in pixels.
    pub diameter: u32,
    pub alpha: u8,
}

/// One decorative seam arc on the ball.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PatternArc {
    pub center: Point,
    pub radius: f32,
    /// Start angle in degrees, clockwise from 3 o'clock.
    pub start_deg: f32,
    pub sweep_deg: f32,
}

/// Every derived measurement for one icon size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IconGeometry {
    pub edge: u32,
    pub padding: f32,
    pub center: f32,
    pub ball_radius: f32,
    /// Gaussian blur sigma for the drop shadow (`edge / 30`).
    pub blur_radius: u32,
    /// Stroke width of the seam arcs (`max(1, edge / 50)`).
    pub pattern_stroke: u32,
    /// Core stroke width of the crosshair (`max(2, edge / 30)`).
    pub line_width: u32,
}

impl IconGeometry {
    pub fn new(size: IconSize) -> Self {
        let edge = size.get();
        let s = edge as f32;
        let padding = s * 0.1;
        Self {
            edge,
            padding,
            center: s / 2.0,
            ball_radius: (s - 2.0 * padding) / 3.0,
            blur_radius: edge / 30,
            pattern_stroke: (edge / 50).max(1),
            line_width: (edge / 30).max(2),
        }
    }

    /// Backdrop circles from the largest to the smallest, so that each one
    /// overwrites the more transparent ring beneath it.
    pub fn backdrop_rings(&self) -> impl Iterator<Item = BackdropRing> {
        let extent = self.edge as f64 * BACKDROP_EXTENT;
        let start = extent as u32;
        (0..=start).rev().map(move |i| BackdropRing {
            diameter: i,
            alpha: (255.0 * (1.0 - i as f64 / extent)) as u8,
        })
    }

    /// Radius of the seam arcs.
    pub fn pattern_radius(&self) -> f32 {
        self.ball_radius * 0.8
    }

    /// The eight seam arcs.
    ///
    /// The center offset depends only on `angle % 90` and is applied to both
    /// axes, so arcs four steps apart share a center.
    pub fn pattern_arcs(&self) -> impl Iterator<Item = PatternArc> {
        let radius = self.pattern_radius();
        let center = self.center;
        (0..360).step_by(PATTERN_STEP_DEG as usize).map(move |angle: u32| {
            let offset = radius * 0.3 * (angle % 90) as f32 / 90.0;
            PatternArc {
                center: Point::from_xy(center + offset, center + offset),
                radius,
                start_deg: angle as f32,
                sweep_deg: PATTERN_SWEEP_DEG,
            }
        })
    }

    /// Glow stroke widths, widest first.
    pub fn glow_widths(&self) -> [u32; 3] {
        [0u32, 1, 2].map(|k| self.line_width + (3 - k) * 2)
    }

    /// Crosshair segments: top, bottom, left, right.
    pub fn crosshair_segments(&self) -> [Segment; 4] {
        let s = self.edge as f32;
        let c = self.center;
        let inner = self.ball_radius + self.padding;
        [
            Segment::new(c, self.padding, c, c - inner),
            Segment::new(c, c + inner, c, s - self.padding),
            Segment::new(self.padding, c, c - inner, c),
            Segment::new(c + inner, c, s - self.padding, c),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geometry(edge: u32) -> IconGeometry {
        IconGeometry::new(IconSize::new(edge).unwrap())
    }

    #[test]
    fn base_measurements() {
        let g = geometry(72);
        assert!((g.padding - 7.2).abs() < 1e-4);
        assert_eq!(g.center, 36.0);
        assert!((g.ball_radius - 19.2).abs() < 1e-4);
        assert_eq!(g.blur_radius, 2);
        assert_eq!(g.pattern_stroke, 1);
        assert_eq!(g.line_width, 2);
    }

    #[test]
    fn large_icon_stroke_widths() {
        let g = geometry(512);
        assert_eq!(g.line_width, 17);
        assert_eq!(g.glow_widths(), [23, 21, 19]);
        assert_eq!(g.pattern_stroke, 10);
        assert_eq!(g.blur_radius, 17);
    }

    #[test]
    fn backdrop_rings_descend_and_brighten() {
        let rings: Vec<_> = geometry(72).backdrop_rings().collect();
        // trunc(1.2 * 72) = 86, down to 0 inclusive
        assert_eq!(rings.len(), 87);
        assert_eq!(rings[0].diameter, 86);
        assert_eq!(rings[0].alpha, 1);
        assert_eq!(rings.last().unwrap(), &BackdropRing { diameter: 0, alpha: 255 });
        for pair in rings.windows(2) {
            assert!(pair[0].diameter > pair[1].diameter);
            assert!(pair[0].alpha <= pair[1].alpha);
        }
    }

    #[test]
    fn pattern_arc_offsets_repeat_every_ninety_degrees() {
        let g = geometry(128);
        let arcs: Vec<_> = g.pattern_arcs().collect();
        assert_eq!(arcs.len(), 8);

        let starts: Vec<f32> = arcs.iter().map(|a| a.start_deg).collect();
        assert_eq!(starts, [0.0, 45.0, 90.0, 135.0, 180.0, 225.0, 270.0, 315.0]);

        let shifted = g.center + g.pattern_radius() * 0.15;
        for (i, arc) in arcs.iter().enumerate() {
            let expected = if i % 2 == 0 { g.center } else { shifted };
            assert!((arc.center.x - expected).abs() < 1e-4);
            assert_eq!(arc.center.x, arc.center.y);
            assert_eq!(arc.sweep_deg, 30.0);
        }
    }

    #[test]
    fn crosshair_segments_stay_off_the_ball() {
        let g = geometry(192);
        let [top, bottom, left, right] = g.crosshair_segments();

        assert_eq!(top.start.x, g.center);
        assert!((top.start.y - g.padding).abs() < 1e-4);
        assert!(top.end.y < g.center - g.ball_radius);

        assert!(bottom.start.y > g.center + g.ball_radius);
        assert!((bottom.end.y - (192.0 - g.padding)).abs() < 1e-4);

        assert_eq!(left.start.y, g.center);
        assert!(left.end.x < g.center - g.ball_radius);
        assert!(right.start.x > g.center + g.ball_radius);

        for segment in [top, bottom, left, right] {
            assert!((segment.length() - top.length()).abs() < 1e-3);
        }
    }

    #[test]
    fn smallest_size_keeps_features_visible() {
        let g = geometry(IconSize::MIN);
        assert!(g.ball_radius >= 1.0);
        for segment in g.crosshair_segments() {
            assert!(segment.length() >= 1.0);
        }
    }

    #[test]
    fn crosshair_arm_is_a_thirtieth_of_the_edge() {
        for edge in [IconSize::MIN, 72, 150, 512] {
            let g = geometry(edge);
            for segment in g.crosshair_segments() {
                assert!((segment.length() - edge as f32 / 30.0).abs() < 1e-3, "{edge}");
            }
        }
    }
}
