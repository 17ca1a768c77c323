//! Mark rendering onto surfaces using tiny-skia
//!
//! The same functions draw the live preview and the final commit, so a
//! shape never changes appearance when it is released.

use image::{Rgba, RgbaImage};
use tiny_skia::{
    Color, ColorU8, FillRule, LineCap, LineJoin, Paint, Path, PathBuilder, Pixmap, Stroke,
    Transform,
};

use super::geometry::{self, arrow, highlighter, pen, rect};
use crate::config::StrokeColor;
use crate::domain::{Mark, Point, dedup_path};

/// Anti-aliased solid paint in a palette color, scaled by `opacity`
fn paint_for(color: StrokeColor, opacity: f32) -> Paint<'static> {
    let [r, g, b, a] = color.to_rgba_u8();
    let mut c = Color::from_rgba8(r, g, b, a);
    c.apply_opacity(opacity);
    let mut paint = Paint::default();
    paint.set_color(c);
    paint.anti_alias = true;
    paint
}

fn round_stroke(width: f32) -> Stroke {
    Stroke {
        width,
        line_cap: LineCap::Round,
        line_join: LineJoin::Round,
        ..Default::default()
    }
}

/// Build an open polyline through `points`
fn build_polyline(points: &[Point]) -> Option<Path> {
    let (first, rest) = points.split_first()?;
    let mut pb = PathBuilder::new();
    pb.move_to(first.x, first.y);
    for p in rest {
        pb.line_to(p.x, p.y);
    }
    pb.finish()
}

/// Build a closed rectangle outline spanning two corners
fn build_rect_path(start: Point, end: Point) -> Option<Path> {
    let b = geometry::rect_bounds(start, end);
    let mut pb = PathBuilder::new();
    pb.move_to(b.left, b.top);
    pb.line_to(b.right, b.top);
    pb.line_to(b.right, b.bottom);
    pb.line_to(b.left, b.bottom);
    pb.close();
    pb.finish()
}

/// Build the arrowhead triangle with its tip at `end`
fn build_arrow_head(start: Point, end: Point) -> Option<Path> {
    let (h1, h2) = arrow::head_points(start, end);
    let mut pb = PathBuilder::new();
    pb.move_to(end.x, end.y);
    pb.line_to(h1.x, h1.y);
    pb.line_to(h2.x, h2.y);
    pb.close();
    pb.finish()
}

/// Draw one pen segment with rounded caps and joins
pub fn draw_pen_segment(pixmap: &mut Pixmap, from: Point, to: Point, color: StrokeColor) {
    if let Some(path) = build_polyline(&[from, to]) {
        let paint = paint_for(color, 1.0);
        let stroke = round_stroke(pen::THICKNESS);
        pixmap.stroke_path(&path, &paint, &stroke, Transform::identity(), None);
    }
}

/// Draw an unfilled rectangle (default miter joins, like a plain stroked box)
pub fn draw_rect(pixmap: &mut Pixmap, start: Point, end: Point, color: StrokeColor) {
    if let Some(path) = build_rect_path(start, end) {
        let paint = paint_for(color, 1.0);
        let stroke = Stroke {
            width: rect::THICKNESS,
            ..Default::default()
        };
        pixmap.stroke_path(&path, &paint, &stroke, Transform::identity(), None);
    }
}

/// Draw an arrow: stroked shaft with round caps plus a filled head
pub fn draw_arrow(pixmap: &mut Pixmap, start: Point, end: Point, color: StrokeColor) {
    let paint = paint_for(color, 1.0);

    if let Some(shaft) = build_polyline(&[start, end]) {
        let stroke = Stroke {
            width: arrow::THICKNESS,
            line_cap: LineCap::Round,
            ..Default::default()
        };
        pixmap.stroke_path(&shaft, &paint, &stroke, Transform::identity(), None);
    }

    if let Some(head) = build_arrow_head(start, end) {
        pixmap.fill_path(&head, &paint, FillRule::Winding, Transform::identity(), None);
    }
}

/// Draw a highlighter path as a single translucent stroke
///
/// The whole path is stroked at once so overlapping segments do not
/// stack opacity. Returns false (and draws nothing) for paths with fewer
/// than two samples.
pub fn draw_highlighter(pixmap: &mut Pixmap, points: &[Point], color: StrokeColor) -> bool {
    if points.len() < highlighter::MIN_POINTS {
        return false;
    }
    let simplified = dedup_path(points);
    // All samples identical: keep a zero-length segment so a dot is still drawn
    let path_points = if simplified.len() < 2 {
        vec![points[0], points[0]]
    } else {
        simplified
    };
    let Some(path) = build_polyline(&path_points) else {
        return false;
    };
    let paint = paint_for(color, highlighter::OPACITY);
    let stroke = round_stroke(highlighter::THICKNESS);
    pixmap.stroke_path(&path, &paint, &stroke, Transform::identity(), None);
    true
}

/// Draw any committed mark
pub fn draw_mark(pixmap: &mut Pixmap, mark: &Mark) {
    match mark {
        Mark::Pen(seg) => draw_pen_segment(pixmap, seg.from, seg.to, seg.color),
        Mark::Rectangle(r) => draw_rect(pixmap, r.start, r.end, r.color),
        Mark::Arrow(a) => draw_arrow(pixmap, a.start, a.end, a.color),
        Mark::Highlighter(h) => {
            draw_highlighter(pixmap, &h.points, h.color);
        }
    }
}

/// Copy a straight-alpha image into a new premultiplied pixmap
///
/// Returns None when either dimension is zero.
pub fn pixmap_from_rgba(img: &RgbaImage) -> Option<Pixmap> {
    let mut pixmap = Pixmap::new(img.width(), img.height())?;
    for (dst, src) in pixmap.pixels_mut().iter_mut().zip(img.pixels()) {
        let [r, g, b, a] = src.0;
        *dst = ColorU8::from_rgba(r, g, b, a).premultiply();
    }
    Some(pixmap)
}

/// Copy a premultiplied pixmap out into a straight-alpha image
pub fn rgba_from_pixmap(pixmap: &Pixmap) -> RgbaImage {
    let mut img = RgbaImage::new(pixmap.width(), pixmap.height());
    for (dst, src) in img.pixels_mut().zip(pixmap.pixels()) {
        let c = src.demultiply();
        *dst = Rgba([c.red(), c.green(), c.blue(), c.alpha()]);
    }
    img
}
