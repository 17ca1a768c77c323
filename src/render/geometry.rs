//! Stroke constants and shape math shared by preview and commit drawing
//!
//! Widths and sizes are fixed; the host cannot configure them.

use crate::domain::{Bounds, Point};

/// Freehand pen
pub mod pen {
    /// Stroke width in surface pixels
    pub const THICKNESS: f32 = 3.0;
}

/// Rectangle outline
pub mod rect {
    /// Stroke width in surface pixels
    pub const THICKNESS: f32 = 3.0;
}

/// Arrow geometry constants
pub mod arrow {
    use std::f32::consts::PI;

    use crate::domain::Point;

    /// Shaft thickness in surface pixels
    pub const THICKNESS: f32 = 3.0;
    /// Length of each arrowhead edge
    pub const HEAD_LENGTH: f32 = 15.0;
    /// Angle between the shaft and each head edge (30 degrees)
    pub const HEAD_ANGLE: f32 = PI / 6.0;

    /// Back corners of the arrowhead triangle whose tip sits at `end`
    ///
    /// A zero-length arrow still gets a head (pointing along +x).
    pub fn head_points(start: Point, end: Point) -> (Point, Point) {
        let angle = start.angle_to(end);
        let back = |offset: f32| Point {
            x: end.x - HEAD_LENGTH * (angle + offset).cos(),
            y: end.y - HEAD_LENGTH * (angle + offset).sin(),
        };
        (back(-HEAD_ANGLE), back(HEAD_ANGLE))
    }
}

/// Translucent highlighter path
pub mod highlighter {
    /// Stroke width in surface pixels
    pub const THICKNESS: f32 = 24.0;
    /// Opacity applied to the palette color
    pub const OPACITY: f32 = 0.35;
    /// Fewer samples than this commit nothing
    pub const MIN_POINTS: usize = 2;
}

/// Rectangle outline box for a gesture from `start` to `end`
#[inline]
pub fn rect_bounds(start: Point, end: Point) -> Bounds {
    Bounds::from_corners(start, end)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_near(a: f32, b: f32) {
        assert!((a - b).abs() < 1e-3, "{a} != {b}");
    }

    #[test]
    fn horizontal_arrow_head_is_symmetric() {
        let (h1, h2) = arrow::head_points(Point::new(0.0, 0.0), Point::new(100.0, 0.0));
        let back_x = 100.0 - 15.0 * (30.0_f32.to_radians()).cos();
        assert_near(h1.x, back_x);
        assert_near(h2.x, back_x);
        assert_near(h1.y, 7.5);
        assert_near(h2.y, -7.5);
    }

    #[test]
    fn head_edges_have_fixed_length_and_angle() {
        let start = Point::new(10.0, 40.0);
        let end = Point::new(70.0, -20.0);
        let shaft = start.angle_to(end);
        let (h1, h2) = arrow::head_points(start, end);
        for h in [h1, h2] {
            assert_near(end.distance(h), arrow::HEAD_LENGTH);
            // Edge direction (back corner -> tip) deviates 30 degrees from the shaft
            let edge = h.angle_to(end);
            let mut diff = (edge - shaft).abs();
            if diff > std::f32::consts::PI {
                diff = 2.0 * std::f32::consts::PI - diff;
            }
            assert_near(diff, arrow::HEAD_ANGLE);
        }
    }

    #[test]
    fn rect_bounds_from_reversed_drag() {
        let b = rect_bounds(Point::new(100.0, 80.0), Point::new(10.0, 10.0));
        assert_eq!((b.left, b.top, b.right, b.bottom), (10.0, 10.0, 100.0, 80.0));
    }
}
