//! Geometric types for surface coordinates and pointer mapping

/// A position in surface pixel coordinates
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point
    pub fn distance(self, other: Point) -> f32 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Angle of the vector from `self` to `other`, in radians
    pub fn angle_to(self, other: Point) -> f32 {
        (other.y - self.y).atan2(other.x - self.x)
    }
}

/// Axis-aligned box spanned by two arbitrary corner points
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Bounds {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Bounds {
    /// Normalize two corners (in any order) into a box
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self {
            left: a.x.min(b.x),
            top: a.y.min(b.y),
            right: a.x.max(b.x),
            bottom: a.y.max(b.y),
        }
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }
}

/// On-screen placement of the editing canvas
///
/// The surface is laid out at its natural pixel size, but a host may still
/// display it scaled. Pointer events arrive in client coordinates and are
/// mapped back into surface pixels here.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CanvasBounds {
    /// Client-space position of the canvas' top-left corner
    pub left: f32,
    pub top: f32,
    /// Displayed size in client units
    pub display_width: f32,
    pub display_height: f32,
    /// Pixel size of the surfaces
    pub surface_width: u32,
    pub surface_height: u32,
}

impl CanvasBounds {
    /// Canvas displayed 1:1 at the given client offset
    pub fn unscaled(left: f32, top: f32, surface_width: u32, surface_height: u32) -> Self {
        Self {
            left,
            top,
            display_width: surface_width as f32,
            display_height: surface_height as f32,
            surface_width,
            surface_height,
        }
    }

    /// Convert a client-space pointer position into surface pixels
    pub fn to_surface(&self, client_x: f32, client_y: f32) -> Point {
        let scale_x = if self.display_width > 0.0 {
            self.surface_width as f32 / self.display_width
        } else {
            1.0
        };
        let scale_y = if self.display_height > 0.0 {
            self.surface_height as f32 / self.display_height
        } else {
            1.0
        };
        Point {
            x: (client_x - self.left) * scale_x,
            y: (client_y - self.top) * scale_y,
        }
    }
}

/// Drop consecutive duplicate samples from a freehand path
///
/// Duplicates are legal in a gesture's sample list; they only produce
/// zero-length segments when stroked.
pub fn dedup_path(points: &[Point]) -> Vec<Point> {
    let mut out: Vec<Point> = Vec::with_capacity(points.len());
    for &p in points {
        if out.last() != Some(&p) {
            out.push(p);
        }
    }
    out
}
