//! Integer points, half-open rectangles, and Euclidean distance.

/// A point on the integer pixel grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// A rectangle covering `min.x..max.x` by `min.y..max.y`.
///
/// `min` is inclusive and `max` exclusive, so a rectangle built from image
/// dimensions contains exactly the image's pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rect {
    pub min: Point,
    pub max: Point,
}

impl Rect {
    pub const fn new(min: Point, max: Point) -> Self {
        Self { min, max }
    }

    /// Rectangle anchored at the origin, e.g. an image's bounds.
    pub fn from_dimensions(width: u32, height: u32) -> Self {
        let clamp = |v: u32| i32::try_from(v).unwrap_or(i32::MAX);
        Self {
            min: Point::new(0, 0),
            max: Point::new(clamp(width), clamp(height)),
        }
    }

    pub fn width(&self) -> i32 {
        (self.max.x - self.min.x).max(0)
    }

    pub fn height(&self) -> i32 {
        (self.max.y - self.min.y).max(0)
    }

    pub fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    pub fn contains(&self, p: Point) -> bool {
        (self.min.x..self.max.x).contains(&p.x) && (self.min.y..self.max.y).contains(&p.y)
    }
}

/// Square of an integer, widened so it cannot overflow.
pub fn square(x: i64) -> i128 {
    i128::from(x) * i128::from(x)
}

/// L2 distance between two points.
///
/// Differences are taken in `i64` and squared in `i128`, so any pair of `i32`
/// coordinates is safe.
pub fn euclidean_distance(a: Point, b: Point) -> f64 {
    let dx = i64::from(b.x) - i64::from(a.x);
    let dy = i64::from(b.y) - i64::from(a.y);
    ((square(dx) + square(dy)) as f64).sqrt()
}
