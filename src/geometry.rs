// src/geometry.rs

use bytemuck::{Pod, Zeroable};

#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable, PartialEq)]
pub struct Point2 {
    pub x: f32,
    pub y: f32,
}

impl Point2 {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Point at fractional distance `rate` from `a` toward `b`.
    /// `rate` outside [0, 1] extrapolates linearly.
    pub fn lerp(a: Point2, b: Point2, rate: f32) -> Point2 {
        Point2::new(
            (1.0 - rate) * a.x + rate * b.x,
            (1.0 - rate) * a.y + rate * b.y,
        )
    }

    pub fn distance(&self, other: &Point2) -> f32 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub start: Point2,
    pub end: Point2,
}

impl Segment {
    pub fn new(start: Point2, end: Point2) -> Self {
        Self { start, end }
    }

    pub fn length(&self) -> f32 {
        self.start.distance(&self.end)
    }

    /// One Koch subdivision level: replace the middle third with the two
    /// sides of an equilateral bump. The +60 degree rotation fixes the
    /// winding of every bump to the same side of the segment.
    pub fn koch_split(&self) -> [Segment; 4] {
        let mid1 = Point2::lerp(self.start, self.end, 1.0 / 3.0);
        let mid3 = Point2::lerp(self.start, self.end, 2.0 / 3.0);
        let angle = (mid3.y - mid1.y).atan2(mid3.x - mid1.x);
        let len = mid1.distance(&mid3);
        let mid2 = Point2::new(
            mid1.x + len * (angle + std::f32::consts::FRAC_PI_3).cos(),
            mid1.y + len * (angle + std::f32::consts::FRAC_PI_3).sin(),
        );

        [
            Segment::new(self.start, mid1),
            Segment::new(mid1, mid2),
            Segment::new(mid2, mid3),
            Segment::new(mid3, self.end),
        ]
    }

    /// Appends the terminal segments of the Koch expansion to `out` in
    /// traversal order. A segment strictly shorter than `min_length` is
    /// terminal and pushed unchanged; anything else splits into four
    /// children which recurse in order. Recursion depth is logarithmic in
    /// the length ratio, so native recursion is safe here.
    ///
    /// `min_length` must be positive or the recursion does not terminate;
    /// `SnowflakeGenerator::generate` validates this at the entry point.
    pub fn subdivide_into(&self, min_length: f32, out: &mut Vec<Segment>) {
        debug_assert!(min_length > 0.0);

        if self.length() < min_length {
            out.push(*self);
            return;
        }

        for child in self.koch_split() {
            child.subdivide_into(min_length, out);
        }
    }

    pub fn subdivide(&self, min_length: f32) -> Vec<Segment> {
        let mut out = Vec::new();
        self.subdivide_into(min_length, &mut out);
        out
    }
}
