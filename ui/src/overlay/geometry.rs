use crate::core::format::format_coord;
use crate::wizard::{ImageFrame, PinCoordinate};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn center_of(frame: ImageFrame) -> Self {
        Self::new(frame.width / 2.0, frame.height / 2.0)
    }

    pub fn distance(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    pub fn lerp(self, other: Point, t: f64) -> Point {
        Point::new(
            self.x + (other.x - self.x) * t,
            self.y + (other.y - self.y) * t,
        )
    }

    pub fn midpoint(self, other: Point) -> Point {
        self.lerp(other, 0.5)
    }

    pub fn offset(self, dx: f64, dy: f64) -> Point {
        Point::new(self.x + dx, self.y + dy)
    }

    pub fn clamp_to(self, frame: ImageFrame) -> Point {
        Point::new(self.x.clamp(0.0, frame.width), self.y.clamp(0.0, frame.height))
    }
}

impl From<PinCoordinate> for Point {
    fn from(pin: PinCoordinate) -> Self {
        Point::new(pin.x, pin.y)
    }
}

/// Minimal builder for SVG path data.
#[derive(Debug, Default)]
pub struct SvgPath(String);

impl SvgPath {
    pub fn move_to(p: Point) -> Self {
        Self(format!("M {} {}", format_coord(p.x), format_coord(p.y)))
    }

    pub fn line_to(mut self, p: Point) -> Self {
        self.push('L', &[p]);
        self
    }

    pub fn quad_to(mut self, control: Point, p: Point) -> Self {
        self.push('Q', &[control, p]);
        self
    }

    pub fn cubic_to(mut self, c1: Point, c2: Point, p: Point) -> Self {
        self.push('C', &[c1, c2, p]);
        self
    }

    /// Smooth polyline: quadratic segments through the midpoints of
    /// consecutive vertices, ending on the last vertex.
    pub fn smooth_through(points: &[Point]) -> Self {
        let Some(first) = points.first() else {
            return Self::default();
        };
        let mut path = Self::move_to(*first);
        if points.len() == 1 {
            return path;
        }
        for pair in points[1..].windows(2) {
            path = path.quad_to(pair[0], pair[0].midpoint(pair[1]));
        }
        path.line_to(points[points.len() - 1])
    }

    pub fn finish(self) -> String {
        self.0
    }

    fn push(&mut self, command: char, points: &[Point]) {
        self.0.push(' ');
        self.0.push(command);
        for p in points {
            self.0.push(' ');
            self.0.push_str(&format_coord(p.x));
            self.0.push(' ');
            self.0.push_str(&format_coord(p.y));
        }
    }
}
