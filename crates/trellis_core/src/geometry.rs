//! Geometry primitives in logical pixels

use serde::{Deserialize, Serialize};

/// A point in logical pixels (origin top-left, y grows downwards)
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A size in logical pixels
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };

    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Divide both dimensions by `factor`
    ///
    /// Used to turn a physical framebuffer size into a logical one.
    pub fn unscale(&self, factor: f32) -> Size {
        Size::new(self.width / factor, self.height / factor)
    }
}

/// An axis-aligned rectangle
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    pub const ZERO: Rect = Rect {
        origin: Point::ZERO,
        size: Size::ZERO,
    };

    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            origin: Point::new(x, y),
            size: Size::new(width, height),
        }
    }

    pub fn from_origin_size(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    pub fn x(&self) -> f32 {
        self.origin.x
    }

    pub fn y(&self) -> f32 {
        self.origin.y
    }

    pub fn width(&self) -> f32 {
        self.size.width
    }

    pub fn height(&self) -> f32 {
        self.size.height
    }

    pub fn right(&self) -> f32 {
        self.origin.x + self.size.width
    }

    pub fn bottom(&self) -> f32 {
        self.origin.y + self.size.height
    }

    pub fn center(&self) -> Point {
        Point::new(
            self.origin.x + self.size.width / 2.0,
            self.origin.y + self.size.height / 2.0,
        )
    }

    /// Strict containment test: points on an edge are outside
    pub fn contains_strict(&self, point: Point) -> bool {
        point.x > self.origin.x
            && point.x < self.right()
            && point.y > self.origin.y
            && point.y < self.bottom()
    }

    /// Multiply every coordinate by `factor` (logical to physical pixels)
    pub fn scale(&self, factor: f32) -> Rect {
        Rect::new(
            self.origin.x * factor,
            self.origin.y * factor,
            self.size.width * factor,
            self.size.height * factor,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges() {
        let rect = Rect::new(10.0, 20.0, 30.0, 40.0);
        assert_eq!(rect.right(), 40.0);
        assert_eq!(rect.bottom(), 60.0);
        assert_eq!(rect.center(), Point::new(25.0, 40.0));
    }

    #[test]
    fn test_contains_strict_excludes_edges() {
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(rect.contains_strict(Point::new(5.0, 5.0)));
        assert!(!rect.contains_strict(Point::new(0.0, 5.0)));
        assert!(!rect.contains_strict(Point::new(5.0, 10.0)));
    }

    #[test]
    fn test_unscale() {
        assert_eq!(Size::new(1920.0, 1080.0).unscale(2.0), Size::new(960.0, 540.0));
    }
}
