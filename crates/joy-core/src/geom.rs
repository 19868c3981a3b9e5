//! Geometry primitives.
//!
//! Joy uses a mathematical coordinate system: `(0, 0)` is the center of the canvas and `y` grows
//! upwards. The renderer takes care of flipping the axis for SVG output.

pub type Unit = euclid::UnknownUnit;

pub type Point = euclid::Point2D<f64, Unit>;

pub fn point(x: f64, y: f64) -> Point {
    euclid::point2(x, y)
}

pub fn origin() -> Point {
    Point::origin()
}

/// Formats points as an SVG `points` list: `x1,y1 x2,y2 ...`.
pub fn points_attr(points: &[Point]) -> String {
    let mut out = String::new();
    for (idx, p) in points.iter().enumerate() {
        if idx > 0 {
            out.push(' ');
        }
        crate::number::fmt_into(&mut out, p.x);
        out.push(',');
        crate::number::fmt_into(&mut out, p.y);
    }
    out
}
