//! Primitive shapes and the small helper functions around them.
//!
//! Every primitive has defaults for all of its geometry, so `Circle::default()` or
//! `Rectangle::default()` already draws something sensible on the default 300x300 canvas.

use joy_core::geom::points_attr;
use joy_core::{
    Cycle, Error, Point, Repeat, Result, Rotate, Scale, Shape, Transformation, Translate, point,
};

/// A circle with center at `center` and radius `radius` (defaults: origin, 100).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub center: Point,
    pub radius: f64,
}

impl Default for Circle {
    fn default() -> Self {
        Self {
            center: point(0.0, 0.0),
            radius: 100.0,
        }
    }
}

impl From<Circle> for Shape {
    fn from(c: Circle) -> Self {
        Shape::new("circle")
            .with_attr("cx", c.center.x)
            .with_attr("cy", c.center.y)
            .with_attr("r", c.radius)
    }
}

/// An ellipse centered at `center` (defaults: origin, 200 x 100).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ellipse {
    pub center: Point,
    pub width: f64,
    pub height: f64,
}

impl Default for Ellipse {
    fn default() -> Self {
        Self {
            center: point(0.0, 0.0),
            width: 200.0,
            height: 100.0,
        }
    }
}

impl From<Ellipse> for Shape {
    fn from(e: Ellipse) -> Self {
        Shape::new("ellipse")
            .with_attr("cx", e.center.x)
            .with_attr("cy", e.center.y)
            .with_attr("rx", e.width / 2.0)
            .with_attr("ry", e.height / 2.0)
    }
}

/// A rectangle centered at `center` (defaults: origin, 200 x 100).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    pub center: Point,
    pub width: f64,
    pub height: f64,
}

impl Default for Rectangle {
    fn default() -> Self {
        Self {
            center: point(0.0, 0.0),
            width: 200.0,
            height: 100.0,
        }
    }
}

impl From<Rectangle> for Shape {
    fn from(r: Rectangle) -> Self {
        Shape::new("rect")
            .with_attr("x", r.center.x - r.width / 2.0)
            .with_attr("y", r.center.y - r.height / 2.0)
            .with_attr("width", r.width)
            .with_attr("height", r.height)
    }
}

/// A line segment (defaults: `(-100, 0)` to `(100, 0)`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    pub start: Point,
    pub end: Point,
}

impl Default for Line {
    fn default() -> Self {
        Self {
            start: point(-100.0, 0.0),
            end: point(100.0, 0.0),
        }
    }
}

impl From<Line> for Shape {
    fn from(l: Line) -> Self {
        Shape::new("line")
            .with_attr("x1", l.start.x)
            .with_attr("y1", l.start.y)
            .with_attr("x2", l.end.x)
            .with_attr("y2", l.end.y)
    }
}

pub fn circle(x: f64, y: f64, r: f64) -> Shape {
    Circle {
        center: point(x, y),
        radius: r,
    }
    .into()
}

pub fn ellipse(x: f64, y: f64, w: f64, h: f64) -> Shape {
    Ellipse {
        center: point(x, y),
        width: w,
        height: h,
    }
    .into()
}

pub fn rectangle(x: f64, y: f64, w: f64, h: f64) -> Shape {
    Rectangle {
        center: point(x, y),
        width: w,
        height: h,
    }
    .into()
}

/// A line from `(x1, y1)` to `(x2, y2)`.
///
/// Either all four coordinates are given, or none (the default line). Anything in between is an
/// error naming every missing coordinate.
pub fn line(x1: Option<f64>, y1: Option<f64>, x2: Option<f64>, y2: Option<f64>) -> Result<Shape> {
    match (x1, y1, x2, y2) {
        (None, None, None, None) => Ok(Line::default().into()),
        (Some(x1), Some(y1), Some(x2), Some(y2)) => Ok(Line {
            start: point(x1, y1),
            end: point(x2, y2),
        }
        .into()),
        _ => {
            let missing = [("x1", x1), ("y1", y1), ("x2", x2), ("y2", y2)]
                .into_iter()
                .filter(|(_, v)| v.is_none())
                .map(|(name, _)| name)
                .collect();
            Err(Error::MissingArguments {
                shape: "line",
                missing,
            })
        }
    }
}

pub fn polygon(points: &[Point]) -> Shape {
    Shape::new("polygon").with_attr("points", points_attr(points))
}

pub fn polyline(points: &[Point]) -> Shape {
    Shape::new("polyline").with_attr("points", points_attr(points))
}

/// Combines a list of shapes into a single group.
pub fn combine(shapes: impl IntoIterator<Item = Shape>) -> Shape {
    Shape::group(shapes)
}

pub fn translate(x: f64, y: f64) -> Translate {
    Translate::new(x, y)
}

pub fn rotate(angle: f64) -> Rotate {
    Rotate::new(angle)
}

/// Uniform scale.
pub fn scale(s: f64) -> Scale {
    Scale::uniform(s)
}

pub fn scale_xy(x: f64, y: f64) -> Scale {
    Scale::new(x, y)
}

pub fn repeat(n: i64, transformation: impl Into<Transformation>) -> Result<Repeat> {
    Repeat::new(n, transformation)
}

pub fn cycle(n: i64) -> Result<Cycle> {
    Cycle::new(n)
}
