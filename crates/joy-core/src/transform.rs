//! Transformation algebra: translate, rotate, scale and ordered compositions of them.
//!
//! Compositions are stored in application order ("apply A, then B"). SVG applies a
//! space-separated transform list right-to-left, so [`TransformationList`] reverses the order when
//! it is turned into an attribute value.

use crate::geom::{Point, origin};
use crate::number::fmt_display;
use crate::shape::Shape;
use std::fmt;

/// Anything that can turn a shape into a new shape.
///
/// Implemented by the basic transformations as well as the higher-order ones
/// ([`crate::Repeat`], [`crate::Cycle`]) which expand a shape into a group.
pub trait Transform {
    fn apply_to(&self, shape: &Shape) -> Shape;
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Translate {
    pub x: f64,
    pub y: f64,
}

impl Translate {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Anti-clockwise rotation by `angle` degrees around `anchor`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rotate {
    pub angle: f64,
    pub anchor: Point,
}

impl Rotate {
    pub fn new(angle: f64) -> Self {
        Self::around(angle, origin())
    }

    pub fn around(angle: f64, anchor: Point) -> Self {
        Self { angle, anchor }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scale {
    pub sx: f64,
    pub sy: f64,
}

impl Scale {
    pub fn new(sx: f64, sy: f64) -> Self {
        Self { sx, sy }
    }

    pub fn uniform(s: f64) -> Self {
        Self::new(s, s)
    }
}

/// Flat, ordered sequence of transformations. Never contains a nested list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransformationList(Vec<Transformation>);

impl TransformationList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_slice(&self) -> &[Transformation] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn push(&mut self, t: Transformation) {
        match t {
            Transformation::List(list) => self.0.extend(list.0),
            other => self.0.push(other),
        }
    }
}

impl FromIterator<Transformation> for TransformationList {
    fn from_iter<I: IntoIterator<Item = Transformation>>(iter: I) -> Self {
        let mut list = Self::new();
        for t in iter {
            list.push(t);
        }
        list
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Transformation {
    Translate(Translate),
    Rotate(Rotate),
    Scale(Scale),
    List(TransformationList),
}

impl Transformation {
    /// Composes `self` followed by `next`. Lists on either side are flattened.
    pub fn and_then(self, next: impl Into<Transformation>) -> Transformation {
        let mut list = match self {
            Transformation::List(list) => list,
            other => TransformationList(vec![other]),
        };
        list.push(next.into());
        Transformation::List(list)
    }

    /// The canonical SVG `transform` attribute value.
    pub fn to_text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Transformation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Transformation::Translate(t) => {
                write!(f, "translate({} {})", fmt_display(t.x), fmt_display(t.y))
            }
            Transformation::Rotate(r) => {
                if r.anchor == origin() {
                    write!(f, "rotate({})", fmt_display(r.angle))
                } else {
                    write!(
                        f,
                        "rotate({} {} {})",
                        fmt_display(r.angle),
                        fmt_display(r.anchor.x),
                        fmt_display(r.anchor.y)
                    )
                }
            }
            Transformation::Scale(s) => {
                write!(f, "scale({} {})", fmt_display(s.sx), fmt_display(s.sy))
            }
            Transformation::List(list) => {
                for (idx, t) in list.0.iter().rev().enumerate() {
                    if idx > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{t}")?;
                }
                Ok(())
            }
        }
    }
}

impl From<Translate> for Transformation {
    fn from(value: Translate) -> Self {
        Self::Translate(value)
    }
}

impl From<Rotate> for Transformation {
    fn from(value: Rotate) -> Self {
        Self::Rotate(value)
    }
}

impl From<Scale> for Transformation {
    fn from(value: Scale) -> Self {
        Self::Scale(value)
    }
}

impl From<TransformationList> for Transformation {
    fn from(value: TransformationList) -> Self {
        Self::List(value)
    }
}

impl Transform for Transformation {
    fn apply_to(&self, shape: &Shape) -> Shape {
        shape.with_transform(self.clone())
    }
}

macro_rules! basic_transform {
    ($($ty:ident),*) => {
        $(
            impl $ty {
                pub fn and_then(self, next: impl Into<Transformation>) -> Transformation {
                    Transformation::from(self).and_then(next)
                }
            }

            impl Transform for $ty {
                fn apply_to(&self, shape: &Shape) -> Shape {
                    shape.with_transform(*self)
                }
            }

            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    fmt::Display::fmt(&Transformation::from(*self), f)
                }
            }
        )*
    };
}

basic_transform!(Translate, Rotate, Scale);

impl Transform for TransformationList {
    fn apply_to(&self, shape: &Shape) -> Shape {
        shape.with_transform(self.clone())
    }
}
