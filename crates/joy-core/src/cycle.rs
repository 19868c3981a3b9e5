use crate::error::{Error, Result};
use crate::geom::{Point, origin};
use crate::shape::Shape;
use crate::transform::{Rotate, Scale, Transform};

/// Rotates a shape repeatedly and combines all the resulting copies.
///
/// Unlike [`crate::Repeat`], every copy is a full clone of the shape; no `<defs>`/`<use>`
/// indirection is emitted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cycle {
    n: usize,
    angle: f64,
    anchor: Point,
    scale: Option<f64>,
}

impl Default for Cycle {
    fn default() -> Self {
        Self {
            n: 18,
            angle: 20.0,
            anchor: origin(),
            scale: None,
        }
    }
}

impl Cycle {
    /// `n` copies, each rotated `360 / n` degrees further than the previous one.
    pub fn new(n: i64) -> Result<Self> {
        if n < 1 {
            return Err(Error::InvalidCycleCount { n });
        }
        Ok(Self {
            n: n as usize,
            angle: 360.0 / n as f64,
            ..Self::default()
        })
    }

    pub fn with_angle(mut self, angle: f64) -> Result<Self> {
        if !angle.is_finite() {
            return Err(Error::invalid_argument(format!(
                "cycle angle must be finite (got {angle})"
            )));
        }
        self.angle = angle;
        Ok(self)
    }

    pub fn with_anchor(mut self, anchor: Point) -> Self {
        self.anchor = anchor;
        self
    }

    /// Scales copy `i` by `s^i` on top of its rotation.
    pub fn with_scale(mut self, s: f64) -> Self {
        self.scale = Some(s);
        self
    }

    pub fn count(&self) -> usize {
        self.n
    }

    pub fn angle(&self) -> f64 {
        self.angle
    }

    pub fn anchor(&self) -> Point {
        self.anchor
    }

    pub fn scale(&self) -> Option<f64> {
        self.scale
    }
}

impl Transform for Cycle {
    fn apply_to(&self, shape: &Shape) -> Shape {
        tracing::debug!(
            n = self.n,
            angle = self.angle,
            scale = ?self.scale,
            "expanding cycle"
        );
        let copies = (0..self.n).map(|i| {
            let rotated = shape.with_transform(Rotate::around(i as f64 * self.angle, self.anchor));
            match self.scale {
                Some(s) => rotated.with_transform(Scale::uniform(s.powi(i as i32))),
                None => rotated,
            }
        });
        Shape::group(copies)
    }
}
