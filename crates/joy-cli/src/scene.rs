//! Declarative scene files.
//!
//! A scene maps image names to a canvas size and a list of shapes. Each shape is a primitive plus
//! optional attributes and an ordered list of transforms:
//!
//! ```yaml
//! flower:
//!   shapes:
//!     - shape: { rectangle: {} }
//!       transforms:
//!         - repeat: { n: 18, transforms: [ { rotate: { angle: 10 } } ] }
//! ```

use indexmap::IndexMap;
use joy::geom::origin;
use joy::render::{DEFAULT_HEIGHT, DEFAULT_WIDTH, Document};
use joy::shapes::{Circle, Ellipse, Rectangle, line, polygon, polyline};
use joy::{
    AttrValue, Cycle, Error, Point, ReferenceRegistry, Repeat, Result, Rotate, Scale, Shape,
    Transform, Transformation, Translate, point,
};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct Scene {
    pub images: IndexMap<String, ImageSpec>,
}

impl Scene {
    pub fn from_yaml(text: &str) -> std::result::Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(text)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ImageSpec {
    pub width: Option<f64>,
    pub height: Option<f64>,
    #[serde(default)]
    pub shapes: Vec<ShapeSpec>,
}

impl ImageSpec {
    /// Builds the document, falling back to `default_size` (or 300x300) for a missing canvas size.
    pub fn document(
        &self,
        default_size: (Option<f64>, Option<f64>),
        registry: &ReferenceRegistry,
    ) -> Result<Document> {
        let shapes = self
            .shapes
            .iter()
            .map(|s| s.build(registry))
            .collect::<Result<Vec<_>>>()?;
        let width =
            canvas_size("width", self.width.or(default_size.0))?.unwrap_or(DEFAULT_WIDTH);
        let height =
            canvas_size("height", self.height.or(default_size.1))?.unwrap_or(DEFAULT_HEIGHT);
        Ok(Document::new(shapes).with_size(width, height))
    }
}

fn canvas_size(name: &str, value: Option<f64>) -> Result<Option<f64>> {
    match value {
        Some(v) if !(v.is_finite() && v > 0.0) => Err(Error::invalid_argument(format!(
            "canvas {name} must be a positive number (got {v})"
        ))),
        other => Ok(other),
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ShapeSpec {
    pub shape: PrimitiveSpec,
    #[serde(default)]
    pub attrs: IndexMap<String, AttrValue>,
    #[serde(default)]
    pub transforms: Vec<TransformSpec>,
}

impl ShapeSpec {
    pub fn build(&self, registry: &ReferenceRegistry) -> Result<Shape> {
        let mut shape = self.shape.build(registry)?.with_attrs(self.attrs.clone());
        for t in &self.transforms {
            shape = t.step()?.apply(&shape, registry);
        }
        Ok(shape)
    }
}

fn zero() -> f64 {
    0.0
}

fn default_radius() -> f64 {
    100.0
}

fn default_width() -> f64 {
    200.0
}

fn default_height() -> f64 {
    100.0
}

fn one() -> f64 {
    1.0
}

fn default_cycle_count() -> i64 {
    18
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "snake_case", deny_unknown_fields)]
pub enum PrimitiveSpec {
    Circle {
        #[serde(default = "zero")]
        x: f64,
        #[serde(default = "zero")]
        y: f64,
        #[serde(default = "default_radius")]
        r: f64,
    },
    Rectangle {
        #[serde(default = "zero")]
        x: f64,
        #[serde(default = "zero")]
        y: f64,
        #[serde(default = "default_width")]
        w: f64,
        #[serde(default = "default_height")]
        h: f64,
    },
    Ellipse {
        #[serde(default = "zero")]
        x: f64,
        #[serde(default = "zero")]
        y: f64,
        #[serde(default = "default_width")]
        w: f64,
        #[serde(default = "default_height")]
        h: f64,
    },
    Line {
        x1: Option<f64>,
        y1: Option<f64>,
        x2: Option<f64>,
        y2: Option<f64>,
    },
    Polygon {
        points: Vec<[f64; 2]>,
    },
    Polyline {
        points: Vec<[f64; 2]>,
    },
    Group {
        shapes: Vec<ShapeSpec>,
    },
}

fn to_points(points: &[[f64; 2]]) -> Vec<Point> {
    points.iter().map(|[x, y]| point(*x, *y)).collect()
}

impl PrimitiveSpec {
    pub fn build(&self, registry: &ReferenceRegistry) -> Result<Shape> {
        Ok(match self {
            Self::Circle { x, y, r } => Circle {
                center: point(*x, *y),
                radius: *r,
            }
            .into(),
            Self::Rectangle { x, y, w, h } => Rectangle {
                center: point(*x, *y),
                width: *w,
                height: *h,
            }
            .into(),
            Self::Ellipse { x, y, w, h } => Ellipse {
                center: point(*x, *y),
                width: *w,
                height: *h,
            }
            .into(),
            Self::Line { x1, y1, x2, y2 } => line(*x1, *y1, *x2, *y2)?,
            Self::Polygon { points } => polygon(&to_points(points)),
            Self::Polyline { points } => polyline(&to_points(points)),
            Self::Group { shapes } => Shape::group(
                shapes
                    .iter()
                    .map(|s| s.build(registry))
                    .collect::<Result<Vec<_>>>()?,
            ),
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "snake_case", deny_unknown_fields)]
pub enum TransformSpec {
    Translate {
        #[serde(default = "zero")]
        x: f64,
        #[serde(default = "zero")]
        y: f64,
    },
    Rotate {
        angle: f64,
        anchor: Option<[f64; 2]>,
    },
    /// `s` scales uniformly and wins over `x`/`y`.
    Scale {
        s: Option<f64>,
        #[serde(default = "one")]
        x: f64,
        #[serde(default = "one")]
        y: f64,
    },
    Repeat {
        n: i64,
        transforms: Vec<TransformSpec>,
    },
    Cycle {
        #[serde(default = "default_cycle_count")]
        n: i64,
        anchor: Option<[f64; 2]>,
        s: Option<f64>,
        angle: Option<f64>,
    },
}

/// A resolved transform step.
#[derive(Debug, Clone)]
pub enum Step {
    Basic(Transformation),
    Repeat(Repeat),
    Cycle(Cycle),
}

impl Step {
    pub fn apply(&self, shape: &Shape, registry: &ReferenceRegistry) -> Shape {
        match self {
            Self::Basic(t) => t.apply_to(shape),
            Self::Repeat(r) => r.apply_with(shape, registry),
            Self::Cycle(c) => c.apply_to(shape),
        }
    }
}

impl TransformSpec {
    fn name(&self) -> &'static str {
        match self {
            Self::Translate { .. } => "translate",
            Self::Rotate { .. } => "rotate",
            Self::Scale { .. } => "scale",
            Self::Repeat { .. } => "repeat",
            Self::Cycle { .. } => "cycle",
        }
    }

    pub fn step(&self) -> Result<Step> {
        match self {
            Self::Translate { x, y } => Ok(Step::Basic(Translate::new(*x, *y).into())),
            Self::Rotate { angle, anchor } => {
                let anchor = anchor.map(|[x, y]| point(x, y)).unwrap_or_else(origin);
                Ok(Step::Basic(Rotate::around(*angle, anchor).into()))
            }
            Self::Scale { s, x, y } => {
                let scale = match s {
                    Some(s) => Scale::uniform(*s),
                    None => Scale::new(*x, *y),
                };
                Ok(Step::Basic(scale.into()))
            }
            Self::Repeat { n, transforms } => {
                let joined = join(transforms)?;
                Ok(Step::Repeat(Repeat::new(*n, joined)?))
            }
            Self::Cycle {
                n,
                anchor,
                s,
                angle,
            } => {
                let mut cycle = Cycle::new(*n)?;
                if let Some(angle) = angle {
                    cycle = cycle.with_angle(*angle)?;
                }
                if let Some([x, y]) = anchor {
                    cycle = cycle.with_anchor(point(*x, *y));
                }
                if let Some(s) = s {
                    cycle = cycle.with_scale(*s);
                }
                Ok(Step::Cycle(cycle))
            }
        }
    }
}

/// Joins basic transforms into one compound transformation.
fn join(transforms: &[TransformSpec]) -> Result<Transformation> {
    let mut joined: Option<Transformation> = None;
    for t in transforms {
        let Step::Basic(basic) = t.step()? else {
            return Err(Error::invalid_argument(format!(
                "cannot join higher-order transform `{}`",
                t.name()
            )));
        };
        joined = Some(match joined {
            Some(acc) => acc.and_then(basic),
            None => basic,
        });
    }
    joined.ok_or_else(|| Error::invalid_argument("repeat needs at least one transform"))
}
