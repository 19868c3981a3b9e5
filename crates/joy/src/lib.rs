#![forbid(unsafe_code)]

//! Joy is a tiny creative coding library.
//!
//! Shapes are thin wrappers over SVG elements; they are combined into groups and transformed
//! functionally, and every operation returns a new shape:
//!
//! ```
//! use joy::prelude::*;
//!
//! let c = circle(0.0, 0.0, 50.0);
//! let moved = c.apply(&translate(100.0, 0.0));
//! let flower = rectangle(0.0, 0.0, 200.0, 100.0).apply(&repeat(18, rotate(10.0)).unwrap());
//! let svg = joy::render::Document::new(vec![c, moved, flower]).render();
//! assert!(svg.starts_with("<svg"));
//! ```
//!
//! # Features
//!
//! - `render` (default): SVG output (`joy::render`) and the display hook (`joy::show`)

pub mod color;
pub mod random;
pub mod shapes;
#[cfg(feature = "render")]
pub mod show;

pub use joy_core::*;

#[cfg(feature = "render")]
pub mod render {
    pub use joy_render::svg::{SVG_NAMESPACE, XLINK_NAMESPACE};
    pub use joy_render::{
        DEFAULT_HEIGHT, DEFAULT_WIDTH, Document, SvgRenderOptions, render, render_shape,
        render_tag, render_with_options, shape_to_svg,
    };
}

pub mod prelude {
    pub use crate::color::{color, color_alpha};
    pub use crate::random::{random, random_between, random_upto};
    pub use crate::shapes::{
        Circle, Ellipse, Line, Rectangle, circle, combine, cycle, ellipse, line, polygon,
        polyline, rectangle, repeat, rotate, scale, scale_xy, translate,
    };
    pub use joy_core::{
        Cycle, Point, Repeat, Rotate, Scale, Shape, Transform, Transformation, Translate, point,
    };
}
