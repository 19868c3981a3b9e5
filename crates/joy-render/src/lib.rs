#![forbid(unsafe_code)]

//! SVG renderer for joy shape trees.
//!
//! The canvas is origin-centered: a `width x height` document gets the viewBox
//! `-width/2 -height/2 width height`, and all shapes are wrapped in a `scale(1 -1)` group so that
//! `y` grows upwards.

pub mod svg;
mod util;

use joy_core::Shape;

pub use svg::{render_shape, render_tag};

pub const DEFAULT_WIDTH: f64 = 300.0;
pub const DEFAULT_HEIGHT: f64 = 300.0;

#[derive(Debug, Clone)]
pub struct SvgRenderOptions {
    /// Default `fill` on the root `<svg>` element.
    pub fill: String,
    /// Default `stroke` on the root `<svg>` element.
    pub stroke: String,
    /// Indentation added per nesting level.
    pub indent: String,
    /// When true, wrap all shapes in a `scale(1 -1)` group so that `y` grows upwards.
    pub flip_y: bool,
}

impl Default for SvgRenderOptions {
    fn default() -> Self {
        Self {
            fill: "none".to_string(),
            stroke: "black".to_string(),
            indent: "  ".to_string(),
            flip_y: true,
        }
    }
}

/// Top-level shapes plus canvas size; the input of a render call.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub shapes: Vec<Shape>,
    pub width: f64,
    pub height: f64,
}

impl Default for Document {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl Document {
    pub fn new(shapes: Vec<Shape>) -> Self {
        Self {
            shapes,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }

    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn render(&self) -> String {
        render(self)
    }
}

pub fn render(document: &Document) -> String {
    render_with_options(document, &SvgRenderOptions::default())
}

pub fn render_with_options(document: &Document, options: &SvgRenderOptions) -> String {
    svg::render_document(document, options)
}

/// Renders a single shape as a complete SVG document.
pub fn shape_to_svg(shape: &Shape, width: f64, height: f64) -> String {
    render(&Document::new(vec![shape.clone()]).with_size(width, height))
}
