//! Display hook: hands rendered documents to a host viewer (a notebook, a preview window, a file).

use crate::shapes::{Line, Rectangle};
use joy_core::{Shape, point};
use joy_render::{DEFAULT_HEIGHT, DEFAULT_WIDTH, Document};
use std::io::{self, Write};

const MARKER_STROKE: &str = "#ddd";

pub trait Viewer {
    fn display(&mut self, svg: &str) -> io::Result<()>;
}

/// A viewer that writes the markup to any `io::Write`.
#[derive(Debug)]
pub struct WriterViewer<W: Write>(pub W);

impl<W: Write> WriterViewer<W> {
    pub fn into_inner(self) -> W {
        self.0
    }
}

impl<W: Write> Viewer for WriterViewer<W> {
    fn display(&mut self, svg: &str) -> io::Result<()> {
        self.0.write_all(svg.as_bytes())?;
        self.0.flush()
    }
}

/// Light reference markers: the canvas border and both axes through the origin.
pub fn markers() -> Vec<Shape> {
    let (w, h) = (DEFAULT_WIDTH, DEFAULT_HEIGHT);
    vec![
        Shape::from(Rectangle {
            center: point(0.0, 0.0),
            width: w,
            height: h,
        })
        .with_attr("stroke", MARKER_STROKE),
        Shape::from(Line {
            start: point(-w / 2.0, 0.0),
            end: point(w / 2.0, 0.0),
        })
        .with_attr("stroke", MARKER_STROKE),
        Shape::from(Line {
            start: point(0.0, -h / 2.0),
            end: point(0.0, h / 2.0),
        })
        .with_attr("stroke", MARKER_STROKE),
    ]
}

/// Renders `shapes` on the default canvas, on top of the reference markers, and displays them.
pub fn show(viewer: &mut dyn Viewer, shapes: impl IntoIterator<Item = Shape>) -> io::Result<()> {
    let mut all = markers();
    all.extend(shapes);
    let document = Document::new(all);
    viewer.display(&document.render())
}
