use crate::util::{attr_name_into, escape_xml_into};
use crate::{Document, SvgRenderOptions};
use joy_core::number::fmt_into;
use joy_core::{AttrValue, Attrs, Scale, Shape};
use std::fmt::Write as _;

pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";
pub const XLINK_NAMESPACE: &str = "http://www.w3.org/1999/xlink";

/// Renders an opening tag. With `close` the tag is self-closing (`<circle ... />`).
///
/// Attributes with a `None` value are skipped; values are XML-escaped.
pub fn render_tag(tag: &str, attrs: &Attrs, close: bool) -> String {
    let mut out = String::new();
    render_tag_into(&mut out, tag, attrs, close);
    out
}

fn render_tag_into(out: &mut String, tag: &str, attrs: &Attrs, close: bool) {
    out.push('<');
    out.push_str(tag);
    for (name, value) in attrs {
        let Some(value) = value else {
            continue;
        };
        out.push(' ');
        attr_name_into(out, name);
        out.push_str("=\"");
        match value {
            AttrValue::Number(n) => fmt_into(out, *n),
            AttrValue::Text(s) => escape_xml_into(out, s),
        }
        out.push('"');
    }
    out.push_str(if close { " />" } else { ">" });
}

/// Renders a shape and its subtree, one element per line, without the surrounding `<svg>`.
pub fn render_shape(shape: &Shape) -> String {
    let mut out = String::new();
    render_shape_into(&mut out, shape, "  ");
    out
}

enum Step<'a> {
    Open(&'a Shape, usize),
    Close(&'a Shape, usize),
}

fn push_indent(out: &mut String, unit: &str, depth: usize) {
    for _ in 0..depth {
        out.push_str(unit);
    }
}

// Walks with an explicit stack; repeat output nests one group per copy.
fn render_shape_into(out: &mut String, root: &Shape, unit: &str) {
    let mut stack = vec![Step::Open(root, 0)];
    while let Some(step) = stack.pop() {
        match step {
            Step::Open(shape, depth) => {
                push_indent(out, unit, depth);
                let attrs = shape.effective_attributes();
                match shape.children().filter(|c| !c.is_empty()) {
                    Some(children) => {
                        render_tag_into(out, shape.tag(), &attrs, false);
                        out.push('\n');
                        stack.push(Step::Close(shape, depth));
                        stack.extend(children.iter().rev().map(|c| Step::Open(c, depth + 1)));
                    }
                    None => {
                        render_tag_into(out, shape.tag(), &attrs, true);
                        out.push('\n');
                    }
                }
            }
            Step::Close(shape, depth) => {
                push_indent(out, unit, depth);
                let _ = writeln!(out, "</{}>", shape.tag());
            }
        }
    }
}

pub fn render_document(document: &Document, options: &SvgRenderOptions) -> String {
    tracing::debug!(
        shapes = document.shapes.len(),
        width = document.width,
        height = document.height,
        "rendering svg document"
    );

    let half_w = (document.width / 2.0).floor();
    let half_h = (document.height / 2.0).floor();
    let mut view_box = String::new();
    out_view_box(&mut view_box, half_w, half_h, document.width, document.height);

    let root = Shape::new("svg")
        .with_attr("width", document.width)
        .with_attr("height", document.height)
        .with_attr("viewBox", view_box)
        .with_attr("fill", options.fill.as_str())
        .with_attr("stroke", options.stroke.as_str())
        .with_attr("xmlns", SVG_NAMESPACE)
        .with_attr("xmlns:xlink", XLINK_NAMESPACE);

    let mut out = String::new();
    render_tag_into(&mut out, root.tag(), root.attrs(), false);
    out.push('\n');

    if options.flip_y {
        // y grows upwards in joy; SVG grows downwards.
        let node = Shape::group(document.shapes.iter().cloned())
            .with_transform(Scale::new(1.0, -1.0));
        render_shape_into(&mut out, &node, &options.indent);
    } else {
        for shape in &document.shapes {
            render_shape_into(&mut out, shape, &options.indent);
        }
    }

    out.push_str("</svg>\n");
    out
}

fn out_view_box(out: &mut String, half_w: f64, half_h: f64, width: f64, height: f64) {
    out.push('-');
    fmt_into(out, half_w);
    out.push_str(" -");
    fmt_into(out, half_h);
    out.push(' ');
    fmt_into(out, width);
    out.push(' ');
    fmt_into(out, height);
}
