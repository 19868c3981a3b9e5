#![forbid(unsafe_code)]

//! Shape tree and transformation algebra for joy.
//!
//! Shapes are thin wrappers over SVG elements. Transformations are applied functionally: every
//! operation returns a new tree and leaves its inputs untouched. Rendering to SVG text lives in
//! `joy-render`.

pub mod attrs;
pub mod cycle;
pub mod error;
pub mod geom;
pub mod number;
pub mod registry;
pub mod repeat;
pub mod shape;
pub mod transform;

pub use attrs::{AttrValue, Attrs};
pub use cycle::Cycle;
pub use error::{Error, Result};
pub use geom::{Point, point};
pub use registry::ReferenceRegistry;
pub use repeat::Repeat;
pub use shape::{GROUP_TAG, Shape};
pub use transform::{Rotate, Scale, Transform, Transformation, TransformationList, Translate};

#[cfg(test)]
mod tests;
