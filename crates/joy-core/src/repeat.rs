use crate::error::{Error, Result};
use crate::registry::ReferenceRegistry;
use crate::shape::Shape;
use crate::transform::{Transform, Transformation};

/// Applies a transformation `n` times and combines the resulting copies.
///
/// The shape is emitted once inside `<defs>`; every copy is a `<use>` reference to it, so the
/// output grows linearly in `n` regardless of how large the shape is. Copy `k` (0-based) ends up
/// with the transformation applied `k` times through the nesting of the generated groups:
///
/// ```text
/// defs(S) + use + (use + (use + ...) | T) | T
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Repeat {
    n: usize,
    transformation: Transformation,
}

impl Repeat {
    pub fn new(n: i64, transformation: impl Into<Transformation>) -> Result<Self> {
        if n < 1 {
            return Err(Error::InvalidRepeatCount { n });
        }
        Ok(Self {
            n: n as usize,
            transformation: transformation.into(),
        })
    }

    pub fn count(&self) -> usize {
        self.n
    }

    pub fn transformation(&self) -> &Transformation {
        &self.transformation
    }

    /// Expands `shape`, minting reference ids from `registry`.
    pub fn apply_with(&self, shape: &Shape, registry: &ReferenceRegistry) -> Shape {
        let mut definition = shape.clone();
        let reference = definition.get_or_assign_reference(registry);
        tracing::debug!(
            n = self.n,
            id = definition.id().as_deref().unwrap_or_default(),
            transform = %self.transformation,
            "expanding repeat"
        );

        // Built inside-out: the innermost group holds the copies with the most applications.
        let mut acc = reference.clone();
        for _ in 1..self.n {
            acc = reference
                .clone()
                .combine(acc.with_transform(self.transformation.clone()));
        }

        let defs = Shape::new("defs").with_children([definition]);
        defs.combine(acc)
    }
}

impl Transform for Repeat {
    fn apply_to(&self, shape: &Shape) -> Shape {
        self.apply_with(shape, ReferenceRegistry::global())
    }
}
