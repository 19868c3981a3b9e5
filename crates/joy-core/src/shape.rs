use crate::attrs::{AttrValue, Attrs};
use crate::number;
use crate::registry::ReferenceRegistry;
use crate::transform::{Transform, Transformation};
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::sync::Arc;

/// Tag of the generic container element.
pub const GROUP_TAG: &str = "g";

/// One node of the shape tree, mapping 1:1 onto an SVG element.
///
/// Shapes behave as values: every derivation (`with_attr`, `with_transform`, `combine`, ...)
/// returns a new shape and leaves the receiver untouched. Clones copy the attribute map but share
/// the children list.
///
/// Trees can be nested very deeply (a repeat of `n` nests `n` groups), so dropping a shape
/// unlinks its descendants with an explicit work list instead of recursing.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    tag: String,
    attrs: Attrs,
    children: Option<Arc<Vec<Shape>>>,
    transform: Option<Transformation>,
}

impl Shape {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: Attrs::new(),
            children: None,
            transform: None,
        }
    }

    /// A container (`<g>`) holding `shapes` in order. Always has a (possibly empty) child list.
    pub fn group(shapes: impl IntoIterator<Item = Shape>) -> Self {
        Self::new(GROUP_TAG).with_children(shapes)
    }

    pub fn with_children(mut self, shapes: impl IntoIterator<Item = Shape>) -> Self {
        self.children = Some(Arc::new(shapes.into_iter().collect()));
        self
    }

    /// Sets an attribute. Later writes to the same name win.
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.attrs.insert(name.into(), Some(value.into()));
        self
    }

    /// Sets an attribute that may be absent. `None` values are kept in the map but never rendered.
    pub fn with_optional_attr(
        mut self,
        name: impl Into<String>,
        value: Option<impl Into<AttrValue>>,
    ) -> Self {
        self.attrs.insert(name.into(), value.map(Into::into));
        self
    }

    pub fn with_attrs<K, V>(mut self, attrs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<AttrValue>,
    {
        for (k, v) in attrs {
            self.attrs.insert(k.into(), Some(v.into()));
        }
        self
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn attrs(&self) -> &Attrs {
        &self.attrs
    }

    pub fn attr(&self, name: &str) -> Option<&AttrValue> {
        self.attrs.get(name).and_then(Option::as_ref)
    }

    /// The `id` attribute, whether it was given as text or as a number.
    pub fn id(&self) -> Option<String> {
        match self.attr("id")? {
            AttrValue::Text(s) => Some(s.clone()),
            AttrValue::Number(n) => Some(number::fmt(*n)),
        }
    }

    pub fn children(&self) -> Option<&[Shape]> {
        self.children.as_deref().map(Vec::as_slice)
    }

    pub fn is_group(&self) -> bool {
        self.tag == GROUP_TAG && self.children.is_some()
    }

    pub fn transform(&self) -> Option<&Transformation> {
        self.transform.as_ref()
    }

    /// Returns a copy with `t` applied after any transform already attached.
    pub fn with_transform(&self, t: impl Into<Transformation>) -> Shape {
        let t = t.into();
        let transform = match &self.transform {
            Some(existing) => existing.clone().and_then(t),
            None => t,
        };
        let mut shape = self.clone();
        shape.transform = Some(transform);
        shape
    }

    pub fn apply<T: Transform + ?Sized>(&self, t: &T) -> Shape {
        t.apply_to(self)
    }

    /// Attributes as rendered: the stored map plus a synthesized `transform` attribute.
    pub fn effective_attributes(&self) -> Attrs {
        let mut attrs = self.attrs.clone();
        if let Some(t) = &self.transform {
            attrs.insert("transform".to_string(), Some(AttrValue::Text(t.to_text())));
        }
        attrs
    }

    /// Returns a `<use>` node pointing at this shape, minting an `id` first if there is none.
    ///
    /// This is the only mutating operation on a shape. Repeated calls reuse the same id.
    pub fn get_or_assign_reference(&mut self, registry: &ReferenceRegistry) -> Shape {
        let id = match self.id() {
            Some(id) => id,
            None => {
                let id = registry.next_id();
                self.attrs
                    .insert("id".to_string(), Some(AttrValue::Text(id.clone())));
                id
            }
        };
        Shape::new("use").with_attr("xlink:href", format!("#{id}"))
    }

    /// A group holding exactly `self` and `other`, in that order.
    pub fn combine(self, other: Shape) -> Shape {
        Shape::group([self, other])
    }
}

impl Drop for Shape {
    fn drop(&mut self) {
        let Some(children) = self.children.take() else {
            return;
        };
        let mut pending = vec![children];
        while let Some(children) = pending.pop() {
            // Shared lists stay alive with their other owners.
            let Some(mut shapes) = Arc::into_inner(children) else {
                continue;
            };
            pending.extend(shapes.iter_mut().filter_map(|s| s.children.take()));
        }
    }
}

impl Serialize for Shape {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let attrs = self.effective_attributes();
        let children = self.children().filter(|c| !c.is_empty());
        let len = attrs.len() + 1 + usize::from(children.is_some());
        let mut map = serializer.serialize_map(Some(len))?;
        for (k, v) in &attrs {
            map.serialize_entry(k, v)?;
        }
        map.serialize_entry("tag", &self.tag)?;
        if let Some(children) = children {
            map.serialize_entry("children", children)?;
        }
        map.end()
    }
}
