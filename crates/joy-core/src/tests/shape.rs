use crate::*;
use serde_json::json;

#[test]
fn with_transform_does_not_mutate_the_receiver() {
    let c = Shape::new("circle").with_attr("r", 50);
    let moved = c.with_transform(Translate::new(100.0, 50.0));

    assert!(c.transform().is_none());
    assert_eq!(
        moved.effective_attributes().get("transform"),
        Some(&Some(AttrValue::from("translate(100 50)")))
    );
    assert!(c.effective_attributes().get("transform").is_none());
}

#[test]
fn newest_transform_is_rendered_first() {
    let s = Shape::new("rect")
        .apply(&Rotate::new(45.0))
        .apply(&Scale::uniform(2.0));
    assert_eq!(
        s.transform().map(Transformation::to_text).as_deref(),
        Some("scale(2 2) rotate(45)")
    );
}

#[test]
fn transform_attribute_is_synthesized_not_stored() {
    let s = Shape::new("rect").apply(&Translate::new(1.0, 2.0));
    assert!(s.attr("transform").is_none());
    assert!(s.attrs().get("transform").is_none());
}

#[test]
fn clones_share_children_but_not_attributes() {
    let g = Shape::group([Shape::new("circle"), Shape::new("rect")]);
    let mut copy = g.with_transform(Scale::uniform(2.0));

    let original_children = g.children().expect("group has children");
    let copied_children = copy.children().expect("copy has children");
    assert!(std::ptr::eq(original_children, copied_children));

    let registry = ReferenceRegistry::with_suffix("t");
    copy.get_or_assign_reference(&registry);
    assert_eq!(copy.id().as_deref(), Some("s-0-t"));
    assert_eq!(g.id(), None);
}

#[test]
fn reference_id_is_assigned_once() {
    let registry = ReferenceRegistry::with_suffix("t");
    let mut c = Shape::new("circle");

    let first = c.get_or_assign_reference(&registry);
    let second = c.get_or_assign_reference(&registry);

    assert_eq!(first, second);
    assert_eq!(first.tag(), "use");
    assert_eq!(first.attr("xlink:href"), Some(&AttrValue::from("#s-0-t")));
    assert_eq!(c.id().as_deref(), Some("s-0-t"));
    assert_eq!(registry.next_id(), "s-1-t");
}

#[test]
fn reference_reuses_a_user_supplied_id() {
    let registry = ReferenceRegistry::with_suffix("t");
    let mut c = Shape::new("circle").with_attr("id", "dot");
    let r = c.get_or_assign_reference(&registry);
    assert_eq!(r.attr("xlink:href"), Some(&AttrValue::from("#dot")));
    assert_eq!(registry.next_id(), "s-0-t");
}

#[test]
fn reference_reuses_a_numeric_id() {
    let registry = ReferenceRegistry::with_suffix("t");
    let mut c = Shape::new("circle").with_attr("id", 5);
    let r = c.get_or_assign_reference(&registry);
    assert_eq!(r.attr("xlink:href"), Some(&AttrValue::from("#5")));
    assert_eq!(c.id().as_deref(), Some("5"));
    assert_eq!(c.attr("id"), Some(&AttrValue::from(5)));
    assert_eq!(registry.next_id(), "s-0-t");
}

#[test]
fn combine_makes_a_flat_pair_in_argument_order() {
    let a = Shape::new("circle");
    let b = Shape::new("rect");
    let g = a.clone().combine(b.clone());

    assert!(g.is_group());
    assert_eq!(g.children(), Some(&[a, b][..]));
}

#[test]
fn chained_combine_nests_groups() {
    let g = Shape::new("a")
        .combine(Shape::new("b"))
        .combine(Shape::new("c"));
    let children = g.children().expect("group");
    assert_eq!(children.len(), 2);
    assert!(children[0].is_group());
    assert_eq!(children[1].tag(), "c");
}

#[test]
fn attribute_writes_are_last_wins_and_ordered() {
    let s = Shape::new("circle")
        .with_attr("cx", 0)
        .with_attr("r", 10)
        .with_attr("cx", 5);
    let keys: Vec<&str> = s.attrs().keys().map(String::as_str).collect();
    assert_eq!(keys, ["cx", "r"]);
    assert_eq!(s.attr("cx").and_then(AttrValue::as_f64), Some(5.0));
}

#[test]
fn none_attributes_are_kept_but_not_readable() {
    let s = Shape::new("circle").with_optional_attr("fill", None::<&str>);
    assert!(s.attrs().contains_key("fill"));
    assert!(s.attr("fill").is_none());
}

#[test]
fn serializes_as_flat_dictionary() {
    let s = Shape::group([Shape::new("circle").with_attr("r", 10)])
        .with_attr("stroke", "red")
        .apply(&Translate::new(1.0, 2.0));
    let value = serde_json::to_value(&s).expect("serialize");
    assert_eq!(
        value,
        json!({
            "stroke": "red",
            "transform": "translate(1 2)",
            "tag": "g",
            "children": [{"r": 10.0, "tag": "circle"}]
        })
    );
}

#[test]
fn empty_group_is_still_a_group() {
    let g = Shape::group(Vec::<Shape>::new());
    assert!(g.is_group());
    assert_eq!(g.children().map(<[Shape]>::len), Some(0));
}
