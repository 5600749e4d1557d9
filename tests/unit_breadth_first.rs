#![allow(missing_docs)]

use dynvisit::geometry::{AnyCollection, AnyGeometry, Geometry, GeometryCollection, LineString, Point, ShapeCollection};
use dynvisit::visit::{Append, Visited, append, clear, dispatch_one, traverse_breadth_first};

fn flat_then_nested() -> GeometryCollection {
	let mut inner = GeometryCollection::default();
	append(&mut inner, Point::new(2.0, 0.0));
	append(&mut inner, Point::new(3.0, 0.0));
	append(&mut inner, LineString::default());

	let mut outer = GeometryCollection::default();
	append(&mut outer, LineString::default());
	append(&mut outer, Point::new(1.0, 0.0));
	append(&mut outer, inner);
	outer
}

fn visit_order<G: dynvisit::visit::Element>(root: &G) -> Vec<String> {
	let mut order = Vec::new();
	traverse_breadth_first(
		&mut |item: Visited<'_>| match item.downcast_ref::<Point>() {
			Some(point) => order.push(format!("P{}", point.x)),
			None => order.push("L".to_owned()),
		},
		root,
	)
	.expect("traversal succeeds");
	order
}

#[test]
fn outer_leaves_precede_nested_leaves() {
	assert_eq!(visit_order(&flat_then_nested()), ["L", "P1", "P2", "P3", "L"]);
	assert_eq!(visit_order(&AnyCollection::from(&flat_then_nested())), ["L", "P1", "P2", "P3", "L"]);
}

#[test]
fn erased_and_hierarchy_collections_accept_appends() {
	let mut erased = AnyCollection::default();
	erased.append(AnyGeometry::from(Point::new(1.0, 1.0)));
	erased.append(LineString::default());
	assert_eq!(visit_order(&erased), ["P1", "L"]);

	let mut shapes = ShapeCollection::default();
	shapes.append(Point::new(4.0, 0.0));
	assert_eq!(visit_order(&shapes), ["P4"]);
}

#[test]
fn clear_then_traverse_is_empty_for_dynamic_root() {
	let mut root = Geometry::from(flat_then_nested());
	clear(&mut root).expect("clear");
	assert!(visit_order(&root).is_empty());

	let mut calls = 0;
	dispatch_one(&mut |_: Visited<'_>| calls += 1, &root).expect("dispatch");
	assert_eq!(calls, 1, "cleared collection is still the active alternative");
}
