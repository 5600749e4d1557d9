use std::any::Any;

use crate::geometry::{
	AnyCollection, AnyGeometry, Figure, FigureCollection, FigureHandle, FigureVisitor, FigureVisitorMut, Geometry, GeometryCollection, LineString, Point,
	Shape, ShapeCollection, ShapeId,
};
use crate::visit::{Append, Element, Visited, traverse_breadth_first};

/// Shape whose `which()` claims to be a point while it is not one.
#[derive(Debug)]
pub(crate) struct Mislabeled;

impl Shape for Mislabeled {
	fn which(&self) -> ShapeId {
		ShapeId::Point
	}

	fn as_any(&self) -> &dyn Any {
		self
	}

	fn as_any_mut(&mut self) -> &mut dyn Any {
		self
	}
}

/// Figure whose `accept` never calls back.
#[derive(Debug)]
pub(crate) struct Silent;

impl Figure for Silent {
	fn accept<'a>(&'a self, _visitor: &mut dyn FigureVisitor<'a>) {}

	fn accept_mut<'a>(&'a mut self, _visitor: &mut dyn FigureVisitorMut<'a>) {}
}

/// Figure whose `accept` calls back once per held point.
#[derive(Debug)]
pub(crate) struct Twice(pub(crate) Point, pub(crate) Point);

impl Figure for Twice {
	fn accept<'a>(&'a self, visitor: &mut dyn FigureVisitor<'a>) {
		visitor.point(&self.0);
		visitor.point(&self.1);
	}

	fn accept_mut<'a>(&'a mut self, visitor: &mut dyn FigureVisitorMut<'a>) {
		visitor.point(&mut self.0);
		visitor.point(&mut self.1);
	}
}

pub(crate) fn line() -> LineString {
	LineString::from(vec![Point::new(0.0, 0.0), Point::new(1.0, 1.0)])
}

pub(crate) fn point(x: f64) -> Point {
	Point::new(x, 0.0)
}

/// Names of the visited leaves in traversal order.
pub(crate) fn leaf_names<G: Element>(root: &G) -> Vec<&'static str> {
	let mut names = Vec::new();
	traverse_breadth_first(&mut |item: Visited<'_>| names.push(item.name()), root).expect("traversal succeeds");
	names
}

pub(crate) fn count_leaves<G: Element>(root: &G) -> usize {
	leaf_names(root).len()
}

/// Point x coordinates in traversal order, `None` for other leaves.
pub(crate) fn point_xs<G: Element>(root: &G) -> Vec<Option<f64>> {
	let mut xs = Vec::new();
	traverse_breadth_first(&mut |item: Visited<'_>| xs.push(item.downcast_ref::<Point>().map(|point| point.x)), root).expect("traversal succeeds");
	xs
}

/// `[L, P(1), [P(2), P(3), L]]` in the tagged family.
pub(crate) fn nested_tagged() -> GeometryCollection {
	let inner = GeometryCollection::from(vec![Geometry::from(point(2.0)), Geometry::from(point(3.0)), Geometry::from(line())]);
	GeometryCollection::from(vec![Geometry::from(line()), Geometry::from(point(1.0)), Geometry::from(inner)])
}

/// `[L, P(1), [P(2), P(3), L]]` in the erased family.
pub(crate) fn nested_erased() -> AnyCollection {
	AnyCollection::from(&nested_tagged())
}

/// `[L, P(1), [P(2), P(3), L]]` in the shape family.
pub(crate) fn nested_shapes() -> ShapeCollection {
	let mut inner = ShapeCollection::default();
	inner.append(point(2.0));
	inner.append(point(3.0));
	inner.append(line());

	let mut outer = ShapeCollection::default();
	outer.append(line());
	outer.append(point(1.0));
	outer.append(inner);
	outer
}

/// `[L, P(1), [P(2), P(3), L]]` in the figure family.
pub(crate) fn nested_figures() -> FigureCollection {
	let mut inner = FigureCollection::default();
	inner.append(point(2.0));
	inner.append(point(3.0));
	inner.append(line());

	let mut outer = FigureCollection::default();
	outer.append(line());
	outer.append(point(1.0));
	outer.append(inner);
	outer
}

pub(crate) fn erased(value: impl Into<AnyGeometry>) -> AnyGeometry {
	value.into()
}

pub(crate) fn figure(value: impl crate::geometry::Figure) -> FigureHandle {
	FigureHandle::new(value)
}
