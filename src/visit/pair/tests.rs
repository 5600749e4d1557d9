use crate::geometry::{AnyGeometry, FigureHandle, Geometry, GeometryCollection, LineString, MultiPoint, Point, Polygon, ShapeHandle};
use crate::visit::{Visited, VisitedMut, dispatch_one, dispatch_two, dispatch_two_mut};

fn pair_names<A, B>(left: &A, right: &B) -> Vec<(&'static str, &'static str)>
where
	A: crate::visit::Element,
	B: crate::visit::Element,
	(crate::visit::SideOf<A>, crate::visit::SideOf<B>): crate::visit::PairRule<A, B>,
{
	let mut seen = Vec::new();
	dispatch_two(&mut |a: Visited<'_>, b: Visited<'_>| seen.push((a.name(), b.name())), left, right).expect("pair dispatch succeeds");
	seen
}

#[test]
fn plain_pair_is_visited_directly() {
	assert_eq!(pair_names(&Point::default(), &LineString::default()), [("Point", "LineString")]);
}

#[test]
fn dynamic_left_resolves_left_only() {
	let left = Geometry::from(Polygon::default());
	assert_eq!(pair_names(&left, &Point::default()), [("Polygon", "Point")]);
}

#[test]
fn dynamic_right_resolves_right_only() {
	let right = AnyGeometry::from(MultiPoint::default());
	assert_eq!(pair_names(&LineString::default(), &right), [("LineString", "MultiPoint")]);
}

#[test]
fn collection_pairs_with_dynamic_without_unwrapping() {
	let left = GeometryCollection::default();
	let right = Geometry::from(Point::default());
	assert_eq!(pair_names(&left, &right), [("GeometryCollection", "Point")]);
}

#[test]
fn dynamic_pair_of_one_family_visits_once() {
	let left = Geometry::from(Point::new(1.0, 2.0));
	let right = Geometry::from(LineString::default());
	assert_eq!(pair_names(&left, &right), [("Point", "LineString")]);

	let left = ShapeHandle::new(LineString::default());
	let right = ShapeHandle::new(Point::default());
	assert_eq!(pair_names(&left, &right), [("LineString", "Point")]);

	let left = FigureHandle::new(Point::default());
	let right = FigureHandle::new(Point::default());
	assert_eq!(pair_names(&left, &right), [("Point", "Point")]);
}

#[test]
fn mixed_family_pair_keeps_each_side_with_its_own_adapter() {
	let left = Geometry::from(Point::new(3.0, 4.0));
	let right = AnyGeometry::from(LineString::from(vec![Point::new(0.0, 0.0)]));

	let mut payloads = Vec::new();
	dispatch_two(
		&mut |a: Visited<'_>, b: Visited<'_>| {
			payloads.push((a.downcast_ref::<Point>().copied(), b.downcast_ref::<LineString>().map(LineString::len)));
		},
		&left,
		&right,
	)
	.expect("pair dispatch succeeds");
	assert_eq!(payloads, [(Some(Point::new(3.0, 4.0)), Some(1))]);

	assert_eq!(pair_names(&right, &left), [("LineString", "Point")]);
}

#[test]
fn pair_dispatch_reports_invalid_discriminant() {
	let left = ShapeHandle::new(crate::test_support::Mislabeled);
	let right = ShapeHandle::new(Point::default());

	let mut calls = 0;
	let result = dispatch_two(&mut |_: Visited<'_>, _: Visited<'_>| calls += 1, &left, &right);
	assert!(matches!(result, Err(crate::visit::VisitError::InvalidDiscriminant { .. })));
	assert_eq!(calls, 0);
}

fn point_x<G: crate::visit::Element>(value: &G) -> Option<f64> {
	let mut x = None;
	dispatch_one(&mut |item: Visited<'_>| x = item.downcast_ref::<Point>().map(|point| point.x), value).expect("dispatch succeeds");
	x
}

// Moves the left point to the right line's vertex count.
fn stretch<'a>(left: VisitedMut<'a>, right: Visited<'a>) {
	let len = right.downcast_ref::<LineString>().map_or(0, LineString::len);
	if let Some(point) = left.into_mut::<Point>() {
		point.x = len as f64;
	}
}

#[test]
fn mutable_pair_edits_left_through_every_side_combination() {
	let line = LineString::from(vec![Point::default(), Point::default(), Point::default()]);

	let mut plain = Point::default();
	dispatch_two_mut(&mut stretch, &mut plain, &line).expect("plain pair");
	assert_eq!(plain.x, 3.0);

	let mut left = Geometry::from(Point::default());
	dispatch_two_mut(&mut stretch, &mut left, &line).expect("dynamic left");
	assert_eq!(point_x(&left), Some(3.0));

	let mut plain = Point::default();
	dispatch_two_mut(&mut stretch, &mut plain, &ShapeHandle::new(line.clone())).expect("dynamic right");
	assert_eq!(plain.x, 3.0);

	let mut left = FigureHandle::new(Point::default());
	let right = AnyGeometry::from(line);
	dispatch_two_mut(&mut stretch, &mut left, &right).expect("dynamic pair");
	assert_eq!(point_x(&left), Some(3.0));
}

#[test]
fn mutable_pair_dispatch_reports_invalid_discriminant() {
	let mut calls = 0;
	let mut left = ShapeHandle::new(crate::test_support::Mislabeled);
	let right = Geometry::from(Point::default());
	let result = dispatch_two_mut(&mut |_: VisitedMut<'_>, _: Visited<'_>| calls += 1, &mut left, &right);
	assert!(matches!(result, Err(crate::visit::VisitError::InvalidDiscriminant { .. })));

	let mut left = Geometry::from(Point::default());
	let right = FigureHandle::new(crate::test_support::Silent);
	let result = dispatch_two_mut(&mut |_: VisitedMut<'_>, _: Visited<'_>| calls += 1, &mut left, &right);
	assert!(result.is_err());
	assert_eq!(calls, 0);
}
