use crate::visit::{Classify, Element, Result, Visitor, VisitorMut};

/// Invoke `visitor` once on `value`, resolving one level of a dynamic value.
///
/// Plain and collection values are handed over directly. Nested dynamic values inside the resolved
/// alternative are not unwrapped further.
pub fn dispatch_one<'a, G: Element, V: Visitor<'a>>(visitor: &mut V, value: &'a G) -> Result<()> {
	<G::Kind as Classify<G>>::dispatch(value, visitor)
}

/// Mutable counterpart of [`dispatch_one`].
pub fn dispatch_one_mut<'a, G: Element, V: VisitorMut<'a>>(visitor: &mut V, value: &'a mut G) -> Result<()> {
	<G::Kind as Classify<G>>::dispatch_mut(value, visitor)
}

#[cfg(test)]
mod tests {
	use crate::geometry::{AnyGeometry, Geometry, GeometryCollection, LineString, Point, Polygon, ShapeHandle};
	use crate::visit::{Dynamic, Kind, Visited, VisitedMut, dispatch_one, dispatch_one_mut};

	#[test]
	fn plain_value_is_visited_directly() {
		let point = Point::new(1.0, 2.0);
		let mut seen = Vec::new();
		dispatch_one(&mut |item: Visited<'_>| seen.push((item.name(), item.kind())), &point).expect("dispatch succeeds");
		assert_eq!(seen, [("Point", Kind::Plain)]);
	}

	#[test]
	fn dynamic_value_resolves_to_active_alternative_once() {
		let value = Geometry::from(Polygon::default());
		let mut calls = 0;
		let mut payload_matches = false;
		dispatch_one(
			&mut |item: Visited<'_>| {
				calls += 1;
				payload_matches = item.downcast_ref::<Polygon>().is_some() && item.downcast_ref::<Point>().is_none();
			},
			&value,
		)
		.expect("dispatch succeeds");

		assert_eq!(calls, 1);
		assert!(payload_matches, "expected polygon payload");
	}

	#[test]
	fn dispatch_does_not_unwrap_nested_collections() {
		let value = Geometry::from(GeometryCollection::from(vec![Geometry::from(Point::default())]));
		let mut seen = Vec::new();
		dispatch_one(&mut |item: Visited<'_>| seen.push(item.name()), &value).expect("dispatch succeeds");
		assert_eq!(seen, ["GeometryCollection"]);
	}

	#[test]
	fn repeated_dispatch_is_idempotent() {
		let value = AnyGeometry::from(LineString::from(vec![Point::new(0.0, 0.0), Point::new(1.0, 1.0)]));
		let mut first = Vec::new();
		let mut second = Vec::new();
		dispatch_one(&mut |item: Visited<'_>| first.push(item.name()), &value).expect("first dispatch");
		dispatch_one(&mut |item: Visited<'_>| second.push(item.name()), &value).expect("second dispatch");

		assert_eq!(first, second);
		assert_eq!(value.active().expect("active").0, value.active().expect("active again").0);
	}

	#[test]
	fn mutable_dispatch_edits_active_alternative() {
		let mut value = ShapeHandle::new(Point::new(1.0, 1.0));
		dispatch_one_mut(
			&mut |item: VisitedMut<'_>| {
				if let Some(point) = item.into_mut::<Point>() {
					point.x = 5.0;
				}
			},
			&mut value,
		)
		.expect("dispatch succeeds");

		let mut x = None;
		dispatch_one(&mut |item: Visited<'_>| x = item.downcast_ref::<Point>().map(|point| point.x), &value).expect("dispatch succeeds");
		assert_eq!(x, Some(5.0));
	}
}
