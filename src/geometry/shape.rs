use std::any::Any;
use std::fmt::Debug;

use serde::Serialize;

use crate::geometry::{Geometry, GeometryCollection, LineString, Point};
use crate::visit::{
	Alternative, Append, Catalog, Collection, CollectionKind, Dynamic, DynamicKind, Element, Family, Result, VisitError, Visitor, VisitorMut,
};

/// Discriminant reported by a [`Shape`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeId {
	/// The value is a [`Point`].
	Point,
	/// The value is a [`LineString`].
	LineString,
	/// The value is a [`ShapeCollection`].
	Collection,
}

/// Object-safe geometry hierarchy that names its own concrete type.
pub trait Shape: Any + Debug {
	/// Discriminant of the concrete type.
	fn which(&self) -> ShapeId;
	/// Upcast for checked downcasting.
	fn as_any(&self) -> &dyn Any;
	/// Mutable upcast for checked downcasting.
	fn as_any_mut(&mut self) -> &mut dyn Any;
}

macro_rules! shape_impl {
	($($ty:ident => $id:ident),+ $(,)?) => {$(
		impl Shape for $ty {
			fn which(&self) -> ShapeId {
				ShapeId::$id
			}

			fn as_any(&self) -> &dyn Any {
				self
			}

			fn as_any_mut(&mut self) -> &mut dyn Any {
				self
			}
		}
	)+};
}

shape_impl!(Point => Point, LineString => LineString, ShapeCollection => Collection);

/// Owning handle to one shape.
#[derive(Debug)]
pub struct ShapeHandle(Box<dyn Shape>);

impl ShapeHandle {
	/// Box `value` behind a handle.
	pub fn new<G: Shape>(value: G) -> Self {
		Self(Box::new(value))
	}

	/// Discriminant of the held shape.
	pub fn which(&self) -> ShapeId {
		self.0.which()
	}
}

/// Ordered sequence of bare shape boxes.
#[derive(Debug, Default)]
pub struct ShapeCollection {
	/// Members in order.
	pub items: Vec<Box<dyn Shape>>,
}

fn resolve_shape<'a, V: Visitor<'a>>(shape: &'a dyn Shape, visitor: &mut V) -> Result<()> {
	let id = shape.which();
	let any = shape.as_any();
	match id {
		ShapeId::Point => visit_as::<Point, V>(any, visitor, id),
		ShapeId::LineString => visit_as::<LineString, V>(any, visitor, id),
		ShapeId::Collection => visit_as::<ShapeCollection, V>(any, visitor, id),
	}
}

fn resolve_shape_mut<'a, V: VisitorMut<'a>>(shape: &'a mut dyn Shape, visitor: &mut V) -> Result<()> {
	let id = shape.which();
	let any = shape.as_any_mut();
	match id {
		ShapeId::Point => visit_as_mut::<Point, V>(any, visitor, id),
		ShapeId::LineString => visit_as_mut::<LineString, V>(any, visitor, id),
		ShapeId::Collection => visit_as_mut::<ShapeCollection, V>(any, visitor, id),
	}
}

fn visit_as<'a, G: Element, V: Visitor<'a>>(any: &'a dyn Any, visitor: &mut V, id: ShapeId) -> Result<()> {
	let value = any.downcast_ref::<G>().ok_or_else(|| mismatch(id))?;
	visitor.visit(value);
	Ok(())
}

fn visit_as_mut<'a, G: Element, V: VisitorMut<'a>>(any: &'a mut dyn Any, visitor: &mut V, id: ShapeId) -> Result<()> {
	let value = any.downcast_mut::<G>().ok_or_else(|| mismatch(id))?;
	visitor.visit_mut(value);
	Ok(())
}

fn mismatch(id: ShapeId) -> VisitError {
	VisitError::InvalidDiscriminant {
		family: ShapeHandle::NAME,
		discriminant: format!("{id:?}"),
	}
}

const SHAPES: Catalog = Catalog::new(&[Alternative::of::<Point>(), Alternative::of::<LineString>(), Alternative::of::<ShapeCollection>()]);

const _: () = SHAPES.assert_nonempty();

impl Element for ShapeHandle {
	type Kind = DynamicKind;
	const NAME: &'static str = "ShapeHandle";
}

impl Family for ShapeHandle {
	const CATALOG: Catalog = SHAPES;
}

impl Dynamic for ShapeHandle {
	fn resolve<'a, V: Visitor<'a>>(&'a self, visitor: &mut V) -> Result<()> {
		resolve_shape(&*self.0, visitor)
	}

	fn resolve_mut<'a, V: VisitorMut<'a>>(&'a mut self, visitor: &mut V) -> Result<()> {
		resolve_shape_mut(&mut *self.0, visitor)
	}
}

impl Element for ShapeCollection {
	type Kind = CollectionKind;
	const NAME: &'static str = "ShapeCollection";
}

impl Family for ShapeCollection {
	const CATALOG: Catalog = SHAPES;
}

impl Collection for ShapeCollection {
	type Item = Box<dyn Shape>;

	fn items(&self) -> &[Box<dyn Shape>] {
		&self.items
	}

	fn items_mut(&mut self) -> &mut [Box<dyn Shape>] {
		&mut self.items
	}

	// Items are bare boxes, not handles: strip the box here.
	fn resolve_item<'a, V: Visitor<'a>>(item: &'a Box<dyn Shape>, visitor: &mut V) -> Result<()> {
		resolve_shape(&**item, visitor)
	}

	fn resolve_item_mut<'a, V: VisitorMut<'a>>(item: &'a mut Box<dyn Shape>, visitor: &mut V) -> Result<()> {
		resolve_shape_mut(&mut **item, visitor)
	}

	fn clear(&mut self) {
		self.items.clear();
	}
}

impl<G: Shape> Append<G> for ShapeCollection {
	fn append(&mut self, value: G) {
		self.items.push(Box::new(value));
	}
}

impl Append<ShapeHandle> for ShapeCollection {
	fn append(&mut self, value: ShapeHandle) {
		self.items.push(value.0);
	}
}

impl TryFrom<&Geometry> for ShapeHandle {
	type Error = VisitError;

	fn try_from(value: &Geometry) -> Result<Self> {
		match value {
			Geometry::Point(point) => Ok(Self::new(*point)),
			Geometry::LineString(line) => Ok(Self::new(line.clone())),
			Geometry::GeometryCollection(collection) => ShapeCollection::try_from(collection).map(Self::new),
			other => Err(VisitError::UnsupportedAlternative {
				family: Self::NAME,
				alternative: other.name(),
			}),
		}
	}
}

impl TryFrom<&GeometryCollection> for ShapeCollection {
	type Error = VisitError;

	fn try_from(value: &GeometryCollection) -> Result<Self> {
		let mut shapes = Self::default();
		for item in &value.items {
			shapes.append(ShapeHandle::try_from(item)?);
		}
		Ok(shapes)
	}
}

#[cfg(test)]
mod tests {
	use super::{ShapeCollection, ShapeHandle, ShapeId};
	use crate::geometry::{Geometry, GeometryCollection, LineString, Point, Polygon};
	use crate::test_support::Mislabeled;
	use crate::visit::{Dynamic, VisitError, Visited, VisitedMut, dispatch_one, dispatch_one_mut};

	#[test]
	fn which_selects_the_alternative() {
		let handle = ShapeHandle::new(LineString::default());
		assert_eq!(handle.which(), ShapeId::LineString);
		assert_eq!(handle.active().expect("active").0, 1);
	}

	#[test]
	fn mismatched_which_is_an_error_not_a_skip() {
		let mut handle = ShapeHandle::new(Mislabeled);
		let mut calls = 0;
		let result = dispatch_one(&mut |_: Visited<'_>| calls += 1, &handle);
		assert!(matches!(result, Err(VisitError::InvalidDiscriminant { family: "ShapeHandle", .. })));

		let result = dispatch_one_mut(&mut |_: VisitedMut<'_>| calls += 1, &mut handle);
		assert!(result.is_err());
		assert_eq!(calls, 0);
	}

	#[test]
	fn converts_supported_tagged_geometries() {
		let tagged = Geometry::from(GeometryCollection::from(vec![Geometry::from(Point::default()), Geometry::from(LineString::default())]));
		let handle = ShapeHandle::try_from(&tagged).expect("convertible");
		assert_eq!(handle.which(), ShapeId::Collection);

		let unsupported = GeometryCollection::from(vec![Geometry::from(Polygon::default())]);
		let result = ShapeCollection::try_from(&unsupported);
		assert!(matches!(
			result,
			Err(VisitError::UnsupportedAlternative {
				family: "ShapeHandle",
				alternative: "Polygon"
			})
		));
	}
}
