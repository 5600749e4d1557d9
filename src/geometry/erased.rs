use std::any::Any;
use std::fmt;

use crate::geometry::{Geometry, GeometryCollection, LineString, MultiLineString, MultiPoint, MultiPolygon, Point, Polygon};
use crate::visit::{
	Alternative, Append, Catalog, Collection, CollectionKind, Dynamic, DynamicKind, Element, Family, Result, VisitError, Visitor, VisitorMut, dispatch_one,
	dispatch_one_mut,
};

/// Type-erased geometry: any catalogued alternative behind a `Box<dyn Any>`.
///
/// The active alternative is found by trying each catalog entry in order.
pub struct AnyGeometry(Box<dyn Any>);

impl AnyGeometry {
	/// Wrap a raw box, rejecting types missing from the catalog.
	pub fn try_from_boxed(value: Box<dyn Any>) -> Result<Self> {
		match Self::CATALOG.position((*value).type_id()) {
			Some(_) => Ok(Self(value)),
			None => Err(VisitError::UnknownAlternative { family: Self::NAME }),
		}
	}
}

impl fmt::Debug for AnyGeometry {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let name = self.active().map_or("<unknown>", |(_, alternative)| alternative.name);
		f.debug_tuple("AnyGeometry").field(&name).finish()
	}
}

/// Ordered sequence of type-erased geometries.
#[derive(Debug, Default)]
pub struct AnyCollection {
	/// Members in order.
	pub items: Vec<AnyGeometry>,
}

macro_rules! erased_alternatives {
	($($ty:ident),+ $(,)?) => {
		impl Family for AnyGeometry {
			const CATALOG: Catalog = Catalog::new(&[$(Alternative::of::<$ty>()),+]);
		}

		impl Dynamic for AnyGeometry {
			fn resolve<'a, V: Visitor<'a>>(&'a self, visitor: &mut V) -> Result<()> {
				$(
					if let Some(value) = self.0.downcast_ref::<$ty>() {
						visitor.visit(value);
						return Ok(());
					}
				)+
				Err(VisitError::UnknownAlternative { family: Self::NAME })
			}

			fn resolve_mut<'a, V: VisitorMut<'a>>(&'a mut self, visitor: &mut V) -> Result<()> {
				$(
					if self.0.is::<$ty>() {
						return match self.0.downcast_mut::<$ty>() {
							Some(value) => {
								visitor.visit_mut(value);
								Ok(())
							}
							None => Err(VisitError::UnknownAlternative { family: Self::NAME }),
						};
					}
				)+
				Err(VisitError::UnknownAlternative { family: Self::NAME })
			}
		}

		$(
			impl From<$ty> for AnyGeometry {
				fn from(value: $ty) -> Self {
					Self(Box::new(value))
				}
			}

			impl Append<$ty> for AnyCollection {
				fn append(&mut self, value: $ty) {
					self.items.push(AnyGeometry::from(value));
				}
			}
		)+
	};
}

erased_alternatives!(Point, LineString, Polygon, MultiPoint, MultiLineString, MultiPolygon, AnyCollection);

const _: () = AnyGeometry::CATALOG.assert_nonempty();

impl Element for AnyGeometry {
	type Kind = DynamicKind;
	const NAME: &'static str = "AnyGeometry";
}

impl Element for AnyCollection {
	type Kind = CollectionKind;
	const NAME: &'static str = "AnyCollection";
}

impl Family for AnyCollection {
	const CATALOG: Catalog = AnyGeometry::CATALOG;
}

impl Collection for AnyCollection {
	type Item = AnyGeometry;

	fn items(&self) -> &[AnyGeometry] {
		&self.items
	}

	fn items_mut(&mut self) -> &mut [AnyGeometry] {
		&mut self.items
	}

	fn resolve_item<'a, V: Visitor<'a>>(item: &'a AnyGeometry, visitor: &mut V) -> Result<()> {
		dispatch_one(visitor, item)
	}

	fn resolve_item_mut<'a, V: VisitorMut<'a>>(item: &'a mut AnyGeometry, visitor: &mut V) -> Result<()> {
		dispatch_one_mut(visitor, item)
	}

	fn clear(&mut self) {
		self.items.clear();
	}
}

impl Append<AnyGeometry> for AnyCollection {
	fn append(&mut self, value: AnyGeometry) {
		self.items.push(value);
	}
}

impl From<&Geometry> for AnyGeometry {
	fn from(value: &Geometry) -> Self {
		match value {
			Geometry::Point(value) => Self::from(*value),
			Geometry::LineString(value) => Self::from(value.clone()),
			Geometry::Polygon(value) => Self::from(value.clone()),
			Geometry::MultiPoint(value) => Self::from(value.clone()),
			Geometry::MultiLineString(value) => Self::from(value.clone()),
			Geometry::MultiPolygon(value) => Self::from(value.clone()),
			Geometry::GeometryCollection(value) => Self::from(AnyCollection::from(value)),
		}
	}
}

impl From<&GeometryCollection> for AnyCollection {
	fn from(value: &GeometryCollection) -> Self {
		Self {
			items: value.items.iter().map(AnyGeometry::from).collect(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::{AnyCollection, AnyGeometry};
	use crate::geometry::{Geometry, GeometryCollection, LineString, Point, Polygon};
	use crate::visit::{Collection, Dynamic, VisitError, Visited, dispatch_one};

	#[test]
	fn resolves_by_ordered_downcast() {
		let value = AnyGeometry::from(Polygon::default());
		assert_eq!(value.active().expect("active").0, 2);

		let mut seen = Vec::new();
		dispatch_one(&mut |item: Visited<'_>| seen.push(item.name()), &value).expect("dispatch");
		assert_eq!(seen, ["Polygon"]);
	}

	#[test]
	fn rejects_uncatalogued_box() {
		let result = AnyGeometry::try_from_boxed(Box::new(42_u32));
		assert!(matches!(result, Err(VisitError::UnknownAlternative { family: "AnyGeometry" })));

		let value = AnyGeometry::try_from_boxed(Box::new(LineString::default())).expect("line string is catalogued");
		assert_eq!(value.active().expect("active").1.name, "LineString");
		assert_eq!(format!("{value:?}"), r#"AnyGeometry("LineString")"#);
	}

	#[test]
	fn converts_nested_tagged_collections() {
		let tagged = GeometryCollection::from(vec![
			Geometry::from(Point::new(1.0, 1.0)),
			Geometry::from(GeometryCollection::from(vec![Geometry::from(LineString::default())])),
		]);
		let erased = AnyCollection::from(&tagged);
		assert_eq!(erased.len(), 2);
		assert_eq!(erased.items[1].active().expect("active").1.name, "AnyCollection");
	}
}
