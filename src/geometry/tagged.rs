use serde::{Deserialize, Serialize};

use crate::geometry::{LineString, MultiLineString, MultiPoint, MultiPolygon, Point, Polygon};
use crate::visit::{
	Alternative, Append, Catalog, Collection, CollectionKind, Dynamic, DynamicKind, Element, Family, Result, Visitor, VisitorMut, dispatch_one,
	dispatch_one_mut,
};

/// Closed tagged union over the geometry primitives and nested collections.
///
/// JSON form carries the alternative in a `"type"` field, e.g. `{"type":"point","x":1.0,"y":2.0}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Geometry {
	/// Single coordinate.
	Point(Point),
	/// Open polyline.
	LineString(LineString),
	/// Ring with holes.
	Polygon(Polygon),
	/// Point set.
	MultiPoint(MultiPoint),
	/// Polyline set.
	MultiLineString(MultiLineString),
	/// Polygon set.
	MultiPolygon(MultiPolygon),
	/// Nested collection of tagged geometries.
	GeometryCollection(GeometryCollection),
}

impl Geometry {
	/// Name of the active alternative.
	pub fn name(&self) -> &'static str {
		match self {
			Self::Point(_) => Point::NAME,
			Self::LineString(_) => LineString::NAME,
			Self::Polygon(_) => Polygon::NAME,
			Self::MultiPoint(_) => MultiPoint::NAME,
			Self::MultiLineString(_) => MultiLineString::NAME,
			Self::MultiPolygon(_) => MultiPolygon::NAME,
			Self::GeometryCollection(_) => GeometryCollection::NAME,
		}
	}
}

/// Ordered sequence of tagged geometries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeometryCollection {
	/// Members in order.
	pub items: Vec<Geometry>,
}

impl From<Vec<Geometry>> for GeometryCollection {
	fn from(items: Vec<Geometry>) -> Self {
		Self { items }
	}
}

macro_rules! tagged_alternatives {
	($($variant:ident),+ $(,)?) => {
		impl Family for Geometry {
			const CATALOG: Catalog = Catalog::new(&[$(Alternative::of::<$variant>()),+]);
		}

		impl Dynamic for Geometry {
			fn resolve<'a, V: Visitor<'a>>(&'a self, visitor: &mut V) -> Result<()> {
				match self {
					$(Self::$variant(value) => visitor.visit(value),)+
				}
				Ok(())
			}

			fn resolve_mut<'a, V: VisitorMut<'a>>(&'a mut self, visitor: &mut V) -> Result<()> {
				match self {
					$(Self::$variant(value) => visitor.visit_mut(value),)+
				}
				Ok(())
			}
		}

		$(
			impl From<$variant> for Geometry {
				fn from(value: $variant) -> Self {
					Self::$variant(value)
				}
			}
		)+
	};
}

tagged_alternatives!(Point, LineString, Polygon, MultiPoint, MultiLineString, MultiPolygon, GeometryCollection);

const _: () = Geometry::CATALOG.assert_nonempty();

impl Element for Geometry {
	type Kind = DynamicKind;
	const NAME: &'static str = "Geometry";
}

impl Element for GeometryCollection {
	type Kind = CollectionKind;
	const NAME: &'static str = "GeometryCollection";
}

impl Family for GeometryCollection {
	const CATALOG: Catalog = Geometry::CATALOG;
}

impl Collection for GeometryCollection {
	type Item = Geometry;

	fn items(&self) -> &[Geometry] {
		&self.items
	}

	fn items_mut(&mut self) -> &mut [Geometry] {
		&mut self.items
	}

	fn resolve_item<'a, V: Visitor<'a>>(item: &'a Geometry, visitor: &mut V) -> Result<()> {
		dispatch_one(visitor, item)
	}

	fn resolve_item_mut<'a, V: VisitorMut<'a>>(item: &'a mut Geometry, visitor: &mut V) -> Result<()> {
		dispatch_one_mut(visitor, item)
	}

	fn clear(&mut self) {
		self.items.clear();
	}
}

impl<G: Into<Geometry>> Append<G> for GeometryCollection {
	fn append(&mut self, value: G) {
		self.items.push(value.into());
	}
}

#[cfg(test)]
mod tests {
	use super::{Geometry, GeometryCollection};
	use crate::geometry::{LineString, Point, Polygon};
	use crate::visit::{Dynamic, Element, Kind};

	#[test]
	fn tagged_json_round_trips_through_type_field() {
		let text = r#"{"type":"geometry_collection","items":[{"type":"point","x":1.0,"y":2.0},{"type":"line_string","points":[]}]}"#;
		let value: Geometry = serde_json::from_str(text).expect("parse tagged geometry");
		let Geometry::GeometryCollection(collection) = &value else {
			panic!("expected a collection, got {value:?}");
		};
		assert_eq!(collection.items[0], Geometry::Point(Point::new(1.0, 2.0)));
		assert_eq!(collection.items[1].name(), "LineString");
	}

	#[test]
	fn active_matches_variant_position() {
		let value = Geometry::from(Polygon::default());
		let (index, alternative) = value.active().expect("active");
		assert_eq!(index, 2);
		assert_eq!(alternative.name, "Polygon");
		assert_eq!(alternative.kind, Kind::Plain);

		let nested = Geometry::from(GeometryCollection::default());
		assert_eq!(nested.active().expect("active").1.kind, Kind::Collection);
		assert_eq!(GeometryCollection::KIND, Kind::Collection);
		assert_eq!(Geometry::from(LineString::default()).name(), LineString::NAME);
	}
}
