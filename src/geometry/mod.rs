use serde::{Deserialize, Serialize};

use crate::visit::{
	Element, Leaf, PairResolve, PairResolveMut, PairVisitor, PairVisitorMut, PlainKind, Result, resolve_pair_nested, resolve_pair_nested_mut,
};

mod erased;
mod figure;
mod shape;
mod tagged;

pub use erased::{AnyCollection, AnyGeometry};
pub use figure::{Figure, FigureCollection, FigureHandle, FigureVisitor, FigureVisitorMut};
pub use shape::{Shape, ShapeCollection, ShapeHandle, ShapeId};
pub use tagged::{Geometry, GeometryCollection};

/// Two-dimensional coordinate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
	/// Horizontal coordinate.
	pub x: f64,
	/// Vertical coordinate.
	pub y: f64,
}

impl Point {
	/// Point at `(x, y)`.
	pub const fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}
}

/// Open polyline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LineString {
	/// Vertices in order.
	pub points: Vec<Point>,
}

impl LineString {
	/// Number of vertices.
	pub fn len(&self) -> usize {
		self.points.len()
	}

	/// Whether the line has no vertices.
	pub fn is_empty(&self) -> bool {
		self.points.is_empty()
	}
}

impl From<Vec<Point>> for LineString {
	fn from(points: Vec<Point>) -> Self {
		Self { points }
	}
}

/// Polygon with one exterior ring and optional holes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Polygon {
	/// Outer ring.
	pub exterior: LineString,
	/// Holes.
	#[serde(default)]
	pub interiors: Vec<LineString>,
}

/// Unordered point set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MultiPoint {
	/// Member points.
	pub points: Vec<Point>,
}

/// Set of polylines.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MultiLineString {
	/// Member lines.
	pub lines: Vec<LineString>,
}

/// Set of polygons.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MultiPolygon {
	/// Member polygons.
	pub polygons: Vec<Polygon>,
}

macro_rules! plain_leaf {
	($($ty:ident => |$value:ident| $reset:expr;)+) => {
		$(
			impl Element for $ty {
				type Kind = PlainKind;
				const NAME: &'static str = stringify!($ty);
			}

			impl Leaf for $ty {
				fn reset(&mut self) {
					let $value = self;
					$reset;
				}
			}
		)+
	};
}

plain_leaf! {
	Point => |point| *point = Point::default();
	LineString => |line| line.points.clear();
	Polygon => |polygon| {
		polygon.exterior.points.clear();
		polygon.interiors.clear();
	};
	MultiPoint => |multi| multi.points.clear();
	MultiLineString => |multi| multi.lines.clear();
	MultiPolygon => |multi| multi.polygons.clear();
}

// Every pair of reference families resolves each side with its own adapter.
macro_rules! nested_pairs {
	($($left:ty => [$($right:ty),+]),+ $(,)?) => {$($(
		impl PairResolve<$right> for $left {
			fn resolve_pair<'a, V: PairVisitor<'a>>(&'a self, other: &'a $right, visitor: &mut V) -> Result<()> {
				resolve_pair_nested(self, other, visitor)
			}
		}

		impl PairResolveMut<$right> for $left {
			fn resolve_pair_mut<'a, V: PairVisitorMut<'a>>(&'a mut self, other: &'a $right, visitor: &mut V) -> Result<()> {
				resolve_pair_nested_mut(self, other, visitor)
			}
		}
	)+)+};
}

nested_pairs! {
	Geometry => [Geometry, AnyGeometry, ShapeHandle, FigureHandle],
	AnyGeometry => [Geometry, AnyGeometry, ShapeHandle, FigureHandle],
	ShapeHandle => [Geometry, AnyGeometry, ShapeHandle, FigureHandle],
	FigureHandle => [Geometry, AnyGeometry, ShapeHandle, FigureHandle],
}
