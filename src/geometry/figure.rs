use std::any::Any;
use std::fmt::Debug;

use crate::geometry::{Geometry, GeometryCollection, LineString, Point};
use crate::visit::{
	Alternative, Append, Catalog, Collection, CollectionKind, Dynamic, DynamicKind, Element, Family, Result, VisitError, Visitor, VisitorMut, dispatch_one,
	dispatch_one_mut,
};

/// Object-safe callback with one method per figure alternative.
pub trait FigureVisitor<'a> {
	/// Called for a point figure.
	fn point(&mut self, point: &'a Point);
	/// Called for a line string figure.
	fn line_string(&mut self, line: &'a LineString);
	/// Called for a nested figure collection.
	fn collection(&mut self, collection: &'a FigureCollection);
}

/// Mutable counterpart of [`FigureVisitor`].
pub trait FigureVisitorMut<'a> {
	/// Called for a point figure.
	fn point(&mut self, point: &'a mut Point);
	/// Called for a line string figure.
	fn line_string(&mut self, line: &'a mut LineString);
	/// Called for a nested figure collection.
	fn collection(&mut self, collection: &'a mut FigureCollection);
}

/// Geometry hierarchy that selects its alternative through a virtual `accept`.
pub trait Figure: Any + Debug {
	/// Call the visitor method matching the concrete type.
	fn accept<'a>(&'a self, visitor: &mut dyn FigureVisitor<'a>);
	/// Mutable counterpart of [`Figure::accept`].
	fn accept_mut<'a>(&'a mut self, visitor: &mut dyn FigureVisitorMut<'a>);
}

macro_rules! figure_impl {
	($($ty:ident => $method:ident),+ $(,)?) => {$(
		impl Figure for $ty {
			fn accept<'a>(&'a self, visitor: &mut dyn FigureVisitor<'a>) {
				visitor.$method(self);
			}

			fn accept_mut<'a>(&'a mut self, visitor: &mut dyn FigureVisitorMut<'a>) {
				visitor.$method(self);
			}
		}
	)+};
}

figure_impl!(Point => point, LineString => line_string, FigureCollection => collection);

/// Adapts a generic visitor to the per-alternative figure callbacks.
///
/// Only the first callback reaches the visitor; `calls` records how many `accept` made.
struct Bridge<'v, V> {
	visitor: &'v mut V,
	calls: usize,
}

impl<'v, V> Bridge<'v, V> {
	fn new(visitor: &'v mut V) -> Self {
		Self { visitor, calls: 0 }
	}

	fn first(&mut self) -> bool {
		self.calls += 1;
		self.calls == 1
	}

	fn finish(self) -> Result<()> {
		if self.calls == 1 {
			return Ok(());
		}
		Err(VisitError::InvalidDiscriminant {
			family: FigureHandle::NAME,
			discriminant: format!("accept made {} visitor calls", self.calls),
		})
	}
}

impl<'a, V: Visitor<'a>> FigureVisitor<'a> for Bridge<'_, V> {
	fn point(&mut self, point: &'a Point) {
		if self.first() {
			self.visitor.visit(point);
		}
	}

	fn line_string(&mut self, line: &'a LineString) {
		if self.first() {
			self.visitor.visit(line);
		}
	}

	fn collection(&mut self, collection: &'a FigureCollection) {
		if self.first() {
			self.visitor.visit(collection);
		}
	}
}

impl<'a, V: VisitorMut<'a>> FigureVisitorMut<'a> for Bridge<'_, V> {
	fn point(&mut self, point: &'a mut Point) {
		if self.first() {
			self.visitor.visit_mut(point);
		}
	}

	fn line_string(&mut self, line: &'a mut LineString) {
		if self.first() {
			self.visitor.visit_mut(line);
		}
	}

	fn collection(&mut self, collection: &'a mut FigureCollection) {
		if self.first() {
			self.visitor.visit_mut(collection);
		}
	}
}

/// Owning handle to one figure.
#[derive(Debug)]
pub struct FigureHandle(Box<dyn Figure>);

impl FigureHandle {
	/// Box `value` behind a handle.
	pub fn new<G: Figure>(value: G) -> Self {
		Self(Box::new(value))
	}
}

/// Ordered sequence of figure handles.
#[derive(Debug, Default)]
pub struct FigureCollection {
	/// Members in order.
	pub items: Vec<FigureHandle>,
}

impl Element for FigureHandle {
	type Kind = DynamicKind;
	const NAME: &'static str = "FigureHandle";
}

impl Family for FigureHandle {
	const CATALOG: Catalog = Catalog::new(&[Alternative::of::<Point>(), Alternative::of::<LineString>(), Alternative::of::<FigureCollection>()]);
}

const _: () = FigureHandle::CATALOG.assert_nonempty();

impl Dynamic for FigureHandle {
	fn resolve<'a, V: Visitor<'a>>(&'a self, visitor: &mut V) -> Result<()> {
		let mut bridge = Bridge::new(visitor);
		self.0.accept(&mut bridge);
		bridge.finish()
	}

	fn resolve_mut<'a, V: VisitorMut<'a>>(&'a mut self, visitor: &mut V) -> Result<()> {
		let mut bridge = Bridge::new(visitor);
		self.0.accept_mut(&mut bridge);
		bridge.finish()
	}
}

impl Element for FigureCollection {
	type Kind = CollectionKind;
	const NAME: &'static str = "FigureCollection";
}

impl Family for FigureCollection {
	const CATALOG: Catalog = FigureHandle::CATALOG;
}

impl Collection for FigureCollection {
	type Item = FigureHandle;

	fn items(&self) -> &[FigureHandle] {
		&self.items
	}

	fn items_mut(&mut self) -> &mut [FigureHandle] {
		&mut self.items
	}

	fn resolve_item<'a, V: Visitor<'a>>(item: &'a FigureHandle, visitor: &mut V) -> Result<()> {
		dispatch_one(visitor, item)
	}

	fn resolve_item_mut<'a, V: VisitorMut<'a>>(item: &'a mut FigureHandle, visitor: &mut V) -> Result<()> {
		dispatch_one_mut(visitor, item)
	}

	fn clear(&mut self) {
		self.items.clear();
	}
}

impl<G: Figure> Append<G> for FigureCollection {
	fn append(&mut self, value: G) {
		self.items.push(FigureHandle::new(value));
	}
}

impl Append<FigureHandle> for FigureCollection {
	fn append(&mut self, value: FigureHandle) {
		self.items.push(value);
	}
}

impl TryFrom<&Geometry> for FigureHandle {
	type Error = VisitError;

	fn try_from(value: &Geometry) -> Result<Self> {
		match value {
			Geometry::Point(point) => Ok(Self::new(*point)),
			Geometry::LineString(line) => Ok(Self::new(line.clone())),
			Geometry::GeometryCollection(collection) => FigureCollection::try_from(collection).map(Self::new),
			other => Err(VisitError::UnsupportedAlternative {
				family: Self::NAME,
				alternative: other.name(),
			}),
		}
	}
}

impl TryFrom<&GeometryCollection> for FigureCollection {
	type Error = VisitError;

	fn try_from(value: &GeometryCollection) -> Result<Self> {
		let items = value.items.iter().map(FigureHandle::try_from).collect::<Result<_>>()?;
		Ok(Self { items })
	}
}
