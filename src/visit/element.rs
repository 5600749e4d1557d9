use std::any::{Any, TypeId};

use crate::visit::{Catalog, Classify, Kind, Result, VisitError, Visitor, VisitorMut};

/// Any type the engine can hand to a callback.
pub trait Element: Any + Sized {
	/// Classification marker: [`PlainKind`](crate::visit::PlainKind),
	/// [`DynamicKind`](crate::visit::DynamicKind) or [`CollectionKind`](crate::visit::CollectionKind).
	type Kind: Classify<Self>;

	/// Name used in diagnostics and visit records.
	const NAME: &'static str;

	/// Runtime label of [`Element::Kind`].
	const KIND: Kind = <Self::Kind as Classify<Self>>::KIND;
}

/// Plain leaf type with a native reset.
pub trait Leaf: Element {
	/// Return the value to its empty or zero state.
	fn reset(&mut self);
}

/// Dynamic-value or collection family with a type catalog.
pub trait Family: Element {
	/// Alternatives reachable from this family by one dispatch step.
	const CATALOG: Catalog;
}

/// Dynamic-value family: exactly one catalogued alternative is active at a time.
pub trait Dynamic: Family {
	/// Hand the active alternative to `visitor` exactly once.
	fn resolve<'a, V: Visitor<'a>>(&'a self, visitor: &mut V) -> Result<()>;

	/// Hand the active alternative to `visitor` mutably, exactly once.
	fn resolve_mut<'a, V: VisitorMut<'a>>(&'a mut self, visitor: &mut V) -> Result<()>;

	/// Catalog position and entry of the active alternative.
	fn active(&self) -> Result<(usize, &'static crate::visit::Alternative)> {
		let mut probe = Probe(None);
		self.resolve(&mut probe)?;
		probe
			.0
			.and_then(|type_id| Self::CATALOG.find(type_id))
			.ok_or(VisitError::UnknownAlternative { family: Self::NAME })
	}
}

/// Collection family: ordered storage of dynamic values, handles, or nested collections.
pub trait Collection: Family {
	/// Stored element type.
	type Item;

	/// Stored elements in order.
	fn items(&self) -> &[Self::Item];

	/// Stored elements in order, mutably.
	fn items_mut(&mut self) -> &mut [Self::Item];

	/// Hand the concrete value behind one stored element to `visitor`.
	fn resolve_item<'a, V: Visitor<'a>>(item: &'a Self::Item, visitor: &mut V) -> Result<()>;

	/// Hand the concrete value behind one stored element to `visitor` mutably.
	fn resolve_item_mut<'a, V: VisitorMut<'a>>(item: &'a mut Self::Item, visitor: &mut V) -> Result<()>;

	/// Remove every element.
	fn clear(&mut self);

	/// Number of stored elements.
	fn len(&self) -> usize {
		self.items().len()
	}

	/// Whether no element is stored.
	fn is_empty(&self) -> bool {
		self.items().is_empty()
	}
}

/// Collection able to store a value of type `G` as a new last element.
pub trait Append<G>: Collection {
	/// Wrap `value` as the family's storage needs and push it.
	fn append(&mut self, value: G);
}

struct Probe(Option<TypeId>);

impl<'a> Visitor<'a> for Probe {
	fn visit<G: Element>(&mut self, _element: &'a G) {
		self.0 = Some(TypeId::of::<G>());
	}
}
