use crate::visit::element::{Collection, Dynamic, Leaf};
use crate::visit::{Result, Traversal, Visitor, VisitorMut, mutate, traverse};

/// Runtime label of an element classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Kind {
	/// Single concrete type handed to callbacks as-is.
	Plain,
	/// Holds exactly one catalogued alternative behind a discriminant.
	Dynamic,
	/// Ordered sequence of dynamic values or nested collections.
	Collection,
}

/// Classification marker for plain leaf types.
#[derive(Debug)]
pub struct PlainKind;

/// Classification marker for dynamic-value families.
#[derive(Debug)]
pub struct DynamicKind;

/// Classification marker for collection families.
#[derive(Debug)]
pub struct CollectionKind;

/// Pair-dispatch side for values handed over as-is.
#[derive(Debug)]
pub struct Direct;

/// Pair-dispatch side for values that need a resolve step first.
#[derive(Debug)]
pub struct Indirect;

pub(crate) mod sealed {
	pub trait Sealed {}

	impl Sealed for super::PlainKind {}
	impl Sealed for super::DynamicKind {}
	impl Sealed for super::CollectionKind {}
	impl Sealed for (super::Direct, super::Direct) {}
	impl Sealed for (super::Direct, super::Indirect) {}
	impl Sealed for (super::Indirect, super::Direct) {}
	impl Sealed for (super::Indirect, super::Indirect) {}
}

/// Per-classification operation table for element type `G`.
///
/// Each marker implements this only for types carrying the matching capability trait, so an
/// `Element::Kind` that disagrees with the implemented capabilities fails to compile.
pub trait Classify<G>: sealed::Sealed {
	/// Runtime label of this classification.
	const KIND: Kind;
	/// Side used by the pairwise dispatch table.
	type Side;

	/// Hand `value` or its active alternative to `visitor`.
	fn dispatch<'a, V: Visitor<'a>>(value: &'a G, visitor: &mut V) -> Result<()>;
	/// Mutable counterpart of [`Classify::dispatch`].
	fn dispatch_mut<'a, V: VisitorMut<'a>>(value: &'a mut G, visitor: &mut V) -> Result<()>;
	/// Reset `value` to its empty state.
	fn clear(value: &mut G) -> Result<()>;
	/// Visit every leaf reachable from `value` in breadth-first order.
	fn breadth_first<'a, V: Visitor<'a>>(value: &'a G, visitor: &mut V, traversal: &mut Traversal) -> Result<()>;
	/// Mutable counterpart of [`Classify::breadth_first`].
	fn breadth_first_mut<'a, V: VisitorMut<'a>>(value: &'a mut G, visitor: &mut V, traversal: &mut Traversal) -> Result<()>;
}

impl<G: Leaf> Classify<G> for PlainKind {
	const KIND: Kind = Kind::Plain;
	type Side = Direct;

	fn dispatch<'a, V: Visitor<'a>>(value: &'a G, visitor: &mut V) -> Result<()> {
		visitor.visit(value);
		Ok(())
	}

	fn dispatch_mut<'a, V: VisitorMut<'a>>(value: &'a mut G, visitor: &mut V) -> Result<()> {
		visitor.visit_mut(value);
		Ok(())
	}

	fn clear(value: &mut G) -> Result<()> {
		value.reset();
		Ok(())
	}

	fn breadth_first<'a, V: Visitor<'a>>(value: &'a G, visitor: &mut V, traversal: &mut Traversal) -> Result<()> {
		traversal.record_leaf(0);
		visitor.visit(value);
		Ok(())
	}

	fn breadth_first_mut<'a, V: VisitorMut<'a>>(value: &'a mut G, visitor: &mut V, traversal: &mut Traversal) -> Result<()> {
		traversal.record_leaf(0);
		visitor.visit_mut(value);
		Ok(())
	}
}

impl<G: Dynamic> Classify<G> for DynamicKind {
	const KIND: Kind = Kind::Dynamic;
	type Side = Indirect;

	fn dispatch<'a, V: Visitor<'a>>(value: &'a G, visitor: &mut V) -> Result<()> {
		value.resolve(visitor)
	}

	fn dispatch_mut<'a, V: VisitorMut<'a>>(value: &'a mut G, visitor: &mut V) -> Result<()> {
		value.resolve_mut(visitor)
	}

	fn clear(value: &mut G) -> Result<()> {
		mutate::clear_active(value)
	}

	fn breadth_first<'a, V: Visitor<'a>>(value: &'a G, visitor: &mut V, traversal: &mut Traversal) -> Result<()> {
		traverse::descend(value, visitor, traversal)
	}

	fn breadth_first_mut<'a, V: VisitorMut<'a>>(value: &'a mut G, visitor: &mut V, traversal: &mut Traversal) -> Result<()> {
		traverse::descend_mut(value, visitor, traversal)
	}
}

impl<G: Collection> Classify<G> for CollectionKind {
	const KIND: Kind = Kind::Collection;
	type Side = Direct;

	fn dispatch<'a, V: Visitor<'a>>(value: &'a G, visitor: &mut V) -> Result<()> {
		visitor.visit(value);
		Ok(())
	}

	fn dispatch_mut<'a, V: VisitorMut<'a>>(value: &'a mut G, visitor: &mut V) -> Result<()> {
		visitor.visit_mut(value);
		Ok(())
	}

	fn clear(value: &mut G) -> Result<()> {
		value.clear();
		Ok(())
	}

	fn breadth_first<'a, V: Visitor<'a>>(value: &'a G, visitor: &mut V, traversal: &mut Traversal) -> Result<()> {
		traverse::drain(value, visitor, traversal)
	}

	fn breadth_first_mut<'a, V: VisitorMut<'a>>(value: &'a mut G, visitor: &mut V, traversal: &mut Traversal) -> Result<()> {
		traverse::drain_mut(value, visitor, traversal)
	}
}

/// Pair-dispatch side of element type `G`.
pub type SideOf<G> = <<G as crate::visit::Element>::Kind as Classify<G>>::Side;

