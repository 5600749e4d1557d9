use std::any::Any;

use crate::visit::{Element, Kind};

/// Polymorphic callback over shared references.
///
/// `visit` is generic over the concrete element type, so one visitor serves every alternative of
/// every family. Closures taking a [`Visited`] implement this trait.
pub trait Visitor<'a> {
	/// Called with one concrete element.
	fn visit<G: Element>(&mut self, element: &'a G);
}

/// Polymorphic callback over mutable references.
///
/// Closures taking a [`VisitedMut`] implement this trait.
pub trait VisitorMut<'a> {
	/// Called with one concrete element.
	fn visit_mut<G: Element>(&mut self, element: &'a mut G);
}

/// Polymorphic binary callback used by pairwise dispatch.
///
/// Closures taking two [`Visited`] views implement this trait.
pub trait PairVisitor<'a> {
	/// Called with one concrete pair.
	fn visit_pair<A: Element, B: Element>(&mut self, left: &'a A, right: &'a B);
}

/// Polymorphic binary callback whose left element is mutable.
///
/// Closures taking a [`VisitedMut`] and a [`Visited`] view implement this trait.
pub trait PairVisitorMut<'a> {
	/// Called with one concrete pair.
	fn visit_pair_mut<A: Element, B: Element>(&mut self, left: &'a mut A, right: &'a B);
}

/// Type-erased view of a visited element.
#[derive(Clone, Copy)]
pub struct Visited<'a> {
	name: &'static str,
	kind: Kind,
	value: &'a dyn Any,
}

impl<'a> Visited<'a> {
	/// Erase a concrete element.
	pub fn of<G: Element>(element: &'a G) -> Self {
		Self {
			name: G::NAME,
			kind: G::KIND,
			value: element,
		}
	}

	/// Element name.
	pub fn name(&self) -> &'static str {
		self.name
	}

	/// Element classification.
	pub fn kind(&self) -> Kind {
		self.kind
	}

	/// Concrete element when it is a `T`.
	pub fn downcast_ref<T: Any>(&self) -> Option<&'a T> {
		self.value.downcast_ref::<T>()
	}
}

impl std::fmt::Debug for Visited<'_> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Visited").field("name", &self.name).field("kind", &self.kind).finish_non_exhaustive()
	}
}

/// Type-erased mutable view of a visited element.
pub struct VisitedMut<'a> {
	name: &'static str,
	kind: Kind,
	value: &'a mut dyn Any,
}

impl<'a> VisitedMut<'a> {
	/// Erase a concrete element.
	pub fn of<G: Element>(element: &'a mut G) -> Self {
		Self {
			name: G::NAME,
			kind: G::KIND,
			value: element,
		}
	}

	/// Element name.
	pub fn name(&self) -> &'static str {
		self.name
	}

	/// Element classification.
	pub fn kind(&self) -> Kind {
		self.kind
	}

	/// Concrete element when it is a `T`.
	pub fn downcast_mut<T: Any>(&mut self) -> Option<&mut T> {
		self.value.downcast_mut::<T>()
	}

	/// Concrete element for the full view lifetime when it is a `T`.
	pub fn into_mut<T: Any>(self) -> Option<&'a mut T> {
		self.value.downcast_mut::<T>()
	}
}

impl std::fmt::Debug for VisitedMut<'_> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("VisitedMut").field("name", &self.name).field("kind", &self.kind).finish_non_exhaustive()
	}
}

impl<'a, F> Visitor<'a> for F
where
	F: FnMut(Visited<'a>),
{
	fn visit<G: Element>(&mut self, element: &'a G) {
		(self)(Visited::of(element));
	}
}

impl<'a, F> VisitorMut<'a> for F
where
	F: FnMut(VisitedMut<'a>),
{
	fn visit_mut<G: Element>(&mut self, element: &'a mut G) {
		(self)(VisitedMut::of(element));
	}
}

impl<'a, F> PairVisitor<'a> for F
where
	F: FnMut(Visited<'a>, Visited<'a>),
{
	fn visit_pair<A: Element, B: Element>(&mut self, left: &'a A, right: &'a B) {
		(self)(Visited::of(left), Visited::of(right));
	}
}

impl<'a, F> PairVisitorMut<'a> for F
where
	F: FnMut(VisitedMut<'a>, Visited<'a>),
{
	fn visit_pair_mut<A: Element, B: Element>(&mut self, left: &'a mut A, right: &'a B) {
		(self)(VisitedMut::of(left), Visited::of(right));
	}
}
