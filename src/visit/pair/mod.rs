use crate::visit::kind::{Direct, Indirect, SideOf, sealed::Sealed};
use crate::visit::{Dynamic, Element, PairVisitor, PairVisitorMut, Result, Visitor, VisitorMut};

/// Combined double-dispatch adapter for a pair of dynamic families.
///
/// Dynamic/dynamic pairs have no generic fallback: a pair of families participates in
/// [`dispatch_two`] only through an impl of this trait. [`resolve_pair_nested`] is a ready-made body
/// for families without a dedicated case table.
pub trait PairResolve<B: Dynamic>: Dynamic {
	/// Hand the active alternatives of `self` and `other` to `visitor` exactly once.
	fn resolve_pair<'a, V: PairVisitor<'a>>(&'a self, other: &'a B, visitor: &mut V) -> Result<()>;
}

/// One row of the pairwise dispatch table, selected by the sides of `A` and `B`.
pub trait PairRule<A, B>: Sealed {
	/// Resolve whichever side needs it and invoke `visitor` once.
	fn dispatch<'a, V: PairVisitor<'a>>(left: &'a A, right: &'a B, visitor: &mut V) -> Result<()>;
}

impl<A: Element, B: Element> PairRule<A, B> for (Direct, Direct) {
	fn dispatch<'a, V: PairVisitor<'a>>(left: &'a A, right: &'a B, visitor: &mut V) -> Result<()> {
		visitor.visit_pair(left, right);
		Ok(())
	}
}

impl<A: Dynamic, B: Element> PairRule<A, B> for (Indirect, Direct) {
	fn dispatch<'a, V: PairVisitor<'a>>(left: &'a A, right: &'a B, visitor: &mut V) -> Result<()> {
		left.resolve(&mut BindRight { right, visitor })
	}
}

impl<A: Element, B: Dynamic> PairRule<A, B> for (Direct, Indirect) {
	fn dispatch<'a, V: PairVisitor<'a>>(left: &'a A, right: &'a B, visitor: &mut V) -> Result<()> {
		right.resolve(&mut BindLeft { left, visitor })
	}
}

impl<A: PairResolve<B>, B: Dynamic> PairRule<A, B> for (Indirect, Indirect) {
	fn dispatch<'a, V: PairVisitor<'a>>(left: &'a A, right: &'a B, visitor: &mut V) -> Result<()> {
		left.resolve_pair(right, visitor)
	}
}

/// Invoke `visitor` once on the concrete pair behind `left` and `right`.
pub fn dispatch_two<'a, A, B, V>(visitor: &mut V, left: &'a A, right: &'a B) -> Result<()>
where
	A: Element,
	B: Element,
	V: PairVisitor<'a>,
	(SideOf<A>, SideOf<B>): PairRule<A, B>,
{
	<(SideOf<A>, SideOf<B>) as PairRule<A, B>>::dispatch(left, right, visitor)
}

/// Resolve `left` with its own family adapter, then `right` with its own, and visit the pair.
pub fn resolve_pair_nested<'a, A: Dynamic, B: Dynamic, V: PairVisitor<'a>>(left: &'a A, right: &'a B, visitor: &mut V) -> Result<()> {
	let mut outer = ResolveRight {
		right,
		visitor,
		outcome: Ok(()),
	};
	left.resolve(&mut outer)?;
	outer.outcome
}

/// Mutable-left counterpart of [`PairResolve`]: the left value is resolved mutably, the right shared.
pub trait PairResolveMut<B: Dynamic>: Dynamic {
	/// Hand the active alternatives of `self` and `other` to `visitor` exactly once.
	fn resolve_pair_mut<'a, V: PairVisitorMut<'a>>(&'a mut self, other: &'a B, visitor: &mut V) -> Result<()>;
}

/// Mutable-left row of the pairwise dispatch table.
pub trait PairRuleMut<A, B>: Sealed {
	/// Resolve whichever side needs it and invoke `visitor` once.
	fn dispatch_mut<'a, V: PairVisitorMut<'a>>(left: &'a mut A, right: &'a B, visitor: &mut V) -> Result<()>;
}

impl<A: Element, B: Element> PairRuleMut<A, B> for (Direct, Direct) {
	fn dispatch_mut<'a, V: PairVisitorMut<'a>>(left: &'a mut A, right: &'a B, visitor: &mut V) -> Result<()> {
		visitor.visit_pair_mut(left, right);
		Ok(())
	}
}

impl<A: Dynamic, B: Element> PairRuleMut<A, B> for (Indirect, Direct) {
	fn dispatch_mut<'a, V: PairVisitorMut<'a>>(left: &'a mut A, right: &'a B, visitor: &mut V) -> Result<()> {
		left.resolve_mut(&mut BindRightMut { right, visitor })
	}
}

impl<A: Element, B: Dynamic> PairRuleMut<A, B> for (Direct, Indirect) {
	fn dispatch_mut<'a, V: PairVisitorMut<'a>>(left: &'a mut A, right: &'a B, visitor: &mut V) -> Result<()> {
		right.resolve(&mut BindLeftMut { left: Some(left), visitor })
	}
}

impl<A: PairResolveMut<B>, B: Dynamic> PairRuleMut<A, B> for (Indirect, Indirect) {
	fn dispatch_mut<'a, V: PairVisitorMut<'a>>(left: &'a mut A, right: &'a B, visitor: &mut V) -> Result<()> {
		left.resolve_pair_mut(right, visitor)
	}
}

/// Invoke `visitor` once on the concrete pair behind a mutable `left` and a shared `right`.
pub fn dispatch_two_mut<'a, A, B, V>(visitor: &mut V, left: &'a mut A, right: &'a B) -> Result<()>
where
	A: Element,
	B: Element,
	V: PairVisitorMut<'a>,
	(SideOf<A>, SideOf<B>): PairRuleMut<A, B>,
{
	<(SideOf<A>, SideOf<B>) as PairRuleMut<A, B>>::dispatch_mut(left, right, visitor)
}

/// Mutable-left counterpart of [`resolve_pair_nested`].
pub fn resolve_pair_nested_mut<'a, A: Dynamic, B: Dynamic, V: PairVisitorMut<'a>>(left: &'a mut A, right: &'a B, visitor: &mut V) -> Result<()> {
	let mut outer = ResolveRightMut {
		right,
		visitor,
		outcome: Ok(()),
	};
	left.resolve_mut(&mut outer)?;
	outer.outcome
}

struct BindLeft<'v, 'a, A, V> {
	left: &'a A,
	visitor: &'v mut V,
}

impl<'a, A: Element, V: PairVisitor<'a>> Visitor<'a> for BindLeft<'_, 'a, A, V> {
	fn visit<G: Element>(&mut self, right: &'a G) {
		self.visitor.visit_pair(self.left, right);
	}
}

struct BindRight<'v, 'a, B, V> {
	right: &'a B,
	visitor: &'v mut V,
}

impl<'a, B: Element, V: PairVisitor<'a>> Visitor<'a> for BindRight<'_, 'a, B, V> {
	fn visit<G: Element>(&mut self, left: &'a G) {
		self.visitor.visit_pair(left, self.right);
	}
}

struct ResolveRight<'v, 'a, B, V> {
	right: &'a B,
	visitor: &'v mut V,
	outcome: Result<()>,
}

impl<'a, B: Dynamic, V: PairVisitor<'a>> Visitor<'a> for ResolveRight<'_, 'a, B, V> {
	fn visit<G: Element>(&mut self, left: &'a G) {
		let mut inner = BindLeft {
			left,
			visitor: &mut *self.visitor,
		};
		self.outcome = self.right.resolve(&mut inner);
	}
}

// Holds the left value until the right side resolves; a resolve visits at most once.
struct BindLeftMut<'v, 'a, A, V> {
	left: Option<&'a mut A>,
	visitor: &'v mut V,
}

impl<'a, A: Element, V: PairVisitorMut<'a>> Visitor<'a> for BindLeftMut<'_, 'a, A, V> {
	fn visit<G: Element>(&mut self, right: &'a G) {
		if let Some(left) = self.left.take() {
			self.visitor.visit_pair_mut(left, right);
		}
	}
}

struct BindRightMut<'v, 'a, B, V> {
	right: &'a B,
	visitor: &'v mut V,
}

impl<'a, B: Element, V: PairVisitorMut<'a>> VisitorMut<'a> for BindRightMut<'_, 'a, B, V> {
	fn visit_mut<G: Element>(&mut self, left: &'a mut G) {
		self.visitor.visit_pair_mut(left, self.right);
	}
}

struct ResolveRightMut<'v, 'a, B, V> {
	right: &'a B,
	visitor: &'v mut V,
	outcome: Result<()>,
}

impl<'a, B: Dynamic, V: PairVisitorMut<'a>> VisitorMut<'a> for ResolveRightMut<'_, 'a, B, V> {
	fn visit_mut<G: Element>(&mut self, left: &'a mut G) {
		let mut inner = BindLeftMut {
			left: Some(left),
			visitor: &mut *self.visitor,
		};
		self.outcome = self.right.resolve(&mut inner);
	}
}

#[cfg(test)]
mod tests;
