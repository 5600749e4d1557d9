use tracing::{debug, trace};

use crate::visit::{Append, Classify, Dynamic, Element, Result, VisitorMut};

/// Return `value` to its empty state in place.
///
/// Plain leaves use [`Leaf::reset`](crate::visit::Leaf::reset), dynamic values clear their active
/// alternative, collections drop every element. The active family never changes.
pub fn clear<G: Element>(value: &mut G) -> Result<()> {
	<G::Kind as Classify<G>>::clear(value)?;
	debug!(element = G::NAME, kind = ?G::KIND, "cleared value");
	Ok(())
}

/// Push `value` as the new last element of `collection`.
pub fn append<C: Append<G>, G>(collection: &mut C, value: G) {
	collection.append(value);
	trace!(collection = C::NAME, len = collection.len(), "appended element");
}

pub(crate) fn clear_active<G: Dynamic>(value: &mut G) -> Result<()> {
	let mut clearing = Clearing(Ok(()));
	value.resolve_mut(&mut clearing)?;
	clearing.0
}

struct Clearing(Result<()>);

impl<'a> VisitorMut<'a> for Clearing {
	fn visit_mut<G: Element>(&mut self, element: &'a mut G) {
		self.0 = <G::Kind as Classify<G>>::clear(element);
	}
}
