use std::any::Any;
use std::collections::VecDeque;

use tracing::{debug, trace};

use crate::visit::{Classify, Collection, Dynamic, Element, Kind, Result, VisitError, Visitor, VisitorMut, dispatch_one, dispatch_one_mut};

/// Leaf and expansion counters of one breadth-first traversal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Traversal {
	/// Leaf visits per nesting level; the root is level 0 and a root collection's items are level 1.
	pub levels: Vec<usize>,
	/// Nested collections queued and expanded below the root.
	pub collections: usize,
}

impl Traversal {
	/// Total leaf visits.
	pub fn leaves(&self) -> usize {
		self.levels.iter().sum()
	}

	/// Number of levels that were reached, counting the root level.
	pub fn depth(&self) -> usize {
		self.levels.len()
	}

	pub(crate) fn record_leaf(&mut self, level: usize) {
		if self.levels.len() <= level {
			self.levels.resize(level + 1, 0);
		}
		self.levels[level] += 1;
	}

	fn record_level(&mut self, level: usize) {
		if self.levels.len() <= level {
			self.levels.resize(level + 1, 0);
		}
	}
}

/// Visit every leaf reachable from `root`, shallower levels first.
///
/// Nested collections are queued and expanded only after the current collection is drained, so
/// every leaf at level `n` is visited before any leaf at level `n + 1`. Collections themselves are
/// never handed to `visitor`.
pub fn traverse_breadth_first<'a, G: Element, V: Visitor<'a>>(visitor: &mut V, root: &'a G) -> Result<Traversal> {
	let mut traversal = Traversal::default();
	<G::Kind as Classify<G>>::breadth_first(root, visitor, &mut traversal)?;
	debug!(
		root = G::NAME,
		leaves = traversal.leaves(),
		collections = traversal.collections,
		depth = traversal.depth(),
		"breadth-first traversal finished"
	);
	Ok(traversal)
}

/// Mutable counterpart of [`traverse_breadth_first`].
pub fn traverse_breadth_first_mut<'a, G: Element, V: VisitorMut<'a>>(visitor: &mut V, root: &'a mut G) -> Result<Traversal> {
	let mut traversal = Traversal::default();
	<G::Kind as Classify<G>>::breadth_first_mut(root, visitor, &mut traversal)?;
	debug!(
		root = G::NAME,
		leaves = traversal.leaves(),
		collections = traversal.collections,
		depth = traversal.depth(),
		"breadth-first traversal finished"
	);
	Ok(traversal)
}

/// Resolve a dynamic root and restart traversal on its alternative.
pub(crate) fn descend<'a, G: Dynamic, V: Visitor<'a>>(value: &'a G, visitor: &mut V, traversal: &mut Traversal) -> Result<()> {
	let mut root = Descend {
		visitor,
		traversal,
		outcome: Ok(()),
	};
	value.resolve(&mut root)?;
	root.outcome
}

pub(crate) fn descend_mut<'a, G: Dynamic, V: VisitorMut<'a>>(value: &'a mut G, visitor: &mut V, traversal: &mut Traversal) -> Result<()> {
	let mut root = Descend {
		visitor,
		traversal,
		outcome: Ok(()),
	};
	value.resolve_mut(&mut root)?;
	root.outcome
}

/// Drain `root` and every nested collection of the same type through a FIFO queue.
pub(crate) fn drain<'a, C: Collection, V: Visitor<'a>>(root: &'a C, visitor: &mut V, traversal: &mut Traversal) -> Result<()> {
	let mut queue: VecDeque<(&'a C, usize)> = VecDeque::new();
	let mut current = root.items().iter();
	let mut level = 1;

	loop {
		for item in current {
			let mut step = Level {
				visitor: &mut *visitor,
				queue: &mut queue,
				traversal: &mut *traversal,
				level,
				outcome: Ok(()),
			};
			C::resolve_item(item, &mut step)?;
			step.outcome?;
		}

		let Some((next, next_level)) = queue.pop_front() else {
			break;
		};
		current = next.items().iter();
		level = next_level;
	}

	Ok(())
}

pub(crate) fn drain_mut<'a, C: Collection, V: VisitorMut<'a>>(root: &'a mut C, visitor: &mut V, traversal: &mut Traversal) -> Result<()> {
	let mut queue: VecDeque<(&'a mut C, usize)> = VecDeque::new();
	let mut current = root.items_mut().iter_mut();
	let mut level = 1;

	loop {
		for item in current {
			let mut step = Level {
				visitor: &mut *visitor,
				queue: &mut queue,
				traversal: &mut *traversal,
				level,
				outcome: Ok(()),
			};
			C::resolve_item_mut(item, &mut step)?;
			step.outcome?;
		}

		let Some((next, next_level)) = queue.pop_front() else {
			break;
		};
		current = next.items_mut().iter_mut();
		level = next_level;
	}

	Ok(())
}

struct Descend<'v, V> {
	visitor: &'v mut V,
	traversal: &'v mut Traversal,
	outcome: Result<()>,
}

impl<'a, V: Visitor<'a>> Visitor<'a> for Descend<'_, V> {
	fn visit<G: Element>(&mut self, element: &'a G) {
		self.outcome = <G::Kind as Classify<G>>::breadth_first(element, self.visitor, self.traversal);
	}
}

impl<'a, V: VisitorMut<'a>> VisitorMut<'a> for Descend<'_, V> {
	fn visit_mut<G: Element>(&mut self, element: &'a mut G) {
		self.outcome = <G::Kind as Classify<G>>::breadth_first_mut(element, self.visitor, self.traversal);
	}
}

/// Per-item step: visit leaves now, defer nested collections to the queue.
struct Level<'q, V, R> {
	visitor: &'q mut V,
	queue: &'q mut VecDeque<(R, usize)>,
	traversal: &'q mut Traversal,
	level: usize,
	outcome: Result<()>,
}

impl<'q, V, R> Level<'q, V, R> {
	fn fail(&mut self, err: VisitError) {
		if self.outcome.is_ok() {
			self.outcome = Err(err);
		}
	}

	fn defer(&mut self, nested: R, name: &'static str) {
		trace!(collection = name, level = self.level + 1, "deferred nested collection");
		self.traversal.collections += 1;
		self.traversal.record_level(self.level + 1);
		self.queue.push_back((nested, self.level + 1));
	}
}

impl<'a, C: Collection, V: Visitor<'a>> Visitor<'a> for Level<'_, V, &'a C> {
	fn visit<G: Element>(&mut self, element: &'a G) {
		if self.outcome.is_err() {
			return;
		}

		match G::KIND {
			Kind::Plain => {
				self.traversal.record_leaf(self.level);
				self.visitor.visit(element);
			}
			Kind::Dynamic => {
				if let Err(err) = dispatch_one(self, element) {
					self.fail(err);
				}
			}
			Kind::Collection => match (element as &dyn Any).downcast_ref::<C>() {
				Some(nested) => self.defer(nested, G::NAME),
				None => self.fail(VisitError::ForeignCollection {
					expected: C::NAME,
					found: G::NAME,
				}),
			},
		}
	}
}

impl<'a, C: Collection, V: VisitorMut<'a>> VisitorMut<'a> for Level<'_, V, &'a mut C> {
	fn visit_mut<G: Element>(&mut self, element: &'a mut G) {
		if self.outcome.is_err() {
			return;
		}

		match G::KIND {
			Kind::Plain => {
				self.traversal.record_leaf(self.level);
				self.visitor.visit_mut(element);
			}
			Kind::Dynamic => {
				if let Err(err) = dispatch_one_mut(self, element) {
					self.fail(err);
				}
			}
			Kind::Collection => match (element as &mut dyn Any).downcast_mut::<C>() {
				Some(nested) => self.defer(nested, G::NAME),
				None => self.fail(VisitError::ForeignCollection {
					expected: C::NAME,
					found: G::NAME,
				}),
			},
		}
	}
}
