use std::any::TypeId;

use tracing::debug;

use crate::visit::{Element, Kind, Result, VisitError};

/// One concrete type listed in a family catalog.
#[derive(Debug, Clone, Copy)]
pub struct Alternative {
	/// Element name.
	pub name: &'static str,
	/// Element classification.
	pub kind: Kind,
	type_id: fn() -> TypeId,
}

impl Alternative {
	/// Catalog entry for `G`.
	pub const fn of<G: Element>() -> Self {
		Self {
			name: G::NAME,
			kind: G::KIND,
			type_id: TypeId::of::<G>,
		}
	}

	/// Type identity of the listed element.
	pub fn type_id(&self) -> TypeId {
		(self.type_id)()
	}

	/// Whether this entry lists `G`.
	pub fn is<G: Element>(&self) -> bool {
		self.type_id() == TypeId::of::<G>()
	}
}

/// Ordered, fixed list of alternatives for one family.
#[derive(Debug, Clone, Copy)]
pub struct Catalog(&'static [Alternative]);

impl Catalog {
	/// Build a catalog from an ordered alternative list.
	pub const fn new(alternatives: &'static [Alternative]) -> Self {
		Self(alternatives)
	}

	/// Compile-time guard for family registrations; use in a `const _: () = ...;` item.
	pub const fn assert_nonempty(&self) {
		assert!(!self.0.is_empty(), "type catalog must list at least one alternative");
	}

	/// Listed alternatives in registration order.
	pub fn alternatives(&self) -> &'static [Alternative] {
		self.0
	}

	/// Number of alternatives.
	pub const fn len(&self) -> usize {
		self.0.len()
	}

	/// Whether the catalog lists nothing.
	pub const fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Position of the alternative with identity `type_id`.
	pub fn position(&self, type_id: TypeId) -> Option<usize> {
		self.0.iter().position(|item| item.type_id() == type_id)
	}

	/// Position and entry of the alternative with identity `type_id`.
	pub fn find(&self, type_id: TypeId) -> Option<(usize, &'static Alternative)> {
		self.position(type_id).map(|index| (index, &self.0[index]))
	}

	/// Whether `G` is listed.
	pub fn contains<G: Element>(&self) -> bool {
		self.position(TypeId::of::<G>()).is_some()
	}

	/// Alternative names in order.
	pub fn names(&self) -> impl Iterator<Item = &'static str> {
		self.0.iter().map(|item| item.name)
	}

	/// Reject empty catalogs and duplicate entries.
	pub fn validate(&self, family: &'static str) -> Result<()> {
		if self.0.is_empty() {
			return Err(VisitError::EmptyCatalog { family });
		}

		for (index, item) in self.0.iter().enumerate() {
			if self.0[..index].iter().any(|prev| prev.type_id() == item.type_id()) {
				return Err(VisitError::DuplicateAlternative { family, name: item.name });
			}
		}

		debug!(family, alternatives = self.0.len(), "type catalog validated");
		Ok(())
	}
}
