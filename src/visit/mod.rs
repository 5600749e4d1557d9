mod catalog;
mod dispatch;
mod element;
mod error;
pub(crate) mod kind;
mod mutate;
mod pair;
mod traverse;
mod visitor;

/// Type catalog entries.
pub use catalog::{Alternative, Catalog};
/// Single-value dispatch.
pub use dispatch::{dispatch_one, dispatch_one_mut};
/// Capability traits implemented by element families.
pub use element::{Append, Collection, Dynamic, Element, Family, Leaf};
/// Error and result types.
pub use error::{Result, VisitError};
/// Classification markers and the tag-dispatch table.
pub use kind::{Classify, CollectionKind, Direct, DynamicKind, Indirect, Kind, PlainKind, SideOf};
/// In-place mutation.
pub use mutate::{append, clear};
/// Pairwise dispatch.
pub use pair::{PairResolve, PairResolveMut, PairRule, PairRuleMut, dispatch_two, dispatch_two_mut, resolve_pair_nested, resolve_pair_nested_mut};
/// Breadth-first traversal.
pub use traverse::{Traversal, traverse_breadth_first, traverse_breadth_first_mut};
/// Callback protocol.
pub use visitor::{PairVisitor, PairVisitorMut, Visited, VisitedMut, Visitor, VisitorMut};
