use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, VisitError>;

/// Errors produced while loading, dispatching over, and traversing dynamic values.
#[derive(Debug, Error)]
pub enum VisitError {
	/// Filesystem or stream IO failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// Geometry input could not be parsed.
	#[error("json: {0}")]
	Json(#[from] serde_json::Error),
	/// A discriminant named an alternative the stored value is not.
	#[error("{family}: discriminant {discriminant} does not match the stored value")]
	InvalidDiscriminant {
		/// Family whose value carried the discriminant.
		family: &'static str,
		/// Rendered discriminant.
		discriminant: String,
	},
	/// Type-erased value holds a type missing from the family catalog.
	#[error("{family}: stored value is not listed in the type catalog")]
	UnknownAlternative {
		/// Family whose catalog was searched.
		family: &'static str,
	},
	/// Family registered without alternatives.
	#[error("{family}: type catalog lists no alternatives")]
	EmptyCatalog {
		/// Family with the empty catalog.
		family: &'static str,
	},
	/// Family catalog lists one type twice.
	#[error("{family}: type catalog lists {name} more than once")]
	DuplicateAlternative {
		/// Family with the duplicate entry.
		family: &'static str,
		/// Duplicated alternative name.
		name: &'static str,
	},
	/// Breadth-first traversal met a nested collection of another type than its root.
	#[error("breadth-first traversal of {expected} reached a nested {found}")]
	ForeignCollection {
		/// Collection type the traversal was draining.
		expected: &'static str,
		/// Collection type that was found nested inside it.
		found: &'static str,
	},
	/// Conversion target family has no alternative for the source type.
	#[error("{family} has no alternative for {alternative}")]
	UnsupportedAlternative {
		/// Target family.
		family: &'static str,
		/// Source alternative name.
		alternative: &'static str,
	},
}
