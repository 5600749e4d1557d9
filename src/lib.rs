//! Public library API for dispatching over and traversing dynamic geometry values.

/// Geometry primitives and the reference dynamic-value families built on them.
pub mod geometry;
/// Classification, catalogs, dispatchers, breadth-first traversal, and mutation adapters.
pub mod visit;

#[cfg(test)]
mod test_support;
