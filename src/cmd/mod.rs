/// Type catalog listing and validation command.
pub mod catalog;
/// Leaf counts before and after an in-place clear.
pub mod clear;
/// Family selection and geometry file loading.
pub mod family;
/// Pairwise dispatch command.
pub mod pair;
/// Shared output helpers.
pub mod util;
/// Breadth-first walk command.
pub mod walk;
