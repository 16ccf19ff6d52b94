/// Variable storage.
///
/// Defines the `Namespace` type, the flat insertion-ordered mapping from names
/// to values that every statement of a run reads and writes. Missing names
/// read as the integer zero.
pub mod namespace;

pub mod core;
