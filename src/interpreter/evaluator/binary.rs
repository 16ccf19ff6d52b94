/// Integer arithmetic.
pub mod scalar;

/// Equality and ordering comparisons.
pub mod comparison;

/// Short-circuit `&` and `|`.
pub mod logic;
