/// Operator dispatch.
///
/// Routes a binary operation to the arithmetic, comparison, logical, or
/// matrix-multiplication handler for its operator.
pub mod core;

/// Arithmetic operators: `+ - * / % **`.
pub mod arith;

/// Comparison operators: `== != < <= > >=`.
pub mod comparison;

/// Logical operators: `and`, `or`.
pub mod logic;
