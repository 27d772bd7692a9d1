/// Core evaluation logic.
///
/// Contains the interpreter state, statement execution, expression
/// evaluation, and the control-flow signal used to unwind `return`.
pub mod core;

/// Binary operator evaluation.
///
/// Implements evaluation for all binary operations, including arithmetic,
/// comparisons, logical operators, and matrix multiplication.
pub mod binary;

/// Unary operator evaluation.
///
/// Handles arithmetic negation and logical `not`.
pub mod unary;

/// Matrix construction and access.
///
/// Evaluates matrix literals, row access `m[i]`, and the matrix members
/// `.T`, `.d` and `.I`.
pub mod access;

/// Control-flow statements.
///
/// Executes `if`/`elif`/`else`, `while`, and `for` over matrix rows.
pub mod control;

/// Function calls.
///
/// Dispatches calls to built-in functions and user-defined functions, and
/// manages the scopes created on each invocation.
pub mod function;

pub use core::Interpreter;
