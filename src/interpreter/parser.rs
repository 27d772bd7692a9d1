/// Core parsing logic for expressions.
///
/// Contains the parser state, token cursor, precedence-climbing expression
/// parsing, primary and postfix expressions, and error recovery.
pub mod core;

/// Statement parsing.
///
/// Implements parsing for all statement forms: function definitions,
/// control flow, `return`, assignments, and expression statements.
pub mod statement;

/// Block parsing.
///
/// Parses indentation-delimited blocks: a newline, an `INDENT`, one or more
/// statements, and the matching `DEDENT`.
pub mod block;

/// Matrix literal parsing.
///
/// Parses `[ ... ]` literals with `,`-separated columns and `;`-separated
/// rows, validating that every row has the same number of columns.
pub mod matrix;

pub use core::{ParseResult, Parser};
