/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a stream of tokens,
/// each corresponding to meaningful language elements such as numbers,
/// identifiers, operators, delimiters, and keywords. Block structure is
/// made explicit here: the offside rule turns indentation changes into
/// `INDENT` and `DEDENT` tokens.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with type and source
///   location.
/// - Handles numeric and string literals, identifiers, and operators.
/// - Detects and enforces a consistent indentation discipline.
/// - Reports lexical errors for invalid or malformed input.
pub mod lexer;
/// The parser module builds the syntax tree from tokens.
///
/// The parser processes the token stream produced by the lexer and
/// constructs a flat, arena-allocated tree that represents the syntactic
/// structure of statements and expressions. This enables later phases to
/// analyze and execute user code without pointer chasing.
///
/// # Responsibilities
/// - Converts tokens into arena nodes (expressions, statements, blocks).
/// - Validates correct grammar and syntax, reporting errors with location
///   info and recovering at statement boundaries.
/// - Supports arithmetic, matrices, control flow, functions, and more.
pub mod parser;
/// The evaluator module executes syntax-tree nodes and computes results.
///
/// The evaluator traverses the arena, evaluates expressions and statements,
/// performs arithmetic and matrix operations, manages variable state, and
/// produces results. It is the core execution engine of the interpreter.
///
/// # Responsibilities
/// - Evaluates nodes, performing all supported operations.
/// - Handles variables, functions, closures, and control flow.
/// - Reports runtime errors such as division by zero or invalid operations.
pub mod evaluator;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares all the value types used during interpretation:
/// integers, floats, strings, booleans, dense matrices, and `none`. It also
/// provides type conversion, truthiness, and the canonical display
/// formatting.
///
/// # Responsibilities
/// - Defines the `Value` enum and all supported value variants.
/// - Implements the matrix type and its linear algebra.
/// - Provides the fixed-point float formatting used by `print`.
pub mod value;
/// The environment module implements lexically nested scopes.
///
/// Environments map names to values and chain through parent references.
/// Closures keep their defining scope alive, so scopes are shared and
/// reference-counted.
///
/// # Responsibilities
/// - Defines the scope chain and its lookup, definition, and assignment
///   rules.
/// - Keeps captured scopes alive for as long as any closure references
///   them.
pub mod env;
