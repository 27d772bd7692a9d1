//! # dakota
//!
//! Dakota is a small, dynamically-typed scripting language for numeric and
//! matrix computation, with indentation-delimited blocks in the offside
//! style. This crate contains the complete language core: lexer, parser,
//! and tree-walking interpreter.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use std::io::Write;

use crate::{
    ast::Ast,
    error::{LexError, ParseError},
    interpreter::{
        evaluator::Interpreter,
        lexer::{Lexer, Token},
        parser::Parser,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the flat node arena and related types that
/// represent the syntactic structure of source code. The arena is built by
/// the parser and traversed by the evaluator; nodes reference each other by
/// index, and child lists are threaded through sibling links.
///
/// # Responsibilities
/// - Defines node kinds and payloads for all language constructs.
/// - Stores interned identifier and string-literal text.
/// - Attaches originating-token indices to nodes for error reporting.
pub mod ast;
/// Provides unified error types for lexing, parsing and evaluation.
///
/// This module defines all errors that can be raised while processing
/// source code. It standardizes error reporting and carries detailed
/// information about failures, including error kinds, descriptions, and
/// source locations for debugging and user feedback.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches line and column numbers where they are known.
/// - Supports integration with standard error handling traits and
///   reporting utilities.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, value
/// representations, environments, and error handling to provide a complete
/// runtime for source code execution. It exposes the building blocks the
/// crate-level entry points are assembled from.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and value
///   types.
/// - Provides entry points for tokenizing, parsing and executing user
///   code.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General utilities for safe numeric conversion and helpers.
///
/// This module provides reusable helpers and conversion routines that are
/// used throughout the evaluator and the built-in functions.
///
/// # Responsibilities
/// - Safely convert between `i64` and `usize` without silent data loss.
pub mod util;

/// Tokenizes source text with the default lexer configuration.
///
/// # Errors
/// Returns a [`LexError`] for malformed indentation, unterminated strings,
/// or unknown characters.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    Lexer::new().tokenize(source)
}

/// Parses a token stream into a syntax tree.
///
/// # Errors
/// Returns every [`ParseError`] recorded during the run; the parser
/// recovers at statement boundaries so multiple errors can be reported at
/// once.
pub fn parse(tokens: &[Token]) -> Result<Ast, Vec<ParseError>> {
    Parser::new(tokens).parse()
}

/// Runs a source string from start to finish.
///
/// This function tokenizes, parses and executes the provided source. When
/// parsing produces several errors only the first is returned; use
/// [`parse`] directly to collect all of them.
///
/// # Errors
/// Returns an error if lexing, parsing or any runtime operation fails.
///
/// # Examples
/// ```
/// use dakota::run_source;
///
/// // Simple program: assignment followed by arithmetic.
/// let res = run_source("x = 2 + 2\n");
/// assert!(res.is_ok());
///
/// // Example with an intentional error (unknown variable).
/// let res = run_source("y = x + 1\n"); // 'x' is not defined
/// assert!(res.is_err());
/// ```
pub fn run_source(source: &str) -> Result<(), Box<dyn std::error::Error>> {
    run_source_with_output(source, &mut std::io::stdout())
}

/// Runs a source string, sending everything the program prints to
/// `output`.
///
/// # Errors
/// Returns an error if lexing, parsing or any runtime operation fails.
pub fn run_source_with_output(source: &str,
                              output: &mut dyn Write)
                              -> Result<(), Box<dyn std::error::Error>> {
    let tokens = tokenize(source)?;

    let ast = match parse(&tokens) {
        Ok(ast) => ast,
        Err(errors) => {
            let first = errors.into_iter()
                              .next()
                              .unwrap_or(ParseError::UnexpectedEndOfInput { line:   0,
                                                                            column: 0, });
            return Err(Box::new(first));
        },
    };

    let mut interpreter = Interpreter::with_output(&ast, Box::new(output));
    interpreter.interpret()?;
    Ok(())
}
