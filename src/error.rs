/// Lexing errors.
///
/// Defines all error types that can occur while turning source text into a
/// token stream. Lexing errors cover malformed indentation, mixed tabs and
/// spaces, unterminated string literals, and unknown characters.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while building the syntax tree from
/// tokens. Parse errors include unexpected tokens, missing delimiters,
/// inconsistent matrix rows, and malformed control flow or signatures.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation and execution.
/// Runtime errors include things like division by zero, type mismatches,
/// invalid operations, or failed numeric conversions.
pub mod runtime_error;

pub use lex_error::LexError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
