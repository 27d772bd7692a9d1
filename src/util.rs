/// General utilities for safe numeric conversion.
///
/// This module provides conversion routines shared by the evaluator and the
/// built-in functions, chiefly converting user-supplied integers into sizes
/// and counts back into language-level integers without silent truncation.
pub mod num;
