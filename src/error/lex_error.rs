#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while tokenizing source text.
pub enum LexError {
    /// A single line mixed tab and space characters in its indentation.
    MixedIndentation {
        /// The source line where the error occurred.
        line:   usize,
        /// The source column where the error occurred.
        column: usize,
    },
    /// A line used tabs under a spaces discipline, or vice versa.
    InconsistentIndentStyle {
        /// The source line where the error occurred.
        line:   usize,
        /// The source column where the error occurred.
        column: usize,
    },
    /// The first indented line used fewer than two spaces.
    IndentTooNarrow {
        /// The indentation width that was found.
        found:  usize,
        /// The source line where the error occurred.
        line:   usize,
        /// The source column where the error occurred.
        column: usize,
    },
    /// An indentation width was not a multiple of the detected base width.
    IndentNotMultiple {
        /// The detected base indentation width.
        base:   usize,
        /// The indentation width that was found.
        found:  usize,
        /// The source line where the error occurred.
        line:   usize,
        /// The source column where the error occurred.
        column: usize,
    },
    /// A dedent did not land on any enclosing indentation level.
    UnalignedDedent {
        /// The indentation width that was found.
        found:  usize,
        /// The source line where the error occurred.
        line:   usize,
        /// The source column where the error occurred.
        column: usize,
    },
    /// A string literal was opened but never closed.
    UnterminatedString {
        /// The source line where the string was opened.
        line:   usize,
        /// The source column where the string was opened.
        column: usize,
    },
    /// A character that is not part of the language was encountered.
    UnknownCharacter {
        /// The offending character.
        character: char,
        /// The source line where the error occurred.
        line:      usize,
        /// The source column where the error occurred.
        column:    usize,
    },
}

impl LexError {
    /// Gets the `(line, column)` position of the error.
    #[must_use]
    pub const fn position(&self) -> (usize, usize) {
        match self {
            Self::MixedIndentation { line, column }
            | Self::InconsistentIndentStyle { line, column }
            | Self::IndentTooNarrow { line, column, .. }
            | Self::IndentNotMultiple { line, column, .. }
            | Self::UnalignedDedent { line, column, .. }
            | Self::UnterminatedString { line, column }
            | Self::UnknownCharacter { line, column, .. } => (*line, *column),
        }
    }
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (line, column) = self.position();
        write!(f, "Lex Error at line {line}, column {column}: ")?;

        match self {
            Self::MixedIndentation { .. } => {
                write!(f, "Indentation mixes tabs and spaces on the same line.")
            },
            Self::InconsistentIndentStyle { .. } => write!(f,
                                                           "Indentation style is inconsistent with the rest of the file."),
            Self::IndentTooNarrow { found, .. } => write!(f,
                                                          "Indentation of {found} space(s) is too narrow; at least 2 are required."),
            Self::IndentNotMultiple { base, found, .. } => write!(f,
                                                                  "Indentation of {found} is not a multiple of the base width {base}."),
            Self::UnalignedDedent { found, .. } => write!(f,
                                                          "Dedent to width {found} does not match any enclosing indentation level."),
            Self::UnterminatedString { .. } => write!(f, "Unterminated string literal."),
            Self::UnknownCharacter { character, .. } => {
                write!(f, "Unknown character '{character}'.")
            },
        }
    }
}

impl std::error::Error for LexError {}
