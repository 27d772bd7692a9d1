#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while parsing a token stream.
pub enum ParseError {
    /// Found a token that does not fit the grammar at this point.
    UnexpectedToken {
        /// A description of the token encountered.
        found:  String,
        /// The source line where the error occurred.
        line:   usize,
        /// The source column where the error occurred.
        column: usize,
    },
    /// Reached the end of input while a construct was still open.
    UnexpectedEndOfInput {
        /// The source line where the error occurred.
        line:   usize,
        /// The source column where the error occurred.
        column: usize,
    },
    /// A specific delimiter or keyword was required but not found.
    ExpectedToken {
        /// A description of what was expected.
        expected: String,
        /// A description of the token encountered instead.
        found:    String,
        /// The source line where the error occurred.
        line:     usize,
        /// The source column where the error occurred.
        column:   usize,
    },
    /// A matrix literal's rows did not all have the same number of columns.
    InconsistentMatrixRows {
        /// The column count of the first row.
        expected: usize,
        /// The column count of the offending row.
        found:    usize,
        /// The source line where the error occurred.
        line:     usize,
        /// The source column where the error occurred.
        column:   usize,
    },
    /// An expression was required but something else was found.
    ExpectedExpression {
        /// A description of the token encountered.
        found:  String,
        /// The source line where the error occurred.
        line:   usize,
        /// The source column where the error occurred.
        column: usize,
    },
}

impl ParseError {
    /// Gets the `(line, column)` position of the error.
    #[must_use]
    pub const fn position(&self) -> (usize, usize) {
        match self {
            Self::UnexpectedToken { line, column, .. }
            | Self::UnexpectedEndOfInput { line, column }
            | Self::ExpectedToken { line, column, .. }
            | Self::InconsistentMatrixRows { line, column, .. }
            | Self::ExpectedExpression { line, column, .. } => (*line, *column),
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (line, column) = self.position();
        write!(f, "Parse Error at line {line}, column {column}: ")?;

        match self {
            Self::UnexpectedToken { found, .. } => write!(f, "Unexpected token: {found}."),
            Self::UnexpectedEndOfInput { .. } => write!(f, "Unexpected end of input."),
            Self::ExpectedToken { expected, found, .. } => {
                write!(f, "Expected {expected}, found {found}.")
            },
            Self::InconsistentMatrixRows { expected, found, .. } => write!(f,
                                                                           "Inconsistent matrix row lengths: expected {expected} column(s), found {found}."),
            Self::ExpectedExpression { found, .. } => {
                write!(f, "Expected expression, found {found}.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
