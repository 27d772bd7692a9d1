#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can be raised while executing a program.
///
/// Runtime errors are raised from value-level operations, which do not track
/// source positions; they unwind evaluation to the interpreter entry point.
pub enum RuntimeError {
    /// An operator was applied to operands it is not defined for.
    TypeMismatch {
        /// Details about the offending operation.
        details: String,
    },
    /// Attempted division by zero.
    DivisionByZero,
    /// Attempted modulo by zero.
    ModuloByZero,
    /// Tried to read a variable that has never been bound.
    UndefinedVariable {
        /// The name of the variable.
        name: String,
    },
    /// Called a function that is neither built in nor user defined.
    UndefinedFunction {
        /// The name of the function.
        name: String,
    },
    /// The wrong number of arguments was supplied to a function.
    ArityMismatch {
        /// The name of the function.
        name:     String,
        /// A description of the accepted argument count.
        expected: String,
        /// The number of arguments actually supplied.
        found:    usize,
    },
    /// A row index was outside the matrix.
    IndexOutOfBounds {
        /// The requested index.
        index: i64,
        /// The number of rows in the matrix.
        rows:  usize,
    },
    /// Two matrices had shapes that do not fit the requested operation.
    DimensionMismatch {
        /// The operation that was attempted.
        operation: String,
    },
    /// A square matrix was required.
    NonSquareMatrix {
        /// The operation that was attempted.
        operation: String,
    },
    /// The matrix has no inverse.
    SingularMatrix,
    /// A `for` loop was given something other than a matrix to iterate.
    NonMatrixIterable,
    /// Member access used a name the value does not provide.
    UnknownMember {
        /// The member name.
        member: String,
    },
    /// A built-in function received an argument it cannot work with.
    InvalidArgument {
        /// Details about why the argument is invalid.
        details: String,
    },
    /// A sibling chain in the syntax tree exceeded the traversal bound.
    CorruptSyntaxTree,
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Runtime Error: ")?;

        match self {
            Self::TypeMismatch { details } => write!(f, "{details}"),
            Self::DivisionByZero => write!(f, "Division by zero"),
            Self::ModuloByZero => write!(f, "Modulo by zero"),
            Self::UndefinedVariable { name } => write!(f, "Undefined variable '{name}'"),
            Self::UndefinedFunction { name } => write!(f, "Undefined function '{name}'"),
            Self::ArityMismatch { name,
                                  expected,
                                  found, } => {
                write!(f, "Function '{name}' expects {expected} argument(s), got {found}")
            },
            Self::IndexOutOfBounds { index, rows } => {
                write!(f, "Matrix index {index} out of bounds for {rows} row(s)")
            },
            Self::DimensionMismatch { operation } => {
                write!(f, "Matrix dimensions don't match for {operation}")
            },
            Self::NonSquareMatrix { operation } => {
                write!(f, "{operation} requires a square matrix")
            },
            Self::SingularMatrix => write!(f, "Matrix is singular (not invertible)"),
            Self::NonMatrixIterable => write!(f, "For loop requires a matrix to iterate over"),
            Self::UnknownMember { member } => {
                write!(f, "Unknown member '{member}' for this type")
            },
            Self::InvalidArgument { details } => write!(f, "{details}"),
            Self::CorruptSyntaxTree => write!(f, "Syntax tree is corrupted"),
        }
    }
}

impl std::error::Error for RuntimeError {}
