use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::matrix::Matrix},
};

/// Tolerance under which two floats compare equal with `==`. Part of the
/// language contract.
pub const FLOAT_EQ_TOLERANCE: f64 = 1e-10;

/// Represents a runtime value in the interpreter.
///
/// This enum models all the possible types that can appear in expressions,
/// assignments, function returns, and conditional evaluations. Values are
/// deep copies: cloning a matrix clones its storage, and each environment
/// entry exclusively owns its value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A 64-bit signed integer.
    Integer(i64),
    /// A 64-bit floating-point number.
    Float(f64),
    /// An owned string.
    Str(String),
    /// A boolean value, produced by comparisons and logical operators.
    Bool(bool),
    /// A dense 2-D matrix of floats.
    Matrix(Matrix),
    /// The absence of a value; produced by functions without a `return`.
    None,
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl From<Matrix> for Value {
    fn from(v: Matrix) -> Self {
        Self::Matrix(v)
    }
}

impl Value {
    /// A short name for the value's type, used in error messages.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Integer(_) => "integer",
            Self::Float(_) => "float",
            Self::Str(_) => "string",
            Self::Bool(_) => "boolean",
            Self::Matrix(_) => "matrix",
            Self::None => "none",
        }
    }

    /// Returns `true` if the value is an [`Integer`](Self::Integer) or a
    /// [`Float`](Self::Float).
    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        matches!(self, Self::Integer(_) | Self::Float(_))
    }

    /// Converts a numeric value to `f64`.
    ///
    /// # Errors
    /// Returns a type mismatch for non-numeric values.
    ///
    /// # Example
    /// ```
    /// use dakota::interpreter::value::Value;
    ///
    /// assert_eq!(Value::Integer(10).as_float().unwrap(), 10.0);
    /// assert!(Value::Bool(true).as_float().is_err());
    /// ```
    #[allow(clippy::cast_precision_loss)]
    pub fn as_float(&self) -> EvalResult<f64> {
        match self {
            Self::Integer(n) => Ok(*n as f64),
            Self::Float(x) => Ok(*x),
            other => Err(RuntimeError::TypeMismatch { details: format!("Expected a number, found {}",
                                                                       other.type_name()), }),
        }
    }

    /// Converts the value to `i64`, accepting only integers.
    ///
    /// # Errors
    /// Returns a type mismatch for anything but an integer.
    pub fn as_integer(&self) -> EvalResult<i64> {
        match self {
            Self::Integer(n) => Ok(*n),
            other => Err(RuntimeError::TypeMismatch { details: format!("Expected an integer, found {}",
                                                                       other.type_name()), }),
        }
    }

    /// Borrows the value as a matrix.
    ///
    /// # Errors
    /// Returns a type mismatch for non-matrix values.
    pub fn as_matrix(&self) -> EvalResult<&Matrix> {
        match self {
            Self::Matrix(m) => Ok(m),
            other => Err(RuntimeError::TypeMismatch { details: format!("Expected a matrix, found {}",
                                                                       other.type_name()), }),
        }
    }

    /// Reduces the value to a boolean for use in control-flow conditions.
    ///
    /// Numbers are truthy when nonzero, strings when nonempty, booleans by
    /// their own value, matrices when they have at least one row, and `none`
    /// is always falsy.
    ///
    /// # Example
    /// ```
    /// use dakota::interpreter::value::{Matrix, Value};
    ///
    /// assert!(Value::Integer(3).is_truthy());
    /// assert!(!Value::Str(String::new()).is_truthy());
    /// assert!(!Value::Matrix(Matrix::zeros(0, 0)).is_truthy());
    /// assert!(!Value::None.is_truthy());
    /// ```
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Integer(n) => *n != 0,
            Self::Float(x) => *x != 0.0,
            Self::Str(s) => !s.is_empty(),
            Self::Bool(b) => *b,
            Self::Matrix(m) => !m.is_empty(),
            Self::None => false,
        }
    }
}

/// Formats a float in fixed-point notation with six fractional digits,
/// stripping trailing zeros and a trailing decimal point.
///
/// This is the canonical output format: `4.0` prints as `4`, `3.140000`
/// as `3.14`.
///
/// # Example
/// ```
/// use dakota::interpreter::value::core::format_float;
///
/// assert_eq!(format_float(4.0), "4");
/// assert_eq!(format_float(3.14), "3.14");
/// assert_eq!(format_float(0.5), "0.5");
/// ```
#[must_use]
pub fn format_float(value: f64) -> String {
    let mut text = format!("{value:.6}");

    if text.contains('.') {
        while text.ends_with('0') {
            text.pop();
        }
        if text.ends_with('.') {
            text.pop();
        }
    }

    text
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Float(x) => write!(f, "{}", format_float(*x)),
            Self::Str(s) => write!(f, "{s}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Matrix(m) => {
                write!(f, "[")?;
                for i in 0..m.rows() {
                    if i > 0 {
                        write!(f, ";")?;
                    }
                    for j in 0..m.cols() {
                        if j > 0 {
                            write!(f, ",")?;
                        }
                        write!(f, "{}", format_float(m.get(i, j)))?;
                    }
                }
                write!(f, "]")
            },
            Self::None => write!(f, "none"),
        }
    }
}
