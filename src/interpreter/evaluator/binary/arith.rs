use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::Value},
};

/// Evaluates `+`.
///
/// Integer pairs stay integral; any other numeric pair produces a float.
/// Strings concatenate, and matrices of identical shape add elementwise.
///
/// # Example
/// ```
/// use dakota::interpreter::{evaluator::binary::arith::add, value::Value};
///
/// let sum = add(&Value::Integer(1), &Value::Float(0.5)).unwrap();
/// assert_eq!(sum, Value::Float(1.5));
/// ```
pub fn add(left: &Value, right: &Value) -> EvalResult<Value> {
    match (left, right) {
        (Value::Integer(a), Value::Integer(b)) => Ok(Value::Integer(a.wrapping_add(*b))),
        (a, b) if a.is_numeric() && b.is_numeric() => {
            Ok(Value::Float(a.as_float()? + b.as_float()?))
        },
        (Value::Str(a), Value::Str(b)) => Ok(Value::Str(format!("{a}{b}"))),
        (Value::Matrix(a), Value::Matrix(b)) => Ok(Value::Matrix(a.zip(b, "addition", |x, y| x + y)?)),
        _ => Err(RuntimeError::TypeMismatch { details: "Cannot add values of these types".to_string(), }),
    }
}

/// Evaluates binary `-`. Defined for numeric pairs and same-shape matrices.
pub fn sub(left: &Value, right: &Value) -> EvalResult<Value> {
    match (left, right) {
        (Value::Integer(a), Value::Integer(b)) => Ok(Value::Integer(a.wrapping_sub(*b))),
        (a, b) if a.is_numeric() && b.is_numeric() => {
            Ok(Value::Float(a.as_float()? - b.as_float()?))
        },
        (Value::Matrix(a), Value::Matrix(b)) => {
            Ok(Value::Matrix(a.zip(b, "subtraction", |x, y| x - y)?))
        },
        _ => Err(RuntimeError::TypeMismatch { details:
                                                  "Cannot subtract values of these types".to_string(), }),
    }
}

/// Evaluates `*`.
///
/// Scalar-by-matrix multiplication broadcasts elementwise, in either
/// operand order. Two matrices do not multiply with `*`; that is what
/// `mult` is for.
pub fn mul(left: &Value, right: &Value) -> EvalResult<Value> {
    match (left, right) {
        (Value::Integer(a), Value::Integer(b)) => Ok(Value::Integer(a.wrapping_mul(*b))),
        (a, b) if a.is_numeric() && b.is_numeric() => {
            Ok(Value::Float(a.as_float()? * b.as_float()?))
        },
        (Value::Matrix(m), scalar) if scalar.is_numeric() => {
            let factor = scalar.as_float()?;
            Ok(Value::Matrix(m.map(|x| x * factor)))
        },
        (scalar, Value::Matrix(m)) if scalar.is_numeric() => {
            let factor = scalar.as_float()?;
            Ok(Value::Matrix(m.map(|x| x * factor)))
        },
        _ => Err(RuntimeError::TypeMismatch { details:
                                                  "Cannot multiply values of these types".to_string(), }),
    }
}

/// Evaluates `/`. The result is always a float; a scalar divisor applies
/// elementwise to a matrix. Division by zero is an error.
pub fn div(left: &Value, right: &Value) -> EvalResult<Value> {
    match (left, right) {
        (a, b) if a.is_numeric() && b.is_numeric() => {
            let divisor = b.as_float()?;
            if divisor == 0.0 {
                return Err(RuntimeError::DivisionByZero);
            }
            Ok(Value::Float(a.as_float()? / divisor))
        },
        (Value::Matrix(m), scalar) if scalar.is_numeric() => {
            let divisor = scalar.as_float()?;
            if divisor == 0.0 {
                return Err(RuntimeError::DivisionByZero);
            }
            Ok(Value::Matrix(m.map(|x| x / divisor)))
        },
        _ => Err(RuntimeError::TypeMismatch { details:
                                                  "Cannot divide values of these types".to_string(), }),
    }
}

/// Evaluates `%`. Integer operands only; a zero divisor is an error.
pub fn modulo(left: &Value, right: &Value) -> EvalResult<Value> {
    match (left, right) {
        (Value::Integer(a), Value::Integer(b)) => {
            if *b == 0 {
                return Err(RuntimeError::ModuloByZero);
            }
            Ok(Value::Integer(a.wrapping_rem(*b)))
        },
        _ => Err(RuntimeError::TypeMismatch { details:
                                                  "Modulo operation requires integer operands".to_string(), }),
    }
}

/// Evaluates `**` via IEEE `pow`; the result is always a float.
pub fn pow(left: &Value, right: &Value) -> EvalResult<Value> {
    match (left, right) {
        (a, b) if a.is_numeric() && b.is_numeric() => {
            Ok(Value::Float(a.as_float()?.powf(b.as_float()?)))
        },
        _ => Err(RuntimeError::TypeMismatch { details:
                                                  "Power operation requires numeric operands".to_string(), }),
    }
}
