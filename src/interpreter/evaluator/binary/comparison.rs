use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::EvalResult,
        value::{Value, core::FLOAT_EQ_TOLERANCE},
    },
};

/// Tests two values for equality.
///
/// Numeric pairs compare by numeric value; when a float is involved the
/// comparison uses the [`FLOAT_EQ_TOLERANCE`] contract. Strings compare by
/// content, matrices elementwise with exact float equality, and values of
/// unrelated types are simply unequal.
///
/// # Example
/// ```
/// use dakota::interpreter::{evaluator::binary::comparison::equal, value::Value};
///
/// assert!(equal(&Value::Integer(2), &Value::Float(2.0)));
/// assert!(!equal(&Value::Integer(2), &Value::Str("2".to_string())));
/// ```
#[must_use]
pub fn equal(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Integer(a), Value::Integer(b)) => a == b,
        (a, b) if a.is_numeric() && b.is_numeric() => match (a.as_float(), b.as_float()) {
            (Ok(x), Ok(y)) => (x - y).abs() < FLOAT_EQ_TOLERANCE,
            _ => false,
        },
        (Value::Str(a), Value::Str(b)) => a == b,
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::Matrix(a), Value::Matrix(b)) => a == b,
        (Value::None, Value::None) => true,
        _ => false,
    }
}

/// Evaluates `<`. Numeric pairs compare by value; strings compare
/// lexicographically.
pub fn less(left: &Value, right: &Value) -> EvalResult<Value> {
    match (left, right) {
        (a, b) if a.is_numeric() && b.is_numeric() => {
            Ok(Value::Bool(a.as_float()? < b.as_float()?))
        },
        (Value::Str(a), Value::Str(b)) => Ok(Value::Bool(a < b)),
        _ => Err(RuntimeError::TypeMismatch { details:
                                                  "Cannot compare values of these types".to_string(), }),
    }
}

/// Evaluates `<=` as `<` or `==`.
pub fn less_equal(left: &Value, right: &Value) -> EvalResult<Value> {
    let Value::Bool(strictly) = less(left, right)? else {
        unreachable!()
    };
    Ok(Value::Bool(strictly || equal(left, right)))
}

/// Evaluates `>` as the negation of `<=`.
pub fn greater(left: &Value, right: &Value) -> EvalResult<Value> {
    let Value::Bool(le) = less_equal(left, right)? else {
        unreachable!()
    };
    Ok(Value::Bool(!le))
}

/// Evaluates `>=` as the negation of `<`.
pub fn greater_equal(left: &Value, right: &Value) -> EvalResult<Value> {
    let Value::Bool(lt) = less(left, right)? else {
        unreachable!()
    };
    Ok(Value::Bool(!lt))
}
