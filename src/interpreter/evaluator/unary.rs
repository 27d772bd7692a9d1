use crate::{
    ast::UnaryOpKind,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::Value},
};

/// Evaluates a unary operation.
///
/// Negation is defined for integers, floats and matrices (elementwise);
/// `not` reduces any value to its truthiness and flips it.
///
/// # Example
/// ```
/// use dakota::{
///     ast::UnaryOpKind,
///     interpreter::{evaluator::unary::evaluate, value::Value},
/// };
///
/// let negated = evaluate(UnaryOpKind::Negate, &Value::Integer(5)).unwrap();
/// assert_eq!(negated, Value::Integer(-5));
///
/// let flipped = evaluate(UnaryOpKind::Not, &Value::Integer(0)).unwrap();
/// assert_eq!(flipped, Value::Bool(true));
/// ```
pub fn evaluate(op: UnaryOpKind, operand: &Value) -> EvalResult<Value> {
    match op {
        UnaryOpKind::Negate => negate(operand),
        UnaryOpKind::Not => Ok(Value::Bool(!operand.is_truthy())),
    }
}

fn negate(operand: &Value) -> EvalResult<Value> {
    match operand {
        Value::Integer(n) => Ok(Value::Integer(n.wrapping_neg())),
        Value::Float(x) => Ok(Value::Float(-x)),
        Value::Matrix(m) => Ok(Value::Matrix(m.map(|x| -x))),
        _ => Err(RuntimeError::TypeMismatch { details:
                                                  "Cannot negate this value type".to_string(), }),
    }
}
