use crate::interpreter::value::Value;

/// Evaluates `and`: both operands reduce to truthiness, the result is a
/// boolean. Both sides are already evaluated; Dakota does not
/// short-circuit.
#[must_use]
pub fn and(left: &Value, right: &Value) -> Value {
    Value::Bool(left.is_truthy() && right.is_truthy())
}

/// Evaluates `or` on the operands' truthiness.
#[must_use]
pub fn or(left: &Value, right: &Value) -> Value {
    Value::Bool(left.is_truthy() || right.is_truthy())
}
