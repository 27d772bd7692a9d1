use crate::{
    ast::BinaryOpKind,
    error::RuntimeError,
    interpreter::{
        evaluator::{
            binary::{arith, comparison, logic},
            core::EvalResult,
        },
        value::Value,
    },
};

/// Evaluates a binary operation between two values.
///
/// All operator entry points are total: they return a value or a structured
/// error, never panic. Operands are evaluated by the caller; this function
/// only dispatches on the operator tag.
///
/// # Example
/// ```
/// use dakota::{
///     ast::BinaryOpKind,
///     interpreter::{evaluator::binary::core::evaluate, value::Value},
/// };
///
/// let result = evaluate(BinaryOpKind::Add, &Value::Integer(3), &Value::Integer(4));
/// assert_eq!(result.unwrap(), Value::Integer(7));
/// ```
pub fn evaluate(op: BinaryOpKind, left: &Value, right: &Value) -> EvalResult<Value> {
    match op {
        BinaryOpKind::Add => arith::add(left, right),
        BinaryOpKind::Sub => arith::sub(left, right),
        BinaryOpKind::Mul => arith::mul(left, right),
        BinaryOpKind::Div => arith::div(left, right),
        BinaryOpKind::Mod => arith::modulo(left, right),
        BinaryOpKind::Pow => arith::pow(left, right),
        BinaryOpKind::MatMul => matmul(left, right),
        BinaryOpKind::Eq => Ok(Value::Bool(comparison::equal(left, right))),
        BinaryOpKind::Ne => Ok(Value::Bool(!comparison::equal(left, right))),
        BinaryOpKind::Lt => comparison::less(left, right),
        BinaryOpKind::Le => comparison::less_equal(left, right),
        BinaryOpKind::Gt => comparison::greater(left, right),
        BinaryOpKind::Ge => comparison::greater_equal(left, right),
        BinaryOpKind::And => Ok(logic::and(left, right)),
        BinaryOpKind::Or => Ok(logic::or(left, right)),
    }
}

/// Evaluates `mult`, the matrix product. Both operands must be matrices
/// with agreeing inner dimensions.
fn matmul(left: &Value, right: &Value) -> EvalResult<Value> {
    let (Value::Matrix(a), Value::Matrix(b)) = (left, right) else {
        return Err(RuntimeError::TypeMismatch { details:
                                                    "Matrix multiplication requires matrix operands".to_string(), });
    };

    Ok(Value::Matrix(a.multiply(b)?))
}
