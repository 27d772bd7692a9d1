use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::EvalResult,
        value::{Matrix, Value},
    },
    util::num::i64_to_usize_checked,
};

/// Reads a non-negative matrix dimension from an integer argument.
fn dimension(value: &Value, what: &str) -> EvalResult<usize> {
    let n = value.as_integer()?;
    i64_to_usize_checked(n, RuntimeError::InvalidArgument { details: format!("{what} must be non-negative, got {n}"), })
}

/// `zeros(r, c)`: an `r × c` matrix of zeros.
///
/// # Example
/// ```
/// use dakota::interpreter::{evaluator::function::matrix_fns::zeros, value::Value};
///
/// let m = zeros(&[Value::Integer(2), Value::Integer(3)]).unwrap();
/// assert_eq!(m.to_string(), "[0,0,0;0,0,0]");
/// ```
pub fn zeros(args: &[Value]) -> EvalResult<Value> {
    let rows = dimension(&args[0], "Matrix dimensions")?;
    let cols = dimension(&args[1], "Matrix dimensions")?;
    Ok(Value::Matrix(Matrix::zeros(rows, cols)))
}

/// `ones(r, c)`: an `r × c` matrix of ones.
pub fn ones(args: &[Value]) -> EvalResult<Value> {
    let rows = dimension(&args[0], "Matrix dimensions")?;
    let cols = dimension(&args[1], "Matrix dimensions")?;
    Ok(Value::Matrix(Matrix::filled(rows, cols, 1.0)))
}

/// `eye(n)`: the `n × n` identity matrix.
pub fn eye(args: &[Value]) -> EvalResult<Value> {
    let n = dimension(&args[0], "Matrix size")?;
    Ok(Value::Matrix(Matrix::identity(n)))
}

/// `transpose(m)`: the functional form of `m.T`.
pub fn transpose(args: &[Value]) -> EvalResult<Value> {
    Ok(Value::Matrix(args[0].as_matrix()?.transpose()))
}

/// `determinant(m)`: the functional form of `m.d`.
pub fn determinant(args: &[Value]) -> EvalResult<Value> {
    Ok(Value::Float(args[0].as_matrix()?.determinant()?))
}

/// `inverse(m)`: the functional form of `m.I`.
pub fn inverse(args: &[Value]) -> EvalResult<Value> {
    Ok(Value::Matrix(args[0].as_matrix()?.inverse()?))
}

/// `range(n)`, `range(a, b)`, `range(a, b, s)`: a column vector of
/// integers, one value per row, suitable for `for` iteration.
///
/// One argument counts from zero; two arguments span `[a, b)`; three add a
/// step, which may be negative. A zero step is an error.
///
/// # Example
/// ```
/// use dakota::interpreter::{evaluator::function::matrix_fns::range, value::Value};
///
/// let r = range(&[Value::Integer(3)]).unwrap();
/// assert_eq!(r.to_string(), "[0;1;2]");
/// ```
#[allow(clippy::cast_precision_loss)]
pub fn range(args: &[Value]) -> EvalResult<Value> {
    let (start, stop, step) = match args {
        [stop] => (0, stop.as_integer()?, 1),
        [start, stop] => (start.as_integer()?, stop.as_integer()?, 1),
        [start, stop, step] => (start.as_integer()?, stop.as_integer()?, step.as_integer()?),
        _ => unreachable!(),
    };

    if step == 0 {
        return Err(RuntimeError::InvalidArgument { details:
                                                       "range() step must not be zero".to_string(), });
    }

    let mut data = Vec::new();
    let mut current = start;
    while (step > 0 && current < stop) || (step < 0 && current > stop) {
        data.push(current as f64);
        current = current.wrapping_add(step);
    }

    Ok(Value::Matrix(Matrix::column(data)))
}
