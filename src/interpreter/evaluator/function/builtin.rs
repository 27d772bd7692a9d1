use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::Value},
    util::num::usize_to_i64,
};

/// Generates a unary builtin that applies an `f64` function to a numeric
/// argument. Integers are promoted to floats first; anything non-numeric
/// produces an invalid-argument error naming the builtin.
macro_rules! float_builtin {
    ($fname:ident) => {
        /// Wrapper over the standard mathematical function of the same
        /// name. Accepts one numeric argument and returns a float.
        pub fn $fname(args: &[Value]) -> EvalResult<Value> {
            match &args[0] {
                value if value.is_numeric() => Ok(Value::Float(value.as_float()?.$fname())),
                other => Err(RuntimeError::InvalidArgument { details: format!(concat!(stringify!($fname),
                                                                                      "() argument must be numeric, found {}"),
                                                                              other.type_name()), }),
            }
        }
    };
}

float_builtin!(sqrt);
float_builtin!(sin);
float_builtin!(cos);
float_builtin!(tan);

/// Returns the length of a value: character count for strings, row count
/// for matrices.
///
/// # Errors
/// Anything else is an invalid argument.
///
/// # Example
/// ```
/// use dakota::interpreter::{evaluator::function::builtin::len, value::Value};
///
/// let length = len(&[Value::Str("dakota".to_string())]).unwrap();
/// assert_eq!(length, Value::Integer(6));
/// ```
pub fn len(args: &[Value]) -> EvalResult<Value> {
    match &args[0] {
        Value::Str(s) => Ok(Value::Integer(usize_to_i64(s.len()))),
        Value::Matrix(m) => Ok(Value::Integer(m.len())),
        other => Err(RuntimeError::InvalidArgument { details: format!("len() argument must be a string or matrix, found {}",
                                                                      other.type_name()), }),
    }
}

/// Returns the absolute value of a number, preserving its type.
pub fn abs(args: &[Value]) -> EvalResult<Value> {
    match &args[0] {
        Value::Integer(n) => Ok(Value::Integer(n.wrapping_abs())),
        Value::Float(x) => Ok(Value::Float(x.abs())),
        other => Err(RuntimeError::InvalidArgument { details: format!("abs() argument must be numeric, found {}",
                                                                      other.type_name()), }),
    }
}

/// Applies a rounding operation (`floor`, `ceil`, or `round`) to a numeric
/// value. The operation is selected by name; the result is a float.
pub fn unary_round(name: &str, args: &[Value]) -> EvalResult<Value> {
    let op = match name {
        "floor" => f64::floor,
        "ceil" => f64::ceil,
        "round" => f64::round,
        _ => unreachable!(),
    };

    match &args[0] {
        value if value.is_numeric() => Ok(Value::Float(op(value.as_float()?))),
        other => Err(RuntimeError::InvalidArgument { details: format!("{name}() argument must be numeric, found {}",
                                                                      other.type_name()), }),
    }
}

/// Raises `x` to the power `y` via IEEE `pow`. Both arguments must be
/// numeric; the result is a float.
pub fn pow(args: &[Value]) -> EvalResult<Value> {
    match (&args[0], &args[1]) {
        (base, exponent) if base.is_numeric() && exponent.is_numeric() => {
            Ok(Value::Float(base.as_float()?.powf(exponent.as_float()?)))
        },
        _ => Err(RuntimeError::InvalidArgument { details:
                                                     "pow() arguments must be numeric".to_string(), }),
    }
}
