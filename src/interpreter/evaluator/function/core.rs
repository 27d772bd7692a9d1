use std::rc::Rc;

use crate::{
    error::RuntimeError,
    interpreter::{
        env::Environment,
        evaluator::{
            core::{EvalResult, Flow, Interpreter},
            function::{builtin, matrix_fns},
        },
        value::Value,
    },
};

/// Type alias for builtin function handlers.
///
/// A builtin receives a slice of evaluated argument values and returns the
/// computed value.
type BuiltinFn = fn(&[Value]) -> EvalResult<Value>;

/// Specifies the allowed number of arguments for a builtin.
///
/// - `Exact(n)` means the builtin must receive exactly `n` arguments.
/// - `OneOf(slice)` means the builtin accepts any arity listed in `slice`.
#[derive(Clone, Copy)]
enum Arity {
    Exact(usize),
    OneOf(&'static [usize]),
}

/// Defines builtin functions by generating a lookup table and a name list.
///
/// Each entry provides:
/// - a string name,
/// - an arity specification,
/// - a function pointer implementing the builtin.
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        struct BuiltinDef {
            name:  &'static str,
            arity: Arity,
            func:  BuiltinFn,
        }
        static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { name: $name, arity: $arity, func: $func },
            )*
        ];
        /// Names of all built-in functions, including the I/O builtins that
        /// are dispatched outside the table.
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            "print", "input",
            $($name,)*
        ];
    };
}

builtin_functions! {
    "len"         => { arity: Arity::Exact(1), func: builtin::len },
    "abs"         => { arity: Arity::Exact(1), func: builtin::abs },
    "sqrt"        => { arity: Arity::Exact(1), func: builtin::sqrt },
    "sin"         => { arity: Arity::Exact(1), func: builtin::sin },
    "cos"         => { arity: Arity::Exact(1), func: builtin::cos },
    "tan"         => { arity: Arity::Exact(1), func: builtin::tan },
    "floor"       => { arity: Arity::Exact(1), func: |args| builtin::unary_round("floor", args) },
    "ceil"        => { arity: Arity::Exact(1), func: |args| builtin::unary_round("ceil", args) },
    "round"       => { arity: Arity::Exact(1), func: |args| builtin::unary_round("round", args) },
    "pow"         => { arity: Arity::Exact(2), func: builtin::pow },
    "zeros"       => { arity: Arity::Exact(2), func: matrix_fns::zeros },
    "ones"        => { arity: Arity::Exact(2), func: matrix_fns::ones },
    "eye"         => { arity: Arity::Exact(1), func: matrix_fns::eye },
    "transpose"   => { arity: Arity::Exact(1), func: matrix_fns::transpose },
    "determinant" => { arity: Arity::Exact(1), func: matrix_fns::determinant },
    "inverse"     => { arity: Arity::Exact(1), func: matrix_fns::inverse },
    "range"       => { arity: Arity::OneOf(&[1, 2, 3]), func: matrix_fns::range },
}

impl Arity {
    /// Tests whether the given argument count satisfies this arity
    /// constraint.
    fn check(self, n: usize) -> bool {
        match self {
            Self::Exact(m) => n == m,
            Self::OneOf(allowed) => allowed.contains(&n),
        }
    }

    /// Describes the accepted argument count for error messages.
    fn describe(self) -> String {
        match self {
            Self::Exact(m) => m.to_string(),
            Self::OneOf(allowed) => {
                let parts: Vec<String> = allowed.iter().map(ToString::to_string).collect();
                parts.join(" or ")
            },
        }
    }
}

impl Interpreter<'_> {
    /// Evaluates a function call.
    ///
    /// Arguments are evaluated left to right in the caller's scope. The
    /// name is resolved against the built-ins first, then against
    /// user-defined functions; an unknown name is an undefined-function
    /// error.
    pub(crate) fn evaluate_function_call(&mut self, name: u32, args: u32) -> EvalResult<Value> {
        let name = self.text(name).to_string();

        let mut arg_values = Vec::new();
        for arg in self.children_of(args)? {
            arg_values.push(self.evaluate_node(arg)?);
        }

        // The I/O builtins need the interpreter's output sink, so they are
        // dispatched before the pure table.
        match name.as_str() {
            "print" => return self.print(&arg_values),
            "input" => return Self::input(&arg_values),
            _ => {},
        }

        if let Some(builtin) = BUILTIN_TABLE.iter().find(|b| b.name == name) {
            if !builtin.arity.check(arg_values.len()) {
                return Err(RuntimeError::ArityMismatch { name,
                                                         expected: builtin.arity.describe(),
                                                         found: arg_values.len() });
            }
            return (builtin.func)(&arg_values);
        }

        self.call_user_function(&name, arg_values)
    }

    /// Executes a user-defined function.
    ///
    /// Parameters are installed into a fresh scope whose parent is the
    /// function's captured closure scope, not the caller's scope. The
    /// previous current-environment is restored on both normal and error
    /// exits. A body that falls off the end produces `none`.
    fn call_user_function(&mut self, name: &str, args: Vec<Value>) -> EvalResult<Value> {
        let function = self.functions
                           .get(name)
                           .cloned()
                           .ok_or_else(|| RuntimeError::UndefinedFunction { name:
                                                                                name.to_string(), })?;

        if args.len() != function.params.len() {
            return Err(RuntimeError::ArityMismatch { name:     name.to_string(),
                                                     expected: function.params.len().to_string(),
                                                     found:    args.len(), });
        }

        let scope = Environment::with_parent(Rc::clone(&function.closure));
        for (param, value) in function.params.iter().zip(args) {
            scope.borrow_mut().define(param, value);
        }

        let previous = Rc::clone(&self.current);
        self.current = scope;

        let result = self.execute_statement(function.body);
        self.current = previous;

        match result? {
            Flow::Return(value) => Ok(value),
            Flow::Normal => Ok(Value::None),
        }
    }
}
