use std::rc::Rc;

use crate::{
    ast::{NIL, NodeKind},
    error::RuntimeError,
    interpreter::{
        env::Environment,
        evaluator::core::{EvalResult, Flow, Interpreter},
        value::Value,
    },
};

impl Interpreter<'_> {
    /// Executes an `if` statement: the then-block when the condition is
    /// truthy, otherwise the else-block when present. `elif` chains arrive
    /// here as a nested if-statement in the else slot.
    pub(crate) fn execute_if(&mut self,
                             condition: u32,
                             then_block: u32,
                             else_block: u32)
                             -> EvalResult<Flow> {
        if self.evaluate_node(condition)?.is_truthy() {
            return self.execute_statement(then_block);
        }

        if else_block != NIL {
            return self.execute_statement(else_block);
        }

        Ok(Flow::Normal)
    }

    /// Executes a `while` statement, re-evaluating the condition before
    /// every iteration.
    pub(crate) fn execute_while(&mut self, condition: u32, body: u32) -> EvalResult<Flow> {
        while self.evaluate_node(condition)?.is_truthy() {
            if let Flow::Return(value) = self.execute_statement(body)? {
                return Ok(Flow::Return(value));
            }
        }
        Ok(Flow::Normal)
    }

    /// Executes a `for` statement over the rows of a matrix.
    ///
    /// Each iteration binds the loop variable to the current row as a
    /// single-row matrix, inside a fresh child scope of the current
    /// environment. The previous environment is restored on every exit
    /// path.
    pub(crate) fn execute_for(&mut self,
                              variable: u32,
                              iterable: u32,
                              body: u32)
                              -> EvalResult<Flow> {
        let NodeKind::Identifier { name } = self.node(variable)?.kind else {
            return Err(RuntimeError::CorruptSyntaxTree);
        };
        let name = self.text(name).to_string();

        let Value::Matrix(matrix) = self.evaluate_node(iterable)? else {
            return Err(RuntimeError::NonMatrixIterable);
        };

        for index in 0..matrix.rows() {
            let row = matrix.row(i64::try_from(index).unwrap_or(i64::MAX))?;

            let previous = Rc::clone(&self.current);
            self.current = Environment::with_parent(Rc::clone(&previous));
            self.current.borrow_mut().define(&name, Value::Matrix(row));

            let result = self.execute_statement(body);
            self.current = previous;

            if let Flow::Return(value) = result? {
                return Ok(Flow::Return(value));
            }
        }

        Ok(Flow::Normal)
    }
}
