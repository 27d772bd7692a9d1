use std::{collections::HashMap, io::Write, rc::Rc};

use crate::{
    ast::{Ast, NIL, Node, NodeKind},
    error::RuntimeError,
    interpreter::{
        env::{EnvRef, Environment},
        evaluator::{binary, unary},
        value::Value,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// [`RuntimeError`] describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// How a statement finished.
///
/// `return` must unwind from arbitrary statement depth to the enclosing
/// function call. Rather than abusing the error channel, the signal is
/// threaded through every statement's result: blocks and loops stop as soon
/// as they see [`Flow::Return`] and hand it upward.
#[derive(Debug)]
pub enum Flow {
    /// The statement ran to completion.
    Normal,
    /// A `return` was executed; the value travels to the call boundary.
    Return(Value),
}

/// A user-defined function.
///
/// Captures the environment that was current at definition time; calls use
/// it as the parent of their parameter scope, giving closure semantics.
#[derive(Debug, Clone)]
pub struct Function {
    /// The function name.
    pub name:    String,
    /// Parameter names, in declaration order.
    pub params:  Vec<String>,
    /// Arena index of the body block.
    pub body:    u32,
    /// The environment captured at definition time.
    pub closure: EnvRef,
}

/// Walks the syntax tree and executes it.
///
/// The interpreter borrows the arena read-only and owns the environment
/// chain. A current-environment pointer is swapped on function entry and
/// exit and on each `for` iteration; every switch restores the previous
/// environment on all exit paths, including errors.
///
/// Output from `print` goes to the configured sink, which defaults to
/// standard output.
pub struct Interpreter<'p> {
    pub(crate) ast:       &'p Ast,
    pub(crate) globals:   EnvRef,
    pub(crate) current:   EnvRef,
    pub(crate) functions: HashMap<String, Function>,
    pub(crate) output:    Box<dyn Write + 'p>,
}

impl<'p> Interpreter<'p> {
    /// Creates an interpreter writing program output to standard output.
    #[must_use]
    pub fn new(ast: &'p Ast) -> Self {
        Self::with_output(ast, Box::new(std::io::stdout()))
    }

    /// Creates an interpreter writing program output to `output`.
    ///
    /// Used by embedders and tests that capture what a program prints.
    #[must_use]
    pub fn with_output(ast: &'p Ast, output: Box<dyn Write + 'p>) -> Self {
        let globals = Environment::new();
        Self { ast,
               globals: Rc::clone(&globals),
               current: globals,
               functions: HashMap::new(),
               output }
    }

    /// Executes the whole program.
    ///
    /// A `return` at the top level stops execution without error.
    ///
    /// # Errors
    /// Returns the first [`RuntimeError`] raised; execution of the source
    /// unit ends there.
    pub fn interpret(&mut self) -> EvalResult<()> {
        let first = self.node(0)?.first_child;
        for statement in self.children_of(first)? {
            if let Flow::Return(_) = self.execute_statement(statement)? {
                break;
            }
        }
        Ok(())
    }

    /// The global environment, exposed so embedders can inspect variable
    /// state after a run.
    #[must_use]
    pub fn globals(&self) -> EnvRef {
        Rc::clone(&self.globals)
    }

    // Statements ---------------------------------------------------------

    pub(crate) fn execute_statement(&mut self, index: u32) -> EvalResult<Flow> {
        match self.node(index)?.kind {
            NodeKind::Program | NodeKind::Block { .. } => self.execute_block(index),
            NodeKind::ExpressionStatement { expression } => {
                self.evaluate_node(expression)?;
                Ok(Flow::Normal)
            },
            NodeKind::If { condition,
                           then_block,
                           else_block, } => self.execute_if(condition, then_block, else_block),
            NodeKind::While { condition, body } => self.execute_while(condition, body),
            NodeKind::For { variable,
                            iterable,
                            body, } => self.execute_for(variable, iterable, body),
            NodeKind::FunctionDef { name,
                                    params,
                                    body,
                                    .. } => {
                self.define_function(name, params, body)?;
                Ok(Flow::Normal)
            },
            NodeKind::Return { value } => {
                let result = if value == NIL {
                    Value::None
                } else {
                    self.evaluate_node(value)?
                };
                Ok(Flow::Return(result))
            },
            NodeKind::Assignment { target, value } => {
                self.evaluate_assignment(target, value)?;
                Ok(Flow::Normal)
            },
            _ => {
                self.evaluate_node(index)?;
                Ok(Flow::Normal)
            },
        }
    }

    /// Runs the statements of a block in order, stopping early on `return`.
    pub(crate) fn execute_block(&mut self, index: u32) -> EvalResult<Flow> {
        let first = self.node(index)?.first_child;
        for statement in self.children_of(first)? {
            if let Flow::Return(value) = self.execute_statement(statement)? {
                return Ok(Flow::Return(value));
            }
        }
        Ok(Flow::Normal)
    }

    fn define_function(&mut self, name: u32, params: u32, body: u32) -> EvalResult<()> {
        let name = self.text(name).to_string();

        let mut parameters = Vec::new();
        for param in self.children_of(params)? {
            // The body block terminates the sibling chain; only identifier
            // nodes are parameters.
            let node = self.node(param)?;
            if let NodeKind::Identifier { name } = node.kind {
                parameters.push(self.text(name).to_string());
            }
        }

        let function = Function { name:    name.clone(),
                                  params:  parameters,
                                  body,
                                  closure: Rc::clone(&self.current), };
        self.functions.insert(name, function);
        Ok(())
    }

    // Expressions --------------------------------------------------------

    /// Evaluates an expression node to a value.
    pub(crate) fn evaluate_node(&mut self, index: u32) -> EvalResult<Value> {
        match self.node(index)?.kind {
            NodeKind::IntegerLiteral(value) => Ok(Value::Integer(value)),
            NodeKind::FloatLiteral(value) => Ok(Value::Float(value)),
            NodeKind::StringLiteral { string } => Ok(Value::Str(self.text(string).to_string())),
            NodeKind::BooleanLiteral(value) => Ok(Value::Bool(value)),
            NodeKind::Identifier { name } => {
                let name = self.text(name);
                self.current.borrow().get(name)
            },
            NodeKind::BinaryOp { op, left, right } => {
                let left = self.evaluate_node(left)?;
                let right = self.evaluate_node(right)?;
                binary::core::evaluate(op, &left, &right)
            },
            NodeKind::UnaryOp { op, operand } => {
                let operand = self.evaluate_node(operand)?;
                unary::evaluate(op, &operand)
            },
            NodeKind::Assignment { target, value } => self.evaluate_assignment(target, value),
            NodeKind::FunctionCall { name,
                                     args,
                                     .. } => self.evaluate_function_call(name, args),
            NodeKind::MatrixLiteral { rows,
                                      cols,
                                      elements,
                                      .. } => self.evaluate_matrix_literal(rows, cols, elements),
            NodeKind::ArrayAccess { object, index } => self.evaluate_array_access(object, index),
            NodeKind::MemberAccess { object, member } => {
                self.evaluate_member_access(object, member)
            },
            _ => Err(RuntimeError::TypeMismatch { details:
                                                      "Cannot evaluate this construct as an expression".to_string(), }),
        }
    }

    /// Evaluates the right-hand side, checks the target is an identifier,
    /// and rebinds it in the nearest scope that has it.
    fn evaluate_assignment(&mut self, target: u32, value: u32) -> EvalResult<Value> {
        let NodeKind::Identifier { name } = self.node(target)?.kind else {
            return Err(RuntimeError::TypeMismatch { details:
                                                        "Invalid assignment target".to_string(), });
        };

        let value = self.evaluate_node(value)?;
        let name = self.text(name).to_string();
        self.current.borrow_mut().assign(&name, value.clone());
        Ok(value)
    }

    // Helpers ------------------------------------------------------------

    pub(crate) fn node(&self, index: u32) -> EvalResult<&Node> {
        self.ast.node(index).ok_or(RuntimeError::CorruptSyntaxTree)
    }

    pub(crate) fn text(&self, index: u32) -> &str {
        self.ast.strings.get(index)
    }

    /// Bounded sibling-chain traversal; a cycle or dangling index surfaces
    /// as a runtime error instead of a hang.
    pub(crate) fn children_of(&self, first: u32) -> EvalResult<Vec<u32>> {
        self.ast.children(first).ok_or(RuntimeError::CorruptSyntaxTree)
    }
}
