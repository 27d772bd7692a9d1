use std::{cell::RefCell, collections::HashMap, rc::Rc};

use crate::{error::RuntimeError, interpreter::{evaluator::core::EvalResult, value::Value}};

/// A shared, mutable handle to an [`Environment`].
///
/// Scopes are shared between the evaluation stack and any closures that
/// captured them, so they live behind `Rc<RefCell<_>>`; a scope is dropped
/// once the last closure referencing it goes away.
pub type EnvRef = Rc<RefCell<Environment>>;

/// A lexical scope mapping variable names to values.
///
/// Environments form a chain through their parent references. Name lookup
/// walks the chain outward; each entry exclusively owns its value, and
/// assignment replaces the previously owned value.
#[derive(Debug, Default)]
pub struct Environment {
    variables: HashMap<String, Value>,
    parent:    Option<EnvRef>,
}

impl Environment {
    /// Creates a root scope with no parent.
    #[must_use]
    pub fn new() -> EnvRef {
        Rc::new(RefCell::new(Self { variables: HashMap::new(),
                                    parent:    None, }))
    }

    /// Creates a scope nested inside `parent`.
    #[must_use]
    pub fn with_parent(parent: EnvRef) -> EnvRef {
        Rc::new(RefCell::new(Self { variables: HashMap::new(),
                                    parent:    Some(parent), }))
    }

    /// Installs `value` under `name` in this scope, shadowing any binding
    /// of the same name in enclosing scopes.
    pub fn define(&mut self, name: &str, value: Value) {
        self.variables.insert(name.to_string(), value);
    }

    /// Looks up `name` in this scope, then in its ancestors.
    ///
    /// # Errors
    /// Returns [`RuntimeError::UndefinedVariable`] when no scope in the
    /// chain has a binding for `name`.
    pub fn get(&self, name: &str) -> EvalResult<Value> {
        if let Some(value) = self.variables.get(name) {
            return Ok(value.clone());
        }

        match &self.parent {
            Some(parent) => parent.borrow().get(name),
            None => Err(RuntimeError::UndefinedVariable { name: name.to_string() }),
        }
    }

    /// Rebinds `name` in the nearest scope that already has it; when no
    /// scope in the chain does, creates the binding in this scope.
    ///
    /// Loop bodies and branches can therefore mutate enclosing bindings
    /// without any declaration form. This is the intended semantics.
    pub fn assign(&mut self, name: &str, value: Value) {
        if self.try_assign(name, &value) {
            return;
        }
        self.define(name, value);
    }

    /// Attempts to rebind an existing binding somewhere in the chain.
    /// Returns `false` when no scope has one.
    fn try_assign(&mut self, name: &str, value: &Value) -> bool {
        if let Some(slot) = self.variables.get_mut(name) {
            *slot = value.clone();
            return true;
        }

        match &self.parent {
            Some(parent) => parent.borrow_mut().try_assign(name, value),
            None => false,
        }
    }

    /// Returns `true` when `name` is bound in this scope or any ancestor.
    #[must_use]
    pub fn exists(&self, name: &str) -> bool {
        if self.variables.contains_key(name) {
            return true;
        }
        self.parent
            .as_ref()
            .is_some_and(|parent| parent.borrow().exists(name))
    }
}
