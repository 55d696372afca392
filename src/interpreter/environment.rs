use std::collections::HashMap;

use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, lexer::Token, value::core::Value},
};

/// Flat table of variable bindings.
///
/// One environment lives for a whole run (or REPL session). There are no
/// nested scopes.
#[derive(Debug, Default, Clone)]
pub struct Environment {
    values: HashMap<String, Value>,
}

impl Environment {
    /// Creates an empty environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `name` to `value`, replacing any existing binding.
    pub fn define(&mut self, name: &str, value: Value) {
        self.values.insert(name.to_string(), value);
    }

    /// Looks up the value bound to `name`.
    ///
    /// # Errors
    /// Returns `UndefinedName` at the token's line if the name is unbound.
    pub fn get(&self, name: &Token) -> EvalResult<Value> {
        self.values
            .get(&name.lexeme)
            .cloned()
            .ok_or_else(|| undefined(name))
    }

    /// Replaces the value of an existing binding.
    ///
    /// # Errors
    /// Returns `UndefinedName` at the token's line if the name is unbound;
    /// the environment is left unchanged.
    pub fn assign(&mut self, name: &Token, value: Value) -> EvalResult<()> {
        match self.values.get_mut(&name.lexeme) {
            Some(slot) => {
                *slot = value;
                Ok(())
            },
            None => Err(undefined(name)),
        }
    }

    /// Whether `name` is bound.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }
}

fn undefined(name: &Token) -> RuntimeError {
    RuntimeError::UndefinedName { name: name.lexeme.clone(),
                                  line: name.line, }
}
