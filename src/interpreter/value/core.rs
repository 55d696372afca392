use std::{
    fmt::{self, Display},
    hash::{Hash, Hasher},
    rc::Rc,
};

use ordered_float::OrderedFloat;

use crate::{
    ast::LiteralValue,
    interpreter::{evaluator::function::core::Builtin, value::set_value::SetValue},
};

/// Represents a runtime value in the interpreter.
///
/// This enum models all the values an expression can produce. Sets are shared
/// behind an `Rc` since they are never mutated once built.
#[derive(Debug, Clone)]
pub enum Value {
    /// A numeric value (double precision floating-point).
    Number(f64),
    /// A boolean value (`true` or `false`).
    Bool(bool),
    /// A string of text.
    Str(String),
    /// A finite set of values, possibly heterogeneous or nested.
    Set(Rc<SetValue>),
    /// A builtin function such as `max`.
    Callable(&'static Builtin),
    /// The absence of a value.
    Nil,
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<SetValue> for Value {
    fn from(set: SetValue) -> Self {
        Self::Set(Rc::new(set))
    }
}

impl From<&LiteralValue> for Value {
    fn from(literal: &LiteralValue) -> Self {
        match literal {
            LiteralValue::Number(n) => Self::Number(*n),
            LiteralValue::Bool(b) => Self::Bool(*b),
            LiteralValue::Str(s) => Self::Str(s.clone()),
        }
    }
}

impl Value {
    /// Coerces the value to a boolean.
    ///
    /// `nil` is false, a boolean is itself and an empty set is false.
    /// Everything else, including the number zero, is true.
    ///
    /// ## Example
    /// ```
    /// use setta::interpreter::value::{core::Value, set_value::SetValue};
    ///
    /// assert!(!Value::Nil.is_truthy());
    /// assert!(!Value::from(SetValue::new()).is_truthy());
    /// assert!(Value::from(0.0).is_truthy());
    /// ```
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Nil => false,
            Self::Bool(b) => *b,
            Self::Set(set) => !set.is_empty(),
            Self::Number(_) | Self::Str(_) | Self::Callable(_) => true,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Number(a), Self::Number(b)) => OrderedFloat(*a) == OrderedFloat(*b),
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Str(a), Self::Str(b)) => a == b,
            (Self::Set(a), Self::Set(b)) => a == b,
            (Self::Callable(a), Self::Callable(b)) => a.name == b.name,
            (Self::Nil, Self::Nil) => true,
            _ => false,
        }
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Self::Number(n) => {
                state.write_u8(0);
                OrderedFloat(*n).hash(state);
            },
            Self::Bool(b) => {
                state.write_u8(1);
                b.hash(state);
            },
            Self::Str(s) => {
                state.write_u8(2);
                s.hash(state);
            },
            Self::Set(set) => {
                state.write_u8(3);
                set.hash(state);
            },
            Self::Callable(builtin) => {
                state.write_u8(4);
                builtin.name.hash(state);
            },
            Self::Nil => state.write_u8(5),
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Str(s) => write!(f, "{s}"),
            Self::Set(set) => write!(f, "{set}"),
            Self::Callable(builtin) => write!(f, "<builtin {}>", builtin.name),
            Self::Nil => write!(f, "nil"),
        }
    }
}
