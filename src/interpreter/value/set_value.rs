use std::{
    collections::{HashSet, hash_map::DefaultHasher},
    fmt::{self, Display},
    hash::{Hash, Hasher},
};

use crate::interpreter::value::core::Value;

/// A finite set of values.
///
/// Elements are unique by [`Value`] equality and iterate in the order they
/// were first inserted. Two sets are equal when they hold the same elements,
/// regardless of order.
#[derive(Debug, Clone, Default)]
pub struct SetValue {
    elements: Vec<Value>,
    index:    HashSet<Value>,
}

impl SetValue {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `value` unless an equal element is already present.
    ///
    /// Returns whether the value was added.
    pub fn insert(&mut self, value: Value) -> bool {
        if self.index.contains(&value) {
            return false;
        }
        self.index.insert(value.clone());
        self.elements.push(value);
        true
    }

    /// Membership test by value equality.
    #[must_use]
    pub fn contains(&self, value: &Value) -> bool {
        self.index.contains(value)
    }

    /// Number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Whether the set has no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Iterates elements in first-insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.elements.iter()
    }

    /// Elements of `self` followed by the elements of `other` not already
    /// present.
    ///
    /// # Example
    /// ```
    /// use setta::interpreter::value::{core::Value, set_value::SetValue};
    ///
    /// let a: SetValue = [1.0, 2.0].map(Value::from).into_iter().collect();
    /// let b: SetValue = [2.0, 3.0].map(Value::from).into_iter().collect();
    ///
    /// assert_eq!(a.union(&b).to_string(), "{1,2,3}");
    /// ```
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        self.iter().chain(other.iter()).cloned().collect()
    }

    /// Elements of `self` that are also in `other`, in `self`'s order.
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        self.iter().filter(|v| other.contains(v)).cloned().collect()
    }

    /// Whether every element of `self` is in `other`.
    #[must_use]
    pub fn is_subset(&self, other: &Self) -> bool {
        self.iter().all(|v| other.contains(v))
    }
}

impl FromIterator<Value> for SetValue {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        let mut set = Self::new();
        for value in iter {
            set.insert(value);
        }
        set
    }
}

impl<'a> IntoIterator for &'a SetValue {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl PartialEq for SetValue {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.is_subset(other)
    }
}

impl Eq for SetValue {}

impl Hash for SetValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let combined = self.iter()
                           .map(|item| {
                               let mut hasher = DefaultHasher::new();
                               item.hash(&mut hasher);
                               hasher.finish()
                           })
                           .fold(0u64, u64::wrapping_add);
        self.len().hash(state);
        combined.hash(state);
    }
}

impl Display for SetValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{value}")?;
        }
        write!(f, "}}")
    }
}
