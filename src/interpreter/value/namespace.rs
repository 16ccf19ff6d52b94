use indexmap::IndexMap;

use crate::interpreter::value::core::Value;

/// The flat mapping from variable names to values for one run.
///
/// Entries keep their first insertion order, which is the order `@trace` and
/// the command line report them in. Reading a name that was never assigned
/// yields the integer zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Namespace {
    values: IndexMap<String, Value>,
}

impl Namespace {
    /// Creates an empty namespace.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up a variable, falling back to `Integer(0)` when it is unset.
    ///
    /// # Example
    /// ```
    /// use whilelang::interpreter::value::{core::Value, namespace::Namespace};
    ///
    /// let mut namespace = Namespace::new();
    /// assert_eq!(namespace.get_or_default("x"), Value::from(0));
    ///
    /// namespace.insert("x", Value::from(true));
    /// assert_eq!(namespace.get_or_default("x"), Value::from(true));
    /// ```
    #[must_use]
    pub fn get_or_default(&self, name: &str) -> Value {
        self.values.get(name).cloned().unwrap_or_default()
    }

    /// Returns the value bound to `name`, if any.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    /// Binds `name` to `value`, overwriting any previous binding in place.
    pub fn insert(&mut self, name: impl Into<String>, value: Value) {
        self.values.insert(name.into(), value);
    }

    /// Removes every binding.
    pub fn clear(&mut self) {
        self.values.clear();
    }

    /// Iterates over the bindings in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values.iter().map(|(name, value)| (name.as_str(), value))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, Value)> for Namespace {
    fn from_iter<T: IntoIterator<Item = (S, Value)>>(iter: T) -> Self {
        Self { values: iter.into_iter().map(|(name, value)| (name.into(), value)).collect() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overwriting_keeps_the_original_position() {
        let mut namespace = Namespace::new();
        namespace.insert("b", Value::from(1));
        namespace.insert("a", Value::from(2));
        namespace.insert("b", Value::from(3));

        let names: Vec<&str> = namespace.iter().map(|(name, _)| name).collect();
        assert_eq!(names, ["b", "a"]);
        assert_eq!(namespace.get("b"), Some(&Value::from(3)));
    }

    #[test]
    fn clear_empties_the_namespace() {
        let mut namespace: Namespace = [("x", Value::from(5))].into_iter().collect();
        assert_eq!(namespace.len(), 1);

        namespace.clear();
        assert!(namespace.is_empty());
        assert_eq!(namespace.get("x"), None);
    }
}
