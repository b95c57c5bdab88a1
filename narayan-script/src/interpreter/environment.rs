use rustc_hash::FxHashMap;

use super::value::Value;

/// Variable store of one interpreter run. Assignment overwrites.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environment {
    variables: FxHashMap<String, Value>,
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.variables.get(name)
    }

    pub fn assign(&mut self, name: impl Into<String>, value: Value) {
        self.variables.insert(name.into(), value);
    }

    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Bindings ordered by name, for stable dumps.
    pub fn iter_sorted(&self) -> Vec<(&str, &Value)> {
        let mut bindings: Vec<_> = self
            .variables
            .iter()
            .map(|(name, value)| (name.as_str(), value))
            .collect();
        bindings.sort_by_key(|(name, _)| *name);
        bindings
    }
}
