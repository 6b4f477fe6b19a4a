use crate::error::CalcError;
use std::collections::HashMap;

/// Variable store.
///
/// A name that is absent has no value, which is a different state from a
/// name bound to `0`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Vars {
    vars: HashMap<String, f64>,
}

impl Vars {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value for `name`, or `None` if it is not set.
    pub fn get(&self, name: &str) -> Option<f64> {
        self.vars.get(name).copied()
    }

    /// Binds `name` to `value`. Binding `None` removes the variable.
    pub fn set(&mut self, name: &str, value: Option<f64>) -> Result<(), CalcError> {
        if name.is_empty() {
            return Err(CalcError::InvalidVarname);
        }
        match value {
            Some(v) => {
                self.vars.insert(name.to_string(), v);
            }
            None => {
                self.vars.remove(name);
            }
        }
        Ok(())
    }

    pub fn has(&self, name: &str) -> bool {
        self.vars.contains_key(name)
    }

    /// Deletes a named variable. Returns false if it was not set.
    pub fn del(&mut self, name: &str) -> bool {
        self.vars.remove(name).is_some()
    }

    pub fn clear(&mut self) {
        self.vars.clear();
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}
