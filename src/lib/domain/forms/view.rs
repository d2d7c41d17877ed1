//! Form view

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

/// Variables handed to the template rendering a form field
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct FormView {
    /// The view variables
    pub vars: BTreeMap<String, Value>,
}

impl FormView {
    /// Creates an empty view
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a view variable, replacing any previous value
    pub fn set(&mut self, name: &str, value: impl Into<Value>) {
        self.vars.insert(name.to_string(), value.into());
    }

    /// Gets a view variable
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.vars.get(name)
    }
}
