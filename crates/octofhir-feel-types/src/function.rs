//! Function values
//!
//! Function values are descriptors only: a name and parameter names. They
//! can be tested for type and identity but are never invoked here.

use std::fmt;

/// Descriptor of a FEEL function value
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FeelFunction {
    name: String,
    parameters: Vec<String>,
}

impl FeelFunction {
    pub fn new<P: Into<String>>(name: impl Into<String>, parameters: impl IntoIterator<Item = P>) -> Self {
        Self {
            name: name.into(),
            parameters: parameters.into_iter().map(Into::into).collect(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parameters(&self) -> &[String] {
        &self.parameters
    }

    pub fn arity(&self) -> usize {
        self.parameters.len()
    }
}

impl fmt::Display for FeelFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "function {}({})", self.name, self.parameters.join(", "))
    }
}
