//! Function values
//!
//! Functions are descriptors only; they can be tested for type and
//! compared, not invoked.

use crate::comparator::EqualityComparator;
use crate::operators::comparison::ValueComparator;
use crate::operators::model::ValueModel;
use octofhir_feel_types::FeelType;

#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultFunctionType {
    comparator: ValueComparator,
}

impl DefaultFunctionType {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ValueModel for DefaultFunctionType {
    fn feel_type(&self) -> FeelType {
        FeelType::Function
    }

    fn equality(&self) -> &dyn EqualityComparator {
        &self.comparator
    }
}
