//! The calculator's fixed operator library.

pub mod arithmetic;
pub mod constants;
pub mod functions;

use crate::types::{operators_to_map, OperatorDefinition, OperatorMap};
use std::sync::Arc;

/// All operators combined.
pub fn all_operators() -> Vec<Arc<OperatorDefinition>> {
    let mut ops = Vec::new();
    ops.extend(arithmetic::operators());
    ops.extend(functions::operators());
    ops.extend(constants::operators());
    ops
}

/// Build the operator map from all operators.
pub fn operators_map() -> OperatorMap {
    operators_to_map(all_operators())
}
